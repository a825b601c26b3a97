use crate::sdp::sdp_error::SdpError;
use crate::sdp::serializer::LineEnding;
use std::collections::HashMap;
use std::fs;
use std::str::FromStr;

/// INI-style `key = value` file with optional `[section]` headers.
///
/// Keys before the first header are globals. `#` starts a comment line and
/// surrounding double quotes are stripped from values.
#[derive(Debug, Default)]
pub struct Config {
    pub globals: HashMap<String, String>,
    pub sections: HashMap<String, HashMap<String, String>>,
}

impl Config {
    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    /// [`SdpError::Config`] if the file cannot be read.
    pub fn load(path: &str) -> Result<Self, SdpError> {
        let content = fs::read_to_string(path)
            .map_err(|e| SdpError::Config(format!("Error reading file {path}: {e}")))?;
        content.parse()
    }

    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|sec| sec.get(key))
            .map(String::as_str)
    }

    #[must_use]
    pub fn get_global(&self, key: &str) -> Option<&str> {
        self.globals.get(key).map(String::as_str)
    }

    /// Section value, then global value, then `default`.
    #[must_use]
    pub fn get_or_default<'a>(&'a self, section: &str, key: &str, default: &'a str) -> &'a str {
        self.get(section, key)
            .or_else(|| self.get_global(key))
            .unwrap_or(default)
    }
}

impl FromStr for Config {
    type Err = SdpError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let mut globals = HashMap::new();
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current_section: Option<String> = None;

        for (n, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                current_section = Some(name.trim().to_string());
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(SdpError::Config(format!(
                    "line {}: expected `key = value`, got `{line}`",
                    n + 1
                )));
            };
            let key = key.trim().to_string();
            let value = value.trim().trim_matches('"').to_string();

            match &current_section {
                None => {
                    globals.insert(key, value);
                }
                Some(sec) => {
                    sections.entry(sec.clone()).or_default().insert(key, value);
                }
            }
        }
        Ok(Self { globals, sections })
    }
}

/// Tunables of the SDP pipeline, read from the `[sdp]` section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SdpConfig {
    /// Terminator the serializer writes after each line.
    pub line_ending: LineEnding,
    /// Maximum number of `m=` sections accepted by the assembler.
    pub max_media: Option<usize>,
    /// Drop unparseable lines (with a warning) instead of failing the parse.
    pub skip_invalid_lines: bool,
}

impl SdpConfig {
    pub const SECTION: &'static str = "sdp";

    /// Extracts the `[sdp]` settings; keys that are absent keep their defaults.
    ///
    /// # Errors
    /// [`SdpError::Config`] for a value that does not parse.
    pub fn from_config(config: &Config) -> Result<Self, SdpError> {
        let mut out = Self::default();

        if let Some(v) = config.get(Self::SECTION, "line_ending") {
            out.line_ending = v.parse()?;
        }
        if let Some(v) = config.get(Self::SECTION, "max_media").filter(|v| !v.is_empty()) {
            let max = v
                .parse::<usize>()
                .map_err(|e| SdpError::Config(format!("max_media '{v}': {e}")))?;
            out.max_media = Some(max);
        }
        if let Some(v) = config.get(Self::SECTION, "skip_invalid_lines") {
            out.skip_invalid_lines = parse_bool(v)
                .ok_or_else(|| SdpError::Config(format!("skip_invalid_lines '{v}': expected true/false")))?;
        }
        Ok(out)
    }

    /// Loads a config file and extracts its `[sdp]` section.
    ///
    /// # Errors
    /// See [`Config::load`] and [`from_config`](Self::from_config).
    pub fn load(path: &str) -> Result<Self, SdpError> {
        Self::from_config(&Config::load(path)?)
    }
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Some(true),
        "false" | "no" | "0" | "off" => Some(false),
        _ => None,
    }
}
