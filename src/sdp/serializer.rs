//! Canonical text output.
//!
//! Lines are written in the fixed RFC 4566 order no matter how the model
//! was built, so serializing the same model twice gives the same text.

use crate::config::SdpConfig;
use crate::sdp::field::FieldValue;
use crate::sdp::media_desc::MediaDescription;
use crate::sdp::sdp_error::{Result, SdpError};
use crate::sdp::session::SessionDescription;
use crate::sdp::time_desc::TimeDescription;
use crate::sdp::util::push_line;
use std::{fmt, str::FromStr};

/// Terminator written after every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    CrLf,
    /// Bare `\n`, accepted by many parsers but not strictly conformant.
    Lf,
}

impl LineEnding {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CrLf => "\r\n",
            Self::Lf => "\n",
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CrLf => "crlf",
            Self::Lf => "lf",
        })
    }
}

impl FromStr for LineEnding {
    type Err = SdpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "crlf" => Ok(Self::CrLf),
            "lf" => Ok(Self::Lf),
            other => Err(SdpError::Config(format!("unknown line_ending '{other}'"))),
        }
    }
}

/// Writes a [`SessionDescription`] as SDP text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Serializer {
    line_ending: LineEnding,
}

impl Serializer {
    pub const fn new(line_ending: LineEnding) -> Self {
        Self { line_ending }
    }

    pub const fn from_config(config: &SdpConfig) -> Self {
        Self::new(config.line_ending)
    }

    pub const fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Renders `sd` in canonical order:
    /// `v o s i u e* p* c b* (t r*)* z* k a* (m i c b* k a*)*`.
    /// Absent singletons are skipped.
    ///
    /// # Errors
    /// [`SdpError::FieldEncoding`] for the first payload that cannot be
    /// written as a single line. Nothing partial is returned.
    pub fn serialize(&self, sd: &SessionDescription) -> Result<String> {
        let mut out = String::new();

        self.opt(&mut out, sd.version())?;
        self.opt(&mut out, sd.origin())?;
        self.opt(&mut out, sd.session_name())?;
        self.opt(&mut out, sd.information())?;
        self.opt(&mut out, sd.uri())?;
        self.list(&mut out, sd.emails())?;
        self.list(&mut out, sd.phones())?;
        self.opt(&mut out, sd.connection())?;
        self.list(&mut out, sd.bandwidths())?;
        for td in sd.time_descriptions().unwrap_or_default() {
            self.time_description(&mut out, td)?;
        }
        self.list(&mut out, sd.zones())?;
        self.opt(&mut out, sd.key())?;
        self.list(&mut out, sd.attributes())?;
        for md in sd.media_descriptions().unwrap_or_default() {
            self.media_description(&mut out, md)?;
        }

        Ok(out)
    }

    fn time_description(&self, out: &mut String, td: &TimeDescription) -> Result<()> {
        self.line(out, td.timing())?;
        self.list(out, td.repeats())
    }

    fn media_description(&self, out: &mut String, md: &MediaDescription) -> Result<()> {
        self.line(out, md.media())?;
        self.opt(out, md.information())?;
        self.opt(out, md.connection())?;
        self.list(out, md.bandwidths())?;
        self.opt(out, md.key())?;
        self.list(out, md.attributes())
    }

    fn line<T: FieldValue>(&self, out: &mut String, value: &T) -> Result<()> {
        value.validate().map_err(|source| SdpError::FieldEncoding {
            field: format!("{}{value}", T::KIND),
            source,
        })?;
        push_line(out, format_args!("{}{value}", T::KIND), self.line_ending);
        Ok(())
    }

    fn opt<T: FieldValue>(&self, out: &mut String, value: Option<&T>) -> Result<()> {
        match value {
            Some(v) => self.line(out, v),
            None => Ok(()),
        }
    }

    fn list<T: FieldValue>(&self, out: &mut String, values: Option<&[T]>) -> Result<()> {
        for v in values.unwrap_or_default() {
            self.line(out, v)?;
        }
        Ok(())
    }
}
