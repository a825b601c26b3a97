use crate::sdp::field::{FieldKind, FieldValue};
use crate::sdp::port_spec::PortSpec;
use crate::sdp::sdp_error::FieldError;
use crate::sdp::util::check_token;
use std::{fmt, str::FromStr};

/// Enum representing the possible media types in an SDP `m=` line.
///
/// The standard values are `Audio`, `Video`, `Text`, `Application`, and `Message`.
/// For non-standard media, use `Other(String)`. [`Media`] normalizes an
/// `Other` holding a standard name to the matching variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Video,
    Text,
    Application,
    Message,
    Other(String),
}

impl MediaKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Text => "text",
            Self::Application => "application",
            Self::Message => "message",
            Self::Other(s) => s,
        }
    }

    /// Maps `Other("audio")` and friends to their named variant.
    #[must_use]
    pub fn normalized(self) -> Self {
        match self {
            Self::Other(s) => Self::from(s.as_str()),
            kind => kind,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for MediaKind {
    fn from(s: &str) -> Self {
        match s {
            "audio" => Self::Audio,
            "video" => Self::Video,
            "text" => Self::Text,
            "application" => Self::Application,
            "message" => Self::Message,
            other => Self::Other(other.to_string()),
        }
    }
}

/// The `m=` line: `<media> <port>[/<number of ports>] <proto> <fmt> ...`.
///
/// Only the descriptor itself; the `i=`/`c=`/`b=`/`k=`/`a=` lines that follow
/// it belong to the enclosing [`MediaDescription`](crate::sdp::MediaDescription).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    /// Media type (`Audio`, `Video`, etc.)
    kind: MediaKind,

    /// Base port and number of ports (range) using `PortSpec`.
    port: PortSpec,

    /// Transport protocol (e.g., `"RTP/AVP"`).
    proto: String,

    /// Payload formats, in wire order.
    fmts: Vec<String>,
}

impl Media {
    /// Creates a new `Media` descriptor.
    ///
    /// # Example
    /// ```rust
    /// use rustysdp::sdp::{Media, MediaKind, PortSpec};
    /// let media = Media::new(
    ///     MediaKind::Audio,
    ///     PortSpec::new(49170, None),
    ///     "RTP/AVP",
    ///     vec!["0".to_string(), "96".to_string()],
    /// );
    /// assert_eq!(media.to_string(), "audio 49170 RTP/AVP 0 96");
    /// ```
    pub fn new<K: Into<String>>(kind: MediaKind, port: PortSpec, proto: K, fmts: Vec<String>) -> Self {
        Self {
            kind: kind.normalized(),
            port,
            proto: proto.into(),
            fmts,
        }
    }

    /// Audio on port 0 with an empty protocol; fails validation until filled in.
    pub const fn new_blank() -> Self {
        Self {
            kind: MediaKind::Audio,
            port: PortSpec::new_blank(),
            proto: String::new(),
            fmts: Vec::new(),
        }
    }

    // --- GETTERS ---

    pub const fn kind(&self) -> &MediaKind {
        &self.kind
    }

    pub const fn port(&self) -> &PortSpec {
        &self.port
    }

    pub fn proto(&self) -> &str {
        &self.proto
    }

    pub fn fmts(&self) -> &[String] {
        &self.fmts
    }

    // --- SETTERS ---

    pub fn set_kind(&mut self, kind: MediaKind) {
        self.kind = kind.normalized();
    }

    pub const fn set_port(&mut self, port: PortSpec) {
        self.port = port;
    }

    pub fn set_proto<S: Into<String>>(&mut self, proto: S) {
        self.proto = proto.into();
    }

    pub fn set_fmts(&mut self, fmts: Vec<String>) {
        self.fmts = fmts;
    }

    pub fn add_fmt<S: Into<String>>(&mut self, fmt: S) {
        self.fmts.push(fmt.into());
    }
}

impl FromStr for Media {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // <media> <port>[/<num>] <proto> <fmt>...
        let mut p = s.split_whitespace();
        let kind = MediaKind::from(p.next().ok_or(FieldError::Invalid("m="))?);
        let port: PortSpec = p.next().ok_or(FieldError::Invalid("m= port"))?.parse()?;
        let proto = p.next().ok_or(FieldError::Invalid("m= proto"))?.to_owned();
        let fmts = p.map(ToOwned::to_owned).collect::<Vec<_>>();

        Ok(Self::new(kind, port, proto, fmts))
    }
}

impl fmt::Display for Media {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind, self.port, self.proto)?;
        for fmt in &self.fmts {
            write!(f, " {fmt}")?;
        }
        Ok(())
    }
}

impl FieldValue for Media {
    const KIND: FieldKind = FieldKind::Media;

    fn validate(&self) -> Result<(), FieldError> {
        check_token(self.kind.as_str(), "m= media")?;
        check_token(&self.proto, "m= proto")?;
        for fmt in &self.fmts {
            check_token(fmt, "m= fmt")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::{Media, MediaKind};
    use crate::sdp::field::FieldValue;
    use crate::sdp::port_spec::PortSpec;
    use crate::sdp::sdp_error::FieldError;

    #[test]
    fn media_kind_display_and_from() {
        assert_eq!(format!("{}", MediaKind::Audio), "audio");
        assert_eq!(format!("{}", MediaKind::Video), "video");
        assert_eq!(format!("{}", MediaKind::Text), "text");
        assert_eq!(format!("{}", MediaKind::Application), "application");
        assert_eq!(format!("{}", MediaKind::Message), "message");
        assert_eq!(format!("{}", MediaKind::Other("custom".into())), "custom");

        assert_eq!(MediaKind::from("video"), MediaKind::Video);
        // Case-sensitive
        assert_eq!(MediaKind::from("Audio"), MediaKind::Other("Audio".into()));
    }

    #[test]
    fn standard_names_in_other_are_normalized() {
        let kind = MediaKind::Other("audio".into());
        let mut m = Media::new(kind, PortSpec::new(5004, None), "RTP/AVP", vec![]);
        assert_eq!(m.kind(), &MediaKind::Audio);
        assert_eq!(m.to_string().parse::<Media>().unwrap(), m);

        m.set_kind(MediaKind::Other("video".into()));
        assert_eq!(m.kind(), &MediaKind::Video);
        m.set_kind(MediaKind::Other("x-game".into()));
        assert_eq!(m.kind(), &MediaKind::Other("x-game".into()));
    }

    #[test]
    fn parses_multi_port_line() {
        let m: Media = "video 49170/2 RTP/AVP 31 32".parse().unwrap();
        assert_eq!(m.kind(), &MediaKind::Video);
        assert_eq!(m.port(), &PortSpec::new(49170, Some(2)));
        assert_eq!(m.proto(), "RTP/AVP");
        assert_eq!(m.fmts(), ["31", "32"]);
        assert_eq!(m.to_string(), "video 49170/2 RTP/AVP 31 32");
    }

    #[test]
    fn format_list_may_be_empty() {
        let m: Media = "application 9 UDP/DTLS/SCTP".parse().unwrap();
        assert!(m.fmts().is_empty());
        assert_eq!(m.to_string(), "application 9 UDP/DTLS/SCTP");
    }

    #[test]
    fn parse_reports_the_missing_piece() {
        assert_eq!("".parse::<Media>(), Err(FieldError::Invalid("m=")));
        assert_eq!("audio".parse::<Media>(), Err(FieldError::Invalid("m= port")));
        assert_eq!(
            "audio 5004".parse::<Media>(),
            Err(FieldError::Invalid("m= proto"))
        );
        assert!(matches!("audio abc RTP/AVP 0".parse::<Media>(), Err(FieldError::ParseInt(_))));
    }

    #[test]
    fn setters_and_validate() {
        let mut m = Media::new_blank();
        assert_eq!(m.validate(), Err(FieldError::Invalid("m= proto")));

        m.set_kind(MediaKind::Video);
        m.set_port(PortSpec::new(6000, None));
        m.set_proto("RTP/AVP");
        m.set_fmts(vec!["96".into()]);
        m.add_fmt("97");
        assert!(m.validate().is_ok());
        assert_eq!(m.to_string(), "video 6000 RTP/AVP 96 97");

        m.add_fmt("9 8");
        assert_eq!(m.validate(), Err(FieldError::Invalid("m= fmt")));

        m.set_fmts(Vec::new());
        m.set_kind(MediaKind::Other(String::new()));
        assert_eq!(m.validate(), Err(FieldError::Invalid("m= media")));
    }
}
