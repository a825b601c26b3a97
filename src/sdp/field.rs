//! Classified SDP lines.
//!
//! A [`Field`] is one `<type>=<value>` line turned into a typed payload.
//! The set of kinds is closed: adding one forces every `match` over
//! `Field` (assembly, encoding, validation) to handle it.

use crate::sdp::attribute::Attribute;
use crate::sdp::bandwidth::Bandwidth;
use crate::sdp::connection::Connection;
use crate::sdp::key::Key;
use crate::sdp::media::Media;
use crate::sdp::origin::Origin;
use crate::sdp::sdp_error::FieldError;
use crate::sdp::text::{Email, Information, Phone, SessionName, Uri, Version};
use crate::sdp::timing::{Repeat, Timing, Zone};
use std::{fmt, str::FromStr};

/// The type letter of an SDP line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Version,
    Origin,
    SessionName,
    Information,
    Uri,
    Email,
    Phone,
    Connection,
    Bandwidth,
    Time,
    Repeat,
    Zone,
    Key,
    Attribute,
    Media,
}

impl FieldKind {
    pub const fn letter(self) -> char {
        match self {
            Self::Version => 'v',
            Self::Origin => 'o',
            Self::SessionName => 's',
            Self::Information => 'i',
            Self::Uri => 'u',
            Self::Email => 'e',
            Self::Phone => 'p',
            Self::Connection => 'c',
            Self::Bandwidth => 'b',
            Self::Time => 't',
            Self::Repeat => 'r',
            Self::Zone => 'z',
            Self::Key => 'k',
            Self::Attribute => 'a',
            Self::Media => 'm',
        }
    }

    pub const fn from_letter(c: char) -> Option<Self> {
        Some(match c {
            'v' => Self::Version,
            'o' => Self::Origin,
            's' => Self::SessionName,
            'i' => Self::Information,
            'u' => Self::Uri,
            'e' => Self::Email,
            'p' => Self::Phone,
            'c' => Self::Connection,
            'b' => Self::Bandwidth,
            't' => Self::Time,
            'r' => Self::Repeat,
            'z' => Self::Zone,
            'k' => Self::Key,
            'a' => Self::Attribute,
            'm' => Self::Media,
            _ => return None,
        })
    }

    /// Kinds that attach to the open media section when there is one.
    pub const fn is_media_level(self) -> bool {
        matches!(
            self,
            Self::Information | Self::Connection | Self::Bandwidth | Self::Key | Self::Attribute
        )
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=", self.letter())
    }
}

/// A payload that can be written as the value part of one SDP line.
pub trait FieldValue: fmt::Display {
    const KIND: FieldKind;

    /// Checks that the payload can be encoded as a single well-formed line.
    fn validate(&self) -> Result<(), FieldError> {
        Ok(())
    }
}

/// One classified SDP line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Version(Version),
    Origin(Origin),
    SessionName(SessionName),
    Information(Information),
    Uri(Uri),
    Email(Email),
    Phone(Phone),
    Connection(Connection),
    Bandwidth(Bandwidth),
    Time(Timing),
    Repeat(Repeat),
    Zone(Zone),
    Key(Key),
    Attribute(Attribute),
    Media(Media),
}

macro_rules! for_each_payload {
    ($field:expr, $p:ident => $body:expr) => {
        match $field {
            Field::Version($p) => $body,
            Field::Origin($p) => $body,
            Field::SessionName($p) => $body,
            Field::Information($p) => $body,
            Field::Uri($p) => $body,
            Field::Email($p) => $body,
            Field::Phone($p) => $body,
            Field::Connection($p) => $body,
            Field::Bandwidth($p) => $body,
            Field::Time($p) => $body,
            Field::Repeat($p) => $body,
            Field::Zone($p) => $body,
            Field::Key($p) => $body,
            Field::Attribute($p) => $body,
            Field::Media($p) => $body,
        }
    };
}

impl Field {
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Version(_) => FieldKind::Version,
            Self::Origin(_) => FieldKind::Origin,
            Self::SessionName(_) => FieldKind::SessionName,
            Self::Information(_) => FieldKind::Information,
            Self::Uri(_) => FieldKind::Uri,
            Self::Email(_) => FieldKind::Email,
            Self::Phone(_) => FieldKind::Phone,
            Self::Connection(_) => FieldKind::Connection,
            Self::Bandwidth(_) => FieldKind::Bandwidth,
            Self::Time(_) => FieldKind::Time,
            Self::Repeat(_) => FieldKind::Repeat,
            Self::Zone(_) => FieldKind::Zone,
            Self::Key(_) => FieldKind::Key,
            Self::Attribute(_) => FieldKind::Attribute,
            Self::Media(_) => FieldKind::Media,
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        for_each_payload!(self, p => p.validate())
    }

    /// Text form of the line including its CRLF terminator.
    pub fn encode(&self) -> String {
        format!("{self}\r\n")
    }

    /// Parses the value part of a line whose type letter is already known.
    pub fn parse_value(kind: FieldKind, value: &str) -> Result<Self, FieldError> {
        Ok(match kind {
            FieldKind::Version => Self::Version(value.parse()?),
            FieldKind::Origin => Self::Origin(value.parse()?),
            FieldKind::SessionName => Self::SessionName(value.parse()?),
            FieldKind::Information => Self::Information(value.parse()?),
            FieldKind::Uri => Self::Uri(value.parse()?),
            FieldKind::Email => Self::Email(value.parse()?),
            FieldKind::Phone => Self::Phone(value.parse()?),
            FieldKind::Connection => Self::Connection(value.parse()?),
            FieldKind::Bandwidth => Self::Bandwidth(value.parse()?),
            FieldKind::Time => Self::Time(value.parse()?),
            FieldKind::Repeat => Self::Repeat(value.parse()?),
            FieldKind::Zone => Self::Zone(value.parse()?),
            FieldKind::Key => Self::Key(value.parse()?),
            FieldKind::Attribute => Self::Attribute(value.parse()?),
            FieldKind::Media => Self::Media(value.parse()?),
        })
    }
}

/// `<letter>=<value>` without the terminator.
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())?;
        for_each_payload!(self, p => write!(f, "{p}"))
    }
}

/// Classifies one line. A trailing `\r` is tolerated.
impl FromStr for Field {
    type Err = FieldError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let (prefix, value) = line.split_once('=').ok_or(FieldError::Invalid("line"))?;
        let mut chars = prefix.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return Err(FieldError::Invalid("line"));
        };
        let kind = FieldKind::from_letter(letter).ok_or(FieldError::UnknownType(letter))?;
        Self::parse_value(kind, value)
    }
}

macro_rules! impl_from_payload {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Field {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_payload!(
    Version(Version),
    Origin(Origin),
    SessionName(SessionName),
    Information(Information),
    Uri(Uri),
    Email(Email),
    Phone(Phone),
    Connection(Connection),
    Bandwidth(Bandwidth),
    Time(Timing),
    Repeat(Repeat),
    Zone(Zone),
    Key(Key),
    Attribute(Attribute),
    Media(Media),
);
