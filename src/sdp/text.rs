//! Free-text payloads: `v=`, `s=`, `i=`, `u=`, `e=`, `p=`.

use crate::sdp::field::{FieldKind, FieldValue};
use crate::sdp::sdp_error::FieldError;
use crate::sdp::util::check_single_line;
use std::{fmt, str::FromStr};

/// `v=` protocol version. Always 0 for RFC 4566, but any number is carried through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Version(u32);

impl Version {
    pub const fn new(version: u32) -> Self {
        Self(version)
    }

    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl FromStr for Version {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FieldValue for Version {
    const KIND: FieldKind = FieldKind::Version;
}

macro_rules! text_field {
    ($(#[$doc:meta])* $name:ident, $kind:ident, $what:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Default)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn value(&self) -> &str {
                &self.0
            }

            pub fn set_value(&mut self, value: impl Into<String>) {
                self.0 = value.into();
            }
        }

        impl FromStr for $name {
            type Err = FieldError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_owned()))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FieldValue for $name {
            const KIND: FieldKind = FieldKind::$kind;

            fn validate(&self) -> Result<(), FieldError> {
                check_single_line(&self.0, $what)
            }
        }
    };
}

text_field!(
    /// `s=` session name.
    SessionName,
    SessionName,
    "s="
);
text_field!(
    /// `i=` session or media title.
    Information,
    Information,
    "i="
);
text_field!(
    /// `u=` URI pointing at more session information.
    Uri,
    Uri,
    "u="
);
text_field!(
    /// `e=` contact email, e.g. `j.doe@example.com (Jane Doe)`.
    Email,
    Email,
    "e="
);
text_field!(
    /// `p=` contact phone number, e.g. `+1 617 555-6011`.
    Phone,
    Phone,
    "p="
);
