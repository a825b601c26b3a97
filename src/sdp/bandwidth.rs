use crate::sdp::field::{FieldKind, FieldValue};
use crate::sdp::keyed::Keyed;
use crate::sdp::sdp_error::FieldError;
use crate::sdp::util::check_token;
use std::{fmt, str::FromStr};

/// Represents the `b=` line of a session or media description.
///
/// - `bwtype`: bandwidth type (for example `"AS"` for Application-Specific).
/// - `bandwidth`: bandwidth value in kbps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bandwidth {
    bwtype: String,
    bandwidth: u64,
}

impl Bandwidth {
    /// Full constructor.
    ///
    /// # Example
    /// ```rust
    /// use rustysdp::sdp::Bandwidth;
    /// let b = Bandwidth::new("AS", 512);
    /// assert_eq!(b.to_string(), "AS:512");
    /// ```
    pub fn new(bwtype: impl Into<String>, bandwidth: u64) -> Self {
        Self {
            bwtype: bwtype.into(),
            bandwidth,
        }
    }

    /// `AS:0`.
    pub fn new_blank() -> Self {
        Self {
            bwtype: "AS".to_string(),
            bandwidth: 0,
        }
    }

    // --- GETTERS ---
    pub fn bwtype(&self) -> &str {
        &self.bwtype
    }

    /// Value in kilobits per second.
    pub const fn bandwidth(&self) -> u64 {
        self.bandwidth
    }

    // --- SETTERS ---
    pub fn set_bwtype(&mut self, bwtype: impl Into<String>) {
        self.bwtype = bwtype.into();
    }

    pub const fn set_bandwidth(&mut self, bandwidth: u64) {
        self.bandwidth = bandwidth;
    }
}

impl FromStr for Bandwidth {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (typ, val) = s.split_once(':').ok_or(FieldError::Invalid("b="))?;
        Ok(Self::new(typ.to_owned(), val.trim().parse::<u64>()?))
    }
}

impl fmt::Display for Bandwidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.bwtype(), self.bandwidth())
    }
}

impl FieldValue for Bandwidth {
    const KIND: FieldKind = FieldKind::Bandwidth;

    fn validate(&self) -> Result<(), FieldError> {
        check_token(&self.bwtype, "b= bwtype")?;
        if self.bwtype.contains(':') {
            return Err(FieldError::Invalid("b= bwtype"));
        }
        Ok(())
    }
}

impl Keyed for Bandwidth {
    type Value = u64;

    fn entry_key(&self) -> &str {
        &self.bwtype
    }

    fn update(&mut self, value: u64) {
        self.bandwidth = value;
    }
}
