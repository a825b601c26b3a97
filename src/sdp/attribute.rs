use crate::sdp::field::{FieldKind, FieldValue};
use crate::sdp::keyed::Keyed;
use crate::sdp::sdp_error::FieldError;
use crate::sdp::util::{check_single_line, check_token};
use std::{fmt, str::FromStr};

/// An `a=` line.
///
/// An attribute consists of a name and an optional value.
/// Common examples: `"rtpmap"`, `"fmtp"`, `"sendrecv"` (a flag, no value).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    key: String,
    value: Option<String>,
}

impl Attribute {
    /// Full constructor.
    ///
    /// - `key`: attribute name, for example `"rtpmap"`.
    /// - `value`: optional value; `None` for property attributes.
    pub fn new<K: Into<String>, V: Into<Option<String>>>(key: K, value: V) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Property attribute without a value (`a=recvonly`).
    pub fn flag<K: Into<String>>(key: K) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }

    // --- GETTERS ---
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    // --- SETTERS ---
    pub fn set_key<K: Into<String>>(&mut self, key: K) {
        self.key = key.into();
    }

    pub fn set_value<V: Into<Option<String>>>(&mut self, value: V) {
        self.value = value.into();
    }
}

impl FromStr for Attribute {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = match s.split_once(':') {
            Some((k, v)) => (k, Some(v.to_owned())),
            None => (s, None),
        };
        if key.is_empty() {
            return Err(FieldError::Missing("a= name"));
        }
        Ok(Self::new(key, value))
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "{}:{}", self.key, v),
            None => f.write_str(&self.key),
        }
    }
}

impl FieldValue for Attribute {
    const KIND: FieldKind = FieldKind::Attribute;

    fn validate(&self) -> Result<(), FieldError> {
        check_token(&self.key, "a= name")?;
        if self.key.contains(':') {
            return Err(FieldError::Invalid("a= name"));
        }
        match &self.value {
            Some(v) => check_single_line(v, "a= value"),
            None => Ok(()),
        }
    }
}

impl Keyed for Attribute {
    type Value = String;

    fn entry_key(&self) -> &str {
        &self.key
    }

    fn update(&mut self, value: String) {
        self.value = Some(value);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::Attribute;
    use crate::sdp::field::FieldValue;
    use crate::sdp::sdp_error::FieldError;

    #[test]
    fn parses_value_and_flag_forms() {
        let a: Attribute = "rtpmap:0 PCMU/8000".parse().unwrap();
        assert_eq!(a.key(), "rtpmap");
        assert_eq!(a.value(), Some("0 PCMU/8000"));

        let f: Attribute = "sendrecv".parse().unwrap();
        assert_eq!(f.key(), "sendrecv");
        assert_eq!(f.value(), None);
    }

    #[test]
    fn value_keeps_everything_after_first_colon() {
        let a: Attribute = "fingerprint:sha-256 AB:CD:EF".parse().unwrap();
        assert_eq!(a.key(), "fingerprint");
        assert_eq!(a.value(), Some("sha-256 AB:CD:EF"));
        assert_eq!(a.to_string(), "fingerprint:sha-256 AB:CD:EF");
    }

    #[test]
    fn empty_value_differs_from_flag() {
        let a: Attribute = "tool:".parse().unwrap();
        assert_eq!(a.value(), Some(""));
        assert_eq!(a.to_string(), "tool:");
        assert_eq!(Attribute::flag("tool").to_string(), "tool");
    }

    #[test]
    fn rejects_missing_name() {
        assert_eq!(
            ":value".parse::<Attribute>(),
            Err(FieldError::Missing("a= name"))
        );
    }

    #[test]
    fn setters_and_validate() {
        let mut a = Attribute::flag("rtcp-mux");
        assert!(a.validate().is_ok());

        a.set_value(Some("x\ny".to_string()));
        assert_eq!(a.validate(), Err(FieldError::LineBreak("a= value")));

        a.set_value(None::<String>);
        a.set_key("bad key");
        assert_eq!(a.validate(), Err(FieldError::Invalid("a= name")));
    }
}
