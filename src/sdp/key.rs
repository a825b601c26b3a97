use crate::sdp::field::{FieldKind, FieldValue};
use crate::sdp::sdp_error::FieldError;
use crate::sdp::util::{check_single_line, check_token};
use std::{fmt, str::FromStr};

/// `k=` encryption key: `<method>` or `<method>:<encryption key>`.
///
/// Methods defined by RFC 4566 are `clear`, `base64`, `uri` and `prompt`;
/// others are carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    method: String,
    key: Option<String>,
}

impl Key {
    pub fn new<M: Into<String>, K: Into<Option<String>>>(method: M, key: K) -> Self {
        Self {
            method: method.into(),
            key: key.into(),
        }
    }

    /// `k=prompt`: the key is obtained from the user.
    pub fn prompt() -> Self {
        Self {
            method: "prompt".to_string(),
            key: None,
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn set_method(&mut self, method: impl Into<String>) {
        self.method = method.into();
    }

    pub fn set_key<K: Into<Option<String>>>(&mut self, key: K) {
        self.key = key.into();
    }
}

impl FromStr for Key {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some(("", _)) => Err(FieldError::Missing("k= method")),
            Some((method, key)) => Ok(Self::new(method, Some(key.to_owned()))),
            None if s.is_empty() => Err(FieldError::Missing("k= method")),
            None => Ok(Self::new(s, None::<String>)),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            Some(k) => write!(f, "{}:{}", self.method, k),
            None => f.write_str(&self.method),
        }
    }
}

impl FieldValue for Key {
    const KIND: FieldKind = FieldKind::Key;

    fn validate(&self) -> Result<(), FieldError> {
        check_token(&self.method, "k= method")?;
        if self.method.contains(':') {
            return Err(FieldError::Invalid("k= method"));
        }
        match &self.key {
            Some(k) => check_single_line(k, "k= key"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::Key;
    use crate::sdp::field::FieldValue;
    use crate::sdp::sdp_error::FieldError;

    #[test]
    fn parses_method_with_and_without_key() {
        let k: Key = "clear:s3cr3t".parse().unwrap();
        assert_eq!(k.method(), "clear");
        assert_eq!(k.key(), Some("s3cr3t"));

        let p: Key = "prompt".parse().unwrap();
        assert_eq!(p, Key::prompt());
        assert_eq!(p.to_string(), "prompt");
    }

    #[test]
    fn uri_keys_keep_their_colons() {
        let k: Key = "uri:https://keys.example.com/k1".parse().unwrap();
        assert_eq!(k.method(), "uri");
        assert_eq!(k.key(), Some("https://keys.example.com/k1"));
        assert_eq!(k.to_string(), "uri:https://keys.example.com/k1");
    }

    #[test]
    fn rejects_missing_method() {
        assert_eq!("".parse::<Key>(), Err(FieldError::Missing("k= method")));
        assert_eq!(":abc".parse::<Key>(), Err(FieldError::Missing("k= method")));
    }

    #[test]
    fn validate_checks_method_and_key() {
        let mut k = Key::new("base64", Some("QUJD".to_string()));
        assert!(k.validate().is_ok());
        k.set_key(Some("QU\nJD".to_string()));
        assert_eq!(k.validate(), Err(FieldError::LineBreak("k= key")));
        k.set_key(None::<String>);
        k.set_method("");
        assert_eq!(k.validate(), Err(FieldError::Invalid("k= method")));
    }
}
