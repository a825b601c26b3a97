use std::num::ParseIntError;

/// Failure converting or validating the payload of a single SDP line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Missing field: {0}")]
    Missing(&'static str),
    #[error("Invalid field: {0}")]
    Invalid(&'static str),
    #[error("Parse int error: {0}")]
    ParseInt(#[from] ParseIntError),
    #[error("Invalid address type")]
    AddrType,
    /// The value contains CR or LF and cannot be written as a single line.
    #[error("line break inside {0} value")]
    LineBreak(&'static str),
    #[error("unknown field type '{0}'")]
    UnknownType(char),
}

/// Errors raised while assembling, mutating or serializing a session description.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SdpError {
    /// A field arrived before the field that opens its scope (`r=` before any `t=`).
    #[error("{0} without a preceding t= line")]
    StructuralOrder(&'static str),

    /// A field payload failed validation. `field` holds its best-effort text form.
    #[error("cannot encode field `{field}`: {source}")]
    FieldEncoding { field: String, source: FieldError },

    /// A setter received `None` where a (possibly empty) value was required.
    #[error("invalid argument: {0} must not be None")]
    InvalidArgument(&'static str),

    #[error("Missing field: {0}")]
    Missing(&'static str),

    /// A raw line could not be classified into a field.
    #[error("line {line}: {source}")]
    Parse { line: usize, source: FieldError },

    #[error("media description limit of {0} exceeded")]
    LimitExceeded(usize),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SdpError>;
