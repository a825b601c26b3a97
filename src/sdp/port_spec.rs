use crate::sdp::sdp_error::FieldError;
use std::{fmt, str::FromStr};

/// Port specifier of an `m=` line: `<port>[/<number of ports>]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortSpec {
    base: u16,        // base port
    num: Option<u16>, // optional number of ports
}

impl PortSpec {
    pub const fn new(base: u16, num: Option<u16>) -> Self {
        Self { base, num }
    }

    /// Port 0 with no count.
    pub const fn new_blank() -> Self {
        Self { base: 0, num: None }
    }

    // --- GETTERS ---
    pub const fn base(&self) -> u16 {
        self.base
    }

    pub const fn num(&self) -> Option<u16> {
        self.num
    }

    // --- SETTERS ---
    pub const fn set_base(&mut self, base: u16) {
        self.base = base;
    }

    pub const fn set_num(&mut self, num: Option<u16>) {
        self.num = num;
    }
}

impl FromStr for PortSpec {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((base, num)) => Ok(Self::new(base.parse()?, Some(num.parse()?))),
            None => Ok(Self::new(s.parse()?, None)),
        }
    }
}

impl fmt::Display for PortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.num {
            Some(n) => write!(f, "{}/{}", self.base, n),
            None => write!(f, "{}", self.base),
        }
    }
}
