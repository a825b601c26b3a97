use crate::sdp::addr_type::AddrType;
use crate::sdp::field::{FieldKind, FieldValue};
use crate::sdp::sdp_error::FieldError;
use crate::sdp::util::check_token;
use std::{fmt, str::FromStr};

/// Represents the connection information of a session or media description.
///
/// This structure corresponds to the `c=` line, indicating network type,
/// address type, and the unicast or multicast connection address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    /// Network type, usually `"IN"` (Internet)
    net_type: String,
    /// Address type: IPv4 or IPv6
    addr_type: AddrType,
    /// Connection address, e.g. `"203.0.113.1"` or multicast addresses with `/ttl`
    conn_address: String,
}

impl Connection {
    /// Creates a new connection with specified values.
    ///
    /// # Example
    /// ```rust
    /// use rustysdp::sdp::{AddrType, Connection};
    /// let conn = Connection::new("IN", AddrType::IP4, "203.0.113.1");
    /// assert_eq!(conn.to_string(), "IN IP4 203.0.113.1");
    /// ```
    pub fn new(
        net_type: impl Into<String>,
        addr_type: AddrType,
        connection_address: impl Into<String>,
    ) -> Self {
        Self {
            net_type: net_type.into(),
            addr_type,
            conn_address: connection_address.into(),
        }
    }

    /// Creates a connection with default values.
    ///
    /// - `net_type` = `"IN"`
    /// - `addr_type` = `IP4`
    /// - `connection_address` = `"127.0.0.1"`
    #[must_use]
    pub fn new_blank() -> Self {
        Self {
            net_type: "IN".to_string(),
            addr_type: AddrType::IP4,
            conn_address: "127.0.0.1".to_string(),
        }
    }

    // --- GETTERS ---

    #[must_use]
    pub fn net_type(&self) -> &str {
        &self.net_type
    }

    #[must_use]
    pub const fn addr_type(&self) -> AddrType {
        self.addr_type
    }

    /// Returns the connection address, including any `/ttl` or `/count` suffix.
    #[must_use]
    pub fn connection_address(&self) -> &str {
        &self.conn_address
    }

    // --- SETTERS ---

    pub fn set_net_type(&mut self, net_type: impl Into<String>) {
        self.net_type = net_type.into();
    }

    pub const fn set_addr_type(&mut self, addr_type: AddrType) {
        self.addr_type = addr_type;
    }

    pub fn set_connection_address(&mut self, address: impl Into<String>) {
        self.conn_address = address.into();
    }
}

impl FromStr for Connection {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // nettype addrtype address
        let parts: Vec<_> = s.split_whitespace().collect();
        let &[net_type, addr_type, address] = parts.as_slice() else {
            return Err(FieldError::Invalid("c="));
        };
        Ok(Self::new(net_type, addr_type.parse()?, address))
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.net_type(),
            self.addr_type(),
            self.connection_address()
        )
    }
}

impl FieldValue for Connection {
    const KIND: FieldKind = FieldKind::Connection;

    fn validate(&self) -> Result<(), FieldError> {
        check_token(&self.net_type, "c= nettype")?;
        check_token(&self.conn_address, "c= address")
    }
}
