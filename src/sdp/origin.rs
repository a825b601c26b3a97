use crate::sdp::addr_type::AddrType;
use crate::sdp::field::{FieldKind, FieldValue};
use crate::sdp::sdp_error::FieldError;
use crate::sdp::util::check_token;
use std::time::{SystemTime, UNIX_EPOCH};
use std::{fmt, str::FromStr};

/// Current NTP seconds (epoch 1900) derived from `UNIX_EPOCH` (1970).
///
/// Used for the default `session_version` of a blank origin.
fn ntp_seconds() -> u64 {
    const NTP_UNIX_DIFF: u64 = 2_208_988_800;

    let unix_now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    unix_now + NTP_UNIX_DIFF
}

/// The `o=` line of a session description.
///
/// - `username`: login of the originating user, `"-"` when none.
/// - `session_id`: numeric session identifier (NTP seconds recommended).
/// - `session_version`: bumped every time the description changes.
/// - `net_type`: network type, usually `"IN"`.
/// - `addr_type`: IPv4 or IPv6.
/// - `unicast_address`: address of the originating host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    username: String,
    session_id: u64,
    session_version: u64,
    net_type: String,
    addr_type: AddrType,
    unicast_address: String,
}

impl Origin {
    /// Creates a new `Origin` with every value specified.
    ///
    /// # Example
    /// ```rust
    /// use rustysdp::sdp::{AddrType, Origin};
    /// let origin = Origin::new("alice", 12345, 12345, "IN", AddrType::IP4, "192.168.1.1");
    /// assert_eq!(origin.to_string(), "alice 12345 12345 IN IP4 192.168.1.1");
    /// ```
    pub fn new(
        username: impl Into<String>,
        session_id: u64,
        session_version: u64,
        net_type: impl Into<String>,
        addr_type: AddrType,
        unicast_address: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            session_id,
            session_version,
            net_type: net_type.into(),
            addr_type,
            unicast_address: unicast_address.into(),
        }
    }

    /// Creates an `Origin` with placeholder values.
    ///
    /// - `username` = `"-"`
    /// - `session_id` = random, kept below 2^63 so it survives signed parsers
    /// - `session_version` = current NTP seconds
    /// - `net_type` = `"IN"`
    /// - `addr_type` = `IP4`
    /// - `unicast_address` = `"127.0.0.1"`
    pub fn new_blank() -> Self {
        Self {
            username: "-".to_string(),
            session_id: rand::random::<u64>() >> 1,
            session_version: ntp_seconds(),
            net_type: "IN".to_string(),
            addr_type: AddrType::IP4,
            unicast_address: "127.0.0.1".to_string(),
        }
    }

    // ---------------- Getters ----------------

    pub fn username(&self) -> &str {
        &self.username
    }

    pub const fn session_id(&self) -> u64 {
        self.session_id
    }

    pub const fn session_version(&self) -> u64 {
        self.session_version
    }

    pub fn net_type(&self) -> &str {
        &self.net_type
    }

    pub const fn addr_type(&self) -> AddrType {
        self.addr_type
    }

    pub fn unicast_address(&self) -> &str {
        &self.unicast_address
    }

    // ---------------- Setters ----------------

    pub fn set_username<U: Into<String>>(&mut self, username: U) {
        self.username = username.into();
    }

    pub const fn set_session_id(&mut self, session_id: u64) {
        self.session_id = session_id;
    }

    pub const fn set_session_version(&mut self, session_version: u64) {
        self.session_version = session_version;
    }

    pub fn set_net_type<N: Into<String>>(&mut self, net_type: N) {
        self.net_type = net_type.into();
    }

    pub const fn set_addr_type(&mut self, addr_type: AddrType) {
        self.addr_type = addr_type;
    }

    pub fn set_unicast_address<U: Into<String>>(&mut self, unicast_address: U) {
        self.unicast_address = unicast_address.into();
    }
}

impl FromStr for Origin {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // username sess-id sess-version nettype addrtype unicast-address
        let parts: Vec<_> = s.split_whitespace().collect();
        let &[username, id, version, net_type, addr_type, address] = parts.as_slice() else {
            return Err(FieldError::Invalid("o="));
        };
        Ok(Self::new(
            username,
            id.parse::<u64>()?,
            version.parse::<u64>()?,
            net_type,
            addr_type.parse()?,
            address,
        ))
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.username,
            self.session_id,
            self.session_version,
            self.net_type,
            self.addr_type,
            self.unicast_address
        )
    }
}

impl FieldValue for Origin {
    const KIND: FieldKind = FieldKind::Origin;

    fn validate(&self) -> Result<(), FieldError> {
        check_token(&self.username, "o= username")?;
        check_token(&self.net_type, "o= nettype")?;
        check_token(&self.unicast_address, "o= address")
    }
}
