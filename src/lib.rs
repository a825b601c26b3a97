//! RustySDP models Session Description Protocol (RFC 4566) bodies.
//!
//! Classified lines ([`sdp::Field`]) are fed to a [`sdp::SessionAssembler`],
//! which scopes each one to the session or to the media section it belongs
//! to. The resulting [`sdp::SessionDescription`] is written back out by the
//! [`sdp::Serializer`] in canonical field order.
//!
//! ```rust
//! use rustysdp::sdp::SessionDescription;
//!
//! let text = "v=0\r\no=- 1 1 IN IP4 127.0.0.1\r\ns=-\r\nt=0 0\r\n";
//! let sd: SessionDescription = text.parse().unwrap();
//! assert_eq!(sd.encode().unwrap(), text);
//! ```

/// Handles configuration loading and management.
pub mod config;
/// Logging utilities for the crate.
pub mod log;
/// SDP (Session Description Protocol) model, assembly and serialization.
pub mod sdp;

pub use config::{Config, SdpConfig};
pub use sdp::{Field, SdpError, SessionAssembler, SessionDescription};
