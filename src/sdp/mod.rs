//! SDP (RFC 4566) session model, assembly and serialization.

pub mod addr_type;
pub mod assembler;
pub mod attribute;
pub mod bandwidth;
pub mod connection;
pub mod field;
pub mod key;
pub mod keyed;
pub mod media;
pub mod media_desc;
pub mod origin;
pub mod parser;
pub mod port_spec;
pub mod sdp_error;
pub mod serializer;
pub mod session;
pub mod text;
pub mod time_desc;
pub mod timing;
mod util;

pub use addr_type::AddrType;
pub use assembler::SessionAssembler;
pub use attribute::Attribute;
pub use bandwidth::Bandwidth;
pub use connection::Connection;
pub use field::{Field, FieldKind, FieldValue};
pub use key::Key;
pub use keyed::Keyed;
pub use media::{Media, MediaKind};
pub use media_desc::MediaDescription;
pub use origin::Origin;
pub use parser::{FieldParser, LineParser};
pub use port_spec::PortSpec;
pub use sdp_error::{FieldError, SdpError};
pub use serializer::{LineEnding, Serializer};
pub use session::SessionDescription;
pub use text::{Email, Information, Phone, SessionName, Uri, Version};
pub use time_desc::TimeDescription;
pub use timing::{Repeat, TimeUnit, Timing, TypedTime, Zone, ZoneAdjustment};
