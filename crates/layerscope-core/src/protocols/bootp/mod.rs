//! BOOTP fixed header (RFC 951) and the vendor area that follows it.
//!
//! The decoder validates the 236-byte fixed region, then hands back the
//! remainder of the UDP payload as the vendor area. Its length is whatever
//! the already-validated UDP length left over, never a constant. When the
//! area opens with the RFC 1048 magic cookie the message carries DHCP
//! options, decoded by `protocols::dhcp`.

pub mod layout;
pub mod parser;

pub use parser::{BootpMessage, hardware_type_name, op_name, parse_bootp};
