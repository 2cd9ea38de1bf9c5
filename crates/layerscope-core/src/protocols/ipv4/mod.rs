//! IPv4 header decoding.
//!
//! The payload handed to the transport layer is bounded by the header's own
//! total-length field and by the bytes actually captured, whichever is
//! smaller. Checksums are shown, never verified.

pub mod layout;
pub mod parser;

pub use parser::{Ipv4Header, parse_ipv4, protocol_name};
