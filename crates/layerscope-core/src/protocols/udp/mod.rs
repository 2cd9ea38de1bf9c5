//! UDP header decoding.
//!
//! The UDP length field bounds the payload; anything the capture cut off is
//! simply absent from the returned slice.

pub mod layout;
pub mod parser;

pub use parser::{UdpHeader, parse_udp};
