//! Ethernet II framing.
//!
//! Only the 14-byte header is decoded; the ether type selects the next layer
//! in `dissect`. Trailing padding and FCS bytes are left in the payload and
//! trimmed later by the IPv4 total length.

pub mod layout;
pub mod parser;

pub use parser::{EthernetFrame, ether_type_name, parse_ethernet};
