//! ARP and reverse-ARP packets (RFC 826 / RFC 903).
//!
//! Both share one wire format; the ether type only changes how the dissector
//! titles the layer. Address lengths come from the packet itself, so the
//! minimum size is known only after the fixed 8-byte prefix is read.

pub mod layout;
pub mod parser;

pub use parser::{ArpPacket, operation_name, parse_arp};
