use std::ops::Range;

pub const DESTINATION_RANGE: Range<usize> = 0..6;
pub const SOURCE_RANGE: Range<usize> = 6..12;
pub const ETHER_TYPE_RANGE: Range<usize> = 12..14;
pub const HEADER_LEN: usize = 14;

pub const ETHERTYPE_IPV4: u16 = 0x0800;
pub const ETHERTYPE_ARP: u16 = 0x0806;
pub const ETHERTYPE_RARP: u16 = 0x8035;
pub const ETHERTYPE_VLAN: u16 = 0x8100;
pub const ETHERTYPE_IPV6: u16 = 0x86dd;
