use std::ops::Range;

pub const VERSION_IHL_OFFSET: usize = 0;
pub const TOS_OFFSET: usize = 1;
pub const TOTAL_LENGTH_RANGE: Range<usize> = 2..4;
pub const IDENTIFICATION_RANGE: Range<usize> = 4..6;
pub const FLAGS_FRAGMENT_RANGE: Range<usize> = 6..8;
pub const TTL_OFFSET: usize = 8;
pub const PROTOCOL_OFFSET: usize = 9;
pub const CHECKSUM_RANGE: Range<usize> = 10..12;
pub const SOURCE_RANGE: Range<usize> = 12..16;
pub const DESTINATION_RANGE: Range<usize> = 16..20;
pub const MIN_HEADER_LEN: usize = 20;

pub const VERSION: u8 = 4;
pub const FRAGMENT_OFFSET_MASK: u16 = 0x1fff;
pub const FLAG_DONT_FRAGMENT: u8 = 0b010;
pub const FLAG_MORE_FRAGMENTS: u8 = 0b001;

pub const PROTO_ICMP: u8 = 1;
pub const PROTO_IGMP: u8 = 2;
pub const PROTO_TCP: u8 = 6;
pub const PROTO_UDP: u8 = 17;
pub const PROTO_GRE: u8 = 47;
pub const PROTO_ESP: u8 = 50;
