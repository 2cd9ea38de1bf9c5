use std::ops::Range;

pub const SOURCE_PORT_RANGE: Range<usize> = 0..2;
pub const DESTINATION_PORT_RANGE: Range<usize> = 2..4;
pub const LENGTH_RANGE: Range<usize> = 4..6;
pub const CHECKSUM_RANGE: Range<usize> = 6..8;
pub const HEADER_LEN: usize = 8;
