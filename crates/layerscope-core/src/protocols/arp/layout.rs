use std::ops::Range;

pub const HARDWARE_TYPE_RANGE: Range<usize> = 0..2;
pub const PROTOCOL_TYPE_RANGE: Range<usize> = 2..4;
pub const HARDWARE_LEN_OFFSET: usize = 4;
pub const PROTOCOL_LEN_OFFSET: usize = 5;
pub const OPERATION_RANGE: Range<usize> = 6..8;
pub const FIXED_LEN: usize = 8;

pub const HARDWARE_ETHERNET: u16 = 1;

pub const OP_REQUEST: u16 = 1;
pub const OP_REPLY: u16 = 2;
pub const OP_REVERSE_REQUEST: u16 = 3;
pub const OP_REVERSE_REPLY: u16 = 4;
