use std::ops::Range;

pub const OP_OFFSET: usize = 0;
pub const HARDWARE_TYPE_OFFSET: usize = 1;
pub const HARDWARE_LEN_OFFSET: usize = 2;
pub const HOPS_OFFSET: usize = 3;
pub const TRANSACTION_ID_RANGE: Range<usize> = 4..8;
pub const SECONDS_RANGE: Range<usize> = 8..10;
pub const FLAGS_RANGE: Range<usize> = 10..12;
pub const CLIENT_ADDR_RANGE: Range<usize> = 12..16;
pub const YOUR_ADDR_RANGE: Range<usize> = 16..20;
pub const SERVER_ADDR_RANGE: Range<usize> = 20..24;
pub const GATEWAY_ADDR_RANGE: Range<usize> = 24..28;
pub const CLIENT_HW_ADDR_RANGE: Range<usize> = 28..44;
pub const SERVER_NAME_RANGE: Range<usize> = 44..108;
pub const BOOT_FILE_RANGE: Range<usize> = 108..236;
pub const HEADER_LEN: usize = 236;
pub const VENDOR_AREA_OFFSET: usize = HEADER_LEN;

pub const MAGIC_COOKIE: [u8; 4] = [99, 130, 83, 99];

pub const OP_REQUEST: u8 = 1;
pub const OP_REPLY: u8 = 2;

pub const HTYPE_ETHERNET: u8 = 1;
pub const HTYPE_IEEE802: u8 = 6;
pub const HTYPE_FDDI: u8 = 8;

pub const FLAG_BROADCAST: u16 = 0x8000;

pub const SERVER_PORT: u16 = 67;
pub const CLIENT_PORT: u16 = 68;
