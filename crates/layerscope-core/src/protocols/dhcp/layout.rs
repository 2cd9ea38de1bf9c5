pub const PAD_TAG: u8 = 0;
pub const END_TAG: u8 = 255;

pub const LENGTH_OFFSET: usize = 1;
pub const VALUE_OFFSET: usize = 2;

pub const DHCPDISCOVER: u8 = 1;
pub const DHCPOFFER: u8 = 2;
pub const DHCPREQUEST: u8 = 3;
pub const DHCPDECLINE: u8 = 4;
pub const DHCPACK: u8 = 5;
pub const DHCPNAK: u8 = 6;
pub const DHCPRELEASE: u8 = 7;
pub const DHCPINFORM: u8 = 8;

pub const OVERLOAD_FILE: u8 = 1;
pub const OVERLOAD_SNAME: u8 = 2;
pub const OVERLOAD_BOTH: u8 = 3;

pub const NODE_B: u8 = 0x1;
pub const NODE_P: u8 = 0x2;
pub const NODE_M: u8 = 0x4;
pub const NODE_H: u8 = 0x8;

pub const AGENT_CIRCUIT_ID: u8 = 1;
pub const AGENT_REMOTE_ID: u8 = 2;
pub const AGENT_LINK_SELECTION: u8 = 5;
pub const AGENT_SUBSCRIBER_ID: u8 = 6;

pub const AUTH_FIXED_LEN: usize = 3;
pub const AUTH_REPLAY_LEN: usize = 8;

pub const FQDN_FIXED_LEN: usize = 3;
pub const FQDN_FLAG_SERVER: u8 = 0x01;
pub const FQDN_FLAG_OVERRIDE: u8 = 0x02;
pub const FQDN_FLAG_ENCODED: u8 = 0x04;
pub const FQDN_FLAG_NO_UPDATE: u8 = 0x08;

pub const SIP_ENCODING_NAMES: u8 = 0;
pub const SIP_ENCODING_ADDRESSES: u8 = 1;
