//! TCP header decoding, for display and port dispatch only.

pub mod layout;
pub mod parser;

pub use parser::{TcpHeader, flag_names, parse_tcp};
