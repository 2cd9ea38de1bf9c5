//! `.pcap` / `.pcapng` file source.
//!
//! The format is picked from the file's magic bytes. Link types come from the
//! legacy global header or from each pcapng Interface Description Block;
//! frames whose interface is unknown are treated as Ethernet.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use parser::PcapFileSource;
