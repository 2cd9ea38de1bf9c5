//! Frame sources.
//!
//! The dissector only ever sees `PacketEvent`s; where they come from is
//! behind `PacketSource`. The crate ships one implementation, reading
//! `.pcap` and `.pcapng` capture files.

pub(crate) mod pcap;

pub use pcap::PcapFileSource;

use pcap_parser::Linktype;
use thiserror::Error;

/// One captured frame.
#[derive(Debug, Clone)]
pub struct PacketEvent {
    /// Capture timestamp in seconds since the Unix epoch.
    pub ts: Option<f64>,
    pub linktype: Linktype,
    /// Captured bytes, already cut to the record's captured length.
    pub data: Vec<u8>,
    /// Length of the frame on the wire, when the capture format records it.
    pub orig_len: Option<u32>,
}

/// Pull-based frame iterator. `Ok(None)` means the input is exhausted.
pub trait PacketSource {
    fn next_packet(&mut self) -> Result<Option<PacketEvent>, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("capture format error: {0}")]
    Pcap(String),
}

impl From<pcap::error::PcapSourceError> for SourceError {
    fn from(value: pcap::error::PcapSourceError) -> Self {
        match value {
            pcap::error::PcapSourceError::Io(err) => SourceError::Io(err),
            pcap::error::PcapSourceError::Pcap { context, message } => {
                SourceError::Pcap(format!("{context}: {message}"))
            }
        }
    }
}
