use std::fmt;

use thiserror::Error;

/// Failures while reading a capture file. Converted to `SourceError` at the
/// `PacketSource` boundary.
#[derive(Debug, Error)]
pub enum PcapSourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PCAP parse error ({context}): {message}")]
    Pcap {
        context: &'static str,
        message: String,
    },
}

impl PcapSourceError {
    pub(crate) fn pcap(context: &'static str, err: impl fmt::Display) -> Self {
        PcapSourceError::Pcap {
            context,
            message: err.to_string(),
        }
    }
}
