use thiserror::Error;

/// Decode failures local to a single frame.
///
/// None of these abort a capture run: the dissector turns them into notes on
/// the layer where they happened and moves on to the next frame.
///
/// # Examples
/// ```
/// use layerscope_core::DecodeError;
///
/// let err = DecodeError::BufferTooShort {
///     layer: "UDP",
///     needed: 8,
///     actual: 3,
/// };
/// assert!(err.to_string().contains("need 8 bytes"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("{layer} header too short: need {needed} bytes, got {actual}")]
    BufferTooShort {
        layer: &'static str,
        needed: usize,
        actual: usize,
    },
    #[error("{layer} declares invalid length {declared}")]
    InvalidHeaderLength { layer: &'static str, declared: usize },
    #[error("unsupported IP version {version}")]
    UnsupportedVersion { version: u8 },
    #[error("option {tag} at offset {offset} truncated: need {needed} bytes, {available} available")]
    TruncatedOption {
        tag: u8,
        offset: usize,
        needed: usize,
        available: usize,
    },
    #[error("unknown option tag {tag}")]
    UnknownTag { tag: u8 },
    #[error("unknown {layer} protocol {value:#06x}")]
    UnknownProtocol { layer: &'static str, value: u32 },
}
