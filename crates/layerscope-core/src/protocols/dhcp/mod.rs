//! DHCP options carried in the BOOTP vendor area (RFC 2132 and friends).
//!
//! The stream is a run of tag-length-value records whose length bytes come
//! from the wire, so every step is checked against the area's bound before
//! any value byte is touched. Decoding is table-driven: `table` maps each
//! known tag to an interpreter kind, a label, a detail tier and a width rule;
//! `parser` walks the stream; `value` and `structured` turn value bytes into
//! typed results.
//!
//! A malformed record ends the scan and keeps everything decoded before it.
//! Unknown tags are stepped over using their declared length.

pub mod layout;
pub mod parser;
pub mod structured;
pub mod table;
pub mod value;

pub use parser::{OptionEntry, OptionRecord, OptionScan, ScanStop, SkippedOption, decode_options};
pub use table::{Extractor, InterpreterKind, NameSet, OptionSpec, WidthRule, lookup};
pub use value::{DecodedValue, SubField};
