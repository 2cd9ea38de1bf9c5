use tracing::{debug, trace};

use crate::protocols::error::DecodeError;
use crate::record::Tier;

use super::layout;
use super::table::{WidthRule, lookup, width_of};
use super::value::{DecodedValue, interpret};

/// Position of one TLV record inside the option area. Borrows nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionRecord {
    pub tag: u8,
    /// `None` for PAD and END, which have no length byte.
    pub length: Option<u8>,
    pub value_offset: usize,
    pub value_length: usize,
}

/// A record that decoded into a typed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry<'a> {
    pub record: OptionRecord,
    pub label: &'static str,
    pub tier: Tier,
    pub value: DecodedValue<'a>,
}

impl OptionEntry<'_> {
    pub fn tag(&self) -> u8 {
        self.record.tag
    }
}

/// A well-formed record stepped over without producing an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedOption {
    pub record: OptionRecord,
    pub reason: DecodeError,
}

/// Why the scan ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanStop {
    /// END tag found at `offset`.
    End { offset: usize },
    /// Ran off the end of the area without an END tag.
    Exhausted,
    /// A record did not fit in the area; everything before it was kept.
    Truncated(DecodeError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionScan<'a> {
    pub entries: Vec<OptionEntry<'a>>,
    pub skipped: Vec<SkippedOption>,
    pub stop: ScanStop,
}

/// Walk the DHCP option area (the bytes after the magic cookie).
///
/// Reads never leave `area`. A record whose length byte or value would run
/// past the end stops the scan with `ScanStop::Truncated`; the entries
/// decoded before it are returned unchanged.
pub fn decode_options(area: &[u8]) -> OptionScan<'_> {
    let mut entries = Vec::new();
    let mut skipped = Vec::new();
    let mut cursor = 0usize;

    let stop = loop {
        let Some(&tag) = area.get(cursor) else {
            break ScanStop::Exhausted;
        };
        if tag == layout::END_TAG {
            break ScanStop::End { offset: cursor };
        }
        let width = width_of(tag);
        if width == WidthRule::Single {
            cursor += width.advance(0);
            continue;
        }

        let Some(&len) = area.get(cursor + layout::LENGTH_OFFSET) else {
            let err = DecodeError::TruncatedOption {
                tag,
                offset: cursor,
                needed: layout::VALUE_OFFSET,
                available: area.len() - cursor,
            };
            debug!(%err, "option length byte missing");
            break ScanStop::Truncated(err);
        };
        let value_offset = cursor + layout::VALUE_OFFSET;
        let value_end = value_offset + usize::from(len);
        let Some(value) = area.get(value_offset..value_end) else {
            let err = DecodeError::TruncatedOption {
                tag,
                offset: cursor,
                needed: width.advance(len),
                available: area.len() - cursor,
            };
            debug!(%err, "option value overruns area");
            break ScanStop::Truncated(err);
        };

        let record = OptionRecord {
            tag,
            length: Some(len),
            value_offset,
            value_length: value.len(),
        };
        match lookup(tag) {
            None => {
                trace!(tag, len, "unknown option skipped");
                skipped.push(SkippedOption {
                    record,
                    reason: DecodeError::UnknownTag { tag },
                });
            }
            Some(spec) => {
                let decoded = if width.accepts(len) {
                    interpret(spec.kind, value)
                } else {
                    None
                };
                match decoded {
                    Some(value) => entries.push(OptionEntry {
                        record,
                        label: spec.label,
                        tier: spec.tier,
                        value,
                    }),
                    None => {
                        debug!(tag, len, label = spec.label, "option value does not fit its kind");
                        skipped.push(SkippedOption {
                            record,
                            reason: DecodeError::InvalidHeaderLength {
                                layer: spec.label,
                                declared: value.len(),
                            },
                        });
                    }
                }
            }
        }
        cursor += width.advance(len);
    };

    OptionScan {
        entries,
        skipped,
        stop,
    }
}
