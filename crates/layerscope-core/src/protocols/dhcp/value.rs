use std::borrow::Cow;
use std::fmt;
use std::net::Ipv4Addr;

use crate::protocols::common::format;

use super::structured;
use super::table::InterpreterKind;

/// Typed result of interpreting one option's value bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedValue<'a> {
    /// IPv4 addresses in wire order.
    AddressList(Vec<Ipv4Addr>),
    /// Raw bytes, borrowed from the vendor area.
    Text(&'a [u8]),
    Integer(u32),
    Named {
        code: u8,
        name: Option<&'static str>,
    },
    Structured(Vec<SubField>),
}

/// One named component of a structured option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubField {
    pub name: Cow<'static, str>,
    pub value: String,
}

impl SubField {
    pub fn new(name: impl Into<Cow<'static, str>>, value: impl fmt::Display) -> Self {
        Self {
            name: name.into(),
            value: value.to_string(),
        }
    }
}

impl fmt::Display for DecodedValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedValue::AddressList(addrs) => {
                for (idx, addr) in addrs.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{addr}")?;
                }
                Ok(())
            }
            DecodedValue::Text(bytes) => f.write_str(&text(bytes)),
            DecodedValue::Integer(value) => write!(f, "{value}"),
            DecodedValue::Named {
                name: Some(name), ..
            } => f.write_str(name),
            DecodedValue::Named { code, name: None } => write!(f, "Unknown ({code})"),
            DecodedValue::Structured(fields) => {
                for (idx, field) in fields.iter().enumerate() {
                    if idx > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{}={}", field.name, field.value)?;
                }
                Ok(())
            }
        }
    }
}

/// Printable ASCII is shown as-is (trailing NULs dropped), anything else as hex.
pub(crate) fn text(bytes: &[u8]) -> String {
    let trimmed = match bytes.iter().rposition(|&b| b != 0) {
        Some(last) => &bytes[..=last],
        None => &bytes[..0],
    };
    if trimmed.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
        String::from_utf8_lossy(trimmed).into_owned()
    } else {
        format!("0x{}", format::hex(bytes))
    }
}

/// Interpret `value` with the given kind. `None` means the bytes do not fit
/// the kind (wrong length, malformed sub-structure) and no entry is produced.
pub fn interpret(kind: InterpreterKind, value: &[u8]) -> Option<DecodedValue<'_>> {
    match kind {
        InterpreterKind::Addresses => addresses(value).map(DecodedValue::AddressList),
        InterpreterKind::Text => Some(DecodedValue::Text(value)),
        InterpreterKind::U32 => {
            let bytes: [u8; 4] = value.try_into().ok()?;
            Some(DecodedValue::Integer(u32::from_be_bytes(bytes)))
        }
        InterpreterKind::U16 => {
            let bytes: [u8; 2] = value.try_into().ok()?;
            Some(DecodedValue::Integer(u16::from_be_bytes(bytes).into()))
        }
        InterpreterKind::U8 => match value {
            [byte] => Some(DecodedValue::Integer((*byte).into())),
            _ => None,
        },
        InterpreterKind::Named(names) => match value {
            [code] => Some(DecodedValue::Named {
                code: *code,
                name: names.name(*code),
            }),
            _ => None,
        },
        InterpreterKind::Structured(extractor) => {
            structured::extract(extractor, value).map(DecodedValue::Structured)
        }
    }
}

/// One address per 4-byte group; the length must be a positive multiple of 4.
pub(crate) fn addresses(value: &[u8]) -> Option<Vec<Ipv4Addr>> {
    if value.is_empty() || value.len() % 4 != 0 {
        return None;
    }
    Some(
        value
            .chunks_exact(4)
            .map(|chunk| Ipv4Addr::new(chunk[0], chunk[1], chunk[2], chunk[3]))
            .collect(),
    )
}
