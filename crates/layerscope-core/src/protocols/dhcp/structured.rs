//! Extractors for options whose value carries its own internal layout.
//!
//! Each extractor gets exactly the option's value bytes. Nested lengths are
//! checked against that slice; a nested record that runs past the end stops
//! the extractor and keeps the sub-fields decoded so far.

use std::net::Ipv4Addr;

use tracing::trace;

use crate::protocols::bootp::hardware_type_name;
use crate::protocols::bootp::layout::HTYPE_ETHERNET;
use crate::protocols::common::format;

use super::layout;
use super::table::{Extractor, lookup};
use super::value::{SubField, addresses, text};

pub fn extract(extractor: Extractor, value: &[u8]) -> Option<Vec<SubField>> {
    match extractor {
        Extractor::ParameterRequestList => Some(parameter_request_list(value)),
        Extractor::ClientIdentifier => client_identifier(value),
        Extractor::ClientFqdn => client_fqdn(value),
        Extractor::RelayAgent => relay_agent(value),
        Extractor::Authentication => authentication(value),
        Extractor::SipServers => sip_servers(value),
    }
}

fn parameter_request_list(value: &[u8]) -> Vec<SubField> {
    value
        .iter()
        .map(|&tag| {
            let label = lookup(tag).map_or("Unknown", |spec| spec.label);
            SubField::new(format!("Option {tag}"), label)
        })
        .collect()
}

fn client_identifier(value: &[u8]) -> Option<Vec<SubField>> {
    let (&kind, id) = value.split_first()?;
    let kind_name = match hardware_type_name(kind) {
        Some(name) => name.to_string(),
        None if kind == 0 => "Opaque".to_string(),
        None => format!("Unknown ({kind})"),
    };
    let id = if kind == HTYPE_ETHERNET && id.len() == 6 {
        format::hw_addr(id)
    } else if kind == 0 {
        text(id)
    } else {
        format!("0x{}", format::hex(id))
    };
    Some(vec![SubField::new("Type", kind_name), SubField::new("Identifier", id)])
}

fn client_fqdn(value: &[u8]) -> Option<Vec<SubField>> {
    if value.len() < layout::FQDN_FIXED_LEN {
        return None;
    }
    let flags = value[0];
    let name = &value[layout::FQDN_FIXED_LEN..];

    let mut flag_names = Vec::new();
    for (bit, flag) in [
        (layout::FQDN_FLAG_SERVER, "S"),
        (layout::FQDN_FLAG_OVERRIDE, "O"),
        (layout::FQDN_FLAG_ENCODED, "E"),
        (layout::FQDN_FLAG_NO_UPDATE, "N"),
    ] {
        if flags & bit != 0 {
            flag_names.push(flag);
        }
    }
    let flags_value = if flag_names.is_empty() {
        format!("{flags:#04x}")
    } else {
        format!("{flags:#04x} ({})", flag_names.join(","))
    };

    let name = if flags & layout::FQDN_FLAG_ENCODED != 0 {
        match wire_names(name) {
            Some(names) => names.join(", "),
            None => format!("0x{}", format::hex(name)),
        }
    } else {
        text(name)
    };

    Some(vec![
        SubField::new("Flags", flags_value),
        SubField::new("RCODE1", value[1]),
        SubField::new("RCODE2", value[2]),
        SubField::new("Domain name", name),
    ])
}

fn relay_agent(value: &[u8]) -> Option<Vec<SubField>> {
    if value.is_empty() {
        return None;
    }
    let mut fields = Vec::new();
    let mut rest = value;
    while let [code, len, tail @ ..] = rest {
        let Some((body, next)) = tail.split_at_checked(usize::from(*len)) else {
            trace!(code, len, available = tail.len(), "relay agent sub-option truncated");
            break;
        };
        let field = match *code {
            layout::AGENT_CIRCUIT_ID => SubField::new("Circuit ID", format::hex(body)),
            layout::AGENT_REMOTE_ID => SubField::new("Remote ID", format::hex(body)),
            layout::AGENT_LINK_SELECTION => match <[u8; 4]>::try_from(body) {
                Ok(addr) => SubField::new("Link selection", Ipv4Addr::from(addr)),
                Err(_) => SubField::new("Link selection", format!("0x{}", format::hex(body))),
            },
            layout::AGENT_SUBSCRIBER_ID => SubField::new("Subscriber ID", text(body)),
            other => SubField::new(format!("Sub-option {other}"), format!("0x{}", format::hex(body))),
        };
        fields.push(field);
        rest = next;
    }
    Some(fields)
}

fn authentication(value: &[u8]) -> Option<Vec<SubField>> {
    let fixed = layout::AUTH_FIXED_LEN + layout::AUTH_REPLAY_LEN;
    if value.len() < fixed {
        return None;
    }
    let protocol = match value[0] {
        0 => "Configuration token".to_string(),
        1 => "Delayed authentication".to_string(),
        3 => "Reconfigure key".to_string(),
        other => format!("Unknown ({other})"),
    };
    let algorithm = match value[1] {
        1 => "HMAC-MD5".to_string(),
        other => format!("Unknown ({other})"),
    };
    let rdm = match value[2] {
        0 => "Monotonically-increasing counter".to_string(),
        other => format!("Unknown ({other})"),
    };
    let mut counter = [0u8; layout::AUTH_REPLAY_LEN];
    counter.copy_from_slice(&value[layout::AUTH_FIXED_LEN..fixed]);

    let mut fields = vec![
        SubField::new("Protocol", protocol),
        SubField::new("Algorithm", algorithm),
        SubField::new("RDM", rdm),
        SubField::new("Replay counter", format!("{:#018x}", u64::from_be_bytes(counter))),
    ];
    let info = &value[fixed..];
    if !info.is_empty() {
        fields.push(SubField::new("Authentication info", format!("0x{}", format::hex(info))));
    }
    Some(fields)
}

fn sip_servers(value: &[u8]) -> Option<Vec<SubField>> {
    let (&encoding, body) = value.split_first()?;
    match encoding {
        layout::SIP_ENCODING_NAMES => {
            let names = wire_names(body)?;
            Some(names.into_iter().map(|name| SubField::new("Server", name)).collect())
        }
        layout::SIP_ENCODING_ADDRESSES => {
            let addrs = addresses(body)?;
            Some(addrs.into_iter().map(|addr| SubField::new("Server", addr)).collect())
        }
        other => {
            trace!(encoding = other, "unknown SIP server encoding");
            None
        }
    }
}

/// Uncompressed DNS wire-format names, back to back. A trailing name without
/// its terminating zero label is still returned.
fn wire_names(mut bytes: &[u8]) -> Option<Vec<String>> {
    let mut names = Vec::new();
    let mut labels: Vec<String> = Vec::new();
    while let Some((&len, rest)) = bytes.split_first() {
        if len == 0 {
            names.push(labels.join("."));
            labels.clear();
            bytes = rest;
            continue;
        }
        // Compression pointers are not allowed in option payloads.
        if len & 0xc0 != 0 {
            return None;
        }
        let (label, next) = rest.split_at_checked(usize::from(len))?;
        labels.push(String::from_utf8_lossy(label).into_owned());
        bytes = next;
    }
    if !labels.is_empty() {
        names.push(labels.join("."));
    }
    Some(names)
}
