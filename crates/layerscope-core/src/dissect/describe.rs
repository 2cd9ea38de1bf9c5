//! Header views to output layers.
//!
//! Tiers: addresses, ports and the operation of a message are Essential;
//! lengths, protocol numbers and the fields most people look for next are
//! Common; everything else is Detailed.

use std::net::Ipv4Addr;

use crate::protocols::arp::{ArpPacket, operation_name};
use crate::protocols::bootp::{BootpMessage, hardware_type_name, op_name};
use crate::protocols::common::format;
use crate::protocols::dhcp::{DecodedValue, OptionScan, ScanStop};
use crate::protocols::ethernet::{EthernetFrame, ether_type_name};
use crate::protocols::ipv4::{Ipv4Header, layout as ipv4_layout, protocol_name};
use crate::protocols::tcp::{TcpHeader, flag_names};
use crate::protocols::udp::UdpHeader;
use crate::record::{Field, Layer, Tier};

fn named<T: std::fmt::Display>(code: T, name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{code} ({name})"),
        None => code.to_string(),
    }
}

pub(super) fn ethernet(frame: &EthernetFrame<'_>) -> Layer {
    let mut layer = Layer::new("Ethernet");
    layer.field(Tier::Essential, "Destination", format::hw_addr(&frame.destination));
    layer.field(Tier::Essential, "Source", format::hw_addr(&frame.source));
    layer.field(
        Tier::Common,
        "Type",
        named(
            format!("{:#06x}", frame.ether_type),
            ether_type_name(frame.ether_type),
        ),
    );
    layer
}

pub(super) fn ipv4(header: &Ipv4Header<'_>) -> Layer {
    let mut layer = Layer::new("IPv4");
    layer.field(Tier::Essential, "Source", header.source);
    layer.field(Tier::Essential, "Destination", header.destination);
    layer.field(
        Tier::Common,
        "Protocol",
        named(header.protocol, protocol_name(header.protocol)),
    );
    layer.field(Tier::Common, "Total length", header.total_length);
    layer.field(Tier::Common, "TTL", header.ttl);
    layer.field(Tier::Detailed, "Version", header.version);
    layer.field(Tier::Detailed, "Header length", header.header_len);
    layer.field(Tier::Detailed, "Type of service", format!("{:#04x}", header.tos));
    layer.field(Tier::Detailed, "Identification", format!("{:#06x}", header.identification));

    let mut flags = Vec::new();
    if header.flags & ipv4_layout::FLAG_DONT_FRAGMENT != 0 {
        flags.push("DF");
    }
    if header.flags & ipv4_layout::FLAG_MORE_FRAGMENTS != 0 {
        flags.push("MF");
    }
    let flags = if flags.is_empty() {
        format!("{:#03b}", header.flags)
    } else {
        format!("{:#03b} ({})", header.flags, flags.join(", "))
    };
    layer.field(Tier::Detailed, "Flags", flags);
    layer.field(Tier::Detailed, "Fragment offset", header.fragment_offset);
    layer.field(Tier::Detailed, "Checksum", format!("{:#06x}", header.checksum));
    layer
}

fn proto_addr(bytes: &[u8]) -> String {
    match <[u8; 4]>::try_from(bytes) {
        Ok(addr) => Ipv4Addr::from(addr).to_string(),
        Err(_) => format!("0x{}", format::hex(bytes)),
    }
}

pub(super) fn arp(title: &str, packet: &ArpPacket<'_>) -> Layer {
    let mut layer = Layer::new(title);
    layer.field(
        Tier::Essential,
        "Operation",
        named(packet.operation, operation_name(packet.operation)),
    );
    layer.field(Tier::Essential, "Sender hardware address", format::hw_addr(packet.sender_hw_addr));
    layer.field(Tier::Essential, "Sender protocol address", proto_addr(packet.sender_proto_addr));
    layer.field(Tier::Essential, "Target hardware address", format::hw_addr(packet.target_hw_addr));
    layer.field(Tier::Essential, "Target protocol address", proto_addr(packet.target_proto_addr));
    layer.field(Tier::Detailed, "Hardware type", packet.hardware_type);
    layer.field(
        Tier::Detailed,
        "Protocol type",
        format!("{:#06x}", packet.protocol_type),
    );
    layer.field(Tier::Detailed, "Hardware address length", packet.hardware_len);
    layer.field(Tier::Detailed, "Protocol address length", packet.protocol_len);
    layer
}

pub(super) fn udp(header: &UdpHeader<'_>) -> Layer {
    let mut layer = Layer::new("UDP");
    layer.field(Tier::Essential, "Source port", header.source_port);
    layer.field(Tier::Essential, "Destination port", header.destination_port);
    layer.field(Tier::Common, "Length", header.length);
    layer.field(Tier::Detailed, "Checksum", format!("{:#06x}", header.checksum));
    layer
}

pub(super) fn tcp(header: &TcpHeader<'_>) -> Layer {
    let mut layer = Layer::new("TCP");
    layer.field(Tier::Essential, "Source port", header.source_port);
    layer.field(Tier::Essential, "Destination port", header.destination_port);
    layer.field(Tier::Common, "Flags", flag_names(header.flags).join(", "));
    layer.field(Tier::Common, "Sequence number", header.sequence);
    layer.field(Tier::Common, "Acknowledgement number", header.acknowledgement);
    layer.field(Tier::Detailed, "Header length", header.header_len);
    layer.field(Tier::Detailed, "Window", header.window);
    layer.field(Tier::Detailed, "Checksum", format!("{:#06x}", header.checksum));
    layer.field(Tier::Detailed, "Urgent pointer", header.urgent_pointer);
    layer
}

pub(super) fn bootp(message: &BootpMessage<'_>) -> Layer {
    let mut layer = Layer::new("BOOTP");
    layer.field(Tier::Essential, "Operation", named(message.op, op_name(message.op)));
    layer.field(
        Tier::Essential,
        "Client hardware address",
        format::hw_addr(message.client_hw_addr_bytes()),
    );
    layer.field(
        Tier::Common,
        "Transaction ID",
        format!("{:#010x}", message.transaction_id),
    );
    layer.field(Tier::Common, "Client address", message.client_addr);
    layer.field(Tier::Common, "Your address", message.your_addr);
    layer.field(Tier::Common, "Server address", message.server_addr);
    layer.field(Tier::Common, "Gateway address", message.gateway_addr);
    let flags = if message.is_broadcast() {
        format!("{:#06x} (broadcast)", message.flags)
    } else {
        format!("{:#06x}", message.flags)
    };
    layer.field(Tier::Common, "Flags", flags);
    layer.field(
        Tier::Detailed,
        "Hardware type",
        named(message.hardware_type, hardware_type_name(message.hardware_type)),
    );
    layer.field(Tier::Detailed, "Hardware address length", message.hardware_len);
    layer.field(Tier::Detailed, "Hops", message.hops);
    layer.field(Tier::Detailed, "Seconds elapsed", message.seconds_elapsed);
    layer.field(
        Tier::Detailed,
        "Server host name",
        format::nul_terminated(message.server_name).unwrap_or_else(|| "not given".to_string()),
    );
    layer.field(
        Tier::Detailed,
        "Boot file name",
        format::nul_terminated(message.boot_file).unwrap_or_else(|| "not given".to_string()),
    );
    layer.field(
        Tier::Detailed,
        "Vendor area",
        format!(
            "{} bytes at offset {}",
            message.vendor_area_length, message.vendor_area_offset
        ),
    );
    if message.has_magic_cookie() {
        layer.field(Tier::Detailed, "Magic cookie", "DHCP");
    } else if !message.vendor_area.is_empty() {
        layer.field(
            Tier::Detailed,
            "Vendor specific",
            format!("0x{}", format::hex(message.vendor_area)),
        );
    }
    layer
}

pub(super) fn dhcp(scan: &OptionScan<'_>) -> Layer {
    let mut layer = Layer::new("DHCP");
    for entry in &scan.entries {
        let field = match &entry.value {
            DecodedValue::Structured(parts) => Field {
                tier: entry.tier,
                label: entry.label.to_string(),
                value: format!("{} item(s)", parts.len()),
                children: parts
                    .iter()
                    .map(|part| Field::new(Tier::Detailed, part.name.clone(), &part.value))
                    .collect(),
            },
            value => Field::new(entry.tier, entry.label, value),
        };
        layer.push(field);
    }
    for skipped in &scan.skipped {
        layer.note(
            Tier::Detailed,
            format!("option {} skipped: {}", skipped.record.tag, skipped.reason),
        );
    }
    match &scan.stop {
        ScanStop::End { .. } => {}
        ScanStop::Exhausted => layer.note(Tier::Detailed, "option area ends without END"),
        ScanStop::Truncated(err) => layer.note(Tier::Essential, err.to_string()),
    }
    layer
}
