use tracing::debug;

use crate::protocols::arp::parse_arp;
use crate::protocols::error::DecodeError;
use crate::protocols::ethernet::{ether_type_name, layout as ethernet_layout};
use crate::protocols::ipv4::parse_ipv4;
use crate::record::{FrameDissection, Layer, Tier};

use super::{describe, transport};

pub(super) fn dispatch(ether_type: u16, payload: &[u8], out: &mut FrameDissection) {
    match ether_type {
        ethernet_layout::ETHERTYPE_IPV4 => ipv4(payload, out),
        ethernet_layout::ETHERTYPE_ARP => arp("ARP", payload, out),
        ethernet_layout::ETHERTYPE_RARP => arp("Reverse ARP", payload, out),
        other => {
            let err = DecodeError::UnknownProtocol {
                layer: "ether type",
                value: other.into(),
            };
            debug!(ether_type = other, "ether type not decoded");
            out.push(Layer::failed(ether_type_name(other).unwrap_or("Unknown"), &err));
        }
    }
}

pub(super) fn ipv4(packet: &[u8], out: &mut FrameDissection) {
    let header = match parse_ipv4(packet) {
        Ok(header) => header,
        Err(err) => {
            debug!(%err, "IPv4 header rejected");
            out.push(Layer::failed("IPv4", &err));
            return;
        }
    };

    let mut layer = describe::ipv4(&header);
    let missing = header.missing_bytes();
    if missing > 0 {
        layer.note(Tier::Common, format!("{missing} bytes of the datagram were not captured"));
    }
    if header.is_later_fragment() {
        // No transport header in this fragment.
        layer.note(
            Tier::Essential,
            format!("fragment at offset {}, payload not decoded", header.fragment_offset),
        );
        out.push(layer);
        return;
    }
    out.push(layer);
    transport::dispatch(header.protocol, header.payload, out);
}

fn arp(title: &str, packet: &[u8], out: &mut FrameDissection) {
    match parse_arp(packet) {
        Ok(arp) => out.push(describe::arp(title, &arp)),
        Err(err) => {
            debug!(%err, "ARP packet rejected");
            out.push(Layer::failed(title, &err));
        }
    }
}
