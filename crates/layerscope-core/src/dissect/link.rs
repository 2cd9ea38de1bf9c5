use pcap_parser::Linktype;
use tracing::debug;

use crate::protocols::error::DecodeError;
use crate::protocols::ethernet::parse_ethernet;
use crate::record::{FrameDissection, Layer};

use super::{describe, network};

/// Pick the first decoder from the capture's link type.
pub(super) fn dispatch(linktype: Linktype, data: &[u8], out: &mut FrameDissection) {
    match linktype {
        Linktype::ETHERNET => ethernet(data, out),
        Linktype::RAW => network::ipv4(data, out),
        other => {
            let err = DecodeError::UnknownProtocol {
                layer: "link",
                value: other.0 as u32,
            };
            debug!(linktype = other.0, "unsupported link type");
            out.push(Layer::failed("Link", &err));
        }
    }
}

fn ethernet(data: &[u8], out: &mut FrameDissection) {
    match parse_ethernet(data) {
        Ok(frame) => {
            out.push(describe::ethernet(&frame));
            network::dispatch(frame.ether_type, frame.payload, out);
        }
        Err(err) => {
            debug!(%err, "ethernet header rejected");
            out.push(Layer::failed("Ethernet", &err));
        }
    }
}
