use tracing::debug;

use crate::protocols::error::DecodeError;
use crate::protocols::ipv4::{layout as ipv4_layout, protocol_name};
use crate::protocols::tcp::parse_tcp;
use crate::protocols::udp::parse_udp;
use crate::record::{FrameDissection, Layer};

use super::{describe, ports};

pub(super) fn dispatch(protocol: u8, payload: &[u8], out: &mut FrameDissection) {
    match protocol {
        ipv4_layout::PROTO_TCP => tcp(payload, out),
        ipv4_layout::PROTO_UDP => udp(payload, out),
        other => {
            let err = DecodeError::UnknownProtocol {
                layer: "IP",
                value: other.into(),
            };
            debug!(protocol = other, "transport protocol not decoded");
            out.push(Layer::failed(protocol_name(other).unwrap_or("Unknown"), &err));
        }
    }
}

fn udp(segment: &[u8], out: &mut FrameDissection) {
    match parse_udp(segment) {
        Ok(header) => {
            out.push(describe::udp(&header));
            ports::dispatch(
                ports::Transport::Udp,
                header.source_port,
                header.destination_port,
                header.payload,
                out,
            );
        }
        Err(err) => {
            debug!(%err, "UDP header rejected");
            out.push(Layer::failed("UDP", &err));
        }
    }
}

fn tcp(segment: &[u8], out: &mut FrameDissection) {
    match parse_tcp(segment) {
        Ok(header) => {
            out.push(describe::tcp(&header));
            ports::dispatch(
                ports::Transport::Tcp,
                header.source_port,
                header.destination_port,
                header.payload,
                out,
            );
        }
        Err(err) => {
            debug!(%err, "TCP header rejected");
            out.push(Layer::failed("TCP", &err));
        }
    }
}
