use crate::protocols::bootp::layout as bootp_layout;
use crate::record::{FrameDissection, Layer, Tier};

use super::bootp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Transport {
    Tcp,
    Udp,
}

/// Application protocols recognized by well-known port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Bootp,
    Dns,
    FtpData,
    Ftp,
    Smtp,
    Http,
}

impl Service {
    pub fn from_port(port: u16) -> Option<Self> {
        match port {
            bootp_layout::SERVER_PORT | bootp_layout::CLIENT_PORT => Some(Service::Bootp),
            53 => Some(Service::Dns),
            20 => Some(Service::FtpData),
            21 => Some(Service::Ftp),
            25 | 465 | 587 | 2525 | 25025 => Some(Service::Smtp),
            80 => Some(Service::Http),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Service::Bootp => "BOOTP",
            Service::Dns => "DNS",
            Service::FtpData => "FTP data",
            Service::Ftp => "FTP",
            Service::Smtp => "SMTP",
            Service::Http => "HTTP",
        }
    }

    /// Source port first, then destination.
    pub fn for_ports(source: u16, destination: u16) -> Option<Self> {
        Self::from_port(source).or_else(|| Self::from_port(destination))
    }
}

pub(super) fn dispatch(
    transport: Transport,
    source: u16,
    destination: u16,
    payload: &[u8],
    out: &mut FrameDissection,
) {
    match (transport, Service::for_ports(source, destination)) {
        (Transport::Udp, Some(Service::Bootp)) => bootp::dissect(payload, out),
        (_, Some(service)) => {
            let mut layer = Layer::new(service.name());
            layer.note(
                Tier::Common,
                format!("{} bytes of payload, not decoded", payload.len()),
            );
            out.push(layer);
        }
        (_, None) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::Service;

    #[test]
    fn either_port_selects_the_service() {
        assert_eq!(Service::for_ports(67, 68), Some(Service::Bootp));
        assert_eq!(Service::for_ports(68, 67), Some(Service::Bootp));
        assert_eq!(Service::for_ports(51000, 53), Some(Service::Dns));
        assert_eq!(Service::for_ports(587, 40000), Some(Service::Smtp));
        assert_eq!(Service::for_ports(40000, 40001), None);
    }
}
