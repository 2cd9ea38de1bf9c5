//! Per-frame dissection: link → network → transport → application.
//!
//! Every stage decodes its header from the slice its caller validated, pushes
//! one `Layer`, then picks the next decoder. A stage that fails pushes a layer
//! holding only the error note and the chain stops there. No state is kept
//! between frames.

mod bootp;
mod describe;
mod link;
mod network;
mod ports;
mod transport;

pub use ports::Service;

use pcap_parser::Linktype;

use crate::record::FrameDissection;

/// Decode one captured frame into its layers, outermost first.
///
/// # Examples
/// ```
/// use layerscope_core::dissect_frame;
/// use pcap_parser::Linktype;
///
/// let dissection = dissect_frame(Linktype::ETHERNET, &[0u8; 6]);
/// assert_eq!(dissection.layers.len(), 1);
/// assert!(dissection.layers[0].fields.is_empty());
/// ```
pub fn dissect_frame(linktype: Linktype, data: &[u8]) -> FrameDissection {
    let mut out = FrameDissection::default();
    link::dispatch(linktype, data, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::dissect_frame;
    use crate::record::{FrameDissection, Tier};
    use etherparse::PacketBuilder;
    use pcap_parser::Linktype;

    const CLIENT_MAC: [u8; 6] = [0x00, 0x0b, 0x82, 0x01, 0xfc, 0x42];
    const SERVER_MAC: [u8; 6] = [0x00, 0x08, 0x74, 0xad, 0xf1, 0x9b];

    fn bootp_payload(op: u8, options: &[u8]) -> Vec<u8> {
        let mut payload = vec![0u8; 236];
        payload[0] = op;
        payload[1] = 1;
        payload[2] = 6;
        payload[4..8].copy_from_slice(&0x3903_f326u32.to_be_bytes());
        payload[16..20].copy_from_slice(&[192, 168, 0, 10]);
        payload[28..34].copy_from_slice(&CLIENT_MAC);
        payload.extend_from_slice(&[99, 130, 83, 99]);
        payload.extend_from_slice(options);
        payload
    }

    fn udp_frame(src_port: u16, dst_port: u16, payload: &[u8]) -> Vec<u8> {
        let builder = PacketBuilder::ethernet2(SERVER_MAC, CLIENT_MAC)
            .ipv4([192, 168, 0, 1], [192, 168, 0, 10], 64)
            .udp(src_port, dst_port);
        let mut packet = Vec::<u8>::with_capacity(builder.size(payload.len()));
        builder.write(&mut packet, payload).unwrap();
        packet
    }

    fn titles(dissection: &FrameDissection) -> Vec<&str> {
        dissection.layers.iter().map(|l| l.title.as_str()).collect()
    }

    fn field<'a>(dissection: &'a FrameDissection, layer: &str, label: &str) -> &'a str {
        let layer = dissection.layer(layer).unwrap();
        let field = layer.fields.iter().find(|f| f.label == label).unwrap();
        &field.value
    }

    const OFFER: [u8; 10] = [0x35, 0x01, 0x02, 0x33, 0x04, 0x00, 0x01, 0x51, 0x80, 0xff];

    #[test]
    fn dhcp_reply_from_server_port() {
        let frame = udp_frame(67, 68, &bootp_payload(2, &OFFER));
        let dissection = dissect_frame(Linktype::ETHERNET, &frame);
        assert_eq!(titles(&dissection), vec!["Ethernet", "IPv4", "UDP", "BOOTP", "DHCP"]);
        assert_eq!(field(&dissection, "BOOTP", "Operation"), "2 (Reply)");
        assert_eq!(field(&dissection, "BOOTP", "Your address"), "192.168.0.10");
        assert_eq!(
            field(&dissection, "BOOTP", "Client hardware address"),
            "00:0b:82:01:fc:42"
        );
        assert_eq!(field(&dissection, "DHCP", "DHCP message type"), "Offer");
        assert_eq!(field(&dissection, "DHCP", "Lease time"), "86400");
        assert!(dissection.layer("DHCP").unwrap().notes.is_empty());
    }

    #[test]
    fn dhcp_request_to_server_port() {
        let options = [0x35, 0x01, 0x03, 0x37, 0x02, 0x01, 0x03, 0xff];
        let frame = udp_frame(68, 67, &bootp_payload(1, &options));
        let dissection = dissect_frame(Linktype::ETHERNET, &frame);
        assert_eq!(field(&dissection, "DHCP", "DHCP message type"), "Request");
        let dhcp = dissection.layer("DHCP").unwrap();
        let prl = dhcp
            .fields
            .iter()
            .find(|f| f.label == "Parameter request list")
            .unwrap();
        assert_eq!(prl.children.len(), 2);
        assert_eq!(prl.children[1].value, "Router");
        assert_eq!(prl.children[1].tier, Tier::Detailed);
    }

    #[test]
    fn bootp_without_cookie_has_no_dhcp_layer() {
        let mut payload = bootp_payload(1, &[]);
        payload.truncate(236);
        payload.extend_from_slice(&[1, 2, 3, 4]);
        let frame = udp_frame(68, 67, &payload);
        let dissection = dissect_frame(Linktype::ETHERNET, &frame);
        assert!(dissection.layer("DHCP").is_none());
        assert_eq!(field(&dissection, "BOOTP", "Vendor specific"), "0x01020304");
    }

    #[test]
    fn truncated_bootp_header_is_reported() {
        let frame = udp_frame(67, 68, &[2u8; 100]);
        let dissection = dissect_frame(Linktype::ETHERNET, &frame);
        let bootp = dissection.layer("BOOTP").unwrap();
        assert!(bootp.fields.is_empty());
        assert!(bootp.notes[0].text.contains("need 236 bytes, got 100"));
    }

    #[test]
    fn vendor_area_is_bounded_by_udp_length() {
        // Trailing Ethernet padding after the datagram must not be read as options.
        let mut frame = udp_frame(67, 68, &bootp_payload(2, &[0x35, 0x01, 0x05]));
        frame.extend_from_slice(&[0x33, 0x04, 0, 0, 0, 1]);
        let dissection = dissect_frame(Linktype::ETHERNET, &frame);
        let dhcp = dissection.layer("DHCP").unwrap();
        assert_eq!(dhcp.fields.len(), 1);
        assert_eq!(dhcp.fields[0].value, "Ack");
    }

    #[test]
    fn raw_linktype_starts_at_ipv4() {
        let builder = PacketBuilder::ipv4([10, 0, 0, 1], [10, 0, 0, 2], 32).udp(5000, 53);
        let payload = [0u8; 12];
        let mut packet = Vec::<u8>::with_capacity(builder.size(payload.len()));
        builder.write(&mut packet, &payload).unwrap();
        let dissection = dissect_frame(Linktype::RAW, &packet);
        assert_eq!(titles(&dissection), vec!["IPv4", "UDP", "DNS"]);
    }

    #[test]
    fn tcp_segment_names_service() {
        let builder = PacketBuilder::ethernet2(CLIENT_MAC, SERVER_MAC)
            .ipv4([10, 0, 0, 1], [10, 0, 0, 2], 64)
            .tcp(40000, 80, 1, 1024)
            .syn();
        let mut packet = Vec::<u8>::with_capacity(builder.size(0));
        builder.write(&mut packet, &[]).unwrap();
        let dissection = dissect_frame(Linktype::ETHERNET, &packet);
        assert_eq!(titles(&dissection), vec!["Ethernet", "IPv4", "TCP", "HTTP"]);
        assert_eq!(field(&dissection, "TCP", "Flags"), "SYN");
    }

    #[test]
    fn arp_request_is_decoded() {
        let mut frame = Vec::new();
        frame.extend_from_slice(&[0xff; 6]);
        frame.extend_from_slice(&CLIENT_MAC);
        frame.extend_from_slice(&[0x08, 0x06]);
        frame.extend_from_slice(&[0x00, 0x01, 0x08, 0x00, 6, 4, 0x00, 0x01]);
        frame.extend_from_slice(&CLIENT_MAC);
        frame.extend_from_slice(&[192, 168, 0, 10]);
        frame.extend_from_slice(&[0; 6]);
        frame.extend_from_slice(&[192, 168, 0, 1]);
        let dissection = dissect_frame(Linktype::ETHERNET, &frame);
        assert_eq!(titles(&dissection), vec!["Ethernet", "ARP"]);
        assert_eq!(field(&dissection, "ARP", "Operation"), "1 (Request)");
        assert_eq!(field(&dissection, "ARP", "Target protocol address"), "192.168.0.1");
    }

    #[test]
    fn reverse_arp_is_decoded() {
        let mut frame = Vec::new();
        frame.extend_from_slice(&[0xff; 6]);
        frame.extend_from_slice(&CLIENT_MAC);
        frame.extend_from_slice(&[0x80, 0x35]);
        frame.extend_from_slice(&[0x00, 0x01, 0x08, 0x00, 6, 4, 0x00, 0x03]);
        frame.extend_from_slice(&CLIENT_MAC);
        frame.extend_from_slice(&[0; 4]);
        frame.extend_from_slice(&CLIENT_MAC);
        frame.extend_from_slice(&[0; 4]);
        let dissection = dissect_frame(Linktype::ETHERNET, &frame);
        assert_eq!(titles(&dissection), vec!["Ethernet", "Reverse ARP"]);
    }

    #[test]
    fn later_fragment_stops_at_ipv4() {
        let mut frame = udp_frame(67, 68, &bootp_payload(2, &OFFER));
        // Ethernet header is 14 bytes; flags/fragment offset sit at IPv4 bytes 6..8.
        frame[14 + 6..14 + 8].copy_from_slice(&[0x00, 0x05]);
        let dissection = dissect_frame(Linktype::ETHERNET, &frame);
        assert_eq!(titles(&dissection), vec!["Ethernet", "IPv4"]);
        let ipv4 = dissection.layer("IPv4").unwrap();
        assert!(
            ipv4.notes
                .iter()
                .any(|note| note.text == "fragment at offset 5, payload not decoded")
        );
        assert!(dissection.layer("UDP").is_none());
    }

    #[test]
    fn unknown_ether_type_is_reported() {
        let mut frame = vec![0u8; 12];
        frame.extend_from_slice(&[0x88, 0xb5, 1, 2, 3]);
        let dissection = dissect_frame(Linktype::ETHERNET, &frame);
        let last = dissection.layers.last().unwrap();
        assert_eq!(last.title, "Unknown");
        assert_eq!(last.notes[0].text, "unknown ether type protocol 0x88b5");
    }

    #[test]
    fn unknown_ip_protocol_is_reported() {
        let builder = PacketBuilder::ipv4([10, 0, 0, 1], [10, 0, 0, 2], 32).udp(1, 2);
        let mut packet = Vec::<u8>::with_capacity(builder.size(0));
        builder.write(&mut packet, &[]).unwrap();
        packet[9] = 47;
        let dissection = dissect_frame(Linktype::RAW, &packet);
        assert_eq!(titles(&dissection), vec!["IPv4", "GRE"]);
    }

    #[test]
    fn unsupported_linktype_yields_single_note() {
        let dissection = dissect_frame(Linktype(147), &[1, 2, 3]);
        assert_eq!(titles(&dissection), vec!["Link"]);
        assert!(dissection.layers[0].notes[0].text.contains("link"));
    }
}
