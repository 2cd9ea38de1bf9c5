use crate::protocols::common::reader::ByteReader;
use crate::protocols::error::DecodeError;

use super::layout;

const LAYER: &str = "ARP";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArpPacket<'a> {
    pub hardware_type: u16,
    pub protocol_type: u16,
    pub hardware_len: u8,
    pub protocol_len: u8,
    pub operation: u16,
    pub sender_hw_addr: &'a [u8],
    pub sender_proto_addr: &'a [u8],
    pub target_hw_addr: &'a [u8],
    pub target_proto_addr: &'a [u8],
}

pub fn parse_arp(packet: &[u8]) -> Result<ArpPacket<'_>, DecodeError> {
    let reader = ByteReader::new(LAYER, packet);
    reader.require_len(layout::FIXED_LEN)?;

    let hardware_len = reader.read_u8(layout::HARDWARE_LEN_OFFSET)?;
    let protocol_len = reader.read_u8(layout::PROTOCOL_LEN_OFFSET)?;
    let hlen = hardware_len as usize;
    let plen = protocol_len as usize;
    reader.require_len(layout::FIXED_LEN + 2 * (hlen + plen))?;

    let sender_hw = layout::FIXED_LEN;
    let sender_proto = sender_hw + hlen;
    let target_hw = sender_proto + plen;
    let target_proto = target_hw + hlen;

    Ok(ArpPacket {
        hardware_type: reader.read_u16_be(layout::HARDWARE_TYPE_RANGE)?,
        protocol_type: reader.read_u16_be(layout::PROTOCOL_TYPE_RANGE)?,
        hardware_len,
        protocol_len,
        operation: reader.read_u16_be(layout::OPERATION_RANGE)?,
        sender_hw_addr: reader.read_slice(sender_hw..sender_proto)?,
        sender_proto_addr: reader.read_slice(sender_proto..target_hw)?,
        target_hw_addr: reader.read_slice(target_hw..target_proto)?,
        target_proto_addr: reader.read_slice(target_proto..target_proto + plen)?,
    })
}

pub fn operation_name(operation: u16) -> Option<&'static str> {
    match operation {
        layout::OP_REQUEST => Some("Request"),
        layout::OP_REPLY => Some("Reply"),
        layout::OP_REVERSE_REQUEST => Some("Reverse request"),
        layout::OP_REVERSE_REPLY => Some("Reverse reply"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{operation_name, parse_arp};
    use crate::protocols::arp::layout;
    use crate::protocols::error::DecodeError;

    fn ethernet_ipv4_request() -> Vec<u8> {
        let mut packet = Vec::new();
        packet.extend_from_slice(&layout::HARDWARE_ETHERNET.to_be_bytes());
        packet.extend_from_slice(&0x0800u16.to_be_bytes());
        packet.push(6);
        packet.push(4);
        packet.extend_from_slice(&layout::OP_REQUEST.to_be_bytes());
        packet.extend_from_slice(&[0, 1, 2, 3, 4, 5]);
        packet.extend_from_slice(&[10, 0, 0, 1]);
        packet.extend_from_slice(&[0; 6]);
        packet.extend_from_slice(&[10, 0, 0, 2]);
        packet
    }

    #[test]
    fn parse_request() {
        let packet = ethernet_ipv4_request();
        let parsed = parse_arp(&packet).unwrap();
        assert_eq!(parsed.hardware_type, layout::HARDWARE_ETHERNET);
        assert_eq!(parsed.operation, layout::OP_REQUEST);
        assert_eq!(parsed.sender_hw_addr, &[0, 1, 2, 3, 4, 5]);
        assert_eq!(parsed.sender_proto_addr, &[10, 0, 0, 1]);
        assert_eq!(parsed.target_proto_addr, &[10, 0, 0, 2]);
    }

    #[test]
    fn parse_truncated_addresses() {
        let packet = ethernet_ipv4_request();
        let err = parse_arp(&packet[..20]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::BufferTooShort {
                layer: "ARP",
                needed: 28,
                actual: 20,
            }
        );
    }

    #[test]
    fn parse_short_fixed_part() {
        let err = parse_arp(&[0u8; 7]).unwrap_err();
        assert!(matches!(err, DecodeError::BufferTooShort { needed: 8, .. }));
    }

    #[test]
    fn names_reverse_operations() {
        assert_eq!(operation_name(3), Some("Reverse request"));
        assert_eq!(operation_name(9), None);
    }
}
