use crate::protocols::common::reader::ByteReader;
use crate::protocols::error::DecodeError;

use super::layout;

const LAYER: &str = "Ethernet";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EthernetFrame<'a> {
    pub destination: [u8; 6],
    pub source: [u8; 6],
    pub ether_type: u16,
    pub payload_offset: usize,
    pub payload: &'a [u8],
}

pub fn parse_ethernet(frame: &[u8]) -> Result<EthernetFrame<'_>, DecodeError> {
    let reader = ByteReader::new(LAYER, frame);
    reader.require_len(layout::HEADER_LEN)?;

    Ok(EthernetFrame {
        destination: reader.read_array(layout::DESTINATION_RANGE)?,
        source: reader.read_array(layout::SOURCE_RANGE)?,
        ether_type: reader.read_u16_be(layout::ETHER_TYPE_RANGE)?,
        payload_offset: layout::HEADER_LEN,
        payload: reader.read_tail(layout::HEADER_LEN)?,
    })
}

pub fn ether_type_name(ether_type: u16) -> Option<&'static str> {
    match ether_type {
        layout::ETHERTYPE_IPV4 => Some("IPv4"),
        layout::ETHERTYPE_ARP => Some("ARP"),
        layout::ETHERTYPE_RARP => Some("Reverse ARP"),
        layout::ETHERTYPE_VLAN => Some("802.1Q VLAN"),
        layout::ETHERTYPE_IPV6 => Some("IPv6"),
        _ => None,
    }
}
