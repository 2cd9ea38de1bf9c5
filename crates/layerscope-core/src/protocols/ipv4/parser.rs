use std::net::Ipv4Addr;

use crate::protocols::common::reader::ByteReader;
use crate::protocols::error::DecodeError;

use super::layout;

const LAYER: &str = "IPv4";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ipv4Header<'a> {
    pub version: u8,
    pub header_len: usize,
    pub tos: u8,
    pub total_length: u16,
    pub identification: u16,
    pub flags: u8,
    pub fragment_offset: u16,
    pub ttl: u8,
    pub protocol: u8,
    pub checksum: u16,
    pub source: Ipv4Addr,
    pub destination: Ipv4Addr,
    pub payload_offset: usize,
    pub payload: &'a [u8],
}

impl Ipv4Header<'_> {
    /// Later fragments carry no transport header of their own.
    pub fn is_later_fragment(&self) -> bool {
        self.fragment_offset != 0
    }

    /// Bytes declared by the header but missing from the capture.
    pub fn missing_bytes(&self) -> usize {
        (self.total_length as usize).saturating_sub(self.payload_offset + self.payload.len())
    }
}

pub fn parse_ipv4(packet: &[u8]) -> Result<Ipv4Header<'_>, DecodeError> {
    let reader = ByteReader::new(LAYER, packet);
    reader.require_len(layout::MIN_HEADER_LEN)?;

    let version_ihl = reader.read_u8(layout::VERSION_IHL_OFFSET)?;
    let version = version_ihl >> 4;
    if version != layout::VERSION {
        return Err(DecodeError::UnsupportedVersion { version });
    }
    let header_len = ((version_ihl & 0x0f) as usize) * 4;
    if header_len < layout::MIN_HEADER_LEN {
        return Err(DecodeError::InvalidHeaderLength {
            layer: LAYER,
            declared: header_len,
        });
    }
    reader.require_len(header_len)?;

    let total_length = reader.read_u16_be(layout::TOTAL_LENGTH_RANGE)?;
    if (total_length as usize) < header_len {
        return Err(DecodeError::InvalidHeaderLength {
            layer: LAYER,
            declared: total_length as usize,
        });
    }
    let payload_end = (total_length as usize).min(reader.len());
    let flags_fragment = reader.read_u16_be(layout::FLAGS_FRAGMENT_RANGE)?;

    Ok(Ipv4Header {
        version,
        header_len,
        tos: reader.read_u8(layout::TOS_OFFSET)?,
        total_length,
        identification: reader.read_u16_be(layout::IDENTIFICATION_RANGE)?,
        flags: (flags_fragment >> 13) as u8,
        fragment_offset: flags_fragment & layout::FRAGMENT_OFFSET_MASK,
        ttl: reader.read_u8(layout::TTL_OFFSET)?,
        protocol: reader.read_u8(layout::PROTOCOL_OFFSET)?,
        checksum: reader.read_u16_be(layout::CHECKSUM_RANGE)?,
        source: reader.read_ipv4(layout::SOURCE_RANGE)?,
        destination: reader.read_ipv4(layout::DESTINATION_RANGE)?,
        payload_offset: header_len,
        payload: reader.read_slice(header_len..payload_end)?,
    })
}

pub fn protocol_name(protocol: u8) -> Option<&'static str> {
    match protocol {
        layout::PROTO_ICMP => Some("ICMP"),
        layout::PROTO_IGMP => Some("IGMP"),
        layout::PROTO_TCP => Some("TCP"),
        layout::PROTO_UDP => Some("UDP"),
        layout::PROTO_GRE => Some("GRE"),
        layout::PROTO_ESP => Some("ESP"),
        _ => None,
    }
}
