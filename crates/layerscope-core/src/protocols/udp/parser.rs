use crate::protocols::common::reader::ByteReader;
use crate::protocols::error::DecodeError;

use super::layout;

const LAYER: &str = "UDP";

/// Parsed UDP header with the payload it delimits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UdpHeader<'a> {
    pub source_port: u16,
    pub destination_port: u16,
    pub length: u16,
    pub checksum: u16,
    pub payload_offset: usize,
    pub payload: &'a [u8],
}

pub fn parse_udp(segment: &[u8]) -> Result<UdpHeader<'_>, DecodeError> {
    let reader = ByteReader::new(LAYER, segment);
    reader.require_len(layout::HEADER_LEN)?;

    let length = reader.read_u16_be(layout::LENGTH_RANGE)?;
    if (length as usize) < layout::HEADER_LEN {
        return Err(DecodeError::InvalidHeaderLength {
            layer: LAYER,
            declared: length as usize,
        });
    }
    let payload_end = (length as usize).min(reader.len());

    Ok(UdpHeader {
        source_port: reader.read_u16_be(layout::SOURCE_PORT_RANGE)?,
        destination_port: reader.read_u16_be(layout::DESTINATION_PORT_RANGE)?,
        length,
        checksum: reader.read_u16_be(layout::CHECKSUM_RANGE)?,
        payload_offset: layout::HEADER_LEN,
        payload: reader.read_slice(layout::HEADER_LEN..payload_end)?,
    })
}
