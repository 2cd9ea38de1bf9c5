use crate::protocols::common::reader::ByteReader;
use crate::protocols::error::DecodeError;

use super::layout;

const LAYER: &str = "TCP";

const FLAG_NAMES: [(u8, &str); 8] = [
    (layout::FLAG_CWR, "CWR"),
    (layout::FLAG_ECE, "ECE"),
    (layout::FLAG_URG, "URG"),
    (layout::FLAG_ACK, "ACK"),
    (layout::FLAG_PSH, "PSH"),
    (layout::FLAG_RST, "RST"),
    (layout::FLAG_SYN, "SYN"),
    (layout::FLAG_FIN, "FIN"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TcpHeader<'a> {
    pub source_port: u16,
    pub destination_port: u16,
    pub sequence: u32,
    pub acknowledgement: u32,
    pub header_len: usize,
    pub flags: u8,
    pub window: u16,
    pub checksum: u16,
    pub urgent_pointer: u16,
    pub payload_offset: usize,
    pub payload: &'a [u8],
}

pub fn parse_tcp(segment: &[u8]) -> Result<TcpHeader<'_>, DecodeError> {
    let reader = ByteReader::new(LAYER, segment);
    reader.require_len(layout::MIN_HEADER_LEN)?;

    let header_len = ((reader.read_u8(layout::DATA_OFFSET_OFFSET)? >> 4) as usize) * 4;
    if header_len < layout::MIN_HEADER_LEN {
        return Err(DecodeError::InvalidHeaderLength {
            layer: LAYER,
            declared: header_len,
        });
    }
    reader.require_len(header_len)?;

    Ok(TcpHeader {
        source_port: reader.read_u16_be(layout::SOURCE_PORT_RANGE)?,
        destination_port: reader.read_u16_be(layout::DESTINATION_PORT_RANGE)?,
        sequence: reader.read_u32_be(layout::SEQUENCE_RANGE)?,
        acknowledgement: reader.read_u32_be(layout::ACKNOWLEDGEMENT_RANGE)?,
        header_len,
        flags: reader.read_u8(layout::FLAGS_OFFSET)?,
        window: reader.read_u16_be(layout::WINDOW_RANGE)?,
        checksum: reader.read_u16_be(layout::CHECKSUM_RANGE)?,
        urgent_pointer: reader.read_u16_be(layout::URGENT_POINTER_RANGE)?,
        payload_offset: header_len,
        payload: reader.read_tail(header_len)?,
    })
}

/// Names of the set control bits, most significant first.
pub fn flag_names(flags: u8) -> Vec<&'static str> {
    FLAG_NAMES
        .iter()
        .filter(|(bit, _)| flags & bit != 0)
        .map(|(_, name)| *name)
        .collect()
}
