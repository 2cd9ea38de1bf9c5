use std::net::Ipv4Addr;

use crate::protocols::common::reader::ByteReader;
use crate::protocols::error::DecodeError;

use super::layout;

const LAYER: &str = "BOOTP";

/// Fixed BOOTP header plus the location of the vendor area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootpMessage<'a> {
    pub op: u8,
    pub hardware_type: u8,
    pub hardware_len: u8,
    pub hops: u8,
    pub transaction_id: u32,
    pub seconds_elapsed: u16,
    pub flags: u16,
    pub client_addr: Ipv4Addr,
    pub your_addr: Ipv4Addr,
    pub server_addr: Ipv4Addr,
    pub gateway_addr: Ipv4Addr,
    pub client_hw_addr: &'a [u8],
    pub server_name: &'a [u8],
    pub boot_file: &'a [u8],
    pub vendor_area_offset: usize,
    pub vendor_area_length: usize,
    pub vendor_area: &'a [u8],
}

impl<'a> BootpMessage<'a> {
    pub fn is_broadcast(&self) -> bool {
        self.flags & layout::FLAG_BROADCAST != 0
    }

    /// `chaddr` trimmed to the declared hardware length (at most 16 bytes).
    pub fn client_hw_addr_bytes(&self) -> &'a [u8] {
        let len = (self.hardware_len as usize).min(self.client_hw_addr.len());
        &self.client_hw_addr[..len]
    }

    pub fn has_magic_cookie(&self) -> bool {
        self.vendor_area.starts_with(&layout::MAGIC_COOKIE)
    }

    /// The DHCP option stream, present only after the magic cookie.
    pub fn options(&self) -> Option<&'a [u8]> {
        self.vendor_area.strip_prefix(&layout::MAGIC_COOKIE[..])
    }
}

/// Decode a BOOTP message from a UDP payload already bounded by the UDP length.
pub fn parse_bootp(payload: &[u8]) -> Result<BootpMessage<'_>, DecodeError> {
    let reader = ByteReader::new(LAYER, payload);
    reader.require_len(layout::HEADER_LEN)?;

    let vendor_area = reader.read_tail(layout::VENDOR_AREA_OFFSET)?;

    Ok(BootpMessage {
        op: reader.read_u8(layout::OP_OFFSET)?,
        hardware_type: reader.read_u8(layout::HARDWARE_TYPE_OFFSET)?,
        hardware_len: reader.read_u8(layout::HARDWARE_LEN_OFFSET)?,
        hops: reader.read_u8(layout::HOPS_OFFSET)?,
        transaction_id: reader.read_u32_be(layout::TRANSACTION_ID_RANGE)?,
        seconds_elapsed: reader.read_u16_be(layout::SECONDS_RANGE)?,
        flags: reader.read_u16_be(layout::FLAGS_RANGE)?,
        client_addr: reader.read_ipv4(layout::CLIENT_ADDR_RANGE)?,
        your_addr: reader.read_ipv4(layout::YOUR_ADDR_RANGE)?,
        server_addr: reader.read_ipv4(layout::SERVER_ADDR_RANGE)?,
        gateway_addr: reader.read_ipv4(layout::GATEWAY_ADDR_RANGE)?,
        client_hw_addr: reader.read_slice(layout::CLIENT_HW_ADDR_RANGE)?,
        server_name: reader.read_slice(layout::SERVER_NAME_RANGE)?,
        boot_file: reader.read_slice(layout::BOOT_FILE_RANGE)?,
        vendor_area_offset: layout::VENDOR_AREA_OFFSET,
        vendor_area_length: vendor_area.len(),
        vendor_area,
    })
}

pub fn op_name(op: u8) -> Option<&'static str> {
    match op {
        layout::OP_REQUEST => Some("Request"),
        layout::OP_REPLY => Some("Reply"),
        _ => None,
    }
}

pub fn hardware_type_name(hardware_type: u8) -> Option<&'static str> {
    match hardware_type {
        layout::HTYPE_ETHERNET => Some("Ethernet"),
        layout::HTYPE_IEEE802 => Some("IEEE 802"),
        layout::HTYPE_FDDI => Some("FDDI"),
        _ => None,
    }
}
