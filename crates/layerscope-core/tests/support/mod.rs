#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const LINKTYPE_ETHERNET: u16 = 1;
pub const LINKTYPE_RAW: u16 = 101;

pub const CLIENT_MAC: [u8; 6] = [0x00, 0x0b, 0x82, 0x01, 0xfc, 0x42];
pub const SERVER_MAC: [u8; 6] = [0x00, 0x08, 0x74, 0xad, 0xf1, 0x9b];

/// Message type Offer, lease time 86400, END.
pub const OFFER_OPTIONS: [u8; 10] = [0x35, 0x01, 0x02, 0x33, 0x04, 0x00, 0x01, 0x51, 0x80, 0xff];

/// One captured frame: timestamp in microseconds, captured bytes, wire length.
pub struct Frame {
    pub ts_us: u64,
    pub data: Vec<u8>,
    pub orig_len: usize,
}

impl Frame {
    pub fn new(ts_us: u64, data: Vec<u8>) -> Self {
        let orig_len = data.len();
        Self {
            ts_us,
            data,
            orig_len,
        }
    }
}

pub fn write_capture(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, bytes).unwrap();
    path
}

pub fn read_to_string(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

pub fn bootp_payload(op: u8, xid: u32, your_addr: [u8; 4], options: &[u8]) -> Vec<u8> {
    let mut payload = vec![0u8; 236];
    payload[0] = op;
    payload[1] = 1;
    payload[2] = 6;
    payload[4..8].copy_from_slice(&xid.to_be_bytes());
    payload[16..20].copy_from_slice(&your_addr);
    payload[28..34].copy_from_slice(&CLIENT_MAC);
    payload.extend_from_slice(&[99, 130, 83, 99]);
    payload.extend_from_slice(options);
    payload
}

pub fn ipv4_udp_packet(src_ip: [u8; 4], dst_ip: [u8; 4], src_port: u16, dst_port: u16, payload: &[u8]) -> Vec<u8> {
    let total_len = 20u16 + 8u16 + (payload.len() as u16);
    let mut ip_header = [0u8; 20];
    ip_header[0] = 0x45;
    ip_header[2..4].copy_from_slice(&total_len.to_be_bytes());
    ip_header[8] = 64;
    ip_header[9] = 17;
    ip_header[12..16].copy_from_slice(&src_ip);
    ip_header[16..20].copy_from_slice(&dst_ip);
    let checksum = ipv4_checksum(&ip_header);
    ip_header[10..12].copy_from_slice(&checksum.to_be_bytes());

    let mut packet = ip_header.to_vec();
    let udp_len = 8u16 + (payload.len() as u16);
    packet.extend_from_slice(&src_port.to_be_bytes());
    packet.extend_from_slice(&dst_port.to_be_bytes());
    packet.extend_from_slice(&udp_len.to_be_bytes());
    packet.extend_from_slice(&0u16.to_be_bytes());
    packet.extend_from_slice(payload);
    packet
}

pub fn ethernet_frame(ether_type: u16, payload: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(14 + payload.len());
    frame.extend_from_slice(&CLIENT_MAC);
    frame.extend_from_slice(&SERVER_MAC);
    frame.extend_from_slice(&ether_type.to_be_bytes());
    frame.extend_from_slice(payload);
    frame
}

/// DHCP offer from 192.168.0.1:67 to 192.168.0.10:68, Ethernet framed.
pub fn dhcp_offer_frame() -> Vec<u8> {
    let bootp = bootp_payload(2, 0x3903_f326, [192, 168, 0, 10], &OFFER_OPTIONS);
    ethernet_frame(0x0800, &ipv4_udp_packet([192, 168, 0, 1], [192, 168, 0, 10], 67, 68, &bootp))
}

/// DHCP discover from 0.0.0.0:68 to the broadcast address, Ethernet framed.
pub fn dhcp_discover_frame() -> Vec<u8> {
    let options = [0x35, 0x01, 0x01, 0x37, 0x03, 0x01, 0x03, 0x06, 0xff];
    let bootp = bootp_payload(1, 0x3903_f326, [0, 0, 0, 0], &options);
    ethernet_frame(0x0800, &ipv4_udp_packet([0, 0, 0, 0], [255, 255, 255, 255], 68, 67, &bootp))
}

fn ipv4_checksum(header: &[u8; 20]) -> u16 {
    let mut sum = 0u32;
    for chunk in header.chunks(2) {
        sum = sum.wrapping_add(u16::from_be_bytes([chunk[0], chunk[1]]) as u32);
    }
    while (sum >> 16) != 0 {
        sum = (sum & 0xffff) + (sum >> 16);
    }
    !(sum as u16)
}

pub fn pcapng(linktype: u16, frames: &[Frame]) -> Vec<u8> {
    let mut output = Vec::new();
    output.extend_from_slice(&pcapng_block(0x0a0d_0d0a, &section_header_body()));
    output.extend_from_slice(&pcapng_block(1, &interface_desc_body(linktype)));
    for frame in frames {
        output.extend_from_slice(&pcapng_block(6, &enhanced_packet_body(frame)));
    }
    output
}

/// Little-endian, microsecond legacy pcap.
pub fn legacy_pcap(linktype: u32, frames: &[Frame]) -> Vec<u8> {
    let mut output = Vec::new();
    output.extend_from_slice(&0xa1b2_c3d4u32.to_le_bytes());
    output.extend_from_slice(&2u16.to_le_bytes());
    output.extend_from_slice(&4u16.to_le_bytes());
    output.extend_from_slice(&0i32.to_le_bytes());
    output.extend_from_slice(&0u32.to_le_bytes());
    output.extend_from_slice(&65535u32.to_le_bytes());
    output.extend_from_slice(&linktype.to_le_bytes());
    for frame in frames {
        output.extend_from_slice(&((frame.ts_us / 1_000_000) as u32).to_le_bytes());
        output.extend_from_slice(&((frame.ts_us % 1_000_000) as u32).to_le_bytes());
        output.extend_from_slice(&(frame.data.len() as u32).to_le_bytes());
        output.extend_from_slice(&(frame.orig_len as u32).to_le_bytes());
        output.extend_from_slice(&frame.data);
    }
    output
}

fn pcapng_block(block_type: u32, body: &[u8]) -> Vec<u8> {
    let total_len = (8 + body.len() + 4) as u32;
    let mut block = Vec::with_capacity(total_len as usize);
    block.extend_from_slice(&block_type.to_be_bytes());
    block.extend_from_slice(&total_len.to_be_bytes());
    block.extend_from_slice(body);
    block.extend_from_slice(&total_len.to_be_bytes());
    block
}

fn section_header_body() -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(&0x1a2b_3c4du32.to_be_bytes());
    body.extend_from_slice(&1u16.to_be_bytes());
    body.extend_from_slice(&0u16.to_be_bytes());
    body.extend_from_slice(&(-1i64).to_be_bytes());
    body
}

fn interface_desc_body(linktype: u16) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(&linktype.to_be_bytes());
    body.extend_from_slice(&0u16.to_be_bytes());
    body.extend_from_slice(&65535u32.to_be_bytes());
    body
}

fn enhanced_packet_body(frame: &Frame) -> Vec<u8> {
    let ts_high = ((frame.ts_us >> 32) & 0xffff_ffff) as u32;
    let ts_low = (frame.ts_us & 0xffff_ffff) as u32;
    let mut body = Vec::new();
    body.extend_from_slice(&0u32.to_be_bytes());
    body.extend_from_slice(&ts_high.to_be_bytes());
    body.extend_from_slice(&ts_low.to_be_bytes());
    body.extend_from_slice(&(frame.data.len() as u32).to_be_bytes());
    body.extend_from_slice(&(frame.orig_len as u32).to_be_bytes());
    body.extend_from_slice(&frame.data);
    let pad_len = (4 - (frame.data.len() % 4)) % 4;
    body.extend(std::iter::repeat_n(0u8, pad_len));
    body
}
