use std::io::{Read, Seek, SeekFrom};

use pcap_parser::Linktype;

use super::error::PcapSourceError;
use super::layout;

/// Read the four magic bytes, then seek back to the start of the file.
///
/// # Errors
/// Returns `PcapSourceError::Io` when fewer than four bytes can be read or
/// the reader cannot be rewound.
pub fn read_magic_and_rewind<R: Read + Seek>(reader: &mut R) -> Result<[u8; 4], PcapSourceError> {
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;
    reader.seek(SeekFrom::Start(0))?;
    Ok(magic)
}

pub fn is_pcapng_magic(magic: &[u8; 4]) -> bool {
    magic == &layout::PCAPNG_MAGIC
}

/// Link type of a pcapng interface id; Ethernet when no IDB declared it.
pub fn linktype_for_interface(linktypes: &[Linktype], if_id: u32) -> Linktype {
    linktypes
        .get(if_id as usize)
        .copied()
        .unwrap_or(Linktype::ETHERNET)
}

/// pcapng timestamps default to microsecond resolution.
pub fn pcapng_ts_to_seconds(ts_high: u32, ts_low: u32) -> f64 {
    let ts = ((ts_high as u64) << 32) | (ts_low as u64);
    (ts / 1_000_000) as f64 + (ts % 1_000_000) as f64 * 1e-6
}

/// The captured part of a record. pcapng blocks pad their data to 32 bits,
/// so the slice may be longer than `caplen`.
pub fn captured_bytes(data: &[u8], caplen: u32) -> &[u8] {
    let len = (caplen as usize).min(data.len());
    &data[..len]
}
