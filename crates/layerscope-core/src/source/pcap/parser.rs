use std::fs::File;
use std::path::Path;

use pcap_parser::{
    Block, LegacyPcapReader, Linktype, PcapBlockOwned, PcapError, PcapNGReader,
    traits::PcapReaderIterator,
};
use tracing::{debug, trace};

use crate::source::{PacketEvent, PacketSource, SourceError};

use super::error::PcapSourceError;
use super::layout;
use super::reader::{
    captured_bytes, is_pcapng_magic, linktype_for_interface, pcapng_ts_to_seconds,
    read_magic_and_rewind,
};

/// Frames read sequentially from a capture file.
pub struct PcapFileSource {
    inner: PcapReader,
}

enum PcapReader {
    Legacy {
        reader: LegacyPcapReader<File>,
        linktype: Option<Linktype>,
    },
    Ng {
        reader: PcapNGReader<File>,
        linktypes: Vec<Linktype>,
    },
}

impl PcapFileSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path).map_err(SourceError::from)?;
        let inner = create_reader(file).map_err(SourceError::from)?;
        debug!(path = %path.display(), "capture opened");
        Ok(Self { inner })
    }
}

impl PacketSource for PcapFileSource {
    fn next_packet(&mut self) -> Result<Option<PacketEvent>, SourceError> {
        next_packet(&mut self.inner).map_err(SourceError::from)
    }
}

fn create_reader(mut file: File) -> Result<PcapReader, PcapSourceError> {
    let magic = read_magic_and_rewind(&mut file)?;

    if is_pcapng_magic(&magic) {
        let reader = PcapNGReader::new(layout::PCAP_READER_BUFFER_SIZE, file)
            .map_err(|e| PcapSourceError::pcap("pcapng reader init", e))?;
        Ok(PcapReader::Ng {
            reader,
            linktypes: Vec::new(),
        })
    } else {
        let reader = LegacyPcapReader::new(layout::PCAP_READER_BUFFER_SIZE, file)
            .map_err(|e| PcapSourceError::pcap("pcap reader init", e))?;
        Ok(PcapReader::Legacy {
            reader,
            linktype: None,
        })
    }
}

fn next_packet(reader: &mut PcapReader) -> Result<Option<PacketEvent>, PcapSourceError> {
    loop {
        match reader {
            PcapReader::Legacy { reader, linktype } => match reader.next() {
                Ok((offset, block)) => {
                    let event = match block {
                        PcapBlockOwned::LegacyHeader(header) => {
                            debug!(linktype = header.network.0, "pcap header");
                            *linktype = Some(header.network);
                            None
                        }
                        PcapBlockOwned::Legacy(packet) => Some(PacketEvent {
                            ts: Some(packet.ts_sec as f64 + (packet.ts_usec as f64 * 1e-6)),
                            linktype: linktype.unwrap_or(Linktype::ETHERNET),
                            data: captured_bytes(packet.data, packet.caplen).to_vec(),
                            orig_len: Some(packet.origlen),
                        }),
                        _ => None,
                    };
                    reader.consume(offset);
                    if event.is_some() {
                        return Ok(event);
                    }
                }
                Err(PcapError::Eof) => return Ok(None),
                Err(PcapError::Incomplete(_)) => {
                    trace!("pcap reader refill");
                    reader
                        .refill()
                        .map_err(|e| PcapSourceError::pcap("pcap reader refill", e))?;
                }
                Err(e) => {
                    return Err(PcapSourceError::pcap("pcap reader next", e));
                }
            },
            PcapReader::Ng { reader, linktypes } => match reader.next() {
                Ok((offset, block)) => {
                    let event = match block {
                        PcapBlockOwned::NG(Block::SectionHeader(_)) => {
                            // Interface ids restart in every section.
                            linktypes.clear();
                            None
                        }
                        PcapBlockOwned::NG(Block::InterfaceDescription(intf)) => {
                            debug!(
                                if_id = linktypes.len(),
                                linktype = intf.linktype.0,
                                "pcapng interface"
                            );
                            linktypes.push(intf.linktype);
                            None
                        }
                        PcapBlockOwned::NG(Block::EnhancedPacket(packet)) => Some(PacketEvent {
                            ts: Some(pcapng_ts_to_seconds(packet.ts_high, packet.ts_low)),
                            linktype: linktype_for_interface(linktypes, packet.if_id),
                            data: captured_bytes(packet.data, packet.caplen).to_vec(),
                            orig_len: Some(packet.origlen),
                        }),
                        PcapBlockOwned::NG(Block::SimplePacket(packet)) => Some(PacketEvent {
                            ts: None,
                            linktype: linktype_for_interface(linktypes, 0),
                            data: captured_bytes(packet.data, packet.origlen).to_vec(),
                            orig_len: Some(packet.origlen),
                        }),
                        _ => None,
                    };
                    reader.consume(offset);
                    if event.is_some() {
                        return Ok(event);
                    }
                }
                Err(PcapError::Eof) => return Ok(None),
                Err(PcapError::Incomplete(_)) => {
                    trace!("pcapng reader refill");
                    reader
                        .refill()
                        .map_err(|e| PcapSourceError::pcap("pcapng reader refill", e))?;
                }
                Err(e) => {
                    return Err(PcapSourceError::pcap("pcapng reader next", e));
                }
            },
        }
    }
}
