/// Initial buffer handed to the pcap-parser readers; they grow it on refill.
pub const PCAP_READER_BUFFER_SIZE: usize = 65536;

/// Section Header Block type, the first four bytes of every pcapng file.
pub const PCAPNG_MAGIC: [u8; 4] = [0x0a, 0x0d, 0x0d, 0x0a];
