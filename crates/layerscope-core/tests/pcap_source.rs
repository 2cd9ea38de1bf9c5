mod support;

use layerscope_core::{PacketSource, PcapFileSource, SourceError};
use pcap_parser::Linktype;
use tempfile::TempDir;

use support::{Frame, LINKTYPE_ETHERNET, LINKTYPE_RAW, dhcp_offer_frame, legacy_pcap, pcapng, write_capture};

#[test]
fn pcapng_source_reads_frames_in_order() {
    let dir = TempDir::new().unwrap();
    let frames = [
        Frame::new(1_000_000, dhcp_offer_frame()),
        Frame::new(1_500_000, vec![0u8; 21]),
    ];
    let path = write_capture(&dir, "two.pcapng", &pcapng(LINKTYPE_ETHERNET, &frames));
    let mut source = PcapFileSource::open(&path).unwrap();

    let first = source.next_packet().unwrap().unwrap();
    assert_eq!(first.linktype, Linktype::ETHERNET);
    assert_eq!(first.data, dhcp_offer_frame());
    assert_eq!(first.ts, Some(1.0));

    // 21 bytes are padded to 24 in the block; the event carries only the captured part.
    let second = source.next_packet().unwrap().unwrap();
    assert_eq!(second.data.len(), 21);
    assert_eq!(second.orig_len, Some(21));

    assert!(source.next_packet().unwrap().is_none());
}

#[test]
fn legacy_pcap_keeps_linktype_and_wire_length() {
    let dir = TempDir::new().unwrap();
    let mut frame = Frame::new(2_000_000, vec![0x45; 40]);
    frame.orig_len = 1500;
    let path = write_capture(&dir, "raw.pcap", &legacy_pcap(LINKTYPE_RAW.into(), &[frame]));
    let mut source = PcapFileSource::open(&path).unwrap();

    let event = source.next_packet().unwrap().unwrap();
    assert_eq!(event.linktype, Linktype::RAW);
    assert_eq!(event.data.len(), 40);
    assert_eq!(event.orig_len, Some(1500));
    assert!(source.next_packet().unwrap().is_none());
}

#[test]
fn pcap_source_rejects_truncated_file() {
    let dir = TempDir::new().unwrap();
    let path = write_capture(&dir, "truncated.pcapng", &[0x0a, 0x0d, 0x0d]);
    let err = match PcapFileSource::open(&path) {
        Ok(_) => panic!("expected truncated file to be rejected"),
        Err(err) => err,
    };
    assert!(matches!(err, SourceError::Io(_)));
}

#[test]
fn pcap_source_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = match PcapFileSource::open(&dir.path().join("missing.pcapng")) {
        Ok(_) => panic!("expected missing file to be rejected"),
        Err(err) => err,
    };
    assert!(matches!(err, SourceError::Io(_)));
}
