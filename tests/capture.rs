#![allow(clippy::unreadable_literal)]

use pcap_tail::pcap::GlobalHeader;
use pcap_tail::{Endianness, Event, IngestSession, PcapError};

mod common;
use common::*;

fn run(data: Vec<u8>) -> Vec<Event> {
    let mut session = IngestSession::new(SliceSource(data), Vec::<Event>::new());
    session.parse().unwrap();
    session.into_sink()
}

#[test]
fn big_endian_capture_end_to_end() {
    let frame = beacon_frame(Order::Be, &[(0, b"test")]);
    let events = run(capture(Order::Be, &[&frame]));

    assert_eq!(events.len(), 5);

    let expected = GlobalHeader {
        magic_number: 0xA1B2C3D4,
        version_major: 2,
        version_minor: 4,
        gmt_offset: 0,
        ts_accuracy: 0,
        snaplen: 65535,
        link_layer_type: 105,
        endianness: Endianness::Big,
    };
    assert_eq!(events[0], Event::FileHeader(expected));

    assert!(matches!(events[1], Event::PacketHeader(_)));
    assert!(matches!(events[2], Event::PacketData(_)));

    match &events[3] {
        Event::Packet(header, frame) => {
            assert_eq!(header.ts_sec, 1_700_000_000);
            assert_eq!(header.captured_len, 46);
            assert_eq!(header.original_len, 46);
            assert_eq!(frame.frame_control.type_name, "Management");
            assert_eq!(frame.frame_control.subtype_name, "Beacon");
            assert_eq!(frame.body.as_ref().unwrap().ssid(), Some("test"));
        },
        other => panic!("Expected a packet, got {other:?}"),
    }

    assert_eq!(events[4], Event::Finished);
}

#[test]
fn little_endian_capture_end_to_end() {
    let frame = beacon_frame(Order::Le, &[(0, b"test")]);
    let events = run(capture(Order::Le, &[&frame]));

    let expected = GlobalHeader {
        // the magic number is always read big-endian
        magic_number: 0xD4C3B2A1,
        version_major: 2,
        version_minor: 4,
        gmt_offset: 0,
        ts_accuracy: 0,
        snaplen: 65535,
        link_layer_type: 105,
        endianness: Endianness::Little,
    };
    assert_eq!(events[0], Event::FileHeader(expected));

    match &events[3] {
        Event::Packet(header, frame) => {
            assert_eq!(header.captured_len, 46);
            assert_eq!(frame.body.as_ref().unwrap().ssid(), Some("test"));
        },
        other => panic!("Expected a packet, got {other:?}"),
    }
}

#[test]
fn unknown_magic_aborts_without_consuming() {
    let mut data = b"GIF89a, not a capture at all".to_vec();
    data.resize(64, 0);

    let mut session = IngestSession::new(SliceSource(data), Vec::<Event>::new());
    let err = session.parse().unwrap_err();

    assert!(matches!(err, PcapError::InvalidMagicNumber(0x47494638)));
    assert!(session.is_aborted());
    assert_eq!(session.byte_order(), None);

    // one error event, nothing decoded
    assert_eq!(session.sink().len(), 1);
    assert!(matches!(session.sink()[0], Event::Error(_)));

    // an aborted session drops further parse calls
    session.parse().unwrap();
    assert_eq!(session.sink().len(), 1);
}

#[test]
fn packet_count_matches_packet_events() {
    let beacon = beacon_frame(Order::Le, &[(0, b"net"), (1, &[0x82])]);
    let data = data_frame(Order::Le, false, true);
    let rts = control_frame(Order::Le, 0b1011);
    let bytes = capture(Order::Le, &[&beacon, &data, &rts]);

    let mut session = IngestSession::new(SliceSource(bytes), Vec::<Event>::new());
    session.parse().unwrap();

    assert_eq!(session.packet_count(), 3);
    let packets = session.sink().iter().filter(|e| matches!(e, Event::Packet(..))).count();
    assert_eq!(packets as u64, session.packet_count());
}

#[test]
fn digest_attached_to_completed_records() {
    let frame = beacon_frame(Order::Be, &[(0, b"test")]);
    let bytes = capture(Order::Be, &[&frame]);

    let mut session = IngestSession::new(SliceSource(bytes), Vec::<Event>::new())
        .with_digest(Box::new(|data| hex::encode(data)));
    session.parse().unwrap();
    let events = session.into_sink();

    // the header event fires before the body is read, so it has no digest yet
    match &events[1] {
        Event::PacketHeader(header) => assert_eq!(header.digest, None),
        other => panic!("Expected a packet header, got {other:?}"),
    }

    match &events[3] {
        Event::Packet(header, _) => assert_eq!(header.digest.as_deref(), Some(hex::encode(&frame).as_str())),
        other => panic!("Expected a packet, got {other:?}"),
    }
}

#[test]
fn events_keep_record_order() {
    let beacon = beacon_frame(Order::Be, &[(0, b"a")]);
    let ack = short_control_frame(Order::Be, 0b1101);
    let events = run(capture(Order::Be, &[&beacon, &ack]));

    let kinds: Vec<&str> = events
        .iter()
        .map(|e| match e {
            Event::FileHeader(_) => "file_header",
            Event::PacketHeader(_) => "packet_header",
            Event::PacketData(_) => "packet_data",
            Event::Packet(..) => "packet",
            Event::Finished => "finished",
            Event::Error(_) => "error",
        })
        .collect();

    assert_eq!(kinds, [
        "file_header",
        "packet_header",
        "packet_data",
        "packet",
        "packet_header",
        "packet_data",
        "packet",
        "finished",
    ]);
}
