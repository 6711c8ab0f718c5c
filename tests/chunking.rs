//! Chunk-boundary invariance: however the stream is fragmented, the
//! decoded event sequence must be identical.

use pcap_tail::{Event, IngestSession};

mod common;
use common::*;

fn test_capture() -> Vec<u8> {
    let beacon = beacon_frame(Order::Be, &[(0, b"lab"), (1, &[0x82, 0x84, 0x0B]), (3, &[0x01])]);
    let data = data_frame(Order::Be, true, false);
    let ack = short_control_frame(Order::Be, 0b1101);
    capture(Order::Be, &[&beacon, &data, &ack])
}

fn run_events<S: pcap_tail::ChunkSource>(source: S) -> Vec<Event> {
    let mut session = IngestSession::new(source, Vec::<Event>::new());
    session.parse().unwrap();
    session.into_sink()
}

#[test]
fn any_two_chunk_split_decodes_identically() {
    let data = test_capture();
    let baseline = run_events(SliceSource(data.clone()));
    assert!(baseline.iter().filter(|e| matches!(e, Event::Packet(..))).count() == 3);

    for split_at in 1..data.len() {
        let events = run_events(SplitSource { data: data.clone(), split_at });
        assert_eq!(events, baseline, "event mismatch for split at byte {split_at}");
    }
}

#[test]
fn trickled_chunks_decode_identically() {
    let data = test_capture();
    let baseline = run_events(SliceSource(data.clone()));

    for chunk_len in [1, 3, 7, 16, 64] {
        let events = run_events(TrickleSource { data: data.clone(), chunk_len });
        assert_eq!(events, baseline, "event mismatch for {chunk_len}B chunks");
    }
}
