#![no_main]
use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use pcap_tail::{ChunkSource, Event, IngestSession};

struct BytesSource(Vec<u8>);

impl ChunkSource for BytesSource {
    type Reader = Cursor<Vec<u8>>;

    fn open_at(&mut self, offset: u64) -> std::io::Result<Cursor<Vec<u8>>> {
        Ok(Cursor::new(self.0.get(offset as usize..).unwrap_or_default().to_vec()))
    }
}

fuzz_target!(|data: &[u8]| {
    let mut session = IngestSession::new(BytesSource(data.to_vec()), Vec::<Event>::new());
    let _ = session.parse();
});
