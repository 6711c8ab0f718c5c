use byteorder::ByteOrder;

use crate::byte_cursor::ByteCursor;
use crate::errors::PcapError;

/// Length of the header preceding each captured record.
pub const RECORD_HEADER_LEN: usize = 16;

/// Per-record pcap header.
///
/// No range validation is performed here; checking `captured_len` against
/// the buffered data is the caller's responsibility.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordHeader {
    /// Capture timestamp, seconds part
    pub ts_sec: u32,
    /// Capture timestamp, microseconds part
    pub ts_usec: u32,
    /// Number of bytes of the frame saved in the file
    pub captured_len: u32,
    /// Original length of the frame on the air
    pub original_len: u32,
    /// Digest over the raw captured bytes, when a digest function is
    /// installed on the session
    pub digest: Option<String>,
}

impl RecordHeader {
    /// Decodes a `RecordHeader` from a slice of bytes and returns the
    /// remainder.
    pub fn from_slice<B: ByteOrder>(slice: &[u8]) -> Result<(&[u8], RecordHeader), PcapError> {
        let mut cursor = ByteCursor::new(slice);
        cursor.require(RECORD_HEADER_LEN)?;

        let header = RecordHeader {
            ts_sec: cursor.read_u32::<B>()?,
            ts_usec: cursor.read_u32::<B>()?,
            captured_len: cursor.read_u32::<B>()?,
            original_len: cursor.read_u32::<B>()?,
            digest: None,
        };

        Ok((cursor.rest(), header))
    }
}
