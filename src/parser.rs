use byteorder::{BigEndian, LittleEndian};
use log::{debug, trace};

use crate::dot11::Frame;
use crate::errors::PcapError;
use crate::events::{DigestFn, EventSink};
use crate::pcap::{GlobalHeader, RecordHeader};
use crate::Endianness;

/// Decode state of a [`StreamParser`].
///
/// After the file header, the machine alternates between `PacketHeader` and
/// `PacketBody` indefinitely; it never terminates by itself, the session
/// stops driving it at end-of-stream. States carry the data the next step
/// needs, so the machine can never be in a state it does not know how to
/// handle.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseState {
    /// Waiting for the 24-byte global file header
    FileHeader,
    /// Waiting for the next 16-byte record header
    PacketHeader {
        /// Byte order derived from the file header
        endianness: Endianness,
    },
    /// Waiting for the captured bytes of the in-flight record
    PacketBody {
        /// Byte order derived from the file header
        endianness: Endianness,
        /// Header of the record whose body is awaited
        record: RecordHeader,
    },
}

/// Resumable decoder for a pcap byte stream delivered in arbitrary chunks.
///
/// [`StreamParser::drain`] decodes as many complete records as the buffer
/// holds and stops, without losing state, as soon as a decoder needs more
/// bytes, so feeding the same bytes in any chunking produces the same event
/// sequence.
#[derive(Debug)]
pub struct StreamParser {
    state: ParseState,
    header: Option<GlobalHeader>,
    packet_count: u64,
}

impl StreamParser {
    /// Creates a parser waiting for the global file header.
    pub fn new() -> StreamParser {
        StreamParser {
            state: ParseState::FileHeader,
            header: None,
            packet_count: 0,
        }
    }

    /// Decodes as many complete records as `buffer` holds, emitting events
    /// to `sink`, and removes the consumed bytes from the buffer front.
    ///
    /// Returns `Ok` when the buffer simply ran out of data (resume by
    /// calling again once more bytes were appended). Any error is fatal for
    /// the stream; the failing step consumes nothing.
    pub fn drain<E: EventSink>(
        &mut self,
        buffer: &mut Vec<u8>,
        digest: Option<&DigestFn>,
        sink: &mut E,
    ) -> Result<(), PcapError> {
        let mut pos = 0;

        let result = loop {
            match self.step(&buffer[pos..], digest, sink) {
                Ok(consumed) => pos += consumed,
                Err(PcapError::IncompleteBuffer(needed)) => {
                    trace!("drain paused: {}B buffered, {}B more needed", buffer.len() - pos, needed);
                    break Ok(());
                },
                Err(e) => break Err(e),
            }
        };

        buffer.drain(..pos);
        result
    }

    /// Attempts the decoder for the current state against `slice`.
    /// Returns the number of bytes consumed on success.
    fn step<E: EventSink>(
        &mut self,
        slice: &[u8],
        digest: Option<&DigestFn>,
        sink: &mut E,
    ) -> Result<usize, PcapError> {
        match self.state.clone() {
            ParseState::FileHeader => {
                let (rem, header) = GlobalHeader::from_slice(slice)?;
                let consumed = slice.len() - rem.len();

                debug!(
                    "file header: version {}.{}, {:?} byte order, link type {}",
                    header.version_major, header.version_minor, header.endianness, header.link_layer_type
                );

                sink.on_file_header(&header);
                self.state = ParseState::PacketHeader { endianness: header.endianness };
                self.header = Some(header);

                Ok(consumed)
            },

            ParseState::PacketHeader { endianness } => {
                let (rem, record) = match endianness {
                    Endianness::Big => RecordHeader::from_slice::<BigEndian>(slice)?,
                    Endianness::Little => RecordHeader::from_slice::<LittleEndian>(slice)?,
                };
                let consumed = slice.len() - rem.len();

                sink.on_packet_header(&record);
                self.state = ParseState::PacketBody { endianness, record };

                Ok(consumed)
            },

            ParseState::PacketBody { endianness, mut record } => {
                let captured_len = record.captured_len as usize;
                if slice.len() < captured_len {
                    return Err(PcapError::IncompleteBuffer(captured_len - slice.len()));
                }

                let data = &slice[..captured_len];

                if let Some(digest) = digest {
                    record.digest = Some(digest(data));
                }

                let frame = match endianness {
                    Endianness::Big => Frame::from_slice::<BigEndian>(data)?,
                    Endianness::Little => Frame::from_slice::<LittleEndian>(data)?,
                };

                sink.on_packet_data(&frame);
                sink.on_packet(&record, &frame);

                self.packet_count += 1;
                self.state = ParseState::PacketHeader { endianness };

                Ok(captured_len)
            },
        }
    }

    /// The decoded global header, once the stream got that far.
    pub fn header(&self) -> Option<&GlobalHeader> {
        self.header.as_ref()
    }

    /// Current decode state.
    pub fn state(&self) -> &ParseState {
        &self.state
    }

    /// Number of fully decoded records since the last reset.
    pub fn packet_count(&self) -> u64 {
        self.packet_count
    }

    pub(crate) fn reset_packet_count(&mut self) {
        self.packet_count = 0;
    }
}

impl Default for StreamParser {
    fn default() -> Self {
        StreamParser::new()
    }
}
