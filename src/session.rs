use std::fs::File;
use std::io::{ErrorKind, Read, Seek, SeekFrom};
use std::path::PathBuf;

use log::{debug, error, trace};

use crate::errors::PcapError;
use crate::events::{DigestFn, EventSink};
use crate::parser::StreamParser;
use crate::pcap::GlobalHeader;
use crate::Endianness;

/// Read size per chunk pulled from the source.
const CHUNK_LEN: usize = 64 * 1024;

/// Byte-stream source of a session.
///
/// A source must deliver the stream's bytes starting at a given offset, in
/// order. The returned reader signals end-of-stream (`Ok(0)`) and I/O
/// failure (`Err`) as distinct conditions.
pub trait ChunkSource {
    /// Reader over the bytes at and after the requested offset.
    type Reader: Read;

    /// Opens a read of the stream starting at `offset`.
    fn open_at(&mut self, offset: u64) -> std::io::Result<Self::Reader>;
}

/// [`ChunkSource`] over a file on disk.
///
/// The file is reopened on every [`IngestSession::parse`] call, so a file
/// that grows between calls is picked up from where the previous read left
/// off.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> FileSource {
        FileSource { path: path.into() }
    }
}

impl ChunkSource for FileSource {
    type Reader = File;

    fn open_at(&mut self, offset: u64) -> std::io::Result<File> {
        let mut file = File::open(&self.path)?;
        file.seek(SeekFrom::Start(offset))?;
        Ok(file)
    }
}

/// Owns the accumulating buffer and drives the decode of a capture stream,
/// emitting one event per decoded record.
///
/// A session decodes either a complete file in one [`parse`] call, or, in
/// live-tail mode, a growing file across repeated [`parse`] calls, each
/// resuming at the exact byte where the previous read stopped decoding.
///
/// [`parse`]: IngestSession::parse
pub struct IngestSession<S: ChunkSource, E: EventSink> {
    source: S,
    sink: E,
    parser: StreamParser,
    buffer: Vec<u8>,
    offset: u64,
    live_tail: bool,
    digest: Option<DigestFn>,
    stream_open: bool,
    aborted: bool,
}

impl<S: ChunkSource, E: EventSink> IngestSession<S, E> {
    /// Creates a session reading from `source` and emitting to `sink`.
    pub fn new(source: S, sink: E) -> IngestSession<S, E> {
        IngestSession {
            source,
            sink,
            parser: StreamParser::new(),
            buffer: Vec::new(),
            offset: 0,
            live_tail: false,
            digest: None,
            stream_open: false,
            aborted: false,
        }
    }

    /// Enables live-tail mode: the persistent offset follows the stream so
    /// a later `parse()` resumes where this one stopped, and no `Finished`
    /// event is emitted at end-of-stream.
    pub fn with_live_tail(mut self, enabled: bool) -> Self {
        self.live_tail = enabled;
        self
    }

    /// Starts reading the stream at `offset` instead of 0.
    pub fn with_start_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// Installs a digest function applied to the raw captured bytes of
    /// every record; the result is attached to the record's header.
    pub fn with_digest(mut self, digest: DigestFn) -> Self {
        self.digest = Some(digest);
        self
    }

    /// Opens a read of the source at the session's offset and decodes until
    /// end-of-stream.
    ///
    /// A call while a read is already open is dropped, not queued. After a
    /// fatal decode error the session stays closed and calls are dropped
    /// too. An `Err(PcapError::IoError)` is recoverable: calling `parse()`
    /// again retries from the persisted offset.
    pub fn parse(&mut self) -> Result<(), PcapError> {
        if self.stream_open || self.aborted {
            return Ok(());
        }
        self.stream_open = true;

        self.buffer.clear();
        self.parser.reset_packet_count();

        debug!("opening source at offset {}", self.offset);
        let mut reader = match self.source.open_at(self.offset) {
            Ok(reader) => reader,
            Err(e) => return Err(self.fail_io(e)),
        };

        let mut chunk = vec![0_u8; CHUNK_LEN];
        loop {
            match reader.read(&mut chunk) {
                // End of stream
                Ok(0) => {
                    self.stream_open = false;

                    if self.live_tail && !self.buffer.is_empty() {
                        // The tail of the stream is an incomplete record;
                        // back the offset up so the next read re-delivers
                        // exactly those bytes.
                        trace!("rolling offset back by {}B of undecoded tail", self.buffer.len());
                        self.offset -= self.buffer.len() as u64;
                    }

                    if !self.live_tail {
                        self.sink.on_finished();
                    }

                    return Ok(());
                },

                Ok(n) => {
                    if self.live_tail {
                        self.offset += n as u64;
                    }

                    self.buffer.extend_from_slice(&chunk[..n]);
                    if let Err(e) = self.parser.drain(&mut self.buffer, self.digest.as_ref(), &mut self.sink) {
                        error!("decode failed, aborting session: {e}");
                        self.stream_open = false;
                        self.aborted = true;
                        self.sink.on_error(&e);
                        return Err(e);
                    }
                },

                Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,

                Err(e) => return Err(self.fail_io(e)),
            }
        }
    }

    /// Closes the stream on an I/O failure and surfaces it to the sink.
    fn fail_io(&mut self, e: std::io::Error) -> PcapError {
        error!("source failed: {e}");
        self.stream_open = false;

        let err = PcapError::IoError(e);
        self.sink.on_error(&err);
        err
    }

    /// Stops the persistent offset from following the stream; the next
    /// end-of-stream emits `Finished` again. Does not interrupt a read that
    /// is already open.
    pub fn disable_live_tail(&mut self) {
        self.live_tail = false;
    }

    /// Number of records fully decoded by the current/last `parse()` run.
    pub fn packet_count(&self) -> u64 {
        self.parser.packet_count()
    }

    /// The decoded global header, once the stream got that far.
    pub fn header(&self) -> Option<&GlobalHeader> {
        self.parser.header()
    }

    /// Byte order of the stream, fixed once the global header is decoded.
    pub fn byte_order(&self) -> Option<Endianness> {
        self.parser.header().map(|h| h.endianness)
    }

    /// Offset of the next byte the session will request from the source.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// True while a read of the source is open.
    pub fn is_open(&self) -> bool {
        self.stream_open
    }

    /// True after a fatal decode error; the session no longer parses.
    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    /// The event sink.
    pub fn sink(&self) -> &E {
        &self.sink
    }

    /// The event sink, mutably.
    pub fn sink_mut(&mut self) -> &mut E {
        &mut self.sink
    }

    /// Consumes the session, returning the event sink.
    pub fn into_sink(self) -> E {
        self.sink
    }
}
