use crate::dot11::Frame;
use crate::errors::PcapError;
use crate::pcap::{GlobalHeader, RecordHeader};

/// Digest function applied to the raw captured bytes of each record.
///
/// The crate does not constrain the algorithm; whatever hex string the
/// function returns is attached to the record's header.
pub type DigestFn = Box<dyn Fn(&[u8]) -> String + Send>;

/// Receives the decoded records of a capture stream.
///
/// Events arrive in strict record order: `on_file_header` exactly once,
/// then for each record `on_packet_header`, and once its body is buffered
/// and decoded, `on_packet_data` and `on_packet`. All methods
/// default to doing nothing, so a sink only implements what it needs.
pub trait EventSink {
    /// The global file header has been decoded.
    fn on_file_header(&mut self, _header: &GlobalHeader) {}

    /// A record header has been decoded; its body may not be buffered yet.
    fn on_packet_header(&mut self, _header: &RecordHeader) {}

    /// A record body has been decoded into a frame.
    fn on_packet_data(&mut self, _frame: &Frame) {}

    /// A whole record is complete; the header carries the digest when a
    /// digest function is installed.
    fn on_packet(&mut self, _header: &RecordHeader, _frame: &Frame) {}

    /// The source reached end-of-stream with live-tail disabled.
    fn on_finished(&mut self) {}

    /// The session hit an I/O failure or a fatal decode error.
    fn on_error(&mut self, _error: &PcapError) {}
}

/// Owned form of the events a session emits.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Decoded global file header
    FileHeader(GlobalHeader),
    /// Decoded record header
    PacketHeader(RecordHeader),
    /// Decoded frame
    PacketData(Frame),
    /// Completed record
    Packet(RecordHeader, Frame),
    /// End of a non-live-tail run
    Finished,
    /// Rendered session error
    Error(String),
}

/// Collects every event in order, for pull-style consumption after a run.
impl EventSink for Vec<Event> {
    fn on_file_header(&mut self, header: &GlobalHeader) {
        self.push(Event::FileHeader(*header));
    }

    fn on_packet_header(&mut self, header: &RecordHeader) {
        self.push(Event::PacketHeader(header.clone()));
    }

    fn on_packet_data(&mut self, frame: &Frame) {
        self.push(Event::PacketData(frame.clone()));
    }

    fn on_packet(&mut self, header: &RecordHeader, frame: &Frame) {
        self.push(Event::Packet(header.clone(), frame.clone()));
    }

    fn on_finished(&mut self) {
        self.push(Event::Finished);
    }

    fn on_error(&mut self, error: &PcapError) {
        self.push(Event::Error(error.to_string()));
    }
}
