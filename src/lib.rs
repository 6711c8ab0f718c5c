//! Incremental decoder for pcap capture files holding raw 802.11 (WiFi)
//! frames.
//!
//! The decoder consumes the file in arbitrary-sized chunks and emits one
//! event per decoded record, so it can read a finished capture in one pass
//! or follow a file that is still being written ("live-tail"): an
//! [`IngestSession`] keeps a persistent stream offset and resumes decoding
//! exactly where the previous read stopped.
//!
//! # Examples
//!
//! ```no_run
//! use pcap_tail::{Event, FileSource, IngestSession};
//!
//! let source = FileSource::new("capture.pcap");
//! let mut session = IngestSession::new(source, Vec::<Event>::new());
//!
//! session.parse().expect("Error parsing file");
//!
//! for event in session.into_sink() {
//!     if let Event::Packet(header, frame) = event {
//!         println!(
//!             "{} {} {}B",
//!             frame.frame_control.type_name, frame.frame_control.subtype_name, header.captured_len
//!         );
//!     }
//! }
//! ```

mod byte_cursor;
mod common;
pub mod dot11;
pub mod errors;
mod events;
mod parser;
pub mod pcap;
mod session;

pub use common::Endianness;
pub use errors::PcapError;
pub use events::{DigestFn, Event, EventSink};
pub use parser::{ParseState, StreamParser};
pub use session::{ChunkSource, FileSource, IngestSession};
