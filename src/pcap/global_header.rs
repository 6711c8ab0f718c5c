//! This module contains the [`GlobalHeader`] struct which represents the
//! global header of a pcap capture file.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::byte_cursor::ByteCursor;
use crate::errors::PcapError;
use crate::Endianness;

/// Length of the global header at the start of a capture file.
pub const GLOBAL_HEADER_LEN: usize = 24;

/// Pcap global header.
///
/// The magic number is always read big-endian, so a little-endian file
/// reports `0xD4C3B2A1` here; the derived byte order is in `endianness`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct GlobalHeader {
    /// Magic number
    pub magic_number: u32,

    /// Major version number
    pub version_major: u16,

    /// Minor version number
    pub version_minor: u16,

    /// GMT to local timezone correction, should always be 0
    pub gmt_offset: i32,

    /// Timestamp accuracy, should always be 0
    pub ts_accuracy: u32,

    /// Max length of captured packet, typically 65535
    pub snaplen: u32,

    /// Link-layer type of the captured frames
    pub link_layer_type: u32,

    /// Byte order derived from the magic number
    pub endianness: Endianness,
}

impl GlobalHeader {
    /// Decodes a `GlobalHeader` from a slice of bytes and returns the
    /// remainder.
    ///
    /// Returns [`PcapError::IncompleteBuffer`] if fewer than 24 bytes are
    /// available, and [`PcapError::InvalidMagicNumber`] if the leading bytes
    /// are not a pcap magic number; in that case nothing is consumed and
    /// the stream cannot be decoded at all.
    pub fn from_slice(slice: &[u8]) -> Result<(&[u8], GlobalHeader), PcapError> {
        let mut cursor = ByteCursor::new(slice);
        cursor.require(GLOBAL_HEADER_LEN)?;

        // The magic number is always read big-endian, its value tells us
        // how to read every other multi-byte field of the file.
        let magic_number = cursor.read_u32::<BigEndian>()?;

        return match magic_number {
            0xA1B2C3D4 => init_global_header::<BigEndian>(cursor, magic_number, Endianness::Big),
            0xD4C3B2A1 => init_global_header::<LittleEndian>(cursor, magic_number, Endianness::Little),
            _ => Err(PcapError::InvalidMagicNumber(magic_number)),
        };

        // Inner function used for the initialisation of the `GlobalHeader`
        fn init_global_header<B: ByteOrder>(
            mut cursor: ByteCursor,
            magic_number: u32,
            endianness: Endianness,
        ) -> Result<(&[u8], GlobalHeader), PcapError> {
            let header = GlobalHeader {
                magic_number,
                version_major: cursor.read_u16::<B>()?,
                version_minor: cursor.read_u16::<B>()?,
                gmt_offset: cursor.read_i32::<B>()?,
                ts_accuracy: cursor.read_u32::<B>()?,
                snaplen: cursor.read_u32::<B>()?,
                link_layer_type: cursor.read_u32::<B>()?,
                endianness,
            };

            Ok((cursor.rest(), header))
        }
    }
}
