use byteorder::ByteOrder;

use super::{FrameBody, FrameControl};
use crate::byte_cursor::ByteCursor;
use crate::errors::PcapError;

/// Fragment and sequence numbers of a frame.
///
/// Absent on frames whose captured data ends before the sequence-control
/// field (short control frames such as CTS and ACK).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SequenceControl {
    /// Fragment number (low 4 bits)
    pub fragment_number: u8,
    /// Sequence number (high 12 bits)
    pub sequence_number: u16,
}

impl SequenceControl {
    fn from_raw(raw: u16) -> SequenceControl {
        SequenceControl {
            fragment_number: (raw & 0xF) as u8,
            sequence_number: (raw & 0xFFF0) >> 4,
        }
    }
}

/// The addresses of a frame, rendered as colon-separated hex.
///
/// Which fields are populated depends on the frame type/subtype and, for
/// non-control frames, on the (toDS, fromDS) pair.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AddressSet {
    /// Receiver address
    pub ra: Option<String>,
    /// Transmitter address
    pub ta: Option<String>,
    /// Destination address
    pub da: Option<String>,
    /// Source address
    pub sa: Option<String>,
    /// Identifier of the BSS the frame belongs to
    pub bssid: Option<String>,
}

/// One decoded 802.11 frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Bit-packed first two bytes of the frame
    pub frame_control: FrameControl,
    /// Duration/ID field, raw value
    pub duration_id: u16,
    /// Fragment and sequence numbers
    pub sequence_control: Option<SequenceControl>,
    /// Addresses selected per the frame's type and DS bits
    pub addresses: AddressSet,
    /// Frame body, decoded for Beacon frames only
    pub body: Option<FrameBody>,
}

impl Frame {
    /// Decodes one frame from exactly the captured bytes of a record.
    ///
    /// The caller must have checked that `data` holds the record's whole
    /// captured length; everything here is bounded by that slice, so bytes
    /// of a following record can never leak into this frame.
    pub fn from_slice<B: ByteOrder>(data: &[u8]) -> Result<Frame, PcapError> {
        let mut cursor = ByteCursor::new(data);
        if cursor.remaining() < 4 {
            return Err(PcapError::FrameTruncated(data.len()));
        }

        let frame_control = FrameControl::from_raw(cursor.read_u16::<B>()?);
        let duration_id = cursor.read_u16::<B>()?;

        let sequence_control = data
            .get(22..24)
            .map(|bytes| SequenceControl::from_raw(B::read_u16(bytes)));

        let addresses = assign_addresses(&frame_control, data);

        let body = if frame_control.is_beacon() {
            FrameBody::from_slice::<B>(data)?
        } else {
            None
        };

        Ok(Frame {
            frame_control,
            duration_id,
            sequence_control,
            addresses,
            body,
        })
    }
}

/// Selects the populated address fields for a frame.
///
/// Control frames carry their addresses per subtype; every other type uses
/// the (toDS, fromDS) pair to interpret the three leading address slots. An
/// address whose source bytes fall outside the captured slice stays unset.
fn assign_addresses(frame_control: &FrameControl, data: &[u8]) -> AddressSet {
    let mut set = AddressSet::default();

    if frame_control.is_control() {
        match frame_control.subtype {
            // PS-Poll
            0b1010 => {
                set.bssid = mac(data, 4, 10);
                set.ta = mac(data, 10, 16);
            },
            // RTS
            0b1011 => {
                set.ra = mac(data, 4, 10);
                set.ta = mac(data, 10, 16);
            },
            // CTS and ACK
            0b1100 | 0b1101 => {
                set.ra = mac(data, 4, 10);
            },
            // CF-End variants
            0b1110 | 0b1111 => {
                set.ra = mac(data, 4, 10);
                set.bssid = mac(data, 10, 16);
            },
            _ => {},
        }
    }
    else {
        match (frame_control.to_ds, frame_control.from_ds) {
            (true, true) => {
                set.ra = mac(data, 4, 10);
                set.ta = mac(data, 10, 16);
                set.da = mac(data, 16, 22);
                set.sa = mac(data, 24, 30);
            },
            (false, true) => {
                set.da = mac(data, 4, 10);
                set.bssid = mac(data, 10, 16);
                set.sa = mac(data, 16, 22);
            },
            (true, false) => {
                set.bssid = mac(data, 4, 10);
                set.sa = mac(data, 10, 16);
                set.da = mac(data, 16, 22);
            },
            (false, false) => {
                set.da = mac(data, 4, 10);
                set.sa = mac(data, 10, 16);
                set.bssid = mac(data, 16, 22);
            },
        }
    }

    set
}

/// Renders `data[start..end]` as `xx:xx:xx:xx:xx:xx`.
fn mac(data: &[u8], start: usize, end: usize) -> Option<String> {
    let bytes = data.get(start..end)?;
    Some(bytes.iter().map(|b| format!("{b:02x}")).collect::<Vec<_>>().join(":"))
}
