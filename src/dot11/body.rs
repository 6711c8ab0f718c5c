use byteorder::ByteOrder;
use log::warn;

use super::element_name;
use crate::byte_cursor::ByteCursor;
use crate::errors::PcapError;

/// Offset of the first information element inside a Beacon frame.
const ELEMENTS_OFFSET: usize = 36;

/// Fixed Beacon body fields (timestamp, interval, capability) end here.
const BODY_FIXED_LEN: usize = 36;

/// Length of the frame-check sequence trailing the captured frame.
const FCS_LEN: usize = 4;

/// Body of a Beacon frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBody {
    /// 8-byte TSF counter, rendered as 16 hex digits in transmission order
    pub timestamp: String,
    /// Interval between Beacon transmissions, in time units
    pub beacon_interval: u16,
    /// Capability-information field, raw value; individual bits are not
    /// decoded
    pub capability_info: u16,
    /// Information elements in the order they appear on the air
    pub elements: Vec<ElementTag>,
}

impl FrameBody {
    /// Decodes the body of a Beacon frame from the captured frame slice.
    ///
    /// Returns `None` when the capture ends before the fixed body fields.
    pub fn from_slice<B: ByteOrder>(data: &[u8]) -> Result<Option<FrameBody>, PcapError> {
        if data.len() < BODY_FIXED_LEN {
            warn!("Beacon frame too short for its fixed body fields: {}B", data.len());
            return Ok(None);
        }

        let mut cursor = ByteCursor::new(data);
        cursor.skip(24)?;

        // Reading the counter as u64 and printing it big-endian reproduces
        // the on-air byte order for both file byte orders.
        let timestamp = format!("{:016x}", cursor.read_u64::<B>()?);
        let beacon_interval = cursor.read_u16::<B>()?;
        let capability_info = cursor.read_u16::<B>()?;

        let elements = walk_elements(data);

        Ok(Some(FrameBody {
            timestamp,
            beacon_interval,
            capability_info,
            elements,
        }))
    }

    /// The network name carried by the SSID element, if any.
    pub fn ssid(&self) -> Option<&str> {
        self.elements.iter().find_map(|tag| match &tag.payload {
            ElementPayload::Ssid(name) => Some(name.as_str()),
            _ => None,
        })
    }
}

/// One information element of a frame body.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementTag {
    /// Element ID
    pub id: u8,
    /// Declared payload length
    pub len: u8,
    /// Display name from the element catalog
    pub name: Option<&'static str>,
    /// Decoded payload, for the element kinds this crate decodes
    pub payload: ElementPayload,
}

/// Payload of an information element.
#[derive(Clone, Debug, PartialEq)]
pub enum ElementPayload {
    /// SSID text (element ID 0)
    Ssid(String),
    /// Supported or extended supported rates (element IDs 1 and 50)
    Rates(Vec<RateEntry>),
    /// Payload left undecoded
    Opaque,
    /// The declared length runs past the captured frame; the payload could
    /// not be read
    Truncated,
}

/// One entry of a supported-rates element.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RateEntry {
    /// Rate is part of the basic (mandatory) rate set
    pub basic: bool,
    /// Rate in Mbps, in 0.5 Mbps steps
    pub mbps: f32,
}

impl RateEntry {
    fn from_raw(raw: u8) -> RateEntry {
        RateEntry {
            basic: raw & 0x80 != 0,
            mbps: (raw & 0x7F) as f32 * 0.5,
        }
    }
}

/// Walks the information elements starting at [`ELEMENTS_OFFSET`].
///
/// The walk stops before the trailing frame-check sequence. The position
/// advances by the declared length regardless of decode outcome; a decoded
/// payload that would run past the captured frame yields a
/// [`ElementPayload::Truncated`] tag and ends the walk, leaving the tags
/// decoded so far intact.
fn walk_elements(data: &[u8]) -> Vec<ElementTag> {
    let mut elements = Vec::new();

    let limit = data.len().saturating_sub(FCS_LEN);
    let mut pos = ELEMENTS_OFFSET;

    while pos < limit {
        let id = data[pos];
        let len = data[pos + 1];

        let payload = decode_payload(id, len, data, pos);
        let truncated = payload == ElementPayload::Truncated;

        elements.push(ElementTag {
            id,
            len,
            name: element_name(id),
            payload,
        });

        if truncated {
            warn!("element {id} declares {len}B past the captured frame, skipping remaining elements");
            break;
        }

        pos += len as usize + 2;
    }

    elements
}

fn decode_payload(id: u8, len: u8, data: &[u8], pos: usize) -> ElementPayload {
    match id {
        0 => match data.get(pos + 2..pos + 2 + len as usize) {
            Some(bytes) => ElementPayload::Ssid(String::from_utf8_lossy(bytes).into_owned()),
            None => ElementPayload::Truncated,
        },
        1 | 50 => match data.get(pos + 2..pos + 2 + len as usize) {
            Some(bytes) => ElementPayload::Rates(bytes.iter().copied().map(RateEntry::from_raw).collect()),
            None => ElementPayload::Truncated,
        },
        _ => ElementPayload::Opaque,
    }
}
