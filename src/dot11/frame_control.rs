use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Label used for (type, subtype) combinations without an assigned name.
const RESERVED_UNKNOWN: &str = "reserved/unknown";

/// Frame type names indexed by the 2-bit type field.
static TYPE_NAMES: [&str; 4] = ["Management", "Control", "Data", "Reserved"];

/// Subtype names keyed by (type, subtype).
static SUBTYPE_NAMES: Lazy<HashMap<(u8, u8), &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Management
        ((0b00, 0b0000), "Association Request"),
        ((0b00, 0b0001), "Association Response"),
        ((0b00, 0b0010), "Reassociation Request"),
        ((0b00, 0b0011), "Reassociation Response"),
        ((0b00, 0b0100), "Probe Request"),
        ((0b00, 0b0101), "Probe Response"),
        ((0b00, 0b1000), "Beacon"),
        ((0b00, 0b1001), "ATIM"),
        ((0b00, 0b1010), "Dissociation"),
        ((0b00, 0b1011), "Authentication"),
        ((0b00, 0b1100), "Deauthentication"),
        // Control
        ((0b01, 0b1010), "PS-Poll"),
        ((0b01, 0b1011), "RTS"),
        ((0b01, 0b1100), "CTS"),
        ((0b01, 0b1101), "ACK"),
        ((0b01, 0b1110), "CF End"),
        ((0b01, 0b1111), "CF End + CF ACK"),
        // Data
        ((0b10, 0b0000), "Data"),
        ((0b10, 0b0001), "Data + CF ACK"),
        ((0b10, 0b0010), "Data + CF Poll"),
        ((0b10, 0b0011), "Data + CF ACK + CF Poll"),
        ((0b10, 0b0100), "Null Function(No Data)"),
        ((0b10, 0b0101), "CF ACK(no Data)"),
        ((0b10, 0b0110), "CF Poll(no Data)"),
        ((0b10, 0b0111), "CF ACK + CF Poll(no Data)"),
    ])
});

/// The bit-packed first two bytes of an 802.11 frame.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FrameControl {
    /// Protocol version (2 bits)
    pub version: u8,
    /// Frame type (2 bits)
    pub type_: u8,
    /// Frame subtype (4 bits)
    pub subtype: u8,
    /// Frame is headed to the distribution system
    pub to_ds: bool,
    /// Frame is leaving the distribution system
    pub from_ds: bool,
    /// More fragments of this frame follow
    pub more_fragments: bool,
    /// Retransmission of an earlier frame
    pub retry: bool,
    /// Sender is in power-save mode
    pub power_management: bool,
    /// More frames are buffered for the receiver
    pub more_data: bool,
    /// Frame body is encrypted
    pub security: bool,
    /// Order/reserved bit
    pub reserved: bool,
    /// Display name of the frame type
    pub type_name: &'static str,
    /// Display name of the frame subtype
    pub subtype_name: &'static str,
}

impl FrameControl {
    /// Extracts the frame-control fields from the raw 16-bit value.
    pub fn from_raw(raw: u16) -> FrameControl {
        let version = (raw & 0x3) as u8;
        let type_ = ((raw & 0xC) >> 2) as u8;
        let subtype = ((raw & 0xF0) >> 4) as u8;
        let (type_name, subtype_name) = labels(type_, subtype);

        FrameControl {
            version,
            type_,
            subtype,
            to_ds: raw & 0x100 != 0,
            from_ds: raw & 0x200 != 0,
            more_fragments: raw & 0x400 != 0,
            retry: raw & 0x800 != 0,
            power_management: raw & 0x1000 != 0,
            more_data: raw & 0x2000 != 0,
            security: raw & 0x4000 != 0,
            reserved: raw & 0x8000 != 0,
            type_name,
            subtype_name,
        }
    }

    /// True for control frames (type `0b01`).
    pub fn is_control(&self) -> bool {
        self.type_ == 0b01
    }

    /// True for management frames (type `0b00`).
    pub fn is_management(&self) -> bool {
        self.type_ == 0b00
    }

    /// True for Beacon frames.
    pub fn is_beacon(&self) -> bool {
        self.is_management() && self.subtype == 0b1000
    }
}

/// Display labels for a (type, subtype) pair.
fn labels(type_: u8, subtype: u8) -> (&'static str, &'static str) {
    let type_name = TYPE_NAMES.get(type_ as usize).copied().unwrap_or(RESERVED_UNKNOWN);
    let subtype_name = SUBTYPE_NAMES.get(&(type_, subtype)).copied().unwrap_or(RESERVED_UNKNOWN);

    (type_name, subtype_name)
}
