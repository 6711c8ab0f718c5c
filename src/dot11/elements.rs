//! Static catalog of 802.11 information-element IDs and their display
//! names. Pure lookup data.

/// Returns the display name of an information element, or `None` for
/// reserved/unassigned IDs.
pub fn element_name(id: u8) -> Option<&'static str> {
    let name = match id {
        0 => "Service Set Identity (SSID)",
        1 => "Supported Rates",
        3 => "DS Parameter Set",
        4 => "CF Parameter Set",
        5 => "Traffic Indication Map (TIM)",
        6 => "IBSS Parameter Set",
        7 => "Country",
        8 => "Hopping Pattern Parameters",
        9 => "Hopping Pattern Table",
        10 => "Request",
        16 => "Challenge text",
        32 => "Power Constraint",
        33 => "Power Capability",
        34 => "Transmit Power Control (TPC) Request",
        35 => "TPC Report",
        36 => "Supported Channels",
        37 => "Channel Switch Announcement",
        38 => "Measurement Request",
        39 => "Measurement Report",
        40 => "Quiet",
        41 => "IBSS DFS",
        42 => "ERP information",
        48 => "Robust Security Network",
        50 => "Extended Supported Rates",
        51 => "AP Channel Report",
        52 => "Neighbor Report",
        53 => "RCPI",
        54 => "Mobility Domain (MDE)",
        55 => "Fast BSS Transition (FTE)",
        56 => "Timeout Interval",
        57 => "RIC Data (RDE)",
        58 => "DSE Registered Location",
        59 => "Supported Operating Classes",
        60 => "Extended Channel Switch Announcement",
        61 => "HT Operation",
        62 => "Secondary Channel Offset",
        63 => "BSS Average Access Delay",
        64 => "Antenna",
        65 => "RSNI",
        66 => "Measurement Pilot Transmission",
        67 => "BSS Available Admission Capacity",
        68 => "BSS AC Access Delay",
        69 => "Time Advertisement",
        70 => "RM Enabled Capabilities",
        71 => "Multiple BSSID",
        72 => "20/40 BSS Coexistence",
        73 => "20/40 BSS Intolerant Channel Report",
        74 => "Overlapping BSS Scan Parameters",
        75 => "RIC Descriptor",
        76 => "Management MIC",
        78 => "Event Request",
        79 => "Event Report",
        80 => "Diagnostic Request",
        81 => "Diagnostic Report",
        82 => "Location Parameters",
        83 => "Nontransmitted BSSID Capability",
        84 => "SSID List",
        85 => "Multiple BSSID-Index",
        86 => "FMS Descriptor",
        87 => "FMS Request",
        88 => "FMS Response",
        89 => "QoS Traffic Capability",
        90 => "BSS Max Idle Period",
        91 => "TFS Request",
        92 => "TFS Response",
        93 => "WNM-Sleep Mode",
        94 => "TIM Broadcast Request",
        95 => "TIM Broadcast Response",
        96 => "Collocated Interference Report",
        97 => "Channel Usage",
        98 => "Time Zone",
        99 => "DMS Request",
        100 => "DMS Response",
        101 => "Link Identifier",
        102 => "Wakeup Schedule",
        104 => "Channel Switch Timing",
        105 => "PTI Control",
        106 => "TPU Buffer Status",
        107 => "Interworking",
        108 => "Advertisement Protocol",
        109 => "Expedited Bandwidth Request",
        110 => "QoS Map Set",
        111 => "Roaming Consortium",
        112 => "Emergency Alert Identifier",
        113 => "Mesh Configuration",
        114 => "Mesh ID",
        115 => "Mesh Link Metric Report",
        116 => "Congestion Notification",
        117 => "Mesh Peering Management",
        118 => "Mesh Channel Switch Parameters",
        119 => "Mesh Awake Window",
        120 => "Beacon Timing",
        121 => "MCCAOP Setup Request",
        122 => "MCCAOP Setup Reply",
        123 => "MCCAOP Advertisement",
        124 => "MCCAOP Teardown",
        125 => "GANN",
        126 => "RANN",
        127 => "Extended Capabilities",
        137 => "PXU",
        138 => "PXUC",
        139 => "Authenticated Mesh Peering Exchange",
        140 => "MIC",
        141 => "Destination URI",
        142 => "U-APSD Coexistence",
        174 => "MCCAOP Advertisement Overview (see 8.4.2.110)",
        221 => "Vendor Specific",

        // 11-15 Reserved; unused
        // 17-31 Reserved (formerly for challenge text extension, before
        //       802.11 shared key authentication was discontinued)
        // 43-49 Reserved
        // 128-129 Reserved
        // 133-136 Reserved
        // 143-173 Reserved
        // 175-220 Reserved
        // 222-255 Reserved
        _ => return None,
    };

    Some(name)
}
