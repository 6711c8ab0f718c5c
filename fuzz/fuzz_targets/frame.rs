#![no_main]
use byteorder::{BigEndian, LittleEndian};
use libfuzzer_sys::fuzz_target;
use pcap_tail::dot11::Frame;

fuzz_target!(|data: &[u8]| {
    let _ = Frame::from_slice::<BigEndian>(data);
    let _ = Frame::from_slice::<LittleEndian>(data);
});
