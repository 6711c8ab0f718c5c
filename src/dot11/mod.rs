//! Contains the 802.11 frame structures: frame control, addresses, and the
//! Beacon frame body with its information elements.

mod body;
mod elements;
mod frame;
mod frame_control;

pub use body::*;
pub use elements::*;
pub use frame::*;
pub use frame_control::*;
