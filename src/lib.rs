//! fake_ap library components
//!
//! Builds a single 802.11 beacon for an imaginary access point and injects it on a
//! monitor-mode interface in a loop.

pub mod descriptor;
pub mod error;
pub mod rawsocks;
pub mod status;
pub mod transmit;
pub mod tx;

pub use descriptor::AccessPointDescriptor;
pub use error::Error;
pub use transmit::{transmit, FrameSink, TransmitError};
pub use tx::{beacon_frame_len, build_beacon_frame, parse_channel};
