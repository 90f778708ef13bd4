/// Contains structs representing recurring sets of structured data.
/// For instance, MAC-Addresses, default headers, etc.
pub mod components;

/// Management frame structs
mod management;

pub use management::*;

use crate::frame::components::MacAddress;
use crate::traits::Addresses;

#[derive(Clone, Debug)]
/// This represents all currently supported payloads for frame subtypes.
/// Each variant is represented by its own struct.
pub enum Frame {
    Beacon(Beacon),
}

impl Addresses for Frame {
    fn src(&self) -> Option<&MacAddress> {
        match self {
            Frame::Beacon(beacon) => beacon.src(),
        }
    }

    fn dest(&self) -> &MacAddress {
        match self {
            Frame::Beacon(beacon) => beacon.dest(),
        }
    }

    fn bssid(&self) -> Option<&MacAddress> {
        match self {
            Frame::Beacon(beacon) => beacon.bssid(),
        }
    }
}
