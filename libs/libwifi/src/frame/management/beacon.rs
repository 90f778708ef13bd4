use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::error::EncodeError;
use crate::frame::components::*;
use crate::traits::Addresses;

/// Timestamp, beacon interval and capability info.
pub const BEACON_BODY_LEN: usize = 12;

/// 102400 µs expressed in time units of 1024 µs.
pub const DEFAULT_BEACON_INTERVAL: u16 = 100;

/// Capability bit announcing an infrastructure (ESS) network.
pub const CAPABILITY_ESS: u16 = 0x0001;

/// The general structure is:
/// - ManagementHeader
/// - Timestamp (8 bytes)
/// - Beacon interval (2 bytes)
/// - Capability info (2 bytes)
/// - Dynamic fields
///
/// All multi-byte fields are little endian on the wire.
#[derive(Clone, Debug)]
pub struct Beacon {
    pub header: ManagementHeader,
    pub timestamp: u64,
    pub beacon_interval: u16,
    pub capability_info: u16,
    pub station_info: StationInfo,
}

impl Beacon {
    /// A beacon of an open ESS with a zero timestamp and the default interval.
    pub fn new(bssid: MacAddress, station_info: StationInfo) -> Self {
        Beacon {
            header: ManagementHeader::beacon(bssid),
            timestamp: 0,
            beacon_interval: DEFAULT_BEACON_INTERVAL,
            capability_info: CAPABILITY_ESS,
            station_info,
        }
    }

    pub fn encoded_len(&self) -> usize {
        ManagementHeader::LEN + BEACON_BODY_LEN + self.station_info.encoded_len()
    }

    /// Write header, fixed fields and elements in wire order.
    pub fn write_to<W: Write>(&self, wtr: &mut W) -> Result<(), EncodeError> {
        self.header.write_to(wtr)?;
        wtr.write_u64::<LittleEndian>(self.timestamp)?;
        wtr.write_u16::<LittleEndian>(self.beacon_interval)?;
        wtr.write_u16::<LittleEndian>(self.capability_info)?;
        self.station_info.write_to(wtr)
    }

    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let mut bytes = Vec::with_capacity(self.encoded_len());
        self.write_to(&mut bytes)?;
        Ok(bytes)
    }
}

impl Addresses for Beacon {
    fn src(&self) -> Option<&MacAddress> {
        self.header.src()
    }

    fn dest(&self) -> &MacAddress {
        self.header.dest()
    }

    fn bssid(&self) -> Option<&MacAddress> {
        self.header.bssid()
    }
}
