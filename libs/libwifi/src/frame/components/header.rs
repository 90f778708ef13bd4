use std::io::{self, Write};

use super::{FrameControl, MacAddress, SequenceControl};
use crate::frame_types::FrameSubType;
use crate::traits::Addresses;

/// Representation of a management frame header. This format is used by all management frames!
///
/// This struct implements the `Addresses` trait, which provides the `src`, `dest` and `bssid`
/// functions.
///
/// Structure of a management header:
///
/// **Bytes 0-1** \
/// These contain protocol meta information and flags.
/// Take a look at the [FrameControl] struct for more information.
///
/// **Bytes 2-3** \
/// Those are the duration bytes. These are always present!
///
/// **Bytes 4-21** \
/// byte 4-9: Address 1. Always present!
/// byte 10-15: Address 2.
/// byte 16-21: Address 3.
///
/// **Bytes 22-23** \
/// Sequence Control.
#[derive(Clone, Debug)]
pub struct ManagementHeader {
    pub frame_control: FrameControl,
    pub duration: [u8; 2],
    pub address_1: MacAddress,
    pub address_2: MacAddress,
    pub address_3: MacAddress,
    pub sequence_control: SequenceControl,
}

impl ManagementHeader {
    /// Encoded size of a management header.
    pub const LEN: usize = 24;

    /// The header of a beacon sent by `bssid`: broadcast destination, the AP as both
    /// transmitter and BSSID, zero duration and sequence number.
    pub fn beacon(bssid: MacAddress) -> Self {
        ManagementHeader {
            frame_control: FrameControl::management(FrameSubType::Beacon),
            duration: [0u8; 2],
            address_1: MacAddress::BROADCAST,
            address_2: bssid,
            address_3: bssid,
            sequence_control: SequenceControl::default(),
        }
    }

    /// Write the header in wire order.
    pub fn write_to<W: Write>(&self, wtr: &mut W) -> io::Result<()> {
        wtr.write_all(&self.frame_control.encode())?;
        wtr.write_all(&self.duration)?;
        wtr.write_all(&self.address_1.encode())?;
        wtr.write_all(&self.address_2.encode())?;
        wtr.write_all(&self.address_3.encode())?;
        wtr.write_all(&self.sequence_control.encode())
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(Self::LEN);
        // Writing into a Vec can't fail.
        let _ = self.write_to(&mut bytes);
        bytes
    }
}

/// Which address is used in which way, depends on a combination of
/// - two flags in the FrameControl header.
/// - the Type/Subtype constellation.
///
/// **Address 1:** \
/// The recipient station address.
///
/// **Address 2:** \
/// The transmitter station address.
///
/// **Address 3:** \
/// The BSSID when neither `to_ds` nor `from_ds` is set, which is always the case for beacons.
impl Addresses for ManagementHeader {
    /// Return the mac address of the sender
    fn src(&self) -> Option<&MacAddress> {
        let frame_control = &self.frame_control;
        if frame_control.to_ds() {
            Some(&self.address_3)
        } else if frame_control.from_ds() {
            Some(&self.address_1)
        } else {
            Some(&self.address_2)
        }
    }

    /// Return the mac address of the receiver.
    /// A full `ff:ff:..` usually indicates a undirected broadcast.
    fn dest(&self) -> &MacAddress {
        let frame_control = &self.frame_control;
        if frame_control.to_ds() && frame_control.from_ds() {
            &self.address_3
        } else if frame_control.to_ds() {
            &self.address_2
        } else if frame_control.from_ds() {
            &self.address_3
        } else {
            &self.address_1
        }
    }

    /// The BSSID for this request.
    fn bssid(&self) -> Option<&MacAddress> {
        let frame_control = &self.frame_control;
        if frame_control.to_ds() {
            Some(&self.address_1)
        } else if frame_control.from_ds() {
            Some(&self.address_2)
        } else {
            Some(&self.address_3)
        }
    }
}
