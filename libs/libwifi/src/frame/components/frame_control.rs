use crate::frame_types::*;

/// Flag bit set when the frame travels towards the distribution system.
const TO_DS: u8 = 0b0000_0001;
/// Flag bit set when the frame comes from the distribution system.
const FROM_DS: u8 = 0b0000_0010;

/// The first two bytes of every frame.
///
/// First byte, from the least significant bit: protocol version (2 bits, always 0),
/// [FrameType] (2 bits), [FrameSubType] (4 bits).
///
/// Second byte: flags. Only the two distribution system bits matter here, since they
/// decide which address field holds the BSSID. Beacons leave both clear.
#[derive(Clone, Debug)]
pub struct FrameControl {
    pub protocol_version: u8,
    pub frame_type: FrameType,
    pub frame_subtype: FrameSubType,
    pub flags: u8,
}

impl FrameControl {
    /// Frame control of a management frame with the given subtype and no flags set.
    pub fn management(frame_subtype: FrameSubType) -> Self {
        FrameControl {
            protocol_version: 0,
            frame_type: FrameType::Management,
            frame_subtype,
            flags: 0u8,
        }
    }

    pub fn to_ds(&self) -> bool {
        self.flags & TO_DS != 0
    }

    pub fn from_ds(&self) -> bool {
        self.flags & FROM_DS != 0
    }

    pub fn encode(&self) -> [u8; 2] {
        let protocol_version_bits = self.protocol_version & 0b11;
        let frame_type_bits = (self.frame_type as u8 & 0b11) << 2;
        let frame_subtype_bits = (self.frame_subtype.to_bytes() & 0b1111) << 4;

        [
            frame_subtype_bits | frame_type_bits | protocol_version_bits,
            self.flags,
        ]
    }
}
