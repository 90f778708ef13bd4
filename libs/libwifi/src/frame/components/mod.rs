mod frame_control;
mod header;
mod information_element;
mod mac_address;
mod sequence_control;

pub use frame_control::FrameControl;
pub use header::ManagementHeader;
pub use information_element::{ElementId, InformationElement, StationInfo};
pub use mac_address::*;
pub use sequence_control::SequenceControl;
