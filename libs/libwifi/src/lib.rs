/// Libwifi's own [Error](error::Error) implementation
pub mod error;
/// The [Frame](frame::Frame) enum and all frame structs.
pub mod frame;
/// Enums representing frame types and frame subtypes.
mod frame_types;
/// [nom] parsers for internal usage.
pub mod parsers;
/// All traits used or provided by this library.
mod traits;

use crate::error::Error;
use crate::parsers::*;

// Re-exports for user convenience
pub use crate::frame::Frame;
pub use crate::frame_types::*;
pub use crate::traits::*;

/// Parse IEE 802.11 frames from raw bytes.
///
/// Only beacons are understood. The input must start at the frame control field,
/// i.e. any radiotap header has to be stripped first.
/// This function doesn't do FCS checks.
pub fn parse_frame(input: &[u8]) -> Result<Frame, Error> {
    let (input, frame_control) = parse_frame_control(input)?;
    log::trace!(
        "Type/Subtype: {:?}, {:?}",
        frame_control.frame_type,
        frame_control.frame_subtype
    );

    match frame_control.frame_subtype {
        FrameSubType::Beacon => parse_beacon(frame_control, input),
        _ => Err(Error::UnhandledFrameSubtype(frame_control, input.to_vec())),
    }
}
