use std::collections::TryReserveError;

use libwifi::error::EncodeError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("The channel must be between 1 and 255 (got {0}).")]
    InvalidChannel(String),
    #[error("{0} can't be used as a BSSID: {1}")]
    InvalidBssid(String, String),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error("Unable to allocate the frame buffer: {0}")]
    Allocation(#[from] TryReserveError),
    #[error("Frame is {written} bytes long but {expected} were computed")]
    LengthMismatch { written: usize, expected: usize },
    #[error("{0}")]
    Socket(String),
}
