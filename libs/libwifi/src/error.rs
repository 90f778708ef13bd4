use nom::Needed;

use crate::frame::components::FrameControl;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// This library only parses beacons.
    /// Any other subtype results in this error.
    /// The [FrameControl] header is always parsed and can be used for debugging.
    /// The remaining data is passed as second parameter.
    #[error("This frame subtype isn't handled: {:?} ({:?})", .0.frame_subtype, .0.frame_type)]
    UnhandledFrameSubtype(FrameControl, Vec<u8>),
    #[error("A parsing failure occurred: \n{}\ndata: {:?}", .0, .1)]
    Failure(String, Vec<u8>),
    #[error("There wasn't enough data. {}", .0)]
    Incomplete(String),
}

impl From<nom::Err<nom::error::Error<&[u8]>>> for Error {
    /// Manually specify the conversion from a [nom::error::Error] to our own error.
    /// We need this conversion, since we work with slices.
    /// If nom's error is propagated through the program, we get lifetime issues as we can't hold
    /// ownership of that slice and thereby require a 'static.
    fn from(error: nom::Err<nom::error::Error<&[u8]>>) -> Self {
        match error {
            nom::Err::Incomplete(needed) => match needed {
                Needed::Size(size) => {
                    Error::Incomplete(format!("At least {size} bytes are missing"))
                }
                Needed::Unknown => Error::Incomplete(String::new()),
            },
            nom::Err::Failure(error) | nom::Err::Error(error) => Error::Failure(
                format!(
                    "An error occured while parsing the data: nom::ErrorKind is {:?}",
                    error.code
                ),
                error.input.to_vec(),
            ),
        }
    }
}

/// Errors raised while serializing frames.
#[derive(thiserror::Error, Debug)]
pub enum EncodeError {
    /// The length of an information element is a single byte, so its payload can't
    /// exceed 255 bytes.
    #[error("Element {id} carries {len} bytes, but at most 255 fit its length field")]
    ElementTooLong { id: u8, len: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
