use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::status::MessageLog;

/// Anything a finished frame can be written to.
pub trait FrameSink {
    /// Send `frame` as one link-layer frame and return how many bytes went out.
    fn send(&mut self, frame: &[u8]) -> io::Result<usize>;
}

#[derive(thiserror::Error, Debug)]
pub enum TransmitError {
    #[error("Error sending packet: short write, {written} of {expected} bytes")]
    ShortWrite { written: usize, expected: usize },
    #[error("Error sending packet: {0}")]
    Io(#[from] io::Error),
}

/// Send `frame` over and over until a write fails or `running` is cleared.
///
/// A write counts only when the whole frame went out; anything less ends the loop.
/// There is no pause between frames and no write timeout, so a stalled link blocks here.
/// Returns the number of frames sent once `running` turns false.
pub fn transmit<S: FrameSink>(
    sink: &mut S,
    frame: &[u8],
    running: &AtomicBool,
    log: &mut MessageLog,
) -> Result<u64, TransmitError> {
    let mut sent: u64 = 0;

    while running.load(Ordering::SeqCst) {
        let written = sink.send(frame)?;
        if written < frame.len() {
            return Err(TransmitError::ShortWrite {
                written,
                expected: frame.len(),
            });
        }

        sent += 1;
        log.status("Beacon was sent");
    }

    Ok(sent)
}
