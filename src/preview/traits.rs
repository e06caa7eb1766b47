//! The three seams of the preview loop: device, display, and exit signal.

use std::io;
use std::time::Duration;

use crate::camera::Frame;

/// Something that yields frames from an open device.
pub trait FrameSource {
    /// Whether the session can still deliver frames.
    fn is_open(&self) -> bool;

    /// Block until the next frame is available.
    ///
    /// Returns `None` if the device was disconnected, a frame could not be
    /// read, or the session is closed.
    fn next_frame(&mut self) -> Option<Frame>;

    /// Release the device.
    fn close(self)
    where
        Self: Sized;
}

/// A display that can present frames under a window name.
pub trait PreviewSurface {
    /// Present `frame` in the surface identified by `window`.
    fn render(&mut self, window: &str, frame: &Frame) -> io::Result<()>;
}

/// A source of user-initiated exit requests.
pub trait ExitPoll {
    /// Wait up to `timeout` for an exit request and report whether one arrived.
    fn poll_for_exit(&mut self, timeout: Duration) -> io::Result<bool>;
}
