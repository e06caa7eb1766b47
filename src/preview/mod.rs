//! Live preview loop: pulls frames from a camera and shows them until the
//! user asks to stop.
//!
//! The loop is written against three small traits ([`FrameSource`],
//! [`PreviewSurface`], [`ExitPoll`]) so the same code drives the real camera
//! and terminal as well as in-memory stand-ins in tests.

mod error;
mod run;
mod traits;

pub use error::{EXIT_DEVICE_UNAVAILABLE, EXIT_FAILURE, PreviewError};
pub use run::{
    DEFAULT_WINDOW_NAME, EXIT_POLL_INTERVAL, PreviewOptions, PreviewSummary, launch, run,
};
pub use traits::{ExitPoll, FrameSource, PreviewSurface};
