//! The live preview loop.
//!
//! `open` -> loop { `next_frame` -> `render` -> `poll_for_exit` } -> `close`.
//! Only the most recent frame is ever held; frames the device produces while
//! a render is in progress are simply not seen.

use std::io;
use std::time::{Duration, Instant};

use super::error::PreviewError;
use super::traits::{ExitPoll, FrameSource, PreviewSurface};
use crate::camera::{CameraError, Frame};

/// How long each iteration waits for a key press. Also caps the loop rate.
pub const EXIT_POLL_INTERVAL: Duration = Duration::from_millis(30);

/// Window name used when none is configured.
pub const DEFAULT_WINDOW_NAME: &str = "Video";

/// Settings for one preview run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Camera device index (0 = system default)
    pub device_index: u32,
    /// Name shown on the display surface
    pub window_name: String,
    /// Per-iteration wait for an exit request
    pub exit_poll: Duration,
    /// Consecutive failed reads tolerated before giving up
    pub read_retries: u32,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            device_index: 0,
            window_name: DEFAULT_WINDOW_NAME.to_string(),
            exit_poll: EXIT_POLL_INTERVAL,
            read_retries: 0,
        }
    }
}

/// Result of a preview run that ended because the user asked it to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewSummary {
    pub frames_rendered: u64,
    pub elapsed: Duration,
}

/// Open the device, create the display, and run the loop.
///
/// `make_surface` is only called once the device is open, so a missing
/// camera never produces a window. If the surface cannot be created the
/// session is closed before the error is returned.
pub fn launch<S, D, P, O, M>(
    options: &PreviewOptions,
    open: O,
    make_surface: M,
    exit: &mut P,
) -> Result<PreviewSummary, PreviewError>
where
    S: FrameSource,
    D: PreviewSurface,
    P: ExitPoll,
    O: FnOnce(u32) -> Result<S, CameraError>,
    M: FnOnce() -> io::Result<D>,
{
    let session = open(options.device_index)?;
    let mut surface = match make_surface() {
        Ok(surface) => surface,
        Err(e) => {
            session.close();
            return Err(e.into());
        }
    };
    run(session, &mut surface, exit, options)
}

/// Run the preview loop on an already-open session.
///
/// The session is closed exactly once before this returns, whatever the
/// outcome.
pub fn run<S, D, P>(
    mut session: S,
    surface: &mut D,
    exit: &mut P,
    options: &PreviewOptions,
) -> Result<PreviewSummary, PreviewError>
where
    S: FrameSource,
    D: PreviewSurface,
    P: ExitPoll,
{
    let started = Instant::now();
    let outcome = drive(&mut session, surface, exit, options);
    session.close();

    let frames_rendered = outcome?;
    let summary = PreviewSummary {
        frames_rendered,
        elapsed: started.elapsed(),
    };
    log::info!(
        "Preview stopped after {} frame(s) in {:.1}s",
        summary.frames_rendered,
        summary.elapsed.as_secs_f64()
    );
    Ok(summary)
}

fn drive<S, D, P>(
    session: &mut S,
    surface: &mut D,
    exit: &mut P,
    options: &PreviewOptions,
) -> Result<u64, PreviewError>
where
    S: FrameSource,
    D: PreviewSurface,
    P: ExitPoll,
{
    let mut rendered = 0u64;

    loop {
        let Some(frame) = read_frame(session, options.read_retries) else {
            log::debug!("No frame after {} retries, stopping", options.read_retries);
            return Err(PreviewError::FrameRead { rendered });
        };

        surface.render(&options.window_name, &frame)?;
        rendered += 1;

        if exit.poll_for_exit(options.exit_poll)? {
            log::debug!("Exit requested after {} frame(s)", rendered);
            return Ok(rendered);
        }
    }
}

/// Pull the next frame, tolerating up to `retries` consecutive misses.
fn read_frame<S: FrameSource>(session: &mut S, retries: u32) -> Option<Frame> {
    for attempt in 0..=retries {
        if !session.is_open() {
            return None;
        }
        if let Some(frame) = session.next_frame() {
            return Some(frame);
        }
        if attempt < retries {
            log::warn!("No frame from camera, retrying ({}/{})", attempt + 1, retries);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = PreviewOptions::default();
        assert_eq!(options.device_index, 0);
        assert_eq!(options.window_name, "Video");
        assert_eq!(options.exit_poll, Duration::from_millis(30));
        assert_eq!(options.read_retries, 0);
    }
}
