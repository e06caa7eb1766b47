//! Exit requests from the keyboard and from SIGINT.

use crossterm::event::{self, Event, KeyEventKind};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::preview::ExitPoll;

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Route Ctrl+C / SIGINT into the exit poll instead of killing the process,
/// so the camera is still released.
///
/// In raw mode Ctrl+C arrives as a key press; this covers signals sent from
/// outside the terminal.
pub fn setup_ctrlc_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        INTERRUPTED.store(true, Ordering::SeqCst);
    })
}

/// Whether SIGINT has been received.
pub fn interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Exit poll that ends the preview on any key press.
#[derive(Debug, Default)]
pub struct KeyboardExit;

impl KeyboardExit {
    pub fn new() -> Self {
        Self
    }
}

impl ExitPoll for KeyboardExit {
    fn poll_for_exit(&mut self, timeout: Duration) -> io::Result<bool> {
        if interrupted() {
            return Ok(true);
        }
        if !event::poll(timeout)? {
            return Ok(interrupted());
        }
        // Drain whatever is queued; resizes and focus changes are redrawn on
        // the next frame anyway.
        loop {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                log::debug!("Exit requested by key {:?}", key.code);
                return Ok(true);
            }
            if !event::poll(Duration::ZERO)? {
                return Ok(interrupted());
            }
        }
    }
}
