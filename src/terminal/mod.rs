//! Terminal display: mode guard, preview window, and exit keys.

mod guard;
mod keys;
mod window;

pub use guard::TerminalGuard;
pub use keys::{KeyboardExit, interrupted, setup_ctrlc_handler};
pub use window::PreviewWindow;

use std::io::{self, Stdout};

use ratatui::backend::CrosstermBackend;

use crate::ascii::AsciiRenderer;
use crate::camera::Frame;
use crate::preview::PreviewSurface;

/// The full-screen preview: owns the terminal for as long as it lives.
///
/// Field order matters: the window is dropped before the guard restores
/// the terminal.
pub struct TerminalPreview {
    window: PreviewWindow<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TerminalPreview {
    /// Enter the alternate screen and create the preview window.
    pub fn open(renderer: AsciiRenderer, color: bool) -> io::Result<Self> {
        let guard = TerminalGuard::enter()?;
        let window = PreviewWindow::stdout(renderer, color)?;
        Ok(Self {
            window,
            _guard: guard,
        })
    }
}

impl PreviewSurface for TerminalPreview {
    fn render(&mut self, window: &str, frame: &Frame) -> io::Result<()> {
        self.window.render(window, frame)
    }
}
