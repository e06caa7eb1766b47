//! Terminal mode management with panic-safe cleanup.

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io;
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

/// Set while a guard holds the terminal (read by the panic hook).
pub(crate) static TERMINAL_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Puts the terminal into raw mode on the alternate screen with the cursor
/// hidden, and undoes all of it on [`TerminalGuard::restore`] or drop.
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Take over the terminal.
    ///
    /// # Errors
    /// Returns an error if stdout is not a terminal or a mode switch fails.
    /// Any step that already succeeded is rolled back.
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();

        enable_raw_mode()?;
        TERMINAL_ACTIVE.store(true, Ordering::SeqCst);
        // From here on, dropping the guard undoes whatever succeeded.
        let guard = Self { active: true };

        crossterm::execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(guard)
    }

    /// Restore the terminal now. Later calls and the drop become no-ops.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        TERMINAL_ACTIVE.store(false, Ordering::SeqCst);
        undo_all(
            || crossterm::execute!(io::stdout(), Show, LeaveAlternateScreen),
            disable_raw_mode,
        )
    }

    /// Whether this guard still holds the terminal.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::warn!("Failed to restore terminal: {}", e);
        }
    }
}

/// Run both undo steps even if the first fails; report the first error.
fn undo_all<S, R>(leave_screen: S, leave_raw_mode: R) -> io::Result<()>
where
    S: FnOnce() -> io::Result<()>,
    R: FnOnce() -> io::Result<()>,
{
    let screen = leave_screen();
    let raw = leave_raw_mode();
    screen.and(raw)
}

/// Install (once) a panic hook that restores the terminal before the panic
/// message is printed.
pub(crate) fn install_panic_hook() {
    static HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

    if HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if TERMINAL_ACTIVE.swap(false, Ordering::SeqCst) {
            let _ = crossterm::execute!(io::stdout(), Show, LeaveAlternateScreen);
            let _ = disable_raw_mode();
        }
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_enter_and_restore() {
        // Raw mode requires a real TTY
        match TerminalGuard::enter() {
            Ok(mut guard) => {
                assert!(guard.is_active());
                assert!(TERMINAL_ACTIVE.load(Ordering::SeqCst));

                guard.restore().expect("Should restore terminal");
                assert!(!guard.is_active());
                assert!(!TERMINAL_ACTIVE.load(Ordering::SeqCst));

                // Second restore is a no-op
                guard.restore().expect("Second restore should not fail");
            }
            Err(e) => {
                eprintln!("Skipping test (no TTY): {}", e);
            }
        }
    }

    #[test]
    fn test_raw_mode_is_left_when_screen_write_fails() {
        let mut raw_mode_left = false;
        let result = undo_all(
            || Err(io::Error::from(io::ErrorKind::BrokenPipe)),
            || {
                raw_mode_left = true;
                Ok(())
            },
        );
        assert!(raw_mode_left);
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_undo_reports_raw_mode_failure() {
        let result = undo_all(|| Ok(()), || Err(io::Error::other("tty gone")));
        assert!(result.is_err());
        assert!(undo_all(|| Ok(()), || Ok(())).is_ok());
    }

    #[test]
    fn test_panic_hook_installation() {
        install_panic_hook();
        install_panic_hook(); // Second call should be no-op
    }
}
