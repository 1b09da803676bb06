//! Terminal session acquisition and restore.

use std::io;

use crossterm::{
    cursor, execute,
    style::ResetColor,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Terminal size assumed when the real one cannot be queried.
pub const FALLBACK_SIZE: (u16, u16) = (120, 30);

/// RAII guard over the real console.
///
/// Acquiring the session switches the terminal into the state the effect
/// needs: raw mode (so a shutdown key arrives as an event instead of a
/// signal) and the alternate screen. Dropping it restores everything
/// best-effort, so the shell gets its screen back even on an error path.
#[derive(Debug)]
pub struct Session {
    width: u16,
    height: u16,
}

impl Session {
    /// Take over the terminal.
    ///
    /// Falls back to 120x30 when the size query fails; any other failure
    /// is fatal to the caller, since there is nothing to render without a
    /// console.
    pub fn acquire() -> io::Result<Self> {
        let (width, height) = terminal::size().unwrap_or(FALLBACK_SIZE);
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self {
            width: width.max(1),
            height: height.max(1),
        })
    }

    /// Terminal width in columns.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Terminal height in rows.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            ResetColor,
            cursor::Show,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
