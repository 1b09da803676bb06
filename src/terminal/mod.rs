//! Terminal surface: the boundary between the animation core and the
//! real console.
//!
//! The engine talks to the terminal exclusively through the [`Surface`]
//! trait, so the stream model and the tick algorithm stay
//! platform-independent and unit-testable against a recording double.
//! [`AnsiSurface`] is the production implementation; [`Session`] owns
//! acquisition and restore of the underlying console.

mod ansi;
mod session;

pub use ansi::AnsiSurface;
pub use session::{Session, FALLBACK_SIZE};

use std::io;

use crate::stream::Tier;

/// Drawing operations the animation loop needs from a terminal.
///
/// Implementations are free to batch: nothing is required to reach the
/// screen before [`flush`](Surface::flush) is called at the end of a
/// frame.
pub trait Surface {
    /// Clear the whole screen.
    fn clear(&mut self);

    /// Move the cursor to (`column`, `row`), zero-indexed.
    fn move_to(&mut self, column: u16, row: u16);

    /// Select the foreground color for subsequent glyphs.
    fn set_tier(&mut self, tier: Tier);

    /// Write one glyph at the cursor.
    fn write_glyph(&mut self, glyph: char);

    /// Blank the cell at the cursor.
    fn write_blank(&mut self);

    /// Hide the cursor.
    fn hide_cursor(&mut self);

    /// Show the cursor.
    fn show_cursor(&mut self);

    /// Push everything accumulated this frame to the terminal.
    fn flush(&mut self) -> io::Result<()>;
}
