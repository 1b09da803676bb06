//! `AnsiSurface`: single-syscall ANSI renderer.
//!
//! All output for a frame is accumulated as escape sequences in a
//! pre-allocated buffer, then flushed to the writer in one `write()`
//! syscall. Partial writes are what make terminal animations flicker;
//! batching the frame avoids them entirely.

use std::io::{self, Write};

use crate::stream::Tier;

use super::Surface;

/// Truecolor green ramp for the three visible tiers.
///
/// The head is near-white so it reads as a glint; body and tail step down
/// the same green hue.
const BRIGHT: (u8, u8, u8) = (200, 255, 200);
const BASE: (u8, u8, u8) = (0, 190, 0);
const FADED: (u8, u8, u8) = (0, 95, 0);

/// ANSI-emitting [`Surface`] over any writer.
///
/// Production wraps `io::Stdout`; tests can wrap a `Vec<u8>` and assert
/// on the exact byte stream.
pub struct AnsiSurface<W: Write> {
    data: Vec<u8>,
    writer: W,
}

impl<W: Write> AnsiSurface<W> {
    /// Wrap `writer` with a buffer sized for a typical frame.
    pub fn new(writer: W) -> Self {
        Self::with_capacity(writer, 8192)
    }

    /// Wrap `writer` with an explicit initial buffer capacity.
    pub fn with_capacity(writer: W, capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            writer,
        }
    }

    /// The bytes accumulated since the last flush.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Set the foreground to a truecolor value.
    #[inline]
    fn set_fg(&mut self, (r, g, b): (u8, u8, u8)) {
        // Writes to a Vec cannot fail.
        write!(self.data, "\x1b[38;2;{r};{g};{b}m").unwrap();
    }
}

impl<W: Write> Surface for AnsiSurface<W> {
    #[inline]
    fn clear(&mut self) {
        self.data.extend_from_slice(b"\x1b[2J");
    }

    #[inline]
    fn move_to(&mut self, column: u16, row: u16) {
        // CSI row ; col H (1-indexed)
        write!(self.data, "\x1b[{};{}H", row + 1, column + 1).unwrap();
    }

    #[inline]
    fn set_tier(&mut self, tier: Tier) {
        match tier {
            Tier::Bright => self.set_fg(BRIGHT),
            Tier::Base => self.set_fg(BASE),
            Tier::Faded => self.set_fg(FADED),
            Tier::Reset => self.data.extend_from_slice(b"\x1b[0m"),
        }
    }

    #[inline]
    fn write_glyph(&mut self, glyph: char) {
        let mut buf = [0u8; 4];
        self.data
            .extend_from_slice(glyph.encode_utf8(&mut buf).as_bytes());
    }

    #[inline]
    fn write_blank(&mut self) {
        self.data.push(b' ');
    }

    #[inline]
    fn hide_cursor(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25l");
    }

    #[inline]
    fn show_cursor(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25h");
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.data.is_empty() {
            self.writer.write_all(&self.data)?;
            self.data.clear();
        }
        self.writer.flush()
    }
}
