//! `ColumnStream`: one terminal column's falling character run.
//!
//! Cells are ordered head to tail: index 0 is the newest, brightest cell
//! and the last index is the oldest, faded one. A freshly spawned stream's
//! rows form a decrementing run from the head in wrap-space, so the trail
//! reads as contiguous even while it straddles the screen edge; growth can
//! briefly fold a duplicate row into the run, which renders as an overlap
//! rather than an error.

use rand::Rng;

use super::cell::{row_above, row_below, RainCell, Tier};
use super::glyph;

/// Minimum length of a freshly spawned stream.
const MIN_SPAWN_LEN: u16 = 3;

/// A single column's stream state.
#[derive(Debug, Clone, Default)]
pub struct ColumnStream {
    cells: Vec<RainCell>,
}

impl ColumnStream {
    /// Spawn a stream with a random starting row and length.
    ///
    /// The head lands on a uniform row in `[0, height)`; the initial
    /// length is uniform in `[3, height / 3 + 2]`; each cell receives a
    /// fresh glyph and sits one row above its predecessor in wrap-space.
    /// The spawn length may exceed the tick-time cap of `height / 4`;
    /// the first truncate pass brings it back under.
    pub fn spawn<R: Rng>(height: u16, rng: &mut R) -> Self {
        let start_row = rng.gen_range(0..height);
        let span = (height / 3).max(1);
        let length = MIN_SPAWN_LEN + rng.gen_range(0..span);

        let mut cells = Vec::with_capacity(usize::from(length));
        let mut row = start_row;
        for _ in 0..length {
            cells.push(RainCell::new(glyph::sample(rng), row));
            row = row_above(row, height);
        }
        Self { cells }
    }

    /// Number of cells in the stream.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the stream has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The head cell (newest), if any.
    #[inline]
    pub fn head(&self) -> Option<&RainCell> {
        self.cells.first()
    }

    /// The tail cell (oldest), if any.
    #[inline]
    pub fn tail(&self) -> Option<&RainCell> {
        self.cells.last()
    }

    /// Iterate the cells head to tail.
    #[inline]
    pub fn cells(&self) -> std::slice::Iter<'_, RainCell> {
        self.cells.iter()
    }

    /// Move every cell down one row, wrapping past the bottom edge.
    pub fn advance(&mut self, height: u16) {
        for cell in &mut self.cells {
            cell.row = row_below(cell.row, height);
        }
    }

    /// Probabilistically prepend a fresh head cell.
    ///
    /// The growth draw happens unconditionally so the generator advances
    /// the same way whether or not the stream has headroom; growth itself
    /// requires `len < max_len`. The new head sits one row above the
    /// current one. Returns whether the stream grew.
    pub fn maybe_grow<R: Rng>(
        &mut self,
        height: u16,
        max_len: usize,
        grow_probability: f64,
        rng: &mut R,
    ) -> bool {
        if !rng.gen_bool(grow_probability) || self.cells.len() >= max_len {
            return false;
        }
        let Some(head) = self.cells.first() else {
            return false;
        };
        let row = row_above(head.row, height);
        self.cells.insert(0, RainCell::new(glyph::sample(rng), row));
        true
    }

    /// Drop tail cells until the stream fits within `max_len`.
    ///
    /// A no-op on streams already at or under the cap.
    #[inline]
    pub fn truncate(&mut self, max_len: usize) {
        self.cells.truncate(max_len);
    }

    /// The color tier for the cell at `index`.
    ///
    /// The head renders bright and the tail faded; a single-cell stream
    /// is all head and renders bright.
    #[inline]
    pub fn tier_at(&self, index: usize) -> Tier {
        if index == 0 {
            Tier::Bright
        } else if index + 1 == self.cells.len() {
            Tier::Faded
        } else {
            Tier::Base
        }
    }
}
