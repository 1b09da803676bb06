//! Stream model: the per-column falling-character state.
//!
//! This module owns everything about what the rain *is* (cells, columns,
//! glyph sampling, and the grid holding one stream per terminal column)
//! and nothing about how it reaches a screen. All randomness comes in
//! through an injected generator, so every operation here is
//! deterministic under a fixed seed.

mod cell;
mod column;
pub mod glyph;
mod grid;

pub use cell::{row_above, row_below, RainCell, Tier};
pub use column::ColumnStream;
pub use grid::StreamGrid;
