//! `StreamGrid`: per-column stream state for the whole terminal.

use rand::Rng;

use super::column::ColumnStream;

/// Fixed-size collection of column streams, one per terminal column.
///
/// Built once at startup with randomized column lengths and starting rows;
/// the dimensions are pinned for the process lifetime (terminal resize is
/// not handled). The per-column length cap is derived from the height.
#[derive(Debug)]
pub struct StreamGrid {
    columns: Vec<ColumnStream>,
    width: u16,
    height: u16,
    max_len: usize,
}

impl StreamGrid {
    /// Build a grid with one freshly spawned stream per column.
    ///
    /// Degenerate dimensions are clamped to one cell so the row arithmetic
    /// stays total.
    pub fn new<R: Rng>(width: u16, height: u16, rng: &mut R) -> Self {
        let height = height.max(1);
        let columns = (0..width)
            .map(|_| ColumnStream::spawn(height, rng))
            .collect();
        Self {
            columns,
            width,
            height,
            max_len: usize::from(height / 4),
        }
    }

    /// Terminal width the grid was built for.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Terminal height the grid was built for.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Maximum cells a column may hold after truncation (`height / 4`).
    #[inline]
    pub const fn max_len(&self) -> usize {
        self.max_len
    }

    /// The stream at column `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width`.
    #[inline]
    pub fn column(&self, x: u16) -> &ColumnStream {
        &self.columns[usize::from(x)]
    }

    /// Mutable access to the stream at column `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width`.
    #[inline]
    pub fn column_mut(&mut self, x: u16) -> &mut ColumnStream {
        &mut self.columns[usize::from(x)]
    }
}
