//! The animation loop: drives rain ticks across every column.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::stream::{StreamGrid, Tier};
use crate::terminal::Surface;

use super::pacer::FramePacer;

/// Tunables for the animation loop.
///
/// Nothing here is exposed on the command line; the struct keeps the
/// constants in one place and lets tests pin them.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Time between ticks.
    pub tick_interval: Duration,
    /// Chance that a column grows a new head cell on a given tick.
    pub grow_probability: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(50),
            grow_probability: 0.70,
        }
    }
}

/// The rain animation engine.
///
/// Owns the stream grid, the random generator, and the surface; every
/// piece of state the loop touches is explicit here, so a seeded engine
/// over a recording surface replays identically.
pub struct Engine<S: Surface> {
    config: EngineConfig,
    surface: S,
    grid: StreamGrid,
    rng: StdRng,
    /// Column visit order, reshuffled every tick.
    order: Vec<u16>,
    running: bool,
}

impl<S: Surface> Engine<S> {
    /// Build an engine over `surface` with entropy-seeded randomness.
    pub fn new(surface: S, width: u16, height: u16, config: EngineConfig) -> Self {
        Self::with_rng(surface, width, height, config, StdRng::from_entropy())
    }

    /// Build an engine with a fixed seed for deterministic runs.
    pub fn with_seed(surface: S, width: u16, height: u16, config: EngineConfig, seed: u64) -> Self {
        Self::with_rng(surface, width, height, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(surface: S, width: u16, height: u16, config: EngineConfig, mut rng: StdRng) -> Self {
        let grid = StreamGrid::new(width, height, &mut rng);
        Self {
            config,
            surface,
            grid,
            rng,
            order: (0..width).collect(),
            running: false,
        }
    }

    /// The grid state.
    pub const fn grid(&self) -> &StreamGrid {
        &self.grid
    }

    /// The surface the engine renders to.
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Whether the loop is active.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the loop after the current tick.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Run the loop until a shutdown key arrives.
    ///
    /// Hides the cursor and clears the screen, then renders one frame
    /// per tick interval. The shutdown check happens at the top of every
    /// tick so the process stays responsive while it animates forever.
    pub fn run(&mut self) -> io::Result<()> {
        self.surface.hide_cursor();
        self.surface.clear();
        self.surface.flush()?;

        let mut pacer = FramePacer::new(self.config.tick_interval);
        self.running = true;
        while self.running {
            if poll_shutdown()? {
                self.running = false;
                break;
            }
            self.tick()?;
            pacer.wait();
        }

        self.surface.set_tier(Tier::Reset);
        self.surface.show_cursor();
        self.surface.flush()
    }

    /// Render one frame.
    ///
    /// Columns are visited in a fresh random order each tick so terminal
    /// writes carry no left-to-right scan bias. Per column: blank the
    /// tail at its pre-advance position, advance, maybe grow, truncate,
    /// then repaint every cell with its tier. The frame reaches the
    /// writer in a single flush.
    pub fn tick(&mut self) -> io::Result<()> {
        let height = self.grid.height();
        let max_len = self.grid.max_len();

        self.order.shuffle(&mut self.rng);

        for &x in &self.order {
            let column = self.grid.column_mut(x);
            if column.is_empty() {
                continue;
            }

            // Erase the old tail before anything moves, so a cell dropped
            // by this tick's truncate has already left the screen.
            if let Some(tail) = column.tail() {
                let row = tail.row;
                self.surface.move_to(x, row);
                self.surface.write_blank();
            }

            column.advance(height);
            column.maybe_grow(height, max_len, self.config.grow_probability, &mut self.rng);
            column.truncate(max_len);

            for (index, cell) in column.cells().enumerate() {
                self.surface.move_to(x, cell.row);
                self.surface.set_tier(column.tier_at(index));
                self.surface.write_glyph(cell.glyph);
            }
        }

        self.surface.flush()
    }
}

/// Drain pending key events; report whether a shutdown key arrived.
///
/// Raw mode delivers Ctrl-C as a key event rather than a signal, so this
/// is the loop's only exit path short of killing the process.
fn poll_shutdown() -> io::Result<bool> {
    let mut shutdown = false;
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => shutdown = true,
                KeyCode::Char('c' | 'C') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    shutdown = true;
                }
                _ => {}
            }
        }
    }
    Ok(shutdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::RainCell;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Op {
        Clear,
        MoveTo(u16, u16),
        SetTier(Tier),
        Glyph(char),
        Blank,
        HideCursor,
        ShowCursor,
        Flush,
    }

    #[derive(Debug, Default)]
    struct RecordingSurface {
        ops: Vec<Op>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self) {
            self.ops.push(Op::Clear);
        }
        fn move_to(&mut self, column: u16, row: u16) {
            self.ops.push(Op::MoveTo(column, row));
        }
        fn set_tier(&mut self, tier: Tier) {
            self.ops.push(Op::SetTier(tier));
        }
        fn write_glyph(&mut self, glyph: char) {
            self.ops.push(Op::Glyph(glyph));
        }
        fn write_blank(&mut self) {
            self.ops.push(Op::Blank);
        }
        fn hide_cursor(&mut self) {
            self.ops.push(Op::HideCursor);
        }
        fn show_cursor(&mut self) {
            self.ops.push(Op::ShowCursor);
        }
        fn flush(&mut self) -> io::Result<()> {
            self.ops.push(Op::Flush);
            Ok(())
        }
    }

    /// One column's worth of terminal writes within a tick.
    struct Chunk {
        x: u16,
        blank_row: u16,
        renders: Vec<(u16, Tier, char)>,
    }

    /// Parse the op stream of a single tick into per-column chunks.
    ///
    /// Each chunk is `MoveTo + Blank` followed by zero or more
    /// `MoveTo + SetTier + Glyph` triples for the same column.
    fn parse_chunks(ops: &[Op]) -> Vec<Chunk> {
        let mut chunks: Vec<Chunk> = Vec::new();
        let mut i = 0;
        while i < ops.len() {
            match (&ops[i], ops.get(i + 1)) {
                (Op::MoveTo(x, row), Some(Op::Blank)) => {
                    chunks.push(Chunk {
                        x: *x,
                        blank_row: *row,
                        renders: Vec::new(),
                    });
                    i += 2;
                }
                (Op::MoveTo(x, row), Some(Op::SetTier(tier))) => {
                    let Some(Op::Glyph(glyph)) = ops.get(i + 2) else {
                        panic!("SetTier not followed by Glyph at {i}");
                    };
                    let chunk = chunks.last_mut().expect("render before any blank");
                    assert_eq!(chunk.x, *x, "render crossed into another column");
                    chunk.renders.push((*row, *tier, *glyph));
                    i += 3;
                }
                (Op::Flush, None) => break,
                (op, _) => panic!("unexpected op {op:?} at {i}"),
            }
        }
        chunks
    }

    fn engine(width: u16, height: u16) -> Engine<RecordingSurface> {
        Engine::with_seed(
            RecordingSurface::default(),
            width,
            height,
            EngineConfig::default(),
            0xC0FFEE,
        )
    }

    #[test]
    fn test_tick_enforces_max_len_and_row_bounds() {
        let mut engine = engine(40, 30);
        for _ in 0..200 {
            engine.tick().unwrap();
            for x in 0..40 {
                let column = engine.grid().column(x);
                assert!(column.len() <= engine.grid().max_len());
                assert!(column.cells().all(|cell| cell.row < 30));
            }
        }
    }

    #[test]
    fn test_tick_blanks_every_column_before_rendering_it() {
        let mut engine = engine(20, 30);
        engine.tick().unwrap();

        let chunks = parse_chunks(&engine.surface().ops);
        assert_eq!(chunks.len(), 20, "one chunk per non-empty column");

        let mut seen: Vec<u16> = chunks.iter().map(|c| c.x).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..20).collect::<Vec<u16>>());
    }

    #[test]
    fn test_tick_renders_tiers_head_to_tail() {
        let mut engine = engine(20, 30);
        engine.tick().unwrap();

        for chunk in parse_chunks(&engine.surface().ops) {
            let len = chunk.renders.len();
            assert!(len >= 1);
            for (index, (row, tier, _)) in chunk.renders.iter().enumerate() {
                assert!(*row < 30);
                let expected = if index == 0 {
                    Tier::Bright
                } else if index + 1 == len {
                    Tier::Faded
                } else {
                    Tier::Base
                };
                assert_eq!(*tier, expected, "column {} index {index}", chunk.x);
            }
        }
    }

    #[test]
    fn test_tick_blank_uses_pre_advance_tail_row() {
        let mut engine = engine(1, 30);
        let before: Vec<RainCell> = engine.grid().column(0).cells().copied().collect();
        let old_tail_row = before.last().unwrap().row;

        engine.tick().unwrap();

        let chunks = parse_chunks(&engine.surface().ops);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].blank_row, old_tail_row);
    }

    #[test]
    fn test_tick_skips_emptied_columns() {
        let mut engine = engine(4, 30);
        engine.grid.column_mut(2).truncate(0);

        engine.tick().unwrap();

        let chunks = parse_chunks(&engine.surface().ops);
        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|c| c.x != 2));
    }

    #[test]
    fn test_tick_flushes_once() {
        let mut engine = engine(10, 30);
        engine.tick().unwrap();
        let flushes = engine
            .surface()
            .ops
            .iter()
            .filter(|op| **op == Op::Flush)
            .count();
        assert_eq!(flushes, 1);
    }

    #[test]
    fn test_seeded_engines_replay_identically() {
        let mut a = engine(30, 24);
        let mut b = engine(30, 24);
        a.tick().unwrap();
        b.tick().unwrap();
        assert_eq!(a.surface().ops, b.surface().ops);
    }

    #[test]
    fn test_stop_clears_running() {
        let mut e = engine(4, 30);
        assert!(!e.is_running());
        e.stop();
        assert!(!e.is_running());
    }
}
