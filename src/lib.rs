//! # Downpour
//!
//! A "digital rain" animation for the terminal: columns of glyphs fall
//! down the screen with a bright leading character, a green body, and a
//! faded tail, refreshed on a fixed 50 ms cadence.
//!
//! ## Core Concepts
//!
//! - **Stream model**: each terminal column owns an ordered run of cells,
//!   head (newest, brightest) to tail (oldest, faded), advanced in
//!   wrap-space so streams re-enter from the top.
//! - **Single-syscall frames**: every tick's ANSI output is accumulated
//!   in one buffer and flushed in one `write()`, so the effect never
//!   flickers.
//! - **Explicit context**: the loop owns its random generator and its
//!   surface; a seeded engine over a recording surface replays
//!   identically, which is how the core is tested without a terminal.
//!
//! ## Example
//!
//! ```rust,ignore
//! use downpour::{AnsiSurface, Engine, EngineConfig, Session};
//!
//! let session = Session::acquire()?;
//! let surface = AnsiSurface::new(std::io::stdout());
//! let mut engine = Engine::new(surface, session.width(), session.height(), EngineConfig::default());
//! engine.run()?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod engine;
pub mod stream;
pub mod terminal;

// Re-exports for convenience
pub use engine::{Engine, EngineConfig, FramePacer};
pub use stream::{ColumnStream, RainCell, StreamGrid, Tier};
pub use terminal::{AnsiSurface, Session, Surface};

use std::io;

/// Run the rain effect on the real terminal until a shutdown key arrives.
///
/// # Errors
///
/// Returns an error if the terminal cannot be acquired or written to.
pub fn run() -> io::Result<()> {
    // The session guard must outlive the loop: dropping it is what gives
    // the shell its screen back.
    let session = Session::acquire()?;
    let surface = AnsiSurface::new(io::stdout());
    let mut engine = Engine::new(
        surface,
        session.width(),
        session.height(),
        EngineConfig::default(),
    );
    engine.run()
}
