//! Animation loop: tick driving, frame pacing, and cooperative shutdown.
//!
//! The whole loop runs on one thread: each tick checks for a shutdown
//! key, updates and repaints every column in a shuffled order, flushes
//! the frame in one write, then sleeps out the remainder of the 50 ms
//! cadence.

mod pacer;
mod runner;

pub use pacer::FramePacer;
pub use runner::{Engine, EngineConfig};
