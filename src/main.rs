//! Binary entry point for the rain effect.
//!
//! Takes no arguments; runs until `q`, `Esc`, or Ctrl-C.

use std::process;

fn main() {
    if let Err(err) = downpour::run() {
        eprintln!("downpour: failed to drive the terminal: {err}");
        process::exit(1);
    }
}
