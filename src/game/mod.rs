//! This module adapts the `shakmaty` rules engine to the codecs' vocabulary.

mod game;
mod termination;

pub use game::*;
pub use termination::*;
