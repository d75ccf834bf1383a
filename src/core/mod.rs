//! Core domain types for Mastermind
//!
//! Pegs, codes, and scores. No I/O and no randomness live here; everything is
//! a pure value with checked invariants.

mod code;
mod peg;
mod score;

pub use code::{CODE_LENGTH, Code, CodeError};
pub use peg::{PEG_COUNT, Peg};
pub use score::Score;
