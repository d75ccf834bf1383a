//! Game engine
//!
//! Code generation, the round state machine, player-action decoding, and the
//! session that strings rounds together.

mod action;
mod generator;
mod round;
mod session;

pub use action::PlayerAction;
pub use generator::CodeGenerator;
pub use round::{MAX_ATTEMPTS, Round, RoundError, RoundState, Turn};
pub use session::{Session, Statistics};
