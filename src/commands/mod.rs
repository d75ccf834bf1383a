//! Command implementations

pub mod play;
pub mod sample;

pub use play::{PlayConfig, play_rounds, run_play};
pub use sample::{SampleReport, run_sample};
