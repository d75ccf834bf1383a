//! Mastermind
//!
//! A terminal code-breaking game: crack a hidden row of 4 distinct colors,
//! chosen from 8, within 10 attempts.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, Score};
//! use mastermind::game::{Round, RoundState};
//!
//! let mut round = Round::new(Code::parse("1234").unwrap());
//!
//! let score = round.submit_guess(Code::parse("1325").unwrap()).unwrap();
//! assert_eq!(score, Score::new(1, 2));
//!
//! round.submit_guess(Code::parse("1234").unwrap()).unwrap();
//! assert_eq!(round.state(), RoundState::Won);
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
