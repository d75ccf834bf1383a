//! Full-screen terminal interface
//!
//! Same rules as the console game, driven key by key.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
