//! Terminal output formatting
//!
//! Display mode, formatting, and pretty-printing for the console game.

pub mod display;
pub mod formatters;
mod mode;

pub use display::{
    RULES, clear_screen, print_board, print_color_guide, print_loss, print_sample_report,
    print_statistics, print_version_info, print_welcome, print_win,
};
pub use mode::DisplayMode;
