//! Printing for the console game and command results

use super::DisplayMode;
use super::formatters::{board_lines, code_cells, color_guide_lines};
use crate::commands::SampleReport;
use crate::core::{CODE_LENGTH, Code, PEG_COUNT, Peg};
use crate::game::{MAX_ATTEMPTS, Round, Statistics};
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHOR: &str = "Qiang Guo";
pub const EMAIL: &str = "bigdragonsoft@gmail.com";
pub const WEBSITE: &str = env!("CARGO_PKG_REPOSITORY");

/// Game rules, shown by `--help`
pub const RULES: &str = "\
The rules are as follows:
1. The game will generate a 4-digit color/number code
2. The range of colors/numbers is from 1 to 8, with no color used twice
3. The player has 10 chances to guess the code
4. After each guess, the system will provide hints:
   - Green plus sign (+) indicates both color and position are correct
   - Red minus sign (-) indicates the color is correct but the position is wrong
5. The player needs to gradually guess the correct code based on the hints
6. During the game, you can enter 'r' at any time to switch display mode (color blocks/numbers)
7. During the game, you can enter 'q' at any time to exit the game";

/// Clear the terminal and home the cursor
///
/// # Errors
///
/// Returns an error if the terminal cannot be written to.
pub fn clear_screen() -> io::Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
}

/// Title block shown above the board
pub fn print_title() {
    println!();
    println!("{}", "             Mastermind".bright_green().bold());
    println!("             -----------");
    println!("               v{VERSION}\n");
}

/// Introduction shown once at startup
pub fn print_welcome() {
    println!("Welcome to Mastermind!");
    println!("Try to guess the combination of {CODE_LENGTH} colors out of {PEG_COUNT}.");
    println!("Hint symbols:");
    println!("  {} : Correct color and position", "+".green());
    println!("  {} : Correct color but wrong position\n", "-".red());
}

/// Title and the full 10-row board
pub fn print_board(round: &Round, mode: DisplayMode) {
    print_title();
    for line in board_lines(round, mode) {
        println!("{line}");
    }
    println!();
}

/// Legend mapping digits to colors
pub fn print_color_guide(mode: DisplayMode) {
    println!("\nColor Guide:");
    for line in color_guide_lines(mode) {
        println!("{line}");
    }
    println!();
}

pub fn print_win(attempts: usize) {
    println!(
        "{}",
        format!("Congratulations! You won in {attempts} attempts.")
            .green()
            .bold()
    );
}

pub fn print_loss(secret: &Code, mode: DisplayMode) {
    println!(
        "{}",
        format!("Sorry, you didn't guess the correct answer in {MAX_ATTEMPTS} attempts.").red()
    );
    println!("The correct answer was: {}", code_cells(secret, mode));
}

/// Version, author and contact information
pub fn print_version_info() {
    println!("Mastermind Game v{VERSION}");
    println!("Author: {AUTHOR}");
    println!("Email: {EMAIL}");
    println!("Website: {WEBSITE}");
    println!("Copyright (C) 2024 BigDragonSoft.com");
}

/// Session summary printed on exit
pub fn print_statistics(stats: &Statistics) {
    if stats.rounds_played == 0 {
        return;
    }

    println!("\n{}", "Session:".bright_cyan().bold());
    println!(
        "   Rounds: {}  Won: {}  Lost: {}  Quit: {}",
        stats.rounds_played, stats.rounds_won, stats.rounds_lost, stats.rounds_aborted
    );
    println!("   Win rate: {:.0}%", stats.win_rate());
    if let Some(average) = stats.average_winning_attempts() {
        println!("   Average attempts to win: {average:.2}");
    }
}

/// Report from the generator sampling command
pub fn print_sample_report(report: &SampleReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SECRET CODE DISTRIBUTION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Codes drawn:      {}", report.total);
    println!(
        "   Distinct codes:   {} of {}",
        report.distinct_codes,
        SampleReport::POSSIBLE_CODES
    );
    println!("   Invalid codes:    {}", report.invalid_codes);
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    println!("\n   {}", "Frequency by position:".bright_cyan().bold());
    print!("   {:<8}", "");
    for position in 1..=CODE_LENGTH {
        print!("{:>10}", format!("#{position}"));
    }
    println!();
    for peg in Peg::ALL {
        print!("   {:<8}", peg.name());
        for counts in &report.position_counts {
            print!("{:>10}", counts[peg.index()]);
        }
        println!();
    }

    let deviation = report.max_relative_deviation() * 100.0;
    let line = format!("   Max deviation from uniform: {deviation:.2}%");
    if deviation < 5.0 {
        println!("\n{}", line.green());
    } else {
        println!("\n{}", line.yellow());
    }
}
