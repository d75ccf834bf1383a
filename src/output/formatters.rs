//! Formatting utilities for terminal output

use super::DisplayMode;
use crate::core::{CODE_LENGTH, Code, PEG_COUNT, Peg, Score};
use crate::game::{MAX_ATTEMPTS, Round};
use colored::{ColoredString, Colorize};

/// Visible width of the guess column, identical in both display modes
const GUESS_COLUMN: usize = 20;

/// Orange has no basic ANSI color; 256-color index 208 in true color
const ORANGE: (u8, u8, u8) = (255, 135, 0);

/// Colored two-space block for a peg
#[must_use]
pub fn peg_block(peg: Peg) -> ColoredString {
    let block = "  ";
    match peg {
        Peg::Red => block.on_red(),
        Peg::Blue => block.on_blue(),
        Peg::Green => block.on_green(),
        Peg::Yellow => block.on_yellow(),
        Peg::Purple => block.on_magenta(),
        Peg::Orange => block.on_truecolor(ORANGE.0, ORANGE.1, ORANGE.2),
        Peg::White => block.on_white(),
        Peg::Cyan => block.on_cyan(),
    }
}

/// A peg as the current mode draws it
#[must_use]
pub fn peg_cell(peg: Peg, mode: DisplayMode) -> String {
    match mode {
        DisplayMode::Blocks => peg_block(peg).to_string(),
        DisplayMode::Numbers => peg.digit().to_string(),
    }
}

/// Visible width of one peg cell
const fn cell_width(mode: DisplayMode) -> usize {
    match mode {
        DisplayMode::Blocks => 2,
        DisplayMode::Numbers => 1,
    }
}

/// A whole code, each peg followed by a space
#[must_use]
pub fn code_cells(code: &Code, mode: DisplayMode) -> String {
    code.pegs()
        .iter()
        .map(|&peg| format!("{} ", peg_cell(peg, mode)))
        .collect()
}

/// Feedback marks: green `+` per exact match, then red `-` per color-only match
#[must_use]
pub fn hint_marks(score: Score) -> String {
    let exact = std::iter::repeat_n(format!("{} ", "+".green()), score.exact as usize);
    let color_only = std::iter::repeat_n(format!("{} ", "-".red()), score.color_only as usize);
    exact.chain(color_only).collect()
}

/// Board rows: header, separator, then one row per attempt slot
#[must_use]
pub fn board_lines(round: &Round, mode: DisplayMode) -> Vec<String> {
    let separator = "-".repeat(40);
    let mut lines = vec!["No.   Guess               Hints".to_string(), separator.clone()];

    let code_width = (cell_width(mode) + 1) * CODE_LENGTH;
    for slot in 0..MAX_ATTEMPTS {
        let row = match round.history().get(slot) {
            Some(turn) => format!(
                "{:2}    {}{}{}",
                slot + 1,
                code_cells(&turn.guess, mode),
                " ".repeat(GUESS_COLUMN - code_width),
                hint_marks(turn.score)
            ),
            None => format!("{:2}    {}", slot + 1, " ".repeat(GUESS_COLUMN)),
        };
        lines.push(row);
        lines.push(separator.clone());
    }

    lines
}

/// Color guide, four entries per line
#[must_use]
pub fn color_guide_lines(mode: DisplayMode) -> Vec<String> {
    Peg::ALL
        .chunks(PEG_COUNT / 2)
        .map(|row| {
            row.iter()
                .map(|&peg| match mode {
                    DisplayMode::Blocks => {
                        format!("{} {}: {:<6}", peg_block(peg), peg.digit(), peg.name())
                    }
                    DisplayMode::Numbers => format!("{}: {:<6}", peg.digit(), peg.name()),
                })
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect()
}
