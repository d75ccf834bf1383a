//! Console game loop
//!
//! Line-based play: redraw the board, read one line, act on it. Invalid input
//! is explained under the redrawn board and never costs an attempt.

use crate::core::CODE_LENGTH;
use crate::game::{CodeGenerator, PlayerAction, RoundState, Session, Statistics};
use crate::output::{
    DisplayMode, clear_screen, print_board, print_color_guide, print_loss, print_statistics,
    print_welcome, print_win,
};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Startup configuration shared by the front ends
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayConfig {
    /// Initial peg display; the player can toggle it during play
    pub display: DisplayMode,
    /// Fixed seed for reproducible secrets
    pub seed: Option<u64>,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(display: DisplayMode, seed: Option<u64>) -> Self {
        Self { display, seed }
    }

    /// Generator honouring the configured seed
    #[must_use]
    pub fn generator(&self) -> CodeGenerator {
        self.seed
            .map_or_else(CodeGenerator::from_os_rng, CodeGenerator::seeded)
    }
}

/// How a round was left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    Finished,
    Quit,
}

/// Run the console game on stdin/stdout
///
/// # Errors
///
/// Returns an error on terminal I/O failure.
pub fn run_play(config: &PlayConfig) -> Result<()> {
    let stdin = io::stdin();
    let stats = play_rounds(config, &mut stdin.lock())?;
    print_statistics(&stats);
    Ok(())
}

/// Play rounds until the player quits or declines a replay
///
/// # Errors
///
/// Returns an error on I/O failure, or if a finished round is driven further.
pub fn play_rounds<R: BufRead>(config: &PlayConfig, input: &mut R) -> Result<Statistics> {
    let mut session = Session::new(config.generator());
    let mut display = config.display;
    let mut show_welcome = true;

    loop {
        let end = play_round(&mut session, &mut display, input, &mut show_welcome)?;
        if end == RoundEnd::Quit {
            println!("Game exited.");
            break;
        }

        if ask_play_again(input)? {
            session.new_round();
        } else {
            println!("Thanks for playing. Goodbye!");
            break;
        }
    }

    Ok(session.stats().clone())
}

fn play_round<R: BufRead>(
    session: &mut Session,
    display: &mut DisplayMode,
    input: &mut R,
    show_welcome: &mut bool,
) -> Result<RoundEnd> {
    let mut notice: Option<String> = None;

    loop {
        clear_screen()?;
        if *show_welcome {
            print_welcome();
            *show_welcome = false;
        }
        print_board(session.round(), *display);
        print_color_guide(*display);
        if let Some(text) = notice.take() {
            println!("{text}\n");
        }

        let prompt = format!(
            "Input {CODE_LENGTH} different colors (1-8), 'r' to switch display mode, or 'q' to exit"
        );
        let Some(line) = read_line(input, &prompt)? else {
            // End of input: nobody left to play
            session.abort()?;
            return Ok(RoundEnd::Quit);
        };

        match PlayerAction::parse(&line) {
            Ok(PlayerAction::Quit) => {
                session.abort()?;
                return Ok(RoundEnd::Quit);
            }
            Ok(PlayerAction::ToggleDisplay) => {
                *display = display.toggle();
                notice = Some(format!("Display mode changed to {}.", display.label()));
            }
            Ok(PlayerAction::Guess(guess)) => {
                session.submit_guess(guess)?;
                let round = session.round();
                if round.is_finished() {
                    clear_screen()?;
                    print_board(round, *display);
                    match (round.state(), round.secret()) {
                        (RoundState::Won, _) => print_win(round.attempts()),
                        (RoundState::Lost, Some(secret)) => print_loss(secret, *display),
                        _ => {}
                    }
                    return Ok(RoundEnd::Finished);
                }
            }
            Err(err) => {
                debug!(input = %line.trim(), %err, "guess rejected");
                notice = Some(err.to_string());
            }
        }
    }
}

fn ask_play_again<R: BufRead>(input: &mut R) -> Result<bool> {
    let answer = read_line(input, "Do you want to play again? (y/n)")?;
    Ok(answer.is_some_and(|a| a.trim_start().starts_with(['y', 'Y'])))
}

/// Prompt and read one line; `None` at end of input
///
/// Bytes that are not UTF-8 come through as replacement characters, which
/// guess validation then rejects like any other stray character.
fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
