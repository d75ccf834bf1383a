//! TUI application state and logic

use crate::commands::PlayConfig;
use crate::core::{CODE_LENGTH, Code};
use crate::game::{RoundError, RoundState, Session};
use crate::output::DisplayMode;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info};

/// Application state
pub struct App {
    pub session: Session,
    pub display: DisplayMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(config: &PlayConfig) -> Self {
        Self {
            session: Session::new(config.generator()),
            display: config.display,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Crack the 4-color code in 10 attempts.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type 4 different digits 1-8, then Enter.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            input_mode: InputMode::Guessing,
            should_quit: false,
        }
    }

    /// React to one key press
    ///
    /// # Errors
    ///
    /// Returns `RoundError` only if a guess reaches a finished round, which
    /// the input modes rule out.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), RoundError> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return Ok(());
        }

        match self.input_mode {
            InputMode::RoundOver => match key.code {
                KeyCode::Char('y' | 'Y') => self.new_round(),
                KeyCode::Char('n' | 'N' | 'q' | 'Q') | KeyCode::Esc => self.quit(),
                KeyCode::Char('r' | 'R') => self.toggle_display(),
                _ => {
                    // Waiting for a replay answer
                }
            },
            InputMode::Guessing => match key.code {
                KeyCode::Char('q' | 'Q') => self.quit(),
                KeyCode::Char('r' | 'R') => self.toggle_display(),
                KeyCode::Char(c @ '1'..='8') => {
                    if self.input_buffer.len() < CODE_LENGTH {
                        self.input_buffer.push(c);
                    }
                }
                KeyCode::Char(c) => {
                    self.add_message(
                        &format!("'{c}' is not a color. Use 1-8, 'r' or 'q'."),
                        MessageStyle::Error,
                    );
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Esc => self.input_buffer.clear(),
                KeyCode::Enter => self.submit_input()?,
                _ => {}
            },
        }
        Ok(())
    }

    /// Validate the typed guess and submit it
    ///
    /// # Errors
    ///
    /// Returns `RoundError` if the active round has already ended.
    pub fn submit_input(&mut self) -> Result<(), RoundError> {
        let guess = match Code::parse(&self.input_buffer) {
            Ok(guess) => guess,
            Err(err) => {
                debug!(input = %self.input_buffer, %err, "guess rejected");
                self.add_message(&err.to_string(), MessageStyle::Error);
                return Ok(());
            }
        };
        self.input_buffer.clear();

        let score = self.session.submit_guess(guess)?;
        let round = self.session.round();
        let attempts = round.attempts();
        let secret = round.secret().copied();
        match (round.state(), secret) {
            (RoundState::Won, _) => {
                let celebration = match attempts {
                    1 => "🎯 First try! Extraordinary!".to_string(),
                    2..=4 => format!("🔥 Cracked it in {attempts} attempts!"),
                    _ => format!("🎉 Solved in {attempts} attempts!"),
                };
                self.add_message(&celebration, MessageStyle::Success);
                self.add_message("Play again? (y/n)", MessageStyle::Info);
                self.input_mode = InputMode::RoundOver;
            }
            (RoundState::Lost, Some(secret)) => {
                let text = format!("Out of attempts. The code was {secret}.");
                self.add_message(&text, MessageStyle::Error);
                self.add_message("Play again? (y/n)", MessageStyle::Info);
                self.input_mode = InputMode::RoundOver;
            }
            _ => {
                self.add_message(
                    &format!(
                        "{guess}: {} exact, {} color only",
                        score.exact, score.color_only
                    ),
                    MessageStyle::Info,
                );
            }
        }
        Ok(())
    }

    pub fn toggle_display(&mut self) {
        self.display = self.display.toggle();
        let text = format!("Display mode changed to {}.", self.display.label());
        self.add_message(&text, MessageStyle::Info);
    }

    pub fn new_round(&mut self) {
        self.session.new_round();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New round! A fresh code has been drawn.", MessageStyle::Info);
    }

    /// Leave the game, aborting a round still in play
    pub fn quit(&mut self) {
        match self.session.abort() {
            Ok(()) => info!("round aborted"),
            // Round already won or lost; nothing to abort
            Err(err) => debug!(%err, "quit after round end"),
        }
        self.should_quit = true;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    let app = res?;
    crate::output::print_statistics(app.session.stats());
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<App> {
    info!("tui started");

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{CodeGenerator, MAX_ATTEMPTS};

    const SEED: u64 = 5;

    fn app() -> App {
        App::new(&PlayConfig::new(DisplayMode::Blocks, Some(SEED)))
    }

    fn secret() -> Code {
        CodeGenerator::seeded(SEED).generate()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn miss(secret: &Code) -> String {
        let mut pegs = *secret.pegs();
        pegs.swap(0, 3);
        Code::new(pegs).unwrap().to_string()
    }

    #[test]
    fn typing_limited_to_code_length() {
        let mut app = app();
        for c in "123456".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_buffer, "1234");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "123");
        press(&mut app, KeyCode::Esc);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn non_color_keys_ignored() {
        let mut app = app();
        press(&mut app, KeyCode::Char('9'));
        press(&mut app, KeyCode::Char('x'));
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn invalid_guess_keeps_attempts() {
        let mut app = app();
        type_text(&mut app, "1122");
        assert_eq!(app.session.round().attempts(), 0);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);

        type_text(&mut app, "12");
        assert_eq!(app.session.round().attempts(), 0);
    }

    #[test]
    fn toggle_does_not_touch_round() {
        let mut app = app();
        type_text(&mut app, &miss(&secret()));
        press(&mut app, KeyCode::Char('r'));

        assert_eq!(app.display, DisplayMode::Numbers);
        assert_eq!(app.session.round().attempts(), 1);
        assert_eq!(app.session.round().state(), RoundState::InProgress);
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn win_then_replay() {
        let mut app = app();
        type_text(&mut app, &secret().to_string());
        assert_eq!(app.session.round().state(), RoundState::Won);
        assert_eq!(app.input_mode, InputMode::RoundOver);

        // Digits do nothing while waiting for the replay answer
        press(&mut app, KeyCode::Char('1'));
        assert!(app.input_buffer.is_empty());

        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.session.round().history().is_empty());
        assert_eq!(app.session.stats().rounds_won, 1);
    }

    #[test]
    fn loss_reveals_and_declining_quits() {
        let mut app = app();
        let secret = secret();
        for _ in 0..MAX_ATTEMPTS {
            type_text(&mut app, &miss(&secret));
        }

        assert_eq!(app.session.round().state(), RoundState::Lost);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains(&secret.to_string()))
        );

        press(&mut app, KeyCode::Char('n'));
        assert!(app.should_quit);
        assert_eq!(app.session.round().state(), RoundState::Lost);
        assert_eq!(app.session.stats().rounds_lost, 1);
        assert_eq!(app.session.stats().rounds_aborted, 0);
    }

    #[test]
    fn quit_aborts_round() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
        assert_eq!(app.session.round().state(), RoundState::Aborted);
        assert_eq!(app.session.stats().rounds_aborted, 1);
    }

    #[test]
    fn ctrl_c_quits_any_mode() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app();
        for i in 0..20 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "m19");
    }
}
