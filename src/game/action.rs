//! Player input decoding
//!
//! Turns one line of player text into a tagged action. Control keys are
//! recognised by their first character; anything else has to be a valid code.

use crate::core::{Code, CodeError};

/// What the player asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// A validated guess, ready to submit
    Guess(Code),
    /// Switch between color blocks and numerals
    ToggleDisplay,
    /// Leave the round immediately
    Quit,
}

impl PlayerAction {
    /// Decode a line of input
    ///
    /// # Errors
    /// Returns the `CodeError` describing why the text is not a valid guess.
    ///
    /// # Examples
    /// ```
    /// use mastermind::game::PlayerAction;
    ///
    /// assert_eq!(PlayerAction::parse("q"), Ok(PlayerAction::Quit));
    /// assert_eq!(PlayerAction::parse("R"), Ok(PlayerAction::ToggleDisplay));
    /// assert!(matches!(PlayerAction::parse("1234"), Ok(PlayerAction::Guess(_))));
    /// assert!(PlayerAction::parse("1123").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, CodeError> {
        let input = input.trim();
        match input.chars().next() {
            Some('q' | 'Q') => Ok(Self::Quit),
            Some('r' | 'R') => Ok(Self::ToggleDisplay),
            _ => Code::parse(input).map(Self::Guess),
        }
    }
}
