//! Code representation
//!
//! A Code is an ordered row of 4 pairwise-distinct pegs. Both the secret and
//! every accepted guess are Codes, so the distinctness invariant holds for any
//! value of this type.

use super::Peg;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of pegs in a code
pub const CODE_LENGTH: usize = 4;

/// A row of 4 distinct pegs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([Peg; CODE_LENGTH]);

/// Error type for rejected guesses
///
/// Each variant names the rule that failed. Decoding stops at the first one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    #[error("Please enter {} numbers. You entered {found} characters.", CODE_LENGTH)]
    WrongLength { found: usize },
    #[error("'{found}' at position {position} is not a color number from 1 to 8.")]
    OutOfRange { position: usize, found: char },
    #[error("{peg} is used more than once (again at position {position}). Colors must be different.")]
    Duplicate { peg: Peg, position: usize },
}

impl Code {
    /// Create a code from 4 pegs
    ///
    /// # Errors
    /// Returns `CodeError::Duplicate` if any peg appears twice.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Peg};
    ///
    /// let code = Code::new([Peg::Red, Peg::Blue, Peg::Green, Peg::Yellow]).unwrap();
    /// assert_eq!(code.to_string(), "1234");
    ///
    /// assert!(Code::new([Peg::Red, Peg::Red, Peg::Green, Peg::Yellow]).is_err());
    /// ```
    pub fn new(pegs: [Peg; CODE_LENGTH]) -> Result<Self, CodeError> {
        let mut seen = [false; super::PEG_COUNT];
        for (position, &peg) in pegs.iter().enumerate() {
            if seen[peg.index()] {
                return Err(CodeError::Duplicate {
                    peg,
                    position: position + 1,
                });
            }
            seen[peg.index()] = true;
        }
        Ok(Self(pegs))
    }

    /// Build a code from pegs already known to be distinct
    pub(crate) fn from_distinct(pegs: [Peg; CODE_LENGTH]) -> Self {
        debug_assert!(Self::new(pegs).is_ok(), "pegs must be pairwise distinct");
        Self(pegs)
    }

    /// Decode player text such as `"1234"`
    ///
    /// Surrounding whitespace is ignored. Rules are checked in order: exact
    /// length, each character a digit `1`-`8`, then no repeated color.
    ///
    /// # Errors
    /// Returns the first `CodeError` rule violated.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, CodeError};
    ///
    /// assert!(Code::parse("8142").is_ok());
    /// assert_eq!(Code::parse("123"), Err(CodeError::WrongLength { found: 3 }));
    /// assert!(matches!(Code::parse("1123"), Err(CodeError::Duplicate { .. })));
    /// ```
    pub fn parse(input: &str) -> Result<Self, CodeError> {
        let input = input.trim();
        let found = input.chars().count();
        if found != CODE_LENGTH {
            return Err(CodeError::WrongLength { found });
        }

        let mut pegs = [Peg::Red; CODE_LENGTH];
        for (i, ch) in input.chars().enumerate() {
            pegs[i] = Peg::from_digit(ch).ok_or(CodeError::OutOfRange {
                position: i + 1,
                found: ch,
            })?;
        }

        Self::new(pegs)
    }

    /// Get the pegs in order
    #[inline]
    #[must_use]
    pub const fn pegs(&self) -> &[Peg; CODE_LENGTH] {
        &self.0
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for peg in self.0 {
            write!(f, "{}", peg.digit())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Peg::*;

    #[test]
    fn parse_valid() {
        let code = Code::parse("1234").unwrap();
        assert_eq!(code.pegs(), &[Red, Blue, Green, Yellow]);

        let code = Code::parse("8576").unwrap();
        assert_eq!(code.pegs(), &[Cyan, Orange, White, Purple]);
    }

    #[test]
    fn parse_trims_whitespace() {
        let code = Code::parse("  4321\n").unwrap();
        assert_eq!(code.to_string(), "4321");
    }

    #[test]
    fn parse_wrong_length() {
        assert_eq!(Code::parse(""), Err(CodeError::WrongLength { found: 0 }));
        assert_eq!(Code::parse("12"), Err(CodeError::WrongLength { found: 2 }));
        assert_eq!(
            Code::parse("12345"),
            Err(CodeError::WrongLength { found: 5 })
        );
    }

    #[test]
    fn parse_counts_characters_not_bytes() {
        // Four characters, one of them multi-byte: length passes, range fails
        assert_eq!(
            Code::parse("12é4"),
            Err(CodeError::OutOfRange {
                position: 3,
                found: 'é'
            })
        );
    }

    #[test]
    fn parse_out_of_range() {
        assert_eq!(
            Code::parse("1290"),
            Err(CodeError::OutOfRange {
                position: 3,
                found: '9'
            })
        );
        assert_eq!(
            Code::parse("0123"),
            Err(CodeError::OutOfRange {
                position: 1,
                found: '0'
            })
        );
        assert!(matches!(
            Code::parse("12a4"),
            Err(CodeError::OutOfRange { found: 'a', .. })
        ));
    }

    #[test]
    fn parse_duplicate() {
        assert_eq!(
            Code::parse("1123"),
            Err(CodeError::Duplicate {
                peg: Red,
                position: 2
            })
        );
        assert_eq!(
            Code::parse("5675"),
            Err(CodeError::Duplicate {
                peg: Purple,
                position: 4
            })
        );
    }

    #[test]
    fn range_checked_before_duplicates() {
        // "1019" has both a repeat and an out-of-range digit; range wins
        assert!(matches!(
            Code::parse("1019"),
            Err(CodeError::OutOfRange { found: '0', .. })
        ));
    }

    #[test]
    fn new_rejects_duplicates() {
        assert!(Code::new([Red, Blue, Green, Yellow]).is_ok());
        assert_eq!(
            Code::new([Red, Blue, Red, Yellow]),
            Err(CodeError::Duplicate {
                peg: Red,
                position: 3
            })
        );
    }

    #[test]
    fn from_str_matches_parse() {
        let a: Code = "3142".parse().unwrap();
        let b = Code::parse("3142").unwrap();
        assert_eq!(a, b);
        assert!("3141".parse::<Code>().is_err());
    }

    #[test]
    fn error_messages_name_the_rule() {
        let msg = Code::parse("12").unwrap_err().to_string();
        assert!(msg.contains("enter 4 numbers"));
        assert!(msg.contains("2 characters"));

        let msg = Code::parse("1239").unwrap_err().to_string();
        assert!(msg.contains("1 to 8"));

        let msg = Code::parse("1231").unwrap_err().to_string();
        assert!(msg.contains("Red"));
        assert!(msg.contains("different"));
    }
}
