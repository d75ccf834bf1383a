//! Code peg colors
//!
//! The game alphabet: 8 distinct colors. Players type them as the digits
//! `1`-`8`, which map to alphabet positions 0-7 in the order below.

use std::fmt;

/// Number of distinct peg colors in the alphabet
pub const PEG_COUNT: usize = 8;

/// A single code peg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Peg {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
    White,
    Cyan,
}

impl Peg {
    /// Every peg, in alphabet order
    pub const ALL: [Self; PEG_COUNT] = [
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Yellow,
        Self::Purple,
        Self::Orange,
        Self::White,
        Self::Cyan,
    ];

    /// Position of this peg in the alphabet (0-7)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a peg by alphabet position
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < PEG_COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Decode a player-typed digit (`'1'`-`'8'`)
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Peg;
    ///
    /// assert_eq!(Peg::from_digit('1'), Some(Peg::Red));
    /// assert_eq!(Peg::from_digit('8'), Some(Peg::Cyan));
    /// assert_eq!(Peg::from_digit('9'), None);
    /// ```
    #[must_use]
    pub fn from_digit(ch: char) -> Option<Self> {
        match ch {
            '1'..='8' => Self::from_index(ch as usize - '1' as usize),
            _ => None,
        }
    }

    /// The digit a player types for this peg
    #[must_use]
    pub const fn digit(self) -> char {
        (b'1' + self as u8) as char
    }

    /// Human-readable color name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Yellow => "Yellow",
            Self::Purple => "Purple",
            Self::Orange => "Orange",
            Self::White => "White",
            Self::Cyan => "Cyan",
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_alphabet_order() {
        for (i, peg) in Peg::ALL.iter().enumerate() {
            assert_eq!(peg.index(), i);
            assert_eq!(Peg::from_index(i), Some(*peg));
        }
        assert_eq!(Peg::from_index(PEG_COUNT), None);
    }

    #[test]
    fn digits_map_to_positions() {
        assert_eq!(Peg::from_digit('1'), Some(Peg::Red));
        assert_eq!(Peg::from_digit('4'), Some(Peg::Yellow));
        assert_eq!(Peg::from_digit('6'), Some(Peg::Orange));
        assert_eq!(Peg::from_digit('0'), None);
        assert_eq!(Peg::from_digit('9'), None);
        assert_eq!(Peg::from_digit('a'), None);
    }

    #[test]
    fn digit_round_trips() {
        for peg in Peg::ALL {
            assert_eq!(Peg::from_digit(peg.digit()), Some(peg));
        }
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Peg::Purple.to_string(), "Purple");
        assert_eq!(format!("{}", Peg::Cyan), "Cyan");
    }
}
