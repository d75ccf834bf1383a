//! Guess feedback scoring
//!
//! A score is the pair `(exact, color_only)`:
//! - `exact`: positions where guess and secret hold the same peg
//! - `color_only`: further pegs shared by both rows once exact matches are removed
//!
//! An exact match never also counts toward `color_only`.

use super::{CODE_LENGTH, Code, PEG_COUNT, Peg};

/// Feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    pub exact: u8,
    pub color_only: u8,
}

impl Score {
    /// Every peg in the right place
    pub const PERFECT: Self = Self {
        exact: CODE_LENGTH as u8,
        color_only: 0,
    };

    #[inline]
    #[must_use]
    pub const fn new(exact: u8, color_only: u8) -> Self {
        Self { exact, color_only }
    }

    /// Check if the guess cracked the code
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.exact as usize == CODE_LENGTH
    }

    /// Total pegs of the guess that appear in the secret at all
    #[inline]
    #[must_use]
    pub const fn total(self) -> u8 {
        self.exact + self.color_only
    }

    /// Score `guess` against `secret`
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Score};
    ///
    /// let secret = Code::parse("1234").unwrap();
    /// let guess = Code::parse("1325").unwrap();
    ///
    /// // Red exact; Blue and Green present elsewhere
    /// assert_eq!(Score::calculate(&secret, &guess), Score::new(1, 2));
    /// ```
    #[must_use]
    pub fn calculate(secret: &Code, guess: &Code) -> Self {
        Self::tally(secret.pegs(), guess.pegs())
    }

    /// Score two arbitrary peg rows
    ///
    /// Works on rows that break the `Code` invariants (repeated pegs, unequal
    /// lengths) without panicking; positions past the shorter row are ignored.
    ///
    /// # Algorithm
    /// 1. First pass: count exact matches; for every other position, tally the
    ///    secret's peg and the guess's peg in two separate per-color counters
    /// 2. Second pass: for each color add `min(secret_tally, guess_tally)`
    #[must_use]
    pub fn tally(secret: &[Peg], guess: &[Peg]) -> Self {
        let mut exact = 0u8;
        let mut secret_left = [0u8; PEG_COUNT];
        let mut guess_left = [0u8; PEG_COUNT];

        // First pass: exact matches, tally the rest
        for (&s, &g) in secret.iter().zip(guess) {
            if s == g {
                exact = exact.saturating_add(1);
            } else {
                secret_left[s.index()] = secret_left[s.index()].saturating_add(1);
                guess_left[g.index()] = guess_left[g.index()].saturating_add(1);
            }
        }

        // Second pass: overlap of the leftover multisets
        let color_only = secret_left
            .iter()
            .zip(&guess_left)
            .fold(0u8, |acc, (&s, &g)| acc.saturating_add(s.min(g)));

        Self { exact, color_only }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Peg::*;

    fn code(text: &str) -> Code {
        Code::parse(text).unwrap()
    }

    /// Every valid code: 8 * 7 * 6 * 5 = 1680
    fn all_codes() -> Vec<Code> {
        let mut codes = Vec::new();
        for a in Peg::ALL {
            for b in Peg::ALL {
                for c in Peg::ALL {
                    for d in Peg::ALL {
                        if let Ok(code) = Code::new([a, b, c, d]) {
                            codes.push(code);
                        }
                    }
                }
            }
        }
        codes
    }

    #[test]
    fn perfect_constant() {
        assert_eq!(Score::PERFECT, Score::new(4, 0));
        assert!(Score::PERFECT.is_perfect());
        assert!(!Score::new(3, 1).is_perfect());
    }

    #[test]
    fn reference_example() {
        // Secret Red Blue Green Yellow vs guess Red Green Blue Purple
        let secret = Code::new([Red, Blue, Green, Yellow]).unwrap();
        let guess = Code::new([Red, Green, Blue, Purple]).unwrap();
        assert_eq!(Score::calculate(&secret, &guess), Score::new(1, 2));
    }

    #[test]
    fn no_overlap() {
        assert_eq!(
            Score::calculate(&code("1234"), &code("5678")),
            Score::new(0, 0)
        );
    }

    #[test]
    fn all_colors_wrong_places() {
        assert_eq!(
            Score::calculate(&code("1234"), &code("4321")),
            Score::new(0, 4)
        );
        assert_eq!(
            Score::calculate(&code("1234"), &code("2143")),
            Score::new(0, 4)
        );
    }

    #[test]
    fn two_swapped() {
        assert_eq!(
            Score::calculate(&code("1234"), &code("1243")),
            Score::new(2, 2)
        );
    }

    #[test]
    fn self_score_is_perfect_for_every_code() {
        for c in all_codes() {
            assert_eq!(Score::calculate(&c, &c), Score::PERFECT);
        }
    }

    #[test]
    fn all_codes_count() {
        assert_eq!(all_codes().len(), 1680);
    }

    #[test]
    fn total_bounded_and_symmetric() {
        let codes = all_codes();
        let secret = code("3716");
        for guess in &codes {
            let forward = Score::calculate(&secret, guess);
            let backward = Score::calculate(guess, &secret);
            assert!(forward.total() as usize <= CODE_LENGTH);
            assert_eq!(forward, backward, "{secret} vs {guess}");
        }
    }

    #[test]
    fn symmetric_across_sampled_pairs() {
        let codes = all_codes();
        for secret in codes.iter().step_by(37) {
            for guess in codes.iter().step_by(41) {
                assert_eq!(
                    Score::calculate(secret, guess),
                    Score::calculate(guess, secret)
                );
            }
        }
    }

    #[test]
    fn exact_match_not_double_counted() {
        // Red sits in place; the guess's other Reds must not also count
        let score = Score::tally(&[Red, Blue, Green, Yellow], &[Red, Red, Red, Red]);
        assert_eq!(score, Score::new(1, 0));
    }

    #[test]
    fn tally_handles_duplicates() {
        // Secret R R B G, guess R B R R
        // Exact: position 0. Left secret {R, B, G}, left guess {B, R, R}
        // Overlap: R once, B once
        let score = Score::tally(&[Red, Red, Blue, Green], &[Red, Blue, Red, Red]);
        assert_eq!(score, Score::new(1, 2));
    }

    #[test]
    fn tally_tolerates_uneven_lengths() {
        assert_eq!(Score::tally(&[Red, Blue], &[Blue, Red, Green]), Score::new(0, 2));
        assert_eq!(Score::tally(&[], &[Red]), Score::new(0, 0));
    }
}
