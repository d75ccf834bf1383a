//! Secret code generation

use crate::core::{CODE_LENGTH, Code, Peg};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::trace;

/// Produces fresh secret codes
///
/// Owns its own random source, seeded once when the generator is created.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    rng: StdRng,
}

impl CodeGenerator {
    /// Create a generator seeded from operating system entropy
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a generator with a fixed seed (reproducible secrets)
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a secret: 4 distinct pegs, uniform without replacement, random order
    ///
    /// # Examples
    /// ```
    /// use mastermind::game::CodeGenerator;
    ///
    /// let mut generator = CodeGenerator::seeded(7);
    /// let secret = generator.generate();
    /// assert_eq!(secret.to_string().len(), 4);
    /// ```
    pub fn generate(&mut self) -> Code {
        let mut palette = Peg::ALL;
        let (chosen, _) = palette.partial_shuffle(&mut self.rng, CODE_LENGTH);
        let code = Code::from_distinct(std::array::from_fn(|i| chosen[i]));

        trace!(secret = %code, "generated secret");
        code
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::from_os_rng()
    }
}
