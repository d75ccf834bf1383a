//! Peg display preference

/// How pegs are drawn on screen
///
/// Passed explicitly to every render call. The game engine never sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Colored background blocks
    #[default]
    Blocks,
    /// Digits 1-8
    Numbers,
}

impl DisplayMode {
    /// The other mode
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Blocks => Self::Numbers,
            Self::Numbers => Self::Blocks,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blocks => "color blocks",
            Self::Numbers => "numbers",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_returns() {
        assert_eq!(DisplayMode::Blocks.toggle(), DisplayMode::Numbers);
        assert_eq!(DisplayMode::Numbers.toggle(), DisplayMode::Blocks);
        assert_eq!(DisplayMode::default().toggle().toggle(), DisplayMode::Blocks);
    }

    #[test]
    fn labels() {
        assert_eq!(DisplayMode::Blocks.label(), "color blocks");
        assert_eq!(DisplayMode::Numbers.label(), "numbers");
    }
}
