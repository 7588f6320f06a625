//! Validation errors.
//!
//! Only the explicit validation APIs return these (`PairCount::new`,
//! `View::from_str`, `Deck::ordered`, `DeckGenerator::generate`,
//! `MatchEngine::from_deck`). Reading the page address never fails: bad
//! values fall back to their defaults, and the engine ignores invalid flips
//! instead of reporting them.

use thiserror::Error;

/// A configuration value that cannot be used.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Pair count outside the supported set.
    #[error("unsupported pair count {0}; expected one of 6, 8, 10, 12")]
    UnsupportedPairCount(u32),

    /// More pairs requested than the palette has distinct tokens.
    #[error("pair count {requested} exceeds the {available} distinct tokens in the palette")]
    PaletteExhausted {
        /// Pairs asked for.
        requested: usize,
        /// Distinct tokens available.
        available: usize,
    },

    /// Deck does not hold every token exactly twice under unique ids.
    #[error("deck is not a set of distinct pairs")]
    MalformedDeck,

    /// A deck needs at least one pair.
    #[error("a deck needs at least one pair")]
    EmptyDeck,

    /// View name not in the closed set.
    #[error("unknown view `{0}`")]
    UnknownView(String),

    /// Pair count text is not an integer.
    #[error("pair count `{0}` is not a number")]
    InvalidNumber(String),
}
