//! Shuffled deck generation.

use tracing::debug;

use super::layout::Deck;
use crate::config::PairCount;
use crate::core::DeckRng;
use crate::error::ConfigError;

/// Builds fresh, uniformly shuffled decks.
///
/// Each deal draws from its own fork of the root RNG, so one seed yields a
/// reproducible sequence of decks.
///
/// ```
/// use pairs_dash::deck::DeckGenerator;
///
/// let mut generator = DeckGenerator::new(7);
/// let deck = generator.generate(6).unwrap();
/// assert_eq!(deck.len(), 12);
/// assert!(deck.is_well_formed());
///
/// assert!(generator.generate(0).is_err());
/// assert!(generator.generate(17).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct DeckGenerator {
    rng: DeckRng,
}

impl DeckGenerator {
    /// Create a generator seeded for reproducible deals.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(DeckRng::new(seed))
    }

    /// Create a generator from an existing RNG stream.
    #[must_use]
    pub fn with_rng(rng: DeckRng) -> Self {
        Self { rng }
    }

    /// Generate a deck of `pairs` pairs.
    ///
    /// Accepts any count from 1 up to the palette size, which is wider
    /// than the set the address accepts.
    pub fn generate(&mut self, pairs: usize) -> Result<Deck, ConfigError> {
        let ordered = Deck::ordered(pairs)?;
        Ok(self.shuffled(&ordered))
    }

    /// Deal a deck for a validated pair count.
    pub fn deal(&mut self, pairs: PairCount) -> Deck {
        self.shuffled(&Deck::paired(pairs.get()))
    }

    fn shuffled(&mut self, ordered: &Deck) -> Deck {
        let mut cards: Vec<_> = ordered.iter().copied().collect();
        let mut stream = self.rng.fork();
        stream.shuffle(&mut cards);

        debug!(pairs = ordered.pairs(), seed = stream.seed(), "dealt deck");
        Deck::from_cards(cards)
    }
}
