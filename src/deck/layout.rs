//! An ordered sequence of paired cards.
//!
//! Uses an `im::Vector` so every snapshot handed to the shell is an O(1)
//! clone that shares structure with the live deck.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::palette::PALETTE_SIZE;
use crate::core::{Card, CardId, Token};
use crate::error::ConfigError;

/// Indices of face-up, unresolved cards. Never more than two in practice.
pub type OpenCards = SmallVec<[usize; 2]>;

/// A deck of `2 × pairs` cards.
///
/// The deck does not itself forbid more than two open cards; the match
/// engine never builds such a state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Build a deck from cards in display order.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// The unshuffled layout `[t0, t0, t1, t1, ...]` with sequential ids.
    ///
    /// ```
    /// use pairs_dash::deck::Deck;
    ///
    /// let deck = Deck::ordered(3).unwrap();
    /// assert_eq!(deck.len(), 6);
    /// assert_eq!(deck.get(0).unwrap().token, deck.get(1).unwrap().token);
    /// assert_ne!(deck.get(1).unwrap().token, deck.get(2).unwrap().token);
    /// assert!(Deck::ordered(0).is_err());
    /// assert!(Deck::ordered(17).is_err());
    /// ```
    pub fn ordered(pairs: usize) -> Result<Self, ConfigError> {
        if pairs == 0 {
            return Err(ConfigError::EmptyDeck);
        }
        if pairs > PALETTE_SIZE {
            return Err(ConfigError::PaletteExhausted {
                requested: pairs,
                available: PALETTE_SIZE,
            });
        }
        Ok(Self::paired(pairs))
    }

    /// `ordered` without the bounds check. `pairs` must fit the palette.
    pub(super) fn paired(pairs: usize) -> Self {
        debug_assert!(pairs <= PALETTE_SIZE);
        Self::from_cards((0..pairs * 2).map(|i| {
            Card::new(CardId::new(i as u32), Token::new((i / 2) as u8))
        }))
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the deck empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs (half the card count).
    #[must_use]
    pub fn pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Card at a display position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    /// Iterate over cards in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Positions of face-up, unresolved cards, in display order.
    #[must_use]
    pub fn open_indices(&self) -> OpenCards {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_open())
            .map(|(i, _)| i)
            .collect()
    }

    /// Every card resolved?
    ///
    /// An empty deck counts as not complete.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|card| card.matched)
    }

    /// Number of resolved pairs.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|card| card.matched).count() / 2
    }

    /// How many cards carry each token.
    #[must_use]
    pub fn token_counts(&self) -> FxHashMap<Token, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.token).or_insert(0) += 1;
        }
        counts
    }

    /// Exactly two cards per token and no duplicate ids.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        if self.cards.len() % 2 != 0 {
            return false;
        }

        let counts = self.token_counts();
        if counts.len() != self.pairs() || counts.values().any(|&n| n != 2) {
            return false;
        }

        let mut ids: Vec<CardId> = self.cards.iter().map(|card| card.id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len() == self.cards.len()
    }
}
