//! Cards and the tokens they carry.
//!
//! A card has a stable `CardId` for the lifetime of its deck and a `Token`
//! shared with exactly one other card. Two boolean facets track its state:
//!
//! | face_up | matched | Meaning |
//! |---------|---------|---------|
//! | false   | false   | Hidden |
//! | true    | false   | Open, awaiting its partner or resolution |
//! | true    | true    | Resolved, permanently revealed |
//!
//! `face_up == false && matched == true` is never constructed by the engine.

use serde::{Deserialize, Serialize};

use crate::deck::palette::PALETTE;

/// Card identifier, unique within one deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The symbol two paired cards share.
///
/// Stored as an index into the fixed palette. Matching is token equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Token(pub u8);

impl Token {
    /// Create a token from a palette index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Palette index of this token.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Glyph rendered on the card face.
    ///
    /// Tokens outside the palette render as `"?"`; the generator never
    /// produces them.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        PALETTE.get(self.index()).copied().unwrap_or("?")
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single card in a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Stable identity within the deck.
    pub id: CardId,

    /// Symbol on the face.
    pub token: Token,

    /// Currently revealed?
    pub face_up: bool,

    /// Resolved as part of a matched pair?
    pub matched: bool,
}

impl Card {
    /// Create a hidden, unmatched card.
    #[must_use]
    pub const fn new(id: CardId, token: Token) -> Self {
        Self {
            id,
            token,
            face_up: false,
            matched: false,
        }
    }

    /// Face-up and not yet resolved.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.face_up && !self.matched
    }

    /// Can this card be flipped?
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        !self.face_up && !self.matched
    }
}
