//! Core types: cards, tokens, timestamps, RNG.
//!
//! These are the building blocks shared by the deck generator, the match
//! engine and the shell. None of them know about game rules.

pub mod card;
pub mod rng;
pub mod time;

pub use card::{Card, CardId, Token};
pub use rng::DeckRng;
pub use time::Millis;
