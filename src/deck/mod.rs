//! Deck generation.
//!
//! For each of the first `pairs` palette tokens the generator creates two
//! cards with sequential ids, then applies a uniform random permutation.
//!
//! ## Invariants
//!
//! - A deck of `p` pairs has `2p` cards
//! - Every token appears on exactly two cards
//! - Card ids are unique within a deck
//! - `p` never exceeds the palette size

mod generator;
mod layout;
pub mod palette;

pub use generator::DeckGenerator;
pub use layout::{Deck, OpenCards};
pub use palette::{PALETTE, PALETTE_SIZE};
