//! # pairs-dash
//!
//! Core of a browser mini-game dashboard: a matching-pairs card game plus
//! the address-synchronized configuration around it.
//!
//! ## Design Principles
//!
//! 1. **Event-Driven**: Every transition is a discrete event (flip, timer,
//!    navigation) carrying its own timestamp. Nothing blocks, nothing reads
//!    a clock.
//!
//! 2. **Generation-Guarded Timers**: Resolution timers carry the deck
//!    generation they were issued for. A timer that outlives a reset is a
//!    provable no-op.
//!
//! 3. **Address Is Truth**: The page address decides configuration on
//!    load and on navigation; in-app changes write back in place.
//!
//! ## Modules
//!
//! - `core`: Cards, tokens, timestamps, RNG
//! - `deck`: Token palette and shuffled deck generation
//! - `engine`: Match state machine and timer queue
//! - `config`: Pair count, view, query codec, address store
//! - `shell`: Dashboard driver and render-ready frames
//! - `wasm`: Browser bindings (feature `wasm`)

pub mod core;
pub mod deck;
pub mod engine;
pub mod config;
pub mod shell;
pub mod error;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use crate::core::{Card, CardId, Token, Millis, DeckRng};

pub use crate::deck::{Deck, DeckGenerator, PALETTE, PALETTE_SIZE};

pub use crate::engine::{
    MatchEngine, TimerQueue, EngineSnapshot,
    Phase, Generation, Outcome, IgnoreReason,
    FlipOutcome, Resolution, ResolutionTicket,
    MATCH_DELAY, MISMATCH_DELAY,
};

pub use crate::config::{
    AddressBar, MemoryAddressBar, ConfigStore, ConfigChange,
    DashConfig, PairCount, View,
};

pub use crate::shell::{Dashboard, Intent, Frame, Panel, BoardView, CardView};

pub use crate::error::ConfigError;
