//! The matching-pairs state machine.
//!
//! ## Phases
//!
//! | Phase | Open cards | Lock |
//! |-------|-----------|------|
//! | `Idle` | 0 | released |
//! | `OneOpen` | 1 | released |
//! | `Resolving` | 2 | held |
//! | `Complete` | 0, every card matched | released |
//!
//! ## Flip / resolve protocol
//!
//! Opening a second card takes the lock, counts one move and hands back a
//! `ResolutionTicket`. The host waits until `ticket.due_at` and passes the
//! ticket to `MatchEngine::resolve`. Matches resolve after 350 ms,
//! mismatches after 650 ms, so a miss stays visible long enough to
//! memorize.
//!
//! Tickets carry the deck `Generation` they were issued for. After a reset
//! the old ticket no longer matches and `resolve` drops it, so a timer
//! that escapes cancellation cannot touch the new deck.
//!
//! ```
//! use pairs_dash::core::Millis;
//! use pairs_dash::deck::{Deck, DeckGenerator};
//! use pairs_dash::engine::{FlipOutcome, MatchEngine, Outcome, Resolution};
//!
//! let mut engine = MatchEngine::from_deck(Deck::ordered(6).unwrap(), DeckGenerator::new(1)).unwrap();
//!
//! assert_eq!(engine.flip(0, Millis::new(0)), FlipOutcome::Opened);
//! let FlipOutcome::Pending(ticket) = engine.flip(1, Millis::new(100)) else {
//!     unreachable!()
//! };
//! assert_eq!(ticket.outcome, Outcome::Match);
//! assert!(engine.is_locked());
//!
//! assert_eq!(engine.resolve(&ticket, ticket.due_at), Resolution::Applied(Outcome::Match));
//! assert_eq!(engine.moves(), 1);
//! ```

mod machine;
mod timer;

pub use machine::MatchEngine;
pub use timer::TimerQueue;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::PairCount;
use crate::core::Millis;
use crate::deck::Deck;

/// Pause before a matching pair is marked resolved.
pub const MATCH_DELAY: Duration = Duration::from_millis(350);

/// Pause before a mismatched pair is hidden again.
pub const MISMATCH_DELAY: Duration = Duration::from_millis(650);

/// Identifies one deck instance. Bumped on every reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gen({})", self.0)
    }
}

/// Where the state machine is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No unresolved card is face-up.
    Idle,
    /// Exactly one unresolved card is face-up.
    OneOpen,
    /// Two cards are face-up and awaiting resolution; flips are rejected.
    Resolving,
    /// Every card is matched.
    Complete,
}

/// How a revealed pair resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Tokens are equal; both cards stay revealed for good.
    Match,
    /// Tokens differ; both cards are hidden again.
    Mismatch,
}

impl Outcome {
    /// Delay before this outcome is applied.
    #[must_use]
    pub const fn delay(self) -> Duration {
        match self {
            Outcome::Match => MATCH_DELAY,
            Outcome::Mismatch => MISMATCH_DELAY,
        }
    }
}

/// Why a flip was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// A pair is awaiting resolution.
    Locked,
    /// No card at that index.
    OutOfRange,
    /// The card is already face-up.
    AlreadyOpen,
    /// The card is already matched.
    AlreadyMatched,
}

/// Result of a flip request.
///
/// Ignored flips are no-ops, not errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// The card is now the only open card.
    Opened,
    /// The card completed a pair; resolve the ticket once it is due.
    Pending(ResolutionTicket),
}

impl FlipOutcome {
    /// Did the flip change state?
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        !matches!(self, FlipOutcome::Ignored(_))
    }

    /// The ticket to schedule, if any.
    #[must_use]
    pub const fn ticket(&self) -> Option<&ResolutionTicket> {
        match self {
            FlipOutcome::Pending(ticket) => Some(ticket),
            _ => None,
        }
    }
}

/// A scheduled resolution of two revealed cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionTicket {
    /// Deck instance the ticket was issued for.
    pub generation: Generation,
    /// Index of the card opened first.
    pub first: usize,
    /// Index of the card opened second.
    pub second: usize,
    /// Outcome decided when the pair was revealed.
    pub outcome: Outcome,
    /// When the host should fire it.
    pub due_at: Millis,
}

/// Result of firing a ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The outcome was applied and the lock released.
    Applied(Outcome),
    /// The ticket belongs to a superseded deck or pair; nothing changed.
    Stale,
}

/// Read-only view of the engine for rendering.
///
/// `deck` shares structure with the live deck, so taking a snapshot is cheap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EngineSnapshot {
    /// Deck instance.
    pub generation: Generation,
    /// Configured pairs.
    pub pairs: PairCount,
    /// Current phase.
    pub phase: Phase,
    /// Cards in display order.
    pub deck: Deck,
    /// Completed two-card reveals.
    pub moves: u32,
    /// Are flips currently rejected?
    pub locked: bool,
    /// Time from first flip to completion; absent until complete.
    pub elapsed_ms: Option<u64>,
}
