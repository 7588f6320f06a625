//! Match engine implementation.

use tracing::{debug, trace};

use super::{
    EngineSnapshot, FlipOutcome, Generation, IgnoreReason, Outcome, Phase, Resolution,
    ResolutionTicket,
};
use crate::config::PairCount;
use crate::core::{Millis, Token};
use crate::deck::{Deck, DeckGenerator};
use crate::error::ConfigError;

/// Owns one deck plus its session: moves, lock, timestamps.
///
/// Every mutation is driven by a discrete event carrying its own
/// timestamp: a flip, a ticket firing, or a reset. Nothing blocks.
#[derive(Clone, Debug)]
pub struct MatchEngine {
    generator: DeckGenerator,
    pairs: PairCount,
    deck: Deck,
    generation: Generation,
    moves: u32,
    /// The two open cards while the lock is held, in flip order.
    pending: Option<(usize, usize)>,
    started_at: Option<Millis>,
    finished_at: Option<Millis>,
}

impl MatchEngine {
    /// Create an engine with a freshly dealt deck.
    #[must_use]
    pub fn new(pairs: PairCount, seed: u64) -> Self {
        Self::with_generator(pairs, DeckGenerator::new(seed))
    }

    /// Create an engine dealing from an existing generator.
    #[must_use]
    pub fn with_generator(pairs: PairCount, mut generator: DeckGenerator) -> Self {
        let deck = generator.deal(pairs);
        Self::assemble(generator, pairs, deck)
    }

    /// Create an engine over a prepared deck.
    ///
    /// Later resets deal from `generator`. The deck must be well formed
    /// and hold a supported number of pairs.
    pub fn from_deck(deck: Deck, generator: DeckGenerator) -> Result<Self, ConfigError> {
        if !deck.is_well_formed() {
            return Err(ConfigError::MalformedDeck);
        }
        let pairs = PairCount::new(u32::try_from(deck.pairs()).unwrap_or(u32::MAX))?;
        Ok(Self::assemble(generator, pairs, deck))
    }

    fn assemble(generator: DeckGenerator, pairs: PairCount, deck: Deck) -> Self {
        Self {
            generator,
            pairs,
            deck,
            generation: Generation::default(),
            moves: 0,
            pending: None,
            started_at: None,
            finished_at: None,
        }
    }

    // === Intents ===

    /// Turn a card face-up.
    ///
    /// Ignored while locked, for an index past the end, or for a card that
    /// is already face-up or matched. Opening the second card of a pair
    /// takes the lock, counts a move and returns the ticket to schedule.
    pub fn flip(&mut self, index: usize, now: Millis) -> FlipOutcome {
        if let Some(reason) = self.reject(index) {
            trace!(index, ?reason, generation = %self.generation, "flip ignored");
            return FlipOutcome::Ignored(reason);
        }

        if let Some(card) = self.deck.get_mut(index) {
            card.face_up = true;
        }
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }

        let open = self.deck.open_indices();
        let Some(&first) = open.iter().find(|&&i| i != index) else {
            debug!(index, generation = %self.generation, "card opened");
            return FlipOutcome::Opened;
        };

        let outcome = if self.token_at(first) == self.token_at(index) {
            Outcome::Match
        } else {
            Outcome::Mismatch
        };
        self.pending = Some((first, index));
        self.moves += 1;

        let ticket = ResolutionTicket {
            generation: self.generation,
            first,
            second: index,
            outcome,
            due_at: now.after(outcome.delay()),
        };
        debug!(
            first,
            second = index,
            ?outcome,
            moves = self.moves,
            due_at = %ticket.due_at,
            "pair revealed"
        );
        FlipOutcome::Pending(ticket)
    }

    /// Apply a due ticket.
    ///
    /// A ticket from an earlier generation, or for a pair that is no longer
    /// pending, is dropped without touching state.
    pub fn resolve(&mut self, ticket: &ResolutionTicket, now: Millis) -> Resolution {
        if ticket.generation != self.generation
            || self.pending != Some((ticket.first, ticket.second))
        {
            debug!(
                ticket_generation = %ticket.generation,
                generation = %self.generation,
                "stale resolution dropped"
            );
            return Resolution::Stale;
        }

        self.pending = None;
        let outcome = if self.token_at(ticket.first) == self.token_at(ticket.second) {
            Outcome::Match
        } else {
            Outcome::Mismatch
        };

        for index in [ticket.first, ticket.second] {
            if let Some(card) = self.deck.get_mut(index) {
                match outcome {
                    Outcome::Match => card.matched = true,
                    Outcome::Mismatch => card.face_up = false,
                }
            }
        }

        if self.finished_at.is_none() && self.deck.all_matched() {
            self.finished_at = Some(now);
            debug!(
                moves = self.moves,
                elapsed_ms = ?self.elapsed_ms(),
                generation = %self.generation,
                "session complete"
            );
        } else {
            debug!(?outcome, generation = %self.generation, "pair resolved");
        }

        Resolution::Applied(outcome)
    }

    /// Discard the deck and session and deal a new one.
    ///
    /// Legal from any phase. Any outstanding ticket becomes stale.
    pub fn reset(&mut self, pairs: PairCount) {
        self.pairs = pairs;
        self.deck = self.generator.deal(pairs);
        self.generation = self.generation.next();
        self.moves = 0;
        self.pending = None;
        self.started_at = None;
        self.finished_at = None;
        debug!(%pairs, generation = %self.generation, "engine reset");
    }

    /// Reset with the current pair count.
    pub fn restart(&mut self) {
        self.reset(self.pairs);
    }

    // === Queries ===

    /// Configured pairs for the current deck.
    #[must_use]
    pub fn pairs(&self) -> PairCount {
        self.pairs
    }

    /// Current deck instance.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The live deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Completed two-card reveals this session.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Are flips being rejected?
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.pending.is_some()
    }

    /// First flip of the session.
    #[must_use]
    pub fn started_at(&self) -> Option<Millis> {
        self.started_at
    }

    /// Instant the last pair resolved.
    #[must_use]
    pub fn finished_at(&self) -> Option<Millis> {
        self.finished_at
    }

    /// Session duration, defined only once complete.
    #[must_use]
    pub fn elapsed_ms(&self) -> Option<u64> {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => Some(end.since(start)),
            _ => None,
        }
    }

    /// Current phase, derived from the deck and lock.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.deck.all_matched() {
            Phase::Complete
        } else if self.pending.is_some() {
            Phase::Resolving
        } else if self.deck.open_indices().len() == 1 {
            Phase::OneOpen
        } else {
            Phase::Idle
        }
    }

    /// Every card matched?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.finished_at.is_some()
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            generation: self.generation,
            pairs: self.pairs,
            phase: self.phase(),
            deck: self.deck.clone(),
            moves: self.moves,
            locked: self.is_locked(),
            elapsed_ms: self.elapsed_ms(),
        }
    }

    // === Helpers ===

    fn reject(&self, index: usize) -> Option<IgnoreReason> {
        if self.pending.is_some() {
            return Some(IgnoreReason::Locked);
        }
        match self.deck.get(index) {
            None => Some(IgnoreReason::OutOfRange),
            Some(card) if card.matched => Some(IgnoreReason::AlreadyMatched),
            Some(card) if card.face_up => Some(IgnoreReason::AlreadyOpen),
            Some(_) => None,
        }
    }

    fn token_at(&self, index: usize) -> Option<Token> {
        self.deck.get(index).map(|card| card.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Card;
    use crate::engine::{MATCH_DELAY, MISMATCH_DELAY};

    fn ordered(pairs: usize) -> MatchEngine {
        MatchEngine::from_deck(Deck::ordered(pairs).unwrap(), DeckGenerator::new(42)).unwrap()
    }

    fn pending(outcome: FlipOutcome) -> ResolutionTicket {
        match outcome {
            FlipOutcome::Pending(ticket) => ticket,
            other => panic!("expected a pending resolution, got {:?}", other),
        }
    }

    #[test]
    fn test_new_engine_is_idle() {
        let engine = MatchEngine::new(PairCount::DEFAULT, 42);
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.deck().len(), 16);
        assert!(engine.deck().is_well_formed());
        assert_eq!(engine.moves(), 0);
        assert!(!engine.is_locked());
        assert_eq!(engine.elapsed_ms(), None);
    }

    #[test]
    fn test_first_flip_opens_and_starts_clock() {
        let mut engine = ordered(6);
        assert_eq!(engine.flip(3, Millis::new(500)), FlipOutcome::Opened);
        assert_eq!(engine.phase(), Phase::OneOpen);
        assert_eq!(engine.started_at(), Some(Millis::new(500)));
        assert_eq!(engine.moves(), 0);
    }

    #[test]
    fn test_second_flip_locks_and_counts() {
        let mut engine = ordered(6);
        engine.flip(0, Millis::new(0));
        let ticket = pending(engine.flip(2, Millis::new(10)));

        assert_eq!(ticket.first, 0);
        assert_eq!(ticket.second, 2);
        assert_eq!(ticket.outcome, Outcome::Mismatch);
        assert_eq!(ticket.due_at, Millis::new(10).after(MISMATCH_DELAY));
        assert_eq!(engine.phase(), Phase::Resolving);
        assert!(engine.is_locked());
        assert_eq!(engine.moves(), 1);
    }

    #[test]
    fn test_match_delay_is_shorter() {
        let mut engine = ordered(6);
        engine.flip(4, Millis::new(0));
        let ticket = pending(engine.flip(5, Millis::new(0)));
        assert_eq!(ticket.outcome, Outcome::Match);
        assert_eq!(ticket.due_at, Millis::ZERO.after(MATCH_DELAY));
        assert!(MATCH_DELAY < MISMATCH_DELAY);
    }

    #[test]
    fn test_ignored_flips() {
        let mut engine = ordered(6);

        assert_eq!(engine.flip(12, Millis::ZERO), FlipOutcome::Ignored(IgnoreReason::OutOfRange));
        engine.flip(0, Millis::ZERO);
        assert_eq!(engine.flip(0, Millis::ZERO), FlipOutcome::Ignored(IgnoreReason::AlreadyOpen));

        let ticket = pending(engine.flip(1, Millis::ZERO));
        assert_eq!(engine.flip(2, Millis::ZERO), FlipOutcome::Ignored(IgnoreReason::Locked));

        engine.resolve(&ticket, ticket.due_at);
        assert_eq!(engine.flip(1, Millis::ZERO), FlipOutcome::Ignored(IgnoreReason::AlreadyMatched));
        assert_eq!(engine.moves(), 1);
    }

    #[test]
    fn test_ignored_flip_does_not_start_clock() {
        let mut engine = ordered(6);
        engine.flip(99, Millis::new(5));
        assert_eq!(engine.started_at(), None);
    }

    #[test]
    fn test_resolve_mismatch_hides_both() {
        let mut engine = ordered(6);
        engine.flip(0, Millis::ZERO);
        let ticket = pending(engine.flip(3, Millis::ZERO));

        assert_eq!(engine.resolve(&ticket, ticket.due_at), Resolution::Applied(Outcome::Mismatch));
        assert!(engine.deck().get(0).unwrap().is_hidden());
        assert!(engine.deck().get(3).unwrap().is_hidden());
        assert_eq!(engine.phase(), Phase::Idle);
        assert!(!engine.is_locked());
    }

    #[test]
    fn test_resolve_match_keeps_face_up() {
        let mut engine = ordered(6);
        engine.flip(2, Millis::ZERO);
        let ticket = pending(engine.flip(3, Millis::ZERO));

        engine.resolve(&ticket, ticket.due_at);
        for i in [2, 3] {
            let card = engine.deck().get(i).unwrap();
            assert!(card.face_up && card.matched);
        }
        assert_eq!(engine.phase(), Phase::Idle);
    }

    #[test]
    fn test_resolving_twice_is_stale() {
        let mut engine = ordered(6);
        engine.flip(0, Millis::ZERO);
        let ticket = pending(engine.flip(1, Millis::ZERO));

        assert!(matches!(engine.resolve(&ticket, ticket.due_at), Resolution::Applied(_)));
        assert_eq!(engine.resolve(&ticket, ticket.due_at), Resolution::Stale);
    }

    #[test]
    fn test_completion_sets_elapsed_once() {
        let mut engine = ordered(6);
        let mut now = Millis::new(1_000);

        for pair in 0..6 {
            engine.flip(pair * 2, now);
            let ticket = pending(engine.flip(pair * 2 + 1, now));
            assert_eq!(engine.elapsed_ms(), None);
            now = ticket.due_at;
            engine.resolve(&ticket, now);
        }

        assert_eq!(engine.phase(), Phase::Complete);
        assert!(engine.is_complete());
        assert_eq!(engine.finished_at(), Some(now));
        assert_eq!(engine.elapsed_ms(), Some(now.since(Millis::new(1_000))));
        assert_eq!(engine.moves(), 6);

        // Nothing left to flip; elapsed is frozen
        let elapsed = engine.elapsed_ms();
        for i in 0..12 {
            assert!(!engine.flip(i, Millis::new(99_999)).is_accepted());
        }
        assert_eq!(engine.elapsed_ms(), elapsed);
    }

    #[test]
    fn test_reset_clears_session() {
        let mut engine = ordered(6);
        engine.flip(0, Millis::ZERO);
        engine.flip(1, Millis::ZERO);

        let before = engine.generation();
        engine.reset(PairCount::new(10).unwrap());

        assert_eq!(engine.generation(), before.next());
        assert_eq!(engine.deck().len(), 20);
        assert!(engine.deck().is_well_formed());
        assert_eq!(engine.moves(), 0);
        assert!(!engine.is_locked());
        assert_eq!(engine.started_at(), None);
        assert_eq!(engine.elapsed_ms(), None);
        assert_eq!(engine.phase(), Phase::Idle);
    }

    #[test]
    fn test_stale_ticket_after_reset() {
        let mut engine = ordered(6);
        engine.flip(0, Millis::ZERO);
        let ticket = pending(engine.flip(1, Millis::ZERO));

        engine.restart();
        let deck = engine.deck().clone();

        assert_eq!(engine.resolve(&ticket, ticket.due_at), Resolution::Stale);
        assert_eq!(engine.deck(), &deck);
        assert_eq!(engine.moves(), 0);
    }

    #[test]
    fn test_stale_ticket_does_not_resolve_new_pending_pair() {
        let mut engine = ordered(6);
        engine.flip(0, Millis::ZERO);
        let old = pending(engine.flip(1, Millis::ZERO));

        engine.restart();
        engine.flip(0, Millis::ZERO);
        engine.flip(1, Millis::ZERO);

        assert_eq!(engine.resolve(&old, old.due_at), Resolution::Stale);
        assert!(engine.is_locked());
        assert_eq!(engine.moves(), 1);
    }

    #[test]
    fn test_from_deck_rejects_unsupported_size() {
        let engine = MatchEngine::from_deck(Deck::ordered(3).unwrap(), DeckGenerator::new(1));
        assert_eq!(engine.err(), Some(ConfigError::UnsupportedPairCount(3)));

        let engine = MatchEngine::from_deck(Deck::default(), DeckGenerator::new(1));
        assert_eq!(engine.err(), Some(ConfigError::UnsupportedPairCount(0)));
    }

    #[test]
    fn test_from_deck_rejects_malformed_deck() {
        let cards: Vec<_> = Deck::ordered(6)
            .unwrap()
            .iter()
            .map(|card| Card { token: Token::new(0), ..*card })
            .collect();
        let engine = MatchEngine::from_deck(Deck::from_cards(cards), DeckGenerator::new(1));
        assert_eq!(engine.err(), Some(ConfigError::MalformedDeck));
    }

    #[test]
    fn test_from_deck_pairs_agree_with_cards() {
        let engine = ordered(6);
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.pairs.cards(), snapshot.deck.len());
        assert_eq!(engine.pairs().get(), 6);
    }

    #[test]
    fn test_snapshot() {
        let mut engine = ordered(6);
        engine.flip(0, Millis::ZERO);
        let snapshot = engine.snapshot();

        assert_eq!(snapshot.phase, Phase::OneOpen);
        assert_eq!(snapshot.deck.len(), 12);
        assert_eq!(snapshot.moves, 0);
        assert!(!snapshot.locked);
        assert_eq!(snapshot.elapsed_ms, None);

        // Snapshot is detached from later changes
        engine.flip(1, Millis::ZERO);
        assert!(!snapshot.deck.get(1).unwrap().face_up);
    }

    #[test]
    fn test_restart_deals_next_deck_in_sequence() {
        let mut a = MatchEngine::new(PairCount::DEFAULT, 42);
        let mut b = MatchEngine::new(PairCount::DEFAULT, 42);
        let first = a.deck().clone();

        a.restart();
        b.restart();
        assert_eq!(a.deck(), b.deck());
        assert_ne!(a.deck(), &first);
    }
}
