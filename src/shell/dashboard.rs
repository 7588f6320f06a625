//! The dashboard driver: intents in, frames out.

use tracing::{debug, trace};

use super::frame::{BoardView, Frame, Panel, GAME_TILES, ZIP_PLACEHOLDER};
use crate::config::{AddressBar, ConfigStore, DashConfig, PairCount, View};
use crate::core::Millis;
use crate::engine::{FlipOutcome, MatchEngine, Resolution, TimerQueue};

/// A user or browser event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Click on the card at this board position.
    Flip(usize),
    /// Deal a new deck at the current size.
    Restart,
    /// Pick a pair count.
    SetPairs(PairCount),
    /// Navigate to a view from in-app controls.
    SetView(View),
    /// The address changed underneath us (back/forward, typed address).
    AddressChanged,
}

/// Wires the configuration store, the match engine and the timer queue.
///
/// The memory board is mounted while its view is active: entering the view
/// deals a fresh deck, and leaving it cancels pending timers and discards
/// the game, so the engine is never left locked with nothing to unlock it.
/// A pair-count change always discards the current game.
///
/// ```
/// use pairs_dash::config::MemoryAddressBar;
/// use pairs_dash::core::Millis;
/// use pairs_dash::shell::{Dashboard, Intent, Panel};
///
/// let mut dash = Dashboard::new(MemoryAddressBar::new("?pairs=10&view=memory"), 7);
/// let Panel::Memory(board) = dash.frame().panel else { unreachable!() };
/// assert_eq!(board.cards.len(), 20);
///
/// dash.handle(Intent::Flip(0), Millis::new(0));
/// assert_eq!(dash.next_deadline(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Dashboard<A: AddressBar> {
    store: ConfigStore<A>,
    engine: MatchEngine,
    timers: TimerQueue,
}

impl<A: AddressBar> Dashboard<A> {
    /// Load configuration from `address` and deal the first deck.
    pub fn new(address: A, seed: u64) -> Self {
        let store = ConfigStore::load(address);
        let engine = MatchEngine::new(store.pairs(), seed);
        Self {
            store,
            engine,
            timers: TimerQueue::new(),
        }
    }

    /// Apply one intent.
    pub fn handle(&mut self, intent: Intent, now: Millis) {
        trace!(?intent, %now, "intent");
        match intent {
            Intent::Flip(index) => self.flip(index, now),
            Intent::Restart => self.redeal(),
            Intent::SetPairs(pairs) => {
                let previous = self.store.config();
                self.store.set_pairs(pairs);
                self.reconcile(previous);
            }
            Intent::SetView(view) => {
                let previous = self.store.config();
                self.store.set_view(view);
                self.reconcile(previous);
            }
            Intent::AddressChanged => {
                let previous = self.store.config();
                if !self.store.sync_from_address().is_empty() {
                    self.reconcile(previous);
                }
            }
        }
    }

    /// Fire every resolution due at `now`. Returns how many were applied.
    pub fn tick(&mut self, now: Millis) -> usize {
        let mut applied = 0;
        for ticket in self.timers.take_due(now) {
            if let Resolution::Applied(_) = self.engine.resolve(&ticket, now) {
                applied += 1;
            }
        }
        applied
    }

    /// When the host should call `tick` next.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }

    /// Everything needed to paint the current state.
    #[must_use]
    pub fn frame(&self) -> Frame {
        let config = self.store.config();
        let panel = match config.view {
            View::Dashboard => Panel::Dashboard {
                tiles: GAME_TILES.to_vec(),
            },
            View::Memory => Panel::Memory(BoardView::from(&self.engine.snapshot())),
            View::Zip => Panel::Zip(ZIP_PLACEHOLDER),
        };
        Frame {
            view: config.view,
            pairs: config.pairs,
            pair_options: PairCount::ALL,
            nav: View::ALL,
            panel,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> DashConfig {
        self.store.config()
    }

    /// The match engine.
    #[must_use]
    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// The backing address.
    #[must_use]
    pub fn address(&self) -> &A {
        self.store.address()
    }

    /// Mutable access to the backing address. Follow external changes
    /// with `Intent::AddressChanged`.
    pub fn address_mut(&mut self) -> &mut A {
        self.store.address_mut()
    }

    fn flip(&mut self, index: usize, now: Millis) {
        if self.store.view() != View::Memory {
            trace!(index, view = %self.store.view(), "flip outside the board");
            return;
        }
        if let FlipOutcome::Pending(ticket) = self.engine.flip(index, now) {
            self.timers.schedule(ticket);
        }
    }

    fn reconcile(&mut self, previous: DashConfig) {
        let current = self.store.config();
        let mounted = current.view == View::Memory && previous.view != View::Memory;
        let unmounted = previous.view == View::Memory && current.view != View::Memory;

        if unmounted {
            debug!(pending = self.timers.len(), "board unmounted");
        }
        if mounted || unmounted || current.pairs != previous.pairs {
            self.redeal();
        }
    }

    fn redeal(&mut self) {
        let dropped = self.timers.cancel_all();
        if dropped > 0 {
            debug!(dropped, "cancelled pending resolutions");
        }
        self.engine.reset(self.store.pairs());
    }
}
