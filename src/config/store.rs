//! Bidirectional sync between in-memory configuration and the address.

use serde::Serialize;
use tracing::debug;

use super::address::AddressBar;
use super::query;
use super::settings::{DashConfig, PairCount, View};

/// What changed after re-reading the address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ConfigChange {
    /// New pair count, if it differs from before.
    pub pairs: Option<PairCount>,
    /// New view, if it differs from before.
    pub view: Option<View>,
}

impl ConfigChange {
    /// Nothing changed?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_none() && self.view.is_none()
    }
}

/// Owns the current configuration and its address serialization.
///
/// The address is the source of truth on (re)load: `load` and
/// `sync_from_address` derive the in-memory values from it. Setters write
/// back in place through `AddressBar::replace_search`, never pushing
/// history.
///
/// ```
/// use pairs_dash::config::{AddressBar, ConfigStore, MemoryAddressBar, PairCount, View};
///
/// let mut store = ConfigStore::load(MemoryAddressBar::new("?pairs=10"));
/// assert_eq!(store.pairs().get(), 10);
///
/// store.set_view(View::Memory);
/// assert_eq!(store.address().search(), "?pairs=10&view=memory");
///
/// store.set_pairs(PairCount::DEFAULT);
/// assert_eq!(store.address().search(), "?view=memory");
/// ```
#[derive(Clone, Debug)]
pub struct ConfigStore<A: AddressBar> {
    address: A,
    config: DashConfig,
}

impl<A: AddressBar> ConfigStore<A> {
    /// Read the initial configuration from the address.
    pub fn load(address: A) -> Self {
        let config = query::parse(&address.search());
        debug!(pairs = %config.pairs, view = %config.view, "loaded configuration");
        Self { address, config }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> DashConfig {
        self.config
    }

    /// Current pair count.
    #[must_use]
    pub fn pairs(&self) -> PairCount {
        self.config.pairs
    }

    /// Current view.
    #[must_use]
    pub fn view(&self) -> View {
        self.config.view
    }

    /// Set the pair count. Returns whether it changed.
    ///
    /// The address is rewritten either way, so it ends up minimal even if
    /// it held a non-canonical spelling of the same value.
    pub fn set_pairs(&mut self, pairs: PairCount) -> bool {
        let changed = self.config.pairs != pairs;
        self.config.pairs = pairs;
        let search = query::with_pairs(&self.address.search(), pairs);
        self.address.replace_search(&search);
        if changed {
            debug!(%pairs, %search, "pair count set");
        }
        changed
    }

    /// Set the view. Returns whether it changed.
    pub fn set_view(&mut self, view: View) -> bool {
        let changed = self.config.view != view;
        self.config.view = view;
        let search = query::with_view(&self.address.search(), view);
        self.address.replace_search(&search);
        if changed {
            debug!(%view, %search, "view set");
        }
        changed
    }

    /// Re-read the address after external navigation (back/forward, a
    /// typed address) and reconcile.
    ///
    /// Invalid values become defaults in memory; the address is left as is.
    pub fn sync_from_address(&mut self) -> ConfigChange {
        let next = query::parse(&self.address.search());
        let change = ConfigChange {
            pairs: (next.pairs != self.config.pairs).then_some(next.pairs),
            view: (next.view != self.config.view).then_some(next.view),
        };
        self.config = next;
        if !change.is_empty() {
            debug!(?change, "configuration changed by navigation");
        }
        change
    }

    /// The backing address.
    #[must_use]
    pub fn address(&self) -> &A {
        &self.address
    }

    /// Mutable access to the backing address, for hosts that navigate.
    pub fn address_mut(&mut self) -> &mut A {
        &mut self.address
    }
}
