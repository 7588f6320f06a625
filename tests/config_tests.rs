//! Configuration store tests.
//!
//! These exercise the address contract end to end: loading, in-app writes,
//! and reconciliation after back/forward navigation.

use pairs_dash::config::{
    query, AddressBar, ConfigStore, DashConfig, MemoryAddressBar, PairCount, View,
};
use proptest::prelude::*;

/// Valid addresses load as written.
#[test]
fn test_load_from_address() {
    let store = ConfigStore::load(MemoryAddressBar::new("?pairs=10&view=memory"));
    assert_eq!(store.config(), DashConfig::new(PairCount::new(10).unwrap(), View::Memory));
}

/// Out-of-set and garbage values fall back to defaults.
#[test]
fn test_load_falls_back() {
    for search in ["?pairs=99", "?pairs=eight", "?view=ZIP", "?view=", "?pairs=6.0&view=chess"] {
        let store = ConfigStore::load(MemoryAddressBar::new(search));
        let config = store.config();
        assert!(config.view == View::Dashboard, "{search}");
        assert!(
            config.pairs == PairCount::DEFAULT,
            "{search}: got {}",
            config.pairs
        );
    }
}

/// In-app writes keep the address minimal and never add history entries.
#[test]
fn test_round_trip_through_settings() {
    let mut store = ConfigStore::load(MemoryAddressBar::new("?ref=home"));

    store.set_view(View::Memory);
    store.set_pairs(PairCount::new(6).unwrap());
    assert_eq!(store.address().search(), "?ref=home&view=memory&pairs=6");

    store.set_view(View::Dashboard);
    store.set_pairs(PairCount::DEFAULT);
    assert_eq!(store.address().search(), "?ref=home");
    assert_eq!(store.address().history_len(), 1);

    // A reload reads back the same configuration
    let reloaded = ConfigStore::load(store.address().clone());
    assert_eq!(reloaded.config(), store.config());
}

/// Back and forward walk the configuration through history.
#[test]
fn test_history_navigation() {
    let mut store = ConfigStore::load(MemoryAddressBar::new(""));
    store.address_mut().navigate("?view=memory");
    store.sync_from_address();
    store.address_mut().navigate("?view=memory&pairs=12");
    store.sync_from_address();

    assert!(store.address_mut().back());
    let change = store.sync_from_address();
    assert_eq!(change.pairs, Some(PairCount::DEFAULT));
    assert_eq!(change.view, None);

    assert!(store.address_mut().back());
    let change = store.sync_from_address();
    assert_eq!(change.view, Some(View::Dashboard));
    assert_eq!(store.config(), DashConfig::default());

    assert!(store.address_mut().forward());
    assert!(store.address_mut().forward());
    store.sync_from_address();
    assert_eq!(store.pairs().get(), 12);
    assert_eq!(store.view(), View::Memory);
}

/// A typed address with a bad value normalizes without error.
#[test]
fn test_navigation_to_invalid_value() {
    let mut store = ConfigStore::load(MemoryAddressBar::new("?pairs=12"));
    store.address_mut().navigate("?pairs=13");
    let change = store.sync_from_address();
    assert_eq!(change.pairs, Some(PairCount::DEFAULT));
    assert_eq!(store.address().search(), "?pairs=13");
}

fn config() -> impl Strategy<Value = DashConfig> {
    (prop::sample::select(PairCount::ALL.to_vec()), prop::sample::select(View::ALL.to_vec()))
        .prop_map(|(pairs, view)| DashConfig::new(pairs, view))
}

proptest! {
    /// Whatever the store writes, a fresh load reads back.
    #[test]
    fn prop_writes_reload(configs in prop::collection::vec(config(), 1..20)) {
        let mut store = ConfigStore::load(MemoryAddressBar::default());
        for config in configs {
            store.set_pairs(config.pairs);
            store.set_view(config.view);
            prop_assert_eq!(query::parse(&store.address().search()), config);
        }
    }

    /// Parsing arbitrary text never panics and always yields a valid config.
    #[test]
    fn prop_parse_total(search in ".*") {
        let config = query::parse(&search);
        prop_assert!(PairCount::ALL.contains(&config.pairs));
        prop_assert!(View::ALL.contains(&config.view));
    }
}
