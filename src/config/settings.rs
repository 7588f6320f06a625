//! Configuration values: pair count and active view.
//!
//! Both are closed sets with a default. Validation is explicit
//! (`PairCount::new`, `View::from_str`); address parsing falls back to the
//! defaults instead.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::deck::PALETTE_SIZE;
use crate::error::ConfigError;

/// Pair counts the dashboard offers.
pub const SUPPORTED_PAIR_COUNTS: [u8; 4] = [6, 8, 10, 12];

const _: () = {
    let mut i = 0;
    while i < SUPPORTED_PAIR_COUNTS.len() {
        assert!(SUPPORTED_PAIR_COUNTS[i] as usize <= PALETTE_SIZE);
        assert!(SUPPORTED_PAIR_COUNTS[i] > 0);
        i += 1;
    }
};

/// Number of pairs in a deck, restricted to the supported set.
///
/// ```
/// use pairs_dash::config::PairCount;
///
/// assert_eq!(PairCount::default().get(), 8);
/// assert_eq!(PairCount::new(10).unwrap().get(), 10);
/// assert!(PairCount::new(7).is_err());
/// assert!("12".parse::<PairCount>().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PairCount(u8);

impl PairCount {
    /// Every supported count, ascending.
    pub const ALL: [PairCount; 4] = [PairCount(6), PairCount(8), PairCount(10), PairCount(12)];

    /// The default when nothing (or garbage) is configured.
    pub const DEFAULT: PairCount = PairCount(8);

    /// Validate a pair count.
    pub fn new(pairs: u32) -> Result<Self, ConfigError> {
        Self::ALL
            .into_iter()
            .find(|p| u32::from(p.0) == pairs)
            .ok_or(ConfigError::UnsupportedPairCount(pairs))
    }

    /// Number of pairs.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// Number of cards in a deck of this size.
    #[must_use]
    pub const fn cards(self) -> usize {
        self.get() * 2
    }

    /// Is this the default count?
    #[must_use]
    pub fn is_default(self) -> bool {
        self == Self::DEFAULT
    }
}

impl Default for PairCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for PairCount {
    type Error = ConfigError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PairCount> for u32 {
    fn from(pairs: PairCount) -> Self {
        u32::from(pairs.0)
    }
}

impl FromStr for PairCount {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u32 = s
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber(s.to_string()))?;
        Self::new(n)
    }
}

impl std::fmt::Display for PairCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which panel the dashboard shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Navigation shell listing the games.
    #[default]
    Dashboard,
    /// The matching-pairs game.
    Memory,
    /// Placeholder slot; not implemented.
    Zip,
}

impl View {
    /// Every view, in navigation order.
    pub const ALL: [View; 3] = [View::Dashboard, View::Memory, View::Zip];

    /// Name used in the address.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Memory => "memory",
            View::Zip => "zip",
        }
    }

    /// Does this view host a playable game?
    #[must_use]
    pub const fn is_playable(self) -> bool {
        matches!(self, View::Memory)
    }

    /// Is this the default view?
    #[must_use]
    pub fn is_default(self) -> bool {
        self == View::default()
    }
}

impl FromStr for View {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownView(s.to_string()))
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The complete addressable configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashConfig {
    /// Pairs per deck.
    pub pairs: PairCount,
    /// Active view.
    pub view: View,
}

impl DashConfig {
    /// Create a configuration.
    #[must_use]
    pub const fn new(pairs: PairCount, view: View) -> Self {
        Self { pairs, view }
    }
}
