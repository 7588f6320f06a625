//! Host-supplied timestamps.
//!
//! The engine never reads a clock. Every event carries the instant it
//! happened, as milliseconds on whatever monotonic timeline the host uses
//! (`performance.now()` in a browser, a counter in tests).

use serde::{Deserialize, Serialize};

/// A point on the host's millisecond timeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Millis(pub u64);

impl Millis {
    /// The start of the timeline.
    pub const ZERO: Self = Self(0);

    /// Create a timestamp.
    #[must_use]
    pub const fn new(ms: u64) -> Self {
        Self(ms)
    }

    /// Raw milliseconds.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// This instant shifted forward by `delay`.
    #[must_use]
    pub const fn after(self, delay: std::time::Duration) -> Self {
        Self(self.0.saturating_add(delay.as_millis() as u64))
    }

    /// Milliseconds from `earlier` to `self`, zero if `earlier` is later.
    #[must_use]
    pub const fn since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::fmt::Display for Millis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
