//! The page address as a configuration backing store.
//!
//! `AddressBar` is the seam between the store and whatever owns the real
//! address. The browser implementation lives behind the `wasm` feature;
//! `MemoryAddressBar` models a tab's history for tests and non-browser hosts.

/// Read and rewrite the query part of the page address.
pub trait AddressBar {
    /// Current query string, e.g. `"?pairs=10"` or `""`.
    fn search(&self) -> String;

    /// Replace the current history entry's query without reloading.
    fn replace_search(&mut self, search: &str);
}

/// In-memory address with a back/forward history.
///
/// `navigate` pushes a new entry (typing an address, following a link);
/// `replace_search` rewrites the current entry in place, the way the
/// store's own writes do.
///
/// ```
/// use pairs_dash::config::{AddressBar, MemoryAddressBar};
///
/// let mut bar = MemoryAddressBar::new("");
/// bar.navigate("?view=memory");
/// bar.replace_search("?view=memory&pairs=6");
/// assert_eq!(bar.history_len(), 2);
///
/// assert!(bar.back());
/// assert_eq!(bar.search(), "");
/// assert!(bar.forward());
/// assert_eq!(bar.search(), "?view=memory&pairs=6");
/// ```
#[derive(Clone, Debug)]
pub struct MemoryAddressBar {
    entries: Vec<String>,
    cursor: usize,
}

impl MemoryAddressBar {
    /// Start a history with a single entry.
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            entries: vec![search.into()],
            cursor: 0,
        }
    }

    /// Push a new entry, discarding any forward history.
    pub fn navigate(&mut self, search: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(search.into());
        self.cursor += 1;
    }

    /// Step back one entry. Returns `false` at the start of history.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward one entry. Returns `false` at the end of history.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Number of history entries.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for MemoryAddressBar {
    fn default() -> Self {
        Self::new("")
    }
}

impl AddressBar for MemoryAddressBar {
    fn search(&self) -> String {
        self.entries[self.cursor].clone()
    }

    fn replace_search(&mut self, search: &str) {
        self.entries[self.cursor] = search.to_string();
    }
}
