//! `AddressBar` over the browser's `location` and `history`.

use tracing::warn;
use wasm_bindgen::JsValue;

use crate::config::AddressBar;

/// The real page address.
///
/// Writes go through `history.replaceState`, so they neither reload the
/// page nor add back-button entries.
#[derive(Clone, Debug)]
pub struct BrowserAddressBar {
    window: web_sys::Window,
}

impl BrowserAddressBar {
    /// Bind to the current window.
    pub fn new() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        Ok(Self { window })
    }
}

impl AddressBar for BrowserAddressBar {
    fn search(&self) -> String {
        self.window.location().search().unwrap_or_default()
    }

    fn replace_search(&mut self, search: &str) {
        let location = self.window.location();
        let path = location.pathname().unwrap_or_default();
        let hash = location.hash().unwrap_or_default();
        let url = format!("{path}{search}{hash}");

        let replaced = self
            .window
            .history()
            .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
        if let Err(err) = replaced {
            warn!(?err, %url, "history.replaceState failed");
        }
    }
}
