//! Browser bindings.
//!
//! Exposes the dashboard to JavaScript. The page owns timers and the DOM;
//! this side owns every state transition.
//!
//! # Quick Start
//!
//! ```javascript
//! import init, { WasmDashboard } from "./pkg/pairs_dash.js";
//!
//! await init();
//! const dash = new WasmDashboard(Math.random() * 2 ** 32);
//!
//! function paint() {
//!   render(JSON.parse(dash.frame_json()));
//!   const due = dash.next_deadline();
//!   if (due !== undefined) {
//!     setTimeout(() => { dash.tick(performance.now()); paint(); }, due - performance.now());
//!   }
//! }
//!
//! board.onclick = (e) => { dash.flip(e.target.dataset.index, performance.now()); paint(); };
//! window.onpopstate = () => { dash.address_changed(performance.now()); paint(); };
//! ```

use wasm_bindgen::prelude::*;

mod address;

pub use address::BrowserAddressBar;

use crate::config::{PairCount, View};
use crate::core::Millis;
use crate::error::ConfigError;
use crate::shell::{Dashboard, Intent};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// JavaScript handle to a `Dashboard` bound to the page address.
#[wasm_bindgen]
pub struct WasmDashboard {
    inner: Dashboard<BrowserAddressBar>,
}

#[wasm_bindgen]
impl WasmDashboard {
    /// Load configuration from the address and deal the first deck.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: f64) -> Result<WasmDashboard, JsValue> {
        let address = BrowserAddressBar::new()?;
        Ok(Self {
            inner: Dashboard::new(address, seed.max(0.0) as u64),
        })
    }

    /// Click on a card.
    pub fn flip(&mut self, index: usize, now: f64) {
        self.inner.handle(Intent::Flip(index), millis(now));
    }

    /// Deal a new deck at the current size.
    pub fn restart(&mut self, now: f64) {
        self.inner.handle(Intent::Restart, millis(now));
    }

    /// Pick a pair count. Rejects counts outside the supported set.
    pub fn set_pairs(&mut self, pairs: u32, now: f64) -> Result<(), JsError> {
        let pairs = PairCount::new(pairs).map_err(|err| JsError::new(&err.to_string()))?;
        self.inner.handle(Intent::SetPairs(pairs), millis(now));
        Ok(())
    }

    /// Navigate to `dashboard`, `memory` or `zip`.
    pub fn set_view(&mut self, view: &str, now: f64) -> Result<(), JsError> {
        let view: View = view.parse().map_err(|err: ConfigError| JsError::new(&err.to_string()))?;
        self.inner.handle(Intent::SetView(view), millis(now));
        Ok(())
    }

    /// Call from `popstate` and after any external address change.
    pub fn address_changed(&mut self, now: f64) {
        self.inner.handle(Intent::AddressChanged, millis(now));
    }

    /// Fire due resolutions. Returns how many were applied.
    pub fn tick(&mut self, now: f64) -> usize {
        self.inner.tick(millis(now))
    }

    /// When to call `tick` next, on the `performance.now()` timeline.
    pub fn next_deadline(&self) -> Option<f64> {
        self.inner.next_deadline().map(|t| t.as_u64() as f64)
    }

    /// The current `Frame` as JSON.
    pub fn frame_json(&self) -> Result<String, JsError> {
        serde_json::to_string(&self.inner.frame()).map_err(|err| JsError::new(&err.to_string()))
    }
}

fn millis(now: f64) -> Millis {
    Millis::new(now.max(0.0) as u64)
}
