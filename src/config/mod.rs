//! Addressable configuration: pair count and active view.
//!
//! The page address is the source of truth on reload. `ConfigStore` owns
//! both the in-memory values and their serialization, so parsing lives in
//! exactly one place (`query`).

mod address;
pub mod query;
mod settings;
mod store;

pub use address::{AddressBar, MemoryAddressBar};
pub use settings::{DashConfig, PairCount, View, SUPPORTED_PAIR_COUNTS};
pub use store::{ConfigChange, ConfigStore};
