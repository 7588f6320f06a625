//! Presentation shell contract.
//!
//! The shell is a thin layer: it turns user and browser events into
//! `Intent`s, feeds them to a `Dashboard`, and paints the `Frame` it gets
//! back. It never mutates game or configuration state directly.
//!
//! ## Host loop
//!
//! 1. On every event, call `handle(intent, now)`.
//! 2. If `next_deadline()` is `Some(t)`, arm a timer for `t` and call
//!    `tick(now)` when it fires.
//! 3. Repaint from `frame()`.

mod dashboard;
mod frame;

pub use dashboard::{Dashboard, Intent};
pub use frame::{
    BoardView, CardView, Frame, GameTile, Panel, Placeholder, GAME_TILES, ZIP_PLACEHOLDER,
};
