//! Render-ready view models.
//!
//! A `Frame` is everything a renderer needs for one paint. It is plain
//! data, serializable, and owned: presentation settings travel inside it
//! rather than living in global state.

use serde::Serialize;

use crate::config::{PairCount, View};
use crate::core::Card;
use crate::engine::{EngineSnapshot, Generation, Phase};

/// One paint of the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Frame {
    /// Active view.
    pub view: View,
    /// Configured pairs.
    pub pairs: PairCount,
    /// Choices for the pair-count selector.
    pub pair_options: [PairCount; 4],
    /// Navigation entries.
    pub nav: [View; 3],
    /// Body of the active view.
    pub panel: Panel,
}

/// Body of the active view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Panel {
    /// Game launcher.
    Dashboard {
        /// One tile per game.
        tiles: Vec<GameTile>,
    },
    /// The matching-pairs board.
    Memory(BoardView),
    /// Unimplemented game slot.
    Zip(Placeholder),
}

/// A launcher tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GameTile {
    /// View the tile opens.
    pub view: View,
    /// Display name.
    pub title: &'static str,
    /// One-line description.
    pub blurb: &'static str,
    /// Can it be played yet?
    pub playable: bool,
}

/// Launcher tiles, in display order.
pub const GAME_TILES: [GameTile; 2] = [
    GameTile {
        view: View::Memory,
        title: "Memory",
        blurb: "Flip cards two at a time and find every pair.",
        playable: true,
    },
    GameTile {
        view: View::Zip,
        title: "Zip",
        blurb: "Coming soon.",
        playable: false,
    },
];

/// Static content for a game that does not exist yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    /// Display name.
    pub title: &'static str,
    /// Body text.
    pub message: &'static str,
}

/// The Zip slot.
pub const ZIP_PLACEHOLDER: Placeholder = Placeholder {
    title: "Zip",
    message: "This game is not available yet.",
};

/// The matching-pairs board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoardView {
    /// Deck instance; renderers can key animations on it.
    pub generation: Generation,
    /// Configured pairs.
    pub pairs: PairCount,
    /// Cards in display order.
    pub cards: Vec<CardView>,
    /// Completed two-card reveals.
    pub moves: u32,
    /// Pairs found so far.
    pub matched_pairs: usize,
    /// Time from first flip to completion; absent until complete.
    pub elapsed_ms: Option<u64>,
    /// Flips are rejected; disable the board.
    pub locked: bool,
    /// Every pair found.
    pub complete: bool,
}

impl From<&EngineSnapshot> for BoardView {
    fn from(snapshot: &EngineSnapshot) -> Self {
        Self {
            generation: snapshot.generation,
            pairs: snapshot.pairs,
            cards: snapshot
                .deck
                .iter()
                .enumerate()
                .map(|(index, card)| CardView::new(index, card, snapshot.locked))
                .collect(),
            moves: snapshot.moves,
            matched_pairs: snapshot.deck.matched_pairs(),
            elapsed_ms: snapshot.elapsed_ms,
            locked: snapshot.locked,
            complete: snapshot.phase == Phase::Complete,
        }
    }
}

/// One card as rendered.
///
/// `symbol` is only present while the card is face-up, so a renderer never
/// holds a hidden card's token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CardView {
    /// Position to pass back in `Intent::Flip`.
    pub index: usize,
    /// Stable card id.
    pub id: u32,
    /// Face glyph, when visible.
    pub symbol: Option<&'static str>,
    /// Revealed?
    pub face_up: bool,
    /// Part of a found pair?
    pub matched: bool,
    /// Would a click be ignored?
    pub disabled: bool,
}

impl CardView {
    fn new(index: usize, card: &Card, locked: bool) -> Self {
        Self {
            index,
            id: card.id.raw(),
            symbol: card.face_up.then(|| card.token.symbol()),
            face_up: card.face_up,
            matched: card.matched,
            disabled: locked || !card.is_hidden(),
        }
    }
}
