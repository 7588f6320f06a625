//! The fixed token palette.
//!
//! A deck of `p` pairs uses the first `p` entries. The palette size is the
//! hard upper bound on pairs per deck.

/// Glyphs for each token, indexed by `Token::index()`.
pub const PALETTE: [&str; 16] = [
    "🍎", "🍌", "🍇", "🍉", "🍓", "🍒", "🍍", "🥝",
    "🥥", "🍑", "🍋", "🍐", "🥕", "🌽", "🍄", "🥑",
];

/// Number of distinct tokens available.
pub const PALETTE_SIZE: usize = PALETTE.len();
