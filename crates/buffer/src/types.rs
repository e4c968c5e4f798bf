//! Shared constants and small value types.

/// Number of display columns a tab character occupies.
///
/// Fixed globally rather than per-document: the line table records
/// tab-expanded widths at edit time, so changing the stride would
/// invalidate every stored width.
pub const TAB_STRIDE: usize = 4;

/// Seed capacity for an empty document, so the first few insertions
/// need no growth.
pub const EMPTY_CAPACITY: usize = 20;

/// A pixel-space point or extent, used by the caret geometry queries.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Display-column contribution of a single character.
///
/// Every character is one column wide except a tab, which occupies
/// [`TAB_STRIDE`] columns. The newline still counts as 1 here; the line
/// table records it as a unit of width even though it renders as nothing.
pub fn char_width(ch: char) -> usize {
    if ch == '\t' {
        TAB_STRIDE
    } else {
        1
    }
}
