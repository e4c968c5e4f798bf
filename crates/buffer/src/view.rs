//! Caret geometry: translating the cursor into pixel space.
//!
//! The rendering system is an external collaborator; it supplies glyph
//! advance widths and the line height through [`GlyphMetrics`] and the
//! scroll state through [`Viewport`]. The queries here combine those with
//! the store's cursor fields to produce an on-screen caret rectangle.

use crate::text_store::TextStore;
use crate::types::Vec2;

/// Glyph measurements supplied by the rendering collaborator.
pub trait GlyphMetrics {
    /// Horizontal advance of `ch` in pixels.
    fn advance(&self, ch: char) -> f32;

    /// Height of one rendered line in pixels.
    fn line_height(&self) -> f32;
}

/// The visible window onto a document: a screen origin and the index of
/// the first line currently scrolled into view.
#[derive(Debug, Clone, Copy, Default)]
pub struct Viewport {
    pub origin: Vec2,
    pub first_line: usize,
}

/// Pixel position of the caret: the viewport origin offset by the summed
/// advances of every character between the line start and the insertion
/// point, and by the cursor's line distance from the first visible line.
///
/// The vertical offset is signed; a cursor scrolled above the viewport
/// yields a position above the origin.
pub fn caret_position<M: GlyphMetrics>(store: &TextStore, metrics: &M, view: &Viewport) -> Vec2 {
    let mut x = view.origin.x;
    // Summing advances is order-independent, so the reversed string is
    // used as-is.
    for ch in store.string_before_cursor().chars() {
        x += metrics.advance(ch);
    }

    let rows = store.line() as f32 - view.first_line as f32;
    let y = view.origin.y + metrics.line_height() * rows;

    Vec2::new(x, y)
}

/// Pixel extent of the caret: the advance of the character under the
/// cursor (a space at document end, so the caret never collapses) by the
/// line height.
pub fn caret_size<M: GlyphMetrics>(store: &TextStore, metrics: &M) -> Vec2 {
    let ch = store.char_under_cursor().unwrap_or(' ');
    Vec2::new(metrics.advance(ch), metrics.line_height())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-width metrics with a double-width tab, enough to make the
    /// advance sums observable.
    struct TestMetrics;

    impl GlyphMetrics for TestMetrics {
        fn advance(&self, ch: char) -> f32 {
            if ch == '\t' {
                20.0
            } else {
                10.0
            }
        }

        fn line_height(&self) -> f32 {
            16.0
        }
    }

    #[test]
    fn test_caret_at_origin() {
        let store = TextStore::from_str("abc");
        let view = Viewport::default();
        let pos = caret_position(&store, &TestMetrics, &view);
        assert_eq!(pos, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_caret_sums_advances_on_current_line() {
        let mut store = TextStore::from_str("a\tb");
        store.move_right();
        store.move_right();
        let view = Viewport::default();
        let pos = caret_position(&store, &TestMetrics, &view);
        assert_eq!(pos, Vec2::new(30.0, 0.0));
    }

    #[test]
    fn test_caret_offsets_by_viewport() {
        let mut store = TextStore::new();
        for ch in "ab\ncd".chars() {
            store.insert_char(ch);
        }
        let view = Viewport {
            origin: Vec2::new(5.0, 7.0),
            first_line: 0,
        };
        let pos = caret_position(&store, &TestMetrics, &view);
        assert_eq!(pos, Vec2::new(5.0 + 20.0, 7.0 + 16.0));
    }

    #[test]
    fn test_caret_above_scrolled_viewport_is_negative() {
        let store = TextStore::from_str("ab\ncd\nef");
        let view = Viewport {
            origin: Vec2::new(0.0, 0.0),
            first_line: 2,
        };
        let pos = caret_position(&store, &TestMetrics, &view);
        assert_eq!(pos.y, -32.0);
    }

    #[test]
    fn test_caret_size_under_cursor() {
        let store = TextStore::from_str("\ta");
        let size = caret_size(&store, &TestMetrics);
        assert_eq!(size, Vec2::new(20.0, 16.0));
    }

    #[test]
    fn test_caret_size_at_document_end_falls_back_to_space() {
        let mut store = TextStore::new();
        store.insert_char('a');
        let size = caret_size(&store, &TestMetrics);
        assert_eq!(size, Vec2::new(10.0, 16.0));
    }
}
