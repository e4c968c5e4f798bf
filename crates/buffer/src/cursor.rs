//! Cursor motion over a [`TextStore`].
//!
//! These algorithms hold no state of their own: they read and mutate the
//! store's gap position and the three cursor fields. Horizontal motion is
//! confined to the current line; vertical motion crosses lines and tries to
//! preserve the *display* column, so the cursor does not drift sideways
//! when moving through lines whose tab placement differs.
//!
//! All out-of-range requests (left at document start, up on the first line,
//! right at line end, down on the last line) are defined no-ops.

use crate::text_store::TextStore;
use crate::types::char_width;

impl TextStore {
    /// Moves the cursor one character right within the current line.
    ///
    /// No-op at the end of the line or of the document; right motion does
    /// not cross the newline.
    pub fn move_right(&mut self) {
        match self.gap.char_under() {
            None | Some('\n') => return,
            Some(ch) => {
                self.display_col += char_width(ch);
                self.col += 1;
                self.gap.forward();
            }
        }
        self.debug_check();
    }

    /// Moves the cursor one character left within the current line.
    ///
    /// No-op at the start of the document. Also a no-op at the start of a
    /// line: left motion does not cross the line boundary (vertical motion
    /// does; the key-binding layer relies on this asymmetry).
    pub fn move_left(&mut self) {
        match self.gap.char_before() {
            None | Some('\n') => return,
            Some(ch) => {
                self.display_col -= char_width(ch);
                self.col -= 1;
                self.gap.backward();
            }
        }
        self.debug_check();
    }

    /// Moves the cursor to the next line, preserving the display column
    /// where the target line is wide enough and snapping to its end where
    /// it is not. No-op on the last line.
    ///
    /// When the saved column falls strictly inside a tab's span on the
    /// target line, the cursor lands on the character boundary just past
    /// the tab; both columns always reflect the actual landing position.
    pub fn move_down(&mut self) {
        if self.line + 1 == self.line_count() {
            return;
        }

        // Advance the gap one past the next newline. A non-last line is
        // always terminated, so the walk cannot run off the document.
        while self.gap.char_under() != Some('\n') {
            self.gap.forward();
        }
        self.gap.forward();
        self.line += 1;

        let target = self.display_col;
        let terminated = self.line_terminated(self.line);
        let line_width = self.lines.content_width(self.line, terminated);

        if line_width >= target {
            // Re-walk forward to the saved display column.
            let mut display_col = 0;
            let mut col = 0;
            while display_col < target {
                let Some(ch) = self.gap.char_under() else { break };
                display_col += char_width(ch);
                col += 1;
                self.gap.forward();
            }
            self.col = col;
            self.display_col = display_col;
        } else {
            // Target line is narrower: snap to its end, recomputing both
            // columns by scanning the whole line.
            self.col = 0;
            self.display_col = 0;
            while let Some(ch) = self.gap.char_under() {
                if ch == '\n' {
                    break;
                }
                self.display_col += char_width(ch);
                self.col += 1;
                self.gap.forward();
            }
        }
        self.debug_check();
    }

    /// Moves the cursor to the previous line, preserving the display
    /// column where the target line is wide enough and snapping to its end
    /// where it is not. No-op on the first line.
    ///
    /// When the saved column falls strictly inside a tab's span on the
    /// target line, the cursor lands on the character boundary at the
    /// tab's start; both columns always reflect the actual landing
    /// position.
    pub fn move_up(&mut self) {
        if self.line == 0 {
            return;
        }

        // Retreat the gap past the current line's start and the preceding
        // newline; the insertion point lands at the previous line's
        // content end, just before its newline.
        while self.gap.char_before() != Some('\n') {
            self.gap.backward();
        }
        self.gap.backward();
        self.line -= 1;

        let target = self.display_col;
        // The previous line is terminated by the newline just crossed.
        let line_width = self.lines.content_width(self.line, true);

        if line_width > target {
            // Retreat to the saved display column. After each backward
            // shift the character just crossed sits under the cursor.
            let mut display_col = line_width;
            let mut col = self.lines.content_chars(self.line, true);
            while display_col > target {
                self.gap.backward();
                let Some(ch) = self.gap.char_under() else { break };
                display_col -= char_width(ch);
                col -= 1;
            }
            self.col = col;
            self.display_col = display_col;
        } else {
            // Previous line is no wider than the target: end-of-line is
            // the match (exact when the widths are equal).
            self.col = self.lines.content_chars(self.line, true);
            self.display_col = line_width;
        }
        self.debug_check();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TAB_STRIDE;

    fn store_with_cursor_at_end(text: &str) -> TextStore {
        let mut store = TextStore::new();
        for ch in text.chars() {
            store.insert_char(ch);
        }
        store
    }

    fn cursor(store: &TextStore) -> (usize, usize, usize) {
        (store.line(), store.col(), store.display_col())
    }

    // ==================== Boundary no-ops ====================

    #[test]
    fn test_left_at_document_start_is_noop() {
        let mut store = TextStore::from_str("abc");
        store.move_left();
        assert_eq!(cursor(&store), (0, 0, 0));
    }

    #[test]
    fn test_left_at_line_start_does_not_cross() {
        let mut store = store_with_cursor_at_end("ab\n");
        store.move_left();
        assert_eq!(cursor(&store), (1, 0, 0));
    }

    #[test]
    fn test_right_at_document_end_is_noop() {
        let mut store = store_with_cursor_at_end("ab");
        store.move_right();
        assert_eq!(cursor(&store), (0, 2, 2));
    }

    #[test]
    fn test_right_at_line_end_does_not_cross() {
        let mut store = TextStore::from_str("ab\ncd");
        store.move_right();
        store.move_right();
        let before = cursor(&store);
        store.move_right();
        assert_eq!(cursor(&store), before);
    }

    #[test]
    fn test_up_on_first_line_is_noop() {
        let mut store = TextStore::from_str("ab\ncd");
        store.move_right();
        store.move_up();
        assert_eq!(cursor(&store), (0, 1, 1));
    }

    #[test]
    fn test_down_on_last_line_is_noop() {
        let mut store = store_with_cursor_at_end("ab\ncd");
        store.move_down();
        assert_eq!(cursor(&store), (1, 2, 2));
    }

    // ==================== Horizontal motion ====================

    #[test]
    fn test_right_over_tab_widens_by_stride() {
        let mut store = TextStore::from_str("\ta");
        store.move_right();
        assert_eq!(cursor(&store), (0, 1, TAB_STRIDE));
        store.move_right();
        assert_eq!(cursor(&store), (0, 2, TAB_STRIDE + 1));
    }

    #[test]
    fn test_left_over_tab_narrows_by_stride() {
        let mut store = store_with_cursor_at_end("a\tb");
        store.move_left();
        store.move_left();
        assert_eq!(cursor(&store), (0, 1, 1));
    }

    #[test]
    fn test_left_right_round_trip() {
        let mut store = store_with_cursor_at_end("a\tbc");
        let before = cursor(&store);
        store.move_left();
        store.move_left();
        store.move_left();
        store.move_right();
        store.move_right();
        store.move_right();
        assert_eq!(cursor(&store), before);
        assert_eq!(store.content(), "a\tbc");
    }

    // ==================== Vertical motion ====================

    #[test]
    fn test_up_then_down_returns_to_origin() {
        let mut store = store_with_cursor_at_end("ab\ncd");
        let before = cursor(&store);
        store.move_up();
        store.move_down();
        assert_eq!(cursor(&store), before);
    }

    #[test]
    fn test_up_from_column_zero_lands_at_column_zero() {
        // "  x\ny" with the cursor at line 1, column 0.
        let mut store = store_with_cursor_at_end("  x\ny");
        store.move_left();
        store.move_up();
        assert_eq!(cursor(&store), (0, 0, 0));
    }

    #[test]
    fn test_down_preserves_display_column_across_tab_lines() {
        // Line 0 has a leading tab; line 1 is plain. Standing after the
        // tab (display column 4) and moving down must land at display
        // column 4 of line 1, character column 4.
        let mut store = TextStore::from_str("\tabc\nwxyz++");
        store.move_right();
        assert_eq!(cursor(&store), (0, 1, TAB_STRIDE));
        store.move_down();
        assert_eq!(cursor(&store), (1, TAB_STRIDE, TAB_STRIDE));
    }

    #[test]
    fn test_up_preserves_display_column_across_tab_lines() {
        let mut store = TextStore::from_str("\tabc\nwxyz++");
        store.move_down();
        for _ in 0..TAB_STRIDE {
            store.move_right();
        }
        assert_eq!(cursor(&store), (1, TAB_STRIDE, TAB_STRIDE));
        store.move_up();
        // Display column 4 on line 0 is the boundary right after the tab.
        assert_eq!(cursor(&store), (0, 1, TAB_STRIDE));
    }

    #[test]
    fn test_down_snaps_to_end_of_narrower_line() {
        let mut store = TextStore::from_str("abcdef\nxy\nlonger");
        for _ in 0..5 {
            store.move_right();
        }
        store.move_down();
        assert_eq!(cursor(&store), (1, 2, 2));
    }

    #[test]
    fn test_down_snaps_to_end_of_narrower_unterminated_last_line() {
        let mut store = TextStore::from_str("abcdef\nxy");
        for _ in 0..6 {
            store.move_right();
        }
        store.move_down();
        assert_eq!(cursor(&store), (1, 2, 2));
        assert_eq!(store.char_under_cursor(), None);
    }

    #[test]
    fn test_up_snaps_to_end_of_narrower_line() {
        let mut store = TextStore::from_str("xy\nabcdef");
        store.move_down();
        for _ in 0..5 {
            store.move_right();
        }
        store.move_up();
        assert_eq!(cursor(&store), (0, 2, 2));
    }

    #[test]
    fn test_down_into_tab_span_lands_past_the_tab() {
        // Target column 2 falls inside the tab on line 1; the walk crosses
        // the tab and both columns reflect the landing position.
        let mut store = TextStore::from_str("ab++\n\tcd");
        store.move_right();
        store.move_right();
        assert_eq!(cursor(&store), (0, 2, 2));
        store.move_down();
        assert_eq!(cursor(&store), (1, 1, TAB_STRIDE));
    }

    #[test]
    fn test_up_into_tab_span_lands_at_tab_start() {
        let mut store = TextStore::from_str("\tcd\nab++");
        store.move_down();
        store.move_right();
        store.move_right();
        assert_eq!(cursor(&store), (1, 2, 2));
        store.move_up();
        assert_eq!(cursor(&store), (0, 0, 0));
    }

    #[test]
    fn test_down_lands_exactly_on_equal_width_line() {
        let mut store = TextStore::from_str("abc\ndef");
        for _ in 0..3 {
            store.move_right();
        }
        store.move_down();
        assert_eq!(cursor(&store), (1, 3, 3));
    }

    #[test]
    fn test_up_through_empty_line() {
        let mut store = store_with_cursor_at_end("ab\n\ncd");
        store.move_up();
        assert_eq!(cursor(&store), (1, 0, 0));
        store.move_up();
        assert_eq!(cursor(&store), (0, 0, 0));
    }

    #[test]
    fn test_down_through_empty_line() {
        let mut store = TextStore::from_str("ab\n\ncd");
        store.move_right();
        store.move_right();
        store.move_down();
        assert_eq!(cursor(&store), (1, 0, 0));
        store.move_down();
        assert_eq!(cursor(&store), (2, 0, 0));
    }

    #[test]
    fn test_vertical_walks_keep_content_intact() {
        let text = "fn main() {\n\tlet x = 1;\n\tprintln!(\"{x}\");\n}";
        let mut store = TextStore::from_str(text);
        for _ in 0..4 {
            store.move_down();
        }
        for _ in 0..4 {
            store.move_up();
        }
        assert_eq!(store.content(), text);
        assert_eq!(cursor(&store), (0, 0, 0));
    }
}
