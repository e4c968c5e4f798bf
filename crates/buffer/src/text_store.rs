//! TextStore is the main public API for editing a document.
//!
//! It combines a gap store (character storage) with a line table (per-line
//! character counts and tab-expanded display widths) and three cursor
//! fields: the current line, the character column within it, and the
//! display column within it. The gap is always parked at the insertion
//! point, so every mutation happens where the cursor is.
//!
//! The vertical-motion algorithms that walk the gap across lines live in
//! the [`cursor`] module; this module owns the edits and the bookkeeping
//! that keeps the line table synchronized with them.
//!
//! [`cursor`]: crate::cursor

use crate::gap::GapStore;
use crate::line_table::LineTable;
use crate::types::TAB_STRIDE;

/// An editable document: gap-buffered text, line bookkeeping, and a cursor.
#[derive(Debug)]
pub struct TextStore {
    pub(crate) gap: GapStore,
    pub(crate) lines: LineTable,
    /// Line containing the insertion point.
    pub(crate) line: usize,
    /// Character offset of the insertion point within `line`.
    pub(crate) col: usize,
    /// Display-column offset of the insertion point within `line`,
    /// accounting for tabs already passed on this line.
    pub(crate) display_col: usize,
}

impl TextStore {
    /// Creates an empty document: one empty line, cursor at the start.
    pub fn new() -> Self {
        Self {
            gap: GapStore::new(),
            lines: LineTable::new(),
            line: 0,
            col: 0,
            display_col: 0,
        }
    }

    /// Creates a document from line-delimited text, populating the line
    /// table in a single tab-aware scan. The cursor starts at the top of
    /// the document.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Self {
        let gap = GapStore::from_str(text);
        let mut lines = LineTable::new();
        lines.rebuild(text.chars());

        let store = Self {
            gap,
            lines,
            line: 0,
            col: 0,
            display_col: 0,
        };
        store.debug_check();
        store
    }

    // ==================== Accessors ====================

    /// Line containing the insertion point (0-based).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Character column of the insertion point within the current line.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Display column of the insertion point within the current line.
    pub fn display_col(&self) -> usize {
        self.display_col
    }

    /// Number of lines in the document. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.lines.line_count()
    }

    /// Total character count.
    pub fn len(&self) -> usize {
        self.gap.len()
    }

    /// True if the document holds no characters.
    pub fn is_empty(&self) -> bool {
        self.gap.is_empty()
    }

    /// Per-line character counts (newline included), for viewport math.
    pub fn line_lens(&self) -> &[usize] {
        self.lines.char_lens()
    }

    /// Per-line display widths (newline counted as one column), for
    /// viewport math.
    pub fn line_display_widths(&self) -> &[usize] {
        self.lines.display_widths()
    }

    /// Character offset where `line` begins.
    pub fn line_start_offset(&self, line: usize) -> usize {
        self.lines.line_start_offset(line)
    }

    /// Produces an independently owned copy of the document content.
    pub fn content(&self) -> String {
        self.gap.content()
    }

    /// The character under the cursor, or `None` at document end.
    pub fn char_under_cursor(&self) -> Option<char> {
        self.gap.char_under()
    }

    /// The character immediately before the cursor, or `None` at document
    /// start.
    pub fn char_before_cursor(&self) -> Option<char> {
        self.gap.char_before()
    }

    /// All characters from the start of the current line up to the
    /// insertion point, in reverse order.
    ///
    /// The caret geometry only sums glyph advances over this string, so
    /// the reversal costs nothing there; callers that need document order
    /// must re-reverse.
    pub fn string_before_cursor(&self) -> String {
        let mut out = String::new();
        let mut i = self.gap.pre_len();
        while i > 0 {
            let ch = self.gap.pre_char(i - 1);
            if self.line > 0 && ch == '\n' {
                break;
            }
            out.push(ch);
            i -= 1;
        }
        out
    }

    // ==================== Mutations ====================

    /// Inserts a character at the cursor.
    ///
    /// Newlines and tabs dispatch to [`insert_newline`] and [`insert_tab`]
    /// so the display-width bookkeeping stays consistent no matter which
    /// entry point the caller uses.
    ///
    /// [`insert_newline`]: TextStore::insert_newline
    /// [`insert_tab`]: TextStore::insert_tab
    pub fn insert_char(&mut self, ch: char) {
        match ch {
            '\n' => self.insert_newline(),
            '\t' => self.insert_tab(),
            _ => {
                self.insert_raw(ch);
                self.debug_check();
            }
        }
    }

    /// Inserts a tab: one character, [`TAB_STRIDE`] display columns.
    pub fn insert_tab(&mut self) {
        self.insert_raw('\t');
        self.lines.credit(self.line, 0, TAB_STRIDE - 1);
        self.display_col += TAB_STRIDE - 1;
        self.debug_check();
    }

    /// Inserts a newline and splits the current line: the characters and
    /// columns after the insertion point move to a freshly inserted line
    /// entry, and the cursor lands at the start of it.
    pub fn insert_newline(&mut self) {
        self.insert_raw('\n');
        self.lines.split_after(self.line, self.col, self.display_col);
        self.line += 1;
        self.col = 0;
        self.display_col = 0;
        self.debug_check();
    }

    /// Raw insertion: writes the character at the gap and credits one
    /// character and one column to the current line and cursor.
    fn insert_raw(&mut self, ch: char) {
        self.gap.insert(ch);
        self.lines.credit(self.line, 1, 1);
        self.col += 1;
        self.display_col += 1;
    }

    /// Deletes the character before the cursor, returning it. No-op at the
    /// start of the document.
    ///
    /// Removing a newline merges the current line into the previous one:
    /// the previous line's counts absorb this line's, its entry is erased,
    /// and the cursor lands at the old line-break position. Removing a tab
    /// gives back [`TAB_STRIDE`] display columns.
    pub fn backspace_delete(&mut self) -> Option<char> {
        let ch = self.gap.retract()?;

        match ch {
            '\n' => {
                let (merged_chars, merged_cols) = self.lines.remove(self.line);
                self.line -= 1;
                // Pre-merge counts place the cursor at the old line break;
                // they still include the newline being deleted, which the
                // shared decrement below accounts for.
                self.col = self.lines.chars_in(self.line);
                self.display_col = self.lines.width_of(self.line);
                self.lines.credit(self.line, merged_chars, merged_cols);
            }
            '\t' => {
                self.lines.debit(self.line, 0, TAB_STRIDE - 1);
                self.display_col -= TAB_STRIDE - 1;
            }
            _ => {}
        }

        self.lines.debit(self.line, 1, 1);
        self.col -= 1;
        self.display_col -= 1;

        self.debug_check();
        Some(ch)
    }

    /// Resets to the empty-document state, retaining allocated capacity.
    pub fn clear(&mut self) {
        self.gap.clear();
        self.lines.reset();
        self.line = 0;
        self.col = 0;
        self.display_col = 0;
        self.debug_check();
    }

    // ==================== Internal helpers ====================

    /// Whether `line` ends in a newline. Only the last line may not; a
    /// document ending in a newline carries a trailing empty line entry.
    pub(crate) fn line_terminated(&self, line: usize) -> bool {
        line + 1 < self.lines.line_count()
    }

    // ==================== Validation ====================

    /// Debug-build check that the line table and cursor fields agree with
    /// the character store. Any failure here is a defect in a mutation
    /// operation, not a runtime condition. Compiled out in release builds.
    #[cfg(debug_assertions)]
    pub(crate) fn debug_check(&self) {
        assert_eq!(
            self.lines.total_chars(),
            self.gap.len(),
            "line table out of sync with store length"
        );
        assert_eq!(self.lines.char_lens().len(), self.lines.display_widths().len());
        for line in 0..self.lines.line_count() {
            assert!(
                self.lines.width_of(line) >= self.lines.chars_in(line),
                "line {} narrower in columns than in characters",
                line
            );
        }
        assert!(self.line < self.lines.line_count());
        assert!(self.col <= self.lines.chars_in(self.line));
        assert!(self.display_col <= self.lines.width_of(self.line));
        assert_eq!(
            self.gap.pre_len(),
            self.lines.line_start_offset(self.line) + self.col,
            "gap not parked at the cursor"
        );
    }

    #[cfg(not(debug_assertions))]
    pub(crate) fn debug_check(&self) {}
}

impl Default for TextStore {
    fn default() -> Self {
        Self::new()
    }
}
