//! Line table: per-line character counts and display widths.
//!
//! Two parallel arrays, one entry per line. `char_lens[i]` is the number of
//! characters on line `i` including its terminating newline (the last line
//! may be unterminated); `display_widths[i]` is the same line measured in
//! rendered columns, where a tab counts [`TAB_STRIDE`] columns and every
//! other character, the newline included, counts one.
//!
//! The table supports an O(n) rebuild for bulk loads plus the incremental
//! credit/debit/split/remove updates the mutation operations need.

use crate::types::{char_width, TAB_STRIDE};

/// Parallel per-line length and display-width bookkeeping.
#[derive(Debug, Clone)]
pub struct LineTable {
    /// Characters per line, newline included.
    char_lens: Vec<usize>,
    /// Tab-expanded columns per line, newline included as one column.
    display_widths: Vec<usize>,
}

impl LineTable {
    /// Creates a table with a single empty line.
    pub fn new() -> Self {
        Self {
            char_lens: vec![0],
            display_widths: vec![0],
        }
    }

    /// Rebuilds the table from document content in one tab-aware pass.
    pub fn rebuild<I>(&mut self, content: I)
    where
        I: IntoIterator<Item = char>,
    {
        self.char_lens.clear();
        self.char_lens.push(0);
        self.display_widths.clear();
        self.display_widths.push(0);

        for ch in content {
            let line = self.char_lens.len() - 1;
            self.char_lens[line] += 1;
            self.display_widths[line] += char_width(ch);
            if ch == '\n' {
                self.char_lens.push(0);
                self.display_widths.push(0);
            }
        }
    }

    /// Number of lines. Always at least 1, even for an empty document.
    pub fn line_count(&self) -> usize {
        self.char_lens.len()
    }

    /// Character count of `line`, newline included.
    pub fn chars_in(&self, line: usize) -> usize {
        self.char_lens[line]
    }

    /// Display width of `line`, newline included as one column.
    pub fn width_of(&self, line: usize) -> usize {
        self.display_widths[line]
    }

    /// Per-line character counts, for viewport math.
    pub fn char_lens(&self) -> &[usize] {
        &self.char_lens
    }

    /// Per-line display widths, for viewport math.
    pub fn display_widths(&self) -> &[usize] {
        &self.display_widths
    }

    /// Total characters across all lines.
    pub fn total_chars(&self) -> usize {
        self.char_lens.iter().sum()
    }

    /// Character offset where `line` begins: the prefix sum of the
    /// preceding line lengths.
    pub fn line_start_offset(&self, line: usize) -> usize {
        self.char_lens[..line].iter().sum()
    }

    /// Adds `chars` characters and `cols` columns to `line`.
    pub fn credit(&mut self, line: usize, chars: usize, cols: usize) {
        self.char_lens[line] += chars;
        self.display_widths[line] += cols;
    }

    /// Removes `chars` characters and `cols` columns from `line`.
    pub fn debit(&mut self, line: usize, chars: usize, cols: usize) {
        self.char_lens[line] -= chars;
        self.display_widths[line] -= cols;
    }

    /// Newline-split bookkeeping: inserts a new entry after `line` and
    /// moves everything beyond the insertion point onto it.
    ///
    /// `keep_chars` / `keep_cols` are the counts that stay on `line` — the
    /// cursor offsets after the just-inserted newline, which itself stays
    /// on the old line.
    pub fn split_after(&mut self, line: usize, keep_chars: usize, keep_cols: usize) {
        let moved_chars = self.char_lens[line] - keep_chars;
        let moved_cols = self.display_widths[line] - keep_cols;

        self.char_lens[line] = keep_chars;
        self.display_widths[line] = keep_cols;
        self.char_lens.insert(line + 1, moved_chars);
        self.display_widths.insert(line + 1, moved_cols);
    }

    /// Newline-join bookkeeping: erases the entry for `line` and returns
    /// its `(chars, cols)` counts for the caller to absorb into the
    /// previous line.
    pub fn remove(&mut self, line: usize) -> (usize, usize) {
        let chars = self.char_lens.remove(line);
        let cols = self.display_widths.remove(line);
        (chars, cols)
    }

    /// Resets to a single empty line.
    pub fn reset(&mut self) {
        self.char_lens.clear();
        self.char_lens.push(0);
        self.display_widths.clear();
        self.display_widths.push(0);
    }

    /// Columns occupied by the line's content, excluding the newline unit.
    ///
    /// `terminated` is whether the line ends in a newline; the last line of
    /// a document may not.
    pub fn content_width(&self, line: usize, terminated: bool) -> usize {
        let width = self.display_widths[line];
        if terminated {
            width - 1
        } else {
            width
        }
    }

    /// Characters on the line excluding the newline.
    pub fn content_chars(&self, line: usize, terminated: bool) -> usize {
        let len = self.char_lens[line];
        if terminated {
            len - 1
        } else {
            len
        }
    }
}

impl Default for LineTable {
    fn default() -> Self {
        Self::new()
    }
}
