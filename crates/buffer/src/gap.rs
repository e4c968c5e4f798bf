//! Gap store: the raw character storage underneath a document.
//!
//! The backing array is logically split into three contiguous regions:
//! `[0, pre_len)` holds the text before the insertion point, the gap of
//! unused slots follows it, and the final `post_len` slots hold the text
//! after the insertion point. Insertions and deletions at the gap are O(1);
//! shifting the gap by one character is a single cell copy.
//!
//! This type knows nothing about lines or columns. [`TextStore`] layers the
//! line bookkeeping on top and keeps the gap parked at the cursor.
//!
//! [`TextStore`]: crate::text_store::TextStore

use crate::types::EMPTY_CAPACITY;

const GROWTH_FACTOR: usize = 2;

/// Character storage with a movable gap at the insertion point.
#[derive(Debug)]
pub struct GapStore {
    /// Backing storage: `[pre | gap | post]`. Gap slots hold `'\0'` filler.
    data: Vec<char>,
    /// Characters before the gap.
    pre_len: usize,
    /// Characters after the gap.
    post_len: usize,
}

impl GapStore {
    /// Creates an empty store with a small seed gap, so the first
    /// insertions need no growth.
    pub fn new() -> Self {
        Self {
            data: vec!['\0'; EMPTY_CAPACITY],
            pre_len: 0,
            post_len: 0,
        }
    }

    /// Creates a store holding `text` exactly, with the gap (length zero)
    /// at the start of the document. No edit capacity is reserved; the
    /// first insertion grows the backing array.
    pub fn from_str(text: &str) -> Self {
        let data: Vec<char> = text.chars().collect();
        let post_len = data.len();
        Self {
            data,
            pre_len: 0,
            post_len,
        }
    }

    /// Logical length of the document (excluding the gap).
    pub fn len(&self) -> usize {
        self.pre_len + self.post_len
    }

    /// True if the document holds no characters.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total slots in the backing array.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Current gap size.
    pub fn gap_len(&self) -> usize {
        self.data.len() - self.pre_len - self.post_len
    }

    /// Characters before the insertion point.
    pub fn pre_len(&self) -> usize {
        self.pre_len
    }

    /// Characters after the insertion point.
    pub fn post_len(&self) -> usize {
        self.post_len
    }

    /// Shifts the gap forward across one character: the first post-gap
    /// character moves to the pre-gap side. The caller must ensure there is
    /// trailing text.
    pub fn forward(&mut self) {
        debug_assert!(self.post_len > 0, "forward past end of document");
        self.data[self.pre_len] = self.data[self.pre_len + self.gap_len()];
        self.pre_len += 1;
        self.post_len -= 1;
    }

    /// Shifts the gap backward across one character: the last pre-gap
    /// character moves to the post-gap side. The caller must ensure there
    /// is leading text.
    pub fn backward(&mut self) {
        debug_assert!(self.pre_len > 0, "backward past start of document");
        let dst = self.pre_len + self.gap_len() - 1;
        self.data[dst] = self.data[self.pre_len - 1];
        self.pre_len -= 1;
        self.post_len += 1;
    }

    /// Inserts a character at the gap.
    ///
    /// When the gap is exhausted the backing array doubles, preserving the
    /// pre/post split exactly: the pre region stays in place and the post
    /// region shifts to the end of the new storage.
    pub fn insert(&mut self, ch: char) {
        if self.gap_len() == 0 {
            self.grow();
        }
        self.data[self.pre_len] = ch;
        self.pre_len += 1;
    }

    fn grow(&mut self) {
        let old_cap = self.data.len();
        let new_cap = (old_cap * GROWTH_FACTOR).max(EMPTY_CAPACITY);

        // Extend in place, then shift the post region to the end of the new
        // storage (back-to-front safe via copy_within).
        self.data.resize(new_cap, '\0');
        if self.post_len > 0 {
            let old_post_start = old_cap - self.post_len;
            self.data
                .copy_within(old_post_start..old_cap, new_cap - self.post_len);
        }
    }

    /// Removes and returns the character immediately before the gap, or
    /// `None` at the start of the document.
    pub fn retract(&mut self) -> Option<char> {
        if self.pre_len == 0 {
            return None;
        }
        self.pre_len -= 1;
        Some(self.data[self.pre_len])
    }

    /// The character immediately after the gap, or `None` at document end.
    pub fn char_under(&self) -> Option<char> {
        if self.post_len == 0 {
            return None;
        }
        Some(self.data[self.pre_len + self.gap_len()])
    }

    /// The character immediately before the gap, or `None` at document start.
    pub fn char_before(&self) -> Option<char> {
        if self.pre_len == 0 {
            return None;
        }
        Some(self.data[self.pre_len - 1])
    }

    /// The character at `offset` into the pre-gap region.
    ///
    /// Only positions before the insertion point are addressable this way;
    /// [`TextStore::string_before_cursor`] walks the current line with it.
    ///
    /// [`TextStore::string_before_cursor`]: crate::text_store::TextStore::string_before_cursor
    pub fn pre_char(&self, offset: usize) -> char {
        debug_assert!(offset < self.pre_len);
        self.data[offset]
    }

    /// Iterates over the logical content, skipping the gap.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        let post_start = self.pre_len + self.gap_len();
        self.data[..self.pre_len]
            .iter()
            .chain(self.data[post_start..].iter())
            .copied()
    }

    /// Produces an independently owned copy of the logical content:
    /// the pre-gap region followed by the post-gap region.
    pub fn content(&self) -> String {
        self.chars().collect()
    }

    /// Resets to the empty state, retaining allocated capacity.
    pub fn clear(&mut self) {
        self.pre_len = 0;
        self.post_len = 0;
    }
}

impl Default for GapStore {
    fn default() -> Self {
        Self::new()
    }
}
