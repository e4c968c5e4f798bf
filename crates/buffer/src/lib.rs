//! vellum-buffer: gap-buffer text store with tab-aware cursor motion.
//!
//! This crate is the editing core of vellum. It stores a document as a
//! character sequence with a movable gap at the insertion point, keeps two
//! parallel per-line indices (character length and tab-expanded display
//! width) consistent with every edit, and implements cursor motion that
//! preserves the display column across lines with differing tab placement.
//!
//! # Overview
//!
//! The main type is [`TextStore`], which provides:
//! - Character, tab, and newline insertion and backspace deletion at the
//!   cursor, with line split/merge bookkeeping
//! - Horizontal motion confined to the current line and vertical motion
//!   that preserves the display column
//! - Cursor-relative queries for caret placement
//!
//! # Example
//!
//! ```
//! use vellum_buffer::TextStore;
//!
//! let mut store = TextStore::new();
//! for ch in "if".chars() {
//!     store.insert_char(ch);
//! }
//! store.insert_tab();
//! store.insert_char('x');
//! assert_eq!(store.content(), "if\tx");
//!
//! // The line is 4 characters but 7 display columns: tabs widen.
//! assert_eq!(store.line_lens(), &[4]);
//! assert_eq!(store.line_display_widths(), &[7]);
//! ```
//!
//! # Rendering collaborators
//!
//! Rendering is external. It consumes [`TextStore::content`], the per-line
//! indices for viewport math, and the caret queries in [`view`], which take
//! glyph advance data through the [`GlyphMetrics`] trait.

mod cursor;
mod gap;
mod line_table;
mod text_store;
mod types;
pub mod view;

pub use text_store::TextStore;
pub use types::{Vec2, EMPTY_CAPACITY, TAB_STRIDE};
pub use view::{caret_position, caret_size, GlyphMetrics, Viewport};
