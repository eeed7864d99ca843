//! The draft buffer: an editable character sequence with a cursor.
//!
//! The buffer stores rendered characters only, never a token list. Token
//! boundaries are recovered on demand by scanning the identifier class
//! around the cursor, which is how a delete can remove `AND` or `salary` as a
//! whole while punctuation and digits go one character at a time.

use exprkit_common::{is_word_char, Span, Vocabulary};
use tracing::{debug, trace};

/// An in-progress expression: a character sequence and a cursor.
///
/// The cursor is a character index in `0..=len()` and always stays a valid
/// insertion point.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    chars: Vec<char>,
    cursor: usize,
}

impl Draft {
    /// Creates an empty draft with the cursor at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a draft holding `text` with the cursor at `cursor`, clamped to
    /// the end of the text.
    pub fn with_text(text: &str, cursor: usize) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let cursor = cursor.min(chars.len());
        Self { chars, cursor }
    }

    /// Returns the current sequence as a string.
    pub fn sequence(&self) -> String {
        self.chars.iter().collect()
    }

    /// Returns the cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the number of characters in the draft.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the draft holds no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Moves the cursor, clamping positions past the end to `len()`.
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.chars.len());
    }

    /// Splices `text` in at the cursor and moves the cursor past it.
    ///
    /// The text is inserted verbatim whatever it contains; a parameter name,
    /// a single operator and a free-form constant are all handled alike.
    pub fn insert_at_cursor(&mut self, text: &str) {
        let at = self.cursor;
        let before = self.chars.len();
        self.chars.splice(at..at, text.chars());
        self.cursor = at + (self.chars.len() - before);
        trace!(text, at, cursor = self.cursor, "inserted at cursor");
    }

    /// Returns the maximal run of identifier characters touching the cursor.
    ///
    /// The scan extends left from `cursor - 1` and right from `cursor` over
    /// ASCII letters and `_`. The result is empty when neither neighbor of
    /// the cursor is an identifier character.
    pub fn word_around_cursor(&self) -> Span {
        let mut start = self.cursor;
        while start > 0 && is_word_char(self.chars[start - 1]) {
            start -= 1;
        }
        let mut end = self.cursor;
        while end < self.chars.len() && is_word_char(self.chars[end]) {
            end += 1;
        }
        Span::new(start, end)
    }

    /// Removes one logical unit before the cursor and returns the removed text.
    ///
    /// If the identifier run around the cursor is, as a whole, a member of
    /// one of the vocabulary lists, the entire run is removed, including any
    /// part right of the cursor. A run that starts at the cursor still counts,
    /// so `+|age` loses `age` and keeps `+`. Otherwise exactly one character
    /// before the cursor is removed. The cursor ends up where the removed
    /// text started.
    ///
    /// Does nothing and returns `None` when the cursor is at 0.
    pub fn delete_before_cursor(&mut self, vocab: &Vocabulary) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }

        let word = self.word_around_cursor();
        let range = if !word.is_empty() && vocab.is_keyword(&self.text(word)) {
            word.start..word.end
        } else {
            self.cursor - 1..self.cursor
        };

        let start = range.start;
        let removed: String = self.chars.drain(range).collect();
        self.cursor = start;
        debug!(removed = %removed, cursor = self.cursor, "deleted before cursor");
        Some(removed)
    }

    /// Empties the draft and resets the cursor.
    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    fn text(&self, span: Span) -> String {
        self.chars[span.start..span.end].iter().collect()
    }
}
