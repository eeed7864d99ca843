//! Character-offset ranges within a single expression.

use serde::{Deserialize, Serialize};

/// A character offset range within an expression sequence.
///
/// Offsets count `char`s, not bytes, so they line up with the draft cursor.
/// The `start` is inclusive and `end` is exclusive.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Span {
    /// Offset of the first character covered (inclusive).
    pub start: usize,
    /// Offset one past the last character covered (exclusive).
    pub end: usize,
}

impl Span {
    /// A dummy span used when no location is available.
    pub const DUMMY: Span = Span {
        start: usize::MAX,
        end: usize::MAX,
    };

    /// Creates a new span covering `start..end`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates a span covering the single character at `offset`.
    pub fn at(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset + 1,
        }
    }

    /// Returns the length of this span in characters.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if this span has zero length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if this is the dummy span.
    pub fn is_dummy(&self) -> bool {
        *self == Span::DUMMY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_char_span() {
        let s = Span::at(4);
        assert_eq!(s, Span::new(4, 5));
        assert_eq!(s.len(), 1);
        assert!(!s.is_empty());
    }

    #[test]
    fn dummy_span() {
        assert!(Span::DUMMY.is_dummy());
        assert!(!Span::new(0, 0).is_dummy());
        assert!(Span::new(0, 0).is_empty());
    }

    #[test]
    fn serde_roundtrip() {
        let s = Span::new(3, 6);
        let json = serde_json::to_string(&s).unwrap();
        let back: Span = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
