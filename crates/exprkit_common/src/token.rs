//! Token kinds and the character classes the editor and validator share.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Punctuation accepted by the validator's character whitelist, in addition
/// to ASCII letters and digits.
pub const ALLOWED_PUNCTUATION: &[char] = &[
    '+', '-', '*', '/', '%', '(', ')', '[', ']', '=', '<', '>', '!', '&', '|',
];

/// The kind of a token, decided by whole-string membership in the vocabulary.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum TokenKind {
    /// A named input from the parameter list (e.g. `age`).
    Parameter,
    /// An arithmetic operator or parenthesis (e.g. `+`, `(`).
    ArithmeticOperator,
    /// A comparison or boolean operator (e.g. `>`, `AND`).
    ConditionOperator,
    /// Free-form user text such as a number literal.
    Constant,
    /// A single character that is not part of the vocabulary.
    RawChar,
}

impl TokenKind {
    /// Returns `true` for the three kinds backed by a vocabulary list.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Parameter | TokenKind::ArithmeticOperator | TokenKind::ConditionOperator
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Parameter => write!(f, "parameter"),
            TokenKind::ArithmeticOperator => write!(f, "arithmetic operator"),
            TokenKind::ConditionOperator => write!(f, "condition operator"),
            TokenKind::Constant => write!(f, "constant"),
            TokenKind::RawChar => write!(f, "character"),
        }
    }
}

/// Returns `true` if `c` belongs to the identifier class used by word deletion
/// (ASCII letters and underscore).
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns `true` if `c` may appear in a valid expression.
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ALLOWED_PUNCTUATION.contains(&c)
}
