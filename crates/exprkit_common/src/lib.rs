//! Shared foundational types used across the exprkit workspace.
//!
//! This crate provides the token vocabulary and its classification helpers,
//! plus character-offset spans for pointing into an expression.

#![warn(missing_docs)]

pub mod span;
pub mod token;
pub mod vocab;

pub use span::Span;
pub use token::{is_allowed_char, is_word_char, TokenKind, ALLOWED_PUNCTUATION};
pub use vocab::Vocabulary;
