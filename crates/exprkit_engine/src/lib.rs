//! Expression editing and validation engine.
//!
//! An [`Editor`] owns a [`Draft`] (a character sequence plus a cursor) that is
//! changed through token-sized inserts and deletes. Saving snapshots the draft
//! into a [`SavedExpression`] whose verdict comes from the structural
//! [`Validator`]: allowed characters only, balanced and properly nested
//! brackets, and no two arithmetic operators in a row.
//!
//! Editing never fails. Malformed intermediate states are normal while the
//! user is typing and are only judged on save.

#![warn(missing_docs)]

pub mod codes;
pub mod draft;
pub mod editor;
pub mod saved;
pub mod script;
pub mod validate;

pub use draft::Draft;
pub use editor::Editor;
pub use saved::SavedExpression;
pub use script::{parse_script, run_script, EditCommand, ScriptError};
pub use validate::{Rejection, Validator};
