//! The editing session: one draft, one validator, one saved slot.

use std::sync::Arc;

use exprkit_common::Vocabulary;
use exprkit_config::{ExprkitConfig, ValidationConfig};
use exprkit_diagnostics::DiagnosticSink;
use tracing::debug;

use crate::draft::Draft;
use crate::saved::SavedExpression;
use crate::validate::Validator;

/// A single user's expression-building session.
///
/// Every session owns its draft and saved slot exclusively. Sessions built
/// from the same configuration share only the immutable vocabulary, so any
/// number of them can run side by side.
#[derive(Clone, Debug)]
pub struct Editor {
    vocab: Arc<Vocabulary>,
    draft: Draft,
    validator: Validator,
    saved: Option<SavedExpression>,
}

impl Editor {
    /// Creates a session over a shared vocabulary and validation policy.
    pub fn new(vocab: Arc<Vocabulary>, validation: &ValidationConfig) -> Self {
        let validator = Validator::new(Arc::clone(&vocab), validation);
        Self {
            vocab,
            draft: Draft::new(),
            validator,
            saved: None,
        }
    }

    /// Creates a session from a loaded configuration.
    pub fn from_config(config: &ExprkitConfig) -> Self {
        Self::new(Arc::new(config.vocabulary.clone()), &config.validation)
    }

    /// Inserts `token` verbatim at the cursor.
    pub fn insert(&mut self, token: &str) {
        self.draft.insert_at_cursor(token);
    }

    /// Deletes one logical unit before the cursor, returning what was removed.
    pub fn delete(&mut self) -> Option<String> {
        self.draft.delete_before_cursor(&self.vocab)
    }

    /// Moves the cursor, clamped to the end of the draft.
    pub fn set_cursor(&mut self, pos: usize) {
        self.draft.set_cursor(pos);
    }

    /// Empties the draft without saving.
    pub fn clear(&mut self) {
        self.draft.clear();
    }

    /// Saves the draft.
    ///
    /// The draft is validated, the snapshot replaces any previously saved
    /// expression, and the draft is cleared whether or not it was valid.
    pub fn save(&mut self) -> SavedExpression {
        let sequence = self.draft.sequence();
        let mut sink = DiagnosticSink::new();
        let valid = self.validator.check(&sequence, &mut sink);
        let saved = SavedExpression::new(sequence, valid, sink.into_diagnostics());
        debug!(
            sequence = saved.sequence(),
            valid,
            replaced = self.saved.is_some(),
            "saved expression"
        );
        self.saved = Some(saved.clone());
        self.draft.clear();
        saved
    }

    /// Returns the current draft sequence.
    pub fn current_sequence(&self) -> String {
        self.draft.sequence()
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> usize {
        self.draft.cursor()
    }

    /// Returns the draft being edited.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Returns the most recently saved expression, if any.
    pub fn saved(&self) -> Option<&SavedExpression> {
        self.saved.as_ref()
    }

    /// Returns the vocabulary offered to the user.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Returns the validator used on save.
    pub fn validator(&self) -> &Validator {
        &self.validator
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::from_config(&ExprkitConfig::default())
    }
}
