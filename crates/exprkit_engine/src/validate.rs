//! Structural validation of a finished expression.
//!
//! Validation is a single left-to-right pass with two terminal outcomes:
//! the first problem found rejects the sequence, and reaching the end with
//! no open brackets accepts it. The checks, in order:
//!
//! 1. every character is a letter, a digit, or one of `+ - * / % ( ) [ ] = < > ! & |`;
//! 2. `(`/`[` and `)`/`]` nest and balance;
//! 3. no arithmetic operator character directly follows another one.
//!
//! Checks 2 and 3 run in the same pass. Brackets are consumed by the bracket
//! check and leave the operator flag untouched, so `a+(-1)` is rejected like
//! `a+-1`. Only single characters take part in the adjacency check; a word
//! operator such as `AND` never does. That gap is reported as a warning on
//! otherwise valid input, not as a rejection.

use std::sync::Arc;

use exprkit_common::{is_allowed_char, is_word_char, Span, TokenKind, Vocabulary};
use exprkit_config::ValidationConfig;
use exprkit_diagnostics::{Diagnostic, DiagnosticSink};
use tracing::debug;

use crate::codes;

/// The first structural problem found in a sequence.
///
/// Offsets are character indices into the validated sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// A character outside the allowed set.
    InvalidCharacter {
        /// Offset of the character.
        at: usize,
        /// The character.
        ch: char,
    },
    /// A closing bracket with an empty bracket stack.
    UnmatchedClose {
        /// Offset of the closer.
        at: usize,
        /// The closing bracket.
        ch: char,
    },
    /// A closing bracket that does not match the innermost opener.
    MismatchedBracket {
        /// Offset of the innermost opener.
        open_at: usize,
        /// The opening bracket.
        open: char,
        /// Offset of the closer.
        at: usize,
        /// The closing bracket.
        close: char,
    },
    /// An opening bracket still open at the end of the sequence.
    UnclosedBracket {
        /// Offset of the innermost unclosed opener.
        at: usize,
        /// The opening bracket.
        ch: char,
    },
    /// An arithmetic operator directly after another one.
    AdjacentOperators {
        /// Offset of the earlier operator.
        prev_at: usize,
        /// The earlier operator.
        prev: char,
        /// Offset of the offending operator.
        at: usize,
        /// The offending operator.
        ch: char,
    },
}

impl Rejection {
    /// Returns the offset of the offending character.
    pub fn offset(&self) -> usize {
        match *self {
            Rejection::InvalidCharacter { at, .. }
            | Rejection::UnmatchedClose { at, .. }
            | Rejection::MismatchedBracket { at, .. }
            | Rejection::UnclosedBracket { at, .. }
            | Rejection::AdjacentOperators { at, .. } => at,
        }
    }

    /// Builds the error diagnostic describing this rejection.
    ///
    /// `chars` is the validated sequence; it is used to tell whether a
    /// rejected `+`/`-` was meant as a sign.
    pub fn to_diagnostic(&self, chars: &[char], config: &ValidationConfig) -> Diagnostic {
        let span = Span::at(self.offset());
        match *self {
            Rejection::InvalidCharacter { ch, .. } => Diagnostic::new(
                codes::INVALID_CHARACTER,
                format!("invalid character {ch:?}"),
                span,
            )
            .with_label("not allowed in an expression")
            .with_help("expressions may contain letters, digits and + - * / % ( ) [ ] = < > ! & |"),

            Rejection::UnmatchedClose { ch, .. } => Diagnostic::new(
                codes::UNMATCHED_CLOSE,
                format!("unmatched closing '{ch}'"),
                span,
            )
            .with_label("no open bracket to close"),

            Rejection::MismatchedBracket {
                open_at,
                open,
                close,
                ..
            } => Diagnostic::new(
                codes::MISMATCHED_BRACKET,
                format!("'{open}' closed by '{close}'"),
                span,
            )
            .with_label(format!("expected '{}'", closer_for(open)))
            .with_related(Span::at(open_at), "opened here"),

            Rejection::UnclosedBracket { ch, .. } => {
                Diagnostic::new(codes::UNCLOSED_BRACKET, format!("unclosed '{ch}'"), span)
                    .with_label("never closed")
                    .with_help(format!("add a matching '{}'", closer_for(ch)))
            }

            Rejection::AdjacentOperators { prev_at, prev, at, ch } => {
                let diag = Diagnostic::new(
                    codes::ADJACENT_OPERATORS,
                    format!("operator '{ch}' follows operator '{prev}'"),
                    span,
                )
                .with_label("operator follows another operator")
                .with_related(Span::at(prev_at), "previous operator");
                let operand_follows = chars
                    .get(at + 1)
                    .is_some_and(|c| c.is_ascii_alphanumeric());
                if is_sign(ch) && operand_follows && !config.signed_literals {
                    diag.with_note(
                        "signed operands are rejected; set `validation.signed_literals = true` to accept them",
                    )
                } else {
                    diag.with_help("put an operand between the two operators")
                }
            }
        }
    }
}

/// Decides whether a finished expression is structurally well formed.
#[derive(Clone, Debug)]
pub struct Validator {
    vocab: Arc<Vocabulary>,
    config: ValidationConfig,
}

impl Validator {
    /// Creates a validator over the given vocabulary and policy.
    pub fn new(vocab: Arc<Vocabulary>, config: &ValidationConfig) -> Self {
        Self {
            vocab,
            config: *config,
        }
    }

    /// Returns the validation policy in effect.
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Returns `true` if `sequence` is structurally valid.
    ///
    /// The empty sequence is valid.
    pub fn validate(&self, sequence: &str) -> bool {
        let chars: Vec<char> = sequence.chars().collect();
        self.scan(&chars).is_none()
    }

    /// Returns the first problem in `sequence`, or `None` if it is valid.
    pub fn first_rejection(&self, sequence: &str) -> Option<Rejection> {
        let chars: Vec<char> = sequence.chars().collect();
        self.scan(&chars)
    }

    /// Validates `sequence`, emitting diagnostics into `sink`.
    ///
    /// An invalid sequence produces exactly one error diagnostic. A valid one
    /// may produce warnings, which do not affect the returned verdict.
    pub fn check(&self, sequence: &str, sink: &mut DiagnosticSink) -> bool {
        let chars: Vec<char> = sequence.chars().collect();
        let valid = match self.scan(&chars) {
            Some(rejection) => {
                sink.emit(rejection.to_diagnostic(&chars, &self.config));
                false
            }
            None => {
                self.warn_condition_adjacency(&chars, sink);
                true
            }
        };
        debug!(sequence, valid, "validated expression");
        valid
    }

    fn scan(&self, chars: &[char]) -> Option<Rejection> {
        if let Some((at, &ch)) = chars.iter().enumerate().find(|(_, c)| !is_allowed_char(**c)) {
            return Some(Rejection::InvalidCharacter { at, ch });
        }

        let mut stack: Vec<(usize, char)> = Vec::new();
        let mut prev_op: Option<(usize, char)> = None;

        for (at, &ch) in chars.iter().enumerate() {
            match ch {
                '(' | '[' => stack.push((at, ch)),
                ')' | ']' => match stack.pop() {
                    None => return Some(Rejection::UnmatchedClose { at, ch }),
                    Some((open_at, open)) if closer_for(open) != ch => {
                        return Some(Rejection::MismatchedBracket {
                            open_at,
                            open,
                            at,
                            close: ch,
                        })
                    }
                    Some(_) => {}
                },
                c if self.vocab.is_arithmetic_char(c) => match prev_op {
                    Some(_) if self.accepts_sign(chars, at) => prev_op = None,
                    Some((prev_at, prev)) => {
                        return Some(Rejection::AdjacentOperators {
                            prev_at,
                            prev,
                            at,
                            ch,
                        })
                    }
                    None => prev_op = Some((at, c)),
                },
                _ => prev_op = None,
            }
        }

        stack
            .pop()
            .map(|(at, ch)| Rejection::UnclosedBracket { at, ch })
    }

    /// A `+`/`-` right after an operator is a sign when the policy allows it
    /// and an operand character follows.
    fn accepts_sign(&self, chars: &[char], at: usize) -> bool {
        self.config.signed_literals
            && is_sign(chars[at])
            && chars
                .get(at + 1)
                .is_some_and(|c| c.is_ascii_alphanumeric())
    }

    fn warn_condition_adjacency(&self, chars: &[char], sink: &mut DiagnosticSink) {
        let mut start = 0;
        while start < chars.len() {
            if !is_word_char(chars[start]) {
                start += 1;
                continue;
            }
            let mut end = start;
            while end < chars.len() && is_word_char(chars[end]) {
                end += 1;
            }
            let word: String = chars[start..end].iter().collect();
            if self.vocab.classify(&word) == TokenKind::ConditionOperator {
                for at in [start.checked_sub(1), Some(end)].into_iter().flatten() {
                    if let Some(&c) = chars.get(at).filter(|c| self.is_bare_operator(**c)) {
                        sink.emit(adjacency_warning(&word, Span::new(start, end), c, at));
                    }
                }
            }
            start = end;
        }
    }

    fn is_bare_operator(&self, c: char) -> bool {
        !matches!(c, '(' | ')' | '[' | ']') && self.vocab.is_arithmetic_char(c)
    }
}

fn adjacency_warning(word: &str, span: Span, op: char, op_at: usize) -> Diagnostic {
    Diagnostic::new(
        codes::CONDITION_OPERATOR_ADJACENCY,
        format!("condition operator '{word}' is next to operator '{op}'"),
        span,
    )
    .with_label("condition operator")
    .with_related(Span::at(op_at), "arithmetic operator")
    .with_note("word operators are not part of the adjacent-operator check")
}

fn closer_for(open: char) -> char {
    match open {
        '[' => ']',
        _ => ')',
    }
}

fn is_sign(c: char) -> bool {
    c == '+' || c == '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict() -> Validator {
        Validator::new(Arc::new(Vocabulary::default()), &ValidationConfig::default())
    }

    fn signed() -> Validator {
        Validator::new(
            Arc::new(Vocabulary::default()),
            &ValidationConfig {
                signed_literals: true,
            },
        )
    }

    #[test]
    fn empty_is_valid() {
        assert!(strict().validate(""));
    }

    #[test]
    fn whitelist() {
        let v = strict();
        assert!(!v.validate("age@salary"));
        assert!(!v.validate("age + 1"));
        assert!(!v.validate("my_var"));
        assert!(v.validate("a!b&c|d"));
        assert_eq!(
            v.first_rejection("age@salary"),
            Some(Rejection::InvalidCharacter { at: 3, ch: '@' })
        );
    }

    #[test]
    fn whitelist_runs_before_brackets() {
        assert_eq!(
            strict().first_rejection(")@"),
            Some(Rejection::InvalidCharacter { at: 1, ch: '@' })
        );
    }

    #[test]
    fn brackets() {
        let v = strict();
        assert!(v.validate("(age+1)"));
        assert!(v.validate("[(age)]"));
        assert!(!v.validate("(age+1"));
        assert!(!v.validate("age+1)"));
        assert!(!v.validate("(age+1]"));
        assert!(!v.validate("([)]"));
    }

    #[test]
    fn bracket_rejections() {
        let v = strict();
        assert_eq!(
            v.first_rejection("age+1)"),
            Some(Rejection::UnmatchedClose { at: 5, ch: ')' })
        );
        assert_eq!(
            v.first_rejection("(age+1]"),
            Some(Rejection::MismatchedBracket {
                open_at: 0,
                open: '(',
                at: 6,
                close: ']'
            })
        );
        assert_eq!(
            v.first_rejection("((a)"),
            Some(Rejection::UnclosedBracket { at: 0, ch: '(' })
        );
        assert_eq!(
            v.first_rejection("([a]"),
            Some(Rejection::UnclosedBracket { at: 0, ch: '(' })
        );
        assert_eq!(
            v.first_rejection("(a)[("),
            Some(Rejection::UnclosedBracket { at: 4, ch: '(' })
        );
    }

    #[test]
    fn adjacent_operators() {
        let v = strict();
        assert!(!v.validate("age++1"));
        assert!(!v.validate("age+-1"));
        assert!(!v.validate("age*/2"));
        assert!(v.validate("age+1-2"));
        assert_eq!(
            v.first_rejection("age+-1"),
            Some(Rejection::AdjacentOperators {
                prev_at: 3,
                prev: '+',
                at: 4,
                ch: '-'
            })
        );
    }

    #[test]
    fn brackets_do_not_reset_operator_flag() {
        let v = strict();
        assert!(!v.validate("age+(-1)"));
        assert!(v.validate("(age)+1"));
        assert!(v.validate("age+(1)"));
    }

    #[test]
    fn condition_chars_reset_operator_flag() {
        let v = strict();
        assert!(v.validate("age>-1"));
        assert!(v.validate("age=+1"));
        assert!(v.validate("age+ANDsalary"));
        assert!(v.validate("+AND-"));
    }

    #[test]
    fn trailing_and_leading_operators_are_valid() {
        assert!(strict().validate("+age"));
        assert!(strict().validate("age+"));
    }

    #[test]
    fn signed_literals_policy() {
        let v = signed();
        assert!(v.validate("age+-1"));
        assert!(v.validate("age*-salary"));
        assert!(!v.validate("age+--1"));
        assert!(!v.validate("age+-"));
        assert!(!v.validate("age+*1"));
        assert!(!v.validate("age+-(1)"));
    }

    fn check_collect(v: &Validator, sequence: &str) -> (bool, Vec<Diagnostic>) {
        let mut sink = DiagnosticSink::new();
        let valid = v.check(sequence, &mut sink);
        (valid, sink.into_diagnostics())
    }

    #[test]
    fn check_emits_single_error() {
        let (valid, diags) = check_collect(&strict(), "(age++1");
        assert!(!valid);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, codes::ADJACENT_OPERATORS);
        assert_eq!(diags[0].span, Span::at(5));
        assert_eq!(diags[0].related[0].span, Span::at(4));
    }

    #[test]
    fn check_valid_emits_nothing() {
        let (valid, diags) = check_collect(&strict(), "(age+1)>salary");
        assert!(valid);
        assert!(diags.is_empty());
    }

    #[test]
    fn sign_note_on_strict_rejection() {
        let (_, diags) = check_collect(&strict(), "age+-1");
        assert_eq!(diags[0].notes.len(), 1);
        assert!(diags[0].notes[0].contains("signed_literals"));
    }

    #[test]
    fn mismatched_bracket_points_at_opener() {
        let (_, diags) = check_collect(&strict(), "(age+1]");
        let diag = &diags[0];
        assert_eq!(diag.code, codes::MISMATCHED_BRACKET);
        assert_eq!(diag.label.as_deref(), Some("expected ')'"));
        assert_eq!(diag.related[0].span, Span::at(0));
        assert_eq!(diag.related[0].message, "opened here");
    }

    #[test]
    fn condition_operator_adjacency_warns_without_rejecting() {
        let mut sink = DiagnosticSink::new();
        assert!(strict().check("age+AND-1", &mut sink));
        assert!(!sink.has_errors());
        let diags = sink.into_diagnostics();
        assert_eq!(diags.len(), 2);
        assert!(diags
            .iter()
            .all(|d| d.code == codes::CONDITION_OPERATOR_ADJACENCY));
        assert_eq!(diags[0].span, Span::new(4, 7));
    }

    #[test]
    fn bracketed_condition_operator_does_not_warn() {
        let (valid, diags) = check_collect(&strict(), "(age>1)AND(debt<2)");
        assert!(valid);
        assert!(diags.is_empty());
    }
}
