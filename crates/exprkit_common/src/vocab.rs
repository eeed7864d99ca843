//! The fixed token vocabulary: parameters, arithmetic and condition operators.

use crate::token::TokenKind;
use serde::{Deserialize, Serialize};

/// The three token lists an expression is assembled from.
///
/// Each list is ordered; the order only matters for presenting the choices to
/// a user. Membership tests are whole-string comparisons. Missing lists in a
/// deserialized vocabulary fall back to the built-in defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Named inputs that may appear in an expression.
    #[serde(default = "default_parameters")]
    pub parameters: Vec<String>,
    /// Arithmetic operators and parentheses.
    #[serde(default = "default_arithmetic_operators")]
    pub arithmetic_operators: Vec<String>,
    /// Comparison and boolean operators.
    #[serde(default = "default_condition_operators")]
    pub condition_operators: Vec<String>,
}

fn default_parameters() -> Vec<String> {
    to_strings(&["age", "salary", "income", "debt"])
}

fn default_arithmetic_operators() -> Vec<String> {
    to_strings(&["+", "-", "*", "/", "%", "(", ")"])
}

fn default_condition_operators() -> Vec<String> {
    to_strings(&["=", ">", "<", "AND", "OR"])
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            parameters: default_parameters(),
            arithmetic_operators: default_arithmetic_operators(),
            condition_operators: default_condition_operators(),
        }
    }
}

impl Vocabulary {
    /// Classifies `text` by whole-string membership.
    ///
    /// Lists are consulted in the order parameters, arithmetic operators,
    /// condition operators. Text found in none of them is a [`TokenKind::RawChar`]
    /// when it is exactly one character and a [`TokenKind::Constant`] otherwise.
    pub fn classify(&self, text: &str) -> TokenKind {
        if contains(&self.parameters, text) {
            TokenKind::Parameter
        } else if contains(&self.arithmetic_operators, text) {
            TokenKind::ArithmeticOperator
        } else if contains(&self.condition_operators, text) {
            TokenKind::ConditionOperator
        } else if text.chars().count() == 1 {
            TokenKind::RawChar
        } else {
            TokenKind::Constant
        }
    }

    /// Returns `true` if `text` is a member of any of the three lists.
    pub fn is_keyword(&self, text: &str) -> bool {
        self.classify(text).is_keyword()
    }

    /// Returns `true` if the single character `c` is an arithmetic operator.
    pub fn is_arithmetic_char(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        contains(&self.arithmetic_operators, c.encode_utf8(&mut buf))
    }

    /// Iterates over every token in presentation order, tagged with its kind.
    pub fn tokens(&self) -> impl Iterator<Item = (TokenKind, &str)> {
        let params = self
            .parameters
            .iter()
            .map(|s| (TokenKind::Parameter, s.as_str()));
        let arith = self
            .arithmetic_operators
            .iter()
            .map(|s| (TokenKind::ArithmeticOperator, s.as_str()));
        let cond = self
            .condition_operators
            .iter()
            .map(|s| (TokenKind::ConditionOperator, s.as_str()));
        params.chain(arith).chain(cond)
    }
}

fn contains(list: &[String], text: &str) -> bool {
    list.iter().any(|s| s == text)
}
