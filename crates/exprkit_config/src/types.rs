//! Configuration types deserialized from `exprkit.toml`.

use exprkit_common::Vocabulary;
use serde::{Deserialize, Serialize};

/// The top-level configuration parsed from `exprkit.toml`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExprkitConfig {
    /// The parameter and operator lists offered to the user.
    #[serde(default)]
    pub vocabulary: Vocabulary,
    /// Validation policy applied when an expression is saved.
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Policy switches for the structural validator.
///
/// The defaults reproduce the strict checks: every switch is off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// Accept a single `+` or `-` directly after an operator as the sign of
    /// the following operand, e.g. `age*-1`.
    #[serde(default)]
    pub signed_literals: bool,
}
