//! Parsing and validation of `exprkit.toml` configuration files.
//!
//! The configuration supplies the token [`Vocabulary`](exprkit_common::Vocabulary)
//! offered to the user and the validation policy applied on save. Every table
//! is optional; an empty file yields the built-in defaults.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{
    find_config, load_config, load_config_file, load_config_from_str, CONFIG_FILE_NAME,
};
pub use types::*;
