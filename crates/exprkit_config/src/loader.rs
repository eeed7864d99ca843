//! Configuration file discovery, loading and validation.

use crate::error::ConfigError;
use crate::types::ExprkitConfig;
use exprkit_common::{is_allowed_char, is_word_char, Vocabulary};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// The configuration file name looked up in a project directory.
pub const CONFIG_FILE_NAME: &str = "exprkit.toml";

/// Loads and validates `<dir>/exprkit.toml`.
pub fn load_config(dir: &Path) -> Result<ExprkitConfig, ConfigError> {
    load_config_file(&dir.join(CONFIG_FILE_NAME))
}

/// Loads and validates a configuration from an explicit file path.
pub fn load_config_file(path: &Path) -> Result<ExprkitConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_config_from_str(&content)
}

/// Parses and validates a configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<ExprkitConfig, ConfigError> {
    let config: ExprkitConfig = toml::from_str(content)?;
    validate_vocabulary(&config.vocabulary)?;
    Ok(config)
}

/// Walks up from `start` looking for the nearest `exprkit.toml`.
///
/// Returns the path of the file itself, or `None` if no ancestor has one.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Checks that every token can be recovered by the editor and validator.
///
/// Parameters must be word characters only, or word deletion could never
/// match them. Arithmetic operators must be single whitelisted punctuation
/// characters, since adjacency is checked per character. No token may
/// belong to two lists.
fn validate_vocabulary(vocab: &Vocabulary) -> Result<(), ConfigError> {
    for param in &vocab.parameters {
        if param.is_empty() || !param.chars().all(is_word_char) {
            return Err(ConfigError::InvalidVocabulary(format!(
                "parameter '{param}' must consist of ASCII letters and '_'"
            )));
        }
    }

    for op in &vocab.arithmetic_operators {
        let mut chars = op.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if is_allowed_char(c) && !c.is_ascii_alphanumeric() => {}
            _ => {
                return Err(ConfigError::InvalidVocabulary(format!(
                    "arithmetic operator '{op}' must be a single punctuation character"
                )))
            }
        }
    }

    if let Some(op) = vocab.condition_operators.iter().find(|op| op.is_empty()) {
        return Err(ConfigError::InvalidVocabulary(format!(
            "condition operator '{op}' must not be empty"
        )));
    }

    let mut seen = HashSet::new();
    for (_, token) in vocab.tokens() {
        if !seen.insert(token) {
            return Err(ConfigError::InvalidVocabulary(format!(
                "token '{token}' appears more than once in the vocabulary"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parse_full_config() {
        let toml = r#"
[vocabulary]
parameters = ["age", "salary"]
arithmetic_operators = ["+", "-", "(", ")"]
condition_operators = ["=", "AND", "NOT"]

[validation]
signed_literals = true
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.vocabulary.parameters, vec!["age", "salary"]);
        assert_eq!(config.vocabulary.arithmetic_operators.len(), 4);
        assert_eq!(config.vocabulary.condition_operators[2], "NOT");
        assert!(config.validation.signed_literals);
    }

    #[test]
    fn invalid_toml_errors() {
        let err = load_config_from_str("this is not valid toml {{{}}}").unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)));
    }

    #[test]
    fn parameter_with_digits_rejected() {
        let toml = r#"
[vocabulary]
parameters = ["age2"]
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVocabulary(_)));
    }

    #[test]
    fn empty_parameter_rejected() {
        let toml = r#"
[vocabulary]
parameters = [""]
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVocabulary(_)));
    }

    #[test]
    fn multi_char_arithmetic_operator_rejected() {
        let toml = r#"
[vocabulary]
arithmetic_operators = ["+", "**"]
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(format!("{err}").contains("'**'"));
    }

    #[test]
    fn non_whitelisted_operator_rejected() {
        let toml = r#"
[vocabulary]
arithmetic_operators = ["^"]
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVocabulary(_)));
    }

    #[test]
    fn duplicate_across_lists_rejected() {
        let toml = r#"
[vocabulary]
arithmetic_operators = ["+", "-"]
condition_operators = ["=", "-"]
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(format!("{err}").contains("more than once"));
    }

    #[test]
    fn load_from_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            "[vocabulary]\nparameters = [\"rate\"]\n",
        )
        .unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.vocabulary.parameters, vec!["rate"]);
    }

    #[test]
    fn io_error_from_nonexistent_dir() {
        let err = load_config(Path::new("/nonexistent/dir")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/dir"));
    }

    #[test]
    fn find_config_in_parent() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "").unwrap();
        let sub = tmp.path().join("a").join("b");
        fs::create_dir_all(&sub).unwrap();
        assert_eq!(
            find_config(&sub),
            Some(tmp.path().join(CONFIG_FILE_NAME))
        );
    }

    #[test]
    fn find_config_none() {
        let tmp = TempDir::new().unwrap();
        // Only meaningful when no ancestor of the temp dir carries a config.
        if tmp.path().ancestors().skip(1).all(|d| !d.join(CONFIG_FILE_NAME).is_file()) {
            assert_eq!(find_config(tmp.path()), None);
        }
    }
}
