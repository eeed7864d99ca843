//! What can go wrong loading `exprkit.toml`.

use std::path::PathBuf;

/// A configuration that could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The text is not TOML, or a field has the wrong type.
    #[error("malformed configuration: {0}")]
    Malformed(#[from] toml::de::Error),

    /// A token list that the editor or validator cannot work with.
    #[error("invalid vocabulary: {0}")]
    InvalidVocabulary(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn read_error_names_the_file() {
        let err = ConfigError::Read {
            path: PathBuf::from("conf/exprkit.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "cannot read conf/exprkit.toml: no such file");
        assert!(err.source().is_some());
    }

    #[test]
    fn malformed_wraps_toml_error() {
        let toml_err = toml::from_str::<toml::Value>("key = ").unwrap_err();
        let err = ConfigError::from(toml_err);
        assert!(err.to_string().starts_with("malformed configuration: "));
    }
}
