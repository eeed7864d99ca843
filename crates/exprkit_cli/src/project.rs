//! Configuration lookup shared by every command.

use std::path::{Path, PathBuf};

use exprkit_config::{ExprkitConfig, CONFIG_FILE_NAME};
use tracing::debug;

use crate::GlobalArgs;

/// Resolves and loads the configuration for this invocation.
///
/// With `--config`, the given file (or `exprkit.toml` in the given directory)
/// must exist. Otherwise the nearest `exprkit.toml` above the current
/// directory is used, and the built-in defaults apply when there is none.
pub fn load_config(global: &GlobalArgs) -> Result<ExprkitConfig, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    match locate_config(global.config.as_deref(), &cwd) {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            Ok(exprkit_config::load_config_file(&path)?)
        }
        None => {
            debug!("no configuration found, using defaults");
            Ok(ExprkitConfig::default())
        }
    }
}

/// Picks the configuration file to load, if any.
///
/// An explicit path names either the file itself or its directory; it is
/// returned even when missing so that loading reports the error.
pub fn locate_config(explicit: Option<&str>, cwd: &Path) -> Option<PathBuf> {
    match explicit {
        Some(path) => {
            let p = cwd.join(path);
            if p.is_dir() {
                Some(p.join(CONFIG_FILE_NAME))
            } else {
                Some(p)
            }
        }
        None => exprkit_config::find_config(cwd),
    }
}
