//! Filesystem locations and path manipulation.
//!
//! Data (trace output) lives under the XDG data directory and the default
//! configuration file under the XDG config directory, both falling back to
//! the usual dot directories in `$HOME`.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "hellowshop";

/// Returns the data directory for storefront output files.
///
/// `$XDG_DATA_HOME/hellowshop`, else `$HOME/.local/share/hellowshop`, else
/// `./.hellowshop` when neither variable is set.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    resolve_dir(
        env::var("XDG_DATA_HOME").ok().as_deref(),
        env::var("HOME").ok().as_deref(),
        ".local/share",
    )
}

/// Returns the default configuration file path.
///
/// `$XDG_CONFIG_HOME/hellowshop/config.toml`, else
/// `$HOME/.config/hellowshop/config.toml`.
#[must_use]
pub fn default_config_file() -> PathBuf {
    resolve_dir(
        env::var("XDG_CONFIG_HOME").ok().as_deref(),
        env::var("HOME").ok().as_deref(),
        ".config",
    )
    .join("config.toml")
}

fn resolve_dir(xdg: Option<&str>, home: Option<&str>, home_relative: &str) -> PathBuf {
    match (xdg.filter(|v| !v.is_empty()), home.filter(|v| !v.is_empty())) {
        (Some(base), _) => PathBuf::from(base).join(APP_DIR),
        (None, Some(home)) => PathBuf::from(home).join(home_relative).join(APP_DIR),
        (None, None) => PathBuf::from(format!(".{APP_DIR}")),
    }
}

/// Expands a leading `~` to `$HOME`.
///
/// Paths without a leading tilde, and all paths when `$HOME` is unset, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use hellowshop::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_with_home(path, env::var("HOME").ok().as_deref())
}

fn expand_with_home(path: &str, home: Option<&str>) -> PathBuf {
    match (path.strip_prefix('~'), home) {
        (Some(""), Some(home)) => PathBuf::from(home),
        (Some(rest), Some(home)) if rest.starts_with('/') => {
            PathBuf::from(home).join(rest.trim_start_matches('/'))
        }
        _ => PathBuf::from(path),
    }
}
