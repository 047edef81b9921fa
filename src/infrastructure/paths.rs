//! Filesystem path resolution for widget data.
//!
//! This module locates the per-user data directory used for trace output.
//! Resolution follows the XDG base directory convention with a home-relative
//! fallback.

use std::path::PathBuf;

/// Returns the data directory for typeahead trace output.
///
/// Resolves to `$XDG_DATA_HOME/typeahead` when `XDG_DATA_HOME` is set, and
/// `$HOME/.local/share/typeahead` otherwise. When neither variable is set the
/// directory is relative to the working directory, which keeps trace export
/// functional in minimal environments.
///
/// # Examples
///
/// ```
/// use typeahead::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert!(data_dir.ends_with("typeahead"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    let base = std::env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".local/share"))
        })
        .unwrap_or_else(|| PathBuf::from(".local/share"));

    base.join("typeahead")
}
