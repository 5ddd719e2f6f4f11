//! Path resolution for collablite data.
//!
//! Provides XDG-compliant path resolution.

use std::env;
use std::path::PathBuf;

/// Get XDG-compliant data directory for collablite.
///
/// # Returns
/// Path to data directory: `~/.local/share/collablite/`
pub fn get_data_dir() -> PathBuf {
    let data_home = env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            env::var("HOME")
                .map(|home| PathBuf::from(home).join(".local/share"))
                .unwrap_or_else(|_| PathBuf::from("."))
        });

    data_home.join("collablite")
}

/// Get database file path.
///
/// `COLLABLITE_DB` takes precedence over `{data_dir}/collablite.db`.
pub fn get_db_path() -> PathBuf {
    env::var("COLLABLITE_DB")
        .map(PathBuf::from)
        .unwrap_or_else(|_| get_data_dir().join("collablite.db"))
}
