//! Path helpers.

use std::path::PathBuf;

/// Joins a file name to the data directory.
///
/// # Examples
///
/// ```
/// # use std::path::PathBuf;
/// # use poker::utils::get_path;
/// let path = get_path("/var/lib/poker", "game.db.json");
/// assert_eq!(path, PathBuf::from("/var/lib/poker/game.db.json"));
/// ```
pub fn get_path(data_dir: &str, file_name: &str) -> PathBuf {
    [data_dir, file_name].iter().collect()
}
