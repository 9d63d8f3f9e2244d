//! Separator normalization and directory suffixing
//!
//! Both operations are purely textual. Nothing here touches the filesystem,
//! and `.`/`..` segments are kept as ordinary components.

use crate::classify::is_dir;
use std::path::MAIN_SEPARATOR;

/// Whether `c` is one of the separator variants accepted on input.
pub(crate) fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Normalize a path string using the native separator
///
/// This function:
/// - Converts both `/` and `\` to the native separator
/// - Collapses runs of separators into one
/// - Strips leading and trailing separators
///
/// # Examples
/// ```
/// use path_to::normalize;
/// use std::path::MAIN_SEPARATOR;
///
/// let expected = ["a", "b", "c"].join(MAIN_SEPARATOR.to_string().as_str());
/// assert_eq!(normalize("/a//b\\c/"), expected);
/// assert_eq!(normalize("\\/\\"), "");
/// ```
pub fn normalize(path: &str) -> String {
    normalize_with(path, MAIN_SEPARATOR)
}

/// Normalize a path string using an explicit separator
///
/// # Examples
/// ```
/// use path_to::normalize_with;
///
/// assert_eq!(normalize_with("/\\/src/\\\\Path2//Path.php", '/'), "src/Path2/Path.php");
/// assert_eq!(normalize_with("a/b", '\\'), "a\\b");
/// assert_eq!(normalize_with("a/./../b", '/'), "a/./../b");
/// ```
pub fn normalize_with(path: &str, separator: char) -> String {
    path.split(is_separator)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(separator.to_string().as_str())
}

/// Append a native separator to a directory path
///
/// Files, empty paths and paths already ending in a separator come back
/// unchanged.
///
/// # Examples
/// ```
/// use path_to::suffix;
/// use std::path::MAIN_SEPARATOR;
///
/// assert_eq!(suffix("lib"), format!("lib{MAIN_SEPARATOR}"));
/// assert_eq!(suffix("main.rs"), "main.rs");
/// assert_eq!(suffix(""), "");
/// ```
pub fn suffix(path: &str) -> String {
    suffix_with(path, MAIN_SEPARATOR)
}

/// Append `separator` to a directory path, at most once
///
/// A path already ending in either separator variant is left alone.
pub fn suffix_with(path: &str, separator: char) -> String {
    if is_dir(path) && !path.ends_with(is_separator) {
        format!("{path}{separator}")
    } else {
        path.to_string()
    }
}
