//! File/directory classification by string shape
//!
//! A path counts as a file when its last segment carries an extension and
//! as a directory otherwise. The filesystem is never consulted, so
//! extensionless files and dotted directory names are misclassified by
//! contract.

use crate::normalize::is_separator;

/// Extract the extension of the last non-empty segment
///
/// Follows the usual conventions: no extension without a `.`, none when
/// the only `.` leads the segment (hidden files), none when nothing
/// follows the last `.`.
///
/// # Examples
/// ```
/// use path_to::extension;
///
/// assert_eq!(extension("a/b/c.txt"), Some("txt"));
/// assert_eq!(extension("archive.tar.gz"), Some("gz"));
/// assert_eq!(extension("src\\lib.rs\\"), Some("rs"));
/// assert_eq!(extension("a/.hidden"), None);
/// assert_eq!(extension("a/b/c"), None);
/// ```
pub fn extension(path: &str) -> Option<&str> {
    let name = path.split(is_separator).rfind(|s| !s.is_empty())?;
    let (stem, ext) = name.rsplit_once('.')?;

    if stem.is_empty() || ext.is_empty() {
        None
    } else {
        Some(ext)
    }
}

/// Whether `path` looks like a file, i.e. has an extension
///
/// # Examples
/// ```
/// use path_to::is_file;
///
/// assert!(is_file("a/b/c.txt"));
/// assert!(!is_file("a/.hidden"));
/// assert!(!is_file(""));
/// ```
pub fn is_file(path: &str) -> bool {
    extension(path).is_some()
}

/// Whether `path` looks like a directory
///
/// Any non-empty path without an extension. A path made only of
/// separators, or the empty string, is neither a file nor a directory.
///
/// # Examples
/// ```
/// use path_to::is_dir;
///
/// assert!(is_dir("a/b/c"));
/// assert!(is_dir("lib/"));
/// assert!(!is_dir("a/b/c.txt"));
/// assert!(!is_dir(""));
/// ```
pub fn is_dir(path: &str) -> bool {
    path.split(is_separator).any(|s| !s.is_empty()) && !is_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension() {
        assert_eq!(extension("Path.php"), Some("php"));
        assert_eq!(extension("src/Path2/Path.php"), Some("php"));
        assert_eq!(extension("file.with.dots.extension"), Some("extension"));
        assert_eq!(extension("..hidden"), Some("hidden"));
        assert_eq!(extension("dir.d/inner"), None);
        assert_eq!(extension("file."), None);
        assert_eq!(extension(".hidden"), None);
        assert_eq!(extension("."), None);
        assert_eq!(extension(".."), None);
        assert_eq!(extension(""), None);
        assert_eq!(extension("///"), None);
    }

    #[test]
    fn test_is_file_and_is_dir_are_exclusive() {
        for path in ["a/b/c.txt", "a/b/c", "a/.hidden", "lib/", "x.rs", "C:\\Users"] {
            assert!(
                is_file(path) ^ is_dir(path),
                "exactly one classification expected for {path}"
            );
        }
    }

    #[test]
    fn test_empty_is_neither() {
        for path in ["", "/", "\\\\"] {
            assert!(!is_file(path));
            assert!(!is_dir(path));
        }
    }

    #[test]
    fn test_mixed_separators() {
        assert!(is_file("a\\b/c.txt"));
        assert!(is_dir("a.d\\b"));
    }
}
