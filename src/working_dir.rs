//! Working directory providers
//!
//! The normalizer never reads process state directly. It asks a
//! [`WorkingDirectory`] for the directory to resolve relative paths
//! against, which lets tests substitute a fixed string.

use crate::error::Result;
use std::env;

/// Source of the directory relative paths are resolved against
///
/// The returned string is used as-is: it is not validated and not checked
/// against the filesystem.
///
/// Any `Fn() -> String` closure is a provider:
///
/// ```
/// use path_to::WorkingDirectory;
///
/// let provider = || "/srv/www".to_string();
/// assert_eq!(provider.current(), "/srv/www");
/// ```
pub trait WorkingDirectory: Send + Sync {
    /// The current working directory
    fn current(&self) -> String;
}

impl<F> WorkingDirectory for F
where
    F: Fn() -> String + Send + Sync,
{
    fn current(&self) -> String {
        self()
    }
}

/// Reads the process working directory on every call
///
/// A working directory that cannot be read (deleted, no permission)
/// resolves to the empty string, so that normalization stays total.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessDir;

impl WorkingDirectory for ProcessDir {
    fn current(&self) -> String {
        match env::current_dir() {
            Ok(dir) => dir.to_string_lossy().into_owned(),
            Err(err) => {
                log::warn!("Cannot read current working directory: {err}");
                String::new()
            }
        }
    }
}

/// A working directory fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedDir(String);

impl FixedDir {
    /// Use `dir` as the working directory
    pub fn new(dir: impl Into<String>) -> Self {
        Self(dir.into())
    }

    /// Snapshot the process working directory
    ///
    /// # Errors
    /// Returns [`PathError::WorkingDirectory`](crate::PathError::WorkingDirectory)
    /// if the directory cannot be read.
    pub fn capture() -> Result<Self> {
        let dir = env::current_dir()?;
        Ok(Self(dir.to_string_lossy().into_owned()))
    }

    /// The fixed directory
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl WorkingDirectory for FixedDir {
    fn current(&self) -> String {
        self.0.clone()
    }
}
