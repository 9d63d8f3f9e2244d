//! The path normalizer
//!
//! [`PathNormalizer::to`] combines a raw path with a base directory and the
//! working directory into one canonical string. The algorithm:
//!
//! 1. An empty path is returned untouched.
//! 2. Path and base are trimmed of surrounding whitespace.
//! 3. A base that already contains the working directory is cut down to
//!    whatever follows it, so the working directory is never prefixed twice.
//! 4. The effective base is the working directory joined with the normalized
//!    base, suffixed.
//! 5. The normalized, suffixed path is appended to the effective base unless
//!    it already contains it. Input that started with a separator is first
//!    re-anchored at the working directory's root for that check.

use crate::cache::{CacheKey, NormalizationCache};
use crate::classify;
use crate::error::{PathError, Result};
use crate::normalize::{is_separator, normalize_with, suffix_with};
use crate::working_dir::{FixedDir, ProcessDir, WorkingDirectory};
use std::fmt;
use std::path::MAIN_SEPARATOR;

/// Turns kinky path strings into canonical absolute ones
///
/// # Examples
/// ```
/// use path_to::{FixedDir, PathNormalizer};
///
/// let paths = PathNormalizer::builder()
///     .working_dir(FixedDir::new("/home/user"))
///     .separator('/')
///     .build()
///     .unwrap();
///
/// assert_eq!(paths.to("/\\/src/\\\\\\Path2/\\/\\/\\Path.php", ""), "/home/user/src/Path2/Path.php");
/// assert_eq!(paths.to("lib/", ""), "/home/user/lib/");
/// assert_eq!(paths.to("a//b\\c.txt", "sub"), "/home/user/sub/a/b/c.txt");
/// assert_eq!(paths.to("file.txt", "/home/user/sub"), "/home/user/sub/file.txt");
/// ```
pub struct PathNormalizer {
    working_dir: Box<dyn WorkingDirectory>,
    separator: char,
    cache: Option<NormalizationCache>,
}

impl PathNormalizer {
    /// Normalizer over a snapshot of the process working directory
    ///
    /// # Errors
    /// Fails if the working directory cannot be read.
    pub fn new() -> Result<Self> {
        Ok(Self::with_working_dir(FixedDir::capture()?))
    }

    /// Uncached normalizer using the native separator
    pub fn with_working_dir<W: WorkingDirectory + 'static>(working_dir: W) -> Self {
        Self {
            working_dir: Box::new(working_dir),
            separator: MAIN_SEPARATOR,
            cache: None,
        }
    }

    /// Start configuring a normalizer
    pub fn builder() -> PathNormalizerBuilder {
        PathNormalizerBuilder::default()
    }

    /// Combine `path` with `base` (or just the working directory when
    /// `base` is empty) into one canonical path
    ///
    /// Never fails. An empty `path` yields an empty string, meaning "nothing
    /// to normalize". Re-normalizing a result with the same base returns it
    /// unchanged.
    pub fn to(&self, path: &str, base: &str) -> String {
        if path.is_empty() {
            return String::new();
        }

        match &self.cache {
            Some(cache) => cache.get_or_compute(path, base, || self.combine(path, base)),
            None => self.combine(path, base),
        }
    }

    /// Whether `path` looks like a file (has an extension)
    pub fn is_file(&self, path: &str) -> bool {
        classify::is_file(path)
    }

    /// Whether `path` looks like a directory (non-empty, no extension)
    pub fn is_dir(&self, path: &str) -> bool {
        classify::is_dir(path)
    }

    /// Normalize separators using this normalizer's separator
    pub fn normalize(&self, path: &str) -> String {
        normalize_with(path, self.separator)
    }

    /// Suffix a directory path using this normalizer's separator
    pub fn suffix(&self, path: &str) -> String {
        suffix_with(path, self.separator)
    }

    /// The separator used in output paths
    pub fn separator(&self) -> char {
        self.separator
    }

    /// The result cache, if this normalizer was built with one
    pub fn cache(&self) -> Option<&NormalizationCache> {
        self.cache.as_ref()
    }

    fn combine(&self, path: &str, base: &str) -> String {
        let (path, base) = (path.trim(), base.trim());
        let cwd = self.working_dir.current();

        let (root, base) = self.effective_base(&cwd, base);
        let absolute = path.starts_with(is_separator);
        let path = self.suffix(&self.normalize(path));

        // Normalization strips the leading separator of absolute input, so
        // those are re-anchored at the working directory's root before the
        // containment check. Relative input is checked as-is, and never
        // matches a bare root base.
        let candidate = if absolute {
            format!("{root}{path}")
        } else {
            path.clone()
        };
        let bare_root = !base.is_empty() && base.chars().all(is_separator);
        let contained = candidate.contains(&base) && (absolute || !bare_root);
        let combined = if contained {
            candidate
        } else {
            format!("{base}{path}")
        };

        log::trace!("Normalized {path:?} against {base:?} to {combined:?}");
        combined
    }

    /// Returns the root of the working directory (its leading separators)
    /// and the suffixed effective base.
    fn effective_base(&self, cwd: &str, base: &str) -> (String, String) {
        let relative = match base.find(cwd) {
            Some(at) if !cwd.is_empty() => &base[at + cwd.len()..],
            _ => base,
        };
        let relative = self.normalize(relative);

        let root: String = cwd
            .chars()
            .take_while(|c| is_separator(*c))
            .map(|_| self.separator)
            .collect();

        let mut effective = format!("{root}{}", self.normalize(cwd));
        if !relative.is_empty() {
            if !effective.is_empty() && !effective.ends_with(self.separator) {
                effective.push(self.separator);
            }
            effective.push_str(&relative);
        }

        let effective = self.suffix(&effective);
        (root, effective)
    }
}

impl Default for PathNormalizer {
    /// Uncached, native separator, live process working directory
    fn default() -> Self {
        Self::with_working_dir(ProcessDir)
    }
}

impl fmt::Debug for PathNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathNormalizer")
            .field("separator", &self.separator)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

/// Configures a [`PathNormalizer`]
#[derive(Default)]
pub struct PathNormalizerBuilder {
    working_dir: Option<Box<dyn WorkingDirectory>>,
    separator: Option<char>,
    cache: Option<CacheKey>,
}

impl PathNormalizerBuilder {
    /// Provider of the working directory; defaults to [`ProcessDir`]
    pub fn working_dir<W: WorkingDirectory + 'static>(mut self, working_dir: W) -> Self {
        self.working_dir = Some(Box::new(working_dir));
        self
    }

    /// Output separator; defaults to the platform's. Only `/` and `\` are
    /// accepted by [`build`](Self::build).
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = Some(separator);
        self
    }

    /// Memoize results keyed on the raw path alone
    pub fn cached(self) -> Self {
        self.cache(CacheKey::Path)
    }

    /// Memoize results with the given key policy
    pub fn cache(mut self, key: CacheKey) -> Self {
        self.cache = Some(key);
        self
    }

    /// # Errors
    /// [`PathError::UnsupportedSeparator`] for a separator other than `/` or `\`.
    pub fn build(self) -> Result<PathNormalizer> {
        let separator = self.separator.unwrap_or(MAIN_SEPARATOR);
        if !is_separator(separator) {
            return Err(PathError::UnsupportedSeparator { separator });
        }

        let working_dir: Box<dyn WorkingDirectory> = match self.working_dir {
            Some(dir) => dir,
            None => Box::new(ProcessDir),
        };

        Ok(PathNormalizer {
            working_dir,
            separator,
            cache: self.cache.map(NormalizationCache::new),
        })
    }
}
