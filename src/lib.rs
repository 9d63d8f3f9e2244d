//! # path-to
//!
//! Turn kinky path strings into canonical, OS-appropriate absolute paths.
//!
//! Callers hand over paths in whatever shape they have them: mixed slash
//! directions, doubled separators, stray leading or trailing separators.
//! This crate turns them into one canonical form rooted at the working
//! directory (or a base below it), and tells files from directories by
//! looking for an extension.
//!
//! ## Features
//!
//! - **Separator normalization**: `/` and `\` become the native separator,
//!   runs collapse, ends are trimmed
//! - **Directory suffixing**: directories always end in one separator,
//!   files never do
//! - **Base joining**: without ever prefixing the working directory twice
//! - **Memoization**: optional, thread-safe result cache
//! - **Purely textual**: no filesystem access, `.`/`..` are left alone
//!
//! ## Examples
//!
//! ### Normalizing against the working directory
//!
//! ```rust
//! use path_to::{FixedDir, PathNormalizer};
//!
//! let paths = PathNormalizer::builder()
//!     .working_dir(FixedDir::new("/home/user"))
//!     .separator('/')
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(paths.to("/\\/src/\\\\\\Path2/\\/\\/\\Path.php", ""), "/home/user/src/Path2/Path.php");
//! assert_eq!(paths.to("lib/", ""), "/home/user/lib/");
//!
//! // Normalizing a result again changes nothing
//! let once = paths.to("a//b\\c.txt", "sub");
//! assert_eq!(once, "/home/user/sub/a/b/c.txt");
//! assert_eq!(paths.to(&once, "sub"), once);
//! ```
//!
//! ### Classification
//!
//! ```rust
//! use path_to::{is_dir, is_file};
//!
//! assert!(is_file("a/b/c.txt"));
//! assert!(is_dir("a/b/c"));
//! assert!(!is_file("a/.hidden"));
//! ```
//!
//! ### Caching
//!
//! ```rust
//! use path_to::{FixedDir, PathNormalizer};
//!
//! let paths = PathNormalizer::builder()
//!     .working_dir(FixedDir::new("/home/user"))
//!     .separator('/')
//!     .cached()
//!     .build()
//!     .unwrap();
//!
//! // The cache is keyed on the path alone
//! assert_eq!(paths.to("x.txt", "a"), "/home/user/a/x.txt");
//! assert_eq!(paths.to("x.txt", "b"), "/home/user/a/x.txt");
//! ```

mod cache;
mod classify;
mod error;
mod normalize;
mod normalizer;
mod working_dir;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use cache::{CacheKey, NormalizationCache};
pub use classify::{extension, is_dir, is_file};
pub use error::{PathError, Result};
pub use normalize::{normalize, normalize_with, suffix, suffix_with};
pub use normalizer::{PathNormalizer, PathNormalizerBuilder};
pub use working_dir::{FixedDir, ProcessDir, WorkingDirectory};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
