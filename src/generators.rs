//! Property test generators for path normalization
//!
//! Produces kinky paths: mixed separator directions, repeated separators,
//! leading and trailing separator runs.

use proptest::prelude::*;

/// Generators for path testing scenarios
pub struct PathGenerators;

impl PathGenerators {
    /// A single path segment without dots
    pub fn directory_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_-]{0,7}"
    }

    /// File extensions, including none at all
    pub fn file_extension() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("rs".to_string()),
            Just("php".to_string()),
            Just("txt".to_string()),
            Just("json".to_string()),
            Just("".to_string()), // Files without extension
        ]
    }

    /// A last segment that may or may not classify as a file
    pub fn leaf() -> impl Strategy<Value = String> {
        prop_oneof![
            3 => (Self::directory_name(), Self::file_extension()).prop_map(|(name, ext)| {
                if ext.is_empty() {
                    name
                } else {
                    format!("{name}.{ext}")
                }
            }),
            1 => Self::directory_name().prop_map(|name| format!(".{name}")),
        ]
    }

    /// A run of one to three separators in random directions
    pub fn separator_run() -> impl Strategy<Value = String> {
        prop::collection::vec(prop_oneof![Just('/'), Just('\\')], 1..=3)
            .prop_map(|seps| seps.into_iter().collect::<String>())
    }

    /// An optional separator run, for path ends
    pub fn edge_separators() -> impl Strategy<Value = String> {
        prop_oneof![Just(String::new()), Self::separator_run()]
    }

    /// Interleave `segments` with random separator runs
    fn kinky_join(segments: Vec<String>) -> impl Strategy<Value = String> {
        let count = segments.len();
        (
            Self::edge_separators(),
            prop::collection::vec(Self::separator_run(), count.saturating_sub(1)),
            Self::edge_separators(),
        )
            .prop_map(move |(lead, seps, trail)| {
                let mut path = lead;
                for (i, segment) in segments.iter().enumerate() {
                    if i > 0 {
                        path.push_str(&seps[i - 1]);
                    }
                    path.push_str(segment);
                }
                path.push_str(&trail);
                path
            })
    }

    /// Non-empty kinky relative path ending in a file or directory
    pub fn kinky_path() -> impl Strategy<Value = String> {
        (prop::collection::vec(Self::directory_name(), 0..=3), Self::leaf())
            .prop_flat_map(|(mut segments, leaf)| {
                segments.push(leaf);
                Self::kinky_join(segments)
            })
    }

    /// Kinky directory path of one to three segments
    pub fn relative_dir() -> impl Strategy<Value = String> {
        prop::collection::vec(Self::directory_name(), 1..=3).prop_flat_map(Self::kinky_join)
    }

    /// Base argument: empty, relative, or already inside `/home/user`
    pub fn kinky_base() -> impl Strategy<Value = String> {
        prop_oneof![
            1 => Just(String::new()),
            2 => Self::relative_dir(),
            1 => Self::relative_dir().prop_map(|dir| format!("/home/user/{dir}")),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn kinky_paths_are_not_empty(path in PathGenerators::kinky_path()) {
            prop_assert!(path.chars().any(|c| c != '/' && c != '\\'));
        }

        #[test]
        fn separator_runs_only_hold_separators(run in PathGenerators::separator_run()) {
            prop_assert!(!run.is_empty());
            prop_assert!(run.chars().all(|c| c == '/' || c == '\\'));
        }

        #[test]
        fn generators_dont_panic(
            _base in PathGenerators::kinky_base()
        ) {
            // Only ensures the generators themselves never panic
        }
    }
}
