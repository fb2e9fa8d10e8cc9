//! Include-pattern filtering for sync passes

use std::path::Path;

/// Base names that are never synced, regardless of patterns.
const JUNK_NAMES: &[&str] = &[".DS_Store", "Thumbs.db", "desktop.ini"];

/// Decides which relative paths participate in a sync pass.
///
/// Inclusion is opt-in: a path is synced only if one of the configured
/// patterns matches it. Patterns are checked in order and the first match
/// wins. OS junk files are rejected before any pattern is consulted.
#[derive(Debug, Clone)]
pub struct Filter {
    include_patterns: Vec<String>,
}

impl Filter {
    /// Create a Filter from an ordered list of include patterns.
    pub fn new(include_patterns: Vec<String>) -> Self {
        Self { include_patterns }
    }

    /// Check whether a path relative to the sync root should be included.
    ///
    /// Supports two pattern forms:
    /// - Wildcards (`*.json`): glob-matched against the path's base name only
    /// - Literal names (`projects`): match the path itself or anything
    ///   nested under it, with a path-separator boundary (`debug` matches
    ///   `debug/foo.log` but never `debugger/foo`)
    ///
    /// Paths whose base name is a known OS junk file (`.DS_Store`,
    /// `Thumbs.db`, `desktop.ini`) are always excluded.
    pub fn should_include(&self, rel_path: &Path) -> bool {
        if let Some(name) = rel_path.file_name().and_then(|n| n.to_str()) {
            if JUNK_NAMES.contains(&name) {
                return false;
            }
        }

        self.include_patterns
            .iter()
            .any(|pattern| matches_pattern(pattern, rel_path))
    }
}

/// Check if a relative path matches a single pattern.
fn matches_pattern(pattern: &str, rel_path: &Path) -> bool {
    if pattern.contains(['*', '?', '[']) {
        // Wildcard pattern: match against the base name only.
        // A malformed glob never matches; filtering must not abort a walk.
        let Some(name) = rel_path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        match glob::Pattern::new(pattern) {
            Ok(glob) => glob.matches(name),
            Err(_) => false,
        }
    } else {
        // Literal directory/file name: strip_prefix only succeeds on whole
        // path components, which gives the separator-boundary semantics.
        rel_path.strip_prefix(pattern).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(patterns: &[&str]) -> Filter {
        Filter::new(patterns.iter().map(|p| p.to_string()).collect())
    }

    #[test]
    fn test_literal_pattern_matches_dir_and_nested() {
        let f = filter(&["projects", "history.jsonl"]);

        assert!(f.should_include(Path::new("projects")));
        assert!(f.should_include(Path::new("projects/session.jsonl")));
        assert!(f.should_include(Path::new("projects/a/b/c.txt")));
        assert!(f.should_include(Path::new("history.jsonl")));
    }

    #[test]
    fn test_literal_pattern_requires_separator_boundary() {
        let f = filter(&["debug"]);

        assert!(f.should_include(Path::new("debug")));
        assert!(f.should_include(Path::new("debug/foo.log")));
        // Shared prefix without a separator must not match
        assert!(!f.should_include(Path::new("debugger/foo")));
        assert!(!f.should_include(Path::new("debugging.log")));
    }

    #[test]
    fn test_no_match_is_excluded() {
        let f = filter(&["projects"]);

        assert!(!f.should_include(Path::new("settings.json")));
        assert!(!f.should_include(Path::new("cache/data")));
    }

    #[test]
    fn test_empty_patterns_exclude_everything() {
        let f = filter(&[]);
        assert!(!f.should_include(Path::new("anything")));
    }

    #[test]
    fn test_wildcard_matches_base_name_only() {
        let f = filter(&["*.json"]);

        assert!(f.should_include(Path::new("settings.json")));
        assert!(f.should_include(Path::new("config/app.json")));
        // .jsonl is not .json
        assert!(!f.should_include(Path::new("history.jsonl")));
        assert!(!f.should_include(Path::new("projects/session.jsonl")));
    }

    #[test]
    fn test_junk_names_always_excluded() {
        let f = filter(&["*", ".DS_Store", "projects"]);

        assert!(!f.should_include(Path::new(".DS_Store")));
        assert!(!f.should_include(Path::new("projects/.DS_Store")));
        assert!(!f.should_include(Path::new("Thumbs.db")));
        assert!(!f.should_include(Path::new("pics/Thumbs.db")));
        assert!(!f.should_include(Path::new("desktop.ini")));
    }

    #[test]
    fn test_malformed_glob_never_matches() {
        // "[" is an unterminated character class
        let f = filter(&["[", "history.jsonl"]);

        assert!(!f.should_include(Path::new("anything.txt")));
        // Later patterns still apply
        assert!(f.should_include(Path::new("history.jsonl")));
    }

    #[test]
    fn test_first_match_wins_ordering() {
        let f = filter(&["*.jsonl", "projects"]);

        assert!(f.should_include(Path::new("projects/session.jsonl")));
        assert!(f.should_include(Path::new("projects/readme.md")));
    }

    #[test]
    fn test_negation_syntax_is_not_special() {
        // No negation layer in include mode: "!history.jsonl" is just a
        // literal name that matches nothing real
        let f = filter(&["!history.jsonl"]);

        assert!(!f.should_include(Path::new("history.jsonl")));
        assert!(f.should_include(Path::new("!history.jsonl")));
    }
}
