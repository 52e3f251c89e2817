//! Ignore-set configuration for the tree walk.
//!
//! The ignore list is a fixed set of literal names compared against each
//! directory entry's base name, at every depth. It is injected into the
//! renderer rather than read as a module global, so embedders and tests can
//! substitute their own set.

use std::collections::HashSet;
use std::ffi::OsStr;

/// Name of the file the rendered tree is written to.
pub const OUTPUT_FILENAME: &str = "project_structure.txt";

/// Names excluded from traversal and output at every depth.
///
/// Grouped by what they are:
/// - version control: `.git`
/// - editor/IDE settings: `.vscode`, `.idea`
/// - bytecode caches: `__pycache__`
/// - dependency directories: `node_modules`
/// - build output: `target`, `build`, `dist`
/// - OS metadata: `.DS_Store`
/// - virtual environments: `venv`, `.venv`
/// - environment files: `.env`
/// - the tool's own artifacts: `dirmap`, `project_structure.txt`
pub const DEFAULT_IGNORES: &[&str] = &[
    ".git",
    ".vscode",
    ".idea",
    "__pycache__",
    "node_modules",
    "target",
    "build",
    "dist",
    ".DS_Store",
    "venv",
    ".venv",
    ".env",
    "dirmap",
    OUTPUT_FILENAME,
];

/// Set of exact names to skip during traversal.
///
/// Matching is whole-name string equality against the entry's base name
/// only. No globs, no case folding, no path-based matching.
#[derive(Debug, Clone)]
pub struct IgnoreSet {
    names: HashSet<String>,
}

impl IgnoreSet {
    /// Empty set - nothing is skipped.
    pub fn empty() -> Self {
        Self {
            names: HashSet::new(),
        }
    }

    /// Whether `name` is excluded.
    ///
    /// A name that is not valid UTF-8 never matches: every entry in the set
    /// is a plain string, so such a name cannot equal any of them.
    pub fn contains(&self, name: &OsStr) -> bool {
        name.to_str().map_or(false, |n| self.names.contains(n))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for IgnoreSet {
    /// The fixed tool configuration ([`DEFAULT_IGNORES`]).
    fn default() -> Self {
        DEFAULT_IGNORES.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_membership() {
        let ignores = IgnoreSet::default();
        assert!(ignores.contains(OsStr::new(".git")));
        assert!(ignores.contains(OsStr::new("node_modules")));
        assert!(ignores.contains(OsStr::new("__pycache__")));
        assert!(ignores.contains(OsStr::new(".DS_Store")));
        assert!(ignores.contains(OsStr::new(OUTPUT_FILENAME)));

        assert!(!ignores.contains(OsStr::new("src")));
        assert!(!ignores.contains(OsStr::new("main.rs")));
    }

    #[test]
    fn test_exact_match_only() {
        let ignores = IgnoreSet::default();
        // Substrings, extensions and case variants of ignored names pass.
        assert!(!ignores.contains(OsStr::new(".gitignore")));
        assert!(!ignores.contains(OsStr::new("mybuild")));
        assert!(!ignores.contains(OsStr::new("build.rs")));
        assert!(!ignores.contains(OsStr::new("BUILD")));
        assert!(!ignores.contains(OsStr::new("node_modules_old")));
    }

    #[test]
    fn test_custom_set() {
        let ignores: IgnoreSet = ["tmp", "logs"].into_iter().collect();
        assert_eq!(ignores.len(), 2);
        assert!(ignores.contains(OsStr::new("tmp")));
        assert!(ignores.contains(OsStr::new("logs")));
        assert!(!ignores.contains(OsStr::new(".git")));
    }

    #[test]
    fn test_empty_set() {
        let ignores = IgnoreSet::empty();
        assert!(ignores.is_empty());
        assert!(!ignores.contains(OsStr::new(".git")));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_never_matches() {
        use std::os::unix::ffi::OsStrExt;
        let ignores = IgnoreSet::default();
        assert!(!ignores.contains(OsStr::from_bytes(b".gi\xff")));
    }
}
