//! File filtering and discovery with glob pattern support.
//!
//! This module discovers text files under directories, with support for
//! include/exclude glob patterns.

use std::path::{Path, PathBuf};

use glob::Pattern;
use log::{debug, warn};
use walkdir::WalkDir;

use crate::error::TextstatError;
use crate::Result;

/// Configuration for file filtering.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Glob patterns to include (if empty, include every file)
    pub include: Vec<Pattern>,
    /// Glob patterns to exclude
    pub exclude: Vec<Pattern>,
}

impl FilterConfig {
    /// Create a new empty filter config (includes every file).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an include pattern.
    pub fn include(mut self, pattern: &str) -> Result<Self> {
        self.include.push(compile(pattern)?);
        Ok(self)
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        self.exclude.push(compile(pattern)?);
        Ok(self)
    }

    /// Add multiple include patterns.
    pub fn include_many<S: AsRef<str>>(mut self, patterns: &[S]) -> Result<Self> {
        for pattern in patterns {
            self = self.include(pattern.as_ref())?;
        }
        Ok(self)
    }

    /// Add multiple exclude patterns.
    pub fn exclude_many<S: AsRef<str>>(mut self, patterns: &[S]) -> Result<Self> {
        for pattern in patterns {
            self = self.exclude(pattern.as_ref())?;
        }
        Ok(self)
    }

    /// Check if a path matches the filter criteria.
    ///
    /// A path matches if it matches at least one include pattern (or include
    /// is empty) and no exclude pattern.
    pub fn matches(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        if self.exclude.iter().any(|p| p.matches(&path_str)) {
            return false;
        }

        self.include.is_empty() || self.include.iter().any(|p| p.matches(&path_str))
    }
}

fn compile(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|e| TextstatError::InvalidGlob {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

/// Check if a directory should be skipped during traversal.
fn should_skip_dir(name: &str) -> bool {
    // Skip hidden directories and target/
    name.starts_with('.') || name == "target"
}

/// Discover files under a directory.
///
/// When `root` is itself a file it is returned as is, without consulting
/// the filter.
pub fn discover_files(root: impl AsRef<Path>, filter: &FilterConfig) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(TextstatError::PathNotFound(root.to_path_buf()));
    }

    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root).follow_links(true).into_iter();

    for entry in walker.filter_entry(|e| {
        // Always include the root directory
        if e.depth() == 0 {
            return true;
        }
        if e.file_type().is_dir() {
            let name = e.file_name().to_str().unwrap_or("");
            return !should_skip_dir(name);
        }
        true
    }) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("skipping unreadable entry: {e}");
                continue;
            }
        };

        let path = entry.path();
        if path.is_file() && filter.matches(path) {
            files.push(path.to_path_buf());
        }
    }

    // Sort for deterministic output
    files.sort();
    debug!("discovered {} files under {}", files.len(), root.display());

    Ok(files)
}

/// Discover files across several roots, each a file or a directory.
pub fn discover_paths<P: AsRef<Path>>(roots: &[P], filter: &FilterConfig) -> Result<Vec<PathBuf>> {
    let mut all_files = Vec::new();

    for root in roots {
        all_files.extend(discover_files(root, filter)?);
    }

    // Remove duplicates and sort
    all_files.sort();
    all_files.dedup();

    Ok(all_files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn create_test_files(dir: &Path) {
        fs::create_dir_all(dir.join("docs/guide")).unwrap();
        fs::create_dir_all(dir.join("notes")).unwrap();
        fs::create_dir_all(dir.join("target/debug")).unwrap();
        fs::create_dir_all(dir.join(".hidden")).unwrap();

        fs::write(dir.join("README.md"), "# Readme").unwrap();
        fs::write(dir.join("docs/intro.md"), "Intro").unwrap();
        fs::write(dir.join("docs/guide/setup.txt"), "Setup steps").unwrap();
        fs::write(dir.join("notes/todo.txt"), "buy milk").unwrap();
        fs::write(dir.join("target/debug/out.txt"), "generated").unwrap();
        fs::write(dir.join(".hidden/secret.txt"), "hidden").unwrap();
    }

    fn names(files: &[PathBuf], root: &Path) -> Vec<String> {
        files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_discover_all_files() {
        let temp = tempdir().unwrap();
        create_test_files(temp.path());

        let files = discover_files(temp.path(), &FilterConfig::new()).unwrap();
        assert_eq!(
            names(&files, temp.path()),
            vec![
                "README.md",
                "docs/guide/setup.txt",
                "docs/intro.md",
                "notes/todo.txt"
            ]
        );
    }

    #[test]
    fn test_include_pattern() {
        let temp = tempdir().unwrap();
        create_test_files(temp.path());

        let filter = FilterConfig::new().include("**/*.md").unwrap();
        let files = discover_files(temp.path(), &filter).unwrap();
        assert_eq!(names(&files, temp.path()), vec!["README.md", "docs/intro.md"]);
    }

    #[test]
    fn test_exclude_pattern() {
        let temp = tempdir().unwrap();
        create_test_files(temp.path());

        let filter = FilterConfig::new().exclude("**/docs/**").unwrap();
        let files = discover_files(temp.path(), &filter).unwrap();
        assert_eq!(names(&files, temp.path()), vec!["README.md", "notes/todo.txt"]);
    }

    #[test]
    fn test_include_and_exclude() {
        let temp = tempdir().unwrap();
        create_test_files(temp.path());

        let filter = FilterConfig::new()
            .include_many(&["**/*.txt"])
            .unwrap()
            .exclude_many(&["**/guide/**"])
            .unwrap();
        let files = discover_files(temp.path(), &filter).unwrap();
        assert_eq!(names(&files, temp.path()), vec!["notes/todo.txt"]);
    }

    #[test]
    fn test_explicit_file_bypasses_filter() {
        let temp = tempdir().unwrap();
        create_test_files(temp.path());

        let filter = FilterConfig::new().include("**/*.md").unwrap();
        let file = temp.path().join("notes/todo.txt");
        let files = discover_files(&file, &filter).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_invalid_glob() {
        let result = FilterConfig::new().include("[invalid");
        assert!(matches!(result, Err(TextstatError::InvalidGlob { .. })));
    }

    #[test]
    fn test_nonexistent_path() {
        let result = discover_files("/nonexistent/path/for/textstat", &FilterConfig::new());
        assert!(matches!(result, Err(TextstatError::PathNotFound(_))));
    }

    #[test]
    fn test_discover_paths_dedup() {
        let temp = tempdir().unwrap();
        create_test_files(temp.path());

        let notes = temp.path().join("notes");
        let todo = notes.join("todo.txt");
        let files = discover_paths(&[notes, todo.clone()], &FilterConfig::new()).unwrap();
        assert_eq!(files, vec![todo]);
    }
}
