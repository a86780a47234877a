//! Fixture discovery
//!
//! Finds fixture files directly inside the fixtures directory whose names
//! match a glob pattern.

use anyhow::{anyhow, Context, Result};
use glob::{glob, Pattern};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Find files in `dir` (non-recursive) whose names match `pattern`
///
/// Results are sorted by path so fixtures are always processed in the same
/// order, which keeps the substitute sequence reproducible.
pub fn find_fixtures(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let dir_str = dir
        .to_str()
        .ok_or_else(|| anyhow!("Fixture directory is not valid UTF-8: {}", dir.display()))?;
    let full_pattern = format!("{}/{}", Pattern::escape(dir_str), pattern);

    let mut files = Vec::new();
    for entry in glob(&full_pattern)
        .with_context(|| format!("Failed to read glob pattern: {full_pattern}"))?
    {
        match entry {
            Ok(path) => {
                if path.is_file() {
                    files.push(path);
                } else {
                    debug!(path = %path.display(), "Skipping non-file match");
                }
            }
            Err(e) => {
                warn!(error = %e, "Error accessing path");
            }
        }
    }

    files.sort();
    debug!(pattern = %full_pattern, count = files.len(), "Discovered fixtures");

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_find_fixtures_matches_pattern_sorted() {
        let dir = tempdir().unwrap();
        for name in [
            "curriculum_b.html",
            "curriculum_a.html",
            "other.html",
            "curriculum_c.txt",
            "expected_output_a.json",
        ] {
            fs::write(dir.path().join(name), "x").unwrap();
        }

        let files = find_fixtures(dir.path(), "curriculum_*.html").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["curriculum_a.html", "curriculum_b.html"]);
    }

    #[test]
    fn test_find_fixtures_skips_directories_and_subdirectories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("curriculum_dir.html")).unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/curriculum_x.html"), "x").unwrap();

        let files = find_fixtures(dir.path(), "curriculum_*.html").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_find_fixtures_escapes_directory_metacharacters() {
        let parent = tempdir().unwrap();
        let dir = parent.path().join("fixtures[1]");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("expected_output_a.json"), "{}").unwrap();

        let files = find_fixtures(&dir, "expected_output_*.json").unwrap();
        assert_eq!(files.len(), 1);
    }
}
