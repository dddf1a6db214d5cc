//! Skill Loader
//!
//! Discovers skill sources on disk and parses them into records. Each
//! subdirectory of the skills directory containing a `SKILL.md` yields one
//! source; loose `.md` files directly in the directory are accepted too.
//!
//! Malformed sources (unreadable, no frontmatter, missing name or
//! description) are skipped silently; the registry contract treats them as
//! load-time omissions, not errors.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::skills::format::parse_skill_md;
use crate::types::SkillRecord;

/// Manifest file name looked up inside each skill directory.
const SKILL_MANIFEST: &str = "SKILL.md";

/// Scan `skills_dir` and return all successfully parsed skill records, in
/// directory-listing order.
///
/// A missing directory is a hard error (the CLI cannot do anything useful
/// without one); individual bad sources are not.
pub fn load_skills(skills_dir: &str) -> Result<Vec<SkillRecord>> {
    let dir = Path::new(skills_dir);
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read skills directory '{}'", skills_dir))?;

    let mut records: Vec<SkillRecord> = Vec::new();

    for entry in entries.flatten() {
        let path = entry.path();

        let source = if path.is_dir() {
            let manifest = path.join(SKILL_MANIFEST);
            if !manifest.is_file() {
                debug!(dir = %path.display(), "skipping directory without SKILL.md");
                continue;
            }
            manifest
        } else if path.extension().and_then(|e| e.to_str()) == Some("md") {
            path
        } else {
            continue;
        };

        if let Some(record) = parse_source(&source) {
            records.push(record);
        }
    }

    debug!(count = records.len(), dir = skills_dir, "loaded skill records");
    Ok(records)
}

/// Read and parse one skill source file. Returns `None` on any failure so
/// the scan continues with the remaining sources.
fn parse_source(path: &PathBuf) -> Option<SkillRecord> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!(file = %path.display(), error = %e, "unreadable skill source");
            return None;
        }
    };

    match parse_skill_md(&content) {
        Ok(record) => Some(record),
        Err(e) => {
            debug!(file = %path.display(), error = %e, "skipping malformed skill source");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_skill(dir: &Path, name: &str, frontmatter: &str) {
        let skill_dir = dir.join(name);
        fs::create_dir_all(&skill_dir).unwrap();
        fs::write(skill_dir.join("SKILL.md"), frontmatter).unwrap();
    }

    #[test]
    fn test_load_skill_directories() {
        let tmp = tempfile::tempdir().unwrap();
        write_skill(
            tmp.path(),
            "alpha",
            "---\nname: alpha\ndescription: First skill\n---\n",
        );
        write_skill(
            tmp.path(),
            "beta",
            "---\nname: beta\ndescription: Second skill\n---\n",
        );

        let mut names: Vec<String> = load_skills(tmp.path().to_str().unwrap())
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_loose_md_files_are_accepted() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join("loose.md"),
            "---\nname: loose\ndescription: A loose skill file\n---\n",
        )
        .unwrap();

        let records = load_skills(tmp.path().to_str().unwrap()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "loose");
    }

    #[test]
    fn test_malformed_sources_are_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        write_skill(tmp.path(), "good", "---\nname: good\ndescription: ok\n---\n");
        write_skill(tmp.path(), "no-name", "---\ndescription: anonymous\n---\n");
        write_skill(tmp.path(), "no-frontmatter", "# just markdown\n");
        // Directory without a manifest at all.
        fs::create_dir_all(tmp.path().join("empty")).unwrap();

        let records = load_skills(tmp.path().to_str().unwrap()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "good");
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        assert!(load_skills("/nonexistent/skilldep-test-dir").is_err());
    }
}
