//! Corpus discovery: course-instance directories and their post files.
//!
//! The fetcher lays raw threads out as
//! `<data_root>/<tidy_course>/<instance>/<post>.json`. Everything here
//! returns stable (lexicographic) orderings so output naming stays
//! deterministic across runs.

use anyhow::{bail, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One raw post file queued for transformation.
#[derive(Clone, Debug)]
pub struct PostFile {
    pub instance: String,
    /// File stem, reused as the base of output file names.
    pub stem: String,
    pub path: PathBuf,
}

/// Course-instance directories under a course root, sorted.
pub fn discover_instances(course_dir: &Path) -> Result<Vec<PathBuf>> {
    if !course_dir.is_dir() {
        bail!(
            "course data not found at {} (run the fetcher first)",
            course_dir.display()
        );
    }
    let mut dirs: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(course_dir).min_depth(1).max_depth(1) {
        if let Ok(ent) = entry {
            if ent.file_type().is_dir() {
                dirs.push(ent.path().to_path_buf());
            }
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Post files in one instance directory, keyed by file stem. Non-JSON
/// entries are ignored.
pub fn discover_posts(instance_dir: &Path) -> BTreeMap<String, PathBuf> {
    let mut map = BTreeMap::new();
    for entry in WalkDir::new(instance_dir).min_depth(1).max_depth(1) {
        if let Ok(ent) = entry {
            if !ent.file_type().is_file() {
                continue;
            }
            let path = ent.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                map.insert(stem.to_string(), path.to_path_buf());
            }
        }
    }
    map
}

/// Full walk plan for a course: every post file, grouped by instance,
/// instances and files both in stable order.
pub fn plan_posts(course_dir: &Path) -> Result<Vec<PostFile>> {
    let mut jobs = Vec::new();
    for dir in discover_instances(course_dir)? {
        let instance = dir
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        for (stem, path) in discover_posts(&dir) {
            jobs.push(PostFile {
                instance: instance.clone(),
                stem,
                path,
            });
        }
    }
    Ok(jobs)
}
