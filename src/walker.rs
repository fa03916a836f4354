//! The corpus walker: applies the flattener to every stored raw thread for a
//! course and persists the surviving records in a parallel directory layout.
//!
//! Output naming is `<post-stem>-<index>.json` where `index` is the record's
//! position in the flattener's output (0 = root). The index survives
//! filtering: a surviving follow-up keeps its flatten position even when the
//! records before it were dropped.

use crate::config::CorpusOptions;
use crate::course::Course;
use crate::flatten::flatten;
use crate::paths::plan_posts;
use crate::progress::make_count_progress;
use crate::thread::RawThread;
use crate::util::remove_with_backoff;
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Outcome summary for one transform run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransformReport {
    /// Thread files successfully decoded and flattened.
    pub threads: usize,
    pub records_written: usize,
    /// Records returned by the flattener but dropped by the emptiness filter.
    pub records_filtered: usize,
    /// Unreadable or undecodable thread files, skipped.
    pub files_skipped: usize,
}

pub(crate) fn transform_course(opts: &CorpusOptions, course: &Course) -> Result<TransformReport> {
    let course_dir = opts.data_root.join(course.tidy());
    let out_root = opts.transformed_root.join(course.tidy());

    // Non-incremental: prior outputs are cleared first so a rerun can never
    // mix records from different corpus versions.
    clear_dir(&out_root);

    let posts = plan_posts(&course_dir)?;
    if posts.is_empty() {
        tracing::warn!("no raw posts found under {}", course_dir.display());
    } else {
        tracing::info!("planned {} post files for transformation", posts.len());
    }

    let pb = if opts.progress {
        let label = opts.progress_label.as_deref().unwrap_or("Transforming threads");
        Some(make_count_progress(posts.len() as u64, label))
    } else {
        None
    };

    let mut report = TransformReport::default();
    for post in &posts {
        if let Some(pb) = &pb {
            pb.inc(1);
        }

        // One bad input document must not abort the whole corpus.
        let thread = match read_thread(&post.path) {
            Ok(t) => t,
            Err(e) => {
                tracing::warn!("skipping {}: {e:#}", post.path.display());
                report.files_skipped += 1;
                continue;
            }
        };
        report.threads += 1;

        let out_dir = out_root.join(&post.instance);
        fs::create_dir_all(&out_dir).with_context(|| format!("create {}", out_dir.display()))?;

        for (index, record) in flatten(&thread).iter().enumerate() {
            if !record.is_substantive() {
                report.records_filtered += 1;
                continue;
            }
            let out_path = out_dir.join(format!("{}-{}.json", post.stem, index));
            let body = if opts.pretty {
                serde_json::to_string_pretty(record)?
            } else {
                serde_json::to_string(record)?
            };
            fs::write(&out_path, body).with_context(|| format!("write {}", out_path.display()))?;
            report.records_written += 1;
        }
        tracing::debug!("transformed {}/{}", post.instance, post.stem);
    }

    if let Some(pb) = &pb {
        pb.finish_with_message("transform complete");
    }
    tracing::info!(
        "wrote {} records ({} filtered, {} files skipped)",
        report.records_written,
        report.records_filtered,
        report.files_skipped
    );
    Ok(report)
}

fn read_thread(path: &Path) -> Result<RawThread> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("decode {}", path.display()))
}

/// Best-effort recursive clear; `dir` itself is left in place. Every entry
/// is attempted; a failed deletion is logged and does not stop the rest of
/// the cleanup.
fn clear_dir(dir: &Path) {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return,
        Err(e) => {
            tracing::warn!("cannot list {} for cleanup: {e}", dir.display());
            return;
        }
    };
    for entry in entries {
        if let Ok(entry) = entry {
            let path = entry.path();
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            let res = if is_dir {
                clear_dir(&path);
                fs::remove_dir(&path).map_err(anyhow::Error::from)
            } else {
                remove_with_backoff(&path, 8, 25)
            };
            if let Err(e) = res {
                tracing::warn!("cleanup failed for {}: {e:#}", path.display());
            }
        }
    }
}
