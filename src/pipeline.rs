use crate::config::CorpusOptions;
use crate::course::Course;
use crate::util::init_tracing_once;
use crate::walker::{transform_course, TransformReport};
use anyhow::Result;
use std::path::Path;

/// Entry point for corpus transformation, configured through builder
/// chaining. Holds no process-wide state: everything the walker needs is
/// injected here.
#[derive(Clone)]
pub struct QaEtl {
    pub(crate) opts: CorpusOptions,
}

impl QaEtl {
    pub fn new() -> Self {
        Self { opts: CorpusOptions::default() }
    }

    // -------- Builder methods --------
    pub fn data_root(mut self, dir: impl AsRef<Path>) -> Self { self.opts = self.opts.with_data_root(dir); self }
    pub fn transformed_root(mut self, dir: impl AsRef<Path>) -> Self { self.opts = self.opts.with_transformed_root(dir); self }
    pub fn progress(mut self, yes: bool) -> Self { self.opts = self.opts.with_progress(yes); self }
    pub fn progress_label(mut self, label: impl Into<String>) -> Self { self.opts = self.opts.with_progress_label(label); self }
    pub fn pretty(mut self, yes: bool) -> Self { self.opts = self.opts.with_pretty(yes); self }

    // -------- Operations --------

    /// Flatten every stored raw thread for `course` and persist the
    /// surviving records under the transformed root. Destructive per
    /// course: prior outputs are cleared before writing.
    pub fn transform(&self, course: &Course) -> Result<TransformReport> {
        init_tracing_once();
        transform_course(&self.opts, course)
    }
}

impl Default for QaEtl {
    fn default() -> Self {
        Self::new()
    }
}
