use std::path::{Path, PathBuf};

/// User-facing options with sensible defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct CorpusOptions {
    pub data_root: PathBuf,        // raw threads, one JSON file per post
    pub transformed_root: PathBuf, // normalized records, parallel layout
    pub progress: bool,            // show progress bar
    pub progress_label: Option<String>, // optional label for progress bar
    pub pretty: bool,              // pretty-print output JSON documents
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self {
            data_root: PathBuf::from("./data"),
            transformed_root: PathBuf::from("./transformed_data"),
            progress: true,
            progress_label: None,
            pretty: false,
        }
    }
}

impl CorpusOptions {
    pub fn with_data_root(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_root = dir.as_ref().to_path_buf();
        self
    }
    pub fn with_transformed_root(mut self, dir: impl AsRef<Path>) -> Self {
        self.transformed_root = dir.as_ref().to_path_buf();
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }
    pub fn with_progress_label(mut self, label: impl Into<String>) -> Self {
        self.progress_label = Some(label.into());
        self
    }
    pub fn with_pretty(mut self, yes: bool) -> Self {
        self.pretty = yes;
        self
    }
}
