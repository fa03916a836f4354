mod config;
mod course;
mod flatten;
mod paths;
mod pipeline;
mod progress;
mod record;
mod thread;
mod util;
mod walker;

pub use crate::config::CorpusOptions;
pub use crate::course::Course;
pub use crate::flatten::{flatten, ROOT_FALLBACK_ID};
pub use crate::pipeline::QaEtl;
pub use crate::record::{QaRecord, RecordMeta};
pub use crate::thread::{RawThread, Revision, INSTRUCTOR_ANSWER_TYPE};
pub use crate::walker::TransformReport;

// Expose discovery types for callers that want to drive their own walk.
pub use crate::paths::{discover_instances, discover_posts, plan_posts, PostFile};

// Expose progress helper so binaries can label their own walks.
pub use crate::progress::make_count_progress;

// Export robust file ops from util so binaries can import from crate root.
pub use crate::util::remove_with_backoff;
