//! Typed model for raw discussion threads as persisted by the fetcher.
//!
//! The upstream platform's JSON is loosely shaped: any field may be missing,
//! history entries may be `null`, and child posts reuse the thread shape.
//! We decode once at the corpus boundary into this model; after that, no
//! code needs to guess at defaults.

use serde::Deserialize;

/// Sentinel `type` tag marking a reply as the authoritative instructor answer.
pub const INSTRUCTOR_ANSWER_TYPE: &str = "i_answer";

/// One revision in a post's edit history.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Revision {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// A raw discussion thread. Child posts are structurally identical to
/// threads, so the type is recursive; in practice nesting is one level of
/// children plus their own immediate children.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawThread {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    /// Edit history, newest-first upstream. Entries may be `null`.
    #[serde(default)]
    pub history: Vec<Option<Revision>>,
    #[serde(default)]
    pub children: Vec<RawThread>,
    /// Upvote count.
    #[serde(default)]
    pub num_favorites: i64,
}

impl RawThread {
    /// The first revision with a non-empty subject: the canonical source for
    /// a thread's title and question text.
    pub fn canonical_revision(&self) -> Option<&Revision> {
        self.history
            .iter()
            .flatten()
            .find(|rev| rev.subject.as_deref().map_or(false, |s| !s.is_empty()))
    }

    pub fn is_instructor_answer(&self) -> bool {
        self.kind.as_deref() == Some(INSTRUCTOR_ANSWER_TYPE)
    }
}
