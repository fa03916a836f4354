//! Output model: flat question/answer records, one JSON document each.

use serde::Serialize;

/// Metadata block attached to every normalized record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecordMeta {
    pub is_follow_up: bool,
    pub upvotes: i64,
    /// Root record's `question_id`; only present on follow-ups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_question_id: Option<String>,
}

/// A flattened question/answer record.
///
/// `answer` is always serialized, as JSON `null` when absent: consumers must
/// be able to tell "no answer" apart from an empty answer string. `subject`
/// only appears on root records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QaRecord {
    pub question_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub question: String,
    pub answer: Option<String>,
    pub metadata: RecordMeta,
}

impl QaRecord {
    /// Emptiness policy applied by the walker before persisting: a record
    /// survives only with a non-empty question and a present, non-empty
    /// answer. The flattener itself never filters.
    pub fn is_substantive(&self) -> bool {
        !self.question.is_empty() && self.answer.as_deref().map_or(false, |a| !a.is_empty())
    }
}
