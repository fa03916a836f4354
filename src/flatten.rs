//! The thread flattener: one raw thread in, an ordered list of normalized
//! question/answer records out. Pure, infallible, no I/O.

use crate::record::{QaRecord, RecordMeta};
use crate::thread::RawThread;

/// Fallback root identifier for threads persisted without an `id`.
pub const ROOT_FALLBACK_ID: &str = "original";

/// Flatten one thread into `[root, follow_ups...]`.
///
/// The root record carries the thread's canonical title/question (first
/// history revision with a non-empty subject) and, as its answer, the first
/// instructor answer's initial content. Every remaining child becomes a
/// follow-up record in input order.
///
/// The list is returned unfiltered; dropping empty records is the caller's
/// policy (see [`QaRecord::is_substantive`]).
pub fn flatten(thread: &RawThread) -> Vec<QaRecord> {
    let (subject, question) = match thread.canonical_revision() {
        Some(rev) => (
            rev.subject.clone().unwrap_or_default(),
            rev.content.clone().unwrap_or_default(),
        ),
        None => (String::new(), String::new()),
    };

    let root_id = thread
        .id
        .clone()
        .unwrap_or_else(|| ROOT_FALLBACK_ID.to_string());

    // The first instructor answer is folded into the root record. Its text
    // is the first revision's content, which is not necessarily the revision
    // the root's subject came from.
    let answer = thread
        .children
        .iter()
        .find(|c| c.is_instructor_answer())
        .and_then(|c| c.history.first())
        .and_then(|rev| rev.as_ref())
        .and_then(|rev| rev.content.clone());

    let mut records = vec![QaRecord {
        question_id: root_id.clone(),
        subject: Some(subject),
        question,
        answer,
        metadata: RecordMeta {
            is_follow_up: false,
            upvotes: thread.num_favorites,
            original_question_id: None,
        },
    }];

    for child in &thread.children {
        if child.is_instructor_answer() {
            continue;
        }

        // Follow-up question and answer both come from `subject` fields:
        // the question from the child itself, the answer from its first own
        // child. Neither reads `content`.
        let question = child.subject.clone().unwrap_or_default();
        let answer = child
            .children
            .first()
            .map(|gc| gc.subject.clone().unwrap_or_default());

        // Fallback IDs are the record's position in the output list at the
        // time it is appended (root holds position 0). Monotone per thread,
        // so synthesized IDs cannot collide.
        let question_id = child
            .id
            .clone()
            .unwrap_or_else(|| format!("followup_{}", records.len()));

        records.push(QaRecord {
            question_id,
            subject: None,
            question,
            answer,
            metadata: RecordMeta {
                is_follow_up: true,
                upvotes: child.num_favorites,
                original_question_id: Some(root_id.clone()),
            },
        });
    }

    records
}
