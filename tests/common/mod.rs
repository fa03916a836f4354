use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Raw-thread root for a base dir: `<base>/data`.
pub fn data_root(base: &Path) -> PathBuf {
    base.join("data")
}

/// Transformed-record root for a base dir: `<base>/transformed_data`.
pub fn transformed_root(base: &Path) -> PathBuf {
    base.join("transformed_data")
}

/// Write one raw thread document at `<base>/data/<course>/<instance>/<name>.json`.
pub fn write_thread(base: &Path, course: &str, instance: &str, name: &str, thread: &Value) {
    let dir = data_root(base).join(course).join(instance);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{name}.json")), thread.to_string()).unwrap();
}

/// Read a JSON document back as a `serde_json::Value`.
pub fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

/// File names in a directory, sorted (empty if the directory is missing).
pub fn list_sorted(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = match fs::read_dir(dir) {
        Ok(entries) => entries
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect(),
        Err(_) => Vec::new(),
    };
    names.sort();
    names
}

/// Build a tiny corpus for "CPSC 213" (tidy form `cpsc213`), one course
/// instance `abc123` with two threads:
/// - `101.json`: answered question with two follow-ups. The first follow-up
///   has a reply (survives the filter); the second is empty (filtered).
/// - `102.json`: unanswered question, no children (root filtered: no answer).
///
/// Expected surviving outputs: `101-0.json` (root) and `101-1.json`
/// (first follow-up).
pub fn make_corpus_basic() -> PathBuf {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.into_path();

    write_thread(
        &base,
        "cpsc213",
        "abc123",
        "101",
        &json!({
            "id": "q101",
            "num_favorites": 3,
            "history": [
                {"subject": "HW1 deadline", "content": "When is hw1 due?"}
            ],
            "children": [
                {
                    "type": "i_answer",
                    "history": [{"subject": "", "content": "Friday at midnight"}]
                },
                {
                    "type": "followup", "id": "f1",
                    "subject": "Is there a grace period?",
                    "num_favorites": 1,
                    "children": [{"subject": "Yes, 48 hours"}]
                },
                {
                    "type": "followup", "id": "f2",
                    "subject": "",
                    "children": []
                }
            ]
        }),
    );

    write_thread(
        &base,
        "cpsc213",
        "abc123",
        "102",
        &json!({
            "id": "q102",
            "history": [
                {"subject": "Lab room", "content": "Where is the lab this week?"}
            ],
            "children": []
        }),
    );

    base
}
