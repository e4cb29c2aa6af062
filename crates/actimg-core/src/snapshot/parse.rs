//! Serde types for the course snapshot JSON.

use std::collections::HashMap;

use serde::Deserialize;

use crate::completion::CompletionState;

#[derive(Debug, Deserialize)]
pub(super) struct SnapshotFile {
    #[serde(default)]
    pub wwwroot: Option<String>,
    #[serde(default)]
    pub course_id: Option<i64>,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub modules: Vec<SnapshotModule>,
    #[serde(default)]
    pub strings: HashMap<String, String>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub(super) struct SnapshotModule {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub url: String,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default = "default_true")]
    pub has_view: bool,
    /// Per-user completion, keyed by user id (JSON object keys are strings).
    #[serde(default)]
    pub users: HashMap<String, SnapshotCompletion>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub(super) struct SnapshotCompletion {
    #[serde(default)]
    pub state: CompletionState,
    #[serde(default = "default_true")]
    pub uservisible: bool,
}
