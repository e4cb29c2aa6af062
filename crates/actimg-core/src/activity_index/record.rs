//! Per-activity record stored in the index.

use std::collections::HashMap;

use crate::completion::{ActivityState, CompletionState};
use crate::host::{CompletionData, CourseModule};

/// Lookup table from normalized activity path to its record.
pub type ActivityMap = HashMap<String, ActivityRecord>;

/// What the annotator needs to know about one activity for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
    pub name: String,
    pub id: i64,
    pub user_visible: bool,
    pub completed: CompletionState,
}

impl ActivityRecord {
    pub fn new(module: &CourseModule, completion: CompletionData) -> Self {
        Self {
            name: module.name.clone(),
            id: module.id,
            user_visible: completion.user_visible,
            completed: completion.state,
        }
    }

    /// Badge state for this activity.
    pub fn state(&self) -> ActivityState {
        ActivityState::classify(self.user_visible, self.completed)
    }
}
