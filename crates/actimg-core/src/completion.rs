//! Completion states as reported by the platform, and the badge state derived from them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-user completion state of an activity.
///
/// Discriminants match the platform's raw integer constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum CompletionState {
    #[default]
    Incomplete,
    Complete,
    CompletePass,
    /// Completed with a failing grade. Still counts as completed.
    CompleteFail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown completion state {0}")]
pub struct UnknownCompletionState(pub i64);

impl CompletionState {
    /// Whether the platform considers the activity done (any non-zero state).
    pub fn is_complete(self) -> bool {
        !matches!(self, CompletionState::Incomplete)
    }
}

impl TryFrom<i64> for CompletionState {
    type Error = UnknownCompletionState;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(CompletionState::Incomplete),
            1 => Ok(CompletionState::Complete),
            2 => Ok(CompletionState::CompletePass),
            3 => Ok(CompletionState::CompleteFail),
            other => Err(UnknownCompletionState(other)),
        }
    }
}

impl From<CompletionState> for i64 {
    fn from(state: CompletionState) -> i64 {
        match state {
            CompletionState::Incomplete => 0,
            CompletionState::Complete => 1,
            CompletionState::CompletePass => 2,
            CompletionState::CompleteFail => 3,
        }
    }
}

/// Badge shown next to an activity image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityState {
    Incomplete,
    Unavailable,
    Completed,
}

impl ActivityState {
    /// Unavailable wins over completed, completed over incomplete.
    pub fn classify(user_visible: bool, completion: CompletionState) -> Self {
        if !user_visible {
            ActivityState::Unavailable
        } else if completion.is_complete() {
            ActivityState::Completed
        } else {
            ActivityState::Incomplete
        }
    }

    /// Font Awesome icon class for the inner `<i>`.
    pub fn icon_class(self) -> &'static str {
        match self {
            ActivityState::Incomplete => "fa-circle-o",
            ActivityState::Unavailable => "fa-ban",
            ActivityState::Completed => "fa-check-circle-o",
        }
    }

    /// Class of the wrapping `<span>`.
    pub fn wrapper_class(self) -> &'static str {
        match self {
            ActivityState::Incomplete => "state-incomplete",
            ActivityState::Unavailable => "state-unavailable",
            ActivityState::Completed => "state-completed",
        }
    }

    /// Language string key for the wrapper's `title`.
    pub fn title_key(self) -> &'static str {
        match self {
            ActivityState::Incomplete => "incomplete",
            ActivityState::Unavailable => "unavailable",
            ActivityState::Completed => "completed",
        }
    }
}
