//! Collaborators supplied by the hosting platform.
//!
//! The filter never talks to a database or the request directly; everything it
//! needs about the course, the viewing user and language strings comes through
//! these traits.

use crate::completion::CompletionState;

/// A course module as listed by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseModule {
    pub id: i64,
    pub name: String,
    /// Module view URL, normally absolute.
    pub url: String,
    /// Module visibility on the course page.
    pub visible: bool,
    /// Whether the module type has a view page at all (labels do not).
    pub has_view: bool,
}

/// Completion information for one module and one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompletionData {
    pub state: CompletionState,
    /// Whether the user can access the module right now.
    pub user_visible: bool,
}

/// Ambient request information: which course is being rendered and for whom.
pub trait RequestContext {
    /// Course the current page belongs to, or `None` outside a course.
    fn resolve_course_context(&self) -> Option<i64>;

    /// Viewing user. Guests and anonymous visitors carry the platform's sentinel id.
    fn current_user_id(&self) -> i64;
}

pub trait ModuleProvider {
    fn list_course_modules(&self, course_id: i64) -> Vec<CourseModule>;
}

pub trait CompletionProvider {
    fn completion_data(&self, module: &CourseModule, user_id: i64) -> CompletionData;
}

pub trait Localizer {
    /// Display string for `key` in the `component` namespace.
    fn localize(&self, key: &str, component: &str) -> String;
}

/// Everything the filter needs from the platform.
pub trait Host: RequestContext + ModuleProvider + CompletionProvider + Localizer {}

impl<T> Host for T where T: RequestContext + ModuleProvider + CompletionProvider + Localizer {}
