//! Shared test host: an in-memory course that records provider calls.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use actimg_core::completion::CompletionState;
use actimg_core::host::{
    CompletionData, CompletionProvider, CourseModule, Localizer, ModuleProvider, RequestContext,
};

pub struct RecordingHost {
    pub course: Option<i64>,
    pub user: Cell<i64>,
    pub modules: Vec<CourseModule>,
    pub completion: HashMap<(i64, i64), CompletionData>,
    pub module_calls: Cell<usize>,
    pub completion_calls: RefCell<Vec<(i64, i64)>>,
}

impl RecordingHost {
    pub fn new(course: Option<i64>, user: i64) -> Self {
        Self {
            course,
            user: Cell::new(user),
            modules: Vec::new(),
            completion: HashMap::new(),
            module_calls: Cell::new(0),
            completion_calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_module(mut self, id: i64, url: &str) -> Self {
        self.modules.push(CourseModule {
            id,
            name: format!("Module {id}"),
            url: url.to_string(),
            visible: true,
            has_view: true,
        });
        self
    }

    pub fn with_completion(
        mut self,
        module: i64,
        user: i64,
        state: CompletionState,
        user_visible: bool,
    ) -> Self {
        self.completion.insert(
            (module, user),
            CompletionData {
                state,
                user_visible,
            },
        );
        self
    }
}

impl RequestContext for RecordingHost {
    fn resolve_course_context(&self) -> Option<i64> {
        self.course
    }

    fn current_user_id(&self) -> i64 {
        self.user.get()
    }
}

impl ModuleProvider for RecordingHost {
    fn list_course_modules(&self, _course_id: i64) -> Vec<CourseModule> {
        self.module_calls.set(self.module_calls.get() + 1);
        self.modules.clone()
    }
}

impl CompletionProvider for RecordingHost {
    fn completion_data(&self, module: &CourseModule, user_id: i64) -> CompletionData {
        self.completion_calls.borrow_mut().push((module.id, user_id));
        self.completion
            .get(&(module.id, user_id))
            .copied()
            .unwrap_or(CompletionData {
                state: CompletionState::Incomplete,
                user_visible: true,
            })
    }
}

impl Localizer for RecordingHost {
    fn localize(&self, key: &str, _component: &str) -> String {
        match key {
            "completed" => "Completed".to_string(),
            "incomplete" => "Not completed".to_string(),
            "unavailable" => "Not available".to_string(),
            other => format!("[[{other}]]"),
        }
    }
}
