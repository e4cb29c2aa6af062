//! Course snapshot: a JSON description of one course used as an offline host.
//!
//! Lets the filter run outside the platform (CLI previews, tests). A snapshot
//! answers every host query:
//! - course context and viewing user
//! - module list, with URLs resolved against `wwwroot`
//! - per-user completion (missing entries are incomplete and visible)
//! - language strings, overriding the built-in English ones

mod parse;

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;
use url::Url;

use crate::host::{
    CompletionData, CompletionProvider, CourseModule, Localizer, ModuleProvider, RequestContext,
};
use crate::lang;

use parse::{SnapshotCompletion, SnapshotFile};

#[derive(Debug, Clone)]
pub struct CourseSnapshot {
    course_id: Option<i64>,
    user_id: i64,
    modules: Vec<CourseModule>,
    completion: HashMap<(i64, i64), SnapshotCompletion>,
    strings: HashMap<String, String>,
}

impl CourseSnapshot {
    /// Read and parse a snapshot file.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read snapshot file: {}", path.display()))?;
        Self::from_json(&bytes).with_context(|| format!("load snapshot: {}", path.display()))
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let file: SnapshotFile = serde_json::from_slice(bytes).context("parse snapshot JSON")?;

        let base = file
            .wwwroot
            .as_deref()
            .map(|root| Url::parse(root).with_context(|| format!("invalid wwwroot: {root}")))
            .transpose()?;

        let mut modules = Vec::with_capacity(file.modules.len());
        let mut completion = HashMap::new();
        for m in file.modules {
            for (user, data) in m.users {
                let user_id: i64 = user
                    .trim()
                    .parse()
                    .with_context(|| format!("module {}: invalid user id {user:?}", m.id))?;
                completion.insert((m.id, user_id), data);
            }
            let url = match &base {
                Some(base) => base
                    .join(&m.url)
                    .with_context(|| format!("module {}: invalid url {}", m.id, m.url))?
                    .to_string(),
                None => m.url,
            };
            modules.push(CourseModule {
                id: m.id,
                name: m.name,
                url,
                visible: m.visible,
                has_view: m.has_view,
            });
        }

        Ok(Self {
            course_id: file.course_id,
            user_id: file.user_id,
            modules,
            completion,
            strings: file.strings,
        })
    }

    /// The same snapshot viewed by another user.
    pub fn with_user(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn modules(&self) -> &[CourseModule] {
        &self.modules
    }
}

impl RequestContext for CourseSnapshot {
    fn resolve_course_context(&self) -> Option<i64> {
        self.course_id
    }

    fn current_user_id(&self) -> i64 {
        self.user_id
    }
}

impl ModuleProvider for CourseSnapshot {
    fn list_course_modules(&self, course_id: i64) -> Vec<CourseModule> {
        if self.course_id != Some(course_id) {
            return Vec::new();
        }
        self.modules.clone()
    }
}

impl CompletionProvider for CourseSnapshot {
    fn completion_data(&self, module: &CourseModule, user_id: i64) -> CompletionData {
        match self.completion.get(&(module.id, user_id)) {
            Some(data) => CompletionData {
                state: data.state,
                user_visible: data.uservisible,
            },
            None => CompletionData {
                state: Default::default(),
                user_visible: true,
            },
        }
    }
}

impl Localizer for CourseSnapshot {
    fn localize(&self, key: &str, _component: &str) -> String {
        if let Some(s) = self.strings.get(key) {
            return s.clone();
        }
        lang::en(key)
            .map(str::to_string)
            .unwrap_or_else(|| lang::missing(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::CompletionState;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SNAPSHOT: &str = r#"{
        "wwwroot": "https://lms.example.com",
        "course_id": 2,
        "user_id": 5,
        "modules": [
            {
                "id": 11,
                "name": "Welcome page",
                "url": "/mod/page/view.php?id=11",
                "users": { "5": { "state": 1 }, "6": { "state": 0, "uservisible": false } }
            },
            {
                "id": 12,
                "name": "Notes",
                "url": "https://lms.example.com/mod/label/view.php?id=12",
                "has_view": false
            }
        ],
        "strings": { "completed": "Done" }
    }"#;

    #[test]
    fn resolves_module_urls_against_wwwroot() {
        let snap = CourseSnapshot::from_json(SNAPSHOT.as_bytes()).unwrap();
        let modules = snap.list_course_modules(2);
        assert_eq!(modules.len(), 2);
        assert_eq!(modules[0].url, "https://lms.example.com/mod/page/view.php?id=11");
        assert!(modules[0].visible);
        assert!(!modules[1].has_view);
        assert!(snap.list_course_modules(3).is_empty());
    }

    #[test]
    fn completion_defaults_and_overrides() {
        let snap = CourseSnapshot::from_json(SNAPSHOT.as_bytes()).unwrap();
        let page = snap.modules()[0].clone();

        let five = snap.completion_data(&page, 5);
        assert_eq!(five.state, CompletionState::Complete);
        assert!(five.user_visible);

        let six = snap.completion_data(&page, 6);
        assert_eq!(six.state, CompletionState::Incomplete);
        assert!(!six.user_visible);

        let stranger = snap.completion_data(&page, 99);
        assert_eq!(stranger, CompletionData { state: CompletionState::Incomplete, user_visible: true });
    }

    #[test]
    fn strings_override_english() {
        let snap = CourseSnapshot::from_json(SNAPSHOT.as_bytes()).unwrap();
        assert_eq!(snap.localize("completed", lang::COMPONENT), "Done");
        assert_eq!(snap.localize("incomplete", lang::COMPONENT), "Incomplete");
        assert_eq!(snap.localize("other", lang::COMPONENT), "[[other]]");
    }

    #[test]
    fn context_and_user_switch() {
        let snap = CourseSnapshot::from_json(SNAPSHOT.as_bytes()).unwrap();
        assert_eq!(snap.resolve_course_context(), Some(2));
        assert_eq!(snap.current_user_id(), 5);
        let snap = snap.with_user(6);
        assert_eq!(snap.current_user_id(), 6);
    }

    #[test]
    fn missing_course_means_no_context() {
        let snap = CourseSnapshot::from_json(br#"{"user_id": 1}"#).unwrap();
        assert_eq!(snap.resolve_course_context(), None);
    }

    #[test]
    fn rejects_unknown_completion_state() {
        let json = r#"{"course_id": 1, "modules": [
            {"id": 1, "url": "/mod/page/view.php?id=1", "users": {"1": {"state": 8}}}
        ]}"#;
        assert!(CourseSnapshot::from_json(json.as_bytes()).is_err());
    }

    #[test]
    fn rejects_bad_user_key() {
        let json = r#"{"course_id": 1, "modules": [
            {"id": 1, "url": "/mod/page/view.php?id=1", "users": {"me": {"state": 1}}}
        ]}"#;
        assert!(CourseSnapshot::from_json(json.as_bytes()).is_err());
    }

    #[test]
    fn load_from_file() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(SNAPSHOT.as_bytes()).unwrap();
        f.flush().unwrap();
        let snap = CourseSnapshot::load(f.path()).unwrap();
        assert_eq!(snap.modules().len(), 2);
        assert!(CourseSnapshot::load(&f.path().with_extension("missing")).is_err());
    }
}
