//! Request-scoped activity index cache.

use crate::host::{CompletionProvider, ModuleProvider};
use crate::url_path::normalize_url_path;

use super::record::{ActivityMap, ActivityRecord};

/// Course and user an index was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexKey {
    pub course_id: i64,
    pub user_id: i64,
}

/// Memoized activity lookup for one (course, user) pair.
///
/// Owned by the request-scoped filter. Asking for a different course or user
/// drops the whole map and rebuilds it from the providers.
#[derive(Debug, Default)]
pub struct ActivityIndex {
    key: Option<IndexKey>,
    activities: Option<ActivityMap>,
    generation: u64,
}

impl ActivityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// The pair the current map was built for, if any.
    pub fn key(&self) -> Option<IndexKey> {
        self.key
    }

    /// Number of times the map has been (re)built.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Drop the cached map; the next `get` rebuilds it.
    pub fn invalidate(&mut self) {
        self.activities = None;
    }

    /// Return the activity map for `course_id` and `user_id`, rebuilding it on a key change.
    pub fn get<P>(&mut self, course_id: i64, user_id: i64, provider: &P) -> &ActivityMap
    where
        P: ModuleProvider + CompletionProvider + ?Sized,
    {
        let key = IndexKey { course_id, user_id };
        if self.key != Some(key) {
            if self.key.is_some() {
                tracing::debug!(
                    "activity index key changed from {:?} to {:?}, invalidating",
                    self.key,
                    key
                );
            }
            self.invalidate();
        }
        self.key = Some(key);

        if self.activities.is_none() {
            let built = build(course_id, user_id, provider);
            self.generation = self.generation.saturating_add(1);
            tracing::debug!(
                course_id,
                user_id,
                activities = built.len(),
                generation = self.generation,
                "built activity index"
            );
            self.activities = Some(built);
        }

        self.activities.get_or_insert_with(ActivityMap::new)
    }
}

fn build<P>(course_id: i64, user_id: i64, provider: &P) -> ActivityMap
where
    P: ModuleProvider + CompletionProvider + ?Sized,
{
    let mut activities = ActivityMap::new();
    for module in provider.list_course_modules(course_id) {
        if !module.visible || !module.has_view {
            continue;
        }
        let path = normalize_url_path(&module.url);
        if path.is_empty() {
            tracing::trace!("module {} url {} has no matchable path", module.id, module.url);
            continue;
        }
        let completion = provider.completion_data(&module, user_id);
        if let Some(previous) = activities.insert(path, ActivityRecord::new(&module, completion)) {
            tracing::trace!("module {} replaced module {} at the same path", module.id, previous.id);
        }
    }
    activities
}
