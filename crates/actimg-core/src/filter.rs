//! Request-scoped text filter entry point.

use std::collections::BTreeMap;

use crate::activity_index::ActivityIndex;
use crate::annotate::{LinkAnnotator, StateTitles};
use crate::config::FilterConfig;
use crate::host::Host;

/// Options handed over by the rendering pipeline alongside each text block.
pub type FilterOptions = BTreeMap<String, String>;

/// Completion badge filter for one request.
///
/// Construct one per request and drop it afterwards. It owns the activity
/// index, so two requests never see each other's cached completion data.
pub struct ActivityFilter<'h, H: Host + ?Sized> {
    host: &'h H,
    config: FilterConfig,
    index: ActivityIndex,
}

impl<'h, H: Host + ?Sized> ActivityFilter<'h, H> {
    pub fn new(host: &'h H, config: FilterConfig) -> Self {
        Self {
            host,
            config,
            index: ActivityIndex::new(),
        }
    }

    pub fn index(&self) -> &ActivityIndex {
        &self.index
    }

    /// Filter one rendered block of HTML.
    ///
    /// Outside a course the text comes back unchanged.
    pub fn filter(&mut self, text: &str, options: &FilterOptions) -> String {
        let Some(course_id) = self.host.resolve_course_context() else {
            return text.to_string();
        };
        if !options.is_empty() {
            tracing::trace!("ignoring filter options {:?}", options);
        }

        let user_id = self.host.current_user_id();
        let activities = self.index.get(course_id, user_id, self.host);
        let titles = StateTitles::localized(self.host, &self.config.string_component);
        LinkAnnotator::new(activities, titles)
            .strip_image_style(self.config.strip_image_style)
            .annotate(text)
    }
}
