//! Link annotation: completion badges in front of activity images.
//!
//! Walks every `<a>` of an HTML fragment. An anchor whose href normalizes to
//! an indexed activity path and which wraps exactly one `<img>` gets:
//! - `data-cmid` and `class="completion-info"` on the anchor
//! - a `<span class="state-…" title="…"><i class="fa …"></i></span>` right before the image
//! - the image's inline `style` removed (configurable)
//!
//! Anything else is left alone. When nothing was annotated the input comes
//! back untouched, byte for byte.

mod badge;
mod tree;

use std::borrow::Cow;

use crate::activity_index::ActivityMap;
use crate::completion::ActivityState;
use crate::host::Localizer;

use tree::HtmlTree;

const BOM: char = '\u{feff}';

/// Best-effort decoding of raw HTML bytes to UTF-8.
///
/// A leading byte-order mark is dropped and invalid sequences are replaced.
pub fn decode_html(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    String::from_utf8_lossy(bytes)
}

/// Localized `title` text for each badge state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateTitles {
    pub incomplete: String,
    pub unavailable: String,
    pub completed: String,
}

impl StateTitles {
    pub fn localized<L: Localizer + ?Sized>(localizer: &L, component: &str) -> Self {
        let get = |state: ActivityState| localizer.localize(state.title_key(), component);
        Self {
            incomplete: get(ActivityState::Incomplete),
            unavailable: get(ActivityState::Unavailable),
            completed: get(ActivityState::Completed),
        }
    }

    pub fn title(&self, state: ActivityState) -> &str {
        match state {
            ActivityState::Incomplete => &self.incomplete,
            ActivityState::Unavailable => &self.unavailable,
            ActivityState::Completed => &self.completed,
        }
    }
}

/// Annotates activity image links against one activity index.
#[derive(Debug)]
pub struct LinkAnnotator<'a> {
    index: &'a ActivityMap,
    titles: StateTitles,
    strip_image_style: bool,
}

impl<'a> LinkAnnotator<'a> {
    pub fn new(index: &'a ActivityMap, titles: StateTitles) -> Self {
        Self {
            index,
            titles,
            strip_image_style: true,
        }
    }

    /// Keep or drop the inline `style` of annotated images (dropped by default).
    pub fn strip_image_style(mut self, strip: bool) -> Self {
        self.strip_image_style = strip;
        self
    }

    /// Annotate `html`, returning the rewritten fragment.
    pub fn annotate(&self, html: &str) -> String {
        let text = html.strip_prefix(BOM).unwrap_or(html);
        if self.index.is_empty() || (!text.contains("<a") && !text.contains("<A")) {
            return html.to_string();
        }

        let tree = HtmlTree::parse(text);
        let mut annotated = 0usize;
        for anchor in tree.anchors() {
            if badge::annotate_anchor(&anchor, self.index, &self.titles, self.strip_image_style) {
                annotated += 1;
            }
        }

        if annotated == 0 {
            return html.to_string();
        }

        match tree.serialize() {
            Ok(out) => {
                tracing::debug!("annotated {} activity links", annotated);
                out
            }
            Err(e) => {
                tracing::warn!("failed to serialize annotated html, leaving it unchanged: {}", e);
                html.to_string()
            }
        }
    }
}
