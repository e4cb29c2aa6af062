//! Per-anchor rewrite: state badge construction and insertion.

use html5ever::{LocalName, Namespace};
use kuchikiki::traits::*;
use kuchikiki::{Attribute, ElementData, ExpandedName, NodeDataRef, NodeRef};

use crate::activity_index::{ActivityMap, ActivityRecord};
use crate::completion::ActivityState;
use crate::url_path::normalize_url_path;

use super::tree::{html_name, is_element};
use super::StateTitles;

/// Class set on every annotated anchor, replacing whatever it had.
pub(super) const ANCHOR_CLASS: &str = "completion-info";

fn attribute_name(name: &str) -> ExpandedName {
    ExpandedName::new(Namespace::from(""), LocalName::from(name))
}

fn attribute(name: &str, value: String) -> (ExpandedName, Attribute) {
    (
        attribute_name(name),
        Attribute {
            prefix: None,
            value,
        },
    )
}

/// `<span class="state-…" title="…"><i class="fa fa-…"></i></span>`
pub(super) fn badge(state: ActivityState, title: &str) -> NodeRef {
    let span = NodeRef::new_element(
        html_name("span"),
        [
            attribute("class", state.wrapper_class().to_string()),
            attribute("title", title.to_string()),
        ],
    );
    let icon = NodeRef::new_element(
        html_name("i"),
        [attribute("class", format!("fa {}", state.icon_class()))],
    );
    span.append(icon);
    span
}

/// Looks up the anchor's activity, if its href normalizes to an indexed path.
fn lookup<'m>(anchor: &ElementData, index: &'m ActivityMap) -> Option<&'m ActivityRecord> {
    let attrs = anchor.attributes.borrow();
    let href = attrs.get("href")?;
    let path = normalize_url_path(href.trim());
    if path.is_empty() {
        return None;
    }
    index.get(&path)
}

/// Rewrites one anchor in place. Returns true if it was annotated.
pub(super) fn annotate_anchor(
    anchor: &NodeDataRef<ElementData>,
    index: &ActivityMap,
    titles: &StateTitles,
    strip_image_style: bool,
) -> bool {
    let Some(record) = lookup(anchor, index) else {
        return false;
    };

    let node = anchor.as_node();
    if node.first_child().is_none() {
        return false;
    }
    let mut images = node
        .descendants()
        .elements()
        .filter(|el| is_element(el, "img"));
    let (Some(image), None) = (images.next(), images.next()) else {
        tracing::trace!(
            "anchor for activity {} does not wrap exactly one image, skipping",
            record.id
        );
        return false;
    };

    if strip_image_style {
        // Keep the remaining attributes in source order.
        image
            .attributes
            .borrow_mut()
            .map
            .shift_remove(&attribute_name("style"));
    }

    {
        let mut attrs = anchor.attributes.borrow_mut();
        attrs.insert("data-cmid", record.id.to_string());
        attrs.insert("class", ANCHOR_CLASS.to_string());
    }

    let state = record.state();
    image
        .as_node()
        .insert_before(badge(state, titles.title(state)));
    tracing::trace!("annotated activity {} ({}) as {:?}", record.id, record.name, state);
    true
}
