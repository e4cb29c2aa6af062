//! Parsing and serialization that keep the input's shape.
//!
//! Rendered blocks are parsed as `<template>`-context fragments so table parts
//! (`<tr>`, `<td>`, ...) survive without their table. Only input that opens
//! with a doctype or an `<html>` tag is handled as a full document, and the
//! `<head>`/`<body>` elements the parser implies are unwrapped again when the
//! input never wrote them.

use std::io;

use html5ever::{LocalName, Namespace, QualName};
use kuchikiki::traits::*;
use kuchikiki::{ElementData, NodeDataRef, NodeRef};

pub(super) const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// How the input was parsed, and therefore how it must be written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Shape {
    /// A template-context fragment; only the parsed nodes are serialized.
    Fragment,
    /// A full document (leading doctype or `<html>` tag).
    Document,
}

pub(super) struct HtmlTree {
    root: NodeRef,
    shape: Shape,
}

pub(super) fn html_name(local: &str) -> QualName {
    QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from(local))
}

/// Whether `rest` (lowercased, right after a tag name) ends that tag name.
fn ends_tag_name(rest: &str) -> bool {
    matches!(
        rest.chars().next(),
        Some(c) if c == '>' || c == '/' || c.is_ascii_whitespace()
    )
}

/// Whether the lowercased input contains a `<name ...>` start tag.
fn has_start_tag(lowered: &str, name: &str) -> bool {
    let open = format!("<{name}");
    lowered
        .match_indices(&open)
        .any(|(at, _)| ends_tag_name(&lowered[at + open.len()..]))
}

fn detect_shape(lowered: &str) -> Shape {
    let mut rest = lowered.trim_start();
    while let Some(comment) = rest.strip_prefix("<!--") {
        match comment.find("-->") {
            Some(end) => rest = comment[end + 3..].trim_start(),
            None => return Shape::Fragment,
        }
    }
    if rest.starts_with("<!doctype") {
        return Shape::Document;
    }
    match rest.strip_prefix("<html") {
        Some(after) if ends_tag_name(after) => Shape::Document,
        _ => Shape::Fragment,
    }
}

/// Replace `element` by its children.
fn unwrap_element(element: &NodeRef) {
    while let Some(child) = element.first_child() {
        element.insert_before(child);
    }
    element.detach();
}

impl HtmlTree {
    /// Parse `text`. Parse errors never fail; the parser recovers and moves on.
    pub(super) fn parse(text: &str) -> Self {
        let lowered = text.to_ascii_lowercase();
        let shape = detect_shape(&lowered);
        let root = match shape {
            Shape::Document => {
                let document = kuchikiki::parse_html().one(text);
                for implied in ["head", "body"] {
                    if has_start_tag(&lowered, implied) {
                        continue;
                    }
                    let found = document
                        .descendants()
                        .elements()
                        .find(|el| is_element(el, implied));
                    if let Some(el) = found {
                        unwrap_element(el.as_node());
                    }
                }
                document
            }
            Shape::Fragment => {
                let document =
                    kuchikiki::parse_fragment(html_name("template"), Vec::new()).one(text);
                // Fragment parsing hangs the nodes off a synthetic <html> root.
                document.first_child().unwrap_or(document)
            }
        };

        Self { root, shape }
    }

    /// Anchor elements in document order.
    pub(super) fn anchors(&self) -> Vec<NodeDataRef<ElementData>> {
        self.root
            .descendants()
            .elements()
            .filter(|el| is_element(el, "a"))
            .collect()
    }

    pub(super) fn serialize(&self) -> io::Result<String> {
        let mut buf = Vec::new();
        match self.shape {
            Shape::Document => self.root.serialize(&mut buf)?,
            Shape::Fragment => {
                for child in self.root.children() {
                    child.serialize(&mut buf)?;
                }
            }
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

pub(super) fn is_element(el: &ElementData, local: &str) -> bool {
    &*el.name.local == local
}
