//! Read-only navigation over a parsed document
//!
//! Thin helpers on top of scraper's `ElementRef`: every lookup that may
//! miss returns an `Option` instead of an empty selection.

use crate::schema::Attributes;
use scraper::ElementRef;

/// Tag names are compared ASCII case-insensitively
pub fn is_tag(el: ElementRef<'_>, tag: &str) -> bool {
    el.value().name().eq_ignore_ascii_case(tag)
}

/// Nearest element matching `tag`, starting with `el` itself
pub fn closest<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    if is_tag(el, tag) {
        return Some(el);
    }
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| is_tag(*ancestor, tag))
}

/// Previous sibling element, skipping text and comment nodes
pub fn prev_element<'a>(el: ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.prev_siblings().find_map(ElementRef::wrap)
}

/// Next sibling element, only if it is a `tag` element
pub fn next_element_if<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    el.next_siblings()
        .find_map(ElementRef::wrap)
        .filter(|sibling| is_tag(*sibling, tag))
}

/// Concatenated text of all descendants, untrimmed
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

pub fn attributes_of(el: ElementRef<'_>) -> Attributes {
    el.value()
        .attrs()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
