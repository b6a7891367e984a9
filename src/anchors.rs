//! Smooth scrolling for same-page fragment links.

#[cfg(test)]
#[path = "anchors_test.rs"]
mod anchors_test;

use crate::behavior::{Behavior, DomEffect, PageEvent};

/// Extract the target id from a same-page `href`.
///
/// Returns `None` for links that are not fragments or whose fragment is empty.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SmoothAnchors;

impl SmoothAnchors {
    /// Always suppresses the jump; scrolls only when a target id exists.
    ///
    /// A missing target element is left to the browser layer, which skips the
    /// scroll without error.
    pub fn on_click(href: &str, effects: &mut Vec<DomEffect>) {
        effects.push(DomEffect::PreventDefault);
        if let Some(id) = fragment_id(href) {
            effects.push(DomEffect::ScrollIntoView { id: id.to_string() });
        }
    }
}

impl Behavior for SmoothAnchors {
    fn name(&self) -> &'static str {
        "anchors"
    }

    fn handle(&mut self, event: &PageEvent, effects: &mut Vec<DomEffect>) {
        if let PageEvent::AnchorClicked { href } = event {
            Self::on_click(href, effects);
        }
    }
}
