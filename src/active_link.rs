//! Highlights the navigation link for the section currently in view.
//!
//! Intersection entries are handled in arrival order and each one rewrites
//! every link, so the last intersecting section of a batch wins. At most one
//! link is active at a time.

#[cfg(test)]
#[path = "active_link_test.rs"]
mod active_link_test;

use crate::behavior::{Behavior, DomEffect, PageEvent, Target};
use crate::consts::CLASS_ACTIVE;

#[derive(Debug, Clone)]
pub struct ActiveLinks {
    hrefs: Vec<Option<String>>,
    active: Option<usize>,
}

impl ActiveLinks {
    /// Track links by their raw `href` attribute, in document order.
    #[must_use]
    pub fn new(hrefs: Vec<Option<String>>) -> Self {
        Self { hrefs, active: None }
    }

    /// Index of the link currently marked active.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// The first link pointing at `#section_id`.
    ///
    /// A section without an id matches no link.
    #[must_use]
    pub fn link_for(&self, section_id: Option<&str>) -> Option<usize> {
        let fragment = format!("#{}", section_id?);
        self.hrefs.iter().position(|href| href.as_deref() == Some(fragment.as_str()))
    }

    /// Process one section intersection entry.
    pub fn on_section(&mut self, section_id: Option<&str>, is_intersecting: bool, effects: &mut Vec<DomEffect>) {
        if !is_intersecting {
            return;
        }
        let active = self.link_for(section_id);
        for index in 0..self.hrefs.len() {
            let on = active == Some(index);
            effects.push(DomEffect::SetClass { target: Target::NavLink(index), class: CLASS_ACTIVE, on });
        }
        self.active = active;
    }
}

impl Behavior for ActiveLinks {
    fn name(&self) -> &'static str {
        "active-links"
    }

    fn handle(&mut self, event: &PageEvent, effects: &mut Vec<DomEffect>) {
        if let PageEvent::SectionIntersected { section_id, is_intersecting } = event {
            self.on_section(section_id.as_deref(), *is_intersecting, effects);
        }
    }
}
