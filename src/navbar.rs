//! Navbar `scrolled` styling as a function of vertical scroll offset.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use crate::behavior::{Behavior, DomEffect, PageEvent, Target};
use crate::consts::CLASS_SCROLLED;

#[derive(Debug, Clone)]
pub struct NavbarState {
    threshold_px: f64,
    /// `None` until the first scroll position is seen.
    scrolled: Option<bool>,
}

impl NavbarState {
    #[must_use]
    pub fn new(threshold_px: f64) -> Self {
        Self { threshold_px, scrolled: None }
    }

    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled.unwrap_or(false)
    }

    /// Strictly above the threshold counts as scrolled.
    #[must_use]
    pub fn is_past_threshold(&self, scroll_y: f64) -> bool {
        scroll_y > self.threshold_px
    }

    /// Recompute from `scroll_y`; emits only when the state changes.
    pub fn on_scroll(&mut self, scroll_y: f64, effects: &mut Vec<DomEffect>) {
        let scrolled = self.is_past_threshold(scroll_y);
        if self.scrolled == Some(scrolled) {
            return;
        }
        self.scrolled = Some(scrolled);
        effects.push(DomEffect::SetClass { target: Target::Navbar, class: CLASS_SCROLLED, on: scrolled });
    }
}

impl Behavior for NavbarState {
    fn name(&self) -> &'static str {
        "navbar"
    }

    fn handle(&mut self, event: &PageEvent, effects: &mut Vec<DomEffect>) {
        match event {
            PageEvent::Loaded { scroll_y, .. } | PageEvent::Scrolled { scroll_y } => {
                self.on_scroll(*scroll_y, effects);
            }
            _ => {}
        }
    }
}
