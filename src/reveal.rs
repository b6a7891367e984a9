//! One-way scroll reveal.
//!
//! Each reveal-marked element flips to `visible` the first time it intersects
//! the viewport and is then unobserved. The transition never reverses.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::behavior::{Behavior, DomEffect, PageEvent, Target};
use crate::consts::CLASS_VISIBLE;

#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    /// Track `count` elements, all initially hidden.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { revealed: vec![false; count] }
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    /// Process one intersection entry.
    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool, effects: &mut Vec<DomEffect>) {
        if !is_intersecting {
            return;
        }
        let Some(slot) = self.revealed.get_mut(index) else {
            return;
        };
        if *slot {
            return;
        }
        *slot = true;
        effects.push(DomEffect::SetClass { target: Target::Reveal(index), class: CLASS_VISIBLE, on: true });
        effects.push(DomEffect::Unobserve { target: Target::Reveal(index) });
    }
}

impl Behavior for RevealTracker {
    fn name(&self) -> &'static str {
        "reveal"
    }

    fn handle(&mut self, event: &PageEvent, effects: &mut Vec<DomEffect>) {
        if let PageEvent::RevealIntersected { index, is_intersecting } = event {
            self.on_intersection(*index, *is_intersecting, effects);
        }
    }
}
