//! Sequential reveal delays for children of grid-like containers.

#[cfg(test)]
#[path = "stagger_test.rs"]
mod stagger_test;

use crate::behavior::{Behavior, DomEffect, PageEvent, Target};

/// CSS `transition-delay` for the `index`-th child, e.g. `0.3s`.
#[must_use]
pub fn transition_delay(index: usize, step_secs: f64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let secs = index as f64 * step_secs;
    // Nine decimals drops float noise such as 0.30000000000000004 while
    // keeping sub-millisecond steps.
    let fixed = format!("{secs:.9}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}s")
}

#[derive(Debug, Clone)]
pub struct StaggerDelays {
    /// Reveal-child count per container, in document order.
    child_counts: Vec<usize>,
    step_secs: f64,
}

impl StaggerDelays {
    #[must_use]
    pub fn new(child_counts: Vec<usize>, step_secs: f64) -> Self {
        Self { child_counts, step_secs }
    }

    /// Emit one delay per child of every container.
    pub fn assign(&self, effects: &mut Vec<DomEffect>) {
        for (container, count) in self.child_counts.iter().enumerate() {
            for child in 0..*count {
                effects.push(DomEffect::SetTransitionDelay {
                    target: Target::StaggerChild { container, child },
                    delay: transition_delay(child, self.step_secs),
                });
            }
        }
    }
}

impl Behavior for StaggerDelays {
    fn name(&self) -> &'static str {
        "stagger"
    }

    fn handle(&mut self, event: &PageEvent, effects: &mut Vec<DomEffect>) {
        if matches!(event, PageEvent::Loaded { .. }) {
            self.assign(effects);
        }
    }
}
