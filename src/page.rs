//! The page core: every behavior, wired to one dispatch entry point.
//!
//! `Page` holds no browser handles, so the whole event → effect pipeline can
//! run in native tests. The browser layer (`dom`) owns the elements that
//! [`Target`](crate::behavior::Target)s refer to.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::active_link::ActiveLinks;
use crate::anchors::SmoothAnchors;
use crate::behavior::{Behavior, DomEffect, PageEvent};
use crate::config::SiteConfig;
use crate::mobile_menu::{MenuState, MobileMenu};
use crate::navbar::NavbarState;
use crate::reveal::RevealTracker;
use crate::stagger::StaggerDelays;
use crate::storage::PreferenceStore;
use crate::theme::{Theme, ThemeResolver};

/// What the browser layer found in the document at mount time.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub has_theme_toggle: bool,
    pub has_navbar: bool,
    /// Both the menu toggle and the menu container exist.
    pub has_mobile_menu: bool,
    /// The menu container already carries the `open` class in the markup.
    pub menu_open: bool,
    pub reveal_count: usize,
    /// Raw `href` of each navigation link, in document order.
    pub nav_link_hrefs: Vec<Option<String>>,
    /// Reveal-child count of each stagger container, in document order.
    pub stagger_child_counts: Vec<usize>,
}

pub struct Page<S> {
    theme: ThemeResolver<S>,
    behaviors: Vec<Box<dyn Behavior>>,
}

impl<S: PreferenceStore> Page<S> {
    /// Register every behavior the layout supports.
    #[must_use]
    pub fn new(config: &SiteConfig, layout: PageLayout, store: S) -> Self {
        let theme = ThemeResolver::new(
            store,
            config.storage_key.clone(),
            config.theme_attribute.clone(),
            layout.has_theme_toggle,
        );

        let mut behaviors: Vec<Box<dyn Behavior>> = vec![Box::new(RevealTracker::new(layout.reveal_count))];
        if layout.has_navbar {
            behaviors.push(Box::new(NavbarState::new(config.navbar_scroll_threshold_px)));
        } else {
            log::debug!("no navbar; skipping scroll state");
        }
        behaviors.push(Box::new(ActiveLinks::new(layout.nav_link_hrefs)));
        if layout.has_mobile_menu {
            let state = if layout.menu_open { MenuState::Open } else { MenuState::Closed };
            behaviors.push(Box::new(MobileMenu::with_state(state)));
        } else {
            log::debug!("no mobile menu; skipping menu toggle");
        }
        behaviors.push(Box::new(SmoothAnchors));
        behaviors.push(Box::new(StaggerDelays::new(layout.stagger_child_counts, config.stagger_step_secs)));

        Self { theme, behaviors }
    }

    /// Run `event` through every behavior and collect their effects.
    pub fn dispatch(&mut self, event: &PageEvent) -> Vec<DomEffect> {
        let mut effects = Vec::new();
        self.theme.handle(event, &mut effects);
        for behavior in &mut self.behaviors {
            let before = effects.len();
            behavior.handle(event, &mut effects);
            if effects.len() > before {
                log::trace!("{} produced {} effect(s)", behavior.name(), effects.len() - before);
            }
        }
        effects
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    #[must_use]
    pub fn store(&self) -> &S {
        self.theme.store()
    }

    /// Names of the registered behaviors, theme first.
    #[must_use]
    pub fn behavior_names(&self) -> Vec<&'static str> {
        std::iter::once(self.theme.name()).chain(self.behaviors.iter().map(|b| b.name())).collect()
    }
}
