//! Two-state mobile navigation menu.
//!
//! The menu container's `open` class and the toggle's `active` class always
//! move together. The starting state is taken from the markup at mount, so a
//! menu served open stays in sync on the first click.

#[cfg(test)]
#[path = "mobile_menu_test.rs"]
mod mobile_menu_test;

use crate::behavior::{Behavior, DomEffect, PageEvent, Target};
use crate::consts::{CLASS_ACTIVE, CLASS_OPEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Default)]
pub struct MobileMenu {
    state: MenuState,
}

impl MobileMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the state the markup was served in.
    #[must_use]
    pub fn with_state(state: MenuState) -> Self {
        Self { state }
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn toggle(&mut self, effects: &mut Vec<DomEffect>) {
        let next = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        self.set(next, effects);
    }

    /// Close the menu. Emits even when already closed so stray classes clear.
    pub fn close(&mut self, effects: &mut Vec<DomEffect>) {
        self.set(MenuState::Closed, effects);
    }

    fn set(&mut self, state: MenuState, effects: &mut Vec<DomEffect>) {
        self.state = state;
        let on = state == MenuState::Open;
        effects.push(DomEffect::SetClass { target: Target::NavMenu, class: CLASS_OPEN, on });
        effects.push(DomEffect::SetClass { target: Target::NavToggle, class: CLASS_ACTIVE, on });
    }
}

impl Behavior for MobileMenu {
    fn name(&self) -> &'static str {
        "mobile-menu"
    }

    fn handle(&mut self, event: &PageEvent, effects: &mut Vec<DomEffect>) {
        match event {
            PageEvent::MenuToggleClicked => self.toggle(effects),
            PageEvent::MenuLinkClicked => self.close(effects),
            _ => {}
        }
    }
}
