//! Light/dark theme resolution, toggling, and persistence.
//!
//! The initial theme is the first available of: the theme attribute already on
//! `<html>`, the persisted preference, the OS color-scheme preference, and
//! finally [`Theme::Light`]. Only an explicit toggle persists a value; once one
//! exists, OS preference changes no longer affect the page.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::behavior::{Behavior, DomEffect, PageEvent, Target};
use crate::storage::{PreferenceStore, read_optional, write_best_effort};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a marker or stored value. Anything but `light`/`dark` is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Toggle `aria-pressed` value: pressed means "dark is on".
    #[must_use]
    pub fn aria_pressed(self) -> &'static str {
        match self {
            Self::Light => "false",
            Self::Dark => "true",
        }
    }

    /// Toggle `aria-label`: names what pressing the toggle will do next.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }
}

/// Evaluate the precedence chain over already-read inputs.
#[must_use]
pub fn resolve_initial_theme(root_marker: Option<&str>, stored: Option<&str>, prefers_dark: bool) -> Theme {
    root_marker
        .and_then(Theme::parse)
        .or_else(|| stored.and_then(Theme::parse))
        .unwrap_or_else(|| Theme::from_prefers_dark(prefers_dark))
}

/// Theme behavior state, owning the preference store.
pub struct ThemeResolver<S> {
    store: S,
    storage_key: String,
    attribute: String,
    has_toggle: bool,
    current: Theme,
}

impl<S: PreferenceStore> ThemeResolver<S> {
    #[must_use]
    pub fn new(store: S, storage_key: impl Into<String>, attribute: impl Into<String>, has_toggle: bool) -> Self {
        Self {
            store,
            storage_key: storage_key.into(),
            attribute: attribute.into(),
            has_toggle,
            current: Theme::default(),
        }
    }

    /// The theme most recently applied.
    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether the store holds any non-empty value under the theme key.
    ///
    /// An unrecognised value still counts: it was written by someone, so OS
    /// changes must not override it.
    #[must_use]
    pub fn has_persisted_preference(&self) -> bool {
        read_optional(&self.store, &self.storage_key).is_some_and(|value| !value.is_empty())
    }

    #[must_use]
    pub fn resolve_initial(&self, root_marker: Option<&str>, prefers_dark: bool) -> Theme {
        let stored = read_optional(&self.store, &self.storage_key);
        resolve_initial_theme(root_marker, stored.as_deref(), prefers_dark)
    }

    /// Set the root marker and sync the toggle's accessible state.
    pub fn apply(&mut self, theme: Theme, effects: &mut Vec<DomEffect>) {
        self.current = theme;
        effects.push(DomEffect::SetAttribute {
            target: Target::Root,
            name: self.attribute.clone(),
            value: theme.as_str().to_string(),
        });
        if self.has_toggle {
            effects.push(DomEffect::SetAttribute {
                target: Target::ThemeToggle,
                name: "aria-pressed".to_string(),
                value: theme.aria_pressed().to_string(),
            });
            effects.push(DomEffect::SetAttribute {
                target: Target::ThemeToggle,
                name: "aria-label".to_string(),
                value: theme.toggle_label().to_string(),
            });
        }
    }

    /// Flip the theme shown by `root_marker`, apply it, and persist it.
    ///
    /// A root marker other than `dark` counts as light.
    pub fn toggle(&mut self, root_marker: Option<&str>, effects: &mut Vec<DomEffect>) -> Theme {
        let next = match root_marker.and_then(Theme::parse) {
            Some(Theme::Dark) => Theme::Light,
            _ => Theme::Dark,
        };
        self.apply(next, effects);
        write_best_effort(&mut self.store, &self.storage_key, next.as_str());
        next
    }

    /// Follow a live OS preference change unless a preference is persisted.
    ///
    /// Returns whether the theme was applied.
    pub fn on_system_preference_change(&mut self, prefers_dark: bool, effects: &mut Vec<DomEffect>) -> bool {
        if self.has_persisted_preference() {
            return false;
        }
        self.apply(Theme::from_prefers_dark(prefers_dark), effects);
        true
    }
}

impl<S: PreferenceStore> Behavior for ThemeResolver<S> {
    fn name(&self) -> &'static str {
        "theme"
    }

    fn handle(&mut self, event: &PageEvent, effects: &mut Vec<DomEffect>) {
        match event {
            PageEvent::Loaded { root_theme, prefers_dark, .. } => {
                let theme = self.resolve_initial(root_theme.as_deref(), *prefers_dark);
                self.apply(theme, effects);
            }
            PageEvent::ThemeToggleClicked { root_theme } => {
                let theme = self.toggle(root_theme.as_deref(), effects);
                log::debug!("theme toggled to {}", theme.as_str());
            }
            PageEvent::SystemThemeChanged { prefers_dark } => {
                if !self.on_system_preference_change(*prefers_dark, effects) {
                    log::debug!("ignoring OS theme change: preference is persisted");
                }
            }
            _ => {}
        }
    }
}
