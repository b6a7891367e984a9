//! Default values for page markers, selectors, and observer tuning.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the persisted theme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute on `<html>` that carries the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Media query reporting the OS dark-mode preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// ── Element ids ─────────────────────────────────────────────────

pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const NAVBAR_ID: &str = "navbar";
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_MENU_ID: &str = "nav-links";

/// Id of the optional inline JSON block overriding [`crate::config::SiteConfig`].
pub const CONFIG_SCRIPT_ID: &str = "site-enhance-config";

// ── Selectors ───────────────────────────────────────────────────

pub const REVEAL_SELECTOR: &str = ".reveal";
pub const SECTION_SELECTOR: &str = ".section, .hero";
pub const NAV_LINK_SELECTOR: &str = ".nav-links a";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const STAGGER_CONTAINER_SELECTOR: &str = ".involvement-grid, .skills-grid, .contact-links";

// ── State classes ───────────────────────────────────────────────

pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_OPEN: &str = "open";

// ── Observer tuning ─────────────────────────────────────────────

/// Fraction of a reveal element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Shrinks the viewport bottom so reveals fire slightly after entry.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";

/// Fraction of a section that must be visible before its link activates.
pub const SECTION_THRESHOLD: f64 = 0.3;

/// Biases section tracking toward the upper part of the viewport.
pub const SECTION_ROOT_MARGIN: &str = "-80px 0px -40% 0px";

// ── Scroll / animation ──────────────────────────────────────────

/// Vertical offset in CSS pixels above which the navbar is "scrolled".
pub const NAVBAR_SCROLL_THRESHOLD_PX: f64 = 40.0;

/// Per-child reveal delay inside stagger containers, in seconds.
pub const STAGGER_STEP_SECS: f64 = 0.1;
