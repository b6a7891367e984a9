//! Event/effect vocabulary shared by every page behavior.
//!
//! The browser layer translates DOM callbacks into [`PageEvent`]s, hands them
//! to each registered [`Behavior`], and applies the [`DomEffect`]s that come
//! back. Behaviors never touch the document directly, so each one can be
//! exercised in tests without a browser.

/// An element the effects can address.
///
/// Indexed variants refer to positions in the element lists the browser layer
/// collected at mount time (document order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The document root (`<html>`).
    Root,
    /// The light/dark toggle button.
    ThemeToggle,
    Navbar,
    /// The hamburger button that opens the mobile menu.
    NavToggle,
    /// The container holding the navigation links.
    NavMenu,
    /// The n-th navigation link.
    NavLink(usize),
    /// The n-th reveal-marked element.
    Reveal(usize),
    /// The `child`-th reveal element inside the `container`-th stagger container.
    StaggerChild { container: usize, child: usize },
}

/// A DOM callback, reduced to the data behaviors need.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// The document finished parsing and behaviors were mounted.
    Loaded {
        /// Current value of the theme attribute on the root, if any.
        root_theme: Option<String>,
        /// Whether the OS reports a dark color-scheme preference.
        prefers_dark: bool,
        /// `window.scrollY` at mount time.
        scroll_y: f64,
    },
    /// The theme toggle was clicked.
    ThemeToggleClicked {
        /// Theme attribute on the root at click time.
        root_theme: Option<String>,
    },
    /// The OS color-scheme preference changed.
    SystemThemeChanged { prefers_dark: bool },
    Scrolled { scroll_y: f64 },
    /// An intersection entry arrived for a reveal-marked element.
    RevealIntersected { index: usize, is_intersecting: bool },
    /// An intersection entry arrived for a page section.
    SectionIntersected { section_id: Option<String>, is_intersecting: bool },
    MenuToggleClicked,
    /// A link inside the mobile menu was clicked.
    MenuLinkClicked,
    /// A same-page fragment link was clicked.
    AnchorClicked { href: String },
}

/// A mutation the browser layer performs on behalf of a behavior.
#[derive(Debug, Clone, PartialEq)]
pub enum DomEffect {
    SetAttribute { target: Target, name: String, value: String },
    /// Add (`on == true`) or remove a class.
    SetClass { target: Target, class: &'static str, on: bool },
    /// Stop delivering intersection entries for the element.
    Unobserve { target: Target },
    /// Smooth-scroll the element with this id into view, if it exists.
    ScrollIntoView { id: String },
    SetTransitionDelay { target: Target, delay: String },
    /// Suppress the default action of the event being dispatched.
    PreventDefault,
}

/// One independently registered page behavior.
pub trait Behavior {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// React to `event`, pushing any resulting mutations onto `effects`.
    ///
    /// Events a behavior does not care about are ignored.
    fn handle(&mut self, event: &PageEvent, effects: &mut Vec<DomEffect>);
}
