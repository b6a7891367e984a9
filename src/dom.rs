//! Browser glue: collects elements, binds listeners and observers, and
//! applies the [`DomEffect`]s returned by the page core.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here runs on the UI thread. Each callback borrows the shared
//! [`Page`] for one dispatch, releases it, then mutates the document. Listener
//! closures are leaked on purpose: they live as long as the page does.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MediaQueryList, MediaQueryListEvent, NodeList,
    ScrollBehavior, ScrollIntoViewOptions, Window,
};

use crate::behavior::{DomEffect, PageEvent, Target};
use crate::config::{ObserverConfig, SiteConfig};
use crate::consts::{CLASS_OPEN, CONFIG_SCRIPT_ID, DARK_SCHEME_QUERY};
use crate::page::{Page, PageLayout};
use crate::storage::{LocalStorage, PreferenceStore};

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "dom_test.rs"]
mod dom_test;

#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no root element")]
    NoRoot,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

/// Raw text of the inline config block, if the page has one.
#[must_use]
pub fn config_source() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_SCRIPT_ID)?
        .text_content()
}

/// Mount once the document is parsed.
///
/// # Errors
///
/// Returns [`MountError`] when the window or document is missing, or when
/// mounting immediately fails.
pub fn run(config: SiteConfig) -> Result<(), MountError> {
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;

    if document.ready_state() != "loading" {
        return mount(window, document, config);
    }

    let deferred_document = document.clone();
    let on_ready = Closure::once_into_js(move || {
        if let Err(err) = mount(window, deferred_document, config) {
            log::error!("mount failed: {err}");
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    Ok(())
}

// =============================================================================
// ELEMENTS
// =============================================================================

struct Elements {
    root: Element,
    theme_toggle: Option<Element>,
    navbar: Option<Element>,
    nav_toggle: Option<Element>,
    nav_menu: Option<Element>,
    nav_links: Vec<Element>,
    menu_links: Vec<Element>,
    reveals: Vec<Element>,
    sections: Vec<Element>,
    anchors: Vec<Element>,
    stagger_children: Vec<Vec<HtmlElement>>,
}

impl Elements {
    fn collect(document: &Document, config: &SiteConfig) -> Result<Self, MountError> {
        let root = document.document_element().ok_or(MountError::NoRoot)?;
        let nav_toggle = document.get_element_by_id(&config.nav_toggle_id);
        let nav_menu = document.get_element_by_id(&config.nav_menu_id);
        let menu_links = nav_menu
            .as_ref()
            .map(|menu| elements_of(menu.query_selector_all("a"), "a"))
            .unwrap_or_default();
        let stagger_children = query(document, &config.stagger_container_selector)
            .iter()
            .map(|container| {
                elements_of(container.query_selector_all(&config.reveal_selector), &config.reveal_selector)
                    .into_iter()
                    .filter_map(|el| el.dyn_ref::<HtmlElement>().cloned())
                    .collect()
            })
            .collect();

        Ok(Self {
            root,
            theme_toggle: document.get_element_by_id(&config.theme_toggle_id),
            navbar: document.get_element_by_id(&config.navbar_id),
            nav_toggle,
            nav_menu,
            nav_links: query(document, &config.nav_link_selector),
            menu_links,
            reveals: query(document, &config.reveal_selector),
            sections: query(document, &config.section_selector),
            anchors: query(document, &config.anchor_selector),
            stagger_children,
        })
    }

    fn layout(&self) -> PageLayout {
        PageLayout {
            has_theme_toggle: self.theme_toggle.is_some(),
            has_navbar: self.navbar.is_some(),
            has_mobile_menu: self.nav_toggle.is_some() && self.nav_menu.is_some(),
            menu_open: self.nav_menu.as_ref().is_some_and(|menu| menu.class_list().contains(CLASS_OPEN)),
            reveal_count: self.reveals.len(),
            nav_link_hrefs: self.nav_links.iter().map(|link| link.get_attribute("href")).collect(),
            stagger_child_counts: self.stagger_children.iter().map(Vec::len).collect(),
        }
    }

    fn get(&self, target: Target) -> Option<&Element> {
        match target {
            Target::Root => Some(&self.root),
            Target::ThemeToggle => self.theme_toggle.as_ref(),
            Target::Navbar => self.navbar.as_ref(),
            Target::NavToggle => self.nav_toggle.as_ref(),
            Target::NavMenu => self.nav_menu.as_ref(),
            Target::NavLink(index) => self.nav_links.get(index),
            Target::Reveal(index) => self.reveals.get(index),
            Target::StaggerChild { .. } => self.stagger_child(target).map(|el| &**el),
        }
    }

    fn stagger_child(&self, target: Target) -> Option<&HtmlElement> {
        match target {
            Target::StaggerChild { container, child } => self.stagger_children.get(container)?.get(child),
            _ => None,
        }
    }
}

fn query(document: &Document, selector: &str) -> Vec<Element> {
    elements_of(document.query_selector_all(selector), selector)
}

fn elements_of(list: Result<NodeList, JsValue>, selector: &str) -> Vec<Element> {
    match list {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_ref::<Element>().cloned())
            .collect(),
        Err(err) => {
            log::warn!("invalid selector {selector:?}: {err:?}");
            Vec::new()
        }
    }
}

// =============================================================================
// MOUNT
// =============================================================================

struct Mounted<S> {
    document: Document,
    config: SiteConfig,
    elements: Elements,
    page: RefCell<Page<S>>,
    reveal_observer: RefCell<Option<IntersectionObserver>>,
}

fn mount(window: Window, document: Document, config: SiteConfig) -> Result<(), MountError> {
    attach(&window, document, config, LocalStorage)?;
    Ok(())
}

/// Collect elements, bind every listener, and run the initial dispatch.
fn attach<S: PreferenceStore + 'static>(
    window: &Window,
    document: Document,
    config: SiteConfig,
    store: S,
) -> Result<Rc<Mounted<S>>, MountError> {
    let elements = Elements::collect(&document, &config)?;
    let layout = elements.layout();
    let page = Page::new(&config, layout, store);
    log::info!(
        "mounting {} behaviors ({} reveal, {} sections, {} nav links)",
        page.behavior_names().len(),
        elements.reveals.len(),
        elements.sections.len(),
        elements.nav_links.len(),
    );

    let mounted = Rc::new(Mounted {
        document,
        config,
        elements,
        page: RefCell::new(page),
        reveal_observer: RefCell::new(None),
    });

    let color_scheme = match window.match_media(DARK_SCHEME_QUERY) {
        Ok(query) => query,
        Err(err) => {
            log::debug!("matchMedia unavailable: {err:?}");
            None
        }
    };
    let prefers_dark = color_scheme.as_ref().is_some_and(MediaQueryList::matches);
    let scroll_y = window.scroll_y().unwrap_or_default();

    bind_theme_toggle(&mounted);
    if let Some(query) = color_scheme {
        bind_color_scheme(&mounted, &query);
    }
    bind_scroll(&mounted, window);
    bind_reveal(&mounted);
    bind_sections(&mounted);
    bind_mobile_menu(&mounted);
    bind_anchors(&mounted);

    let root_theme = mounted.elements.root.get_attribute(&mounted.config.theme_attribute);
    dispatch(&mounted, &PageEvent::Loaded { root_theme, prefers_dark, scroll_y }, None);
    Ok(mounted)
}

fn listen(target: &EventTarget, kind: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref()) {
        log::warn!("failed to listen for {kind}: {err:?}");
    }
    closure.forget();
}

fn bind_theme_toggle<S: PreferenceStore + 'static>(mounted: &Rc<Mounted<S>>) {
    let Some(toggle) = &mounted.elements.theme_toggle else {
        log::debug!("no theme toggle; theme is resolved but not switchable");
        return;
    };
    let shared = Rc::clone(mounted);
    listen(toggle, "click", move |_| {
        let root_theme = shared.elements.root.get_attribute(&shared.config.theme_attribute);
        dispatch(&shared, &PageEvent::ThemeToggleClicked { root_theme }, None);
    });
}

fn bind_color_scheme<S: PreferenceStore + 'static>(mounted: &Rc<Mounted<S>>, query: &MediaQueryList) {
    let shared = Rc::clone(mounted);
    let closure = Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
        dispatch(&shared, &PageEvent::SystemThemeChanged { prefers_dark: event.matches() }, None);
    });
    let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
    if let Err(err) = query.add_event_listener_with_callback("change", callback) {
        // Older Safari only supports the legacy listener API.
        log::debug!("MediaQueryList change listener failed ({err:?}); using addListener");
        if let Err(err) = query.add_listener_with_opt_callback(Some(callback)) {
            log::warn!("cannot follow OS theme changes: {err:?}");
        }
    }
    closure.forget();
}

fn bind_scroll<S: PreferenceStore + 'static>(mounted: &Rc<Mounted<S>>, window: &Window) {
    if mounted.elements.navbar.is_none() {
        return;
    }
    let shared = Rc::clone(mounted);
    let scroll_window = window.clone();
    let closure = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        let Ok(scroll_y) = scroll_window.scroll_y() else {
            return;
        };
        dispatch(&shared, &PageEvent::Scrolled { scroll_y }, None);
    });
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        log::warn!("failed to listen for scroll: {err:?}");
    }
    closure.forget();
}

fn observe(
    elements: &[Element],
    tuning: &ObserverConfig,
    mut on_entry: impl FnMut(&IntersectionObserverEntry) + 'static,
) -> Result<IntersectionObserver, MountError> {
    let closure = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() {
                    on_entry(entry);
                }
            }
        },
    );
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(tuning.threshold));
    init.set_root_margin(&tuning.root_margin);
    let observer = IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)?;
    closure.forget();
    for element in elements {
        observer.observe(element);
    }
    Ok(observer)
}

fn bind_reveal<S: PreferenceStore + 'static>(mounted: &Rc<Mounted<S>>) {
    if mounted.elements.reveals.is_empty() {
        return;
    }
    let shared = Rc::clone(mounted);
    let result = observe(&mounted.elements.reveals, &mounted.config.reveal, move |entry| {
        let target = entry.target();
        if let Some(index) = shared.elements.reveals.iter().position(|el| *el == target) {
            let event = PageEvent::RevealIntersected { index, is_intersecting: entry.is_intersecting() };
            dispatch(&shared, &event, None);
        }
    });
    match result {
        Ok(observer) => *mounted.reveal_observer.borrow_mut() = Some(observer),
        Err(err) => {
            log::warn!("IntersectionObserver unavailable ({err}); revealing all elements");
            reveal_all(mounted);
        }
    }
}

/// Without an observer nothing would ever reveal, so show everything now.
fn reveal_all<S: PreferenceStore>(mounted: &Mounted<S>) {
    for index in 0..mounted.elements.reveals.len() {
        dispatch(mounted, &PageEvent::RevealIntersected { index, is_intersecting: true }, None);
    }
}

fn bind_sections<S: PreferenceStore + 'static>(mounted: &Rc<Mounted<S>>) {
    if mounted.elements.sections.is_empty() || mounted.elements.nav_links.is_empty() {
        return;
    }
    let shared = Rc::clone(mounted);
    if let Err(err) = observe(&mounted.elements.sections, &mounted.config.sections, move |entry| {
        let event = PageEvent::SectionIntersected {
            section_id: entry.target().get_attribute("id"),
            is_intersecting: entry.is_intersecting(),
        };
        dispatch(&shared, &event, None);
    }) {
        log::warn!("active link tracking disabled: {err}");
    }
}

fn bind_mobile_menu<S: PreferenceStore + 'static>(mounted: &Rc<Mounted<S>>) {
    let Some(toggle) = &mounted.elements.nav_toggle else {
        return;
    };
    if mounted.elements.nav_menu.is_none() {
        return;
    }
    let shared = Rc::clone(mounted);
    listen(toggle, "click", move |_| dispatch(&shared, &PageEvent::MenuToggleClicked, None));
    for link in &mounted.elements.menu_links {
        let shared = Rc::clone(mounted);
        listen(link, "click", move |_| dispatch(&shared, &PageEvent::MenuLinkClicked, None));
    }
}

fn bind_anchors<S: PreferenceStore + 'static>(mounted: &Rc<Mounted<S>>) {
    for anchor in &mounted.elements.anchors {
        let shared = Rc::clone(mounted);
        let link = anchor.clone();
        listen(anchor, "click", move |event| {
            let href = link.get_attribute("href").unwrap_or_default();
            dispatch(&shared, &PageEvent::AnchorClicked { href }, Some(&event));
        });
    }
}

// =============================================================================
// EFFECTS
// =============================================================================

fn dispatch<S: PreferenceStore>(mounted: &Mounted<S>, event: &PageEvent, dom_event: Option<&Event>) {
    let effects = mounted.page.borrow_mut().dispatch(event);
    for effect in effects {
        apply(mounted, effect, dom_event);
    }
}

fn report(result: Result<(), JsValue>, what: &str) {
    if let Err(err) = result {
        log::debug!("{what} failed: {err:?}");
    }
}

fn apply<S>(mounted: &Mounted<S>, effect: DomEffect, dom_event: Option<&Event>) {
    match effect {
        DomEffect::SetAttribute { target, name, value } => {
            if let Some(el) = mounted.elements.get(target) {
                report(el.set_attribute(&name, &value), "set attribute");
            }
        }
        DomEffect::SetClass { target, class, on } => {
            if let Some(el) = mounted.elements.get(target) {
                report(el.class_list().toggle_with_force(class, on).map(|_| ()), "toggle class");
            }
        }
        DomEffect::Unobserve { target } => {
            if let (Some(el), Some(observer)) =
                (mounted.elements.get(target), mounted.reveal_observer.borrow().as_ref())
            {
                observer.unobserve(el);
            }
        }
        DomEffect::ScrollIntoView { id } => match mounted.document.get_element_by_id(&id) {
            Some(el) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                el.scroll_into_view_with_scroll_into_view_options(&options);
            }
            None => log::debug!("anchor target #{id} not found"),
        },
        DomEffect::SetTransitionDelay { target, delay } => {
            if let Some(el) = mounted.elements.stagger_child(target) {
                report(el.style().set_property("transition-delay", &delay), "set transition delay");
            }
        }
        DomEffect::PreventDefault => {
            if let Some(event) = dom_event {
                event.prevent_default();
            }
        }
    }
}
