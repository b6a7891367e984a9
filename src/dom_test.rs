//! Browser tests for the effect layer.
//!
//! Run with `wasm-pack test --headless --firefox -- --features browser`. Each
//! test mounts onto its own detached HTML document so listeners never leak
//! between tests.

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, EventInit, HtmlElement};

use super::*;
use crate::storage::MemoryStore;

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r##"
<nav id="navbar">
  <button id="nav-toggle"></button>
  <ul id="nav-links" class="nav-links open">
    <li><a href="#about">About</a></li>
    <li><a id="dead-link" href="#nowhere">Gone</a></li>
  </ul>
</nav>
<button id="theme-toggle"></button>
<section id="about" class="section">
  <div class="skills-grid">
    <p class="reveal">one</p>
    <p class="reveal">two</p>
  </div>
</section>
"##;

fn fixture() -> Document {
    let document = web_sys::window().unwrap().document().unwrap();
    let fixture = document.implementation().unwrap().create_html_document_with_title("fixture").unwrap();
    fixture.body().unwrap().set_inner_html(FIXTURE);
    fixture
}

fn mount_fixture(store: MemoryStore) -> (Document, Rc<Mounted<MemoryStore>>) {
    let window = web_sys::window().unwrap();
    let document = fixture();
    let mounted = attach(&window, document.clone(), SiteConfig::default(), store).unwrap();
    (document, mounted)
}

/// Dispatch a cancelable, bubbling click and return it for inspection.
fn click(document: &Document, id: &str) -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("click", &init).unwrap();
    let target = document.get_element_by_id(id).unwrap();
    target.dispatch_event(&event).unwrap();
    event
}

fn has_class(document: &Document, id: &str, class: &str) -> bool {
    document.get_element_by_id(id).unwrap().class_list().contains(class)
}

fn root_theme(document: &Document) -> Option<String> {
    document.document_element().unwrap().get_attribute("data-theme")
}

// =============================================================
// Theme
// =============================================================

#[wasm_bindgen_test]
fn stored_theme_lands_on_real_elements() {
    let (document, _mounted) = mount_fixture(MemoryStore::with_entry("theme", "dark"));
    assert_eq!(root_theme(&document).as_deref(), Some("dark"));
    let toggle = document.get_element_by_id("theme-toggle").unwrap();
    assert_eq!(toggle.get_attribute("aria-pressed").as_deref(), Some("true"));
    assert_eq!(toggle.get_attribute("aria-label").as_deref(), Some("Switch to light mode"));
}

#[wasm_bindgen_test]
fn toggle_click_flips_root_and_persists() {
    let (document, mounted) = mount_fixture(MemoryStore::with_entry("theme", "dark"));
    click(&document, "theme-toggle");
    assert_eq!(root_theme(&document).as_deref(), Some("light"));
    assert_eq!(mounted.page.borrow().store().get("theme"), Some("light"));
    let toggle = document.get_element_by_id("theme-toggle").unwrap();
    assert_eq!(toggle.get_attribute("aria-pressed").as_deref(), Some("false"));
}

// =============================================================
// Anchors
// =============================================================

#[wasm_bindgen_test]
fn anchor_to_missing_target_prevents_default_without_error() {
    let (document, _mounted) = mount_fixture(MemoryStore::new());
    let event = click(&document, "dead-link");
    assert!(event.default_prevented());
}

// =============================================================
// Mobile menu
// =============================================================

#[wasm_bindgen_test]
fn menu_served_open_closes_on_first_toggle() {
    let (document, _mounted) = mount_fixture(MemoryStore::new());
    assert!(has_class(&document, "nav-links", "open"));
    click(&document, "nav-toggle");
    assert!(!has_class(&document, "nav-links", "open"));
    assert!(!has_class(&document, "nav-toggle", "active"));

    click(&document, "nav-toggle");
    assert!(has_class(&document, "nav-links", "open"));
    assert!(has_class(&document, "nav-toggle", "active"));

    click(&document, "dead-link");
    assert!(!has_class(&document, "nav-links", "open"));
}

// =============================================================
// Reveal / stagger
// =============================================================

fn reveals(document: &Document) -> Vec<Element> {
    elements_of(document.query_selector_all(".reveal"), ".reveal")
}

#[wasm_bindgen_test]
fn reveal_entry_marks_visible_and_unobserves() {
    let (document, mounted) = mount_fixture(MemoryStore::new());
    assert!(mounted.reveal_observer.borrow().is_some());

    dispatch(&mounted, &PageEvent::RevealIntersected { index: 0, is_intersecting: true }, None);
    let elements = reveals(&document);
    assert!(elements[0].class_list().contains("visible"));
    assert!(!elements[1].class_list().contains("visible"));

    dispatch(&mounted, &PageEvent::RevealIntersected { index: 0, is_intersecting: false }, None);
    assert!(elements[0].class_list().contains("visible"));
}

#[wasm_bindgen_test]
fn reveal_all_shows_every_element_without_observer() {
    let (document, mounted) = mount_fixture(MemoryStore::new());
    reveal_all(&mounted);
    assert!(reveals(&document).iter().all(|el| el.class_list().contains("visible")));
}

#[wasm_bindgen_test]
fn stagger_delays_land_on_children() {
    let (document, _mounted) = mount_fixture(MemoryStore::new());
    let delays: Vec<String> = reveals(&document)
        .iter()
        .map(|el| el.unchecked_ref::<HtmlElement>().style().get_property_value("transition-delay").unwrap())
        .collect();
    assert_eq!(delays, vec!["0s".to_string(), "0.1s".to_string()]);
}
