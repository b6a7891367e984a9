use super::*;

fn links() -> ActiveLinks {
    ActiveLinks::new(vec![
        Some("#about".to_string()),
        Some("#work".to_string()),
        None,
        Some("/resume.pdf".to_string()),
        Some("#contact".to_string()),
    ])
}

fn active_flags(effects: &[DomEffect]) -> Vec<bool> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            DomEffect::SetClass { target: Target::NavLink(_), class: "active", on } => Some(*on),
            _ => None,
        })
        .collect()
}

#[test]
fn intersecting_section_activates_matching_link_only() {
    let mut nav = links();
    let mut effects = Vec::new();
    nav.on_section(Some("work"), true, &mut effects);
    assert_eq!(active_flags(&effects), vec![false, true, false, false, false]);
    assert_eq!(nav.active(), Some(1));
}

#[test]
fn leaving_section_changes_nothing() {
    let mut nav = links();
    let mut effects = Vec::new();
    nav.on_section(Some("about"), true, &mut effects);
    effects.clear();
    nav.on_section(Some("about"), false, &mut effects);
    assert!(effects.is_empty());
    assert_eq!(nav.active(), Some(0));
}

#[test]
fn last_intersecting_entry_wins() {
    let mut nav = links();
    let mut effects = Vec::new();
    nav.on_section(Some("about"), true, &mut effects);
    nav.on_section(Some("contact"), true, &mut effects);
    assert_eq!(nav.active(), Some(4));
    let last_batch = &effects[effects.len() - 5..];
    assert_eq!(active_flags(last_batch), vec![false, false, false, false, true]);
}

#[test]
fn section_without_id_clears_all_links() {
    let mut nav = links();
    let mut effects = Vec::new();
    nav.on_section(Some("about"), true, &mut effects);
    effects.clear();
    nav.on_section(None, true, &mut effects);
    assert_eq!(active_flags(&effects), vec![false; 5]);
    assert_eq!(nav.active(), None);
}

#[test]
fn unknown_section_clears_all_links() {
    let mut nav = links();
    let mut effects = Vec::new();
    nav.on_section(Some("hero"), true, &mut effects);
    assert!(active_flags(&effects).iter().all(|on| !on));
}

#[test]
fn duplicate_hrefs_mark_only_first() {
    let mut nav = ActiveLinks::new(vec![Some("#a".into()), Some("#a".into())]);
    let mut effects = Vec::new();
    nav.on_section(Some("a"), true, &mut effects);
    assert_eq!(active_flags(&effects), vec![true, false]);
}

#[test]
fn link_for_matches_fragment() {
    let nav = links();
    assert_eq!(nav.link_for(Some("contact")), Some(4));
    assert_eq!(nav.link_for(Some("missing")), None);
    assert_eq!(nav.link_for(None), None);
}
