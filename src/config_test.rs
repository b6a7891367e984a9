use super::*;

#[test]
fn defaults_match_stock_markup() {
    let config = SiteConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.theme_attribute, "data-theme");
    assert_eq!(config.theme_toggle_id, "theme-toggle");
    assert_eq!(config.nav_menu_id, "nav-links");
    assert_eq!(config.reveal.root_margin, "0px 0px -40px 0px");
    assert_eq!(config.sections.root_margin, "-80px 0px -40% 0px");
    assert!((config.reveal.threshold - 0.15).abs() < f64::EPSILON);
    assert!((config.navbar_scroll_threshold_px - 40.0).abs() < f64::EPSILON);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn defaults_validate() {
    assert!(SiteConfig::default().validate().is_ok());
}

#[test]
fn empty_object_yields_defaults() {
    let config = SiteConfig::from_json("{}").unwrap();
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = SiteConfig::from_json(r#"{"storage_key":"site-theme","log_level":"debug"}"#).unwrap();
    assert_eq!(config.storage_key, "site-theme");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.navbar_id, "navbar");
}

#[test]
fn nested_partial_override_keeps_sibling_fields() {
    let config = SiteConfig::from_json(r#"{"storage_key":"site-theme","reveal":{"threshold":0.2}}"#).unwrap();
    assert!((config.reveal.threshold - 0.2).abs() < f64::EPSILON);
    assert_eq!(config.reveal.root_margin, "0px 0px -40px 0px");
    assert_eq!(config.storage_key, "site-theme");
    assert_eq!(config.sections, SiteConfig::default().sections);
}

#[test]
fn nested_margin_override_keeps_section_threshold() {
    let config = SiteConfig::from_json(r#"{"sections":{"root_margin":"0px"}}"#).unwrap();
    assert_eq!(config.sections.root_margin, "0px");
    assert!((config.sections.threshold - 0.3).abs() < f64::EPSILON);
}

#[test]
fn unknown_keys_are_ignored() {
    let config = SiteConfig::from_json(r#"{"future_option":true}"#).unwrap();
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn non_object_block_is_parse_error() {
    assert!(matches!(SiteConfig::from_json("[1, 2]"), Err(ConfigError::Parse(_))));
}

#[test]
fn wrong_value_type_is_parse_error() {
    assert!(matches!(SiteConfig::from_json(r#"{"reveal":{"threshold":"high"}}"#), Err(ConfigError::Parse(_))));
}

#[test]
fn malformed_json_is_parse_error() {
    let err = SiteConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn threshold_out_of_range_is_rejected() {
    let err =
        SiteConfig::from_json(r#"{"reveal":{"threshold":1.5,"root_margin":"0px"}}"#).unwrap_err();
    match err {
        ConfigError::Invalid { field, .. } => assert_eq!(field, "reveal.threshold"),
        other => panic!("expected Invalid, got {other:?}"),
    }
}

#[test]
fn negative_scroll_threshold_is_rejected() {
    let err = SiteConfig::from_json(r#"{"navbar_scroll_threshold_px":-1}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "navbar_scroll_threshold_px", .. }));
}

#[test]
fn negative_stagger_step_is_rejected() {
    let err = SiteConfig::from_json(r#"{"stagger_step_secs":-0.1}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "stagger_step_secs", .. }));
}

#[test]
fn empty_storage_key_is_rejected() {
    let err = SiteConfig::from_json(r#"{"storage_key":""}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "storage_key", .. }));
}

#[test]
fn log_level_maps_to_log_crate() {
    assert_eq!(LogLevel::Warn.to_level(), log::Level::Warn);
    assert_eq!(LogLevel::Trace.to_level(), log::Level::Trace);
}
