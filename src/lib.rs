//! Client-side enhancements for a static personal site, compiled to WebAssembly.
//!
//! Each behavior is a small state machine that turns [`behavior::PageEvent`]s
//! into [`behavior::DomEffect`]s. The [`page::Page`] core runs them without a
//! browser, which is what the tests exercise; the `dom` module (behind the
//! `browser` feature) binds real listeners and observers and applies effects.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Light/dark resolution, toggle, OS preference tracking |
//! | [`storage`] | Best-effort preference persistence |
//! | [`reveal`] | One-way scroll reveal |
//! | [`navbar`] | Navbar `scrolled` state |
//! | [`active_link`] | Active navigation link for the visible section |
//! | [`mobile_menu`] | Mobile menu open/close |
//! | [`anchors`] | Smooth scrolling for fragment links |
//! | [`stagger`] | Staggered reveal delays in grid containers |
//! | [`behavior`] | Shared event/effect vocabulary and the `Behavior` trait |
//! | [`page`] | Behavior registration and dispatch |
//! | [`config`] | Page configuration and its JSON override |
//! | [`consts`] | Default ids, selectors, and tuning values |

pub mod active_link;
pub mod anchors;
pub mod behavior;
pub mod config;
pub mod consts;
#[cfg(feature = "browser")]
pub mod dom;
pub mod mobile_menu;
pub mod navbar;
pub mod page;
pub mod reveal;
pub mod stagger;
pub mod storage;
pub mod theme;

#[cfg(feature = "browser")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: install logging, load configuration, and mount.
#[cfg(feature = "browser")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let parsed = dom::config_source().map(|raw| config::SiteConfig::from_json(&raw));
    let level = match &parsed {
        Some(Ok(config)) => config.log_level,
        _ => config::LogLevel::default(),
    };
    if let Err(err) = console_log::init_with_level(level.to_level()) {
        log::debug!("logger already installed: {err}");
    }

    let config = match parsed {
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            log::warn!("ignoring page config: {err}");
            config::SiteConfig::default()
        }
        None => config::SiteConfig::default(),
    };

    if let Err(err) = dom::run(config) {
        log::error!("site-enhance failed to start: {err}");
    }
}
