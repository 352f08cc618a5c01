//! Theme switcher.
//!
//! The chosen theme is persisted under a single `localStorage` key and
//! applied as an attribute on `<html>` so stylesheets can key off it.

use crate::config::SiteConfig;
use crate::dom;
use crate::error::Result;
use web_sys::Document;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Sepia,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Sepia];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Sepia => "sepia",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    pub fn next(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Sepia,
            Theme::Sepia => Theme::Light,
        }
    }
}

/// Where the theme identifier lives between page loads.
pub trait ThemeStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// Browser `localStorage`. Unavailable storage (private mode, disabled
/// cookies) degrades to "nothing stored".
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl ThemeStore for LocalStorageStore {
    fn load(&self, key: &str) -> Option<String> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn save(&mut self, key: &str, value: &str) {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            log::debug!("localStorage unavailable; theme not persisted");
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::debug!("failed to persist theme: {err:?}");
        }
    }
}

/// Current theme plus the store it is persisted to.
#[derive(Debug)]
pub struct ThemeSettings<S> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: ThemeStore> ThemeSettings<S> {
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let current = store
            .load(&key)
            .and_then(|value| Theme::parse(&value))
            .unwrap_or_default();
        Self { store, key, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Advances to the next theme and persists it.
    pub fn cycle(&mut self) -> Theme {
        self.current = self.current.next();
        self.store.save(&self.key, self.current.as_str());
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Applies the stored theme and, if the page has a toggle control, binds it.
/// Returns whether the toggle was bound.
pub fn install(document: &Document, config: &SiteConfig) -> Result<bool> {
    let mut settings = ThemeSettings::load(LocalStorageStore, config.theme_storage_key.as_str());
    dom::set_root_attribute(document, &config.theme_attribute, settings.current().as_str())?;

    let Some(toggle) = dom::query(document, &config.theme_toggle_selector)? else {
        log::debug!("no theme toggle on page");
        return Ok(false);
    };

    let document = document.clone();
    let attribute = config.theme_attribute.clone();
    dom::on(&toggle, "click", move |_| {
        let theme = settings.cycle();
        if let Err(err) = dom::set_root_attribute(&document, &attribute, theme.as_str()) {
            log::warn!("failed to apply theme {}: {err}", theme.as_str());
        }
    })?;
    Ok(true)
}
