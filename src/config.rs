//! Page hooks the scripts bind to.
//!
//! Defaults match the site templates. A page may override any subset by
//! embedding `<script type="application/json" id="charon-config">`.

use crate::error::Result;
use serde::Deserialize;
use web_sys::Document;

pub const CONFIG_ELEMENT_ID: &str = "charon-config";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    pub gallery_selector: String,
    pub caption_attribute: String,
    pub nav_toggle_selector: String,
    pub nav_links_selector: String,
    pub theme_toggle_selector: String,
    pub theme_storage_key: String,
    pub theme_attribute: String,
    pub confirm_attribute: String,
    /// Shared by the nav panel and the lightbox overlay.
    pub active_class: String,
    /// Base class of the overlay; controls are `{prefix}-close` and so on.
    pub lightbox_class: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            gallery_selector: ".gallery-images img".to_string(),
            caption_attribute: "data-caption".to_string(),
            nav_toggle_selector: ".nav-toggle".to_string(),
            nav_links_selector: ".nav-links".to_string(),
            theme_toggle_selector: ".theme-toggle".to_string(),
            theme_storage_key: "charon-theme".to_string(),
            theme_attribute: "data-theme".to_string(),
            confirm_attribute: "data-confirm".to_string(),
            active_class: "active".to_string(),
            lightbox_class: "lightbox".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the embedded override, falling back to defaults when it is
    /// absent or malformed.
    pub fn load(document: &Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&raw) {
            Ok(config) => {
                log::debug!("loaded site config from #{CONFIG_ELEMENT_ID}");
                config
            }
            Err(err) => {
                log::warn!("{err}; using defaults");
                Self::default()
            }
        }
    }

    pub fn confirm_selector(&self) -> String {
        format!("[{}]", self.confirm_attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UiError;

    #[test]
    fn defaults_match_templates() {
        let config = SiteConfig::default();
        assert_eq!(config.gallery_selector, ".gallery-images img");
        assert_eq!(config.caption_attribute, "data-caption");
        assert_eq!(config.theme_storage_key, "charon-theme");
        assert_eq!(config.active_class, "active");
        assert_eq!(config.lightbox_class, "lightbox");
    }

    #[test]
    fn lightbox_classes_follow_overrides() {
        let config = SiteConfig::from_json(
            r#"{ "active_class": "is-open", "lightbox_class": "viewer" }"#,
        )
        .unwrap();
        assert_eq!(config.lightbox_class, "viewer");
        assert_eq!(config.active_class, "is-open");
        assert_eq!(config.nav_links_selector, ".nav-links");
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = SiteConfig::from_json(
            r#"{ "gallery_selector": ".photos img", "theme_storage_key": "k" }"#,
        )
        .unwrap();
        assert_eq!(config.gallery_selector, ".photos img");
        assert_eq!(config.theme_storage_key, "k");
        assert_eq!(config.nav_toggle_selector, ".nav-toggle");
        assert_eq!(config.confirm_attribute, "data-confirm");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let config = SiteConfig::from_json(r#"{ "unused": 1 }"#).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, UiError::Config(_)));
    }

    #[test]
    fn wrong_field_type_is_config_error() {
        let err = SiteConfig::from_json(r#"{ "active_class": 3 }"#).unwrap_err();
        assert!(matches!(err, UiError::Config(_)));
    }

    #[test]
    fn confirm_selector_wraps_attribute() {
        let mut config = SiteConfig::default();
        assert_eq!(config.confirm_selector(), "[data-confirm]");
        config.confirm_attribute = "data-ask".to_string();
        assert_eq!(config.confirm_selector(), "[data-ask]");
    }
}
