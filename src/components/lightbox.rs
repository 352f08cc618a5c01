use leptos::prelude::*;
use crate::app::LightboxCtx;
use crate::config::SiteConfig;
use crate::dom::is_direct_target;
use crate::state::LightboxCommand;

/// Class names for the overlay and its controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightboxClasses {
    prefix: String,
    active: String,
}

impl LightboxClasses {
    pub fn new(prefix: impl Into<String>, active: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            active: active.into(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.lightbox_class.as_str(), config.active_class.as_str())
    }

    pub fn overlay(&self, is_open: bool) -> String {
        if is_open {
            format!("{} {}", self.prefix, self.active)
        } else {
            self.prefix.clone()
        }
    }

    pub fn close(&self) -> String {
        format!("{}-close", self.prefix)
    }

    pub fn previous(&self) -> String {
        format!("{0}-nav {0}-prev", self.prefix)
    }

    pub fn next(&self) -> String {
        format!("{0}-nav {0}-next", self.prefix)
    }

    pub fn caption(&self) -> String {
        format!("{}-caption", self.prefix)
    }
}

/// Modal image viewer appended to `<body>`.
///
/// Visibility is the active class alone; presentation lives in the site CSS.
#[component]
pub fn LightboxOverlay(ctx: LightboxCtx, classes: LightboxClasses) -> impl IntoView {
    let dispatch = move |command: LightboxCommand| {
        ctx.set_lightbox.update(|lb| {
            lb.apply(command);
        });
    };

    // Clicks on the image or the controls bubble up here; only the backdrop closes.
    let on_backdrop = move |ev: web_sys::MouseEvent| {
        if is_direct_target(&ev) {
            dispatch(LightboxCommand::Close);
        }
    };

    let source = move || ctx.lightbox.with(|lb| lb.displayed().source.clone());
    let caption = move || ctx.lightbox.with(|lb| lb.displayed().caption.clone());

    let close_class = classes.close();
    let previous_class = classes.previous();
    let next_class = classes.next();
    let caption_class = classes.caption();
    let overlay_class = move || classes.overlay(ctx.lightbox.with(|lb| lb.is_open()));

    view! {
        <div class=overlay_class on:click=on_backdrop>
            <button
                class=close_class
                aria-label="Close"
                on:click=move |_| dispatch(LightboxCommand::Close)
            >
                "\u{00d7}"
            </button>
            <button
                class=previous_class
                aria-label="Previous"
                on:click=move |_| dispatch(LightboxCommand::Previous)
            >
                "\u{2039}"
            </button>
            <button
                class=next_class
                aria-label="Next"
                on:click=move |_| dispatch(LightboxCommand::Next)
            >
                "\u{203a}"
            </button>
            <img src=source alt=caption />
            <div class=caption_class>{caption}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_site_markup() {
        let classes = LightboxClasses::from_config(&SiteConfig::default());
        assert_eq!(classes.overlay(false), "lightbox");
        assert_eq!(classes.overlay(true), "lightbox active");
        assert_eq!(classes.close(), "lightbox-close");
        assert_eq!(classes.previous(), "lightbox-nav lightbox-prev");
        assert_eq!(classes.next(), "lightbox-nav lightbox-next");
        assert_eq!(classes.caption(), "lightbox-caption");
    }

    #[test]
    fn active_class_shared_with_nav_override() {
        let mut config = SiteConfig::default();
        config.active_class = "is-open".to_string();
        config.lightbox_class = "viewer".to_string();
        let classes = LightboxClasses::from_config(&config);
        assert_eq!(classes.overlay(true), "viewer is-open");
        assert_eq!(classes.overlay(false), "viewer");
        assert_eq!(classes.close(), "viewer-close");
        assert_eq!(classes.caption(), "viewer-caption");
    }
}
