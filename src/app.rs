use crate::components::{LightboxClasses, LightboxOverlay};
use crate::config::SiteConfig;
use crate::error::Result;
use crate::state::{ImageDescriptor, ImageSet, Lightbox, LightboxCommand};
use crate::{confirm, dom, nav, theme};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlImageElement, KeyboardEvent};

/// Signals for the single page-wide lightbox.
#[derive(Clone, Copy)]
pub struct LightboxCtx {
    pub lightbox: ReadSignal<Lightbox>,
    pub set_lightbox: WriteSignal<Lightbox>,
}

type Install<'a> = Box<dyn FnOnce() -> Result<bool> + 'a>;

fn feature<'a>(
    name: &'static str,
    install: impl FnOnce() -> Result<bool> + 'a,
) -> (&'static str, Install<'a>) {
    (name, Box::new(install))
}

/// Runs each feature's install on its own; a failing feature is logged and
/// the rest still run. Returns the names of the features that activated.
fn install_features<'a>(features: Vec<(&'static str, Install<'a>)>) -> Vec<&'static str> {
    let mut active = Vec::new();
    for (name, install) in features {
        match install() {
            Ok(true) => {
                log::info!("{name} active");
                active.push(name);
            }
            Ok(false) => log::debug!("{name} inactive on this page"),
            Err(err) => log::warn!("{name} failed to start: {err}"),
        }
    }
    active
}

/// Wires every feature into the current page. Features whose markup is
/// missing stay inactive, and one feature failing leaves the others alone.
pub fn boot() -> Result<()> {
    let document = dom::document()?;
    let config = SiteConfig::load(&document);

    install_features(vec![
        feature("nav toggle", || nav::install(&document, &config)),
        feature("theme switcher", || theme::install(&document, &config)),
        feature("confirm guard", || confirm::install(&document, &config)),
        feature("lightbox", || mount_lightbox(&document, &config)),
    ]);
    Ok(())
}

/// Whether the body style needs writing when the lock goes to `locked`.
/// Nothing is written until the lightbox first opens, so the page's own
/// inline `overflow` survives until then.
fn scroll_lock_changed(previous: Option<bool>, locked: bool) -> bool {
    previous.unwrap_or(false) != locked
}

fn describe(img: &HtmlImageElement, config: &SiteConfig) -> ImageDescriptor {
    ImageDescriptor::new(img.src(), img.get_attribute(&config.caption_attribute))
}

/// Enumerates the gallery once, then builds the overlay and binds its
/// triggers. With no gallery images nothing is inserted or bound and this
/// returns `Ok(false)`.
pub fn mount_lightbox(document: &Document, config: &SiteConfig) -> Result<bool> {
    let elements: Vec<HtmlImageElement> = dom::query_all(document, &config.gallery_selector)?;
    let images: ImageSet = elements.iter().map(|img| describe(img, config)).collect();
    let Some(initial) = Lightbox::new(images) else {
        return Ok(false);
    };
    let body = dom::body(document)?;

    let (lightbox, set_lightbox) = signal(initial);
    let ctx = LightboxCtx { lightbox, set_lightbox };
    let classes = LightboxClasses::from_config(config);

    for (index, img) in elements.iter().enumerate() {
        let index = index as isize;
        dom::on(img, "click", move |_| set_lightbox.update(|lb| lb.open(index)))?;
    }

    dom::on(document, "keydown", move |event: Event| {
        let Some(command) = event
            .dyn_ref::<KeyboardEvent>()
            .and_then(|ev| LightboxCommand::from_key(&ev.key()))
        else {
            return;
        };
        // Closed lightbox ignores keys without touching the signal.
        if lightbox.with_untracked(|lb| lb.is_open()) {
            set_lightbox.update(|lb| {
                lb.apply(command);
            });
        }
    })?;

    let body_for_lock = body.clone();
    leptos::mount::mount_to(body, move || {
        Effect::new(move |previous: Option<bool>| {
            let locked = lightbox.with(|lb| lb.state().scroll_locked());
            if scroll_lock_changed(previous, locked) {
                if let Err(err) = dom::set_scroll_lock(&body_for_lock, locked) {
                    log::warn!("scroll lock failed: {err}");
                }
            }
            locked
        });
        view! { <LightboxOverlay ctx=ctx classes=classes /> }
    })
    .forget();

    Ok(true)
}
