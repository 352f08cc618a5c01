use crate::config::SiteConfig;
use crate::dom;
use crate::error::Result;
use web_sys::Document;

/// Binds the mobile nav toggle. Returns `false` when the page lacks either
/// the toggle or the links panel.
pub fn install(document: &Document, config: &SiteConfig) -> Result<bool> {
    let toggle = dom::query(document, &config.nav_toggle_selector)?;
    let links = dom::query(document, &config.nav_links_selector)?;
    let (Some(toggle), Some(links)) = (toggle, links) else {
        log::debug!("no nav toggle on page");
        return Ok(false);
    };

    let class = config.active_class.clone();
    dom::on(&toggle, "click", move |_| {
        if let Err(err) = links.class_list().toggle(&class) {
            log::warn!("nav toggle failed: {err:?}");
        }
    })?;
    Ok(true)
}
