//! Confirm-before-action guard for destructive links and buttons.

use crate::config::SiteConfig;
use crate::dom;
use crate::error::Result;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Proceed,
    Cancel,
}

impl ConfirmOutcome {
    /// Prompts only when the activated element carries a message.
    pub fn decide(message: Option<&str>, prompt: impl FnOnce(&str) -> bool) -> Self {
        match message {
            Some(msg) if !prompt(msg) => ConfirmOutcome::Cancel,
            _ => ConfirmOutcome::Proceed,
        }
    }
}

fn confirm_message(event: &Event, selector: &str, attribute: &str) -> Option<String> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()?
        .get_attribute(attribute)
}

/// One document-level click listener covering every `[data-confirm]` element,
/// including ones added after load.
pub fn install(document: &Document, config: &SiteConfig) -> Result<bool> {
    let window = dom::window()?;
    let selector = config.confirm_selector();
    let attribute = config.confirm_attribute.clone();

    dom::on(document, "click", move |event: Event| {
        let message = confirm_message(&event, &selector, &attribute);
        let outcome = ConfirmOutcome::decide(message.as_deref(), |msg| {
            // A blocked dialog counts as a decline.
            window.confirm_with_message(msg).unwrap_or(false)
        });
        if outcome == ConfirmOutcome::Cancel {
            log::debug!("action declined");
            event.prevent_default();
        }
    })?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn decline_cancels() {
        assert_eq!(
            ConfirmOutcome::decide(Some("Delete this article?"), |_| false),
            ConfirmOutcome::Cancel
        );
    }

    #[test]
    fn accept_proceeds() {
        assert_eq!(
            ConfirmOutcome::decide(Some("Delete this article?"), |_| true),
            ConfirmOutcome::Proceed
        );
    }

    #[test]
    fn no_attribute_never_prompts() {
        let prompted = Cell::new(false);
        let outcome = ConfirmOutcome::decide(None, |_| {
            prompted.set(true);
            false
        });
        assert_eq!(outcome, ConfirmOutcome::Proceed);
        assert!(!prompted.get());
    }

    #[test]
    fn prompt_receives_message() {
        let mut seen = String::new();
        ConfirmOutcome::decide(Some("Really?"), |msg| {
            seen = msg.to_string();
            true
        });
        assert_eq!(seen, "Really?");
    }

    #[test]
    fn empty_message_still_prompts() {
        let prompted = Cell::new(false);
        ConfirmOutcome::decide(Some(""), |_| {
            prompted.set(true);
            true
        });
        assert!(prompted.get());
    }
}
