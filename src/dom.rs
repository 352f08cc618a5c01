use crate::error::{Result, UiError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(UiError::NoDocument)
}

pub fn body(document: &Document) -> Result<HtmlElement> {
    document.body().ok_or(UiError::NoBody)
}

pub fn query(document: &Document, selector: &str) -> Result<Option<Element>> {
    Ok(document.query_selector(selector)?)
}

/// All matches of `selector` that are of type `T`, in document order.
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

/// Registers `handler` for the page lifetime.
pub fn on<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// True when the event landed on the element the listener is attached to
/// rather than on one of its descendants.
pub fn is_direct_target(event: &Event) -> bool {
    match (event.target(), event.current_target()) {
        (Some(target), Some(current)) => JsValue::from(target) == JsValue::from(current),
        _ => false,
    }
}

pub fn set_scroll_lock(body: &HtmlElement, locked: bool) -> Result<()> {
    let style = body.style();
    if locked {
        style.set_property("overflow", "hidden")?;
    } else {
        style.remove_property("overflow")?;
    }
    Ok(())
}

pub fn set_root_attribute(document: &Document, name: &str, value: &str) -> Result<()> {
    let root = document.document_element().ok_or(UiError::NoDocument)?;
    root.set_attribute(name, value)?;
    Ok(())
}
