use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures that stop a feature from being wired into the page.
///
/// Missing *optional* markup (no gallery, no theme control) is not an error;
/// those features simply stay inactive.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("no global window object")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body element")]
    NoBody,
    #[error("DOM call failed: {0}")]
    Js(String),
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_wraps_serde_message() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let ui: UiError = err.into();
        assert!(matches!(ui, UiError::Config(_)));
        assert!(ui.to_string().starts_with("invalid site config:"));
    }

    #[test]
    fn display_messages() {
        assert_eq!(UiError::NoBody.to_string(), "document has no body element");
        assert_eq!(
            UiError::Js("TypeError".to_string()).to_string(),
            "DOM call failed: TypeError"
        );
    }
}
