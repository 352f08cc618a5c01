//! Browser-side behavior for the Charon site, compiled to WASM and loaded on
//! every page: gallery lightbox, mobile nav toggle, theme switcher, and the
//! confirm guard for destructive actions.

pub mod app;
pub mod components;
pub mod config;
pub mod confirm;
pub mod dom;
pub mod error;
pub mod nav;
pub mod state;
pub mod theme;

pub use app::boot;
pub use error::{Result, UiError};
