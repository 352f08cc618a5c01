mod lightbox;

pub use lightbox::{LightboxClasses, LightboxOverlay};
