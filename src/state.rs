use std::sync::Arc;

/// One gallery image as read from the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageDescriptor {
    pub source: String,
    pub caption: String,
}

impl ImageDescriptor {
    pub fn new(source: impl Into<String>, caption: Option<String>) -> Self {
        Self {
            source: source.into(),
            caption: caption.unwrap_or_default(),
        }
    }
}

/// Ordered gallery images, enumerated once at startup and never changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageSet {
    images: Arc<[ImageDescriptor]>,
}

impl ImageSet {
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ImageDescriptor> {
        self.images.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageDescriptor> {
        self.images.iter()
    }
}

impl From<Vec<ImageDescriptor>> for ImageSet {
    fn from(images: Vec<ImageDescriptor>) -> Self {
        Self {
            images: images.into(),
        }
    }
}

impl FromIterator<ImageDescriptor> for ImageSet {
    fn from_iter<I: IntoIterator<Item = ImageDescriptor>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

/// Open/closed flag and cursor for the one lightbox on the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LightboxState {
    pub is_open: bool,
    /// Keeps its last value while closed.
    pub current_index: usize,
}

impl LightboxState {
    /// Page-wide scroll lock: held exactly while the lightbox is open.
    pub fn scroll_locked(&self) -> bool {
        self.is_open
    }
}

/// Normalizes an index one step past either end back into `[0, len)`.
///
/// Only single-step overshoot wraps meaningfully: anything below zero lands on
/// the last image, anything at or past `len` lands on the first.
pub fn wrap_index(index: isize, len: usize) -> usize {
    debug_assert!(len > 0, "wrap_index on an empty set");
    if index < 0 {
        len.saturating_sub(1)
    } else if index as usize >= len {
        0
    } else {
        index as usize
    }
}

/// Inputs the overlay and keyboard translate into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxCommand {
    Close,
    Previous,
    Next,
}

impl LightboxCommand {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

/// The lightbox controller state: the gallery plus a cursor into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lightbox {
    images: ImageSet,
    state: LightboxState,
}

impl Lightbox {
    /// Returns `None` for an empty gallery; the lightbox never activates then.
    pub fn new(images: ImageSet) -> Option<Self> {
        if images.is_empty() {
            return None;
        }
        Some(Self {
            images,
            state: LightboxState::default(),
        })
    }

    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn open(&mut self, index: isize) {
        self.state.current_index = wrap_index(index, self.images.len());
        self.state.is_open = true;
    }

    /// Moves the cursor by `delta` with wraparound. Ignored while closed.
    pub fn navigate(&mut self, delta: isize) {
        if !self.state.is_open {
            return;
        }
        let target = self.state.current_index as isize + delta;
        self.state.current_index = wrap_index(target, self.images.len());
    }

    pub fn close(&mut self) {
        self.state.is_open = false;
    }

    /// Applies a command if the lightbox is open. Returns whether it was handled.
    pub fn apply(&mut self, command: LightboxCommand) -> bool {
        if !self.state.is_open {
            return false;
        }
        match command {
            LightboxCommand::Close => self.close(),
            LightboxCommand::Previous => self.navigate(-1),
            LightboxCommand::Next => self.navigate(1),
        }
        true
    }

    /// The image the overlay shows for the current index.
    pub fn displayed(&self) -> &ImageDescriptor {
        // Non-empty set and an always-normalized index make this total.
        &self.images.images[self.state.current_index]
    }
}
