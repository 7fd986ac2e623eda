use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;

/// Stable identifier for a texture request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureState {
    Pending,
    Ready,
    Failed,
}

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("failed to fetch {source_url}: {message}")]
    Fetch { source_url: String, message: String },
    #[error("failed to decode {source_url}: {message}")]
    Decode { source_url: String, message: String },
    #[error("failed to upload {source_url}: {message}")]
    Upload { source_url: String, message: String },
}

/// Handle to a texture that may not be loaded yet.
///
/// Loading completes asynchronously. Renderers must treat anything other
/// than [`TextureState::Ready`] as a blank texture.
#[derive(Clone, Debug)]
pub struct TextureHandle {
    id: TextureId,
    source: Rc<str>,
    state: Rc<Cell<TextureState>>,
}

impl TextureHandle {
    pub fn pending(id: TextureId, source: &str) -> Self {
        Self {
            id,
            source: Rc::from(source),
            state: Rc::new(Cell::new(TextureState::Pending)),
        }
    }

    pub fn id(&self) -> TextureId {
        self.id
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn state(&self) -> TextureState {
        self.state.get()
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.state.get() == TextureState::Ready
    }

    pub fn mark_ready(&self) {
        self.state.set(TextureState::Ready);
    }

    /// Failed loads are not retried; the plaque stays blank.
    pub fn mark_failed(&self, err: &TextureError) {
        log::warn!("[texture] {}", err);
        self.state.set(TextureState::Failed);
    }
}

/// Starts loading an image source and hands back a handle immediately.
pub trait TextureLoader {
    fn load(&mut self, source: &str) -> TextureHandle;
}
