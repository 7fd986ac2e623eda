use crate::layout::{plaque_position, Rect, Viewport};
use crate::scene::Plaque;
use crate::texture::TextureLoader;
use glam::Vec2;

/// A page element whose on-screen box a plaque follows.
pub trait TrackedImage {
    /// Current bounding box in viewport coordinates.
    fn bounds(&self) -> Rect;
    /// URL the plaque texture is loaded from.
    fn source(&self) -> String;
}

/// Pairs each tracked image with the plaque at the same index.
///
/// The set of images is fixed at construction; images are never added or
/// removed afterwards.
pub struct PlaqueRegistry<I> {
    images: Vec<I>,
}

impl<I: TrackedImage> PlaqueRegistry<I> {
    /// Create one plaque per image, sized and placed from the image's current
    /// bounds, and request its texture.
    pub fn initialize(
        images: Vec<I>,
        viewport: Viewport,
        loader: &mut dyn TextureLoader,
    ) -> (Self, Vec<Plaque>) {
        let plaques = images
            .iter()
            .map(|image| {
                let rect = image.bounds();
                let texture = loader.load(&image.source());
                Plaque::new(
                    plaque_position(rect, viewport),
                    Vec2::new(rect.width, rect.height),
                    texture,
                )
            })
            .collect::<Vec<_>>();
        log::info!("[registry] created {} plaques", plaques.len());
        (Self { images }, plaques)
    }

    /// Move every plaque to its image's current box. Sizes are left as
    /// created.
    pub fn resync(&self, viewport: Viewport, plaques: &mut [Plaque]) {
        for (image, plaque) in self.images.iter().zip(plaques.iter_mut()) {
            plaque.position = plaque_position(image.bounds(), viewport);
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
