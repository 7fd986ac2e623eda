//! Scene graph: a camera plus one flat plaque per tracked image.

use crate::camera::Camera;
use crate::constants::{DEFAULT_FOCUS, HOVER_OFF};
use crate::layout::Viewport;
use crate::texture::TextureHandle;
use glam::{Vec2, Vec3};

/// Per-plaque shader inputs animated by the hover controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaqueUniforms {
    /// Distortion centre in plaque uv space, `[0, 1]²`.
    pub focus: Vec2,
    /// Distortion intensity, `[0, 1]`.
    pub hover: f32,
}

impl Default for PlaqueUniforms {
    fn default() -> Self {
        Self {
            focus: Vec2::from(DEFAULT_FOCUS),
            hover: HOVER_OFF,
        }
    }
}

/// A flat rectangle in the scene standing in for one page image.
#[derive(Clone, Debug)]
pub struct Plaque {
    /// Centre of the rectangle. `z` is always 0.
    pub position: Vec3,
    /// Width and height in world units, fixed at creation.
    pub size: Vec2,
    pub texture: TextureHandle,
    pub uniforms: PlaqueUniforms,
}

impl Plaque {
    pub fn new(position: Vec3, size: Vec2, texture: TextureHandle) -> Self {
        Self {
            position,
            size,
            texture,
            uniforms: PlaqueUniforms::default(),
        }
    }
}

pub struct Scene {
    pub camera: Camera,
    pub plaques: Vec<Plaque>,
}

/// Draws a scene to some render target.
pub trait Renderer {
    /// Match the render surface to a new viewport size.
    fn resize(&mut self, viewport: Viewport);
    /// Draw every plaque through the scene camera.
    fn render(&mut self, scene: &Scene) -> anyhow::Result<()>;
}
