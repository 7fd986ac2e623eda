// Fake collaborators shared by the host-side tests.
#![allow(dead_code)]

use plaque_core::*;
use std::cell::Cell;
use std::rc::Rc;

/// Image whose box the test can move between frames.
#[derive(Clone)]
pub struct FakeImage {
    pub rect: Rc<Cell<Rect>>,
    pub src: String,
}

impl FakeImage {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Rc::new(Cell::new(Rect::new(left, top, width, height))),
            src: format!("img-{}-{}.jpg", left, top),
        }
    }

    pub fn move_to(&self, left: f32, top: f32) {
        let r = self.rect.get();
        self.rect.set(Rect::new(left, top, r.width, r.height));
    }

    pub fn resize_to(&self, width: f32, height: f32) {
        let r = self.rect.get();
        self.rect.set(Rect::new(r.left, r.top, width, height));
    }
}

impl TrackedImage for FakeImage {
    fn bounds(&self) -> Rect {
        self.rect.get()
    }

    fn source(&self) -> String {
        self.src.clone()
    }
}

/// Image placed in document coordinates. Its viewport box moves up as the
/// shared page offset grows, like a real element under `window.scrollTo`.
#[derive(Clone)]
pub struct PageImage {
    pub doc_rect: Rect,
    pub page_y: Rc<Cell<f32>>,
}

impl PageImage {
    pub fn new(doc_rect: Rect, page_y: Rc<Cell<f32>>) -> Self {
        Self { doc_rect, page_y }
    }
}

impl TrackedImage for PageImage {
    fn bounds(&self) -> Rect {
        let r = self.doc_rect;
        Rect::new(r.left, r.top - self.page_y.get(), r.width, r.height)
    }

    fn source(&self) -> String {
        "page.jpg".to_string()
    }
}

/// Hands out pending handles and remembers what was requested.
#[derive(Default)]
pub struct CountingLoader {
    pub requested: Vec<String>,
    pub handles: Vec<TextureHandle>,
}

impl TextureLoader for CountingLoader {
    fn load(&mut self, source: &str) -> TextureHandle {
        let handle = TextureHandle::pending(TextureId(self.requested.len() as u32), source);
        self.requested.push(source.to_string());
        self.handles.push(handle.clone());
        handle
    }
}

/// Records what the stage asked it to do.
#[derive(Default)]
pub struct RecordingRenderer {
    pub renders: usize,
    pub resizes: Vec<Viewport>,
    pub last_positions: Vec<glam::Vec3>,
    pub last_hover: Vec<f32>,
}

impl Renderer for RecordingRenderer {
    fn resize(&mut self, viewport: Viewport) {
        self.resizes.push(viewport);
    }

    fn render(&mut self, scene: &Scene) -> anyhow::Result<()> {
        self.renders += 1;
        self.last_positions = scene.plaques.iter().map(|p| p.position).collect();
        self.last_hover = scene.plaques.iter().map(|p| p.uniforms.hover).collect();
        Ok(())
    }
}

pub const FULL_HD: Viewport = Viewport::new(1920.0, 1080.0);

pub fn make_stage(images: Vec<FakeImage>) -> Stage<FakeImage, RecordingRenderer> {
    let mut loader = CountingLoader::default();
    Stage::new(
        EffectConfig::default(),
        FULL_HD,
        images,
        &mut loader,
        RecordingRenderer::default(),
    )
}

pub fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}
