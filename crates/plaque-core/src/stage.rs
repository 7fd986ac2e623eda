//! Explicit context tying the scene, registry, animation and renderer
//! together. The host owns one `Stage` and forwards frames and events to it.

use crate::camera::Camera;
use crate::config::EffectConfig;
use crate::hover::HoverController;
use crate::layout::Viewport;
use crate::picking::{compute_intersection, Intersection};
use crate::registry::{PlaqueRegistry, TrackedImage};
use crate::scene::{Renderer, Scene};
use crate::scroll::SmoothScroll;
use crate::texture::TextureLoader;
use crate::tween::TweenScheduler;
use std::cell::Cell;
use std::rc::Rc;

pub struct Stage<I, R> {
    pub config: EffectConfig,
    pub viewport: Viewport,
    pub scene: Scene,
    pub registry: PlaqueRegistry<I>,
    pub tweens: TweenScheduler,
    pub hover: HoverController,
    pub scroll: Option<SmoothScroll>,
    pub renderer: R,
}

impl<I: TrackedImage, R: Renderer> Stage<I, R> {
    /// Build the camera, create one plaque per image and size the renderer.
    pub fn new(
        config: EffectConfig,
        viewport: Viewport,
        images: Vec<I>,
        loader: &mut dyn TextureLoader,
        mut renderer: R,
    ) -> Self {
        let camera =
            Camera::for_viewport(viewport, config.camera_distance, config.near, config.far);
        let (registry, plaques) = PlaqueRegistry::initialize(images, viewport, loader);
        renderer.resize(viewport);
        let hover = HoverController::new(config.hover_duration, config.easing);
        Self {
            config,
            viewport,
            scene: Scene { camera, plaques },
            registry,
            tweens: TweenScheduler::new(),
            hover,
            scroll: None,
            renderer,
        }
    }

    /// Attach a smooth-scroll provider stepped from [`Stage::tick`].
    pub fn with_scroll(mut self, scroll: SmoothScroll) -> Self {
        self.scroll = Some(scroll);
        self
    }

    /// Re-read every tracked image's box.
    pub fn resync(&mut self) {
        self.registry.resync(self.viewport, &mut self.scene.plaques);
    }

    /// One frame: step animations, scroll the page, follow layout, draw.
    ///
    /// When smooth scrolling moves, `apply_scroll` receives the new offset
    /// before any bounding box is read, so plaques and page paint in step.
    pub fn tick(&mut self, dt: f32, mut apply_scroll: impl FnMut(f32)) {
        self.tweens.advance(dt, &mut self.scene.plaques);
        if let Some(y) = self.scroll.as_mut().and_then(|s| s.step(dt)) {
            apply_scroll(y);
        }
        self.resync();
        if let Err(e) = self.renderer.render(&self.scene) {
            log::error!("render error: {:?}", e);
        }
    }

    /// Pick the plaque under the pointer and schedule hover transitions.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> Option<Intersection> {
        let hit = compute_intersection(
            x,
            y,
            self.viewport,
            &self.scene.camera,
            &self.scene.plaques,
        );
        self.hover
            .on_pointer_move(hit.as_ref(), &self.scene.plaques, &mut self.tweens);
        hit
    }

    /// New aspect and surface size, then an immediate resync. The field of
    /// view is kept from construction.
    pub fn on_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.scene.camera.set_aspect(viewport.aspect());
        self.scene.camera.update_projection();
        self.renderer.resize(viewport);
        self.resync();
        log::info!("[resize] {}x{}", viewport.width, viewport.height);
    }
}

/// Start/stop switch for a continuous frame loop.
#[derive(Clone, Debug)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
}

impl Default for LoopHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopHandle {
    pub fn new() -> Self {
        Self {
            running: Rc::new(Cell::new(true)),
        }
    }

    pub fn stop(&self) {
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

/// Drives [`Stage::tick`] while its handle is running.
pub struct FrameLoop {
    handle: LoopHandle,
    ticks: u64,
}

impl FrameLoop {
    pub fn new(handle: LoopHandle) -> Self {
        Self { handle, ticks: 0 }
    }

    pub fn handle(&self) -> &LoopHandle {
        &self.handle
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run one tick if the loop has not been stopped. Returns whether the
    /// caller should schedule another frame.
    pub fn step<I: TrackedImage, R: Renderer>(
        &mut self,
        stage: &mut Stage<I, R>,
        dt: f32,
        apply_scroll: impl FnMut(f32),
    ) -> bool {
        if !self.handle.is_running() {
            return false;
        }
        stage.tick(dt, apply_scroll);
        self.ticks += 1;
        self.handle.is_running()
    }
}
