#![cfg(target_arch = "wasm32")]
use plaque_core::{EffectConfig, LoopHandle, SmoothScroll, Stage};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod render;
mod texture;

pub(crate) type WebStage = Stage<dom::DomImage, render::GpuRenderer>;

thread_local! {
    static LOOP: RefCell<Option<LoopHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("plaque-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the frame loop. Plaques stay where they were last drawn.
#[wasm_bindgen]
pub fn stop() {
    LOOP.with(|l| {
        if let Some(handle) = l.borrow_mut().take() {
            handle.stop();
        }
    });
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let mut config = EffectConfig::default();
    let canvas = dom::canvas_by_id(&document, &config.canvas_id)?;
    config.apply_attributes(dom::config_attributes(&canvas));
    dom::prepare_canvas(&canvas);

    let viewport = dom::viewport(&window)?;
    let images = dom::collect_images(&document, &config.image_selector)?;
    let (renderer, mut loader) =
        render::GpuRenderer::new(canvas, config.max_pixel_ratio, config.msaa_samples).await?;

    let smooth_scroll = config.smooth_scroll;
    let scroll_lerp = config.scroll_lerp;
    let mut stage = Stage::new(config, viewport, images, &mut loader, renderer);
    if smooth_scroll {
        stage = stage.with_scroll(SmoothScroll::new(
            dom::scroll_y(&window),
            dom::max_scroll(&window),
            scroll_lerp,
        ));
    }
    let stage = Rc::new(RefCell::new(stage));

    events::wire_input_handlers(&stage);
    let handle = frame::start_loop(stage);
    LOOP.with(|l| *l.borrow_mut() = Some(handle));
    Ok(())
}
