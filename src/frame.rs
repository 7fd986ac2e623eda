use crate::dom;
use crate::WebStage;
use instant::Instant;
use plaque_core::{FrameLoop, LoopHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive `stage` from requestAnimationFrame until the returned handle is
/// stopped.
pub fn start_loop(stage: Rc<RefCell<WebStage>>) -> LoopHandle {
    let handle = LoopHandle::new();
    let mut frame_loop = FrameLoop::new(handle.clone());
    let last = Rc::new(Cell::new(Instant::now()));

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let now = Instant::now();
        let dt = (now - last.get()).as_secs_f32();
        last.set(now);

        // Scroll lands before the stage reads image boxes for this frame.
        let again = {
            let mut st = stage.borrow_mut();
            frame_loop.step(&mut *st, dt, dom::scroll_to)
        };
        if again {
            request_frame(&tick_clone);
        } else {
            log::info!("[frame] loop stopped after {} ticks", frame_loop.ticks());
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
    handle
}
