use crate::dom;
use crate::WebStage;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_input_handlers(stage: &Rc<RefCell<WebStage>>) {
    wire_pointermove(stage.clone());
    wire_resize(stage.clone());
    if stage.borrow().scroll.is_some() {
        wire_wheel(stage.clone());
    }
}

fn wire_pointermove(stage: Rc<RefCell<WebStage>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        stage
            .borrow_mut()
            .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_resize(stage: Rc<RefCell<WebStage>>) {
    let closure = Closure::wrap(Box::new(move || {
        let Some(wnd) = web::window() else {
            return;
        };
        let viewport = match dom::viewport(&wnd) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("[resize] {:?}", e);
                return;
            }
        };
        let mut st = stage.borrow_mut();
        st.on_resize(viewport);
        if let Some(scroll) = st.scroll.as_mut() {
            scroll.set_max(dom::max_scroll(&wnd));
        }
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

// Non-passive so the native scroll can be replaced by the eased one.
fn wire_wheel(stage: Rc<RefCell<WebStage>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let Some(wnd) = web::window() else {
            return;
        };
        let mut st = stage.borrow_mut();
        if let Some(scroll) = st.scroll.as_mut() {
            if scroll.is_settled() {
                scroll.sync_to(dom::scroll_y(&wnd));
            }
            scroll.set_max(dom::max_scroll(&wnd));
            scroll.scroll_by(ev.delta_y() as f32);
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        _ = wnd.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    }
    closure.forget();
}
