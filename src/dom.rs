use anyhow::anyhow;
use plaque_core::{Rect, TrackedImage, Viewport, CONFIG_KEYS};
use wasm_bindgen::JsCast;
use web_sys as web;

/// A page element followed by a plaque.
pub struct DomImage {
    element: web::Element,
}

impl TrackedImage for DomImage {
    fn bounds(&self) -> Rect {
        let r = self.element.get_bounding_client_rect();
        Rect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
    }

    fn source(&self) -> String {
        self.element
            .dyn_ref::<web::HtmlImageElement>()
            .map(|img| img.current_src())
            .filter(|src| !src.is_empty())
            .or_else(|| self.element.get_attribute("src"))
            .unwrap_or_default()
    }
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!(format!("{:?}", e)))
}

/// Every element matching `selector`, in document order.
pub fn collect_images(document: &web::Document, selector: &str) -> anyhow::Result<Vec<DomImage>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| anyhow!("bad selector {}: {:?}", selector, e))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .map(|element| DomImage { element })
        .collect())
}

pub fn viewport(window: &web::Window) -> anyhow::Result<Viewport> {
    let w = window
        .inner_width()
        .map_err(|e| anyhow!("{:?}", e))?
        .as_f64()
        .ok_or_else(|| anyhow!("innerWidth is not a number"))?;
    let h = window
        .inner_height()
        .map_err(|e| anyhow!("{:?}", e))?
        .as_f64()
        .ok_or_else(|| anyhow!("innerHeight is not a number"))?;
    Ok(Viewport::new(w as f32, h as f32))
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

/// Largest vertical scroll offset the document allows.
pub fn max_scroll(window: &web::Window) -> f32 {
    let doc_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f32)
        .unwrap_or(0.0);
    let view_height = viewport(window).map(|v| v.height).unwrap_or(0.0);
    (doc_height - view_height).max(0.0)
}

#[inline]
pub fn scroll_to(y: f32) {
    if let Some(w) = web::window() {
        w.scroll_to_with_x_and_y(0.0, y as f64);
    }
}

/// `(key, value)` for each config `data-*` attribute present on `el`.
pub fn config_attributes(el: &web::Element) -> Vec<(&'static str, String)> {
    CONFIG_KEYS
        .iter()
        .filter_map(|key| el.get_attribute(&format!("data-{}", key)).map(|v| (*key, v)))
        .collect()
}

/// Pin the canvas over the viewport and let pointer events reach the page.
pub fn prepare_canvas(canvas: &web::HtmlCanvasElement) {
    let _ = canvas.set_attribute(
        "style",
        "position:fixed;top:0;left:0;width:100vw;height:100vh;pointer-events:none;",
    );
}

/// Match the canvas backing store to its CSS size times the clamped device
/// pixel ratio. Returns the new size in physical pixels.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    max_pixel_ratio: f64,
) -> (u32, u32) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(max_pixel_ratio);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
    (canvas.width(), canvas.height())
}
