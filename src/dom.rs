use glam::Vec2;
use pinch_core::{absolute_point, offset_from_middle};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Current `innerWidth`/`innerHeight` in CSS pixels.
pub fn viewport_size() -> Option<Vec2> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some(Vec2::new(width as f32, height as f32))
}

pub fn html_element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?;
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Translate `el` so that its middle sits on `relative` (0..1 of the viewport).
pub fn position_from_middle(el: &web::HtmlElement, relative: Vec2, viewport: Vec2) {
    let rect = el.get_bounding_client_rect();
    let size = Vec2::new(rect.width() as f32, rect.height() as f32);
    let offset = offset_from_middle(absolute_point(relative, viewport), size);
    let style = el.style();
    _ = style.set_property(
        "transform",
        &format!("translate({:.1}px, {:.1}px)", offset.x, offset.y),
    );
    _ = style.set_property("display", "block");
}

#[inline]
pub fn hide(el: &web::HtmlElement) {
    _ = el.style().set_property("display", "none");
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}
