use crate::constants::PINCHING_CLASS;
use crate::dom;
use pinch_core::{relative_point, PointSmoother, PointerGestureTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub tracker: Rc<RefCell<PointerGestureTracker>>,
    pub smoother: PointSmoother,
    pub centroid_el: web::HtmlElement,
    pub container: Option<web::Element>,
    pub was_pinching: bool,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let Some(viewport) = dom::viewport_size() else {
            return;
        };
        let snap = self.tracker.borrow().snapshot();

        // Smooth in relative space so a resize does not drag the average.
        match snap.centroid.and_then(|c| relative_point(c, viewport)) {
            Some(rel) => {
                let smoothed = self.smoother.add(rel);
                dom::position_from_middle(&self.centroid_el, smoothed, viewport);
            }
            None => {
                self.smoother.reset();
                dom::hide(&self.centroid_el);
            }
        }

        let pinching = snap.is_pinching();
        if pinching != self.was_pinching {
            if let Some(container) = &self.container {
                dom::set_class(container, PINCHING_CLASS, pinching);
            }
            self.was_pinching = pinching;
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
