#![cfg(target_arch = "wasm32")]
use pinch_core::{PointSmoother, PointerGestureTracker, TrackerConfig};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;

use constants::{
    CENTROID_ELEMENT_ID, CENTROID_SMOOTHING_FRAMES, CONTAINER_SELECTOR, PINCH_MARGIN_PX,
    PINCH_THRESHOLD_PX,
};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pinch-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    // Listeners must be registered exactly once per event kind.
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = TrackerConfig::with_margin(PINCH_THRESHOLD_PX, PINCH_MARGIN_PX)?;
    let tracker = Rc::new(RefCell::new(PointerGestureTracker::new(config)?));
    log::info!(
        "[tracker] pinch enter<{:.0}px exit>{:.0}px",
        config.low_threshold,
        config.high_threshold
    );

    let centroid_el = dom::html_element_by_id(&document, CENTROID_ELEMENT_ID)?;
    dom::hide(&centroid_el);
    let container = document.query_selector(CONTAINER_SELECTOR).ok().flatten();
    if container.is_none() {
        log::warn!("container {} not found; pinch class disabled", CONTAINER_SELECTOR);
    }

    events::wire_pointer_handlers(&document, tracker.clone())?;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        tracker,
        smoother: PointSmoother::new(CENTROID_SMOOTHING_FRAMES),
        centroid_el,
        container,
        was_pinching: false,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
