use crate::constants::POINTER_EVENTS;
use crate::input;
use pinch_core::PointerGestureTracker;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Register one listener per pointer lifecycle event on `target`, all feeding
/// the shared tracker. Must be called once at setup.
pub fn wire_pointer_handlers(
    target: &web::EventTarget,
    tracker: Rc<RefCell<PointerGestureTracker>>,
) -> anyhow::Result<()> {
    for event_type in POINTER_EVENTS {
        let tracker = tracker.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            handle_pointer_event(&ev, &tracker);
        }) as Box<dyn FnMut(_)>);
        target
            .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event_type, e))?;
        closure.forget();
    }

    wire_pointer_out(target, tracker)
}

fn handle_pointer_event(ev: &web::PointerEvent, tracker: &Rc<RefCell<PointerGestureTracker>>) {
    let Some(phase) = input::phase_for_event_type(&ev.type_()) else {
        return;
    };
    let id = input::pointer_id_from_dom(ev.pointer_id());
    let pos = input::pointer_client_px(ev);

    let result = tracker.borrow_mut().apply(phase, id, pos);
    match result {
        Ok(Some(t)) => log::info!("[pointer] {} -> {} (pointer {})", t.from, t.to, id),
        Ok(None) => {}
        Err(e) => log::warn!("[pointer] rejected {:?}: {}", phase, e),
    }
}

// A mouse that leaves the page does not always deliver pointerup; treat the
// exit as a cancel. Touch pointers fire pointerout after pointerup anyway.
fn wire_pointer_out(
    target: &web::EventTarget,
    tracker: Rc<RefCell<PointerGestureTracker>>,
) -> anyhow::Result<()> {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.pointer_type() != "mouse" || ev.related_target().is_some() {
            return;
        }
        let id = input::pointer_id_from_dom(ev.pointer_id());
        let mut t = tracker.borrow_mut();
        if t.contains(id) {
            t.on_pointer_cancel(id);
            log::info!("[pointer] mouse {} left document, cancelled", id);
        }
    }) as Box<dyn FnMut(_)>);
    target
        .add_event_listener_with_callback("pointerout", closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("add pointerout listener: {:?}", e))?;
    closure.forget();
    Ok(())
}
