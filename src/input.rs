use glam::Vec2;
use pinch_core::{PointerId, PointerPhase};
use web_sys as web;

#[inline]
pub fn phase_for_event_type(event_type: &str) -> Option<PointerPhase> {
    match event_type {
        "pointerdown" => Some(PointerPhase::Down),
        "pointermove" => Some(PointerPhase::Move),
        "pointerup" => Some(PointerPhase::Up),
        "pointercancel" => Some(PointerPhase::Cancel),
        _ => None,
    }
}

// DOM pointer ids are non-negative i32s; keep the bit pattern for anything odd.
#[inline]
pub fn pointer_id_from_dom(raw: i32) -> PointerId {
    PointerId(raw as u32 as u64)
}

#[inline]
pub fn pointer_client_px(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}
