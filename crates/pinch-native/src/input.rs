use glam::Vec2;
use pinch_core::{GestureError, PointerGestureTracker, PointerId, PointerPhase, Transition};
use winit::event::TouchPhase;

/// Id used for the left mouse button; winit finger ids count up from zero.
pub const MOUSE_POINTER: PointerId = PointerId(u64::MAX);

#[inline]
pub fn phase_for_touch(phase: TouchPhase) -> PointerPhase {
    match phase {
        TouchPhase::Started => PointerPhase::Down,
        TouchPhase::Moved => PointerPhase::Move,
        TouchPhase::Ended => PointerPhase::Up,
        TouchPhase::Cancelled => PointerPhase::Cancel,
    }
}

/// Feed one winit touch phase into the tracker.
#[inline]
pub fn apply_touch(
    tracker: &mut PointerGestureTracker,
    phase: TouchPhase,
    id: PointerId,
    position: Vec2,
) -> Result<Option<Transition>, GestureError> {
    tracker.apply(phase_for_touch(phase), id, position)
}

pub fn log_outcome(tracker: &PointerGestureTracker, outcome: Result<Option<Transition>, GestureError>) {
    match outcome {
        Ok(Some(t)) => {
            let snap = tracker.snapshot();
            log::info!(
                "[gesture] {} -> {} pointers={} centroid={:?} distance={:?}",
                t.from,
                t.to,
                snap.pointers.len(),
                snap.centroid,
                snap.pinch_distance
            );
        }
        Ok(None) => {}
        Err(e) => log::warn!("[gesture] rejected: {}", e),
    }
}
