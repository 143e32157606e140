use glam::Vec2;
use pinch_core::{PointerGestureTracker, TrackerConfig};
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

mod input;

use input::{apply_touch, log_outcome, MOUSE_POINTER};

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = TrackerConfig::default();
    let mut tracker = PointerGestureTracker::new(config)?;
    log::info!(
        "pinch-native starting (enter<{:.0} exit>{:.0})",
        config.low_threshold,
        config.high_threshold
    );

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Pinch tracker (native)")
        .build(&event_loop)?;

    // Logical pixels so thresholds mean the same thing on HiDPI screens.
    let mut cursor = Vec2::ZERO;
    let mut mouse_down = false;

    event_loop.run(move |event, elwt| {
        let Event::WindowEvent { event, window_id } = event else {
            return;
        };
        if window_id != window.id() {
            return;
        }
        let scale = window.scale_factor();
        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Touch(touch) => {
                let loc = touch.location.to_logical::<f32>(scale);
                let id = pinch_core::PointerId(touch.id);
                let outcome = apply_touch(&mut tracker, touch.phase, id, Vec2::new(loc.x, loc.y));
                log_outcome(&tracker, outcome);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let loc = position.to_logical::<f32>(scale);
                cursor = Vec2::new(loc.x, loc.y);
                if mouse_down {
                    let outcome = apply_touch(&mut tracker, TouchPhase::Moved, MOUSE_POINTER, cursor);
                    log_outcome(&tracker, outcome);
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                mouse_down = state == ElementState::Pressed;
                let phase = if mouse_down {
                    TouchPhase::Started
                } else {
                    TouchPhase::Ended
                };
                let outcome = apply_touch(&mut tracker, phase, MOUSE_POINTER, cursor);
                log_outcome(&tracker, outcome);
            }
            WindowEvent::CursorLeft { .. } if mouse_down => {
                mouse_down = false;
                let outcome =
                    apply_touch(&mut tracker, TouchPhase::Cancelled, MOUSE_POINTER, cursor);
                log_outcome(&tracker, outcome);
            }
            WindowEvent::Focused(false) if !tracker.is_empty() => {
                mouse_down = false;
                tracker.reset();
                log::info!("[gesture] focus lost, tracker reset");
            }
            _ => {}
        }
    })?;
    Ok(())
}
