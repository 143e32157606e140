//! Multi-pointer tracking with centroid and pinch classification.
//!
//! The tracker keeps the active pointers in the order they were first seen.
//! Pinch classification only ever looks at the two oldest pointers so that a
//! third contact landing mid-gesture does not swap the monitored pair.

use crate::config::TrackerConfig;
use crate::constants::INLINE_POINTER_CAPACITY;
use crate::error::GestureError;
use glam::{DVec2, Vec2};
use smallvec::SmallVec;
use std::fmt;

/// Opaque identifier of a single active contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

impl fmt::Display for PointerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PointerId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub id: PointerId,
    pub position: Vec2,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GestureState {
    /// Fewer than two pointers are down.
    #[default]
    Idle,
    /// Two or more pointers, monitored pair not pinching.
    Tracking,
    /// Monitored pair closer than the entry threshold, and not yet farther
    /// than the exit threshold.
    Pinching,
}

impl GestureState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Tracking => "tracking",
            Self::Pinching => "pinching",
        }
    }
}

impl fmt::Display for GestureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle phase of a host input event, independent of the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: GestureState,
    pub to: GestureState,
}

/// Owned copy of the tracker state at one point in time.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// Active pointers, oldest first.
    pub pointers: Vec<Pointer>,
    pub centroid: Option<Vec2>,
    pub state: GestureState,
    /// Distance between the two oldest pointers, when at least two are down.
    pub pinch_distance: Option<f32>,
}

impl Snapshot {
    #[inline]
    pub fn is_pinching(&self) -> bool {
        self.state == GestureState::Pinching
    }
}

pub struct PointerGestureTracker {
    config: TrackerConfig,
    pointers: SmallVec<[Pointer; INLINE_POINTER_CAPACITY]>,
    centroid: Option<Vec2>,
    state: GestureState,
    pinch_distance: Option<f32>,
    last_transition: Option<Transition>,
}

impl PointerGestureTracker {
    pub fn new(config: TrackerConfig) -> Result<Self, GestureError> {
        config.validate()?;
        Ok(Self::with_checked_config(config))
    }

    fn with_checked_config(config: TrackerConfig) -> Self {
        Self {
            config,
            pointers: SmallVec::new(),
            centroid: None,
            state: GestureState::Idle,
            pinch_distance: None,
            last_transition: None,
        }
    }

    /// Start tracking `id`, or restart it as the youngest pointer if it is
    /// already tracked. Returns the new centroid.
    pub fn on_pointer_down(
        &mut self,
        id: PointerId,
        position: Vec2,
    ) -> Result<Option<Vec2>, GestureError> {
        check_position(id, position)?;
        self.pointers.retain(|p| p.id != id);
        self.pointers.push(Pointer { id, position });
        self.recompute();
        Ok(self.centroid)
    }

    /// Update the position of `id`. Moves for pointers that are not tracked
    /// are ignored and return the current snapshot unchanged.
    pub fn on_pointer_move(
        &mut self,
        id: PointerId,
        position: Vec2,
    ) -> Result<Snapshot, GestureError> {
        check_position(id, position)?;
        match self.pointers.iter_mut().find(|p| p.id == id) {
            Some(p) => p.position = position,
            None => {
                log::trace!("[tracker] move for untracked pointer {}", id);
                self.last_transition = None;
                return Ok(self.snapshot());
            }
        }
        self.recompute();
        Ok(self.snapshot())
    }

    pub fn on_pointer_up(&mut self, id: PointerId) -> Snapshot {
        self.remove(id);
        self.snapshot()
    }

    pub fn on_pointer_cancel(&mut self, id: PointerId) -> Snapshot {
        self.remove(id);
        self.snapshot()
    }

    /// Route one host event to the matching lifecycle call and report the
    /// gesture change it caused. `position` is ignored for `Up`/`Cancel`.
    pub fn apply(
        &mut self,
        phase: PointerPhase,
        id: PointerId,
        position: Vec2,
    ) -> Result<Option<Transition>, GestureError> {
        match phase {
            PointerPhase::Down => {
                self.on_pointer_down(id, position)?;
            }
            PointerPhase::Move => {
                self.on_pointer_move(id, position)?;
            }
            PointerPhase::Up => {
                self.on_pointer_up(id);
            }
            PointerPhase::Cancel => {
                self.on_pointer_cancel(id);
            }
        }
        Ok(self.last_transition)
    }

    /// Drop every pointer, e.g. when the host loses focus mid-gesture.
    pub fn reset(&mut self) {
        self.pointers.clear();
        self.recompute();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pointers: self.pointers.to_vec(),
            centroid: self.centroid,
            state: self.state,
            pinch_distance: self.pinch_distance,
        }
    }

    #[inline]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }
    #[inline]
    pub fn state(&self) -> GestureState {
        self.state
    }
    #[inline]
    pub fn centroid(&self) -> Option<Vec2> {
        self.centroid
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.pointers.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }
    #[inline]
    pub fn contains(&self, id: PointerId) -> bool {
        self.pointers.iter().any(|p| p.id == id)
    }

    /// State change caused by the most recent mutating call, if any.
    #[inline]
    pub fn last_transition(&self) -> Option<Transition> {
        self.last_transition
    }

    fn remove(&mut self, id: PointerId) {
        let before = self.pointers.len();
        self.pointers.retain(|p| p.id != id);
        if self.pointers.len() == before {
            log::trace!("[tracker] release for untracked pointer {}", id);
            self.last_transition = None;
            return;
        }
        self.recompute();
    }

    fn recompute(&mut self) {
        self.centroid = centroid_of(&self.pointers);
        self.pinch_distance = match self.pointers.as_slice() {
            [a, b, ..] => Some(pair_distance(a.position, b.position)),
            _ => None,
        };

        let next = classify(self.state, self.pinch_distance, &self.config);
        self.last_transition = (next != self.state).then_some(Transition {
            from: self.state,
            to: next,
        });
        if let Some(t) = self.last_transition {
            log::debug!(
                "[tracker] {} -> {} (pointers={} distance={:?})",
                t.from,
                t.to,
                self.pointers.len(),
                self.pinch_distance
            );
        }
        self.state = next;
    }
}

impl Default for PointerGestureTracker {
    fn default() -> Self {
        Self::with_checked_config(TrackerConfig::default())
    }
}

#[inline]
fn check_position(id: PointerId, position: Vec2) -> Result<(), GestureError> {
    if position.is_finite() {
        Ok(())
    } else {
        Err(GestureError::InvalidInput {
            id,
            x: position.x,
            y: position.y,
        })
    }
}

/// Arithmetic mean of all positions; `None` for an empty set.
pub fn centroid_of(pointers: &[Pointer]) -> Option<Vec2> {
    if pointers.is_empty() {
        return None;
    }
    // Accumulate in f64: the mean of finite f32 values is finite, their sum may not be.
    let sum = pointers
        .iter()
        .fold(DVec2::ZERO, |acc, p| acc + p.position.as_dvec2());
    Some((sum / pointers.len() as f64).as_vec2())
}

/// Euclidean distance, saturated at `f32::MAX` for pairs at opposite extremes.
#[inline]
pub fn pair_distance(a: Vec2, b: Vec2) -> f32 {
    (a.as_dvec2().distance(b.as_dvec2()) as f32).min(f32::MAX)
}

/// Next gesture state given the previous one and the monitored pair distance.
///
/// `distance` is `None` when fewer than two pointers are tracked.
pub fn classify(
    previous: GestureState,
    distance: Option<f32>,
    config: &TrackerConfig,
) -> GestureState {
    let Some(d) = distance else {
        return GestureState::Idle;
    };
    match previous {
        GestureState::Pinching if d > config.high_threshold => GestureState::Tracking,
        GestureState::Pinching => GestureState::Pinching,
        GestureState::Idle | GestureState::Tracking if d < config.low_threshold => {
            GestureState::Pinching
        }
        GestureState::Idle | GestureState::Tracking => GestureState::Tracking,
    }
}
