// Tuning defaults shared by the web and native front-ends.

// Pinch classification (viewport pixels)
pub const DEFAULT_PINCH_THRESHOLD: f32 = 150.0; // enter Pinching below this distance
pub const DEFAULT_PINCH_MARGIN: f32 = 30.0; // exit threshold sits this far above entry

// Tracked set
pub const INLINE_POINTER_CAPACITY: usize = 10; // typical simultaneous contacts before spilling to heap

// Smoothing
pub const DEFAULT_SMOOTHING_WINDOW: usize = 100; // samples averaged by `PointSmoother`
