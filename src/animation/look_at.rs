//! Exponential look-at tracking of a moving point.

use glam::Vec3;

/// Default per-frame damping factor.
pub const DEFAULT_FACTOR: f32 = 0.1;

/// Damps the orbit target toward a live world point every frame one is
/// reported. There is no end condition: tracking stops the frame the point
/// disappears.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookAtTracker {
    factor: f32,
    tracking: bool,
}

impl Default for LookAtTracker {
    fn default() -> Self {
        Self::new(DEFAULT_FACTOR)
    }
}

impl LookAtTracker {
    /// Tracker with damping factor `factor` (clamped to `(0, 1]`).
    #[must_use]
    pub fn new(factor: f32) -> Self {
        Self {
            factor: factor.clamp(f32::EPSILON, 1.0),
            tracking: false,
        }
    }

    /// Pull `target` toward `live_point` when present.
    ///
    /// Non-finite points are ignored for the frame. Returns whether tracking
    /// is active this frame.
    pub fn tick(&mut self, target: &mut Vec3, live_point: Option<Vec3>) -> bool {
        match live_point {
            Some(point) if point.is_finite() => {
                *target += (point - *target) * self.factor;
                self.tracking = true;
            }
            _ => self.tracking = false,
        }
        self.tracking
    }

    /// Whether the last tick tracked a point.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Damping factor.
    #[must_use]
    pub fn factor(&self) -> f32 {
        self.factor
    }
}
