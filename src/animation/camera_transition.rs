//! Fixed-duration, single-shot camera transition.
//!
//! Interpolates the camera eye and orbit target from a captured start pose to
//! a [`ViewGoal`] with cubic in-out easing. Issuing a new goal mid-flight is
//! the only cancellation primitive: the start is recaptured from the live
//! camera, never from the previous goal, so an interruption cannot jump.

use glam::Vec3;

use crate::camera::core::Camera;
use crate::error::CabinetError;
use crate::util::easing::cubic_in_out;

/// Default transition duration in seconds.
pub const DEFAULT_DURATION: f64 = 1.5;

/// Desired orbit target and camera position. Replaced wholesale on new events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewGoal {
    /// Orbit (look-at) target.
    pub target: Vec3,
    /// Camera eye position.
    pub position: Vec3,
}

impl ViewGoal {
    /// Goal from a target and a position.
    #[must_use]
    pub fn new(target: Vec3, position: Vec3) -> Self {
        Self { target, position }
    }

    /// Whether every coordinate is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.target.is_finite() && self.position.is_finite()
    }
}

/// Transition state. Starts inactive with no goal.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraTransition {
    elapsed: f64,
    duration: f64,
    start_target: Vec3,
    start_position: Vec3,
    goal: Option<ViewGoal>,
    active: bool,
}

impl Default for CameraTransition {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}

impl CameraTransition {
    /// Inactive transition with the given duration in seconds.
    ///
    /// Non-positive or non-finite durations fall back to
    /// [`DEFAULT_DURATION`].
    #[must_use]
    pub fn new(duration: f64) -> Self {
        let duration = if duration.is_finite() && duration > 0.0 {
            duration
        } else {
            DEFAULT_DURATION
        };
        Self {
            elapsed: 0.0,
            duration,
            start_target: Vec3::ZERO,
            start_position: Vec3::ZERO,
            goal: None,
            active: false,
        }
    }

    /// Restart toward `goal` from the camera's current pose.
    ///
    /// # Errors
    ///
    /// A goal with non-finite coordinates is rejected with
    /// [`CabinetError::InvalidGoal`] and the previous goal and progress are
    /// kept.
    pub fn set_goal(
        &mut self,
        goal: ViewGoal,
        camera: &Camera,
    ) -> Result<(), CabinetError> {
        if !goal.is_finite() {
            return Err(CabinetError::InvalidGoal {
                target: goal.target,
                position: goal.position,
            });
        }
        self.elapsed = 0.0;
        self.start_target = camera.target;
        self.start_position = camera.eye;
        self.goal = Some(goal);
        self.active = true;
        log::debug!(
            "camera transition: {} -> {} (target {} -> {})",
            camera.eye,
            goal.position,
            camera.target,
            goal.target
        );
        Ok(())
    }

    /// Advance by `dt` seconds and write the interpolated pose.
    ///
    /// The eye always follows the transition. The target follows it only
    /// when `tracking` is false; otherwise the look-at tracker owns it.
    /// Returns whether the camera was written this frame.
    pub fn tick(&mut self, dt: f64, camera: &mut Camera, tracking: bool) -> bool {
        if !self.active {
            return false;
        }
        let Some(goal) = self.goal else {
            self.active = false;
            return false;
        };

        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        if t >= 1.0 {
            camera.eye = goal.position;
            if !tracking {
                camera.target = goal.target;
            }
            self.active = false;
            return true;
        }

        let eased = cubic_in_out(t) as f32;
        camera.eye = self.start_position.lerp(goal.position, eased);
        if !tracking {
            camera.target = self.start_target.lerp(goal.target, eased);
        }
        true
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Seconds since the current goal was issued.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Transition length in seconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Raw progress `elapsed / duration` in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Most recently accepted goal.
    #[must_use]
    pub fn goal(&self) -> Option<ViewGoal> {
        self.goal
    }
}
