use glam::Vec3;

use super::core::Camera;
use crate::animation::camera_transition::{CameraTransition, ViewGoal};
use crate::animation::look_at::LookAtTracker;
use crate::error::CabinetError;
use crate::options::Options;

/// Owns the camera and arbitrates its two channels.
///
/// The eye is always driven by the transition. The orbit target is driven by
/// the look-at tracker while a live point is reported, and by the transition
/// otherwise. When tracking ends the current goal is re-issued so the target
/// eases back onto it instead of staying where the tracked item was.
#[derive(Debug, Clone)]
pub struct CameraRig {
    camera: Camera,
    transition: CameraTransition,
    tracker: LookAtTracker,
}

/// Outcome of one rig frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RigTick {
    /// The tracker owned the target channel this frame.
    pub tracking: bool,
    /// The transition wrote the camera this frame.
    pub animating: bool,
}

impl CameraRig {
    /// Rig with explicit parts.
    #[must_use]
    pub fn new(
        camera: Camera,
        transition: CameraTransition,
        tracker: LookAtTracker,
    ) -> Self {
        Self {
            camera,
            transition,
            tracker,
        }
    }

    /// Rig configured from options, starting at the overview pose.
    #[must_use]
    pub fn from_options(opts: &Options) -> Self {
        Self::new(
            Camera::from_options(&opts.camera),
            CameraTransition::new(opts.animation.transition_duration),
            LookAtTracker::new(opts.animation.look_at_factor),
        )
    }

    /// Restart the transition toward `goal` from the live camera pose.
    ///
    /// # Errors
    ///
    /// Returns [`CabinetError::InvalidGoal`] for non-finite goals; the
    /// previous goal stays in effect.
    pub fn set_goal(&mut self, goal: ViewGoal) -> Result<(), CabinetError> {
        self.transition.set_goal(goal, &self.camera)
    }

    /// Run one frame: tracker first, then the transition reading whatever
    /// target the tracker just produced.
    pub fn tick(&mut self, dt: f64, live_point: Option<Vec3>) -> RigTick {
        let was_tracking = self.tracker.is_tracking();
        let tracking = self.tracker.tick(&mut self.camera.target, live_point);

        if was_tracking && !tracking {
            if let Some(goal) = self.transition.goal() {
                if goal.target.distance(self.camera.target) > 1e-4 {
                    // Goal was accepted once already; it cannot be invalid.
                    let _ = self.transition.set_goal(goal, &self.camera);
                }
            }
        }

        let animating = self.transition.tick(dt, &mut self.camera, tracking);
        RigTick {
            tracking,
            animating,
        }
    }

    /// Current camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera access for projection changes (resize, fovy).
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Transition state.
    #[must_use]
    pub fn transition(&self) -> &CameraTransition {
        &self.transition
    }

    /// Whether the look-at tracker owned the target last frame.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.tracker.is_tracking()
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_active()
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::from_options(&Options::default())
    }
}
