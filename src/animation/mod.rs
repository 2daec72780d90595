//! Animation system: camera transitions, look-at tracking, phased item
//! motion and threshold followers.

pub mod camera_transition;
pub mod follow;
pub mod interpolation;
pub mod look_at;
pub mod phased;

pub use camera_transition::{CameraTransition, ViewGoal};
pub use follow::{Follower, ScalarFollower};
pub use look_at::LookAtTracker;
pub use phased::{
    KeyframeSet, LivePoint, MotionPhase, MotionState, PhasedMotion,
    PhasedMotionConfig, Pose,
};
