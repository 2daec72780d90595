//! Camera system for the cabinet scene.
//!
//! Provides the perspective camera and the rig that arbitrates between the
//! camera transition and look-at tracking.

/// Core camera struct and matrix builders.
pub mod core;
/// Camera rig: transition + tracker over one camera.
pub mod rig;

pub use self::core::Camera;
pub use rig::{CameraRig, RigTick};
