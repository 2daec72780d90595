use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Timing, rates and smoothing factors for every animator.
///
/// Per-frame rates assume the driver ticks once per rendered frame; only the
/// camera transition is time-based.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
pub struct AnimationOptions {
    /// Camera transition length in seconds.
    #[schemars(title = "Camera Transition (s)", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub transition_duration: f64,
    /// Folder progress added per frame while opening.
    #[schemars(title = "Folder Open Rate", range(min = 0.005, max = 0.2), extend("step" = 0.005))]
    pub open_rate: f32,
    /// Folder progress removed per frame while closing.
    #[schemars(title = "Folder Close Rate", range(min = 0.005, max = 0.2), extend("step" = 0.005))]
    pub close_rate: f32,
    /// Look-at damping factor per frame.
    #[schemars(title = "Look-At Damping", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub look_at_factor: f32,
    /// Fraction of the gap to the phase pose a folder closes per frame.
    #[schemars(skip)]
    pub pose_smoothing: f32,
    /// Fraction of the remaining slide a drawer covers per frame.
    #[schemars(skip)]
    pub drawer_slide_factor: f32,
    /// How far an open drawer slides out, metres.
    #[schemars(skip)]
    pub drawer_open_distance: f32,
    /// Height a hovered folder lifts, metres.
    #[schemars(skip)]
    pub hover_offset: f32,
    /// Fraction of the remaining hover lift covered per frame.
    #[schemars(skip)]
    pub hover_factor: f32,
    /// Distance under which threshold followers snap onto their goal.
    #[schemars(skip)]
    pub snap_epsilon: f32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            transition_duration: 1.5,
            open_rate: 0.02,
            close_rate: 0.02,
            look_at_factor: 0.1,
            pose_smoothing: 0.2,
            drawer_slide_factor: 0.2,
            drawer_open_distance: 0.35,
            hover_offset: 0.02,
            hover_factor: 0.1,
            snap_epsilon: 1e-3,
        }
    }
}
