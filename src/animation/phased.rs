//! Three-phase, reversible lift/rotate/settle motion for a folder.
//!
//! A single progress scalar in `[0, 1]` drives the whole choreography:
//!
//! | progress      | phase          | keyframes         |
//! |---------------|----------------|-------------------|
//! | `[0.0, 0.4)`  | lift           | initial → up      |
//! | `[0.4, 0.7)`  | rotate-forward | up → forward      |
//! | `[0.7, 1.0]`  | settle         | forward → display |
//!
//! Opening adds `open_rate` per frame, closing subtracts `close_rate`.
//! Closing locates its pose through the reverse mapping on `1 - progress`,
//! which retraces the opening path exactly, so a toggle at any point simply
//! reverses direction from where the folder is.

use std::f32::consts::PI;

use glam::Vec3;

use super::interpolation::{lerp_f32, lerp_position, InterpolationContext};
use crate::options::AnimationOptions;
use crate::util::easing::EasingFunction;

/// End of the lift phase.
pub const LIFT_END: f32 = 0.4;
/// End of the rotate-forward phase.
pub const ROTATE_END: f32 = 0.7;

/// Easing applied to the yaw channel during rotate-forward.
const ROTATION_EASING: EasingFunction = EasingFunction::QuadraticInOut;

/// Minimal transform: position plus yaw/pitch. No roll, no scale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    /// Position relative to the parent (drawer) origin.
    pub position: Vec3,
    /// Rotation about the vertical axis, radians.
    pub yaw: f32,
    /// Rotation about the local x axis, radians.
    pub pitch: f32,
}

impl Pose {
    /// Pose at `position` with no rotation.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Component-wise linear interpolation.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            yaw: self.yaw + (other.yaw - self.yaw) * t,
            pitch: self.pitch + (other.pitch - self.pitch) * t,
        }
    }

    /// Largest component distance to `other` (position metres or radians).
    #[must_use]
    pub fn distance(&self, other: &Self) -> f32 {
        self.position
            .distance(other.position)
            .max((self.yaw - other.yaw).abs())
            .max((self.pitch - other.pitch).abs())
    }

    /// Euler rotation vector `(pitch, yaw, 0)` for scene transforms.
    #[must_use]
    pub fn rotation(&self) -> Vec3 {
        Vec3::new(self.pitch, self.yaw, 0.0)
    }
}

/// Fixed offsets from the resting position used to derive keyframes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyframeOffsets {
    /// Resting → lifted clear of the drawer.
    pub lift: Vec3,
    /// Lifted → turned toward the viewer.
    pub forward: Vec3,
    /// Resting → display pose.
    pub display: Vec3,
    /// Total yaw applied during rotate-forward.
    pub turn: f32,
    /// Tilt toward the viewer held from `forward` onward.
    pub tilt: f32,
}

impl Default for KeyframeOffsets {
    fn default() -> Self {
        Self {
            lift: Vec3::new(0.0, 0.35, 0.0),
            forward: Vec3::new(0.0, 0.05, 0.2),
            display: Vec3::new(0.0, 0.35, 0.55),
            turn: PI,
            tilt: -0.25,
        }
    }
}

/// Four poses derived once from a resting position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyframeSet {
    /// Resting pose inside the drawer.
    pub initial: Pose,
    /// Lifted out of the drawer.
    pub up: Pose,
    /// Rotated about the vertical axis and tilted.
    pub forward: Pose,
    /// Display pose (resting position plus display offset).
    pub display: Pose,
}

impl KeyframeSet {
    /// Derive the keyframes for an item resting at `rest`.
    #[must_use]
    pub fn from_rest(rest: Vec3, offsets: &KeyframeOffsets) -> Self {
        let up = rest + offsets.lift;
        Self {
            initial: Pose::at(rest),
            up: Pose::at(up),
            forward: Pose {
                position: up + offsets.forward,
                yaw: offsets.turn,
                pitch: offsets.tilt,
            },
            display: Pose {
                position: rest + offsets.display,
                yaw: offsets.turn,
                pitch: offsets.tilt,
            },
        }
    }

    /// Keyframe pair bracketing `phase`.
    fn bracket(&self, phase: MotionPhase) -> (&Pose, &Pose) {
        match phase {
            MotionPhase::Lift => (&self.initial, &self.up),
            MotionPhase::RotateForward => (&self.up, &self.forward),
            MotionPhase::Settle => (&self.forward, &self.display),
        }
    }
}

/// One of the three contiguous progress ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionPhase {
    /// `[0, 0.4)`: straight up out of the drawer.
    Lift,
    /// `[0.4, 0.7)`: turn around and tilt.
    RotateForward,
    /// `[0.7, 1.0]`: glide into the display pose.
    Settle,
}

impl MotionPhase {
    /// Progress range `(start, end)` covered by the phase.
    #[must_use]
    pub fn bounds(self) -> (f32, f32) {
        match self {
            Self::Lift => (0.0, LIFT_END),
            Self::RotateForward => (LIFT_END, ROTATE_END),
            Self::Settle => (ROTATE_END, 1.0),
        }
    }

    /// Position easing for the phase.
    #[must_use]
    pub fn easing(self) -> EasingFunction {
        match self {
            Self::Lift | Self::Settle => EasingFunction::QuadraticInOut,
            Self::RotateForward => EasingFunction::CubicInOut,
        }
    }

    fn context(self, progress: f32, phase_t: f32) -> InterpolationContext {
        let phase_t = phase_t.clamp(0.0, 1.0);
        InterpolationContext::with_phase(
            progress,
            progress,
            phase_t,
            self.easing().evaluate(phase_t),
        )
    }
}

/// Lifecycle of one phased item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    /// At rest, no live point.
    #[default]
    Closed,
    /// Progress increasing.
    Opening,
    /// Progress held at 1.
    Open,
    /// Progress decreasing.
    Closing,
}

/// Live world position reported by a moving item each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LivePoint {
    /// Rendered world position.
    pub position: Vec3,
    /// True while opening or open, false while closing.
    pub opening: bool,
}

/// Result of one controller frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionTick {
    /// Live point, present in every state but `Closed`.
    pub live: Option<LivePoint>,
    /// Set on the frame the item finished closing.
    pub finished_closing: bool,
}

/// Per-frame rates and smoothing for [`PhasedMotion`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhasedMotionConfig {
    /// Progress added per frame while opening.
    pub open_rate: f32,
    /// Progress removed per frame while closing.
    pub close_rate: f32,
    /// Fraction of the gap to the target pose closed per frame.
    pub smoothing: f32,
    /// Snap distance for settling at rest.
    pub epsilon: f32,
}

impl Default for PhasedMotionConfig {
    fn default() -> Self {
        Self::from(&AnimationOptions::default())
    }
}

impl From<&AnimationOptions> for PhasedMotionConfig {
    fn from(opts: &AnimationOptions) -> Self {
        Self {
            open_rate: opts.open_rate.clamp(1e-4, 1.0),
            close_rate: opts.close_rate.clamp(1e-4, 1.0),
            smoothing: opts.pose_smoothing.clamp(f32::EPSILON, 1.0),
            epsilon: opts.snap_epsilon.max(0.0),
        }
    }
}

/// Phased motion controller for a single item. One instance per folder.
#[derive(Debug, Clone)]
pub struct PhasedMotion {
    keyframes: KeyframeSet,
    config: PhasedMotionConfig,
    progress: f32,
    state: MotionState,
    rendered: Pose,
}

impl PhasedMotion {
    /// Controller for an item resting at `rest` (drawer-local).
    #[must_use]
    pub fn new(rest: Vec3, config: PhasedMotionConfig) -> Self {
        Self::with_keyframes(
            KeyframeSet::from_rest(rest, &KeyframeOffsets::default()),
            config,
        )
    }

    /// Controller over explicit keyframes.
    #[must_use]
    pub fn with_keyframes(
        keyframes: KeyframeSet,
        config: PhasedMotionConfig,
    ) -> Self {
        Self {
            rendered: keyframes.initial,
            keyframes,
            config,
            progress: 0.0,
            state: MotionState::Closed,
        }
    }

    /// Start (or resume) opening from the current progress.
    ///
    /// Returns `false` when already opening or open.
    pub fn activate(&mut self) -> bool {
        match self.state {
            MotionState::Closed | MotionState::Closing => {
                self.state = MotionState::Opening;
                true
            }
            MotionState::Opening | MotionState::Open => false,
        }
    }

    /// Start (or resume) closing from the current progress.
    ///
    /// Returns `false` when already closing or closed.
    pub fn deactivate(&mut self) -> bool {
        match self.state {
            MotionState::Opening | MotionState::Open => {
                self.state = MotionState::Closing;
                true
            }
            MotionState::Closed | MotionState::Closing => false,
        }
    }

    /// Reverse direction. Returns the new state.
    pub fn toggle(&mut self) -> MotionState {
        if matches!(self.state, MotionState::Opening | MotionState::Open) {
            let _ = self.deactivate();
        } else {
            let _ = self.activate();
        }
        self.state
    }

    /// Advance one frame. `origin` is the parent's world position, used to
    /// report the live point in world space.
    pub fn tick(&mut self, origin: Vec3) -> MotionTick {
        let mut finished_closing = false;
        match self.state {
            MotionState::Opening => {
                self.progress = (self.progress + self.config.open_rate).min(1.0);
                if self.progress >= 1.0 {
                    self.state = MotionState::Open;
                }
            }
            MotionState::Closing => {
                self.progress =
                    (self.progress - self.config.close_rate).max(0.0);
                if self.progress <= 0.0 {
                    self.state = MotionState::Closed;
                    finished_closing = true;
                }
            }
            MotionState::Open | MotionState::Closed => {}
        }

        let target = self.target_pose();
        if self.state == MotionState::Closed {
            // Threshold policy at rest: converge, then snap exactly.
            self.rendered = if self.rendered.distance(&target)
                > self.config.epsilon
            {
                self.rendered.lerp(&target, self.config.smoothing)
            } else {
                target
            };
        } else {
            self.rendered = self.rendered.lerp(&target, self.config.smoothing);
        }

        let live = match self.state {
            MotionState::Closed => None,
            state => Some(LivePoint {
                position: origin + self.rendered.position,
                opening: state != MotionState::Closing,
            }),
        };
        MotionTick {
            live,
            finished_closing,
        }
    }

    /// Phase and interpolation context for opening at `progress`.
    #[must_use]
    pub fn locate(progress: f32) -> (MotionPhase, InterpolationContext) {
        let p = progress.clamp(0.0, 1.0);
        let phase = if p < LIFT_END {
            MotionPhase::Lift
        } else if p < ROTATE_END {
            MotionPhase::RotateForward
        } else {
            MotionPhase::Settle
        };
        let (start, end) = phase.bounds();
        (phase, phase.context(p, (p - start) / (end - start)))
    }

    /// Phase and interpolation context for closing, indexed by the reversed
    /// progress `r = 1 - progress`: settle over `[0, 0.3]`, rotate-forward
    /// over `(0.3, 0.6]`, lift over `(0.6, 1]`.
    #[must_use]
    pub fn locate_reverse(r: f32) -> (MotionPhase, InterpolationContext) {
        let r = r.clamp(0.0, 1.0);
        let settle_end = 1.0 - ROTATE_END;
        let rotate_end = 1.0 - LIFT_END;
        let (phase, r_start, r_len) = if r <= settle_end {
            (MotionPhase::Settle, 0.0, settle_end)
        } else if r <= rotate_end {
            (MotionPhase::RotateForward, settle_end, rotate_end - settle_end)
        } else {
            (MotionPhase::Lift, rotate_end, 1.0 - rotate_end)
        };
        let phase_t = 1.0 - (r - r_start) / r_len;
        (phase, phase.context(1.0 - r, phase_t))
    }

    /// Opening-path pose at `progress`.
    #[must_use]
    pub fn sample(&self, progress: f32) -> Pose {
        let (phase, ctx) = Self::locate(progress);
        self.pose_in(phase, &ctx)
    }

    /// Closing-path pose at reversed progress `r`.
    #[must_use]
    pub fn sample_reverse(&self, r: f32) -> Pose {
        let (phase, ctx) = Self::locate_reverse(r);
        self.pose_in(phase, &ctx)
    }

    fn pose_in(&self, phase: MotionPhase, ctx: &InterpolationContext) -> Pose {
        let (from, to) = self.keyframes.bracket(phase);
        let yaw = match phase {
            MotionPhase::Lift => self.keyframes.up.yaw,
            MotionPhase::RotateForward => {
                let t = ROTATION_EASING.evaluate(ctx.phase_t.unwrap_or(1.0));
                from.yaw + (to.yaw - from.yaw) * t
            }
            MotionPhase::Settle => self.keyframes.forward.yaw,
        };
        Pose {
            position: lerp_position(ctx, from.position, to.position),
            yaw,
            pitch: lerp_f32(ctx, from.pitch, to.pitch),
        }
    }

    /// Phase-interpolated pose the rendered pose is converging toward.
    #[must_use]
    pub fn target_pose(&self) -> Pose {
        if self.state == MotionState::Closing {
            self.sample_reverse(1.0 - self.progress)
        } else {
            self.sample(self.progress)
        }
    }

    /// Pose actually written to the scene.
    #[must_use]
    pub fn rendered_pose(&self) -> Pose {
        self.rendered
    }

    /// Current progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> MotionState {
        self.state
    }

    /// Phase the current progress falls in.
    #[must_use]
    pub fn phase(&self) -> MotionPhase {
        Self::locate(self.progress).0
    }

    /// Keyframes derived at construction.
    #[must_use]
    pub fn keyframes(&self) -> &KeyframeSet {
        &self.keyframes
    }

    /// Fully open or closed, with the rendered pose caught up.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        matches!(self.state, MotionState::Open | MotionState::Closed)
            && self.rendered.distance(&self.target_pose()) <= self.config.epsilon
    }
}
