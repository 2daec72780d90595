//! Centralized interpolation utilities for animation.

use glam::Vec3;

/// Per-frame interpolation context computed once from raw progress, then
/// shared by the position and rotation channels so they cannot desync.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolationContext {
    /// Raw progress (0.0 to 1.0), unmodified.
    pub raw_t: f32,
    /// Eased progress over the whole animation.
    pub eased_t: f32,
    /// For multi-phase motion: progress within the current phase (0.0 to 1.0).
    pub phase_t: Option<f32>,
    /// For multi-phase motion: eased progress within the current phase.
    pub phase_eased_t: Option<f32>,
}

impl InterpolationContext {
    /// Context with just raw and eased values (no phase info).
    #[must_use]
    pub fn simple(raw_t: f32, eased_t: f32) -> Self {
        Self {
            raw_t,
            eased_t,
            phase_t: None,
            phase_eased_t: None,
        }
    }

    /// Context with phase information.
    #[must_use]
    pub fn with_phase(
        raw_t: f32,
        eased_t: f32,
        phase_t: f32,
        phase_eased_t: f32,
    ) -> Self {
        Self {
            raw_t,
            eased_t,
            phase_t: Some(phase_t),
            phase_eased_t: Some(phase_eased_t),
        }
    }

    /// Animation complete (t=1.0).
    #[must_use]
    pub fn identity() -> Self {
        Self::simple(1.0, 1.0)
    }

    /// Linear context (no easing).
    #[must_use]
    pub fn linear(raw_t: f32) -> Self {
        Self::simple(raw_t, raw_t)
    }

    /// Progress value used for keyframe interpolation: the phase-local eased
    /// value when the context carries one, otherwise `eased_t`.
    #[inline]
    #[must_use]
    pub fn unified_t(&self) -> f32 {
        self.phase_eased_t.unwrap_or(self.eased_t)
    }
}

impl Default for InterpolationContext {
    fn default() -> Self {
        Self::identity()
    }
}

/// Lerp two positions using the context's unified progress.
#[inline]
#[must_use]
pub fn lerp_position(
    ctx: &InterpolationContext,
    start: Vec3,
    end: Vec3,
) -> Vec3 {
    let t = ctx.unified_t();
    start + (end - start) * t
}

/// Lerp two f32 values using the context's unified progress.
#[inline]
#[must_use]
pub fn lerp_f32(ctx: &InterpolationContext, start: f32, end: f32) -> f32 {
    let t = ctx.unified_t();
    start + (end - start) * t
}
