//! Wall-clock frame pacing for interactive loops.

use web_time::{Duration, Instant};

/// Frame timing with delta-time measurement, FPS smoothing and optional
/// frame limiting. Feeds `dt` into the engine scheduler.
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// Upper bound on a single reported delta, in seconds
    max_delta: f64,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
            max_delta: 0.1,
        }
    }

    /// Returns true if enough time has passed to render.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Close the current frame and return its delta time in seconds.
    ///
    /// Long stalls (window dragged, debugger paused) are capped so a single
    /// frame cannot skip an entire camera transition.
    pub fn end_frame(&mut self) -> f64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        elapsed.as_secs_f64().min(self.max_delta)
    }

    /// Fixed delta for a frame at the target rate (1/60 s when unlimited).
    #[must_use]
    pub fn nominal_delta(&self) -> f64 {
        if self.target_fps == 0 {
            1.0 / 60.0
        } else {
            1.0 / f64::from(self.target_fps)
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
