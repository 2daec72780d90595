//! Distance-threshold smoothing for items without multi-phase choreography.
//!
//! Each frame the value moves a fixed fraction of the remaining distance
//! toward its goal; once within `epsilon` it snaps exactly onto the goal and
//! reports itself settled. The step is per frame, not per second.

/// Values a [`Follower`] can smooth.
pub trait Blend: Copy + PartialEq {
    /// Distance between two values.
    fn distance(self, other: Self) -> f32;
    /// Linear blend toward `other` by `t`.
    fn blend(self, other: Self, t: f32) -> Self;
}

impl Blend for f32 {
    fn distance(self, other: Self) -> f32 {
        (self - other).abs()
    }

    fn blend(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

/// Lerp-by-factor follower with snap-to-goal termination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Follower<T: Blend> {
    current: T,
    goal: T,
    factor: f32,
    epsilon: f32,
    settled: bool,
}

/// Scalar follower (drawer slide, hover lift).
pub type ScalarFollower = Follower<f32>;

impl<T: Blend> Follower<T> {
    /// Create a follower resting at `value`.
    ///
    /// `factor` is clamped to `(0, 1]`; a non-positive factor would never
    /// converge.
    #[must_use]
    pub fn new(value: T, factor: f32, epsilon: f32) -> Self {
        Self {
            current: value,
            goal: value,
            factor: factor.clamp(f32::EPSILON, 1.0),
            epsilon: epsilon.max(0.0),
            settled: true,
        }
    }

    /// Retarget. Leaves `current` untouched so motion stays continuous.
    pub fn set_goal(&mut self, goal: T) {
        if goal != self.goal {
            self.goal = goal;
            self.settled = self.current == goal;
        }
    }

    /// Advance one frame and return the new value.
    pub fn tick(&mut self) -> T {
        if self.settled {
            return self.current;
        }
        if self.current.distance(self.goal) > self.epsilon {
            self.current = self.current.blend(self.goal, self.factor);
        } else {
            self.current = self.goal;
            self.settled = true;
        }
        self.current
    }

    /// Current (rendered) value.
    #[must_use]
    pub fn value(&self) -> T {
        self.current
    }

    /// Goal value.
    #[must_use]
    pub fn goal(&self) -> T {
        self.goal
    }

    /// Whether the value has snapped onto the goal.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.settled
    }
}
