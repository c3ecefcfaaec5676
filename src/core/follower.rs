use glam::Vec2;

/// Exponential smoothing toward a moving target.
///
/// Each [`step`](Self::step) moves `current` a fixed fraction `rate` of the
/// remaining distance toward `target`. For `rate` in (0, 1) the distance to a
/// fixed target shrinks strictly every step and never overshoots.
///
/// Targets are not clamped: a NaN or infinite target propagates into
/// `current` and stays there until a finite target is set and `current` is
/// re-seeded with [`snap`](Self::snap).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DampedFollower {
    pub current: Vec2,
    pub target: Vec2,
    pub rate: f32,
}

impl DampedFollower {
    pub fn new(initial: Vec2, rate: f32) -> Self {
        Self {
            current: initial,
            target: initial,
            rate,
        }
    }

    #[inline]
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Advance one tick and return the new value.
    #[inline]
    pub fn step(&mut self) -> Vec2 {
        self.current += (self.target - self.current) * self.rate;
        self.current
    }

    /// True when both axes are within `epsilon` of the target.
    #[inline]
    pub fn is_settled(&self, epsilon: f32) -> bool {
        let d = (self.target - self.current).abs();
        d.x <= epsilon && d.y <= epsilon
    }

    #[inline]
    pub fn snap(&mut self, value: Vec2) {
        self.current = value;
        self.target = value;
    }
}
