//! Easing curves for timed transitions

/// An easing function applied to normalized animation progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant rate
    Linear,
    /// Cubic acceleration from rest
    EaseIn,
    /// Cubic deceleration into rest
    #[default]
    EaseOut,
    /// Cubic acceleration then deceleration
    EaseInOut,
}

impl Easing {
    /// Map progress `t` in 0.0..=1.0 through the curve
    ///
    /// Input outside the unit interval is clamped first.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}
