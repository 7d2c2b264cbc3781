//! Easing curves used by the entrance timeline.

/// Easing curve mapping linear progress in `[0, 1]` to eased progress
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Ease {
    Linear,
    /// Quadratic ease-in-out
    Power1InOut,
    /// Cubic ease-out
    #[default]
    Power2Out,
    /// Ease-out that overshoots the target by `overshoot` before settling
    BackOut(f64),
}

impl Ease {
    /// Apply the curve. Input outside `[0, 1]` is clamped.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Ease::Linear => t,
            Ease::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::BackOut(overshoot) => {
                let p = t - 1.0;
                p * p * ((overshoot + 1.0) * p + overshoot) + 1.0
            }
        }
    }
}
