#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    OutCubic,
    /// Two-piece cubic (accelerating then decelerating), used for the
    /// bounce-in of leaves.
    InOutCubic,
    /// Overshooting elastic pop used for fruit orbs. Exceeds 1.0 before
    /// settling; pinned to exactly 1.0 at t >= 1.
    OutElastic,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::OutElastic => {
                if t >= 1.0 {
                    1.0
                } else {
                    let phase = (t * 10.0 - 0.75) * (2.0 * std::f64::consts::PI / 3.0);
                    1.0 - 2f64.powf(-10.0 * t) * phase.cos()
                }
            }
        }
    }

    /// True when the curve may exceed 1.0 before settling.
    pub fn overshoots(self) -> bool {
        matches!(self, Self::OutElastic)
    }
}
