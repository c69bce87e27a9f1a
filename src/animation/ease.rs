use std::f64::consts::PI;

/// Timing curve applied to the progress between two keyframes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Constant rate.
    #[default]
    Linear,
    /// Starts slow, ends fast (`t^2`).
    Accelerate,
    /// Starts fast, ends slow (`1 - (1 - t)^2`).
    Decelerate,
    /// Cosine in-out.
    AccelerateDecelerate,
}

impl Ease {
    /// Eased progress for `t` in `[0, 1]`; `t` is clamped first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Accelerate => t * t,
            Self::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
            Self::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
