use serde::{Deserialize, Serialize};

use super::Config;

/// Thresholds of the basic move behavior.
///
/// The [`Default`] values are the ones the behavior was tuned with, and match
/// `config/behavior.toml`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct BehaviorConfig {
    pub tackle: TackleConfig,
    pub intercept: InterceptConfig,
    pub positioning: PositioningConfig,
    pub neck: NeckConfig,
}

impl Config for BehaviorConfig {
    const PATH: &'static str = "behavior.toml";
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TackleConfig {
    /// Minimum tackle success probability before a tackle is attempted.
    pub probability_threshold: f32,
    /// Maximum angle in degrees between body and ball direction for a tackle.
    pub angle_threshold: f32,
}

impl Default for TackleConfig {
    fn default() -> Self {
        Self {
            probability_threshold: 0.8,
            angle_threshold: 80.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct InterceptConfig {
    /// Always intercept when the ball can be reached within this many cycles.
    pub immediate_cycles: u32,
    /// Number of cycles we may be slower than the fastest opponent and still intercept.
    pub opponent_margin_cycles: u32,
}

impl Default for InterceptConfig {
    fn default() -> Self {
        Self {
            immediate_cycles: 3,
            opponent_margin_cycles: 3,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PositioningConfig {
    /// Fraction of the ball distance used as tolerance around the target.
    pub distance_threshold_ratio: f32,
    /// Lower bound of the tolerance around the target.
    pub min_distance_threshold: f32,
}

impl Default for PositioningConfig {
    fn default() -> Self {
        Self {
            distance_threshold_ratio: 0.1,
            min_distance_threshold: 1.0,
        }
    }
}

impl PositioningConfig {
    /// Tolerance around the target, it shrinks as the ball comes closer.
    #[must_use]
    pub fn distance_threshold(&self, ball_distance: f32) -> f32 {
        (ball_distance * self.distance_threshold_ratio).max(self.min_distance_threshold)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct NeckConfig {
    /// Keep looking at the ball while an opponent controls it within this distance.
    pub fixate_ball_distance: f32,
}

impl Default for NeckConfig {
    fn default() -> Self {
        Self {
            fixate_ball_distance: 18.0,
        }
    }
}
