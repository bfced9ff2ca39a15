//! Read-only view on the world model.
//!
//! The world model itself (ball and player kinematics, reach estimation) is
//! owned by the surrounding agent. The behaviors in this crate only depend on
//! the [`WorldModel`] trait.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Estimated number of cycles each party needs to reach the ball.
///
/// Recomputed by the world model every cycle.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct InterceptTable {
    pub self_cycles: u32,
    /// Cycles for the fastest teammate.
    pub teammate_cycles: u32,
    /// Cycles for the fastest opponent.
    pub opponent_cycles: u32,
}

pub trait WorldModel {
    fn intercept_table(&self) -> InterceptTable;

    /// Whether a teammate currently has the ball within kickable range.
    fn exist_kickable_teammate(&self) -> bool;

    /// Whether an opponent currently has the ball within kickable range.
    fn exist_kickable_opponent(&self) -> bool;

    fn ball_distance_from_self(&self) -> f32;

    /// Uniform number of the agent itself.
    fn self_unum(&self) -> u8;
}

/// A single world model snapshot, used for replaying scenarios and in tests.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WorldSnapshot {
    pub unum: u8,
    pub self_position: Point2<f32>,
    pub ball_position: Point2<f32>,
    pub intercept: InterceptTable,
    #[serde(default)]
    pub kickable_teammate: bool,
    #[serde(default)]
    pub kickable_opponent: bool,
    /// Success probability of a tackle in the current cycle.
    #[serde(default)]
    pub tackle_probability: f32,
}

impl WorldModel for WorldSnapshot {
    fn intercept_table(&self) -> InterceptTable {
        self.intercept
    }

    fn exist_kickable_teammate(&self) -> bool {
        self.kickable_teammate
    }

    fn exist_kickable_opponent(&self) -> bool {
        self.kickable_opponent
    }

    fn ball_distance_from_self(&self) -> f32 {
        nalgebra::distance(&self.self_position, &self.ball_position)
    }

    fn self_unum(&self) -> u8 {
        self.unum
    }
}
