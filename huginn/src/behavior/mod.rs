pub mod basic_move;

use nalgebra::Point2;
use serde::Serialize;
use strum::AsRefStr;

use crate::{Result, motion::Actuator, strategy::Strategy, world::WorldModel};

pub use basic_move::BasicMove;

/// A behavior that is executed once every decision cycle.
pub trait Behavior {
    /// Run the behavior for the current cycle.
    ///
    /// Returns `true` if the behavior issued a command.
    fn execute(
        &self,
        world: &dyn WorldModel,
        strategy: &dyn Strategy,
        agent: &mut dyn Actuator,
    ) -> Result<bool>;
}

/// The branch a behavior took in a single decision cycle.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, AsRefStr)]
pub enum BehaviorChoice {
    Tackle,
    Intercept,
    PositionalMove {
        target: Point2<f32>,
        distance_threshold: f32,
        dash_power: f32,
        /// `false` if the agent was already at the target and turned to the ball instead.
        moved: bool,
    },
}
