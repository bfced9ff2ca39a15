//! Motor primitives the behaviors issue commands to.

pub mod scripted;

use nalgebra::Point2;

use crate::{Result, debug::DebugClient, neck::NeckAction};

pub use scripted::{Command, Primitive, ScriptedAgent};

/// Outcome of a primitive that may decide it has nothing to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Attempt {
    /// A command was issued.
    Acted,
    /// The primitive declined to act, no command was issued.
    Declined,
}

impl Attempt {
    #[must_use]
    pub fn acted(self) -> bool {
        self == Attempt::Acted
    }
}

/// Write-only command interface of the agent.
///
/// Errors are failures of the primitive itself and are never recovered by the
/// behaviors, a primitive that has nothing to do returns [`Attempt::Declined`].
pub trait Actuator {
    /// Tackle the ball if the success probability and body angle allow it.
    fn tackle(&mut self, probability_threshold: f32, angle_threshold: f32) -> Result<Attempt>;

    /// Move to the best interception point of the ball.
    fn intercept(&mut self) -> Result<()>;

    /// Move towards `target` until within `distance_threshold`.
    fn go_to_point(
        &mut self,
        target: Point2<f32>,
        distance_threshold: f32,
        dash_power: f32,
    ) -> Result<Attempt>;

    fn turn_to_ball(&mut self) -> Result<()>;

    fn set_neck_action(&mut self, action: NeckAction);

    /// Optional debug side channel.
    fn debug_client(&mut self) -> Option<&mut dyn DebugClient> {
        None
    }
}
