use nalgebra::Point2;
use serde::Serialize;
use strum::{Display, IntoStaticStr};

use super::{Actuator, Attempt};
use crate::{
    Error, Result,
    debug::{DebugClient, DebugRecord},
    neck::NeckAction,
    world::WorldSnapshot,
};

/// A command issued to a [`ScriptedAgent`].
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Display)]
pub enum Command {
    Tackle,
    Intercept,
    Dash { target: Point2<f32>, power: f32 },
    TurnToBall,
    Neck(NeckAction),
}

/// The fallible primitives of an [`Actuator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[cfg_attr(test, derive(strum::EnumIter))]
#[strum(serialize_all = "snake_case")]
pub enum Primitive {
    Tackle,
    Intercept,
    GoToPoint,
    TurnToBall,
}

/// [`Actuator`] without a body, it records the issued commands.
///
/// Primitives are resolved against a fixed agent state:
/// - a tackle succeeds iff the scripted success probability reaches the threshold,
/// - going to a point is declined when the agent is already within the threshold.
#[derive(Debug, Clone)]
pub struct ScriptedAgent {
    pub position: Point2<f32>,
    pub tackle_probability: f32,
    pub commands: Vec<Command>,
    pub debug: DebugRecord,
    failing: Option<Primitive>,
}

impl ScriptedAgent {
    #[must_use]
    pub fn new(position: Point2<f32>, tackle_probability: f32) -> Self {
        Self {
            position,
            tackle_probability,
            commands: Vec::new(),
            debug: DebugRecord::default(),
            failing: None,
        }
    }

    /// Agent placed according to a world snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: &WorldSnapshot) -> Self {
        Self::new(snapshot.self_position, snapshot.tackle_probability)
    }

    /// Make `primitive` fail, to emulate a broken body.
    #[must_use]
    pub fn failing_on(mut self, primitive: Primitive) -> Self {
        self.failing = Some(primitive);
        self
    }

    /// The last neck action that was set, if any.
    #[must_use]
    pub fn neck_action(&self) -> Option<NeckAction> {
        self.commands.iter().rev().find_map(|command| match command {
            Command::Neck(action) => Some(*action),
            _ => None,
        })
    }

    fn check(&self, primitive: Primitive) -> Result<()> {
        match self.failing {
            Some(failing) if failing == primitive => Err(Error::Actuator {
                command: primitive.into(),
                reason: "scripted failure".to_string(),
            }),
            _ => Ok(()),
        }
    }
}

impl Actuator for ScriptedAgent {
    fn tackle(&mut self, probability_threshold: f32, _angle_threshold: f32) -> Result<Attempt> {
        self.check(Primitive::Tackle)?;

        if self.tackle_probability < probability_threshold {
            return Ok(Attempt::Declined);
        }

        self.commands.push(Command::Tackle);
        Ok(Attempt::Acted)
    }

    fn intercept(&mut self) -> Result<()> {
        self.check(Primitive::Intercept)?;
        self.commands.push(Command::Intercept);
        Ok(())
    }

    fn go_to_point(
        &mut self,
        target: Point2<f32>,
        distance_threshold: f32,
        dash_power: f32,
    ) -> Result<Attempt> {
        self.check(Primitive::GoToPoint)?;

        if nalgebra::distance(&self.position, &target) < distance_threshold {
            return Ok(Attempt::Declined);
        }

        self.commands.push(Command::Dash {
            target,
            power: dash_power,
        });
        Ok(Attempt::Acted)
    }

    fn turn_to_ball(&mut self) -> Result<()> {
        self.check(Primitive::TurnToBall)?;
        self.commands.push(Command::TurnToBall);
        Ok(())
    }

    fn set_neck_action(&mut self, action: NeckAction) {
        self.commands.push(Command::Neck(action));
    }

    fn debug_client(&mut self) -> Option<&mut dyn DebugClient> {
        Some(&mut self.debug)
    }
}
