//! Replaying recorded world snapshots through a behavior.

use std::{fs, path::Path};

use serde::Serialize;

use crate::{
    Result,
    behavior::{BasicMove, BehaviorChoice},
    motion::{Command, ScriptedAgent},
    strategy::Strategy,
    world::WorldSnapshot,
};

/// Outcome of a single decision cycle.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Outcome {
    pub choice: BehaviorChoice,
    pub commands: Vec<Command>,
    pub messages: Vec<String>,
}

/// Load a world snapshot from a JSON file.
pub fn load(path: impl AsRef<Path>) -> Result<WorldSnapshot> {
    let content = fs::read_to_string(path)?;

    Ok(serde_json::from_str(&content)?)
}

/// Run one decision cycle of `behavior` on `snapshot`, with a scripted agent.
pub fn replay(
    behavior: &BasicMove,
    strategy: &dyn Strategy,
    snapshot: &WorldSnapshot,
) -> Result<Outcome> {
    let mut agent = ScriptedAgent::from_snapshot(snapshot);
    let choice = behavior.decide(snapshot, strategy, &mut agent)?;

    Ok(Outcome {
        choice,
        commands: agent.commands,
        messages: agent.debug.messages,
    })
}
