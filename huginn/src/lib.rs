pub mod behavior;
pub mod config;
pub mod debug;
pub mod error;
pub mod motion;
pub mod neck;
pub mod scenario;
pub mod strategy;
pub mod world;

pub use error::{Error, Result};

/// The huginn prelude conveniently includes commonly needed types and traits for writing
/// behaviors.
pub mod prelude {
    pub use crate::{
        Error, Result,
        behavior::{BasicMove, Behavior, BehaviorChoice},
        config::{BehaviorConfig, Config, FormationConfig},
        debug::DebugClient,
        motion::{Actuator, Attempt},
        neck::NeckAction,
        strategy::{FormationStrategy, Strategy},
        world::{InterceptTable, WorldModel, WorldSnapshot},
    };
}
