use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use super::Config;

/// Config that contains the nominal positions of every player.
///
/// Positions assume the centre of the field at (0, 0) and the x axis pointing
/// towards the opponents' goal.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct FormationConfig {
    /// Dash power used while moving to a nominal position.
    pub normal_dash_power: f32,
    /// Snap nominal positions onto the hole lattice.
    #[serde(default)]
    pub snap_to_holes: bool,
    pub positions: Vec<PlayerPosition>,
}

impl Config for FormationConfig {
    const PATH: &'static str = "formation.toml";
}

impl FormationConfig {
    /// Nominal position of the given player, if it is configured.
    #[must_use]
    pub fn player(&self, player_number: u8) -> Option<&PlayerPosition> {
        self.positions
            .iter()
            .find(|elem| elem.player_number == player_number)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PlayerPosition {
    pub player_number: u8,
    pub position: Point2<f32>,
}
