use hole_grid::HoleGrid;
use nalgebra::Point2;

use crate::{Error, Result, config::FormationConfig, world::WorldModel};

/// Strategic position table, yields the nominal position of every player.
pub trait Strategy {
    /// Nominal position for the player with uniform number `unum`.
    fn position(&self, unum: u8) -> Result<Point2<f32>>;

    /// Dash power to use when moving to a nominal position in the given world state.
    fn normal_dash_power(&self, world: &dyn WorldModel) -> f32;
}

/// [`Strategy`] backed by a [`FormationConfig`].
#[derive(Debug, Clone)]
pub struct FormationStrategy {
    config: FormationConfig,
}

impl FormationStrategy {
    #[must_use]
    pub fn new(config: FormationConfig) -> Self {
        Self { config }
    }
}

impl Strategy for FormationStrategy {
    fn position(&self, unum: u8) -> Result<Point2<f32>> {
        let position = self
            .config
            .player(unum)
            .map(|player| player.position)
            .ok_or(Error::UnknownPlayer { unum })?;

        if self.config.snap_to_holes {
            Ok(HoleGrid::nearest_hole(position.cast::<f64>()).cast::<f32>())
        } else {
            Ok(position)
        }
    }

    fn normal_dash_power(&self, _world: &dyn WorldModel) -> f32 {
        self.config.normal_dash_power
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::formation::PlayerPosition;

    fn formation(snap_to_holes: bool) -> FormationStrategy {
        FormationStrategy::new(FormationConfig {
            normal_dash_power: 70.0,
            snap_to_holes,
            positions: vec![PlayerPosition {
                player_number: 7,
                position: Point2::new(12.0, -17.0),
            }],
        })
    }

    #[test]
    fn nominal_position() {
        assert_eq!(
            formation(false).position(7).unwrap(),
            Point2::new(12.0, -17.0)
        );
    }

    #[test]
    fn snapped_position() {
        assert_eq!(
            formation(true).position(7).unwrap(),
            Point2::new(10.0, -10.0)
        );
    }

    #[test]
    fn unknown_player() {
        assert!(matches!(
            formation(false).position(3),
            Err(Error::UnknownPlayer { unum: 3 })
        ));
    }
}
