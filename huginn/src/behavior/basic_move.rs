use crate::{
    Result,
    behavior::{Behavior, BehaviorChoice},
    config::{BehaviorConfig, behavior::InterceptConfig},
    motion::Actuator,
    neck::NeckAction,
    strategy::Strategy,
    world::{InterceptTable, WorldModel},
};

/// Default behavior of a field player without the ball.
///
/// In order of priority the agent tackles the ball, intercepts it, or moves
/// to its nominal position in the formation.
#[derive(Debug, Clone, Default)]
pub struct BasicMove {
    config: BehaviorConfig,
}

impl BasicMove {
    #[must_use]
    pub fn new(config: BehaviorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &BehaviorConfig {
        &self.config
    }

    /// Decide on and issue the commands for the current cycle.
    pub fn decide(
        &self,
        world: &dyn WorldModel,
        strategy: &dyn Strategy,
        agent: &mut dyn Actuator,
    ) -> Result<BehaviorChoice> {
        tracing::debug!("basic move");

        let tackle = &self.config.tackle;
        if agent
            .tackle(tackle.probability_threshold, tackle.angle_threshold)?
            .acted()
        {
            tracing::debug!("tackle");
            return Ok(BehaviorChoice::Tackle);
        }

        if should_intercept(
            &self.config.intercept,
            world.intercept_table(),
            world.exist_kickable_teammate(),
        ) {
            tracing::info!("Executing intercept, player - {}", world.self_unum());
            agent.intercept()?;
            agent.set_neck_action(NeckAction::OffensiveInterceptScan);

            return Ok(BehaviorChoice::Intercept);
        }

        let target = strategy.position(world.self_unum())?;
        let dash_power = strategy.normal_dash_power(world);

        let ball_distance = world.ball_distance_from_self();
        let distance_threshold = self.config.positioning.distance_threshold(ball_distance);

        tracing::debug!(
            "target=({:.1} {:.1}) dist_thr={:.2}",
            target.x,
            target.y,
            distance_threshold
        );

        if let Some(debug) = agent.debug_client() {
            debug.add_message(format!("BasicMove{dash_power:.0}"));
            debug.set_target(target);
            debug.add_circle(target, distance_threshold);
        }

        let moved = agent
            .go_to_point(target, distance_threshold, dash_power)?
            .acted();
        if !moved {
            agent.turn_to_ball()?;
        }

        if world.exist_kickable_opponent() && ball_distance < self.config.neck.fixate_ball_distance
        {
            agent.set_neck_action(NeckAction::FixateBall);
        } else {
            agent.set_neck_action(NeckAction::ScanOrBallAware);
        }

        Ok(BehaviorChoice::PositionalMove {
            target,
            distance_threshold,
            dash_power,
            moved,
        })
    }
}

impl Behavior for BasicMove {
    fn execute(
        &self,
        world: &dyn WorldModel,
        strategy: &dyn Strategy,
        agent: &mut dyn Actuator,
    ) -> Result<bool> {
        self.decide(world, strategy, agent).map(|_| true)
    }
}

/// Whether the agent should go for the ball itself.
///
/// That is the case when no teammate controls the ball and we either reach it
/// almost immediately, or we are the fastest teammate and not too far behind
/// the fastest opponent. Ties with a teammate are won by ourselves.
#[must_use]
pub fn should_intercept(
    config: &InterceptConfig,
    table: InterceptTable,
    kickable_teammate: bool,
) -> bool {
    let InterceptTable {
        self_cycles,
        teammate_cycles,
        opponent_cycles,
    } = table;

    !kickable_teammate
        && (self_cycles <= config.immediate_cycles
            || (self_cycles <= teammate_cycles
                && self_cycles < opponent_cycles.saturating_add(config.opponent_margin_cycles)))
}

#[cfg(test)]
mod tests {
    use nalgebra::Point2;

    use super::*;
    use crate::{
        Error,
        motion::{Command, Primitive, ScriptedAgent},
        world::WorldSnapshot,
    };

    struct FixedStrategy(Point2<f32>);

    impl Strategy for FixedStrategy {
        fn position(&self, _unum: u8) -> Result<Point2<f32>> {
            Ok(self.0)
        }

        fn normal_dash_power(&self, _world: &dyn WorldModel) -> f32 {
            80.0
        }
    }

    struct NoFormation;

    impl Strategy for NoFormation {
        fn position(&self, unum: u8) -> Result<Point2<f32>> {
            Err(Error::UnknownPlayer { unum })
        }

        fn normal_dash_power(&self, _world: &dyn WorldModel) -> f32 {
            panic!("dash power requested without a formation")
        }
    }

    fn world(self_cycles: u32, teammate_cycles: u32, opponent_cycles: u32) -> WorldSnapshot {
        WorldSnapshot {
            unum: 7,
            self_position: Point2::origin(),
            ball_position: Point2::new(30.0, 0.0),
            intercept: InterceptTable {
                self_cycles,
                teammate_cycles,
                opponent_cycles,
            },
            kickable_teammate: false,
            kickable_opponent: false,
            tackle_probability: 0.0,
        }
    }

    fn decide(
        world: &WorldSnapshot,
        strategy: &dyn Strategy,
    ) -> (Result<BehaviorChoice>, ScriptedAgent) {
        let mut agent = ScriptedAgent::from_snapshot(world);
        let choice = BasicMove::default().decide(world, strategy, &mut agent);

        (choice, agent)
    }

    #[test]
    fn successful_tackle_stops_the_cycle() {
        let mut world = world(0, 10, 10);
        world.tackle_probability = 0.9;

        let (choice, agent) = decide(&world, &NoFormation);

        assert_eq!(choice.unwrap(), BehaviorChoice::Tackle);
        assert_eq!(agent.commands, vec![Command::Tackle]);
    }

    #[test]
    fn intercept_when_reaching_ball_immediately() {
        let (choice, agent) = decide(&world(3, 5, 0), &NoFormation);

        assert_eq!(choice.unwrap(), BehaviorChoice::Intercept);
        assert_eq!(
            agent.commands,
            vec![
                Command::Intercept,
                Command::Neck(NeckAction::OffensiveInterceptScan)
            ]
        );
    }

    #[test]
    fn no_intercept_when_teammate_is_faster() {
        let (choice, _) = decide(&world(5, 3, 10), &FixedStrategy(Point2::new(-10.0, 0.0)));

        assert!(matches!(
            choice.unwrap(),
            BehaviorChoice::PositionalMove { .. }
        ));
    }

    #[test]
    fn kickable_teammate_prevents_intercept() {
        let mut world = world(0, 0, 10);
        world.kickable_teammate = true;

        let (choice, agent) = decide(&world, &FixedStrategy(Point2::new(-10.0, 0.0)));

        assert!(matches!(
            choice.unwrap(),
            BehaviorChoice::PositionalMove { moved: true, .. }
        ));
        assert!(!agent.commands.contains(&Command::Intercept));
    }

    #[test]
    fn intercept_condition() {
        let config = InterceptConfig::default();
        let table = |s, m, o| InterceptTable {
            self_cycles: s,
            teammate_cycles: m,
            opponent_cycles: o,
        };

        // ties with a teammate are won by ourselves
        assert!(should_intercept(&config, table(6, 6, 4), false));
        // but we have to be ahead of the opponent margin
        assert!(!should_intercept(&config, table(6, 8, 3), false));
        assert!(should_intercept(&config, table(5, 8, 3), false));
        assert!(!should_intercept(&config, table(7, 6, 20), false));
        assert!(!should_intercept(&config, table(0, 10, 10), true));
        assert!(should_intercept(&config, table(10, u32::MAX, u32::MAX), false));
    }

    #[test]
    fn distance_threshold_has_a_floor() {
        let mut world = world(10, 5, 5);
        world.ball_position = Point2::new(3.0, 0.0);

        let (choice, _) = decide(&world, &FixedStrategy(Point2::new(-10.0, 0.0)));

        let BehaviorChoice::PositionalMove {
            distance_threshold, ..
        } = choice.unwrap()
        else {
            panic!("expected a positional move");
        };
        assert_eq!(distance_threshold, 1.0);
    }

    #[test]
    fn turn_to_ball_at_target() {
        let (choice, agent) = decide(&world(10, 5, 5), &FixedStrategy(Point2::new(0.5, 0.5)));

        assert!(matches!(
            choice.unwrap(),
            BehaviorChoice::PositionalMove { moved: false, .. }
        ));
        assert_eq!(
            agent.commands,
            vec![
                Command::TurnToBall,
                Command::Neck(NeckAction::ScanOrBallAware)
            ]
        );
    }

    #[test]
    fn fixate_ball_near_kickable_opponent() {
        let mut world = world(10, 5, 5);
        world.kickable_opponent = true;
        world.ball_position = Point2::new(17.0, 0.0);

        let (_, agent) = decide(&world, &FixedStrategy(Point2::new(-10.0, 0.0)));
        assert_eq!(agent.neck_action(), Some(NeckAction::FixateBall));

        world.ball_position = Point2::new(18.0, 0.0);

        let (_, agent) = decide(&world, &FixedStrategy(Point2::new(-10.0, 0.0)));
        assert_eq!(agent.neck_action(), Some(NeckAction::ScanOrBallAware));
    }

    #[test]
    fn debug_annotations() {
        let target = Point2::new(-10.0, 5.0);

        let (_, agent) = decide(&world(10, 5, 5), &FixedStrategy(target));

        assert_eq!(agent.debug.messages, vec!["BasicMove80".to_string()]);
        assert_eq!(agent.debug.target, Some(target));
        assert_eq!(agent.debug.circles, vec![(target, 3.0)]);
    }

    #[test]
    fn actuator_failures_propagate() {
        let world = world(10, 5, 5);
        let mut agent = ScriptedAgent::from_snapshot(&world).failing_on(Primitive::GoToPoint);

        let result = BasicMove::default().decide(
            &world,
            &FixedStrategy(Point2::new(-10.0, 0.0)),
            &mut agent,
        );

        assert!(matches!(
            result,
            Err(Error::Actuator {
                command: "go_to_point",
                ..
            })
        ));
        assert!(agent.commands.is_empty());
    }

    #[test]
    fn execute_reports_a_selected_behavior() {
        let world = world(10, 5, 5);
        let mut agent = ScriptedAgent::from_snapshot(&world);

        let executed = BasicMove::default()
            .execute(&world, &FixedStrategy(Point2::new(-10.0, 0.0)), &mut agent)
            .unwrap();

        assert!(executed);
    }
}
