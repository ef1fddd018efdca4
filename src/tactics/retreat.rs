//! Retreat: put distance between us and the adversary

use crate::core::arithmetic::best_run_zone;
use crate::tactics::constants::{RETREAT_INTEL_SECS, RETREAT_MEMORY};
use crate::tactics::context::{TacticalContext, TickEnv};
use crate::tactics::movement::wander;
use crate::tactics::{CombatStance, StancePolicy};

#[derive(Debug, Default, Clone, Copy)]
pub struct RetreatPolicy;

impl StancePolicy for RetreatPolicy {
    fn stance(&self) -> CombatStance {
        CombatStance::Retreat
    }

    fn stance_driven_movement(&mut self, env: &mut TickEnv<'_>, ctx: &mut TacticalContext) {
        let threat = env
            .senses
            .adversary
            .map(|a| a.location)
            .or_else(|| env.knowledge.last_known_location())
            .filter(|_| env.knowledge.seconds_since_contact(env.senses.time) < RETREAT_INTEL_SECS);

        if let Some(threat) = threat {
            let zone = best_run_zone(&env.map.points_of_interest, threat, env.senses.location);
            if let Some(zone) = zone.filter(|z| ctx.nav.stance_destination != Some(*z)) {
                ctx.nav.stance_destination = Some(zone);
                if ctx.nav.recent.contains(zone) {
                    env.stop_path_if_following();
                } else {
                    tracing::debug!(?zone, ?threat, "retreating");
                    ctx.nav.recent.remember(zone, RETREAT_MEMORY);
                    env.follow_path_to(zone);
                }
            }
        }

        if !env.actuators.is_following_path() {
            wander(env, ctx, RETREAT_MEMORY, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::core::config::AgentConfig;
    use crate::core::types::{AdversaryId, Location};
    use crate::knowledge::EnemyKnowledge;
    use crate::sim::RecordingActuators;
    use crate::world::{Actuators, Adversary, ArenaMap, BotCommand, Senses};

    #[test]
    fn test_runs_to_zone_away_from_visible_adversary() {
        let mut senses = Senses::new(3.0, 40, Location::ZERO);
        let enemy = Location::new(800.0, 0.0, 0.0);
        senses.adversary = Some(Adversary {
            id: AdversaryId(1),
            location: enemy,
            weapon: None,
        });
        let mut knowledge = EnemyKnowledge::new();
        knowledge.update_location(enemy, 3.0);

        let map = ArenaMap::new(vec![
            Location::new(1200.0, 0.0, 0.0),
            Location::new(-1500.0, 0.0, 0.0),
            Location::new(-600.0, 0.0, 0.0),
        ]);
        let mut actuators = RecordingActuators::new();
        let mut rng = StdRng::seed_from_u64(3);
        let config = AgentConfig::default();
        let mut ctx = TacticalContext::new();

        let mut env = TickEnv {
            senses: &senses,
            map: &map,
            knowledge: &knowledge,
            actuators: &mut actuators,
            rng: &mut rng,
            config: &config,
        };
        RetreatPolicy.stance_driven_movement(&mut env, &mut ctx);

        assert_eq!(actuators.path_target(), Some(Location::new(-1500.0, 0.0, 0.0)));
        assert_eq!(ctx.nav.recent.len(), 1);
    }

    #[test]
    fn test_stale_intel_wanders() {
        let senses = Senses::new(30.0, 40, Location::ZERO);
        let mut knowledge = EnemyKnowledge::new();
        knowledge.update_location(Location::new(800.0, 0.0, 0.0), 3.0);

        let map = ArenaMap::new(vec![Location::new(500.0, 500.0, 0.0)]);
        let mut actuators = RecordingActuators::new();
        let mut rng = StdRng::seed_from_u64(3);
        let config = AgentConfig::default();
        let mut ctx = TacticalContext::new();

        let mut env = TickEnv {
            senses: &senses,
            map: &map,
            knowledge: &knowledge,
            actuators: &mut actuators,
            rng: &mut rng,
            config: &config,
        };
        RetreatPolicy.stance_driven_movement(&mut env, &mut ctx);

        assert_eq!(actuators.path_target(), Some(Location::new(500.0, 500.0, 0.0)));
    }

    #[test]
    fn test_recent_zone_abandons_path_and_wanders() {
        let mut senses = Senses::new(3.0, 40, Location::ZERO);
        let enemy = Location::new(800.0, 0.0, 0.0);
        senses.adversary = Some(Adversary {
            id: AdversaryId(1),
            location: enemy,
            weapon: None,
        });
        let mut knowledge = EnemyKnowledge::new();
        knowledge.update_location(enemy, 3.0);

        let zone = Location::new(-1500.0, 0.0, 0.0);
        let side = Location::new(0.0, 1500.0, 0.0);
        let map = ArenaMap::new(vec![zone, side]);
        let mut actuators = RecordingActuators::new();
        actuators.issue(BotCommand::FollowPath {
            from: Location::ZERO,
            to: Location::new(300.0, 300.0, 0.0),
        });
        actuators.drain();
        let mut rng = StdRng::seed_from_u64(3);
        let config = AgentConfig::default();
        let mut ctx = TacticalContext::new();
        ctx.nav.recent.remember(zone, RETREAT_MEMORY);

        let mut env = TickEnv {
            senses: &senses,
            map: &map,
            knowledge: &knowledge,
            actuators: &mut actuators,
            rng: &mut rng,
            config: &config,
        };
        RetreatPolicy.stance_driven_movement(&mut env, &mut ctx);

        assert_eq!(actuators.commands()[0], BotCommand::StopPath);
        assert_eq!(actuators.path_target(), Some(side));
        assert_eq!(ctx.nav.stance_destination, Some(side));
    }

    #[test]
    fn test_wandering_memory_capped_at_two() {
        let senses = Senses::new(30.0, 40, Location::ZERO);
        let knowledge = EnemyKnowledge::new();
        let map = ArenaMap::new((1..=5).map(|i| Location::new(0.0, i as f32 * 400.0, 0.0)).collect());
        let mut actuators = RecordingActuators::new();
        let mut rng = StdRng::seed_from_u64(11);
        let config = AgentConfig::default();
        let mut ctx = TacticalContext::new();

        for _ in 0..8 {
            let mut env = TickEnv {
                senses: &senses,
                map: &map,
                knowledge: &knowledge,
                actuators: &mut actuators,
                rng: &mut rng,
                config: &config,
            };
            RetreatPolicy.stance_driven_movement(&mut env, &mut ctx);
            actuators.finish_path();
            assert!(ctx.nav.recent.len() <= 2);
        }
        assert_eq!(ctx.nav.recent.len(), 2);
        assert_eq!(actuators.count(|c| matches!(c, BotCommand::FollowPath { .. })), 8);
    }
}
