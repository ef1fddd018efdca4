//! Opportunistic pickups chosen by the brain

use crate::core::arithmetic::closest_location;
use crate::core::types::Location;
use crate::overrides::critical::FULL_HEALTH;
use crate::overrides::{pursue, OverrideOutcome, OverridePolicy, SurvivalOverride};
use crate::tactics::context::{TacticalContext, TickEnv};
use crate::world::{ItemKind, Senses};

fn nearest_matching(senses: &Senses, wanted: impl Fn(ItemKind) -> bool) -> Option<Location> {
    closest_location(
        senses.location,
        senses
            .items
            .iter()
            .filter(|i| i.spawned && wanted(i.kind))
            .map(|i| i.location),
    )
}

/// Nearest spawned weapon we do not already have loaded
pub fn weapon_target(senses: &Senses) -> Option<Location> {
    nearest_matching(senses, |kind| {
        matches!(kind, ItemKind::Weapon(w) if !senses.inventory.has_loaded(w))
    })
}

/// Nearest spawned ammo for a weapon we carry
pub fn ammo_target(senses: &Senses) -> Option<Location> {
    nearest_matching(senses, |kind| {
        matches!(kind, ItemKind::Ammo(w) if senses.inventory.has(w))
    })
}

/// Nearest spawned pack or vial; vials only at full health
pub fn health_target(senses: &Senses) -> Option<Location> {
    let hurt = senses.health < FULL_HEALTH;
    nearest_matching(senses, |kind| match kind {
        ItemKind::HealthPack => hurt,
        ItemKind::HealthVial => true,
        _ => false,
    })
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PickupWeaponPolicy;

impl OverridePolicy for PickupWeaponPolicy {
    fn kind(&self) -> SurvivalOverride {
        SurvivalOverride::PickupWeapon
    }

    fn execute_movement(&mut self, env: &mut TickEnv<'_>, ctx: &mut TacticalContext) -> OverrideOutcome {
        pursue(self.kind(), env, ctx, weapon_target)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PickupAmmoPolicy;

impl OverridePolicy for PickupAmmoPolicy {
    fn kind(&self) -> SurvivalOverride {
        SurvivalOverride::PickupAmmo
    }

    fn execute_movement(&mut self, env: &mut TickEnv<'_>, ctx: &mut TacticalContext) -> OverrideOutcome {
        pursue(self.kind(), env, ctx, ammo_target)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PickupHealthPolicy;

impl OverridePolicy for PickupHealthPolicy {
    fn kind(&self) -> SurvivalOverride {
        SurvivalOverride::PickupHealth
    }

    fn execute_movement(&mut self, env: &mut TickEnv<'_>, ctx: &mut TacticalContext) -> OverrideOutcome {
        pursue(self.kind(), env, ctx, health_target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::core::config::AgentConfig;
    use crate::knowledge::EnemyKnowledge;
    use crate::sim::RecordingActuators;
    use crate::weapons::WeaponKind;
    use crate::world::{ArenaMap, BotCommand, ItemSpawn};

    fn senses_with(items: Vec<ItemSpawn>) -> Senses {
        let mut senses = Senses::new(0.0, 80, Location::ZERO);
        senses.items = items;
        senses
    }

    #[test]
    fn test_weapon_target_skips_loaded() {
        let rocket = Location::new(800.0, 0.0, 0.0);
        let senses = senses_with(vec![
            ItemSpawn::new(ItemKind::Weapon(WeaponKind::AssaultRifle), Location::new(100.0, 0.0, 0.0)),
            ItemSpawn::new(ItemKind::Weapon(WeaponKind::RocketLauncher), rocket),
        ]);
        assert_eq!(weapon_target(&senses), Some(rocket));
    }

    #[test]
    fn test_ammo_only_for_owned_weapons() {
        let ar_ammo = Location::new(600.0, 0.0, 0.0);
        let senses = senses_with(vec![
            ItemSpawn::new(ItemKind::Ammo(WeaponKind::FlakCannon), Location::new(100.0, 0.0, 0.0)),
            ItemSpawn::new(ItemKind::Ammo(WeaponKind::AssaultRifle), ar_ammo),
        ]);
        assert_eq!(ammo_target(&senses), Some(ar_ammo));
    }

    #[test]
    fn test_nothing_spawned_is_not_applicable() {
        let senses = senses_with(Vec::new());
        let map = ArenaMap::default();
        let knowledge = EnemyKnowledge::new();
        let mut actuators = RecordingActuators::new();
        let mut rng = StdRng::seed_from_u64(0);
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

        let outcome = PickupHealthPolicy.execute_movement(&mut env, &mut ctx);
        assert_eq!(outcome, OverrideOutcome::NotApplicable);
        assert!(actuators.commands().is_empty());
    }

    #[test]
    fn test_claim_kept_while_path_runs() {
        let vial = Location::new(300.0, 0.0, 0.0);
        let mut senses = senses_with(vec![ItemSpawn::new(ItemKind::HealthVial, vial)]);
        let map = ArenaMap::default();
        let knowledge = EnemyKnowledge::new();
        let mut actuators = RecordingActuators::new();
        let mut rng = StdRng::seed_from_u64(0);
        let config = AgentConfig::default();
        let mut ctx = TacticalContext::new();

        for _ in 0..2 {
            let mut env = TickEnv {
                senses: &senses,
                map: &map,
                knowledge: &knowledge,
                actuators: &mut actuators,
                rng: &mut rng,
                config: &config,
            };
            assert_eq!(
                PickupHealthPolicy.execute_movement(&mut env, &mut ctx),
                OverrideOutcome::Handled
            );
            senses.location = Location::new(100.0, 0.0, 0.0);
        }

        assert_eq!(actuators.count(|c| matches!(c, BotCommand::FollowPath { .. })), 1);
        assert_eq!(ctx.nav.override_destination.map(|d| d.location), Some(vial));
    }
}
