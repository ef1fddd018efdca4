//! Overrides for running out of health or weapons

use crate::core::arithmetic::closest_location;
use crate::core::types::Location;
use crate::overrides::{pursue, OverrideOutcome, OverridePolicy, SurvivalOverride};
use crate::tactics::context::{TacticalContext, TickEnv};
use crate::world::{spawned_in, ItemCategory, ItemKind, Senses};

/// Health at which a full pack no longer helps
pub const FULL_HEALTH: i32 = 100;

/// Nearest spawned item of exactly `kind`
pub(crate) fn nearest_of(senses: &Senses, kind: ItemKind) -> Option<Location> {
    closest_location(
        senses.location,
        senses
            .items
            .iter()
            .filter(|i| i.spawned && i.kind == kind)
            .map(|i| i.location),
    )
}

/// Nearest healing item; packs first below full health, only vials above
pub fn critical_health_target(senses: &Senses) -> Option<Location> {
    if senses.health < FULL_HEALTH {
        nearest_of(senses, ItemKind::HealthPack).or_else(|| nearest_of(senses, ItemKind::HealthVial))
    } else {
        nearest_of(senses, ItemKind::HealthVial)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CriticalHealthPolicy;

impl OverridePolicy for CriticalHealthPolicy {
    fn kind(&self) -> SurvivalOverride {
        SurvivalOverride::CriticalHealth
    }

    fn execute_movement(&mut self, env: &mut TickEnv<'_>, ctx: &mut TacticalContext) -> OverrideOutcome {
        pursue(self.kind(), env, ctx, critical_health_target)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CriticalWeaponryPolicy;

impl OverridePolicy for CriticalWeaponryPolicy {
    fn kind(&self) -> SurvivalOverride {
        SurvivalOverride::CriticalWeaponry
    }

    fn execute_movement(&mut self, env: &mut TickEnv<'_>, ctx: &mut TacticalContext) -> OverrideOutcome {
        pursue(self.kind(), env, ctx, |senses| {
            closest_location(
                senses.location,
                spawned_in(&senses.items, ItemCategory::Weapon).map(|i| i.location),
            )
        })
    }
}
