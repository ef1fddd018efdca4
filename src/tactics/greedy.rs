//! Greedy: collect whatever improves our loadout while nothing is going on

use std::cmp::Reverse;

use ordered_float::OrderedFloat;

use crate::brain::item_priority;
use crate::core::types::Location;
use crate::tactics::constants::GREEDY_MEMORY;
use crate::tactics::context::{TacticalContext, TickEnv};
use crate::tactics::memory::RecentDestinations;
use crate::tactics::movement::wander;
use crate::tactics::{CombatStance, StancePolicy};
use crate::world::{ItemCategory, Senses};

#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyPolicy;

/// Next pickup worth a walk, skipping recent destinations
///
/// The most wanted item wins (closest on ties); without one, the closest
/// health or armor item.
pub fn pickup_target(senses: &Senses, recent: &RecentDestinations) -> Option<Location> {
    let spawned = move || senses.items.iter().filter(move |i| i.spawned && !recent.contains(i.location));
    let distance = |location: Location| OrderedFloat(senses.distance_to(location));

    let wanted = spawned()
        .filter_map(|item| item_priority(item.kind, &senses.inventory).map(|p| (p, item.location)))
        .max_by_key(|&(priority, location)| (priority, Reverse(distance(location))))
        .map(|(_, location)| location);

    wanted.or_else(|| {
        spawned()
            .filter(|item| matches!(item.kind.category(), ItemCategory::Health | ItemCategory::Armor))
            .map(|item| item.location)
            .min_by_key(|&location| distance(location))
    })
}

impl StancePolicy for GreedyPolicy {
    fn stance(&self) -> CombatStance {
        CombatStance::Greedy
    }

    fn stance_driven_movement(&mut self, env: &mut TickEnv<'_>, ctx: &mut TacticalContext) {
        if env.actuators.is_following_path() {
            return;
        }

        match pickup_target(env.senses, &ctx.nav.recent) {
            Some(target) => {
                tracing::debug!(?target, "collecting pickup");
                ctx.nav.recent.remember(target, GREEDY_MEMORY);
                ctx.nav.stance_destination = Some(target);
                env.follow_path_to(target);
            }
            None => wander(env, ctx, GREEDY_MEMORY, false),
        }
    }
}
