//! Hunt: chase the adversary's last known position while the intel is fresh

use crate::tactics::constants::{HUNT_DIRECT_SECS, HUNT_MEMORY, HUNT_NEARBY_SECS};
use crate::tactics::context::{TacticalContext, TickEnv};
use crate::tactics::movement::wander;
use crate::tactics::{CombatStance, StancePolicy};

#[derive(Debug, Default, Clone, Copy)]
pub struct HuntPolicy;

impl StancePolicy for HuntPolicy {
    fn stance(&self) -> CombatStance {
        CombatStance::Hunt
    }

    fn stance_driven_movement(&mut self, env: &mut TickEnv<'_>, ctx: &mut TacticalContext) {
        if let Some(known) = env.knowledge.last_known_location() {
            if ctx.nav.stance_destination != Some(known) {
                let stale = env.knowledge.seconds_since_contact(env.senses.time);
                let target = if stale < HUNT_DIRECT_SECS {
                    Some(known)
                } else if stale < HUNT_NEARBY_SECS {
                    env.map.closest_point_of_interest(known)
                } else {
                    None
                };

                if let Some(target) = target {
                    ctx.nav.stance_destination = Some(target);
                    if !ctx.nav.recent.contains(target) {
                        tracing::debug!(?target, stale, "hunting last known position");
                        ctx.nav.recent.remember(target, HUNT_MEMORY);
                        env.follow_path_to(target);
                    }
                }
            }
        }

        if !env.actuators.is_following_path() {
            wander(env, ctx, HUNT_MEMORY, false);
        }
    }
}
