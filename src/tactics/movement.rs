//! Per-tick movement arbitration and facing
//!
//! Priority is forced destination, then the active override, then the
//! stance. Facing is resolved after movement so a strafe issued this tick
//! still sees the previous focus.

use crate::overrides::{OverrideOutcome, OverridePolicy};
use crate::tactics::context::{TacticalContext, TickEnv};
use crate::tactics::StancePolicy;
use crate::world::BotCommand;

/// Run exactly one source of movement for this tick, then update facing
pub fn execute_movement(
    stance: &mut dyn StancePolicy,
    survival: Option<&mut dyn OverridePolicy>,
    env: &mut TickEnv<'_>,
    ctx: &mut TacticalContext,
) {
    if !stance.stance().allows_crouch() {
        env.set_crouch(&mut ctx.nav, false);
    }

    if let Some(destination) = ctx.nav.forced_destination {
        ctx.nav.override_destination = None;
        ctx.nav.stance_destination = None;
        if ctx.nav.commanded_destination != Some(destination) || !env.actuators.is_following_path() {
            tracing::debug!(?destination, "heading to forced destination");
            ctx.nav.commanded_destination = Some(destination);
            env.follow_path_to(destination);
        }
    } else {
        ctx.nav.commanded_destination = None;
        let handled = match survival {
            Some(policy) => match policy.execute_movement(env, ctx) {
                OverrideOutcome::Handled => true,
                OverrideOutcome::NotApplicable => {
                    tracing::debug!(
                        survival = %policy.kind(),
                        stance = %stance.stance(),
                        "override not applicable, falling back to stance"
                    );
                    false
                }
            },
            None => false,
        };

        if handled {
            ctx.nav.stance_destination = None;
        } else {
            ctx.nav.override_destination = None;
            stance.stance_driven_movement(env, ctx);
        }
    }

    update_facing(env, ctx);
}

/// Apply the requested facing, releasing reactive turns once they expire
pub fn update_facing(env: &mut TickEnv<'_>, ctx: &mut TacticalContext) {
    let nav = &mut ctx.nav;
    match nav.facing_target {
        Some(target) => {
            if nav.current_facing != Some(target) {
                env.issue(BotCommand::SetFocus(Some(target)));
                nav.current_facing = Some(target);
                nav.last_reactive_turn = None;
            }
        }
        None => {
            if let Some(turned_at) = nav.last_reactive_turn {
                if env.senses.time - turned_at >= env.config.reactive_facing_secs {
                    env.issue(BotCommand::SetFocus(None));
                    nav.last_reactive_turn = None;
                    nav.current_facing = None;
                }
            } else if nav.current_facing.is_some() {
                env.issue(BotCommand::SetFocus(None));
                nav.current_facing = None;
            }
        }
    }
}

/// Walk to a random point of interest not visited lately
///
/// Shared by the stances that patrol once they run out of leads.
pub(crate) fn wander(env: &mut TickEnv<'_>, ctx: &mut TacticalContext, memory: usize, halt_first: bool) {
    let recent = &ctx.nav.recent;
    let Some(spot) = env.map.random_point(&mut *env.rng, |p| recent.contains(p)) else {
        return;
    };

    ctx.nav.recent.remember(spot, memory);
    ctx.nav.stance_destination = Some(spot);
    if halt_first && env.actuators.is_running() {
        env.issue(BotCommand::StopMovement);
    }
    tracing::trace!(?spot, "wandering");
    env.follow_path_to(spot);
}
