//! Attack: stay in the fight and stay hard to hit

use crate::core::arithmetic::random_between;
use crate::core::types::{CardinalRays, Heading, Location};
use crate::tactics::constants::{
    DODGE_LEFT_BELOW, DODGE_MIN_CLEARANCE, STRAFE_DISTANCE, STRAFE_LEFT_BELOW, STRAFE_MIN_CLEARANCE,
    STRAFE_RIGHT_BELOW,
};
use crate::tactics::context::{TacticalContext, TickEnv};
use crate::tactics::{CombatStance, StancePolicy};
use crate::world::BotCommand;

/// Random strafes and dodges while the adversary is in sight, alternating
/// side-steps while it is not
#[derive(Debug, Default)]
pub struct AttackPolicy {
    /// Next blind side-step goes left
    step_left: bool,
}

impl AttackPolicy {
    pub fn new() -> Self {
        Self::default()
    }
}

fn strafe_left(focus: Option<Location>) -> BotCommand {
    BotCommand::StrafeLeft {
        distance: STRAFE_DISTANCE,
        focus,
    }
}

fn strafe_right(focus: Option<Location>) -> BotCommand {
    BotCommand::StrafeRight {
        distance: STRAFE_DISTANCE,
        focus,
    }
}

/// Evasive move for a roll in `0..=99`, falling back to the other side when
/// the preferred one is blocked
pub fn evasive_move(roll: i32, rays: &CardinalRays, origin: Location, focus: Location) -> BotCommand {
    let west = rays.clearance(origin, Heading::West);
    let east = rays.clearance(origin, Heading::East);

    if roll < STRAFE_LEFT_BELOW {
        if west > STRAFE_MIN_CLEARANCE {
            strafe_left(Some(focus))
        } else {
            strafe_right(Some(focus))
        }
    } else if roll < STRAFE_RIGHT_BELOW {
        if east > STRAFE_MIN_CLEARANCE {
            strafe_right(Some(focus))
        } else {
            strafe_left(Some(focus))
        }
    } else if roll < DODGE_LEFT_BELOW {
        if west > DODGE_MIN_CLEARANCE {
            BotCommand::dodge(0.0, -1.0)
        } else {
            BotCommand::dodge(0.0, 1.0)
        }
    } else if east > DODGE_MIN_CLEARANCE {
        BotCommand::dodge(0.0, 1.0)
    } else {
        BotCommand::dodge(0.0, -1.0)
    }
}

/// Blind side-step toward the pendulum side, reversing off a wall
fn blind_step(go_left: bool, rays: &CardinalRays, origin: Location) -> BotCommand {
    let west = rays.clearance(origin, Heading::West);
    let east = rays.clearance(origin, Heading::East);

    match go_left {
        true if west > STRAFE_MIN_CLEARANCE => strafe_left(None),
        true => strafe_right(None),
        false if east > STRAFE_MIN_CLEARANCE => strafe_right(None),
        false => strafe_left(None),
    }
}

impl StancePolicy for AttackPolicy {
    fn stance(&self) -> CombatStance {
        CombatStance::Attack
    }

    fn stance_driven_movement(&mut self, env: &mut TickEnv<'_>, ctx: &mut TacticalContext) {
        env.stop_path_if_following();
        let Some(rays) = env.senses.rays else {
            return;
        };
        let origin = env.senses.location;

        let command = match env.senses.adversary {
            Some(adversary) => {
                let focus = ctx.nav.facing_target.unwrap_or(adversary.location);
                let roll = random_between(&mut *env.rng, 0, 99);
                evasive_move(roll, &rays, origin, focus)
            }
            None => {
                let go_left = self.step_left;
                self.step_left = !self.step_left;
                blind_step(go_left, &rays, origin)
            }
        };

        env.issue(command);
    }
}
