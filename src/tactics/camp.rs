//! Camp: hold position crouched and track the adversary

use crate::tactics::context::{TacticalContext, TickEnv};
use crate::tactics::{CombatStance, StancePolicy};
use crate::world::BotCommand;

#[derive(Debug, Default, Clone, Copy)]
pub struct CampPolicy;

impl StancePolicy for CampPolicy {
    fn stance(&self) -> CombatStance {
        CombatStance::Camp
    }

    fn stance_driven_movement(&mut self, env: &mut TickEnv<'_>, ctx: &mut TacticalContext) {
        if !ctx.nav.crouched {
            if env.actuators.is_following_path() {
                env.issue(BotCommand::StopPath);
            } else if env.actuators.is_running() {
                env.issue(BotCommand::StopMovement);
            }
            env.set_crouch(&mut ctx.nav, true);
        }

        if let Some(adversary) = env.senses.adversary {
            env.issue(BotCommand::TurnTo(adversary.location));
        }
    }
}
