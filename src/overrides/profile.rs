//! Range correction: back off from or close in on the adversary
//!
//! Both profiles pick the ray with room to move along, preferring the one
//! pointing straight away from (or at) the adversary, then the diagonals,
//! then the sides. With no room anywhere they dodge.

use crate::core::types::{CardinalRays, Heading, Location};
use crate::overrides::{OverrideOutcome, OverridePolicy, SurvivalOverride};
use crate::tactics::constants::PROFILE_MIN_CLEARANCE;
use crate::tactics::context::{TacticalContext, TickEnv};
use crate::world::BotCommand;

/// Ray preference for one profile
struct ProfileRays {
    straight: Heading,
    diagonals: [Heading; 2],
    sides: [Heading; 2],
    /// Dodge `(forward, right)` when nothing is free
    fallback: (f32, f32),
}

const DEFENSIVE: ProfileRays = ProfileRays {
    straight: Heading::South,
    diagonals: [Heading::SouthWest, Heading::SouthEast],
    sides: [Heading::West, Heading::East],
    fallback: (-1.0, 0.0),
};

const OFFENSIVE: ProfileRays = ProfileRays {
    straight: Heading::North,
    diagonals: [Heading::NorthWest, Heading::NorthEast],
    sides: [Heading::West, Heading::East],
    fallback: (1.0, 0.0),
};

/// The more open of two rays, if it clears the minimum
fn roomier(rays: &CardinalRays, origin: Location, pair: [Heading; 2]) -> Option<Heading> {
    let [a, b] = pair;
    let (ca, cb) = (rays.clearance(origin, a), rays.clearance(origin, b));
    if ca <= PROFILE_MIN_CLEARANCE && cb <= PROFILE_MIN_CLEARANCE {
        return None;
    }
    Some(if ca > cb { a } else { b })
}

fn profile_move(profile: &ProfileRays, rays: &CardinalRays, origin: Location, adversary: Location) -> BotCommand {
    let heading = if rays.clearance(origin, profile.straight) >= PROFILE_MIN_CLEARANCE {
        Some(profile.straight)
    } else {
        roomier(rays, origin, profile.diagonals).or_else(|| roomier(rays, origin, profile.sides))
    };

    match heading {
        Some(heading) => BotCommand::StrafeTo {
            target: rays.hit(heading),
            focus: adversary,
        },
        None => BotCommand::dodge(profile.fallback.0, profile.fallback.1),
    }
}

fn run_profile(profile: &ProfileRays, env: &mut TickEnv<'_>) -> OverrideOutcome {
    let (Some(adversary), Some(rays)) = (env.senses.adversary, env.senses.rays) else {
        return OverrideOutcome::NotApplicable;
    };

    env.stop_path_if_following();
    let command = profile_move(profile, &rays, env.senses.location, adversary.location);
    env.issue(command);
    OverrideOutcome::Handled
}

/// Move away from an adversary that is too close for our arsenal
pub fn defensive_move(rays: &CardinalRays, origin: Location, adversary: Location) -> BotCommand {
    profile_move(&DEFENSIVE, rays, origin, adversary)
}

/// Close in on an adversary that is too far for our arsenal
pub fn offensive_move(rays: &CardinalRays, origin: Location, adversary: Location) -> BotCommand {
    profile_move(&OFFENSIVE, rays, origin, adversary)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefensiveProfilePolicy;

impl OverridePolicy for DefensiveProfilePolicy {
    fn kind(&self) -> SurvivalOverride {
        SurvivalOverride::DefensiveProfile
    }

    fn execute_movement(&mut self, env: &mut TickEnv<'_>, _ctx: &mut TacticalContext) -> OverrideOutcome {
        run_profile(&DEFENSIVE, env)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OffensiveProfilePolicy;

impl OverridePolicy for OffensiveProfilePolicy {
    fn kind(&self) -> SurvivalOverride {
        SurvivalOverride::OffensiveProfile
    }

    fn execute_movement(&mut self, env: &mut TickEnv<'_>, _ctx: &mut TacticalContext) -> OverrideOutcome {
        run_profile(&OFFENSIVE, env)
    }
}
