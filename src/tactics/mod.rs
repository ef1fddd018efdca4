//! Primary stance policies and the machinery they share
//!
//! Each stance owns only its stance-driven movement. Weapon choice, the
//! forced-destination/override/stance arbitration, facing and firing are
//! common to all of them and live in the sibling modules.

pub mod attack;
pub mod camp;
pub mod constants;
pub mod context;
pub mod engage;
pub mod greedy;
pub mod hunt;
pub mod memory;
pub mod movement;
pub mod reactive;
pub mod retreat;
pub mod weapon_switch;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::brain::Bullseye;
use crate::core::error::{Result, TacticsError};

pub use attack::AttackPolicy;
pub use camp::CampPolicy;
pub use context::{EngagementFlags, NavigationIntent, OverrideDestination, TacticalContext, TickEnv};
pub use greedy::GreedyPolicy;
pub use hunt::HuntPolicy;
pub use memory::RecentDestinations;
pub use movement::execute_movement;
pub use retreat::RetreatPolicy;

/// Broad combat behavior, chosen fresh every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatStance {
    Attack,
    Retreat,
    Hunt,
    Greedy,
    Camp,
}

impl CombatStance {
    pub const ALL: [CombatStance; 5] = [
        CombatStance::Attack,
        CombatStance::Retreat,
        CombatStance::Hunt,
        CombatStance::Greedy,
        CombatStance::Camp,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Stances that may keep the agent crouched
    pub fn allows_crouch(self) -> bool {
        matches!(self, CombatStance::Camp)
    }
}

impl fmt::Display for CombatStance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CombatStance::Attack => "attack",
            CombatStance::Retreat => "retreat",
            CombatStance::Hunt => "hunt",
            CombatStance::Greedy => "greedy",
            CombatStance::Camp => "camp",
        };
        f.pad(name)
    }
}

/// A primary stance
pub trait StancePolicy {
    fn stance(&self) -> CombatStance;

    /// Movement this stance performs on its own
    fn stance_driven_movement(&mut self, env: &mut TickEnv<'_>, ctx: &mut TacticalContext);

    fn switch_to_best_weapon(&mut self, env: &mut TickEnv<'_>, ctx: &mut TacticalContext) {
        weapon_switch::switch_to_best_weapon(env, &mut ctx.engagement);
    }

    fn engage(&mut self, bullseye: Option<Bullseye>, env: &mut TickEnv<'_>, ctx: &mut TacticalContext) {
        engage::engage(bullseye, env, &mut ctx.engagement);
    }
}

/// One policy per stance
pub struct StanceSet {
    policies: Vec<Box<dyn StancePolicy>>,
}

impl StanceSet {
    /// Build from explicit policies; every stance needs exactly one
    pub fn from_policies(policies: Vec<Box<dyn StancePolicy>>) -> Result<Self> {
        let mut slots: Vec<Option<Box<dyn StancePolicy>>> =
            CombatStance::ALL.iter().map(|_| None).collect();

        for policy in policies {
            let stance = policy.stance();
            let slot = &mut slots[stance.index()];
            if slot.is_some() {
                return Err(TacticsError::UnknownPolicy(format!(
                    "two policies registered for the {stance} stance"
                )));
            }
            *slot = Some(policy);
        }

        let policies = slots
            .into_iter()
            .zip(CombatStance::ALL)
            .map(|(slot, stance)| {
                slot.ok_or_else(|| {
                    TacticsError::UnknownPolicy(format!("no policy registered for the {stance} stance"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { policies })
    }

    pub fn get_mut(&mut self, stance: CombatStance) -> &mut dyn StancePolicy {
        self.policies[stance.index()].as_mut()
    }
}

impl Default for StanceSet {
    fn default() -> Self {
        Self {
            policies: vec![
                Box::new(AttackPolicy::new()),
                Box::new(RetreatPolicy),
                Box::new(HuntPolicy),
                Box::new(GreedyPolicy),
                Box::new(CampPolicy),
            ],
        }
    }
}
