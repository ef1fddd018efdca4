//! The scoring policy that picks stance, override, destination and target
//!
//! Everything here is recomputed from scratch each tick. The only memory the
//! brain keeps is a pending combo location and the spam point left by an
//! adversary that just went out of sight.

pub mod arsenal;
pub mod decision;
pub mod destination;
pub mod target;

pub use arsenal::{band_for_difference, compare_arsenals, ArsenalComparison};
pub use decision::{estimate_override, estimate_profile, estimate_stance, Situation};
pub use destination::{estimate_destination, item_priority};
pub use target::{Bullseye, BullseyeKind, COMBO_RADIUS};

use crate::core::types::Location;
use crate::knowledge::EnemyKnowledge;
use crate::overrides::SurvivalOverride;
use crate::tactics::{CombatStance, EngagementFlags};
use crate::world::Senses;

use target::SpamPoint;

/// What the brain wants this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub stance: CombatStance,
    pub survival: Option<SurvivalOverride>,
    pub destination: Option<Location>,
    pub bullseye: Option<Bullseye>,
}

#[derive(Debug, Clone, Default)]
pub struct Brain {
    combo: Option<Location>,
    spam: Option<SpamPoint>,
}

impl Brain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every estimate for one tick
    pub fn decide(
        &mut self,
        senses: &Senses,
        knowledge: &EnemyKnowledge,
        flags: &mut EngagementFlags,
        spam_window: f64,
    ) -> Decision {
        let situation = Situation::assess(senses, knowledge);
        let stance = estimate_stance(&situation);
        let survival = estimate_override(stance, &situation);

        tracing::trace!(
            ?stance,
            ?survival,
            bands = ?situation.arsenal.bands(),
            "brain estimate"
        );

        Decision {
            stance,
            survival,
            destination: estimate_destination(senses),
            bullseye: self.estimate_target(senses, flags, spam_window),
        }
    }

    /// Drop the pending combo and spam point
    pub fn reset_temp_info(&mut self) {
        self.combo = None;
        self.spam = None;
    }
}
