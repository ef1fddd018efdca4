//! Secondary survival overrides
//!
//! An override is advisory: each tick it either claims movement or reports
//! `NotApplicable`, and the stance then moves on its own.

pub mod critical;
pub mod pickup;
pub mod profile;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, TacticsError};
use crate::core::types::Location;
use crate::tactics::context::{OverrideDestination, TacticalContext, TickEnv};
use crate::world::Senses;

pub use critical::{CriticalHealthPolicy, CriticalWeaponryPolicy};
pub use pickup::{PickupAmmoPolicy, PickupHealthPolicy, PickupWeaponPolicy};
pub use profile::{DefensiveProfilePolicy, OffensiveProfilePolicy};

/// Short-term need that may hijack movement for a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurvivalOverride {
    CriticalHealth,
    CriticalWeaponry,
    DefensiveProfile,
    OffensiveProfile,
    PickupWeapon,
    PickupAmmo,
    PickupHealth,
}

impl SurvivalOverride {
    pub const ALL: [SurvivalOverride; 7] = [
        SurvivalOverride::CriticalHealth,
        SurvivalOverride::CriticalWeaponry,
        SurvivalOverride::DefensiveProfile,
        SurvivalOverride::OffensiveProfile,
        SurvivalOverride::PickupWeapon,
        SurvivalOverride::PickupAmmo,
        SurvivalOverride::PickupHealth,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SurvivalOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SurvivalOverride::CriticalHealth => "critical-health",
            SurvivalOverride::CriticalWeaponry => "critical-weaponry",
            SurvivalOverride::DefensiveProfile => "defensive-profile",
            SurvivalOverride::OffensiveProfile => "offensive-profile",
            SurvivalOverride::PickupWeapon => "pickup-weapon",
            SurvivalOverride::PickupAmmo => "pickup-ammo",
            SurvivalOverride::PickupHealth => "pickup-health",
        };
        f.pad(name)
    }
}

/// Result of trying an override for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideOutcome {
    /// The override moved the agent this tick
    Handled,
    /// Nothing to do; the stance moves instead
    NotApplicable,
}

pub trait OverridePolicy {
    fn kind(&self) -> SurvivalOverride;

    fn execute_movement(&mut self, env: &mut TickEnv<'_>, ctx: &mut TacticalContext) -> OverrideOutcome;
}

/// Path to an item picked by `pick`, keeping the claim across ticks
///
/// The destination is recomputed only when another override owned it or
/// the path has ended.
pub(crate) fn pursue(
    owner: SurvivalOverride,
    env: &mut TickEnv<'_>,
    ctx: &mut TacticalContext,
    pick: impl FnOnce(&Senses) -> Option<Location>,
) -> OverrideOutcome {
    let claimed = ctx
        .nav
        .override_destination
        .is_some_and(|d| d.owner == owner);
    if claimed && env.actuators.is_following_path() {
        return OverrideOutcome::Handled;
    }

    let Some(location) = pick(env.senses) else {
        ctx.nav.override_destination = None;
        return OverrideOutcome::NotApplicable;
    };

    tracing::debug!(survival = %owner, ?location, "override heading to item");
    ctx.nav.override_destination = Some(OverrideDestination { owner, location });
    env.follow_path_to(location);
    OverrideOutcome::Handled
}

/// One policy per override kind
pub struct OverrideSet {
    policies: Vec<Box<dyn OverridePolicy>>,
}

impl OverrideSet {
    /// Build from explicit policies; every override needs exactly one
    pub fn from_policies(policies: Vec<Box<dyn OverridePolicy>>) -> Result<Self> {
        let mut slots: Vec<Option<Box<dyn OverridePolicy>>> =
            SurvivalOverride::ALL.iter().map(|_| None).collect();

        for policy in policies {
            let kind = policy.kind();
            let slot = &mut slots[kind.index()];
            if slot.is_some() {
                return Err(TacticsError::UnknownPolicy(format!(
                    "two policies registered for the {kind} override"
                )));
            }
            *slot = Some(policy);
        }

        let policies = slots
            .into_iter()
            .zip(SurvivalOverride::ALL)
            .map(|(slot, kind)| {
                slot.ok_or_else(|| {
                    TacticsError::UnknownPolicy(format!("no policy registered for the {kind} override"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { policies })
    }

    pub fn get_mut(&mut self, kind: SurvivalOverride) -> &mut dyn OverridePolicy {
        self.policies[kind.index()].as_mut()
    }
}

impl Default for OverrideSet {
    fn default() -> Self {
        Self {
            policies: vec![
                Box::new(CriticalHealthPolicy),
                Box::new(CriticalWeaponryPolicy),
                Box::new(DefensiveProfilePolicy),
                Box::new(OffensiveProfilePolicy),
                Box::new(PickupWeaponPolicy),
                Box::new(PickupAmmoPolicy),
                Box::new(PickupHealthPolicy),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set_is_indexed_by_kind() {
        let mut set = OverrideSet::default();
        for kind in SurvivalOverride::ALL {
            assert_eq!(set.get_mut(kind).kind(), kind);
        }
    }

    #[test]
    fn test_incomplete_set_rejected() {
        let result = OverrideSet::from_policies(vec![Box::new(CriticalHealthPolicy)]);
        assert!(matches!(result, Err(TacticsError::UnknownPolicy(_))));
    }
}
