//! Per-tick snapshot of everything perception reports

use serde::{Deserialize, Serialize};

use crate::core::types::{AdversaryId, CardinalRays, Location, SimTime};
use crate::weapons::bands::{DistanceBucket, HeightBand};
use crate::weapons::inventory::Inventory;
use crate::weapons::kinds::WeaponKind;
use crate::world::items::ItemSpawn;

/// The adversary as currently seen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Adversary {
    pub id: AdversaryId,
    pub location: Location,
    /// Weapon the adversary is holding, when perception can tell
    pub weapon: Option<WeaponKind>,
}

/// Projectile types perception can classify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Slow shock-rifle core; a beam through it detonates a combo
    ShockCore,
    Rocket,
    FlakShell,
    BioGlob,
    Other,
}

impl ProjectileKind {
    pub fn is_deflectable(self) -> bool {
        matches!(self, ProjectileKind::ShockCore)
    }
}

/// A projectile in the field of view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileSighting {
    pub kind: ProjectileKind,
    pub location: Location,
}

/// Everything the decision layer reads during one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Senses {
    pub time: SimTime,
    pub health: i32,
    pub location: Location,
    pub inventory: Inventory,
    /// `None` while the adversary is out of sight
    pub adversary: Option<Adversary>,
    /// `None` until every cardinal ray has reported once
    pub rays: Option<CardinalRays>,
    pub items: Vec<ItemSpawn>,
}

impl Senses {
    pub fn new(time: SimTime, health: i32, location: Location) -> Self {
        Self {
            time,
            health,
            location,
            inventory: Inventory::spawn_loadout(),
            adversary: None,
            rays: None,
            items: Vec::new(),
        }
    }

    pub fn distance_to(&self, target: Location) -> f32 {
        self.location.distance(target)
    }

    pub fn bucket_to(&self, target: Location) -> DistanceBucket {
        DistanceBucket::classify(self.distance_to(target))
    }

    pub fn height_of(&self, target: Location) -> HeightBand {
        HeightBand::between(self.location, target)
    }

    /// Distance to the visible adversary
    pub fn adversary_distance(&self) -> Option<f32> {
        self.adversary.map(|a| self.distance_to(a.location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adversary_distance() {
        let mut senses = Senses::new(0.0, 100, Location::ZERO);
        assert_eq!(senses.adversary_distance(), None);

        senses.adversary = Some(Adversary {
            id: AdversaryId(1),
            location: Location::new(0.0, 900.0, 0.0),
            weapon: None,
        });
        assert_eq!(senses.adversary_distance(), Some(900.0));
        assert_eq!(senses.bucket_to(Location::new(0.0, 900.0, 0.0)), DistanceBucket::Medium);
    }

    #[test]
    fn test_only_shock_core_is_deflectable() {
        assert!(ProjectileKind::ShockCore.is_deflectable());
        assert!(!ProjectileKind::Rocket.is_deflectable());
    }
}
