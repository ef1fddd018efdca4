//! What we believe about the adversary between sightings

use serde::{Deserialize, Serialize};

use crate::core::types::{Location, SimTime};
use crate::weapons::kinds::{WeaponKind, WeaponSet};
use crate::world::items::ItemKind;

/// Health every player spawns with
pub const SPAWN_HEALTH: i32 = 100;

/// Accumulated estimate of the single tracked adversary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyKnowledge {
    last_known_location: Option<Location>,
    last_time_seen: Option<SimTime>,
    estimated_health: i32,
    estimated_armor: i32,
    estimated_arsenal: WeaponSet,
    name: Option<String>,
}

impl Default for EnemyKnowledge {
    fn default() -> Self {
        Self {
            last_known_location: None,
            last_time_seen: None,
            estimated_health: SPAWN_HEALTH,
            estimated_armor: 0,
            estimated_arsenal: WeaponSet::spawn_loadout(),
            name: None,
        }
    }
}

impl EnemyKnowledge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_known_location(&self) -> Option<Location> {
        self.last_known_location
    }

    pub fn last_time_seen(&self) -> Option<SimTime> {
        self.last_time_seen
    }

    pub fn estimated_health(&self) -> i32 {
        self.estimated_health
    }

    pub fn estimated_armor(&self) -> i32 {
        self.estimated_armor
    }

    /// Health plus armor, used to decide whether a sustained weapon can
    /// finish the adversary off
    pub fn health_armor(&self) -> i32 {
        self.estimated_health + self.estimated_armor
    }

    pub fn arsenal(&self) -> WeaponSet {
        self.estimated_arsenal
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Seconds since the adversary was last seen or heard; infinite when it
    /// never was
    pub fn seconds_since_contact(&self, now: SimTime) -> f64 {
        match self.last_time_seen {
            Some(seen) => (now - seen).max(0.0),
            None => f64::INFINITY,
        }
    }

    pub fn update_location(&mut self, location: Location, time: SimTime) {
        self.last_known_location = Some(location);
        self.last_time_seen = Some(time);
    }

    /// The adversary was seen holding `weapon`
    pub fn observe_weapon(&mut self, weapon: WeaponKind) {
        self.estimated_arsenal.insert(weapon);
    }

    /// We dealt `damage` to the adversary; armor soaks it first
    pub fn hit(&mut self, damage: i32) {
        let damage = damage.max(0);
        let absorbed = damage.min(self.estimated_armor);
        self.estimated_armor -= absorbed;
        self.estimated_health = (self.estimated_health - (damage - absorbed)).max(0);
    }

    /// The adversary was heard picking up `item` at `location`
    pub fn hear_pickup(&mut self, item: ItemKind, location: Location, time: SimTime) {
        self.update_location(location, time);

        match item {
            ItemKind::Weapon(kind) | ItemKind::Ammo(kind) => self.estimated_arsenal.insert(kind),
            _ => {
                if let Some((gain, cap)) = item.health_gain() {
                    self.estimated_health = (self.estimated_health + gain).min(cap.max(self.estimated_health));
                }
                if let Some((gain, cap)) = item.armor_gain() {
                    self.estimated_armor = (self.estimated_armor + gain).min(cap);
                }
            }
        }
    }

    /// Forget everything but the name (adversary died or left)
    pub fn reset(&mut self) {
        let name = self.name.take();
        *self = Self {
            name,
            ..Self::default()
        };
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn erase_name(&mut self) {
        self.name = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_seen_is_infinitely_stale() {
        let knowledge = EnemyKnowledge::new();
        assert!(knowledge.seconds_since_contact(100.0).is_infinite());
        assert_eq!(knowledge.estimated_health(), SPAWN_HEALTH);
        assert!(knowledge.arsenal().contains(WeaponKind::AssaultRifle));
    }

    #[test]
    fn test_update_location_tracks_time() {
        let mut knowledge = EnemyKnowledge::new();
        knowledge.update_location(Location::new(10.0, 0.0, 0.0), 3.0);
        assert_eq!(knowledge.last_known_location(), Some(Location::new(10.0, 0.0, 0.0)));
        assert_eq!(knowledge.seconds_since_contact(8.0), 5.0);
    }

    #[test]
    fn test_armor_absorbs_hits_first() {
        let mut knowledge = EnemyKnowledge::new();
        knowledge.hear_pickup(ItemKind::ShieldPack, Location::ZERO, 1.0);
        assert_eq!(knowledge.health_armor(), 150);

        knowledge.hit(70);
        assert_eq!(knowledge.estimated_armor(), 0);
        assert_eq!(knowledge.estimated_health(), 80);

        knowledge.hit(500);
        assert_eq!(knowledge.estimated_health(), 0);
    }

    #[test]
    fn test_heard_pickups_update_estimates() {
        let mut knowledge = EnemyKnowledge::new();
        knowledge.hit(50);
        knowledge.hear_pickup(ItemKind::HealthPack, Location::ZERO, 1.0);
        assert_eq!(knowledge.estimated_health(), 75);

        knowledge.hear_pickup(ItemKind::HealthPack, Location::ZERO, 2.0);
        knowledge.hear_pickup(ItemKind::HealthPack, Location::ZERO, 3.0);
        assert_eq!(knowledge.estimated_health(), 100);

        knowledge.hear_pickup(ItemKind::HealthVial, Location::ZERO, 4.0);
        assert_eq!(knowledge.estimated_health(), 105);

        knowledge.hear_pickup(ItemKind::Weapon(WeaponKind::FlakCannon), Location::X, 5.0);
        assert!(knowledge.arsenal().contains(WeaponKind::FlakCannon));
        assert_eq!(knowledge.last_known_location(), Some(Location::X));
    }

    #[test]
    fn test_reset_keeps_name() {
        let mut knowledge = EnemyKnowledge::new();
        knowledge.set_name("Paquito");
        knowledge.observe_weapon(WeaponKind::ShockRifle);
        knowledge.update_location(Location::ZERO, 1.0);
        knowledge.reset();

        assert_eq!(knowledge.name(), Some("Paquito"));
        assert!(!knowledge.arsenal().contains(WeaponKind::ShockRifle));
        assert_eq!(knowledge.last_known_location(), None);

        knowledge.erase_name();
        assert_eq!(knowledge.name(), None);
    }
}
