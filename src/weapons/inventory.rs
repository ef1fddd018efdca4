//! Our own weapon inventory as reported each tick

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::weapons::kinds::{WeaponKind, WeaponSet};

/// Ammunition held for one weapon
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ammo {
    pub primary: u32,
    pub secondary: u32,
}

impl Ammo {
    pub fn new(primary: u32, secondary: u32) -> Self {
        Self { primary, secondary }
    }
}

/// Weapons carried, their ammo and the one currently wielded
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub current: Option<WeaponKind>,
    weapons: BTreeMap<WeaponKind, Ammo>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shield gun and assault rifle, holding the assault rifle
    pub fn spawn_loadout() -> Self {
        Self::new()
            .with_weapon(WeaponKind::ShieldGun, Ammo::new(100, 0))
            .with_weapon(WeaponKind::AssaultRifle, Ammo::new(100, 4))
            .wielding(WeaponKind::AssaultRifle)
    }

    pub fn with_weapon(mut self, kind: WeaponKind, ammo: Ammo) -> Self {
        self.weapons.insert(kind, ammo);
        self
    }

    pub fn wielding(mut self, kind: WeaponKind) -> Self {
        self.current = Some(kind);
        self
    }

    pub fn add(&mut self, kind: WeaponKind, ammo: Ammo) {
        let entry = self.weapons.entry(kind).or_default();
        entry.primary += ammo.primary;
        entry.secondary += ammo.secondary;
    }

    /// Use up primary rounds; never goes below zero
    pub fn spend(&mut self, kind: WeaponKind, rounds: u32) {
        if let Some(ammo) = self.weapons.get_mut(&kind) {
            ammo.primary = ammo.primary.saturating_sub(rounds);
        }
    }

    pub fn has(&self, kind: WeaponKind) -> bool {
        self.weapons.contains_key(&kind)
    }

    /// Carried and has primary ammo
    pub fn has_loaded(&self, kind: WeaponKind) -> bool {
        self.ammo(kind) > 0
    }

    /// Primary ammo (0 when the weapon is not carried)
    pub fn ammo(&self, kind: WeaponKind) -> u32 {
        self.weapons.get(&kind).map(|a| a.primary).unwrap_or(0)
    }

    pub fn secondary_ammo(&self, kind: WeaponKind) -> u32 {
        self.weapons.get(&kind).map(|a| a.secondary).unwrap_or(0)
    }

    /// Every carried weapon that still has primary ammo
    pub fn loaded(&self) -> WeaponSet {
        self.weapons
            .iter()
            .filter(|(_, ammo)| ammo.primary > 0)
            .map(|(kind, _)| *kind)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WeaponKind, Ammo)> + '_ {
        self.weapons.iter().map(|(k, a)| (*k, *a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_loadout() {
        let inv = Inventory::spawn_loadout();
        assert_eq!(inv.current, Some(WeaponKind::AssaultRifle));
        assert!(inv.has_loaded(WeaponKind::ShieldGun));
        assert!(!inv.has(WeaponKind::ShockRifle));
    }

    #[test]
    fn test_empty_weapon_is_not_loaded() {
        let inv = Inventory::new().with_weapon(WeaponKind::FlakCannon, Ammo::new(0, 0));
        assert!(inv.has(WeaponKind::FlakCannon));
        assert!(!inv.has_loaded(WeaponKind::FlakCannon));
        assert!(!inv.loaded().contains(WeaponKind::FlakCannon));
    }

    #[test]
    fn test_add_accumulates_ammo() {
        let mut inv = Inventory::new();
        inv.add(WeaponKind::ShockRifle, Ammo::new(10, 0));
        inv.add(WeaponKind::ShockRifle, Ammo::new(5, 0));
        assert_eq!(inv.ammo(WeaponKind::ShockRifle), 15);
    }

    #[test]
    fn test_spend_saturates() {
        let mut inv = Inventory::new().with_weapon(WeaponKind::RocketLauncher, Ammo::new(2, 0));
        inv.spend(WeaponKind::RocketLauncher, 5);
        assert_eq!(inv.ammo(WeaponKind::RocketLauncher), 0);
        assert!(inv.has(WeaponKind::RocketLauncher));
    }
}
