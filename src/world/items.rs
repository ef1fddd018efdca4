//! Item spawns the agent can see or hear

use serde::{Deserialize, Serialize};

use crate::core::types::Location;
use crate::weapons::kinds::WeaponKind;

/// Broad item category, as exposed by the item queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Weapon,
    Armor,
    Health,
    Ammo,
    Other,
}

/// Concrete pickup type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon(WeaponKind),
    Ammo(WeaponKind),
    HealthPack,
    HealthVial,
    ShieldPack,
    SuperShieldPack,
    Adrenaline,
    DoubleDamage,
}

impl ItemKind {
    pub fn category(self) -> ItemCategory {
        match self {
            ItemKind::Weapon(_) => ItemCategory::Weapon,
            ItemKind::Ammo(_) => ItemCategory::Ammo,
            ItemKind::HealthPack | ItemKind::HealthVial => ItemCategory::Health,
            ItemKind::ShieldPack | ItemKind::SuperShieldPack => ItemCategory::Armor,
            ItemKind::Adrenaline | ItemKind::DoubleDamage => ItemCategory::Other,
        }
    }

    /// Health restored when picked up, with the cap it restores up to
    pub fn health_gain(self) -> Option<(i32, i32)> {
        match self {
            ItemKind::HealthPack => Some((25, 100)),
            ItemKind::HealthVial => Some((5, 199)),
            _ => None,
        }
    }

    /// Armor granted when picked up, with the cap it grants up to
    pub fn armor_gain(self) -> Option<(i32, i32)> {
        match self {
            ItemKind::ShieldPack => Some((50, 150)),
            ItemKind::SuperShieldPack => Some((100, 150)),
            _ => None,
        }
    }
}

/// An item spawn point and whether it currently holds its item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemSpawn {
    pub kind: ItemKind,
    pub location: Location,
    pub spawned: bool,
}

impl ItemSpawn {
    pub fn new(kind: ItemKind, location: Location) -> Self {
        Self {
            kind,
            location,
            spawned: true,
        }
    }

    pub fn taken(mut self) -> Self {
        self.spawned = false;
        self
    }
}

/// Every item spawn on the map that currently holds an item of `category`
pub fn spawned_in(items: &[ItemSpawn], category: ItemCategory) -> impl Iterator<Item = &ItemSpawn> {
    items
        .iter()
        .filter(move |item| item.spawned && item.kind.category() == category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(ItemKind::Weapon(WeaponKind::Minigun).category(), ItemCategory::Weapon);
        assert_eq!(ItemKind::Ammo(WeaponKind::Minigun).category(), ItemCategory::Ammo);
        assert_eq!(ItemKind::SuperShieldPack.category(), ItemCategory::Armor);
        assert_eq!(ItemKind::HealthVial.category(), ItemCategory::Health);
        assert_eq!(ItemKind::DoubleDamage.category(), ItemCategory::Other);
    }

    #[test]
    fn test_spawned_in_skips_taken_items() {
        let items = vec![
            ItemSpawn::new(ItemKind::HealthPack, Location::ZERO),
            ItemSpawn::new(ItemKind::HealthVial, Location::X).taken(),
            ItemSpawn::new(ItemKind::ShieldPack, Location::Y),
        ];
        let health: Vec<_> = spawned_in(&items, ItemCategory::Health).collect();
        assert_eq!(health.len(), 1);
        assert_eq!(health[0].kind, ItemKind::HealthPack);
    }
}
