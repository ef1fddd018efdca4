//! Forced destinations: items worth timing regardless of stance

use ordered_float::OrderedFloat;

use crate::core::types::Location;
use crate::weapons::inventory::Inventory;
use crate::weapons::kinds::WeaponKind;
use crate::world::{spawned_in, ItemCategory, ItemKind, ItemSpawn, Senses};

/// Priority that justifies leaving a fight for an item
pub const TOP_PRIORITY: u8 = 100;

/// How badly we want `item` given what we already carry
///
/// `None` means we do not want it at all.
pub fn item_priority(item: ItemKind, inventory: &Inventory) -> Option<u8> {
    match item {
        ItemKind::SuperShieldPack => Some(TOP_PRIORITY),
        ItemKind::ShieldPack => Some(90),
        ItemKind::Weapon(kind @ (WeaponKind::SniperRifle | WeaponKind::LightningGun | WeaponKind::ShockRifle)) => {
            (!inventory.has_loaded(kind)).then_some(90)
        }
        ItemKind::Weapon(WeaponKind::FlakCannon | WeaponKind::RocketLauncher) => {
            let has_splash =
                inventory.has(WeaponKind::FlakCannon) || inventory.has(WeaponKind::RocketLauncher);
            (!has_splash).then_some(85)
        }
        ItemKind::Weapon(WeaponKind::Minigun) => (!inventory.has(WeaponKind::Minigun)).then_some(80),
        _ => None,
    }
}

/// Destination that overrides every stance, if any
///
/// Spawned armor comes first; with the adversary in sight only a
/// top-priority item is worth the detour. Without an adversary and without
/// armor to take, the most wanted spawned weapon is chosen, the closest one
/// on ties.
pub fn estimate_destination(senses: &Senses) -> Option<Location> {
    let adversary_visible = senses.adversary.is_some();
    let mut best_priority = 0;
    let mut destination = None;

    for item in spawned_in(&senses.items, ItemCategory::Armor) {
        let Some(priority) = item_priority(item.kind, &senses.inventory) else {
            continue;
        };
        if priority > best_priority {
            best_priority = priority;
            if !adversary_visible || priority == TOP_PRIORITY {
                destination = Some(item.location);
            }
        }
    }

    if adversary_visible || destination.is_some() {
        return destination;
    }

    best_weapon_item(senses).map(|item| item.location)
}

/// Most wanted spawned weapon, nearest first on equal priority
pub fn best_weapon_item(senses: &Senses) -> Option<&ItemSpawn> {
    spawned_in(&senses.items, ItemCategory::Weapon)
        .filter_map(|item| item_priority(item.kind, &senses.inventory).map(|p| (p, item)))
        .max_by_key(|(priority, item)| {
            (*priority, std::cmp::Reverse(OrderedFloat(senses.distance_to(item.location))))
        })
        .map(|(_, item)| item)
}
