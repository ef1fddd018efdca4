//! Weapon kinds and a compact bitset over them

use std::fmt;

use serde::{Deserialize, Serialize};

/// Every weapon the arena can hand out
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    ShieldGun,
    AssaultRifle,
    BioRifle,
    LinkGun,
    Minigun,
    FlakCannon,
    RocketLauncher,
    ShockRifle,
    SniperRifle,
    LightningGun,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 10] = [
        WeaponKind::ShieldGun,
        WeaponKind::AssaultRifle,
        WeaponKind::BioRifle,
        WeaponKind::LinkGun,
        WeaponKind::Minigun,
        WeaponKind::FlakCannon,
        WeaponKind::RocketLauncher,
        WeaponKind::ShockRifle,
        WeaponKind::SniperRifle,
        WeaponKind::LightningGun,
    ];

    /// Weapons every player spawns with
    pub const SPAWN_LOADOUT: [WeaponKind; 2] = [WeaponKind::ShieldGun, WeaponKind::AssaultRifle];

    /// Long-range hit-scan rifles (sniper and lightning behave the same here)
    pub fn is_hitscan_rifle(self) -> bool {
        matches!(self, WeaponKind::SniperRifle | WeaponKind::LightningGun)
    }

    /// Splash weapons that dominate close quarters
    pub fn is_splash(self) -> bool {
        matches!(self, WeaponKind::FlakCannon | WeaponKind::RocketLauncher)
    }

    /// Sustained-fire weapons
    pub fn is_sustained(self) -> bool {
        matches!(self, WeaponKind::LinkGun | WeaponKind::Minigun)
    }

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

impl fmt::Display for WeaponKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WeaponKind::ShieldGun => "shield gun",
            WeaponKind::AssaultRifle => "assault rifle",
            WeaponKind::BioRifle => "bio rifle",
            WeaponKind::LinkGun => "link gun",
            WeaponKind::Minigun => "minigun",
            WeaponKind::FlakCannon => "flak cannon",
            WeaponKind::RocketLauncher => "rocket launcher",
            WeaponKind::ShockRifle => "shock rifle",
            WeaponKind::SniperRifle => "sniper rifle",
            WeaponKind::LightningGun => "lightning gun",
        };
        f.write_str(name)
    }
}

/// Set of weapon kinds, used for both our loaded weapons and the estimated
/// enemy arsenal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeaponSet(u16);

impl WeaponSet {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn spawn_loadout() -> Self {
        WeaponKind::SPAWN_LOADOUT.into_iter().collect()
    }

    pub fn insert(&mut self, kind: WeaponKind) {
        self.0 |= kind.bit();
    }

    pub fn remove(&mut self, kind: WeaponKind) {
        self.0 &= !kind.bit();
    }

    pub fn with(mut self, kind: WeaponKind) -> Self {
        self.insert(kind);
        self
    }

    pub fn contains(&self, kind: WeaponKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// True when any kind matching the predicate is present
    pub fn any(&self, pred: impl Fn(WeaponKind) -> bool) -> bool {
        self.iter().any(pred)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = WeaponKind> + '_ {
        WeaponKind::ALL.into_iter().filter(|k| self.contains(*k))
    }
}

impl FromIterator<WeaponKind> for WeaponSet {
    fn from_iter<T: IntoIterator<Item = WeaponKind>>(iter: T) -> Self {
        let mut set = WeaponSet::empty();
        for kind in iter {
            set.insert(kind);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weapon_set_insert_remove() {
        let mut set = WeaponSet::empty();
        assert!(set.is_empty());
        set.insert(WeaponKind::ShockRifle);
        set.insert(WeaponKind::Minigun);
        assert!(set.contains(WeaponKind::ShockRifle));
        assert!(!set.contains(WeaponKind::FlakCannon));
        assert_eq!(set.len(), 2);

        set.remove(WeaponKind::ShockRifle);
        assert!(!set.contains(WeaponKind::ShockRifle));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_spawn_loadout() {
        let set = WeaponSet::spawn_loadout();
        assert!(set.contains(WeaponKind::ShieldGun));
        assert!(set.contains(WeaponKind::AssaultRifle));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_iter_follows_declaration_order() {
        let set: WeaponSet = [WeaponKind::LightningGun, WeaponKind::BioRifle]
            .into_iter()
            .collect();
        let kinds: Vec<_> = set.iter().collect();
        assert_eq!(kinds, vec![WeaponKind::BioRifle, WeaponKind::LightningGun]);
    }

    #[test]
    fn test_categories() {
        assert!(WeaponKind::LightningGun.is_hitscan_rifle());
        assert!(WeaponKind::FlakCannon.is_splash());
        assert!(WeaponKind::LinkGun.is_sustained());
        assert!(!WeaponKind::ShockRifle.is_hitscan_rifle());
    }
}
