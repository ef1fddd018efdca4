//! Weapon profit table
//!
//! Maps (weapon, distance bucket, relative height, target context) to a
//! 0-100 score. Every constant lives in the static tables below so the
//! numbers can be checked one by one against the tuning sheet.

use crate::weapons::bands::{DistanceBucket, HeightBand};
use crate::weapons::kinds::WeaponKind;

/// What the weapon would be fired at
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProfitContext {
    /// A visible adversary
    Adversary {
        bucket: DistanceBucket,
        height: HeightBand,
        /// Estimated health plus armor of the adversary
        health_armor: i32,
    },
    /// Area denial at a remembered location
    Spam,
    /// Nothing to shoot at; pick what we'd like to be holding
    NoTarget,
}

/// Profit rows indexed by bucket (close, medium, far, beyond), each row
/// indexed by height (below, level, above)
type ProfitGrid = [[u8; 3]; 4];

fn grid_for(kind: WeaponKind) -> &'static ProfitGrid {
    match kind {
        WeaponKind::ShieldGun => &[[1, 5, 1], [1, 0, 1], [1, 0, 1], [1, 1, 1]],
        WeaponKind::AssaultRifle => &[[10, 10, 10], [10, 10, 20], [20, 10, 30], [30, 10, 30]],
        WeaponKind::BioRifle => &[[50, 20, 50], [40, 30, 30], [10, 15, 10], [0, 0, 0]],
        WeaponKind::LinkGun => &[[40, 80, 40], [20, 50, 50], [40, 20, 50], [40, 20, 50]],
        WeaponKind::Minigun => &[[60, 40, 20], [60, 70, 60], [60, 80, 60], [70, 50, 70]],
        WeaponKind::FlakCannon => &[[90, 95, 100], [80, 80, 90], [50, 40, 70], [60, 20, 60]],
        WeaponKind::RocketLauncher => &[[100, 95, 60], [90, 90, 40], [70, 30, 40], [50, 10, 40]],
        WeaponKind::ShockRifle => &[[80, 30, 90], [97, 97, 100], [90, 80, 90], [80, 80, 80]],
        WeaponKind::SniperRifle | WeaponKind::LightningGun => {
            &[[70, 15, 70], [70, 40, 70], [80, 90, 80], [100, 100, 100]]
        }
    }
}

/// Raised profit when a sustained-fire weapon can finish a weakened target
struct FinishingBoost {
    weapon: WeaponKind,
    bucket: DistanceBucket,
    height: HeightBand,
    /// Applies when the adversary's health plus armor is strictly below this
    below: i32,
    profit: u8,
}

const FINISHING_BOOSTS: &[FinishingBoost] = &[
    FinishingBoost { weapon: WeaponKind::LinkGun, bucket: DistanceBucket::Close, height: HeightBand::Level, below: 70, profit: 100 },
    FinishingBoost { weapon: WeaponKind::LinkGun, bucket: DistanceBucket::Medium, height: HeightBand::Level, below: 100, profit: 90 },
    FinishingBoost { weapon: WeaponKind::Minigun, bucket: DistanceBucket::Close, height: HeightBand::Level, below: 100, profit: 97 },
    FinishingBoost { weapon: WeaponKind::Minigun, bucket: DistanceBucket::Medium, height: HeightBand::Level, below: 70, profit: 100 },
    FinishingBoost { weapon: WeaponKind::Minigun, bucket: DistanceBucket::Medium, height: HeightBand::Below, below: 70, profit: 100 },
    FinishingBoost { weapon: WeaponKind::Minigun, bucket: DistanceBucket::Far, height: HeightBand::Below, below: 70, profit: 100 },
    FinishingBoost { weapon: WeaponKind::Minigun, bucket: DistanceBucket::Far, height: HeightBand::Level, below: 70, profit: 100 },
    FinishingBoost { weapon: WeaponKind::Minigun, bucket: DistanceBucket::Far, height: HeightBand::Above, below: 70, profit: 100 },
];

fn spam_profit(kind: WeaponKind) -> u8 {
    match kind {
        WeaponKind::ShieldGun => 1,
        WeaponKind::AssaultRifle => 50,
        WeaponKind::BioRifle => 40,
        WeaponKind::LinkGun => 60,
        WeaponKind::Minigun => 5,
        WeaponKind::FlakCannon => 70,
        WeaponKind::RocketLauncher => 90,
        WeaponKind::ShockRifle => 80,
        WeaponKind::SniperRifle | WeaponKind::LightningGun => 10,
    }
}

fn idle_profit(kind: WeaponKind) -> u8 {
    match kind {
        WeaponKind::ShieldGun => 1,
        WeaponKind::AssaultRifle => 10,
        WeaponKind::BioRifle => 20,
        WeaponKind::LinkGun => 50,
        WeaponKind::Minigun => 40,
        WeaponKind::FlakCannon => 80,
        WeaponKind::RocketLauncher => 70,
        WeaponKind::ShockRifle => 90,
        WeaponKind::SniperRifle | WeaponKind::LightningGun => 100,
    }
}

/// Score a weapon from 0 to 100 for the given context
pub fn weapon_profit(kind: WeaponKind, context: ProfitContext) -> u8 {
    match context {
        ProfitContext::Adversary { bucket, height, health_armor } => {
            let boost = FINISHING_BOOSTS.iter().find(|b| {
                b.weapon == kind && b.bucket == bucket && b.height == height && health_armor < b.below
            });
            match boost {
                Some(boost) => boost.profit,
                None => grid_for(kind)[bucket.index()][height.index()],
            }
        }
        ProfitContext::Spam => spam_profit(kind),
        ProfitContext::NoTarget => idle_profit(kind),
    }
}
