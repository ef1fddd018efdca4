//! Firing-mode tables per weapon
//!
//! Pure lookups: the engage step asks which mode to use and turns the
//! answer into an actuator command.

use serde::{Deserialize, Serialize};

use crate::weapons::bands::{DistanceBucket, HeightBand, MEDIUM_RANGE};
use crate::weapons::kinds::WeaponKind;

/// How to pull the trigger this tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FireMode {
    Primary,
    Secondary,
    /// Hold secondary fire for the given number of seconds, then release
    Charged { seconds: f32 },
    /// This weapon is not worth firing at the target
    Hold,
}

/// Firing mode against a visible adversary
pub fn adversary_fire_mode(
    kind: WeaponKind,
    distance: f32,
    height: HeightBand,
    secondary_ammo: u32,
) -> FireMode {
    let bucket = DistanceBucket::classify(distance);

    match kind {
        WeaponKind::ShieldGun => FireMode::Primary,
        WeaponKind::AssaultRifle => {
            if secondary_ammo > 0 {
                FireMode::Primary
            } else if bucket == DistanceBucket::Close {
                FireMode::Charged { seconds: 2.0 }
            } else {
                FireMode::Charged { seconds: 3.0 }
            }
        }
        WeaponKind::BioRifle => match bucket {
            DistanceBucket::Close => FireMode::Primary,
            _ => FireMode::Charged { seconds: 3.0 },
        },
        WeaponKind::LinkGun => match bucket {
            DistanceBucket::Close | DistanceBucket::Medium => FireMode::Secondary,
            _ => FireMode::Primary,
        },
        WeaponKind::Minigun => match bucket {
            DistanceBucket::Beyond => FireMode::Secondary,
            _ => FireMode::Primary,
        },
        WeaponKind::FlakCannon => match (bucket, height) {
            (DistanceBucket::Close, _) => FireMode::Primary,
            (DistanceBucket::Medium, HeightBand::Level) => {
                if distance < MEDIUM_RANGE / 2.0 {
                    FireMode::Primary
                } else {
                    FireMode::Secondary
                }
            }
            (DistanceBucket::Medium, HeightBand::Below) => FireMode::Primary,
            (DistanceBucket::Medium, HeightBand::Above) => FireMode::Secondary,
            (DistanceBucket::Far, HeightBand::Above) => FireMode::Secondary,
            (DistanceBucket::Far, _) => FireMode::Primary,
            (DistanceBucket::Beyond, _) => FireMode::Primary,
        },
        WeaponKind::RocketLauncher
        | WeaponKind::ShockRifle
        | WeaponKind::SniperRifle
        | WeaponKind::LightningGun => FireMode::Primary,
    }
}

/// Firing mode for area denial at a remembered location
pub fn spam_fire_mode(kind: WeaponKind, distance: f32, height: HeightBand) -> FireMode {
    let bucket = DistanceBucket::classify(distance);

    match kind {
        WeaponKind::AssaultRifle => match bucket {
            DistanceBucket::Close => FireMode::Charged { seconds: 1.0 },
            DistanceBucket::Medium => FireMode::Charged { seconds: 2.0 },
            _ => FireMode::Charged { seconds: 3.0 },
        },
        WeaponKind::BioRifle => match bucket {
            DistanceBucket::Close => FireMode::Charged { seconds: 1.5 },
            _ => FireMode::Charged { seconds: 3.0 },
        },
        WeaponKind::LinkGun | WeaponKind::RocketLauncher => FireMode::Primary,
        WeaponKind::FlakCannon => match (bucket, height) {
            (DistanceBucket::Medium, HeightBand::Level) => FireMode::Primary,
            (DistanceBucket::Medium, _) => FireMode::Secondary,
            (DistanceBucket::Far, HeightBand::Above) => FireMode::Secondary,
            _ => FireMode::Primary,
        },
        WeaponKind::ShockRifle => FireMode::Secondary,
        WeaponKind::ShieldGun
        | WeaponKind::Minigun
        | WeaponKind::SniperRifle
        | WeaponKind::LightningGun => FireMode::Hold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minigun_switches_to_secondary_far_away() {
        assert_eq!(
            adversary_fire_mode(WeaponKind::Minigun, 1600.0, HeightBand::Level, 0),
            FireMode::Secondary
        );
        assert_eq!(
            adversary_fire_mode(WeaponKind::Minigun, 1499.0, HeightBand::Level, 0),
            FireMode::Primary
        );
    }

    #[test]
    fn test_flak_medium_range_depends_on_height_and_distance() {
        assert_eq!(
            adversary_fire_mode(WeaponKind::FlakCannon, 500.0, HeightBand::Above, 0),
            FireMode::Primary
        );
        assert_eq!(
            adversary_fire_mode(WeaponKind::FlakCannon, 800.0, HeightBand::Level, 0),
            FireMode::Secondary
        );
        assert_eq!(
            adversary_fire_mode(WeaponKind::FlakCannon, 900.0, HeightBand::Below, 0),
            FireMode::Primary
        );
        assert_eq!(
            adversary_fire_mode(WeaponKind::FlakCannon, 1300.0, HeightBand::Above, 0),
            FireMode::Secondary
        );
        assert_eq!(
            adversary_fire_mode(WeaponKind::FlakCannon, 1300.0, HeightBand::Below, 0),
            FireMode::Primary
        );
    }

    #[test]
    fn test_assault_rifle_charges_without_grenades() {
        assert_eq!(
            adversary_fire_mode(WeaponKind::AssaultRifle, 300.0, HeightBand::Level, 0),
            FireMode::Charged { seconds: 2.0 }
        );
        assert_eq!(
            adversary_fire_mode(WeaponKind::AssaultRifle, 900.0, HeightBand::Level, 0),
            FireMode::Charged { seconds: 3.0 }
        );
        assert_eq!(
            adversary_fire_mode(WeaponKind::AssaultRifle, 900.0, HeightBand::Level, 3),
            FireMode::Primary
        );
    }

    #[test]
    fn test_link_gun_beams_up_to_medium() {
        assert_eq!(
            adversary_fire_mode(WeaponKind::LinkGun, 1100.0, HeightBand::Level, 0),
            FireMode::Secondary
        );
        assert_eq!(
            adversary_fire_mode(WeaponKind::LinkGun, 1300.0, HeightBand::Level, 0),
            FireMode::Primary
        );
    }

    #[test]
    fn test_shock_always_primary_on_adversary() {
        for distance in [100.0, 900.0, 1300.0, 2000.0] {
            for height in [HeightBand::Below, HeightBand::Level, HeightBand::Above] {
                assert_eq!(
                    adversary_fire_mode(WeaponKind::ShockRifle, distance, height, 0),
                    FireMode::Primary
                );
            }
        }
    }

    #[test]
    fn test_spam_modes() {
        assert_eq!(
            spam_fire_mode(WeaponKind::AssaultRifle, 1000.0, HeightBand::Level),
            FireMode::Charged { seconds: 2.0 }
        );
        assert_eq!(
            spam_fire_mode(WeaponKind::BioRifle, 300.0, HeightBand::Level),
            FireMode::Charged { seconds: 1.5 }
        );
        assert_eq!(spam_fire_mode(WeaponKind::ShockRifle, 300.0, HeightBand::Level), FireMode::Secondary);
        assert_eq!(spam_fire_mode(WeaponKind::FlakCannon, 900.0, HeightBand::Above), FireMode::Secondary);
        assert_eq!(spam_fire_mode(WeaponKind::FlakCannon, 1300.0, HeightBand::Below), FireMode::Primary);
        assert_eq!(spam_fire_mode(WeaponKind::Minigun, 300.0, HeightBand::Level), FireMode::Hold);
    }
}
