//! Turning the current bullseye or adversary into a trigger command

use crate::brain::{Bullseye, BullseyeKind};
use crate::tactics::context::{EngagementFlags, TickEnv};
use crate::weapons::{adversary_fire_mode, spam_fire_mode, FireMode};
use crate::world::{AimPoint, BotCommand, Senses};

/// Trigger command for this tick
///
/// A combo always gets a primary shot at the projectile. A spam bullseye is
/// fired at with the weapon's spam mode while nobody is in sight. Otherwise
/// the visible adversary is shot at, and with nothing to shoot the trigger
/// is released.
pub fn firing_command(bullseye: Option<Bullseye>, senses: &Senses) -> BotCommand {
    let Some(weapon) = senses.inventory.current else {
        return BotCommand::StopFiring;
    };

    match bullseye {
        Some(Bullseye { location, kind: BullseyeKind::Combo }) => {
            return BotCommand::fire_primary_at(location);
        }
        Some(Bullseye { location, kind: BullseyeKind::Spam }) if senses.adversary.is_none() => {
            let mode = spam_fire_mode(weapon, senses.distance_to(location), senses.height_of(location));
            return fire(mode, AimPoint::Location(location));
        }
        _ => {}
    }

    match senses.adversary {
        Some(adversary) => {
            let mode = adversary_fire_mode(
                weapon,
                senses.distance_to(adversary.location),
                senses.height_of(adversary.location),
                senses.inventory.secondary_ammo(weapon),
            );
            fire(mode, AimPoint::Adversary(adversary.id))
        }
        None => BotCommand::StopFiring,
    }
}

fn fire(mode: FireMode, target: AimPoint) -> BotCommand {
    match mode {
        FireMode::Hold => BotCommand::StopFiring,
        mode => BotCommand::Fire { mode, target },
    }
}

/// Issue this tick's trigger command and drop the one-shot targeting flags
pub fn engage(bullseye: Option<Bullseye>, env: &mut TickEnv<'_>, flags: &mut EngagementFlags) {
    let command = firing_command(bullseye, env.senses);
    env.issue(command);

    flags.blow_combo = false;
    flags.spam = false;
    flags.use_shock_rifle = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{AdversaryId, Location};
    use crate::weapons::{Ammo, WeaponKind};
    use crate::world::Adversary;

    fn senses_holding(kind: WeaponKind) -> Senses {
        let mut senses = Senses::new(0.0, 100, Location::ZERO);
        senses.inventory.add(kind, Ammo::new(10, 0));
        senses.inventory.current = Some(kind);
        senses
    }

    fn adversary_at(x: f32) -> Adversary {
        Adversary {
            id: AdversaryId(3),
            location: Location::new(x, 0.0, 0.0),
            weapon: None,
        }
    }

    #[test]
    fn test_combo_beats_adversary() {
        let mut senses = senses_holding(WeaponKind::ShockRifle);
        senses.adversary = Some(adversary_at(900.0));
        let core = Location::new(400.0, 0.0, 0.0);

        let command = firing_command(
            Some(Bullseye {
                location: core,
                kind: BullseyeKind::Combo,
            }),
            &senses,
        );
        assert_eq!(command, BotCommand::fire_primary_at(core));
    }

    #[test]
    fn test_spam_with_rocket() {
        let senses = senses_holding(WeaponKind::RocketLauncher);
        let spot = Location::new(800.0, 0.0, 0.0);

        let command = firing_command(
            Some(Bullseye {
                location: spot,
                kind: BullseyeKind::Spam,
            }),
            &senses,
        );
        assert_eq!(command, BotCommand::fire_primary_at(spot));
    }

    #[test]
    fn test_sniper_holds_spam() {
        let senses = senses_holding(WeaponKind::SniperRifle);
        let command = firing_command(
            Some(Bullseye {
                location: Location::new(800.0, 0.0, 0.0),
                kind: BullseyeKind::Spam,
            }),
            &senses,
        );
        assert_eq!(command, BotCommand::StopFiring);
    }

    #[test]
    fn test_adversary_targeted_by_id() {
        let mut senses = senses_holding(WeaponKind::RocketLauncher);
        senses.adversary = Some(adversary_at(900.0));

        let command = firing_command(None, &senses);
        assert_eq!(
            command,
            BotCommand::Fire {
                mode: FireMode::Primary,
                target: AimPoint::Adversary(AdversaryId(3)),
            }
        );
    }

    #[test]
    fn test_nothing_to_shoot_stops() {
        let senses = senses_holding(WeaponKind::RocketLauncher);
        assert_eq!(firing_command(None, &senses), BotCommand::StopFiring);
    }
}
