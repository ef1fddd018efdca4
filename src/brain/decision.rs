//! Stance, override and range-profile decision tables

use crate::brain::arsenal::{compare_arsenals, ArsenalComparison};
use crate::knowledge::EnemyKnowledge;
use crate::overrides::SurvivalOverride;
use crate::tactics::CombatStance;
use crate::weapons::bands::{DistanceBucket, CLOSE_RANGE, FAR_RANGE, MEDIUM_RANGE};
use crate::world::Senses;

use crate::tactics::CombatStance::{Attack, Greedy, Hunt, Retreat};

/// Below this health survival overrides everything
pub const CRITICAL_HEALTH: i32 = 30;
/// Below this health the stance table uses its "hurt" rows
pub const HURT_HEALTH: i32 = 50;
/// Below this health every stance with overrides goes for health
pub const PICKUP_HEALTH_BELOW: i32 = 60;
/// Hunt tops health up until this value before looking for ammo
pub const HUNT_TOP_UP_HEALTH: i32 = 120;
/// Adversary health under which a hurt agent still considers fighting
pub const WEAK_ADVERSARY_WHEN_HURT: i32 = 100;
/// Adversary health under which a healthy agent fights on a weaker arsenal
pub const WEAK_ADVERSARY_WHEN_HEALTHY: i32 = 120;
/// Contact younger than this keeps the agent engaged instead of greedy
pub const FRESH_CONTACT_SECS: f64 = 7.0;
/// Attack accepts any arsenal band when choosing a range profile
pub const ATTACK_RISK: u8 = 0;
/// Band below which Hunt and Retreat look for weapons
pub const WEAPON_HUNGRY_BELOW: u8 = 3;

/// Everything the stance and override tables look at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Situation {
    pub health: i32,
    pub adversary_health: i32,
    pub arsenal: ArsenalComparison,
    /// Distance to the adversary while it is visible
    pub adversary_distance: Option<f32>,
    pub seconds_since_contact: f64,
}

impl Situation {
    pub fn assess(senses: &Senses, knowledge: &EnemyKnowledge) -> Self {
        Self {
            health: senses.health,
            adversary_health: knowledge.estimated_health(),
            arsenal: compare_arsenals(senses.inventory.loaded(), knowledge.arsenal()),
            adversary_distance: senses.adversary_distance(),
            seconds_since_contact: knowledge.seconds_since_contact(senses.time),
        }
    }

    pub fn adversary_visible(&self) -> bool {
        self.adversary_distance.is_some()
    }
}

/// Stance per visibility case for one row of the table
#[derive(Debug, Clone, Copy)]
struct StanceChoice {
    visible: CombatStance,
    hidden_fresh: CombatStance,
    hidden_stale: CombatStance,
}

impl StanceChoice {
    const fn new(visible: CombatStance, hidden_fresh: CombatStance, hidden_stale: CombatStance) -> Self {
        Self {
            visible,
            hidden_fresh,
            hidden_stale,
        }
    }
}

/// One row: the arsenal band needed to count as winning, and the choices
/// for a winning and a losing arsenal
struct StanceRow {
    winning_band: u8,
    winning: StanceChoice,
    losing: StanceChoice,
}

const HURT_WEAK_ADVERSARY: StanceRow = StanceRow {
    winning_band: 3,
    winning: StanceChoice::new(Attack, Hunt, Hunt),
    losing: StanceChoice::new(Retreat, Retreat, Retreat),
};

const HURT_STRONG_ADVERSARY: StanceRow = StanceRow {
    winning_band: 3,
    winning: StanceChoice::new(Retreat, Retreat, Greedy),
    losing: StanceChoice::new(Retreat, Retreat, Greedy),
};

const HEALTHY_WEAK_ADVERSARY: StanceRow = StanceRow {
    winning_band: 2,
    winning: StanceChoice::new(Attack, Hunt, Greedy),
    losing: StanceChoice::new(Retreat, Retreat, Greedy),
};

const HEALTHY_STRONG_ADVERSARY: StanceRow = StanceRow {
    winning_band: 3,
    winning: StanceChoice::new(Attack, Retreat, Greedy),
    losing: StanceChoice::new(Retreat, Retreat, Greedy),
};

/// Pick the primary stance for this tick
pub fn estimate_stance(situation: &Situation) -> CombatStance {
    let row = if situation.health < HURT_HEALTH {
        if situation.adversary_health < WEAK_ADVERSARY_WHEN_HURT {
            &HURT_WEAK_ADVERSARY
        } else {
            &HURT_STRONG_ADVERSARY
        }
    } else if situation.adversary_health < WEAK_ADVERSARY_WHEN_HEALTHY {
        &HEALTHY_WEAK_ADVERSARY
    } else {
        &HEALTHY_STRONG_ADVERSARY
    };

    let choice = if situation.arsenal.best() >= row.winning_band {
        row.winning
    } else {
        row.losing
    };

    if situation.adversary_visible() {
        choice.visible
    } else if situation.seconds_since_contact < FRESH_CONTACT_SECS {
        choice.hidden_fresh
    } else {
        choice.hidden_stale
    }
}

/// Pick the survival override for `stance`, if any
pub fn estimate_override(stance: CombatStance, situation: &Situation) -> Option<SurvivalOverride> {
    if situation.health < CRITICAL_HEALTH {
        return Some(SurvivalOverride::CriticalHealth);
    }

    let best = situation.arsenal.best();
    let weapon_hungry = best < WEAPON_HUNGRY_BELOW;
    let hurt = situation.health < PICKUP_HEALTH_BELOW;

    match stance {
        CombatStance::Attack => {
            if hurt {
                return Some(SurvivalOverride::PickupHealth);
            }
            match situation.adversary_distance {
                Some(distance) => estimate_profile(
                    distance,
                    best,
                    ATTACK_RISK,
                    situation.arsenal.best_offensive_range(),
                ),
                None => Some(SurvivalOverride::PickupHealth),
            }
        }
        CombatStance::Retreat => Some(if hurt || !weapon_hungry {
            SurvivalOverride::PickupHealth
        } else {
            SurvivalOverride::PickupWeapon
        }),
        CombatStance::Hunt => Some(if hurt {
            SurvivalOverride::PickupHealth
        } else if weapon_hungry {
            SurvivalOverride::PickupWeapon
        } else if situation.health < HUNT_TOP_UP_HEALTH {
            SurvivalOverride::PickupHealth
        } else {
            SurvivalOverride::PickupAmmo
        }),
        CombatStance::Greedy | CombatStance::Camp => None,
    }
}

/// Range correction toward `preferred`
///
/// Returns `None` when the arsenal band is below `risk` or the adversary is
/// already inside the preferred range.
pub fn estimate_profile(
    enemy_distance: f32,
    max_band: u8,
    risk: u8,
    preferred: DistanceBucket,
) -> Option<SurvivalOverride> {
    if max_band < risk {
        return None;
    }

    match preferred {
        DistanceBucket::Close => {
            (enemy_distance > CLOSE_RANGE / 2.0).then_some(SurvivalOverride::OffensiveProfile)
        }
        DistanceBucket::Medium => {
            if enemy_distance > FAR_RANGE {
                Some(SurvivalOverride::OffensiveProfile)
            } else if enemy_distance < MEDIUM_RANGE / 3.0 {
                Some(SurvivalOverride::DefensiveProfile)
            } else {
                None
            }
        }
        DistanceBucket::Far | DistanceBucket::Beyond => {
            (enemy_distance < FAR_RANGE / 2.0).then_some(SurvivalOverride::DefensiveProfile)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn situation(health: i32, adversary_health: i32, bands: [u8; 3]) -> Situation {
        Situation {
            health,
            adversary_health,
            arsenal: ArsenalComparison::from_bands(bands),
            adversary_distance: None,
            seconds_since_contact: f64::INFINITY,
        }
    }

    #[test]
    fn test_critical_health_wins_over_every_stance() {
        let s = situation(20, 100, [5, 5, 5]);
        for stance in CombatStance::ALL {
            assert_eq!(estimate_override(stance, &s), Some(SurvivalOverride::CriticalHealth));
        }
    }

    #[test]
    fn test_hunt_with_fresh_contact_and_better_arsenal() {
        let mut s = situation(80, 90, [3, 4, 3]);
        s.seconds_since_contact = 5.0;
        assert_eq!(estimate_stance(&s), CombatStance::Hunt);

        s.seconds_since_contact = 8.0;
        assert_eq!(estimate_stance(&s), CombatStance::Greedy);
    }

    #[test]
    fn test_visible_adversary_with_parity_means_attack() {
        let mut s = situation(100, 100, [3, 3, 3]);
        s.adversary_distance = Some(800.0);
        assert_eq!(estimate_stance(&s), CombatStance::Attack);
    }

    #[test]
    fn test_hurt_and_losing_means_retreat() {
        let mut s = situation(40, 80, [2, 1, 2]);
        s.adversary_distance = Some(800.0);
        assert_eq!(estimate_stance(&s), CombatStance::Retreat);

        // Even with stale contact a hurt agent facing a weak adversary retreats
        s.adversary_distance = None;
        assert_eq!(estimate_stance(&s), CombatStance::Retreat);
    }

    #[test]
    fn test_hurt_against_strong_adversary() {
        let mut s = situation(40, 150, [5, 5, 5]);
        s.adversary_distance = Some(500.0);
        assert_eq!(estimate_stance(&s), CombatStance::Retreat);

        s.adversary_distance = None;
        s.seconds_since_contact = 3.0;
        assert_eq!(estimate_stance(&s), CombatStance::Retreat);

        s.seconds_since_contact = 30.0;
        assert_eq!(estimate_stance(&s), CombatStance::Greedy);
    }

    #[test]
    fn test_healthy_against_strong_adversary_hidden_fresh_retreats() {
        let mut s = situation(100, 150, [4, 3, 3]);
        s.seconds_since_contact = 2.0;
        assert_eq!(estimate_stance(&s), CombatStance::Retreat);
    }

    #[test]
    fn test_attack_profile_uses_offensive_range() {
        let mut s = situation(60, 100, [3, 4, 4]);
        s.adversary_distance = Some(900.0);
        let expected = estimate_profile(900.0, 4, ATTACK_RISK, DistanceBucket::Medium);
        assert_eq!(estimate_override(CombatStance::Attack, &s), expected);
        assert_eq!(expected, None);

        s.adversary_distance = Some(300.0);
        assert_eq!(
            estimate_override(CombatStance::Attack, &s),
            Some(SurvivalOverride::DefensiveProfile)
        );
    }

    #[test]
    fn test_attack_without_adversary_picks_up_health() {
        let s = situation(100, 100, [3, 3, 3]);
        assert_eq!(estimate_override(CombatStance::Attack, &s), Some(SurvivalOverride::PickupHealth));
    }

    #[test]
    fn test_hunt_overrides() {
        assert_eq!(
            estimate_override(CombatStance::Hunt, &situation(50, 100, [5, 5, 5])),
            Some(SurvivalOverride::PickupHealth)
        );
        assert_eq!(
            estimate_override(CombatStance::Hunt, &situation(100, 100, [2, 2, 2])),
            Some(SurvivalOverride::PickupWeapon)
        );
        assert_eq!(
            estimate_override(CombatStance::Hunt, &situation(100, 100, [3, 3, 3])),
            Some(SurvivalOverride::PickupHealth)
        );
        assert_eq!(
            estimate_override(CombatStance::Hunt, &situation(150, 100, [3, 3, 3])),
            Some(SurvivalOverride::PickupAmmo)
        );
    }

    #[test]
    fn test_retreat_overrides() {
        assert_eq!(
            estimate_override(CombatStance::Retreat, &situation(100, 100, [1, 2, 2])),
            Some(SurvivalOverride::PickupWeapon)
        );
        assert_eq!(
            estimate_override(CombatStance::Retreat, &situation(100, 100, [3, 2, 2])),
            Some(SurvivalOverride::PickupHealth)
        );
    }

    #[test]
    fn test_greedy_and_camp_have_no_override() {
        let s = situation(100, 100, [3, 3, 3]);
        assert_eq!(estimate_override(CombatStance::Greedy, &s), None);
        assert_eq!(estimate_override(CombatStance::Camp, &s), None);
    }

    #[test]
    fn test_profile_boundaries() {
        let close = DistanceBucket::Close;
        assert_eq!(estimate_profile(351.0, 3, 0, close), Some(SurvivalOverride::OffensiveProfile));
        assert_eq!(estimate_profile(350.0, 3, 0, close), None);

        let medium = DistanceBucket::Medium;
        assert_eq!(estimate_profile(1501.0, 3, 0, medium), Some(SurvivalOverride::OffensiveProfile));
        assert_eq!(estimate_profile(399.0, 3, 0, medium), Some(SurvivalOverride::DefensiveProfile));
        assert_eq!(estimate_profile(900.0, 3, 0, medium), None);

        let far = DistanceBucket::Far;
        assert_eq!(estimate_profile(749.0, 3, 0, far), Some(SurvivalOverride::DefensiveProfile));
        assert_eq!(estimate_profile(751.0, 3, 0, far), None);

        // Risk above the best band disables the profile
        assert_eq!(estimate_profile(100.0, 2, 3, far), None);
    }
}
