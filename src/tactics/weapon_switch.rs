//! Picking the weapon to hold for this tick

use crate::knowledge::EnemyKnowledge;
use crate::tactics::constants::COMBO_MIN_SHOCK_AMMO;
use crate::tactics::context::{EngagementFlags, TickEnv};
use crate::weapons::{weapon_profit, ProfitContext, WeaponKind};
use crate::world::{BotCommand, Senses};

/// Highest-profit loaded weapon for the current target situation
///
/// Ties go to the weapon listed first; a weapon must score above zero to be
/// picked.
pub fn best_weapon(senses: &Senses, knowledge: &EnemyKnowledge, flags: &EngagementFlags) -> Option<WeaponKind> {
    let context = match senses.adversary {
        Some(adversary) => ProfitContext::Adversary {
            bucket: senses.bucket_to(adversary.location),
            height: senses.height_of(adversary.location),
            health_armor: knowledge.health_armor(),
        },
        None if flags.spam => ProfitContext::Spam,
        None => ProfitContext::NoTarget,
    };

    let mut best = None;
    let mut best_profit = 0;
    for (kind, ammo) in senses.inventory.iter() {
        if ammo.primary == 0 {
            continue;
        }
        let profit = weapon_profit(kind, context);
        if profit > best_profit {
            best_profit = profit;
            best = Some(kind);
        }
    }
    best
}

/// Switch weapons if something better than the current one is loaded
///
/// A fresh shock or sniper hit forces the shock rifle (to chain another
/// beam), and a pending combo wants it too when enough cores are left.
pub fn switch_to_best_weapon(env: &mut TickEnv<'_>, flags: &mut EngagementFlags) {
    let senses = env.senses;
    let inventory = &senses.inventory;

    let wanted = if flags.sniper_or_shock_hit && inventory.has_loaded(WeaponKind::ShockRifle) {
        flags.use_shock_rifle = true;
        Some(WeaponKind::ShockRifle)
    } else if flags.blow_combo
        && inventory.has(WeaponKind::ShockRifle)
        && inventory.ammo(WeaponKind::ShockRifle) >= COMBO_MIN_SHOCK_AMMO
    {
        Some(WeaponKind::ShockRifle)
    } else {
        best_weapon(senses, env.knowledge, flags)
    };

    if let Some(kind) = wanted {
        if inventory.current != Some(kind) {
            tracing::debug!(from = ?inventory.current, to = ?kind, "switching weapon");
            env.issue(BotCommand::SwitchWeapon(kind));
        }
    }

    flags.sniper_or_shock_hit = false;
}
