//! Weapon model: kinds, inventory, range bands, profit and firing tables

pub mod bands;
pub mod firing;
pub mod inventory;
pub mod kinds;
pub mod profit;

pub use bands::{DistanceBucket, HeightBand, CLOSE_RANGE, FAR_RANGE, MEDIUM_RANGE};
pub use firing::{adversary_fire_mode, spam_fire_mode, FireMode};
pub use inventory::{Ammo, Inventory};
pub use kinds::{WeaponKind, WeaponSet};
pub use profit::{weapon_profit, ProfitContext};
