//! The agent's view of the arena and its command surface

pub mod commands;
pub mod events;
pub mod items;
pub mod map;
pub mod senses;

pub use commands::{Actuators, AimPoint, BotCommand, PathSignal};
pub use events::HitCause;
pub use items::{spawned_in, ItemCategory, ItemKind, ItemSpawn};
pub use map::ArenaMap;
pub use senses::{Adversary, ProjectileKind, ProjectileSighting, Senses};
