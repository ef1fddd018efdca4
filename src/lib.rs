//! Arena Tactics - tactical decision engine for an arena combat agent
//!
//! Each tick the brain scores the situation into a stance, an optional
//! survival override, a forced destination and a bullseye; the stance layer
//! turns that into actuator commands.

pub mod agent;
pub mod brain;
pub mod core;
pub mod knowledge;
pub mod overrides;
pub mod sim;
pub mod tactics;
pub mod weapons;
pub mod world;

pub use agent::Agent;
