pub mod arithmetic;
pub mod config;
pub mod error;
pub mod types;

pub use config::AgentConfig;
pub use error::{Result, TacticsError};
pub use types::{AdversaryId, CardinalRays, Heading, Location, SimTime};
