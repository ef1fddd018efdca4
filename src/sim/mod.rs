//! Engine stand-ins: a recording actuator and a scripted demo arena

pub mod arena;
pub mod recorder;

pub use arena::{RunSummary, ScriptedArena, TickRecord};
pub use recorder::RecordingActuators;
