//! Outbound commands to the locomotion, path-following and weapon layers

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::types::{AdversaryId, Location};
use crate::weapons::firing::FireMode;
use crate::weapons::kinds::WeaponKind;

/// What a fire command is aimed at
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AimPoint {
    Location(Location),
    Adversary(AdversaryId),
}

/// A single command for the engine's actuators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BotCommand {
    /// Compute and follow a path
    FollowPath { from: Location, to: Location },
    /// Abort the path being followed
    StopPath,
    /// Override (or, with `None`, release) the path follower's facing
    SetFocus(Option<Location>),
    Crouch(bool),
    StrafeLeft { distance: f32, focus: Option<Location> },
    StrafeRight { distance: f32, focus: Option<Location> },
    StrafeTo { target: Location, focus: Location },
    /// Quick lateral jump; `x` forward/back, `y` right/left relative to facing
    Dodge { direction: Vec2 },
    MoveForward,
    StopMovement,
    TurnBy { degrees: f32 },
    TurnTo(Location),
    SwitchWeapon(WeaponKind),
    Fire { mode: FireMode, target: AimPoint },
    StopFiring,
}

impl BotCommand {
    /// Convenience: fire the primary mode at a point
    pub fn fire_primary_at(location: Location) -> Self {
        Self::Fire {
            mode: FireMode::Primary,
            target: AimPoint::Location(location),
        }
    }

    /// Convenience: dodge along `(forward, right)`
    pub fn dodge(forward: f32, right: f32) -> Self {
        Self::Dodge {
            direction: Vec2::new(forward, right),
        }
    }

    pub fn is_locomotion(&self) -> bool {
        matches!(
            self,
            BotCommand::StrafeLeft { .. }
                | BotCommand::StrafeRight { .. }
                | BotCommand::StrafeTo { .. }
                | BotCommand::Dodge { .. }
                | BotCommand::MoveForward
        )
    }
}

/// Completion signals from the path follower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathSignal {
    ComputationFailed,
    TargetReached,
    Stuck,
}

/// The engine side of the agent: commands go out, path and locomotion state
/// come back
pub trait Actuators {
    /// Issue a command; it takes effect immediately and never blocks
    fn issue(&mut self, command: BotCommand);

    /// A path request is in flight or being followed
    fn is_following_path(&self) -> bool;

    /// Locomotion other than path following is active
    fn is_running(&self) -> bool;
}
