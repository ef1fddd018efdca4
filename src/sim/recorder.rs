//! Actuators that record every command and track path/locomotion state

use serde::Serialize;

use crate::core::types::Location;
use crate::world::{Actuators, BotCommand};

/// Records issued commands; path and locomotion flags follow the commands
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordingActuators {
    commands: Vec<BotCommand>,
    path_target: Option<Location>,
    running: bool,
}

impl RecordingActuators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[BotCommand] {
        &self.commands
    }

    /// Hand over the recorded commands, keeping path and locomotion state
    pub fn drain(&mut self) -> Vec<BotCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn path_target(&self) -> Option<Location> {
        self.path_target
    }

    /// The engine finished (or gave up on) the current path
    pub fn finish_path(&mut self) {
        self.path_target = None;
    }

    pub fn count(&self, pred: impl Fn(&BotCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

impl Actuators for RecordingActuators {
    fn issue(&mut self, command: BotCommand) {
        match &command {
            BotCommand::FollowPath { to, .. } => {
                self.path_target = Some(*to);
                self.running = false;
            }
            BotCommand::StopPath => self.path_target = None,
            BotCommand::StopMovement => self.running = false,
            other if other.is_locomotion() => self.running = true,
            _ => {}
        }
        self.commands.push(command);
    }

    fn is_following_path(&self) -> bool {
        self.path_target.is_some()
    }

    fn is_running(&self) -> bool {
        self.running
    }
}
