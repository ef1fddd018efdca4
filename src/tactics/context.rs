//! Cross-tick state shared by every stance and override
//!
//! Policy objects live for the whole match and the active stance changes
//! from tick to tick, so anything one policy decides must be visible to the
//! next. All of it lives in one `TacticalContext` owned by the agent and
//! handed to whichever policy runs.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::core::config::AgentConfig;
use crate::core::types::{Location, SimTime};
use crate::knowledge::EnemyKnowledge;
use crate::overrides::SurvivalOverride;
use crate::tactics::memory::RecentDestinations;
use crate::world::{Actuators, ArenaMap, BotCommand, Senses};

/// A destination claimed by an override, tagged with its owner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverrideDestination {
    pub owner: SurvivalOverride,
    pub location: Location,
}

/// Where the agent is going and what it is looking at
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationIntent {
    /// Externally imposed goal; beats every stance and override while set
    pub forced_destination: Option<Location>,
    /// Forced destination we last requested a path to
    pub commanded_destination: Option<Location>,
    /// Goal chosen by the active stance
    pub stance_destination: Option<Location>,
    /// Goal chosen by the active override
    pub override_destination: Option<OverrideDestination>,
    /// Requested facing for this tick
    pub facing_target: Option<Location>,
    /// Facing currently applied to the path follower
    pub current_facing: Option<Location>,
    pub recent: RecentDestinations,
    pub crouched: bool,
    /// Set while a reactive turn (noise, pickup) holds the focus
    pub last_reactive_turn: Option<SimTime>,
}

/// One-shot engagement flags raised by events and the brain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementFlags {
    /// Our shock beam or sniper shot just hit the adversary
    pub sniper_or_shock_hit: bool,
    /// A combo bullseye is pending
    pub blow_combo: bool,
    /// The shock rifle was forced in after a hit
    pub use_shock_rifle: bool,
    /// A spam bullseye is pending
    pub spam: bool,
}

impl EngagementFlags {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TacticalContext {
    pub nav: NavigationIntent,
    pub engagement: EngagementFlags,
}

impl TacticalContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abandon every pending destination and transient intent
    ///
    /// Crouch is left alone; the caller decides whether to stand up.
    pub fn stop_execution(&mut self, actuators: &mut dyn Actuators) {
        actuators.issue(BotCommand::StopPath);
        self.nav.override_destination = None;
        self.nav.stance_destination = None;
        self.nav.commanded_destination = None;
        self.nav.current_facing = None;
        self.nav.last_reactive_turn = None;
        self.nav.recent.clear();
        self.engagement.clear();
    }
}

/// Borrowed view of the world for one policy call
pub struct TickEnv<'a> {
    pub senses: &'a Senses,
    pub map: &'a ArenaMap,
    pub knowledge: &'a EnemyKnowledge,
    pub actuators: &'a mut dyn Actuators,
    pub rng: &'a mut StdRng,
    pub config: &'a AgentConfig,
}

impl TickEnv<'_> {
    pub fn issue(&mut self, command: BotCommand) {
        tracing::trace!(?command, "issue");
        self.actuators.issue(command);
    }

    pub fn stop_path_if_following(&mut self) {
        if self.actuators.is_following_path() {
            self.issue(BotCommand::StopPath);
        }
    }

    /// Replace whatever path is running with a new one to `destination`
    pub fn follow_path_to(&mut self, destination: Location) {
        self.stop_path_if_following();
        let from = self.senses.location;
        self.issue(BotCommand::FollowPath {
            from,
            to: destination,
        });
    }

    pub fn set_crouch(&mut self, nav: &mut NavigationIntent, crouched: bool) {
        if nav.crouched != crouched {
            self.issue(BotCommand::Crouch(crouched));
            nav.crouched = crouched;
        }
    }
}
