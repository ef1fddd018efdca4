//! The agent: one decision cycle per tick plus the event handlers in between
//!
//! A tick runs brain, weapon switch, movement and engage in that order.
//! Events mutate knowledge and the shared navigation state; they never run
//! concurrently with a tick.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::brain::{Brain, Decision};
use crate::core::config::AgentConfig;
use crate::core::error::Result;
use crate::core::types::{Location, Rotation, SimTime};
use crate::knowledge::EnemyKnowledge;
use crate::overrides::{OverrideSet, SurvivalOverride};
use crate::tactics::{execute_movement, reactive, CombatStance, StanceSet, TacticalContext, TickEnv};
use crate::world::{
    Actuators, Adversary, ArenaMap, BotCommand, HitCause, ItemKind, PathSignal, ProjectileSighting, Senses,
};

/// Stance in effect before the first decision
pub const INITIAL_STANCE: CombatStance = CombatStance::Hunt;

pub struct Agent {
    config: AgentConfig,
    map: ArenaMap,
    brain: Brain,
    knowledge: EnemyKnowledge,
    ctx: TacticalContext,
    stances: StanceSet,
    overrides: OverrideSet,
    rng: StdRng,
    /// Latest snapshot, read by the event handlers
    senses: Senses,
    stance: CombatStance,
    survival: Option<SurvivalOverride>,
    /// We killed the adversary; its knowledge resets when it shows up again
    enemy_killed: bool,
}

impl Agent {
    pub fn new(config: AgentConfig, map: ArenaMap) -> Result<Self> {
        Self::with_policies(config, map, StanceSet::default(), OverrideSet::default())
    }

    pub fn with_policies(
        config: AgentConfig,
        map: ArenaMap,
        stances: StanceSet,
        overrides: OverrideSet,
    ) -> Result<Self> {
        config.validate()?;
        tracing::info!(name = %config.name, seed = config.seed, "agent ready");

        Ok(Self {
            rng: StdRng::seed_from_u64(config.seed),
            config,
            map,
            brain: Brain::new(),
            knowledge: EnemyKnowledge::new(),
            ctx: TacticalContext::new(),
            stances,
            overrides,
            senses: Senses::new(0.0, 100, Location::ZERO),
            stance: INITIAL_STANCE,
            survival: None,
            enemy_killed: false,
        })
    }

    pub fn stance(&self) -> CombatStance {
        self.stance
    }

    pub fn survival(&self) -> Option<SurvivalOverride> {
        self.survival
    }

    pub fn context(&self) -> &TacticalContext {
        &self.ctx
    }

    pub fn knowledge(&self) -> &EnemyKnowledge {
        &self.knowledge
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Run one decision cycle on a fresh snapshot
    pub fn tick(&mut self, senses: Senses, actuators: &mut dyn Actuators) -> Decision {
        self.senses = senses;
        if let Some(adversary) = self.senses.adversary {
            self.track_adversary(adversary);
        }

        let decision = self.brain.decide(
            &self.senses,
            &self.knowledge,
            &mut self.ctx.engagement,
            self.config.spam_window_secs,
        );

        if decision.stance != self.stance {
            tracing::debug!(from = %self.stance, to = %decision.stance, "stance changed");
            self.stance = decision.stance;
        }
        if decision.survival != self.survival {
            tracing::debug!(from = ?self.survival, to = ?decision.survival, "override changed");
            self.survival = decision.survival;
        }
        if decision.destination != self.ctx.nav.forced_destination {
            tracing::debug!(destination = ?decision.destination, "forced destination changed");
        }

        self.ctx.nav.forced_destination = decision.destination;
        self.ctx.nav.facing_target = self.senses.adversary.map(|a| a.location);

        let mut env = TickEnv {
            senses: &self.senses,
            map: &self.map,
            knowledge: &self.knowledge,
            actuators,
            rng: &mut self.rng,
            config: &self.config,
        };

        let stance = self.stances.get_mut(decision.stance);
        stance.switch_to_best_weapon(&mut env, &mut self.ctx);

        let survival = match decision.survival {
            Some(kind) => Some(self.overrides.get_mut(kind)),
            None => None,
        };
        execute_movement(stance, survival, &mut env, &mut self.ctx);

        stance.engage(decision.bullseye, &mut env, &mut self.ctx);

        decision
    }

    fn track_adversary(&mut self, adversary: Adversary) {
        if self.enemy_killed {
            self.knowledge.reset();
            self.enemy_killed = false;
        }
        self.knowledge.update_location(adversary.location, self.senses.time);
        if let Some(weapon) = adversary.weapon {
            self.knowledge.observe_weapon(weapon);
        }
    }

    /// The adversary appeared or moved in sight
    pub fn adversary_sighted(&mut self, adversary: Adversary, time: SimTime) {
        self.senses.adversary = Some(adversary);
        self.senses.time = time;
        self.track_adversary(adversary);
        self.brain.forget_spam();
    }

    /// The adversary left sight; its last position becomes a spam point
    pub fn adversary_lost(&mut self, time: SimTime) {
        self.senses.adversary = None;
        self.ctx.engagement.sniper_or_shock_hit = false;
        if let Some(location) = self.knowledge.last_known_location() {
            tracing::debug!(?location, "adversary lost");
            self.brain.remember_spam(location, time);
        }
    }

    pub fn projectile_sighted(&mut self, projectile: &ProjectileSighting, time: SimTime) {
        self.brain.register_incoming_projectile(
            projectile,
            self.senses.adversary.as_ref(),
            time,
            self.config.spam_window_secs,
        );
    }

    /// A noise was heard from `rotation`
    pub fn heard_noise(&mut self, rotation: Rotation, time: SimTime, actuators: &mut dyn Actuators) {
        if self.senses.adversary.is_some() {
            return;
        }
        reactive::face_noise(
            actuators,
            &mut self.ctx.nav,
            self.senses.location,
            rotation,
            self.config.noise_focus_distance,
            time,
        );
    }

    /// Somebody picked up `item` at `location`, heard from `rotation`
    ///
    /// Pickups close to us are our own and are ignored.
    pub fn heard_pickup(
        &mut self,
        item: ItemKind,
        location: Location,
        rotation: Rotation,
        time: SimTime,
        actuators: &mut dyn Actuators,
    ) {
        if self.senses.distance_to(location) <= self.config.pickup_noise_min_distance {
            return;
        }
        self.knowledge.hear_pickup(item, location, time);
        tracing::trace!(?item, ?location, "adversary pickup heard");
        self.heard_noise(rotation, time, actuators);
    }

    /// We took damage; `direct` when it came from a weapon aimed at us
    pub fn damaged(&mut self, direct: bool, actuators: &mut dyn Actuators) {
        if direct && self.senses.adversary.is_none() {
            reactive::turn_on_attacker(actuators);
        }
    }

    /// One of our shots hurt the adversary
    pub fn adversary_damaged(&mut self, damage: i32, cause: HitCause) {
        if cause.is_precision_hit() {
            self.ctx.engagement.sniper_or_shock_hit = true;
        }
        self.knowledge.hit(damage);
    }

    pub fn adversary_killed(&mut self) {
        tracing::info!(adversary = ?self.knowledge.name(), "adversary killed");
        self.knowledge.reset();
        self.enemy_killed = true;
    }

    pub fn adversary_joined(&mut self, name: &str) {
        self.knowledge.set_name(name);
    }

    pub fn adversary_left(&mut self) {
        self.knowledge.erase_name();
        self.knowledge.reset();
    }

    pub fn path_signal(&mut self, signal: PathSignal, actuators: &mut dyn Actuators) {
        tracing::debug!(?signal, "path signal");
        let nav = &mut self.ctx.nav;

        match signal {
            PathSignal::ComputationFailed | PathSignal::TargetReached => {
                if let Some(forced) = nav.forced_destination {
                    if self.senses.distance_to(forced) <= self.config.arrival_tolerance {
                        nav.forced_destination = None;
                        nav.commanded_destination = None;
                    }
                }
                actuators.issue(BotCommand::StopPath);
                if self.survival.is_some() {
                    nav.override_destination = None;
                } else {
                    nav.stance_destination = None;
                }
            }
            PathSignal::Stuck => {
                nav.forced_destination = None;
                self.ctx.stop_execution(actuators);
                actuators.issue(BotCommand::SetFocus(None));
            }
        }
    }

    /// We died: drop every intent and stand up
    pub fn died(&mut self, actuators: &mut dyn Actuators) {
        tracing::info!("agent died");
        self.ctx.stop_execution(actuators);
        if self.ctx.nav.crouched {
            actuators.issue(BotCommand::Crouch(false));
            self.ctx.nav.crouched = false;
        }
        self.brain.reset_temp_info();
    }

    pub fn match_ended(&mut self, actuators: &mut dyn Actuators) {
        tracing::info!("match ended");
        actuators.issue(BotCommand::StopPath);
    }
}
