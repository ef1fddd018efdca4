//! A small scripted arena for driving the agent end to end
//!
//! The adversary walks a fixed patrol and shoots back with a fixed hit
//! chance. Physics is deliberately crude: path following is a straight line
//! at run speed, strafes and dodges displace sideways, and walls are a
//! uniform ray clearance around the agent.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::agent::Agent;
use crate::core::types::{AdversaryId, CardinalRays, Location, Rotation, SimTime};
use crate::overrides::SurvivalOverride;
use crate::sim::recorder::RecordingActuators;
use crate::tactics::CombatStance;
use crate::weapons::{Ammo, Inventory, WeaponKind};
use crate::world::{
    Adversary, AimPoint, ArenaMap, BotCommand, HitCause, ItemKind, ItemSpawn, PathSignal, Senses,
};

pub const TICK_SECS: f64 = 0.25;
pub const RUN_SPEED: f32 = 440.0;
pub const ADVERSARY_SPEED: f32 = 300.0;
pub const SIGHT_RANGE: f32 = 2000.0;
pub const PICKUP_RADIUS: f32 = 60.0;
pub const RESPAWN_SECS: f64 = 20.0;
pub const WALL_CLEARANCE: f32 = 900.0;

const OUR_HIT_CHANCE: f64 = 0.35;
const OUR_DAMAGE: i32 = 25;
const THEIR_HIT_CHANCE: f64 = 0.15;
const THEIR_DAMAGE: i32 = 12;
const ADVERSARY_RESPAWN_SECS: f64 = 3.0;
const OUR_SPAWN: Location = Location::new(-1800.0, -1800.0, 0.0);

#[derive(Debug, Clone)]
struct Slot {
    spawn: ItemSpawn,
    respawn_at: Option<SimTime>,
}

#[derive(Debug, Clone)]
struct ScriptedAdversary {
    id: AdversaryId,
    patrol: Vec<Location>,
    leg: usize,
    location: Location,
    health: i32,
    weapon: WeaponKind,
    respawn_at: Option<SimTime>,
}

impl ScriptedAdversary {
    fn alive(&self) -> bool {
        self.respawn_at.is_none()
    }

    fn walk(&mut self, dt: f32) {
        let Some(&goal) = self.patrol.get(self.leg) else {
            return;
        };
        self.location = step_towards(self.location, goal, ADVERSARY_SPEED * dt);
        if self.location.distance(goal) < 1.0 {
            self.leg = (self.leg + 1) % self.patrol.len();
        }
    }
}

/// What happened during one step, for reporting
#[derive(Debug, Clone, Serialize)]
pub struct TickRecord {
    pub time: SimTime,
    pub stance: CombatStance,
    pub survival: Option<SurvivalOverride>,
    pub health: i32,
    pub commands: Vec<BotCommand>,
}

/// Totals over a run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub kills: u32,
    pub deaths: u32,
    pub pickups: u32,
    /// Ticks spent in each stance, in `CombatStance::ALL` order
    pub stance_ticks: [u64; 5],
}

pub struct ScriptedArena {
    map: ArenaMap,
    slots: Vec<Slot>,
    adversary: ScriptedAdversary,
    location: Location,
    health: i32,
    inventory: Inventory,
    was_visible: bool,
    time: SimTime,
    rng: StdRng,
    summary: RunSummary,
}

fn step_towards(from: Location, to: Location, max: f32) -> Location {
    let offset = to - from;
    if offset.length() <= max {
        to
    } else {
        from + offset.normalize_or_zero() * max
    }
}

fn yaw_towards(from: Location, to: Location) -> Rotation {
    let d = to - from;
    Rotation::new(0.0, d.y.atan2(d.x).to_degrees())
}

impl ScriptedArena {
    /// Four corners, a center and two side platforms
    pub fn demo(seed: u64) -> Self {
        let points = vec![
            Location::new(-1800.0, -1800.0, 0.0),
            Location::new(1800.0, -1800.0, 0.0),
            Location::new(1800.0, 1800.0, 0.0),
            Location::new(-1800.0, 1800.0, 0.0),
            Location::new(0.0, 0.0, 0.0),
            Location::new(0.0, -1200.0, 250.0),
            Location::new(0.0, 1200.0, 250.0),
        ];
        let items = [
            (ItemKind::Weapon(WeaponKind::ShockRifle), Location::new(1800.0, -1800.0, 0.0)),
            (ItemKind::Weapon(WeaponKind::RocketLauncher), Location::new(-1800.0, 1800.0, 0.0)),
            (ItemKind::Weapon(WeaponKind::FlakCannon), Location::new(0.0, 1200.0, 250.0)),
            (ItemKind::Ammo(WeaponKind::AssaultRifle), Location::new(0.0, -1200.0, 250.0)),
            (ItemKind::HealthPack, Location::new(0.0, 0.0, 0.0)),
            (ItemKind::HealthVial, Location::new(-1800.0, -1800.0, 0.0)),
            (ItemKind::ShieldPack, Location::new(1800.0, 1800.0, 0.0)),
        ];

        Self {
            slots: items
                .iter()
                .map(|&(kind, location)| Slot {
                    spawn: ItemSpawn::new(kind, location),
                    respawn_at: None,
                })
                .collect(),
            adversary: ScriptedAdversary {
                id: AdversaryId(1),
                patrol: vec![points[2], points[4], points[1], points[6]],
                leg: 0,
                location: points[2],
                health: 100,
                weapon: WeaponKind::LinkGun,
                respawn_at: None,
            },
            map: ArenaMap::new(points),
            location: OUR_SPAWN,
            health: 100,
            inventory: Inventory::spawn_loadout(),
            was_visible: false,
            time: 0.0,
            rng: StdRng::seed_from_u64(seed),
            summary: RunSummary::default(),
        }
    }

    pub fn map(&self) -> &ArenaMap {
        &self.map
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    fn adversary_visible(&self) -> bool {
        self.adversary.alive() && self.location.distance(self.adversary.location) < SIGHT_RANGE
    }

    fn sensed_adversary(&self) -> Adversary {
        Adversary {
            id: self.adversary.id,
            location: self.adversary.location,
            weapon: Some(self.adversary.weapon),
        }
    }

    pub fn senses(&self) -> Senses {
        Senses {
            time: self.time,
            health: self.health,
            location: self.location,
            inventory: self.inventory.clone(),
            adversary: self.adversary_visible().then(|| self.sensed_adversary()),
            rays: Some(CardinalRays::uniform(self.location, WALL_CLEARANCE)),
            items: self.slots.iter().map(|s| s.spawn).collect(),
        }
    }

    /// Advance one tick: events, decision, then the world reacts
    pub fn step(&mut self, agent: &mut Agent, actuators: &mut RecordingActuators) -> TickRecord {
        let visible = self.adversary_visible();
        if visible {
            agent.adversary_sighted(self.sensed_adversary(), self.time);
        } else if self.was_visible {
            agent.adversary_lost(self.time);
        }
        self.was_visible = visible;

        let decision = agent.tick(self.senses(), actuators);
        self.summary.ticks += 1;
        self.summary.stance_ticks[decision.stance.index()] += 1;

        let mut commands = actuators.drain();
        for command in &commands {
            self.apply(command, agent);
        }

        self.follow_path(agent, actuators);
        self.collect_items();
        self.run_adversary(agent, actuators);
        self.respawn_items();
        self.time += TICK_SECS;

        commands.extend(actuators.drain());
        TickRecord {
            time: self.time,
            stance: decision.stance,
            survival: decision.survival,
            health: self.health,
            commands,
        }
    }

    fn apply(&mut self, command: &BotCommand, agent: &mut Agent) {
        match *command {
            BotCommand::SwitchWeapon(kind) => self.inventory.current = Some(kind),
            BotCommand::StrafeLeft { distance, .. } => self.location.y -= distance,
            BotCommand::StrafeRight { distance, .. } => self.location.y += distance,
            BotCommand::StrafeTo { target, .. } => {
                self.location = step_towards(self.location, target, RUN_SPEED * TICK_SECS as f32)
            }
            BotCommand::Dodge { direction } => {
                self.location.x += direction.x * 150.0;
                self.location.y += direction.y * 150.0;
            }
            BotCommand::Fire { target, .. } => self.fire(target, agent),
            _ => {}
        }
    }

    fn fire(&mut self, target: AimPoint, agent: &mut Agent) {
        let Some(weapon) = self.inventory.current else {
            return;
        };
        if self.inventory.ammo(weapon) == 0 {
            return;
        }
        self.inventory.spend(weapon, 1);

        if target != AimPoint::Adversary(self.adversary.id) || !self.adversary_visible() {
            return;
        }
        if !self.rng.gen_bool(OUR_HIT_CHANCE) {
            return;
        }

        let cause = match weapon {
            WeaponKind::ShockRifle => HitCause::ShockBeam,
            WeaponKind::SniperRifle => HitCause::SniperShot,
            _ => HitCause::Other,
        };
        self.adversary.health -= OUR_DAMAGE;
        agent.adversary_damaged(OUR_DAMAGE, cause);

        if self.adversary.health <= 0 {
            self.summary.kills += 1;
            self.adversary.respawn_at = Some(self.time + ADVERSARY_RESPAWN_SECS);
            agent.adversary_killed();
        }
    }

    fn follow_path(&mut self, agent: &mut Agent, actuators: &mut RecordingActuators) {
        let Some(target) = actuators.path_target() else {
            return;
        };
        self.location = step_towards(self.location, target, RUN_SPEED * TICK_SECS as f32);
        if self.location.distance(target) < 1.0 {
            actuators.finish_path();
            agent.path_signal(PathSignal::TargetReached, actuators);
        }
    }

    fn collect_items(&mut self) {
        for slot in &mut self.slots {
            if !slot.spawn.spawned || slot.spawn.location.distance(self.location) > PICKUP_RADIUS {
                continue;
            }
            match slot.spawn.kind {
                ItemKind::Weapon(kind) => self.inventory.add(kind, Ammo::new(20, 4)),
                ItemKind::Ammo(kind) => self.inventory.add(kind, Ammo::new(30, 2)),
                kind => {
                    if let Some((gain, cap)) = kind.health_gain() {
                        self.health = (self.health + gain).min(cap.max(self.health));
                    }
                }
            }
            tracing::debug!(item = ?slot.spawn.kind, "picked up");
            slot.spawn.spawned = false;
            slot.respawn_at = Some(self.time + RESPAWN_SECS);
            self.summary.pickups += 1;
        }
    }

    fn run_adversary(&mut self, agent: &mut Agent, actuators: &mut RecordingActuators) {
        if let Some(at) = self.adversary.respawn_at {
            if self.time >= at {
                self.adversary.respawn_at = None;
                self.adversary.health = 100;
                self.adversary.leg = 0;
                self.adversary.location = self.adversary.patrol.first().copied().unwrap_or_default();
            }
            return;
        }

        self.adversary.walk(TICK_SECS as f32);

        let adversary_at = self.adversary.location;
        let stolen = self.slots.iter_mut().find(|s| {
            s.spawn.spawned && s.spawn.location.distance(adversary_at) <= PICKUP_RADIUS
        });
        if let Some(slot) = stolen {
            slot.spawn.spawned = false;
            slot.respawn_at = Some(self.time + RESPAWN_SECS);
            let (kind, rotation) = (slot.spawn.kind, yaw_towards(self.location, adversary_at));
            agent.heard_pickup(kind, adversary_at, rotation, self.time, actuators);
        }

        if self.adversary_visible() && self.rng.gen_bool(THEIR_HIT_CHANCE) {
            self.health -= THEIR_DAMAGE;
            agent.damaged(true, actuators);
            if self.health <= 0 {
                self.summary.deaths += 1;
                agent.died(actuators);
                self.location = OUR_SPAWN;
                self.health = 100;
                self.inventory = Inventory::spawn_loadout();
            }
        }
    }

    fn respawn_items(&mut self) {
        for slot in &mut self.slots {
            if slot.respawn_at.is_some_and(|at| self.time >= at) {
                slot.spawn.spawned = true;
                slot.respawn_at = None;
            }
        }
    }

    /// Run `ticks` steps, handing every record to `observe`
    pub fn run(
        &mut self,
        agent: &mut Agent,
        ticks: u64,
        mut observe: impl FnMut(&TickRecord),
    ) -> RunSummary {
        let mut actuators = RecordingActuators::new();
        for _ in 0..ticks {
            let record = self.step(agent, &mut actuators);
            observe(&record);
        }
        self.summary.clone()
    }
}
