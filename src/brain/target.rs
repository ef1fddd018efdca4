//! Combo and spam targeting

use serde::{Deserialize, Serialize};

use crate::brain::Brain;
use crate::core::types::{Location, SimTime};
use crate::tactics::EngagementFlags;
use crate::world::{Adversary, ProjectileSighting, Senses};

/// A deflectable projectile this close to the aim reference can be detonated
pub const COMBO_RADIUS: f32 = 600.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BullseyeKind {
    /// Detonate a shock core in flight
    Combo,
    /// Area denial where the adversary was last seen
    Spam,
}

/// A non-adversary aim point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullseye {
    pub location: Location,
    pub kind: BullseyeKind,
}

/// Last position of an adversary that just left sight
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SpamPoint {
    pub location: Location,
    pub since: SimTime,
    pub announced: bool,
}

impl Brain {
    /// Remember a projectile as a combo candidate when it is deflectable and
    /// close enough to what we are aiming at
    ///
    /// The aim reference is the visible adversary, otherwise the spam point
    /// while it is within `spam_window` seconds of `now`. Returns whether the
    /// projectile was registered.
    pub fn register_incoming_projectile(
        &mut self,
        projectile: &ProjectileSighting,
        adversary: Option<&Adversary>,
        now: SimTime,
        spam_window: f64,
    ) -> bool {
        if !projectile.kind.is_deflectable() {
            return false;
        }

        let reference = adversary
            .map(|a| a.location)
            .or_else(|| {
                self.spam
                    .filter(|s| now - s.since <= spam_window)
                    .map(|s| s.location)
            });
        let Some(reference) = reference else {
            return false;
        };

        if reference.distance(projectile.location) < COMBO_RADIUS {
            self.combo = Some(projectile.location);
            tracing::debug!(location = ?projectile.location, "combo candidate registered");
            true
        } else {
            false
        }
    }

    /// The adversary left sight at `location`
    pub fn remember_spam(&mut self, location: Location, time: SimTime) {
        self.spam = Some(SpamPoint {
            location,
            since: time,
            announced: false,
        });
    }

    pub fn forget_spam(&mut self) {
        self.spam = None;
    }

    /// Pending bullseye for this tick, handed out once
    ///
    /// A combo raises `blow_combo` and wins over everything; a spam point is
    /// only offered while no adversary is visible and within `spam_window`
    /// seconds of losing sight, and raises `spam`.
    pub fn estimate_target(
        &mut self,
        senses: &Senses,
        flags: &mut EngagementFlags,
        spam_window: f64,
    ) -> Option<Bullseye> {
        if let Some(location) = self.combo.take() {
            flags.blow_combo = true;
            return Some(Bullseye {
                location,
                kind: BullseyeKind::Combo,
            });
        }

        let spam = self.spam?;
        if senses.time - spam.since > spam_window {
            self.spam = None;
            return None;
        }
        if spam.announced || senses.adversary.is_some() {
            return None;
        }

        self.spam = Some(SpamPoint {
            announced: true,
            ..spam
        });
        flags.spam = true;
        Some(Bullseye {
            location: spam.location,
            kind: BullseyeKind::Spam,
        })
    }
}
