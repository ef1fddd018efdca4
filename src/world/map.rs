//! Static map knowledge: points of interest

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::arithmetic::{closest_point, random_between};
use crate::core::types::Location;

/// Notable navigable locations (item spawns, chokepoints) extracted at
/// load time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArenaMap {
    pub points_of_interest: Vec<Location>,
}

impl ArenaMap {
    pub fn new(points_of_interest: Vec<Location>) -> Self {
        Self { points_of_interest }
    }

    pub fn closest_point_of_interest(&self, spot: Location) -> Option<Location> {
        closest_point(&self.points_of_interest, spot)
    }

    /// Uniformly random point of interest for which `is_recent` is false
    ///
    /// Falls back to every point when all of them are recent. Returns `None`
    /// only for a map without points of interest.
    pub fn random_point<R, F>(&self, rng: &mut R, is_recent: F) -> Option<Location>
    where
        R: Rng + ?Sized,
        F: Fn(Location) -> bool,
    {
        let fresh: Vec<Location> = self
            .points_of_interest
            .iter()
            .copied()
            .filter(|p| !is_recent(*p))
            .collect();
        let pool = if fresh.is_empty() {
            &self.points_of_interest
        } else {
            &fresh
        };

        if pool.is_empty() {
            return None;
        }
        let index = random_between(rng, 0, pool.len() as i32 - 1) as usize;
        pool.get(index).copied()
    }
}
