//! Stateless geometry and lookup helpers
//!
//! Every lookup returns `None` when there is no candidate; callers treat
//! absence as "no action this tick".

use ordered_float::OrderedFloat;
use rand::Rng;

use crate::core::types::{Location, Rotation};

/// Point of interest closest to `spot`
pub fn closest_point(points: &[Location], spot: Location) -> Option<Location> {
    points
        .iter()
        .copied()
        .min_by_key(|p| OrderedFloat(p.distance(spot)))
}

/// Closest of a set of candidate locations to `origin`
pub fn closest_location<I>(origin: Location, candidates: I) -> Option<Location>
where
    I: IntoIterator<Item = Location>,
{
    candidates
        .into_iter()
        .min_by_key(|c| OrderedFloat(origin.distance(*c)))
}

/// Point of interest that is farthest from the adversary among those that
/// are closer to us than to it
pub fn best_run_zone(points: &[Location], enemy: Location, own: Location) -> Option<Location> {
    let mut best = None;
    let mut max_to_enemy = 0.0_f32;

    for &point in points {
        let to_enemy = enemy.distance(point);
        if to_enemy > max_to_enemy && own.distance(point) < to_enemy {
            max_to_enemy = to_enemy;
            best = Some(point);
        }
    }

    best
}

/// Project a rotation from `origin` into an absolute aim point `distance` away
pub fn rotation_to_location(origin: Location, rotation: Rotation, distance: f32) -> Location {
    origin + rotation.direction() * distance
}

/// Random integer in `[lower, upper]`, both included
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, lower: i32, upper: i32) -> i32 {
    if upper <= lower {
        return lower;
    }
    rng.gen_range(lower..=upper)
}
