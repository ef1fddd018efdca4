//! Movement constants - all tunable values of the stance layer in one place
//!
//! Distances are engine units, times are simulation seconds.

// Strafing and dodging around the adversary
pub const STRAFE_DISTANCE: f32 = 200.0;
pub const STRAFE_MIN_CLEARANCE: f32 = 200.0;
pub const DODGE_MIN_CLEARANCE: f32 = 400.0;

// Range profiles: free ray length needed to retreat or close in along it
pub const PROFILE_MIN_CLEARANCE: f32 = 400.0;

// Attack branch weights, rolled on 0..100
pub const STRAFE_LEFT_BELOW: i32 = 30;
pub const STRAFE_RIGHT_BELOW: i32 = 60;
pub const DODGE_LEFT_BELOW: i32 = 80;

// Intel staleness
pub const HUNT_DIRECT_SECS: f64 = 10.0; // chase the exact last position
pub const HUNT_NEARBY_SECS: f64 = 20.0; // chase the nearest point of interest
pub const RETREAT_INTEL_SECS: f64 = 10.0;

// Recently visited destinations kept per stance
pub const HUNT_MEMORY: usize = 6;
pub const GREEDY_MEMORY: usize = 4;
pub const RETREAT_MEMORY: usize = 2;

// Weapon switching
pub const COMBO_MIN_SHOCK_AMMO: u32 = 5;
