//! Core type definitions shared by every decision layer

use serde::{Deserialize, Serialize};

/// A point in the arena (x forward, y right, z up; engine units)
pub type Location = glam::Vec3;

/// Simulation clock reading in seconds
pub type SimTime = f64;

/// Identifier of the tracked adversary as reported by perception
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdversaryId(pub u32);

/// Orientation reported with heard noises (degrees)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub pitch: f32,
    pub yaw: f32,
}

impl Rotation {
    pub fn new(pitch: f32, yaw: f32) -> Self {
        Self { pitch, yaw }
    }

    /// Unit direction vector this rotation points along
    pub fn direction(&self) -> glam::Vec3 {
        let (pitch, yaw) = (self.pitch.to_radians(), self.yaw.to_radians());
        glam::Vec3::new(yaw.cos() * pitch.cos(), yaw.sin() * pitch.cos(), pitch.sin())
            .normalize_or_zero()
    }
}

/// The eight fixed-azimuth rays cast around the agent, relative to its facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Heading {
    pub const ALL: [Heading; 8] = [
        Heading::North,
        Heading::NorthEast,
        Heading::East,
        Heading::SouthEast,
        Heading::South,
        Heading::SouthWest,
        Heading::West,
        Heading::NorthWest,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Hit locations of the eight cardinal rays
///
/// Perception only hands these over once every ray has reported at least
/// once, so a `CardinalRays` value is always fully initialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardinalRays {
    hits: [Location; 8],
}

impl CardinalRays {
    pub fn new(hits: [Location; 8]) -> Self {
        Self { hits }
    }

    /// Rays that all hit at the same distance around `origin`
    pub fn uniform(origin: Location, clearance: f32) -> Self {
        let mut hits = [origin; 8];
        for heading in Heading::ALL {
            let angle = (heading.index() as f32 * 45.0).to_radians();
            hits[heading.index()] =
                origin + glam::Vec3::new(angle.cos(), angle.sin(), 0.0) * clearance;
        }
        Self { hits }
    }

    pub fn hit(&self, heading: Heading) -> Location {
        self.hits[heading.index()]
    }

    pub fn with_hit(mut self, heading: Heading, location: Location) -> Self {
        self.hits[heading.index()] = location;
        self
    }

    /// Free distance along a ray, measured from `origin`
    pub fn clearance(&self, origin: Location, heading: Heading) -> f32 {
        origin.distance(self.hit(heading))
    }
}
