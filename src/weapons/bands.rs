//! Distance and height bands used by every weapon table

use serde::{Deserialize, Serialize};

use crate::core::types::Location;

/// Upper bound of the close band
pub const CLOSE_RANGE: f32 = 700.0;
/// Upper bound of the medium band
pub const MEDIUM_RANGE: f32 = 1200.0;
/// Upper bound of the far band; anything past it is "beyond"
pub const FAR_RANGE: f32 = 1500.0;
/// Vertical difference below which two points count as level
pub const HEIGHT_TOLERANCE: f32 = 200.0;

/// Distance bucket between the agent and a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DistanceBucket {
    Close,
    Medium,
    Far,
    Beyond,
}

impl DistanceBucket {
    /// The three buckets the arsenal comparison is scored on
    pub const SCORED: [DistanceBucket; 3] =
        [DistanceBucket::Close, DistanceBucket::Medium, DistanceBucket::Far];

    pub fn classify(distance: f32) -> Self {
        if distance < CLOSE_RANGE {
            DistanceBucket::Close
        } else if distance < MEDIUM_RANGE {
            DistanceBucket::Medium
        } else if distance < FAR_RANGE {
            DistanceBucket::Far
        } else {
            DistanceBucket::Beyond
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Height of a target relative to the agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeightBand {
    Below,
    Level,
    Above,
}

impl HeightBand {
    /// Classify `target` relative to `origin`
    pub fn between(origin: Location, target: Location) -> Self {
        let vertical = origin.z - target.z;
        if vertical.abs() <= HEIGHT_TOLERANCE {
            HeightBand::Level
        } else if vertical < 0.0 {
            HeightBand::Above
        } else {
            HeightBand::Below
        }
    }

    /// -1, 0 or +1
    pub fn sign(self) -> i8 {
        match self {
            HeightBand::Below => -1,
            HeightBand::Level => 0,
            HeightBand::Above => 1,
        }
    }

    pub fn index(self) -> usize {
        (self.sign() + 1) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_bucket_boundaries() {
        assert_eq!(DistanceBucket::classify(0.0), DistanceBucket::Close);
        assert_eq!(DistanceBucket::classify(699.9), DistanceBucket::Close);
        assert_eq!(DistanceBucket::classify(700.0), DistanceBucket::Medium);
        assert_eq!(DistanceBucket::classify(1199.0), DistanceBucket::Medium);
        assert_eq!(DistanceBucket::classify(1200.0), DistanceBucket::Far);
        assert_eq!(DistanceBucket::classify(1499.0), DistanceBucket::Far);
        assert_eq!(DistanceBucket::classify(1500.0), DistanceBucket::Beyond);
    }

    #[test]
    fn test_height_band() {
        let origin = Location::new(0.0, 0.0, 0.0);
        assert_eq!(HeightBand::between(origin, Location::new(0.0, 0.0, 150.0)), HeightBand::Level);
        assert_eq!(HeightBand::between(origin, Location::new(0.0, 0.0, 250.0)), HeightBand::Above);
        assert_eq!(HeightBand::between(origin, Location::new(0.0, 0.0, -250.0)), HeightBand::Below);
        assert_eq!(HeightBand::Above.sign(), 1);
        assert_eq!(HeightBand::Below.index(), 0);
    }
}
