//! Arsenal comparison between us and the adversary
//!
//! Each side gets a hand-tuned profit per scored bucket (close, medium,
//! far) from the combination of weapons it holds; the per-bucket difference
//! is then folded into a 1-5 band.

use serde::{Deserialize, Serialize};

use crate::weapons::bands::DistanceBucket;
use crate::weapons::kinds::{WeaponKind, WeaponSet};

/// Differences within this many points count as parity
pub const PARITY_MARGIN: i32 = 10;
/// Differences beyond this many points count as far better/worse
pub const DOMINANCE_MARGIN: i32 = 30;

/// Which side of the comparison an arsenal belongs to
///
/// The medium-range table is tuned differently for the adversary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Own,
    Adversary,
}

/// Per-bucket 1-5 band: 1 far worse, 3 parity, 5 far better
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArsenalComparison {
    bands: [u8; 3],
}

impl ArsenalComparison {
    pub fn from_bands(bands: [u8; 3]) -> Self {
        Self { bands }
    }

    pub fn bands(&self) -> [u8; 3] {
        self.bands
    }

    /// Band for a scored bucket; anything past far is judged as far
    pub fn band(&self, bucket: DistanceBucket) -> u8 {
        self.bands[bucket.index().min(2)]
    }

    /// Highest band across the scored buckets
    pub fn best(&self) -> u8 {
        self.bands.iter().copied().max().unwrap_or(3)
    }

    /// Closest bucket reaching the best band
    pub fn best_offensive_range(&self) -> DistanceBucket {
        let best = self.best();
        DistanceBucket::SCORED
            .into_iter()
            .find(|b| self.band(*b) == best)
            .unwrap_or(DistanceBucket::Close)
    }
}

/// Fold a profit difference (own minus adversary) into a 1-5 band
pub fn band_for_difference(difference: i32) -> u8 {
    if (-PARITY_MARGIN..=PARITY_MARGIN).contains(&difference) {
        3
    } else if difference > DOMINANCE_MARGIN {
        5
    } else if difference > 0 {
        4
    } else if difference >= -DOMINANCE_MARGIN {
        2
    } else {
        1
    }
}

/// Compare our loaded weapons with the adversary's estimated arsenal
pub fn compare_arsenals(own: WeaponSet, adversary: WeaponSet) -> ArsenalComparison {
    let mut bands = [3; 3];
    for bucket in DistanceBucket::SCORED {
        let difference =
            bucket_profit(own, bucket, Side::Own) - bucket_profit(adversary, bucket, Side::Adversary);
        bands[bucket.index()] = band_for_difference(difference);
    }
    ArsenalComparison { bands }
}

/// Raw 0-100 profit of an arsenal at one scored bucket
fn bucket_profit(set: WeaponSet, bucket: DistanceBucket, side: Side) -> i32 {
    match bucket {
        DistanceBucket::Close => close_profit(set),
        DistanceBucket::Medium => medium_profit(set, side),
        DistanceBucket::Far | DistanceBucket::Beyond => far_profit(set),
    }
}

fn far_profit(set: WeaponSet) -> i32 {
    let rifle = set.any(WeaponKind::is_hitscan_rifle);
    let shock = set.contains(WeaponKind::ShockRifle);

    if rifle && shock {
        100
    } else if rifle {
        90
    } else if shock {
        80
    } else if set.contains(WeaponKind::Minigun) {
        40
    } else {
        0
    }
}

fn medium_profit(set: WeaponSet, side: Side) -> i32 {
    let splash = set.any(WeaponKind::is_splash);
    let shock = set.contains(WeaponKind::ShockRifle);
    let minigun = set.contains(WeaponKind::Minigun);
    let rifle = set.any(WeaponKind::is_hitscan_rifle);

    // (shock+minigun, shock, minigun, rifle, otherwise) with splash support
    let with_splash = match side {
        Side::Own => [100, 95, 90, 85, 80],
        Side::Adversary => [100, 90, 80, 70, 60],
    };
    // (shock+rifle+minigun, shock+rifle, shock+minigun, shock, rifle+minigun, rifle)
    let without_splash = match side {
        Side::Own => [80, 75, 60, 50, 40, 10],
        Side::Adversary => [90, 60, 55, 50, 40, 10],
    };

    if splash {
        if shock && minigun {
            with_splash[0]
        } else if shock {
            with_splash[1]
        } else if minigun {
            with_splash[2]
        } else if rifle {
            with_splash[3]
        } else {
            with_splash[4]
        }
    } else if shock && rifle {
        if minigun {
            without_splash[0]
        } else {
            without_splash[1]
        }
    } else if shock {
        if minigun {
            without_splash[2]
        } else {
            without_splash[3]
        }
    } else if rifle {
        if minigun {
            without_splash[4]
        } else {
            without_splash[5]
        }
    } else if minigun {
        30
    } else {
        0
    }
}

fn close_profit(set: WeaponSet) -> i32 {
    let splash = set.any(WeaponKind::is_splash);
    let sustained = set.any(WeaponKind::is_sustained);

    match (splash, sustained) {
        (true, true) => 100,
        (true, false) => 90,
        (false, true) => 50,
        (false, false) => 0,
    }
}
