//! Bounded FIFO of recently chosen destinations

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::types::Location;

/// Destinations a stance committed to lately, oldest first
///
/// Shared by every stance; each stance passes its own capacity when it
/// remembers a spot, so the list is trimmed to the capacity of whoever wrote
/// last.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecentDestinations {
    spots: VecDeque<Location>,
}

impl RecentDestinations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, spot: Location) -> bool {
        self.spots.contains(&spot)
    }

    /// Remember `spot`, evicting the oldest entries beyond `capacity`
    pub fn remember(&mut self, spot: Location, capacity: usize) {
        self.spots.push_back(spot);
        while self.spots.len() > capacity {
            self.spots.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.spots.clear();
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Location> + '_ {
        self.spots.iter().copied()
    }
}
