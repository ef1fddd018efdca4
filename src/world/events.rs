//! Event payloads delivered between ticks

use serde::{Deserialize, Serialize};

/// How one of our shots hurt the adversary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitCause {
    ShockBeam,
    SniperShot,
    Other,
}

impl HitCause {
    /// Hit-scan hits that make chaining another shock beam worthwhile
    pub fn is_precision_hit(self) -> bool {
        matches!(self, HitCause::ShockBeam | HitCause::SniperShot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_hits() {
        assert!(HitCause::ShockBeam.is_precision_hit());
        assert!(HitCause::SniperShot.is_precision_hit());
        assert!(!HitCause::Other.is_precision_hit());
    }
}
