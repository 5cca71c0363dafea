use super::strength::PowerRank;
use serde::{Deserialize, Serialize};

/// Inclusive range of aggregate hand power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    pub min: i32,
    pub max: i32,
}

impl Band {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub const fn contains(self, power: i32) -> bool {
        power >= self.min && power <= self.max
    }
}

/// Power bands for tiers 4, 3 and 2. Anything outside them is tier 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerTable {
    pub tier4: Band,
    pub tier3: Band,
    pub tier2: Band,
}

impl PowerTable {
    /// Three cards in hand: aggregate power tops out at 36.
    pub const FIRST_TRICK: PowerTable = PowerTable {
        tier4: Band::new(28, 36),
        tier3: Band::new(20, 27),
        tier2: Band::new(13, 19),
    };

    /// Two cards in hand: aggregate power tops out at 25.
    pub const SECOND_TRICK: PowerTable = PowerTable {
        tier4: Band::new(21, 25),
        tier3: Band::new(16, 20),
        tier2: Band::new(11, 15),
    };

    pub const fn rank(&self, power: i32) -> PowerRank {
        if self.tier4.contains(power) {
            PowerRank::Tier4
        } else if self.tier3.contains(power) {
            PowerRank::Tier3
        } else if self.tier2.contains(power) {
            PowerRank::Tier2
        } else {
            PowerRank::Tier1
        }
    }

    /// Bands must be non-empty and must not overlap, strongest first.
    pub const fn is_well_formed(&self) -> bool {
        self.tier2.min <= self.tier2.max
            && self.tier3.min <= self.tier3.max
            && self.tier4.min <= self.tier4.max
            && self.tier2.max < self.tier3.min
            && self.tier3.max < self.tier4.min
    }
}

/// Tunable thresholds for the decision engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotParams {
    pub first_trick: PowerTable,
    pub second_trick: PowerTable,
    /// Minimum first-trick tier for accepting the opening wager (default: tier 3)
    pub opening_accept_tier: PowerRank,
    /// Opponent score at which the opening wager is always accepted (default: 11)
    pub opening_forced_score: u8,
}

impl Default for BotParams {
    fn default() -> Self {
        Self {
            first_trick: PowerTable::FIRST_TRICK,
            second_trick: PowerTable::SECOND_TRICK,
            opening_accept_tier: PowerRank::Tier3,
            opening_forced_score: 11,
        }
    }
}
