use super::params::PowerTable;
use core::fmt;
use serde::{Deserialize, Serialize};
use truco_core::model::card::Card;
use truco_core::model::hand::Hand;
use truco_core::model::oracle::CardOracle;

/// Four-tier classification of a hand's aggregate strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PowerRank {
    Tier1 = 1,
    Tier2 = 2,
    Tier3 = 3,
    Tier4 = 4,
}

impl PowerRank {
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for PowerRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tier{}", self.value())
    }
}

/// Sum of every card's relative value. Zero for an empty hand.
pub fn hand_power<O: CardOracle>(oracle: &O, hand: &Hand, vira: Card) -> i32 {
    hand.iter()
        .map(|card| oracle.relative_value(*card, vira))
        .sum()
}

pub fn classify<O: CardOracle>(
    oracle: &O,
    hand: &Hand,
    vira: Card,
    table: &PowerTable,
) -> PowerRank {
    table.rank(hand_power(oracle, hand, vira))
}
