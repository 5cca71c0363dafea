mod engine;
mod extremes;
mod pair;
mod params;
mod strength;

pub use engine::{DecisionEngine, DecisionError, RaiseResponse, Verdict};
pub use extremes::{Extremes, find_extremes};
pub use pair::has_trump_pair;
pub use params::{Band, BotParams, PowerTable};
pub use strength::{PowerRank, classify, hand_power};

/// Runtime switches read from the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BotFeatures {
    decision_details: bool,
}

impl BotFeatures {
    pub const fn new(decision_details: bool) -> Self {
        Self { decision_details }
    }

    pub fn from_env() -> Self {
        Self::from_reader(|key| std::env::var(key).ok())
    }

    /// Whether decision log events include the hand, vira and opponent card.
    pub const fn decision_details(self) -> bool {
        self.decision_details
    }

    pub fn with_decision_details(mut self, enabled: bool) -> Self {
        self.decision_details = enabled;
        self
    }

    fn from_reader<F>(mut read: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let decision_details = read("TRUCO_DECISION_DETAILS")
            .map(|raw| matches!(raw.trim(), "1" | "true" | "TRUE" | "on" | "ON"))
            .unwrap_or(false);

        Self { decision_details }
    }
}
