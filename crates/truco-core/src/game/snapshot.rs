use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::trick::{TrickNumber, TrickOutcome, TrickState};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_SCORE: u8 = 11;

/// Everything a bot may look at when asked for a decision. The host builds a
/// fresh snapshot for every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameIntel {
    pub hand: Hand,
    pub vira: Card,
    #[serde(default)]
    pub trick_outcomes: Vec<TrickOutcome>,
    #[serde(default)]
    pub opponent_card: Option<Card>,
    #[serde(default)]
    pub score: u8,
    #[serde(default)]
    pub opponent_score: u8,
}

impl GameIntel {
    pub fn new(hand: Hand, vira: Card) -> Self {
        Self {
            hand,
            vira,
            trick_outcomes: Vec::new(),
            opponent_card: None,
            score: 0,
            opponent_score: 0,
        }
    }

    pub fn with_outcomes(mut self, outcomes: impl Into<Vec<TrickOutcome>>) -> Self {
        self.trick_outcomes = outcomes.into();
        self
    }

    pub fn with_opponent_card(mut self, card: Card) -> Self {
        self.opponent_card = Some(card);
        self
    }

    pub fn with_scores(mut self, score: u8, opponent_score: u8) -> Self {
        self.score = score;
        self.opponent_score = opponent_score;
        self
    }

    pub fn trick_number(&self) -> Option<TrickNumber> {
        TrickNumber::from_completed(self.trick_outcomes.len())
    }

    pub fn trick_state(&self) -> Option<TrickState> {
        TrickState::from_outcomes(&self.trick_outcomes)
    }

    /// Checks the invariants the host is expected to uphold. Decisions never
    /// call this themselves.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.hand.len() > Hand::MAX_CARDS {
            return Err(SnapshotError::HandTooLarge {
                cards: self.hand.len(),
            });
        }
        if self.trick_outcomes.len() > TrickNumber::MAX_COMPLETED {
            return Err(SnapshotError::TooManyTricks {
                completed: self.trick_outcomes.len(),
            });
        }
        if self.hand.len() + self.trick_outcomes.len() > Hand::MAX_CARDS {
            return Err(SnapshotError::CardsExceedDeal {
                cards: self.hand.len(),
                completed: self.trick_outcomes.len(),
            });
        }
        if self.vira.is_concealed() || self.hand.iter().any(|card| card.is_concealed()) {
            return Err(SnapshotError::ConcealedOwnCard);
        }
        for (side, value) in [("score", self.score), ("opponent_score", self.opponent_score)] {
            if value > MAX_SCORE {
                return Err(SnapshotError::ScoreOutOfRange { side, value });
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("hand holds {cards} cards, at most 3 are dealt")]
    HandTooLarge { cards: usize },
    #[error("{completed} tricks recorded, a deal is decided after 2")]
    TooManyTricks { completed: usize },
    #[error("{cards} cards in hand after {completed} tricks exceeds the 3 dealt")]
    CardsExceedDeal { cards: usize, completed: usize },
    #[error("own hand and vira must be face up")]
    ConcealedOwnCard,
    #[error("{side} is {value}, scores range 0..=11")]
    ScoreOutOfRange { side: &'static str, value: u8 },
}
