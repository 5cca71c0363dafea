use core::fmt;
use serde::{Deserialize, Serialize};

/// Result of a completed trick from the deciding side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrickOutcome {
    Won,
    Drew,
    Lost,
}

impl TrickOutcome {
    pub const fn as_str(self) -> &'static str {
        match self {
            TrickOutcome::Won => "won",
            TrickOutcome::Drew => "drew",
            TrickOutcome::Lost => "lost",
        }
    }
}

impl fmt::Display for TrickOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of the three tricks of a deal is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrickNumber {
    First,
    Second,
    Third,
}

impl TrickNumber {
    pub const MAX_COMPLETED: usize = 2;

    /// Derives the trick in progress from how many tricks were completed.
    /// `None` once the deal is over.
    pub const fn from_completed(completed: usize) -> Option<Self> {
        match completed {
            0 => Some(TrickNumber::First),
            1 => Some(TrickNumber::Second),
            2 => Some(TrickNumber::Third),
            _ => None,
        }
    }
}

impl fmt::Display for TrickNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TrickNumber::First => "first",
            TrickNumber::Second => "second",
            TrickNumber::Third => "third",
        };
        f.write_str(text)
    }
}

/// The trick in progress together with the outcomes that led to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrickState {
    First,
    Second {
        opening: TrickOutcome,
    },
    Third {
        opening: TrickOutcome,
        second: TrickOutcome,
    },
}

impl TrickState {
    pub fn from_outcomes(outcomes: &[TrickOutcome]) -> Option<Self> {
        match *outcomes {
            [] => Some(TrickState::First),
            [opening] => Some(TrickState::Second { opening }),
            [opening, second] => Some(TrickState::Third { opening, second }),
            _ => None,
        }
    }

    pub const fn number(self) -> TrickNumber {
        match self {
            TrickState::First => TrickNumber::First,
            TrickState::Second { .. } => TrickNumber::Second,
            TrickState::Third { .. } => TrickNumber::Third,
        }
    }

    /// Outcome of the deal's first trick, once it has been played.
    pub const fn opening(self) -> Option<TrickOutcome> {
        match self {
            TrickState::First => None,
            TrickState::Second { opening } | TrickState::Third { opening, .. } => Some(opening),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trick_number_tracks_history_length() {
        assert_eq!(TrickNumber::from_completed(0), Some(TrickNumber::First));
        assert_eq!(TrickNumber::from_completed(2), Some(TrickNumber::Third));
        assert_eq!(TrickNumber::from_completed(3), None);
    }

    #[test]
    fn state_from_outcomes() {
        assert_eq!(TrickState::from_outcomes(&[]), Some(TrickState::First));
        assert_eq!(
            TrickState::from_outcomes(&[TrickOutcome::Drew]),
            Some(TrickState::Second {
                opening: TrickOutcome::Drew
            })
        );
        let third = TrickState::from_outcomes(&[TrickOutcome::Lost, TrickOutcome::Won])
            .expect("two outcomes");
        assert_eq!(third.number(), TrickNumber::Third);
        assert_eq!(third.opening(), Some(TrickOutcome::Lost));
        assert_eq!(TrickState::from_outcomes(&[TrickOutcome::Won; 3]), None);
    }

    #[test]
    fn outcome_serializes_snake_case() {
        let json = serde_json::to_string(&TrickOutcome::Drew).unwrap();
        assert_eq!(json, "\"drew\"");
    }
}
