use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use truco_bot::bot::RaiseResponse;
use truco_bot::policy::Policy;
use truco_core::game::snapshot::{GameIntel, SnapshotError};
use truco_core::model::card::Card;
use truco_core::model::trick::TrickNumber;

/// All four answers a policy gives for one snapshot.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DecisionReport {
    pub bot: String,
    pub trick: Option<TrickNumber>,
    pub accept_opening_wager: bool,
    pub should_escalate: bool,
    pub respond_to_escalation: RaiseResponse,
    pub respond_code: i8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_error: Option<String>,
}

impl DecisionReport {
    pub fn evaluate(policy: &dyn Policy, intel: &GameIntel) -> Self {
        let respond = policy.respond_to_escalation(intel);
        let (card, card_error) = match policy.choose_card(intel) {
            Ok(card) => (Some(card), None),
            Err(err) => (None, Some(err.to_string())),
        };
        Self {
            bot: policy.name().to_string(),
            trick: intel.trick_number(),
            accept_opening_wager: policy.accept_opening_wager(intel),
            should_escalate: policy.should_escalate(intel),
            respond_to_escalation: respond,
            respond_code: respond.code(),
            card,
            card_error,
        }
    }
}

/// Reads a JSON snapshot and checks it against the deal invariants.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<GameIntel, SnapshotLoadError> {
    let path = path.as_ref().to_path_buf();
    let raw = fs::read_to_string(&path).map_err(|source| SnapshotLoadError::Read {
        source,
        path: path.clone(),
    })?;
    let intel = GameIntel::from_json(&raw).map_err(|source| SnapshotLoadError::Parse {
        source,
        path: path.clone(),
    })?;
    intel
        .validate()
        .map_err(|source| SnapshotLoadError::Invalid { source, path })?;
    Ok(intel)
}

#[derive(Debug, Error)]
pub enum SnapshotLoadError {
    #[error("failed to read snapshot {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse snapshot {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
        path: PathBuf,
    },
    #[error("invalid snapshot {path:?}: {source}")]
    Invalid {
        #[source]
        source: SnapshotError,
        path: PathBuf,
    },
}
