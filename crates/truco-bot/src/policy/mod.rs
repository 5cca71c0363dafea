mod heuristic;

pub use heuristic::HeuristicPolicy;

use crate::bot::{DecisionError, RaiseResponse};
use truco_core::game::snapshot::GameIntel;
use truco_core::model::card::Card;

/// The four questions a host asks a bot during a hand. Each call receives a
/// fresh snapshot; implementations keep no state between calls.
pub trait Policy: Send + Sync {
    fn name(&self) -> &str;

    /// Whether to play a hand offered at eleven points.
    fn accept_opening_wager(&self, intel: &GameIntel) -> bool;

    /// Whether to raise the stakes of the current trick.
    fn should_escalate(&self, intel: &GameIntel) -> bool;

    /// How to answer an opponent's raise.
    fn respond_to_escalation(&self, intel: &GameIntel) -> RaiseResponse;

    /// Which card to play next.
    fn choose_card(&self, intel: &GameIntel) -> Result<Card, DecisionError>;
}
