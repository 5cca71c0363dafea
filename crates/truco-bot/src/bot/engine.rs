use super::extremes::find_extremes;
use super::pair::has_trump_pair;
use super::params::{BotParams, PowerTable};
use super::strength::{PowerRank, classify};
use core::fmt;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;
use truco_core::game::snapshot::GameIntel;
use truco_core::model::card::Card;
use truco_core::model::oracle::{CardOracle, TrucoRules};
use truco_core::model::trick::{TrickOutcome, TrickState};

/// Answer to an opponent's raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaiseResponse {
    Decline,
    Accept,
    Reraise,
}

impl RaiseResponse {
    /// Integer encoding used by game hosts: -1 quit, 0 accept, 1 raise again.
    pub const fn code(self) -> i8 {
        match self {
            RaiseResponse::Decline => -1,
            RaiseResponse::Accept => 0,
            RaiseResponse::Reraise => 1,
        }
    }

    const fn from_rank(rank: PowerRank) -> Self {
        match rank {
            PowerRank::Tier4 => RaiseResponse::Reraise,
            PowerRank::Tier3 => RaiseResponse::Accept,
            PowerRank::Tier2 | PowerRank::Tier1 => RaiseResponse::Decline,
        }
    }
}

impl fmt::Display for RaiseResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RaiseResponse::Decline => "decline",
            RaiseResponse::Accept => "accept",
            RaiseResponse::Reraise => "reraise",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecisionError {
    #[error("no card left in hand to choose from")]
    EmptyHand,
    #[error("deal already decided after {completed} tricks")]
    DealFinished { completed: usize },
}

/// A decision plus the tier and rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict<T> {
    pub choice: T,
    pub tier: Option<PowerRank>,
    pub reason: &'static str,
}

impl<T> Verdict<T> {
    const fn ranked(choice: T, tier: PowerRank, reason: &'static str) -> Self {
        Self {
            choice,
            tier: Some(tier),
            reason,
        }
    }

    const fn unranked(choice: T, reason: &'static str) -> Self {
        Self {
            choice,
            tier: None,
            reason,
        }
    }
}

/// Stateless rule tables turning a snapshot into one of the four decisions.
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine<O = TrucoRules> {
    oracle: O,
    params: BotParams,
}

impl<O: CardOracle> DecisionEngine<O> {
    pub fn new(oracle: O, params: BotParams) -> Self {
        Self { oracle, params }
    }

    pub fn with_oracle(oracle: O) -> Self {
        Self::new(oracle, BotParams::default())
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn first_trick_rank(&self, intel: &GameIntel) -> PowerRank {
        self.rank_with(intel, &self.params.first_trick)
    }

    pub fn second_trick_rank(&self, intel: &GameIntel) -> PowerRank {
        self.rank_with(intel, &self.params.second_trick)
    }

    fn rank_with(&self, intel: &GameIntel, table: &PowerTable) -> PowerRank {
        classify(&self.oracle, &intel.hand, intel.vira, table)
    }

    pub fn accept_opening_wager(&self, intel: &GameIntel) -> Verdict<bool> {
        if intel.opponent_score == self.params.opening_forced_score {
            return Verdict::unranked(true, "opponent_at_match_point");
        }
        let rank = self.first_trick_rank(intel);
        Verdict::ranked(
            rank >= self.params.opening_accept_tier,
            rank,
            "first_trick_tier",
        )
    }

    pub fn should_escalate(&self, intel: &GameIntel) -> Verdict<bool> {
        match intel.trick_state() {
            Some(TrickState::First) => {
                let rank = self.first_trick_rank(intel);
                Verdict::ranked(rank >= PowerRank::Tier3, rank, "first_trick_strong")
            }
            Some(TrickState::Second { opening }) => {
                let rank = self.second_trick_rank(intel);
                match opening {
                    TrickOutcome::Won => {
                        Verdict::ranked(rank < PowerRank::Tier3, rank, "press_after_win")
                    }
                    TrickOutcome::Drew => {
                        Verdict::ranked(rank > PowerRank::Tier3, rank, "near_certain_after_draw")
                    }
                    TrickOutcome::Lost => {
                        Verdict::ranked(rank >= PowerRank::Tier3, rank, "recover_after_loss")
                    }
                }
            }
            Some(TrickState::Third { .. }) => Verdict::unranked(false, "third_trick_holds"),
            None => Verdict::unranked(false, "deal_finished"),
        }
    }

    pub fn respond_to_escalation(&self, intel: &GameIntel) -> Verdict<RaiseResponse> {
        if has_trump_pair(&self.oracle, &intel.hand, intel.vira) {
            return Verdict::unranked(RaiseResponse::Accept, "trump_pair");
        }
        match intel.trick_state() {
            Some(TrickState::First) => {
                let rank = self.first_trick_rank(intel);
                Verdict::ranked(RaiseResponse::from_rank(rank), rank, "first_trick_tier")
            }
            Some(
                TrickState::Second {
                    opening: TrickOutcome::Won,
                }
                | TrickState::Third {
                    opening: TrickOutcome::Won,
                    ..
                },
            ) => {
                let rank = self.second_trick_rank(intel);
                Verdict::ranked(RaiseResponse::from_rank(rank), rank, "ahead_after_win")
            }
            Some(TrickState::Second { .. } | TrickState::Third { .. }) => {
                Verdict::unranked(RaiseResponse::Decline, "behind_or_level")
            }
            None => Verdict::unranked(RaiseResponse::Decline, "deal_finished"),
        }
    }

    pub fn choose_card(&self, intel: &GameIntel) -> Result<Verdict<Card>, DecisionError> {
        let state = intel.trick_state().ok_or(DecisionError::DealFinished {
            completed: intel.trick_outcomes.len(),
        })?;
        let first = intel.hand.first().ok_or(DecisionError::EmptyHand)?;
        let extremes =
            find_extremes(&self.oracle, &intel.hand, intel.vira).ok_or(DecisionError::EmptyHand)?;
        let vira = intel.vira;

        let verdict = match (state, intel.opponent_card) {
            (TrickState::First, Some(opponent)) => {
                if self.oracle.compare(extremes.strongest, opponent, vira) == Ordering::Greater {
                    Verdict::unranked(extremes.strongest, "beat_opponent")
                } else {
                    Verdict::unranked(extremes.weakest, "sacrifice_weakest")
                }
            }
            (TrickState::First, None) => Verdict::unranked(extremes.strongest, "lead_strongest"),
            (_, Some(opponent))
                if opponent.is_concealed() || self.oracle.is_top_trump(opponent, vira) =>
            {
                Verdict::unranked(extremes.weakest, "concede_to_threat")
            }
            (state, _) => match state.opening() {
                Some(TrickOutcome::Drew | TrickOutcome::Lost) => {
                    Verdict::unranked(extremes.strongest, "fight_from_behind")
                }
                // TODO: confirm whether an unranked first card is intended after an opening win.
                _ => Verdict::unranked(first, "hand_order"),
            },
        };
        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use truco_core::model::hand::Hand;
    use truco_core::model::rank::Rank;
    use truco_core::model::suit::Suit;

    fn engine() -> DecisionEngine {
        DecisionEngine::default()
    }

    #[test]
    fn raise_codes_match_host_encoding() {
        assert_eq!(RaiseResponse::Decline.code(), -1);
        assert_eq!(RaiseResponse::Accept.code(), 0);
        assert_eq!(RaiseResponse::Reraise.code(), 1);
    }

    #[test]
    fn empty_hand_cannot_choose_a_card() {
        let intel = GameIntel::new(Hand::new(), Card::new(Rank::Four, Suit::Clubs));
        assert_eq!(engine().choose_card(&intel), Err(DecisionError::EmptyHand));
    }

    #[test]
    fn finished_deal_cannot_choose_a_card() {
        let intel = GameIntel::new(
            Hand::with_cards(vec![Card::new(Rank::Ace, Suit::Spades)]),
            Card::new(Rank::Four, Suit::Clubs),
        )
        .with_outcomes([TrickOutcome::Drew; 3]);
        assert_eq!(
            engine().choose_card(&intel),
            Err(DecisionError::DealFinished { completed: 3 })
        );
        assert!(!engine().should_escalate(&intel).choice);
        assert_eq!(
            engine().respond_to_escalation(&intel).choice,
            RaiseResponse::Decline
        );
    }

    #[test]
    fn verdict_reports_tier_for_ranked_rules() {
        let intel = GameIntel::new(
            Hand::with_cards(vec![
                Card::new(Rank::Four, Suit::Hearts),
                Card::new(Rank::Five, Suit::Spades),
                Card::new(Rank::Six, Suit::Diamonds),
            ]),
            Card::new(Rank::King, Suit::Clubs),
        );
        let verdict = engine().accept_opening_wager(&intel);
        assert!(!verdict.choice);
        assert_eq!(verdict.tier, Some(PowerRank::Tier1));
        assert_eq!(verdict.reason, "first_trick_tier");
    }
}
