use super::Policy;
use crate::bot::{BotFeatures, BotParams, DecisionEngine, DecisionError, RaiseResponse, Verdict};
use core::fmt;
use tracing::{Level, event};
use truco_core::game::snapshot::GameIntel;
use truco_core::model::card::Card;
use truco_core::model::oracle::{CardOracle, TrucoRules};

/// Tiered rule-table bot: classifies hand strength per trick and looks the
/// answer up in fixed tables.
#[derive(Debug, Clone)]
pub struct HeuristicPolicy<O = TrucoRules> {
    engine: DecisionEngine<O>,
    features: BotFeatures,
}

impl<O: CardOracle> HeuristicPolicy<O> {
    pub const NAME: &'static str = "skoltable";

    pub fn new(oracle: O, params: BotParams, features: BotFeatures) -> Self {
        Self {
            engine: DecisionEngine::new(oracle, params),
            features,
        }
    }

    pub fn engine(&self) -> &DecisionEngine<O> {
        &self.engine
    }

    pub fn features(&self) -> BotFeatures {
        self.features
    }
}

impl<O: CardOracle + Send + Sync> Policy for HeuristicPolicy<O> {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn accept_opening_wager(&self, intel: &GameIntel) -> bool {
        let verdict = self.engine.accept_opening_wager(intel);
        log_decision(intel, self.features, "opening", &verdict);
        verdict.choice
    }

    fn should_escalate(&self, intel: &GameIntel) -> bool {
        let verdict = self.engine.should_escalate(intel);
        log_decision(intel, self.features, "raise", &verdict);
        verdict.choice
    }

    fn respond_to_escalation(&self, intel: &GameIntel) -> RaiseResponse {
        let verdict = self.engine.respond_to_escalation(intel);
        log_decision(intel, self.features, "respond", &verdict);
        verdict.choice
    }

    fn choose_card(&self, intel: &GameIntel) -> Result<Card, DecisionError> {
        match self.engine.choose_card(intel) {
            Ok(verdict) => {
                log_decision(intel, self.features, "play", &verdict);
                Ok(verdict.choice)
            }
            Err(err) => {
                event!(
                    target: "truco_bot::decision",
                    Level::WARN,
                    kind = "play",
                    hand_size = intel.hand.len(),
                    completed = intel.trick_outcomes.len(),
                    error = %err,
                );
                Err(err)
            }
        }
    }
}

fn log_decision<T: fmt::Display>(
    intel: &GameIntel,
    features: BotFeatures,
    kind: &'static str,
    verdict: &Verdict<T>,
) {
    if !tracing::enabled!(target: "truco_bot::decision", Level::INFO) {
        return;
    }

    let trick = intel
        .trick_number()
        .map(|number| number.to_string())
        .unwrap_or_else(|| "finished".to_string());
    let tier = verdict
        .tier
        .map(|rank| rank.to_string())
        .unwrap_or_else(|| "-".to_string());

    if !features.decision_details() {
        event!(
            target: "truco_bot::decision",
            Level::INFO,
            kind,
            trick = %trick,
            tier = %tier,
            choice = %verdict.choice,
            reason = verdict.reason,
        );
        return;
    }

    let hand = intel
        .hand
        .iter()
        .map(|card| card.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let opponent = intel
        .opponent_card
        .map(|card| card.to_string())
        .unwrap_or_else(|| "-".to_string());

    event!(
        target: "truco_bot::decision",
        Level::INFO,
        kind,
        trick = %trick,
        tier = %tier,
        choice = %verdict.choice,
        reason = verdict.reason,
        hand = %hand,
        vira = %intel.vira,
        opponent = %opponent,
        score = intel.score,
        opponent_score = intel.opponent_score,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use truco_core::model::hand::Hand;
    use truco_core::model::rank::Rank;
    use truco_core::model::suit::Suit;
    use truco_core::model::trick::TrickOutcome;

    fn policy() -> HeuristicPolicy {
        HeuristicPolicy::new(TrucoRules, BotParams::default(), BotFeatures::new(true))
    }

    fn weak_hand() -> GameIntel {
        GameIntel::new(
            Hand::with_cards(vec![
                Card::new(Rank::Four, Suit::Diamonds),
                Card::new(Rank::Five, Suit::Hearts),
                Card::new(Rank::Six, Suit::Spades),
            ]),
            Card::new(Rank::Ace, Suit::Clubs),
        )
    }

    #[test]
    fn policy_reports_its_name() {
        assert_eq!(policy().name(), "skoltable");
    }

    #[test]
    fn policy_is_usable_as_trait_object() {
        let bots: Vec<Box<dyn Policy>> = vec![Box::new(policy())];
        let intel = weak_hand();
        assert!(!bots[0].accept_opening_wager(&intel));
        assert!(!bots[0].should_escalate(&intel));
        assert_eq!(bots[0].respond_to_escalation(&intel), RaiseResponse::Decline);
    }

    #[test]
    fn custom_params_flow_through_to_decisions() {
        let params = BotParams {
            opening_accept_tier: crate::bot::PowerRank::Tier1,
            ..BotParams::default()
        };
        let policy = HeuristicPolicy::new(TrucoRules, params, BotFeatures::default());
        assert!(policy.accept_opening_wager(&weak_hand()));
    }

    #[test]
    fn choose_card_surfaces_precondition_errors() {
        let intel = GameIntel::new(Hand::new(), Card::new(Rank::Ace, Suit::Clubs))
            .with_outcomes([TrickOutcome::Won, TrickOutcome::Lost]);
        assert_eq!(policy().choose_card(&intel), Err(DecisionError::EmptyHand));
    }
}
