use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::{RngCore, SeedableRng, rngs::StdRng};
use serde::Serialize;
use thiserror::Error;
use tracing::{Level, event};
use truco_bot::bot::{PowerRank, RaiseResponse, has_trump_pair};
use truco_bot::policy::{HeuristicPolicy, Policy};
use truco_core::game::deal::Deal;
use truco_core::game::snapshot::GameIntel;
use truco_core::model::card::Card;
use truco_core::model::oracle::{CardOracle, TrucoRules};

use crate::config::{BenchConfig, ResolvedOutputs};

/// Deals seeded hands and tallies what the bot decides on the first trick.
pub struct SampleRunner {
    config: BenchConfig,
    outputs: ResolvedOutputs,
    policy: HeuristicPolicy,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ResponseCounts {
    pub decline: usize,
    pub accept: usize,
    pub reraise: usize,
}

impl ResponseCounts {
    fn record(&mut self, response: RaiseResponse) {
        match response {
            RaiseResponse::Decline => self.decline += 1,
            RaiseResponse::Accept => self.accept += 1,
            RaiseResponse::Reraise => self.reraise += 1,
        }
    }
}

/// Counts of the second-to-act card choice.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct AnswerCounts {
    pub beat: usize,
    pub sacrificed: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SampleSummary {
    pub run_id: String,
    pub seed: u64,
    pub hands: usize,
    /// Index 0 holds tier 1.
    pub tier_histogram: [usize; 4],
    pub trump_pairs: usize,
    pub opening_accepted: usize,
    pub escalations: usize,
    pub responses: ResponseCounts,
    pub answers: AnswerCounts,
    #[serde(skip)]
    pub summary_path: PathBuf,
}

impl SampleRunner {
    pub fn new(config: BenchConfig, outputs: ResolvedOutputs) -> Self {
        let policy =
            HeuristicPolicy::new(TrucoRules, config.params, config.logging.bot_features());
        Self {
            config,
            outputs,
            policy,
        }
    }

    pub fn run(&self) -> Result<SampleSummary, SampleError> {
        let seed = self.config.sample.seed.unwrap_or(0);
        let mut rng = StdRng::seed_from_u64(seed);
        let engine = self.policy.engine();
        let mut summary = SampleSummary {
            run_id: self.config.run_id.clone(),
            seed,
            hands: self.config.sample.hands,
            tier_histogram: [0; 4],
            trump_pairs: 0,
            opening_accepted: 0,
            escalations: 0,
            responses: ResponseCounts::default(),
            answers: AnswerCounts::default(),
            summary_path: self.outputs.summary_json.clone(),
        };

        for hand_index in 0..self.config.sample.hands {
            let deal = Deal::from_seed(rng.next_u64());
            let [own, other] = &deal.hands;
            let intel = GameIntel::new(own.clone(), deal.vira);

            let tier = engine.first_trick_rank(&intel);
            summary.tier_histogram[usize::from(tier.value() - 1)] += 1;
            if has_trump_pair(engine.oracle(), &intel.hand, intel.vira) {
                summary.trump_pairs += 1;
            }
            if self.policy.accept_opening_wager(&intel) {
                summary.opening_accepted += 1;
            }
            if self.policy.should_escalate(&intel) {
                summary.escalations += 1;
            }
            summary
                .responses
                .record(self.policy.respond_to_escalation(&intel));

            let Some(lead) = other.first() else {
                continue;
            };
            let answering = intel.with_opponent_card(lead);
            let card = self
                .policy
                .choose_card(&answering)
                .map_err(|source| SampleError::Decision { hand_index, source })?;
            if beats(engine.oracle(), card, lead, deal.vira) {
                summary.answers.beat += 1;
            } else {
                summary.answers.sacrificed += 1;
            }

            event!(
                target: "truco_bench::sample",
                Level::DEBUG,
                hand_index,
                tier = %tier,
                vira = %deal.vira,
                lead = %lead,
                answer = %card,
            );
        }

        write_summary(&summary, &self.outputs.summary_json)?;
        Ok(summary)
    }
}

fn beats<O: CardOracle>(oracle: &O, card: Card, lead: Card, vira: Card) -> bool {
    oracle.compare(card, lead, vira).is_gt()
}

fn write_summary(summary: &SampleSummary, path: &Path) -> Result<(), SampleError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, summary)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

impl SampleSummary {
    pub fn tier_count(&self, rank: PowerRank) -> usize {
        self.tier_histogram[usize::from(rank.value() - 1)]
    }
}

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize summary: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("hand {hand_index}: {source}")]
    Decision {
        hand_index: usize,
        #[source]
        source: truco_bot::bot::DecisionError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SampleConfig;

    fn config(dir: &Path, hands: usize, seed: u64) -> (BenchConfig, ResolvedOutputs) {
        let mut config = BenchConfig {
            run_id: "unit".to_string(),
            sample: SampleConfig {
                seed: Some(seed),
                hands,
            },
            ..BenchConfig::default()
        };
        config.outputs.summary_json = dir.join("summary.json").display().to_string();
        config.validate().expect("valid config");
        let outputs = config.resolved_outputs();
        (config, outputs)
    }

    #[test]
    fn summary_counts_every_hand() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (config, outputs) = config(dir.path(), 50, 11);
        let summary = SampleRunner::new(config, outputs).run().expect("run");

        assert_eq!(summary.tier_histogram.iter().sum::<usize>(), 50);
        let responses = &summary.responses;
        assert_eq!(responses.decline + responses.accept + responses.reraise, 50);
        assert_eq!(summary.answers.beat + summary.answers.sacrificed, 50);
        assert!(summary.opening_accepted >= summary.tier_count(PowerRank::Tier3));
        assert!(summary.summary_path.exists());
    }

    #[test]
    fn same_seed_same_summary() {
        let dir_a = tempfile::tempdir().expect("tempdir a");
        let dir_b = tempfile::tempdir().expect("tempdir b");
        let (config_a, outputs_a) = config(dir_a.path(), 20, 3);
        let (config_b, outputs_b) = config(dir_b.path(), 20, 3);
        let a = SampleRunner::new(config_a, outputs_a).run().expect("run a");
        let b = SampleRunner::new(config_b, outputs_b).run().expect("run b");
        assert_eq!(a.tier_histogram, b.tier_histogram);
        assert_eq!(a.responses, b.responses);
        assert_eq!(a.answers, b.answers);
    }
}
