pub mod bot;
pub mod policy;

pub use bot::{
    BotFeatures, BotParams, DecisionEngine, DecisionError, PowerRank, PowerTable, RaiseResponse,
    Verdict,
};
pub use policy::{HeuristicPolicy, Policy};
