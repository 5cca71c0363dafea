use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;
use truco_bot::bot::{BotFeatures, BotParams};

const DEFAULT_SAMPLE_HANDS: usize = 1_000;
const RUN_ID_ALLOWED: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789._-";

/// Root harness configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BenchConfig {
    pub run_id: String,
    #[serde(default)]
    pub sample: SampleConfig,
    #[serde(default)]
    pub params: BotParams,
    #[serde(default)]
    pub outputs: OutputsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            run_id: "default".to_string(),
            sample: SampleConfig::default(),
            params: BotParams::default(),
            outputs: OutputsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl BenchConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let mut cfg: BenchConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        validate_run_id(&self.run_id)?;
        self.sample.validate()?;
        validate_params(&self.params)?;
        self.outputs.validate(&self.run_id)?;
        self.logging.normalize();
        Ok(())
    }

    /// Resolve output templates (e.g., `{run_id}` placeholders) into concrete paths.
    pub fn resolved_outputs(&self) -> ResolvedOutputs {
        ResolvedOutputs {
            summary_json: resolve_template(&self.run_id, &self.outputs.summary_json),
        }
    }
}

/// Random deal sampling block.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SampleConfig {
    pub seed: Option<u64>,
    #[serde(default = "default_sample_hands")]
    pub hands: usize,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            seed: None,
            hands: DEFAULT_SAMPLE_HANDS,
        }
    }
}

impl SampleConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.hands == 0 {
            return Err(ValidationError::InvalidField {
                field: "sample.hands".to_string(),
                message: "number of hands must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

fn default_sample_hands() -> usize {
    DEFAULT_SAMPLE_HANDS
}

/// Output artifact configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OutputsConfig {
    #[serde(default = "default_summary_json")]
    pub summary_json: String,
}

impl Default for OutputsConfig {
    fn default() -> Self {
        Self {
            summary_json: default_summary_json(),
        }
    }
}

impl OutputsConfig {
    fn validate(&self, run_id: &str) -> Result<(), ValidationError> {
        if self.summary_json.trim().is_empty() {
            return Err(ValidationError::InvalidField {
                field: "outputs.summary_json".to_string(),
                message: "path must not be empty".to_string(),
            });
        }

        let resolved = resolve_template(run_id, &self.summary_json);
        if resolved.components().count() == 0 {
            return Err(ValidationError::InvalidField {
                field: "outputs.summary_json".to_string(),
                message: "resolved path is invalid".to_string(),
            });
        }
        Ok(())
    }
}

fn default_summary_json() -> String {
    "bench/out/{run_id}/summary.json".to_string()
}

/// Logging configuration defaults to disabled structured logs.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_structured: bool,
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
    #[serde(default)]
    pub decision_details: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_structured: false,
            tracing_level: default_tracing_level(),
            decision_details: false,
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.tracing_level.trim().is_empty() {
            self.tracing_level = default_tracing_level();
        }
    }

    /// Env-driven bot features, with detail logging also switched on by config.
    pub fn bot_features(&self) -> BotFeatures {
        let features = BotFeatures::from_env();
        features.with_decision_details(features.decision_details() || self.decision_details)
    }

    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_tracing_level() -> String {
    "info".to_string()
}

fn validate_run_id(run_id: &str) -> Result<(), ValidationError> {
    if run_id.trim().is_empty() {
        return Err(ValidationError::InvalidField {
            field: "run_id".to_string(),
            message: "run_id must not be empty".to_string(),
        });
    }

    if !run_id.chars().all(|c| RUN_ID_ALLOWED.contains(c)) {
        return Err(ValidationError::InvalidField {
            field: "run_id".to_string(),
            message: "run_id may only contain alphanumeric characters, '.', '_' or '-'".to_string(),
        });
    }

    Ok(())
}

fn validate_params(params: &BotParams) -> Result<(), ValidationError> {
    for (label, table) in [
        ("params.first_trick", &params.first_trick),
        ("params.second_trick", &params.second_trick),
    ] {
        if !table.is_well_formed() {
            return Err(ValidationError::InvalidField {
                field: label.to_string(),
                message: "tier bands must be non-empty, disjoint and ascending".to_string(),
            });
        }
    }

    if params.opening_forced_score > truco_core::game::snapshot::MAX_SCORE {
        return Err(ValidationError::InvalidField {
            field: "params.opening_forced_score".to_string(),
            message: "score must be within 0..=11".to_string(),
        });
    }

    Ok(())
}

fn resolve_template(run_id: &str, template: &str) -> PathBuf {
    let replaced = template.replace("{run_id}", run_id);
    PathBuf::from(replaced)
}

/// Fully resolved output paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOutputs {
    pub summary_json: PathBuf,
}

impl ResolvedOutputs {
    /// Directory holding the summary and, when enabled, the telemetry log.
    pub fn output_dir(&self) -> PathBuf {
        self.summary_json
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Errors surfaced when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}
