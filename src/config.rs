//! Configuration loader — YAML config plus file-backed credentials, the way
//! `services/core/config.py` resolves both (`_credentials_dir`,
//! `_read_credential`: `CREDENTIALS_DIR` env overrides the config's
//! `credentials.dir`, default `~/.kalshi`). `.env` overrides stay available
//! via `dotenv`, as the teacher crate already depends on it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::discovery::SelectionStrategy;

#[derive(Debug, Clone, Deserialize)]
pub struct EventRollover {
    pub rediscover_interval_seconds: u64,
    pub event_selection: String,
}

impl EventRollover {
    pub fn selection_strategy(&self) -> Result<SelectionStrategy> {
        SelectionStrategy::parse(&self.event_selection)
            .with_context(|| format!("unknown event_selection: {}", self.event_selection))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StrategyConfig {
    pub id: String,
    pub class_name: String,
    pub targets: Vec<String>,
    #[serde(default)]
    pub params: serde_yaml::Mapping,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    pub strategies: Vec<StrategyConfig>,
    #[serde(default)]
    pub paper_mode: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CredentialsConfig {
    /// Overrides `CREDENTIALS_DIR`; defaults to `~/.kalshi` if neither is set.
    pub dir: Option<String>,
    pub api_key_id_file: Option<String>,
    pub exchange_private_key_file: Option<String>,
    pub weather_feed_token_file: Option<String>,
}

fn default_data_dir() -> String {
    "data".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersistenceConfig {
    /// Fills CSV and per-day Parquet files both live under this directory
    /// (spec §4.9: `<data_dir>/fills.csv`, `<data_dir>/parquet/fills-YYYY-MM-DD.parquet`).
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_flush_interval_seconds")]
    pub flush_interval_seconds: u64,
}

fn default_flush_interval_seconds() -> u64 {
    60
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self { data_dir: default_data_dir(), flush_interval_seconds: default_flush_interval_seconds() }
    }
}

impl PersistenceConfig {
    pub fn csv_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("fills.csv")
    }

    pub fn parquet_dir(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("parquet")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub event_series: Vec<String>,
    pub event_rollover: EventRollover,
    pub bot: BotConfig,
    #[serde(default)]
    pub credentials: CredentialsConfig,
    #[serde(default)]
    pub persistence: PersistenceConfig,
}

impl Config {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let cfg: Config = serde_yaml::from_str(s).context("parsing config YAML")?;
        if cfg.event_series.is_empty() {
            anyhow::bail!("zero series configured");
        }
        if cfg.bot.strategies.is_empty() {
            anyhow::bail!("zero strategies loaded");
        }
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_yaml_str(&raw)
    }

    pub fn paper_mode(&self) -> bool {
        self.bot.paper_mode
    }
}

fn credentials_dir(creds: &CredentialsConfig) -> PathBuf {
    let dir = std::env::var("CREDENTIALS_DIR")
        .ok()
        .or_else(|| creds.dir.clone())
        .unwrap_or_else(|| "~/.kalshi".to_string());
    PathBuf::from(shellexpand_home(&dir))
}

fn shellexpand_home(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Ok(home) = std::env::var("HOME") {
            return format!("{home}/{rest}");
        }
    }
    path.to_string()
}

fn read_credential(creds: &CredentialsConfig, filename: &str) -> Result<String> {
    let path = credentials_dir(creds).join(filename);
    std::fs::read_to_string(&path)
        .map(|s| s.trim().to_string())
        .with_context(|| {
            format!(
                "credential file not found: {}. Create it or set CREDENTIALS_DIR.",
                path.display()
            )
        })
}

pub struct Credentials {
    pub api_key_id: String,
    pub private_key_path: PathBuf,
    pub weather_feed_token: String,
}

/// Resolve the three credentials the engine needs to start. Missing
/// credentials are a startup failure (spec §6.7).
pub fn load_credentials(creds: &CredentialsConfig) -> Result<Credentials> {
    let api_key_id = read_credential(
        creds,
        creds.api_key_id_file.as_deref().unwrap_or("api_key_id"),
    )?;
    let private_key_file = creds
        .exchange_private_key_file
        .as_deref()
        .unwrap_or("kalshi_private.pem");
    let private_key_path = credentials_dir(creds).join(private_key_file);
    if !private_key_path.exists() {
        anyhow::bail!("exchange private key not found: {}", private_key_path.display());
    }
    let weather_feed_token = read_credential(
        creds,
        creds.weather_feed_token_file.as_deref().unwrap_or("synoptic_token"),
    )?;

    Ok(Credentials { api_key_id, private_key_path, weather_feed_token })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_config() {
        let yaml = r#"
event_series: ["KXHIGHCHI", "KXHIGHNY"]
event_rollover:
  rediscover_interval_seconds: 300
  event_selection: active
bot:
  paper_mode: true
  strategies:
    - id: ladder-chi
      class_name: LadderStrategy
      targets: ["KXHIGHCHI"]
      params:
        consecutive_obs: 2
        max_price_cents: 95
"#;
        let cfg = Config::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.event_series.len(), 2);
        assert_eq!(cfg.event_rollover.rediscover_interval_seconds, 300);
        assert!(cfg.bot.paper_mode);
        assert_eq!(cfg.bot.strategies[0].class_name, "LadderStrategy");
        assert!(cfg.event_rollover.selection_strategy().is_ok());
    }

    #[test]
    fn zero_series_is_rejected() {
        let yaml = r#"
event_series: []
event_rollover:
  rediscover_interval_seconds: 300
  event_selection: active
bot:
  paper_mode: false
  strategies:
    - id: a
      class_name: LadderStrategy
      targets: []
"#;
        assert!(Config::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn zero_strategies_is_rejected() {
        let yaml = r#"
event_series: ["KXHIGHCHI"]
event_rollover:
  rediscover_interval_seconds: 300
  event_selection: active
bot:
  paper_mode: false
  strategies: []
"#;
        assert!(Config::from_yaml_str(yaml).is_err());
    }
}
