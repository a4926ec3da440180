use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub rounds: u32,
    pub ascii: bool,
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub rounds: ValueSource,
    pub ascii: ValueSource,
    pub log_level: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            rounds: ValueSource::Default,
            ascii: ValueSource::Default,
            log_level: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            rounds: 1,
            ascii: false,
            log_level: "warn".into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

pub const CONFIG_ENV: &str = "POKERHAND_CONFIG";
pub const SEED_ENV: &str = "POKERHAND_SEED";
pub const ROUNDS_ENV: &str = "POKERHAND_ROUNDS";
pub const ASCII_ENV: &str = "POKERHAND_ASCII";
pub const LOG_ENV: &str = "POKERHAND_LOG";

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolves defaults, then the TOML file named by `POKERHAND_CONFIG`, then
/// `POKERHAND_*` environment variables. Later sources win.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.rounds {
            cfg.rounds = v;
            sources.rounds = ValueSource::File;
        }
        if let Some(v) = f.ascii {
            cfg.ascii = v;
            sources.ascii = ValueSource::File;
        }
        if let Some(v) = f.log_level {
            cfg.log_level = v;
            sources.log_level = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(rounds) = std::env::var(ROUNDS_ENV)
        && !rounds.is_empty()
    {
        cfg.rounds = rounds
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid rounds: {}", rounds)))?;
        sources.rounds = ValueSource::Env;
    }
    if let Ok(ascii) = std::env::var(ASCII_ENV)
        && !ascii.is_empty()
    {
        cfg.ascii = parse_bool(&ascii)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid ascii flag: {}", ascii)))?;
        sources.ascii = ValueSource::Env;
    }
    if let Ok(level) = std::env::var(LOG_ENV)
        && !level.is_empty()
    {
        cfg.log_level = level;
        sources.log_level = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    rounds: Option<u32>,
    #[serde(default)]
    ascii: Option<bool>,
    #[serde(default)]
    log_level: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.rounds == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: rounds must be >=1".into(),
        ));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
