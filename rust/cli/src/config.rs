//! Layered configuration: built-in defaults, an optional TOML file named by
//! `HILO_CONFIG`, then `HILO_*` environment variables. Command-line flags are
//! applied on top by the command handlers.

use hilo_engine::policy::{COLD_OVERRIDE_THRESHOLD, CountPolicy, DEFAULT_DECK_FLOOR, DeckFloor};
use hilo_engine::shoe::{MAX_DECKS, MIN_DECKS};
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_PATH_VAR: &str = "HILO_CONFIG";
pub const DECKS_VAR: &str = "HILO_DECKS";
pub const DECK_FLOOR_VAR: &str = "HILO_DECK_FLOOR";
pub const COLD_THRESHOLD_VAR: &str = "HILO_COLD_THRESHOLD";
pub const COLOR_VAR: &str = "HILO_COLOR";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Shoe size; the session prompts for it when unset.
    pub decks: Option<u8>,
    pub deck_floor: DeckFloor,
    /// Cold cards that force a player-favorable reading; 0 disables the rule.
    pub cold_threshold: u32,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decks: None,
            deck_floor: DEFAULT_DECK_FLOOR,
            cold_threshold: COLD_OVERRIDE_THRESHOLD,
            color: true,
        }
    }
}

impl Config {
    pub fn policy(&self) -> CountPolicy {
        CountPolicy {
            deck_floor: self.deck_floor,
            cold_override: (self.cold_threshold > 0).then_some(self.cold_threshold),
        }
    }
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
    pub decks: ValueSource,
    pub deck_floor: ValueSource,
    pub cold_threshold: ValueSource,
    pub color: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            decks: ValueSource::Default,
            deck_floor: ValueSource::Default,
            cold_threshold: ValueSource::Default,
            color: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Resolves configuration from the process environment.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Resolves configuration using `env` to look up variables.
pub fn load_from<F>(env: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| env(key).filter(|v| !v.is_empty());
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = lookup(CONFIG_PATH_VAR) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.decks {
            cfg.decks = Some(v);
            sources.decks = ValueSource::File;
        }
        if let Some(v) = f.deck_floor {
            cfg.deck_floor = parse_deck_floor(v)?;
            sources.deck_floor = ValueSource::File;
        }
        if let Some(v) = f.cold_threshold {
            cfg.cold_threshold = v;
            sources.cold_threshold = ValueSource::File;
        }
        if let Some(v) = f.color {
            cfg.color = v;
            sources.color = ValueSource::File;
        }
    }

    if let Some(decks) = lookup(DECKS_VAR) {
        cfg.decks = Some(
            decks
                .parse()
                .map_err(|_| ConfigError::Invalid("Invalid decks".into()))?,
        );
        sources.decks = ValueSource::Env;
    }
    if let Some(floor) = lookup(DECK_FLOOR_VAR) {
        let decks: f64 = floor
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid deck_floor".into()))?;
        cfg.deck_floor = parse_deck_floor(decks)?;
        sources.deck_floor = ValueSource::Env;
    }
    if let Some(threshold) = lookup(COLD_THRESHOLD_VAR) {
        cfg.cold_threshold = threshold
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid cold_threshold".into()))?;
        sources.cold_threshold = ValueSource::Env;
    }
    if let Some(color) = lookup(COLOR_VAR) {
        cfg.color =
            parse_bool(&color).ok_or_else(|| ConfigError::Invalid("Invalid color".into()))?;
        sources.color = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    decks: Option<u8>,
    #[serde(default)]
    deck_floor: Option<f64>,
    #[serde(default)]
    cold_threshold: Option<u32>,
    #[serde(default)]
    color: Option<bool>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if let Some(decks) = cfg.decks {
        if !(MIN_DECKS..=MAX_DECKS).contains(&decks) {
            return Err(ConfigError::Invalid(format!(
                "decks must be {}-{}",
                MIN_DECKS, MAX_DECKS
            )));
        }
    }
    Ok(())
}

fn parse_deck_floor(decks: f64) -> Result<DeckFloor, ConfigError> {
    DeckFloor::from_decks(decks)
        .ok_or_else(|| ConfigError::Invalid("deck_floor must be 0.5 or 0.25".into()))
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
