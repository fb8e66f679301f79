//! Rule tuning for a game.
//!
//! Values resolve in three layers: built-in defaults, then a TOML file named
//! by `FOCUS_CONFIG`, then the `FOCUS_MAX_STACK_HEIGHT` and
//! `FOCUS_CAPTURES_TO_WIN` environment variables.
//!
//! ```toml
//! max_stack_height = 5
//! captures_to_win = 6
//! ```

use serde::Deserialize;
use std::fs;

use crate::errors::ConfigError;

pub const CONFIG_PATH_VAR: &str = "FOCUS_CONFIG";
pub const MAX_STACK_HEIGHT_VAR: &str = "FOCUS_MAX_STACK_HEIGHT";
pub const CAPTURES_TO_WIN_VAR: &str = "FOCUS_CAPTURES_TO_WIN";

/// Tallest stack allowed between moves under standard rules
pub const DEFAULT_MAX_STACK_HEIGHT: usize = 5;
/// Captures needed to win under standard rules
pub const DEFAULT_CAPTURES_TO_WIN: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleConfig {
    pub max_stack_height: usize,
    pub captures_to_win: u32,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            max_stack_height: DEFAULT_MAX_STACK_HEIGHT,
            captures_to_win: DEFAULT_CAPTURES_TO_WIN,
        }
    }
}

impl RuleConfig {
    /// Parses a TOML document on top of the defaults. Missing keys keep
    /// their default values.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(s)?;
        let mut cfg = Self::default();
        file.apply(&mut cfg, &mut ConfigSources::default());
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_stack_height == 0 {
            return Err(ConfigError::Invalid(
                "max_stack_height must be >=1".into(),
            ));
        }
        if self.captures_to_win == 0 {
            return Err(ConfigError::Invalid("captures_to_win must be >=1".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSources {
    pub max_stack_height: ValueSource,
    pub captures_to_win: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            max_stack_height: ValueSource::Default,
            captures_to_win: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: RuleConfig,
    pub sources: ConfigSources,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    max_stack_height: Option<usize>,
    #[serde(default)]
    captures_to_win: Option<u32>,
}

impl FileConfig {
    fn apply(self, cfg: &mut RuleConfig, sources: &mut ConfigSources) {
        if let Some(v) = self.max_stack_height {
            cfg.max_stack_height = v;
            sources.max_stack_height = ValueSource::File;
        }
        if let Some(v) = self.captures_to_win {
            cfg.captures_to_win = v;
            sources.captures_to_win = ValueSource::File;
        }
    }
}

/// Resolves the configuration from the process environment.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    resolve_with(|key| std::env::var(key).ok())
}

/// Resolves the configuration using `lookup` in place of the process
/// environment. Empty values are treated as unset.
pub fn resolve_with<F>(lookup: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|v| !v.is_empty());
    let mut cfg = RuleConfig::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = var(CONFIG_PATH_VAR) {
        let s = fs::read_to_string(path)?;
        let file: FileConfig = toml::from_str(&s)?;
        file.apply(&mut cfg, &mut sources);
    }

    if let Some(v) = var(MAX_STACK_HEIGHT_VAR) {
        cfg.max_stack_height = v
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", MAX_STACK_HEIGHT_VAR, v)))?;
        sources.max_stack_height = ValueSource::Env;
    }
    if let Some(v) = var(CAPTURES_TO_WIN_VAR) {
        cfg.captures_to_win = v
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", CAPTURES_TO_WIN_VAR, v)))?;
        sources.captures_to_win = ValueSource::Env;
    }

    cfg.validate()?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}
