use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::verb::{Auxiliary, Class, Deck, Overrides, Verb};

/// Default path of the configuration file.
pub const DEFAULT_PATH: &str = "verbi.toml";

/// Default output directory.
pub const DEFAULT_OUT: &str = "decks/fr-it";

/// An extra verb entry declared in the configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VerbConfig {
    pub target: String,
    pub source: String,
    #[serde(default)]
    pub display: Option<String>,
    pub class: String,
    #[serde(default)]
    pub augmented: bool,
    pub auxiliary: Auxiliary,
    #[serde(default)]
    pub overrides: Overrides,
}

impl VerbConfig {
    /// Convert into a verb, resolving its class.
    pub fn to_verb(&self) -> Result<Verb, ConfigError> {
        let class = Class::from_str(&self.class)?;

        Ok(Verb {
            target: self.target.clone(),
            source: self.source.clone(),
            display: self.display.clone().unwrap_or_else(|| self.source.clone()),
            class,
            augmented: self.augmented,
            auxiliary: self.auxiliary,
            overrides: self.overrides.clone(),
        })
    }
}

/// A configuration used for a generator run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output directory.
    pub out: PathBuf,
    /// Built-in decks to generate.
    pub decks: Vec<Deck>,
    /// Extra verbs generated after the decks.
    pub verbs: Vec<VerbConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out: PathBuf::from(DEFAULT_OUT),
            decks: Deck::ALL.to_vec(),
            verbs: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from the given path, or use the default
    /// configuration if it doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let data =
                std::fs::read_to_string(path).with_context(|| anyhow!("{}", path.display()))?;
            toml::from_str(&data).with_context(|| anyhow!("{}", path.display()))?
        } else {
            tracing::debug!(path = %path.display(), "No configuration, using defaults");
            Self::default()
        };

        Ok(config)
    }

    /// Parse configuration from a string.
    pub fn parse(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }

    /// Resolve the extra verbs of the configuration.
    pub fn extra_verbs(&self) -> Result<Vec<Verb>, ConfigError> {
        self.verbs.iter().map(VerbConfig::to_verb).collect()
    }
}
