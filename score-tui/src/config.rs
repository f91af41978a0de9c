use std::{fs, path::Path};

use anyhow::Context;
use itertools::Itertools;
use score_types::{Play, Team, ALL_PLAYS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Keys the front end handles itself; plays cannot be bound to them.
pub const RESERVED_KEYS: [char; 6] = ['q', 'n', 'u', 'c', 'h', 'a'];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayBinding {
    pub key: char,
    pub label: String,
    pub points: i32,
}

impl PlayBinding {
    fn for_play(play: Play) -> Self {
        let key = match play {
            Play::Touchdown => 't',
            Play::FieldGoal => 'f',
            Play::TwoPoint => '2',
            Play::ExtraPoint => 'x',
        };
        Self {
            key,
            label: play.label().to_owned(),
            points: play.points(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub plays: Vec<PlayBinding>,
    pub start_team: Team,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            plays: ALL_PLAYS.into_iter().map(PlayBinding::for_play).collect(),
            start_team: Team::Home,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("key '{0}' is bound to more than one play")]
    DuplicateKey(char),
    #[error("key '{0}' is reserved")]
    ReservedKey(char),
}

impl Config {
    pub fn from_ron(source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_ron(&source).with_context(|| format!("loading config {}", path.display()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(binding) = self
            .plays
            .iter()
            .find(|binding| RESERVED_KEYS.contains(&binding.key))
        {
            return Err(ConfigError::ReservedKey(binding.key));
        }
        if let Some(key) = self.plays.iter().map(|binding| binding.key).duplicates().next() {
            return Err(ConfigError::DuplicateKey(key));
        }
        Ok(())
    }

    pub fn binding(&self, key: char) -> Option<&PlayBinding> {
        self.plays.iter().find(|binding| binding.key == key)
    }
}
