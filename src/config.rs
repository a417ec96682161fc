//! Configuration for Cadastro
//!
//! Centralized configuration with sensible defaults.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::CadastroError;

/// Main configuration for a Cadastro instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// JSON file holding the whole record collection
    pub data_file: PathBuf,

    /// Seed the data file with `[]` when it does not exist yet
    pub create_if_missing: bool,

    /// How new record ids are generated
    pub id_strategy: IdStrategy,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,

    /// Directory served as static assets (the listing page)
    pub public_dir: PathBuf,
}

/// Id generation strategy for new records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// `collection length + 1` as a decimal string.
    ///
    /// Collides with an existing id once any record has been deleted.
    #[default]
    Sequential,

    /// Random v4 UUID (collision-safe)
    Uuid,
}

impl FromStr for IdStrategy {
    type Err = CadastroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" => Ok(IdStrategy::Sequential),
            "uuid" => Ok(IdStrategy::Uuid),
            other => Err(CadastroError::Config(format!(
                "unknown id strategy '{}' (expected 'sequential' or 'uuid')",
                other
            ))),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStrategy::Sequential => write!(f, "sequential"),
            IdStrategy::Uuid => write!(f, "uuid"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("./data/users.json"),
            create_if_missing: true,
            id_strategy: IdStrategy::Sequential,
            listen_addr: "127.0.0.1:3000".to_string(),
            public_dir: PathBuf::from("./public"),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Allow or forbid creating the data file on open
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.config.create_if_missing = create;
        self
    }

    /// Set the id generation strategy
    pub fn id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.config.id_strategy = strategy;
        self
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the static asset directory
    pub fn public_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.public_dir = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
