//! Configuration for the `rs-markov` binary.
//!
//! Values are resolved in this order:
//! 1. command line flags
//! 2. the TOML file given with `--config`
//! 3. built-in defaults
//!
//! A file may not set both `unbounded = true` and `[generation] max_steps`.
//!
//! ```toml
//! corpus = "green-eggs.txt"
//! seed = 42
//! count = 3
//! unbounded = false
//!
//! [generation]
//! max_steps = 500
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use rs_markov_core::model::generation_input::GenerationInput;
use serde::Deserialize;

use crate::args::Args;

/// Corpus read when none is given.
pub const DEFAULT_CORPUS: &str = "green-eggs.txt";

/// Step limit applied unless `--unbounded` (or `unbounded = true`) is set.
pub const DEFAULT_MAX_STEPS: usize = 10_000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid setting: {0}")]
    Invalid(String),
}

/// Contents of the configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub corpus: Option<PathBuf>,
    pub seed: Option<u64>,
    pub count: Option<usize>,
    pub unbounded: bool,
    pub generation: GenerationInput,
}

impl Config {
    /// Loads the file at `path`, or returns defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Final settings for a run, after merging flags, file and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub corpus: PathBuf,
    pub seed: Option<u64>,
    pub count: usize,
    pub input: GenerationInput,
}

impl Settings {
    pub fn resolve(args: &Args, config: Config) -> Result<Self, ConfigError> {
        let corpus = args
            .corpus
            .clone()
            .or(config.corpus)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CORPUS));

        let count = args.count.or(config.count).unwrap_or(1);
        if count == 0 {
            return Err(ConfigError::Invalid("count must be >= 1".to_owned()));
        }

        if config.unbounded && config.generation.max_steps().is_some() {
            return Err(ConfigError::Invalid(
                "unbounded = true conflicts with [generation] max_steps".to_owned(),
            ));
        }

        let mut input = config.generation;
        let invalid = |e: rs_markov_core::MarkovError| ConfigError::Invalid(e.to_string());
        input.validate().map_err(invalid)?;
        if args.unbounded {
            input.clear_max_steps();
        } else if let Some(max_steps) = args.max_steps {
            input.set_max_steps(max_steps).map_err(invalid)?;
        } else if input.max_steps().is_none() && !config.unbounded {
            input.set_max_steps(DEFAULT_MAX_STEPS).map_err(invalid)?;
        }

        Ok(Self {
            corpus,
            seed: args.seed.or(config.seed),
            count,
            input,
        })
    }
}
