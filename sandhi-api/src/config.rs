//! High-level configuration API

use crate::error::{ApiError, Result};
use std::path::PathBuf;

/// Processor configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// External grammar file; the embedded grammar when `None`
    pub grammar_path: Option<PathBuf>,
    /// Analyse text words on the rayon pool (needs the `parallel` feature)
    pub parallel: bool,
    /// Cap on returned split candidates
    pub max_split_candidates: Option<usize>,
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Load the grammar from a TOML file instead of the embedded one
    pub fn grammar_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.grammar_path = Some(path.into());
        self
    }

    /// Toggle parallel text analysis
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Limit the number of split candidates returned
    pub fn max_split_candidates(mut self, limit: usize) -> Self {
        self.config.max_split_candidates = Some(limit);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.config.max_split_candidates == Some(0) {
            return Err(ApiError::Config(
                "max_split_candidates must be at least 1".to_string(),
            ));
        }

        if let Some(path) = &self.config.grammar_path {
            if !path.is_file() {
                return Err(ApiError::Config(format!(
                    "grammar file '{}' does not exist",
                    path.display()
                )));
            }
        }

        if self.config.parallel && !cfg!(feature = "parallel") {
            tracing::debug!("parallel analysis requested without the parallel feature");
        }

        Ok(self.config)
    }
}
