//! Samasa command implementation

use super::GlobalArgs;
use crate::CliError;
use anyhow::Result;
use clap::Args;

/// Arguments for the samasa command
#[derive(Debug, Args)]
pub struct SamasaArgs {
    /// First member
    pub first: String,

    /// Second member
    pub second: String,

    /// Compound kind (see `sandhi list kinds`)
    #[arg(short, long, default_value = "tatpurusa")]
    pub kind: String,
}

impl SamasaArgs {
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        let processor = global.processor()?;
        let compound = processor
            .samasa(&self.first, &self.second, &self.kind)
            .map_err(CliError::from)?;
        global.emit(&compound)
    }
}
