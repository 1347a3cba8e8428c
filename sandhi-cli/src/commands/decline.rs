//! Decline command implementation

use super::GlobalArgs;
use crate::CliError;
use anyhow::Result;
use clap::Args;

/// Arguments for the decline command
#[derive(Debug, Args)]
pub struct DeclineArgs {
    /// Nominal stem, e.g. राम or लता
    pub stem: String,

    /// Gender: masculine, feminine or neuter
    #[arg(short, long)]
    pub gender: String,
}

impl DeclineArgs {
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        let processor = global.processor()?;
        let declension = processor
            .decline(&self.stem, &self.gender)
            .map_err(CliError::from)?;
        global.emit(&declension)
    }
}
