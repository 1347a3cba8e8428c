//! Split command implementation

use super::GlobalArgs;
use crate::output::SplitReport;
use anyhow::Result;
use clap::Args;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Word to split
    pub word: String,

    /// Show at most this many candidates
    #[arg(short = 'n', long, value_name = "N")]
    pub limit: Option<usize>,
}

impl SplitArgs {
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        let processor = global.processor_with(|builder| match self.limit {
            Some(limit) => builder.max_split_candidates(limit),
            None => builder,
        })?;

        let candidates = processor.split(&self.word);
        log::info!("{} split candidates for {}", candidates.len(), self.word);

        global.emit(&SplitReport {
            word: self.word.clone(),
            candidates,
        })
    }
}
