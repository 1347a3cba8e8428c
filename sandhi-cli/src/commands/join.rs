//! Join command implementation

use super::GlobalArgs;
use crate::CliError;
use anyhow::Result;
use clap::Args;

/// Arguments for the join command
#[derive(Debug, Args)]
pub struct JoinArgs {
    /// Word ending at the junction
    pub left: String,

    /// Word starting at the junction
    pub right: String,
}

impl JoinArgs {
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        let processor = global.processor()?;
        let result = processor
            .join(&self.left, &self.right)
            .map_err(CliError::from)?;
        global.emit(&result)
    }
}
