//! Conjugate command implementation

use super::GlobalArgs;
use crate::CliError;
use anyhow::Result;
use clap::Args;

/// Arguments for the conjugate command
#[derive(Debug, Args)]
pub struct ConjugateArgs {
    /// Present stem, e.g. पठ or गच्छ
    pub stem: String,

    /// Tense or mood (see `sandhi list lakaras`)
    #[arg(short, long, default_value = "lat")]
    pub lakara: String,

    /// Voice: parasmaipada or atmanepada
    #[arg(short, long, default_value = "parasmaipada")]
    pub pada: String,
}

impl ConjugateArgs {
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        let processor = global.processor()?;
        let paradigm = processor
            .conjugate(&self.stem, &self.lakara, &self.pada)
            .map_err(CliError::from)?;
        global.emit(&paradigm)
    }
}
