//! Analyze command implementation

use super::GlobalArgs;
use crate::CliError;
use anyhow::Result;
use clap::Args;
use sandhi_api::Input;
use std::path::PathBuf;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Words to analyse
    #[arg(required_unless_present = "input", conflicts_with = "input")]
    pub words: Vec<String>,

    /// Read the text to analyse from a file
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Analyse words in parallel
    #[arg(short, long)]
    pub parallel: bool,
}

impl AnalyzeArgs {
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        let processor = global.processor_with(|builder| builder.parallel(self.parallel))?;

        let input = match &self.input {
            Some(path) => {
                if !path.is_file() {
                    return Err(CliError::FileNotFound(path.display().to_string()).into());
                }
                Input::from_file(path)
            }
            None => Input::from_text(self.words.join(" ")),
        };

        let analysis = processor.analyze_text(input).map_err(CliError::from)?;
        log::info!(
            "Analysed {} words in {}ms",
            analysis.metadata.word_count,
            analysis.metadata.processing_time_ms
        );

        global.emit(&analysis)
    }
}
