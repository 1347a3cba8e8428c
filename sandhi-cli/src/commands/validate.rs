//! Validate command implementation

use super::GlobalArgs;
use crate::output::ValidationReport;
use crate::CliError;
use anyhow::Result;
use clap::Args;
use sandhi_core::Grammar;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the grammar file to validate
    #[arg(short = 'c', long = "config", value_name = "FILE", required = true)]
    pub grammar_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        let report = self.validate()?;
        global.emit(&report)
    }

    fn validate(&self) -> Result<ValidationReport> {
        if !self.grammar_config.is_file() {
            return Err(CliError::FileNotFound(self.grammar_config.display().to_string()).into());
        }

        log::info!("Validating grammar: {}", self.grammar_config.display());
        let grammar = Grammar::from_file(&self.grammar_config).map_err(|e| {
            log::warn!("✗ {} is invalid", self.grammar_config.display());
            CliError::GrammarError(e.to_string())
        })?;

        Ok(ValidationReport {
            source: self.grammar_config.display().to_string(),
            code: grammar.metadata().code.clone(),
            name: grammar.metadata().name.clone(),
            rules: grammar.rules().len(),
            upasargas: grammar.lexicon().upasargas().len(),
            roots: grammar.lexicon().roots().len(),
            conjugation_tables: grammar.conjugation_tables().len(),
            declension_genders: grammar.declension_tables().genders().count(),
        })
    }
}
