//! Output formatting module

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

pub mod json;
pub mod text;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// A command result that can be printed in every format
pub trait Report: Serialize {
    /// Write the human-readable rendering
    fn write_text(&self, out: &mut dyn Write) -> Result<()>;
}

/// Print a report in the requested format
pub fn emit<R: Report, W: Write>(report: &R, format: OutputFormat, mut out: W) -> Result<()> {
    match format {
        OutputFormat::Text => report.write_text(&mut out)?,
        OutputFormat::Json => json::write_json(report, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

/// Ranked split candidates for one word
#[derive(Debug, Serialize)]
pub struct SplitReport {
    pub word: String,
    pub candidates: Vec<sandhi_core::SplitCandidate>,
}

/// Summary of a grammar file that loaded cleanly
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub source: String,
    pub code: String,
    pub name: String,
    pub rules: usize,
    pub upasargas: usize,
    pub roots: usize,
    pub conjugation_tables: usize,
    pub declension_genders: usize,
}

/// One row of a `list` command
#[derive(Debug, Serialize)]
pub struct ListEntry {
    pub name: String,
    pub detail: String,
}

/// Rows printed by the `list` command
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ListReport(pub Vec<ListEntry>);
