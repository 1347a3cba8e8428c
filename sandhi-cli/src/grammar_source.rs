//! Where the CLI takes its grammar from

use sandhi_api::ConfigBuilder;
use std::path::{Path, PathBuf};

/// Source of grammar data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarSource {
    /// The grammar compiled into the binary
    Embedded,
    /// External TOML grammar file
    External(PathBuf),
}

impl GrammarSource {
    pub fn from_option(path: Option<&Path>) -> Self {
        match path {
            Some(path) => GrammarSource::External(path.to_path_buf()),
            None => GrammarSource::Embedded,
        }
    }

    /// Get the display name for the grammar source
    pub fn display_name(&self) -> String {
        match self {
            GrammarSource::Embedded => "Built-in: Sanskrit".to_string(),
            GrammarSource::External(path) => format!("External: {}", path.display()),
        }
    }

    /// Point a processor configuration at this source
    pub fn configure(&self, builder: ConfigBuilder) -> ConfigBuilder {
        match self {
            GrammarSource::Embedded => builder,
            GrammarSource::External(path) => builder.grammar_file(path),
        }
    }
}
