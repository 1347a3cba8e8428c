//! CLI command implementations

use crate::grammar_source::GrammarSource;
use crate::output::{self, OutputFormat, Report};
use crate::CliError;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use sandhi_api::{Config, ConfigBuilder, Processor};
use std::io;
use std::path::PathBuf;

pub mod analyze;
pub mod conjugate;
pub mod decline;
pub mod join;
pub mod list;
pub mod samasa;
pub mod split;
pub mod validate;

/// Sanskrit sandhi, sandhi-viched and word analysis
#[derive(Debug, Parser)]
#[command(name = "sandhi", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        self.global.init_logging();
        log::debug!("Arguments: {:?}", self);

        match &self.command {
            Commands::Join(args) => args.execute(&self.global),
            Commands::Split(args) => args.execute(&self.global),
            Commands::Analyze(args) => args.execute(&self.global),
            Commands::Samasa(args) => args.execute(&self.global),
            Commands::Conjugate(args) => args.execute(&self.global),
            Commands::Decline(args) => args.execute(&self.global),
            Commands::Validate(args) => args.execute(&self.global),
            Commands::List { subcommand } => list::execute(subcommand, &self.global),
        }
    }
}

/// Flags shared by every command
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Grammar file to use instead of the built-in one
    #[arg(long, global = true, value_name = "FILE", env = "SANDHI_GRAMMAR")]
    pub grammar: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl GlobalArgs {
    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }

    pub fn grammar_source(&self) -> GrammarSource {
        GrammarSource::from_option(self.grammar.as_deref())
    }

    /// Build a processor, letting the command adjust its configuration first
    pub fn processor_with(
        &self,
        configure: impl FnOnce(ConfigBuilder) -> ConfigBuilder,
    ) -> Result<Processor> {
        let source = self.grammar_source();
        log::info!("Using grammar: {}", source.display_name());

        let config = configure(source.configure(Config::builder()))
            .build()
            .map_err(CliError::from)?;
        Ok(Processor::with_config(config).map_err(CliError::from)?)
    }

    pub fn processor(&self) -> Result<Processor> {
        self.processor_with(|builder| builder)
    }

    /// Print a report to stdout in the selected format
    pub fn emit<R: Report>(&self, report: &R) -> Result<()> {
        output::emit(report, self.format, io::stdout().lock())
    }
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Merge two words at their boundary
    Join(join::JoinArgs),

    /// List the ways a word can be split at a sandhi junction
    Split(split::SplitArgs),

    /// Decompose words into prefix, stem, root and suffix
    Analyze(analyze::AnalyzeArgs),

    /// Form a compound from two members
    Samasa(samasa::SamasaArgs),

    /// Print a verb paradigm
    Conjugate(conjugate::ConjugateArgs),

    /// Print a noun paradigm
    Decline(decline::DeclineArgs),

    /// Validate a grammar file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// Compound kinds accepted by `samasa --kind`
    Kinds,

    /// Rules of the active grammar
    Rules,

    /// Tenses and moods accepted by `conjugate --lakara`
    Lakaras,
}
