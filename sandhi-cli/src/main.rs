use anyhow::Result;
use clap::Parser;
use sandhi_cli::commands::Cli;

fn main() -> Result<()> {
    Cli::parse().execute()
}
