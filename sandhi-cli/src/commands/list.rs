//! List command implementation

use super::{GlobalArgs, ListCommands};
use crate::output::{ListEntry, ListReport};
use anyhow::Result;
use sandhi_core::{CompoundKind, Lakara};

pub fn execute(subcommand: &ListCommands, global: &GlobalArgs) -> Result<()> {
    let entries = match subcommand {
        ListCommands::Kinds => CompoundKind::ALL
            .iter()
            .map(|kind| ListEntry {
                name: kind.name().to_string(),
                detail: kind.devanagari().to_string(),
            })
            .collect(),
        ListCommands::Lakaras => Lakara::ALL
            .iter()
            .map(|lakara| ListEntry {
                name: lakara.name().to_string(),
                detail: lakara.devanagari().to_string(),
            })
            .collect(),
        ListCommands::Rules => {
            let processor = global.processor()?;
            processor
                .grammar()
                .rules()
                .iter()
                .map(|rule| ListEntry {
                    name: rule.id.to_string(),
                    detail: format!("{:<10} {}", rule.kind.name(), rule.describe()),
                })
                .collect()
        }
    };

    global.emit(&ListReport(entries))
}
