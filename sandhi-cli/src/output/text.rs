//! Text output formatter

use super::{ListReport, Report, SplitReport, ValidationReport};
use anyhow::Result;
use sandhi_api::TextAnalysis;
use sandhi_core::{
    Compound, Declension, Decomposition, MergeResult, Paradigm, Purusha, Vachana, Vibhakti,
};
use std::io::Write;

impl Report for MergeResult {
    fn write_text(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", self.merged)?;
        match &self.rule_used {
            Some(rule) => writeln!(out, "  rule: {rule}")?,
            None => writeln!(out, "  rule: none (concatenation)")?,
        }
        Ok(())
    }
}

impl Report for SplitReport {
    fn write_text(&self, out: &mut dyn Write) -> Result<()> {
        if self.candidates.is_empty() {
            writeln!(out, "{}: no split found", self.word)?;
            return Ok(());
        }
        for (rank, candidate) in self.candidates.iter().enumerate() {
            writeln!(
                out,
                "{:>3}. {} + {}  [{}]",
                rank + 1,
                candidate.left,
                candidate.right,
                candidate.rule_used
            )?;
        }
        Ok(())
    }
}

fn write_decomposition(out: &mut dyn Write, word: &str, d: &Decomposition) -> Result<()> {
    if d.is_empty() {
        writeln!(out, "{word}: no analysis")?;
        return Ok(());
    }

    let mut parts = Vec::new();
    let fields = [
        ("prefix", &d.prefix),
        ("stem", &d.stem),
        ("root", &d.root),
        ("suffix", &d.suffix),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            parts.push(format!("{label}={value}"));
        }
    }
    if !d.suffix_pools.is_empty() {
        let pools: Vec<&str> = d.suffix_pools.iter().map(|p| p.name()).collect();
        parts.push(format!("pools={}", pools.join(",")));
    }
    writeln!(out, "{word}: {}", parts.join(" "))?;

    for split in &d.residual_splits {
        writeln!(out, "    {} + {}  [{}]", split.left, split.right, split.rule_used)?;
    }
    Ok(())
}

impl Report for TextAnalysis {
    fn write_text(&self, out: &mut dyn Write) -> Result<()> {
        for word in &self.words {
            write_decomposition(out, &word.word, &word.decomposition)?;
        }

        let unanalysed = self.unanalysed().count();
        if unanalysed > 0 {
            writeln!(out, "{unanalysed} of {} words unanalysed", self.words.len())?;
        }
        Ok(())
    }
}

impl Report for Compound {
    fn write_text(&self, out: &mut dyn Write) -> Result<()> {
        match self {
            Compound::Formed(result) => result.write_text(out),
            Compound::NotApplicable { reason } => {
                writeln!(out, "not applicable: {reason}")?;
                Ok(())
            }
        }
    }
}

fn write_header(out: &mut dyn Write, title: &str) -> Result<()> {
    let columns: Vec<&str> = Vachana::ALL.iter().map(|v| v.name()).collect();
    writeln!(out, "{title}")?;
    writeln!(out, "\t{}", columns.join("\t"))?;
    Ok(())
}

impl Report for Paradigm {
    fn write_text(&self, out: &mut dyn Write) -> Result<()> {
        write_header(out, &format!("{} ({}, {})", self.stem, self.lakara, self.pada))?;
        for purusha in Purusha::ALL {
            let row: Vec<&str> = Vachana::ALL
                .iter()
                .map(|&vachana| self.get(purusha, vachana))
                .collect();
            writeln!(out, "{purusha}\t{}", row.join("\t"))?;
        }
        Ok(())
    }
}

impl Report for Declension {
    fn write_text(&self, out: &mut dyn Write) -> Result<()> {
        write_header(out, &format!("{} ({})", self.stem, self.gender))?;
        for vibhakti in Vibhakti::ALL {
            let row: Vec<&str> = Vachana::ALL
                .iter()
                .map(|&vachana| self.get(vibhakti, vachana))
                .collect();
            writeln!(out, "{vibhakti}\t{}", row.join("\t"))?;
        }
        Ok(())
    }
}

impl Report for ValidationReport {
    fn write_text(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "✓ Grammar is valid!")?;
        writeln!(out, "  Source: {}", self.source)?;
        writeln!(out, "  Code: {}", self.code)?;
        writeln!(out, "  Name: {}", self.name)?;
        writeln!(out, "  Rules: {}", self.rules)?;
        writeln!(out, "  Upasargas: {}", self.upasargas)?;
        writeln!(out, "  Roots: {}", self.roots)?;
        writeln!(out, "  Conjugation tables: {}", self.conjugation_tables)?;
        writeln!(out, "  Declension genders: {}", self.declension_genders)?;
        Ok(())
    }
}

impl Report for ListReport {
    fn write_text(&self, out: &mut dyn Write) -> Result<()> {
        for entry in &self.0 {
            writeln!(out, "  {:<16} {}", entry.name, entry.detail)?;
        }
        Ok(())
    }
}
