//! Verb paradigms
//!
//! One ending table per (lakara, pada), nine endings each, person-major.
//! Forms are built by replacing the stem's thematic vowel with the ending;
//! detection runs the same tables backwards.

use crate::config::ConjugationConfig;
use crate::error::{Result, SandhiError};
use crate::lexicon::{AffixTrie, Lexicon, RootPada};
use crate::paradigm::{decode_stem, parse_named, Endings, Vachana};
use crate::phoneme::Phoneme;
use crate::script;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Tense / mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lakara {
    /// Present
    Lat,
    /// Imperfect
    Lan,
    /// Simple future
    Lrt,
    /// Periphrastic future
    Lut,
    /// Conditional
    Lrn,
    /// Imperative
    Lot,
    /// Optative
    Vidhilin,
    /// Benedictive
    Ashirlin,
    /// Aorist
    Lun,
}

impl Lakara {
    pub const ALL: [Lakara; 9] = [
        Lakara::Lat,
        Lakara::Lan,
        Lakara::Lrt,
        Lakara::Lut,
        Lakara::Lrn,
        Lakara::Lot,
        Lakara::Vidhilin,
        Lakara::Ashirlin,
        Lakara::Lun,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Lakara::Lat => "lat",
            Lakara::Lan => "lan",
            Lakara::Lrt => "lrt",
            Lakara::Lut => "lut",
            Lakara::Lrn => "lrn",
            Lakara::Lot => "lot",
            Lakara::Vidhilin => "vidhilin",
            Lakara::Ashirlin => "ashirlin",
            Lakara::Lun => "lun",
        }
    }

    pub fn devanagari(self) -> &'static str {
        match self {
            Lakara::Lat => "लट्",
            Lakara::Lan => "लङ्",
            Lakara::Lrt => "लृट्",
            Lakara::Lut => "लुट्",
            Lakara::Lrn => "लृङ्",
            Lakara::Lot => "लोट्",
            Lakara::Vidhilin => "विधिलिङ्",
            Lakara::Ashirlin => "आशीर्लिङ्",
            Lakara::Lun => "लुङ्",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Lakara::Lat => &["लट्", "present"],
            Lakara::Lan => &["लङ्", "imperfect"],
            Lakara::Lrt => &["लृट्", "future"],
            Lakara::Lut => &["लुट्", "periphrastic-future"],
            Lakara::Lrn => &["लृङ्", "conditional"],
            Lakara::Lot => &["लोट्", "imperative"],
            Lakara::Vidhilin => &["विधिलिङ्", "optative"],
            Lakara::Ashirlin => &["आशीर्लिङ्", "benedictive"],
            Lakara::Lun => &["लुङ्", "aorist"],
        }
    }
}

impl fmt::Display for Lakara {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Lakara {
    type Err = SandhiError;

    fn from_str(s: &str) -> Result<Self> {
        parse_named(s, "lakara", &Self::ALL, |l| l.name(), |l| l.aliases())
    }
}

/// Voice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pada {
    Parasmaipada,
    Atmanepada,
}

impl Pada {
    pub const ALL: [Pada; 2] = [Pada::Parasmaipada, Pada::Atmanepada];

    pub fn name(self) -> &'static str {
        match self {
            Pada::Parasmaipada => "parasmaipada",
            Pada::Atmanepada => "atmanepada",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Pada::Parasmaipada => &["परस्मैपद", "active"],
            Pada::Atmanepada => &["आत्मनेपद", "middle"],
        }
    }
}

impl fmt::Display for Pada {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pada {
    type Err = SandhiError;

    fn from_str(s: &str) -> Result<Self> {
        parse_named(s, "pada", &Self::ALL, |p| p.name(), |p| p.aliases())
    }
}

/// Grammatical person, in traditional order (third person first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Purusha {
    Prathama,
    Madhyama,
    Uttama,
}

impl Purusha {
    pub const ALL: [Purusha; 3] = [Purusha::Prathama, Purusha::Madhyama, Purusha::Uttama];

    pub fn name(self) -> &'static str {
        match self {
            Purusha::Prathama => "prathama",
            Purusha::Madhyama => "madhyama",
            Purusha::Uttama => "uttama",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Purusha::Prathama => &["प्रथम", "third"],
            Purusha::Madhyama => &["मध्यम", "second"],
            Purusha::Uttama => &["उत्तम", "first"],
        }
    }
}

impl fmt::Display for Purusha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Purusha {
    type Err = SandhiError;

    fn from_str(s: &str) -> Result<Self> {
        parse_named(s, "purusha", &Self::ALL, |p| p.name(), |p| p.aliases())
    }
}

/// A full 3×3 table for one stem, indexed `[purusha][vachana]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paradigm {
    pub stem: String,
    pub lakara: Lakara,
    pub pada: Pada,
    pub forms: [[String; 3]; 3],
}

impl Paradigm {
    pub fn get(&self, purusha: Purusha, vachana: Vachana) -> &str {
        &self.forms[purusha.index()][vachana.index()]
    }
}

/// What a finite verb form was recognised as
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbAnalysis {
    pub form: String,
    pub stem: String,
    pub ending: String,
    pub lakara: Lakara,
    pub pada: Pada,
    pub purusha: Purusha,
    pub vachana: Vachana,
    /// Lexicon root of the stem, if known
    pub root: Option<String>,
    /// The root takes both voices, so `pada` is only the form's voice
    pub ubhayapada: bool,
}

#[derive(Debug, Clone)]
struct ConjugationTable {
    lakara: Lakara,
    pada: Pada,
    endings: Endings,
}

/// Compiled verb paradigms
#[derive(Debug, Clone)]
pub struct ConjugationTables {
    tables: Vec<ConjugationTable>,
    index: HashMap<(Lakara, Pada), usize>,
    /// Reversed endings → (table, cell)
    detector: AffixTrie<(usize, usize)>,
}

impl ConjugationTables {
    pub fn from_config(configs: &[ConjugationConfig]) -> Result<Self> {
        let mut tables = Vec::with_capacity(configs.len());
        let mut index = HashMap::new();
        let mut detector = AffixTrie::new();

        for config in configs {
            let lakara: Lakara = config
                .lakara
                .parse()
                .map_err(|e| SandhiError::ConfigurationError(format!("conjugation table: {e}")))?;
            let pada: Pada = config
                .pada
                .parse()
                .map_err(|e| SandhiError::ConfigurationError(format!("conjugation table: {e}")))?;

            let label = format!("{lakara} {pada}");
            let endings =
                Endings::compile(&label, config.stem_final.as_deref(), &config.endings, 9)?;

            let position = tables.len();
            if index.insert((lakara, pada), position).is_some() {
                return Err(SandhiError::ConfigurationError(format!(
                    "{label} table is declared twice"
                )));
            }

            for (cell, ending) in endings.cells().enumerate() {
                detector.insert(ending.iter().rev().copied(), (position, cell));
            }
            tables.push(ConjugationTable {
                lakara,
                pada,
                endings,
            });
        }

        Ok(Self {
            tables,
            index,
            detector,
        })
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Declared (lakara, pada) pairs, in declaration order
    pub fn available(&self) -> impl Iterator<Item = (Lakara, Pada)> + '_ {
        self.tables.iter().map(|t| (t.lakara, t.pada))
    }

    fn table(&self, lakara: Lakara, pada: Pada) -> Result<&ConjugationTable> {
        self.index
            .get(&(lakara, pada))
            .map(|&i| &self.tables[i])
            .ok_or_else(|| {
                SandhiError::InvalidArgument(format!("no {lakara} {pada} table in this grammar"))
            })
    }
}

/// Builds and recognises finite verb forms
#[derive(Debug, Clone, Copy)]
pub struct Conjugator<'g> {
    tables: &'g ConjugationTables,
    lexicon: &'g Lexicon,
}

impl<'g> Conjugator<'g> {
    pub fn new(tables: &'g ConjugationTables, lexicon: &'g Lexicon) -> Self {
        Self { tables, lexicon }
    }

    pub fn conjugate(&self, stem: &str, lakara: Lakara, pada: Pada) -> Result<Paradigm> {
        let phonemes = decode_stem(stem)?;
        let table = self.tables.table(lakara, pada)?;

        let forms = std::array::from_fn(|person| {
            std::array::from_fn(|number| table.endings.attach(&phonemes, person * 3 + number))
        });

        Ok(Paradigm {
            stem: script::render(&phonemes),
            lakara,
            pada,
            forms,
        })
    }

    pub fn form(
        &self,
        stem: &str,
        lakara: Lakara,
        pada: Pada,
        purusha: Purusha,
        vachana: Vachana,
    ) -> Result<String> {
        let phonemes = decode_stem(stem)?;
        let table = self.tables.table(lakara, pada)?;
        Ok(table
            .endings
            .attach(&phonemes, purusha.index() * 3 + vachana.index()))
    }

    /// Recognise a finite form by its longest known ending
    ///
    /// When several tables share that ending the first declared wins.
    pub fn detect(&self, form: &str) -> Option<VerbAnalysis> {
        let form = script::canonicalize(form.trim());
        let phonemes = script::decode(&form);
        let limit = phonemes.len().checked_sub(1)?;

        let (len, cells) = self
            .tables
            .detector
            .longest_match(phonemes.iter().rev().copied(), limit)?;
        let &(position, cell) = cells.first()?;
        let table = &self.tables.tables[position];

        let (base, ending) = phonemes.split_at(phonemes.len() - len);
        let mut stem: Vec<Phoneme> = base.to_vec();
        stem.extend(table.endings.stem_final());

        let root = self.lexicon.find_root(&stem);
        let ubhayapada = root.is_some_and(|r| r.pada == Some(RootPada::Ubhayapada));

        Some(VerbAnalysis {
            stem: script::render(&stem),
            ending: script::render(ending),
            lakara: table.lakara,
            pada: table.pada,
            purusha: Purusha::ALL[cell / 3],
            vachana: Vachana::ALL[cell % 3],
            root: root.map(|r| r.root.clone()),
            ubhayapada,
            form,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::embedded_grammar_config;
    use crate::grammar::Grammar;

    fn conjugator() -> Conjugator<'static> {
        Grammar::embedded().conjugator()
    }

    #[test]
    fn test_present_active() {
        let paradigm = conjugator()
            .conjugate("पठ", Lakara::Lat, Pada::Parasmaipada)
            .unwrap();
        assert_eq!(paradigm.get(Purusha::Prathama, Vachana::Eka), "पठति");
        assert_eq!(paradigm.get(Purusha::Prathama, Vachana::Bahu), "पठन्ति");
        assert_eq!(paradigm.get(Purusha::Madhyama, Vachana::Dvi), "पठथः");
        assert_eq!(paradigm.get(Purusha::Uttama, Vachana::Eka), "पठामि");
    }

    #[test]
    fn test_single_form() {
        let form = conjugator()
            .form(
                "गच्छ",
                Lakara::Lrt,
                Pada::Parasmaipada,
                Purusha::Prathama,
                Vachana::Eka,
            )
            .unwrap();
        assert_eq!(form, "गच्छिष्यति");

        let form = conjugator()
            .form(
                "लभ",
                Lakara::Lat,
                Pada::Atmanepada,
                Purusha::Prathama,
                Vachana::Eka,
            )
            .unwrap();
        assert_eq!(form, "लभते");
    }

    #[test]
    fn test_detect_present() {
        let analysis = conjugator().detect("पठति").unwrap();
        assert_eq!(analysis.lakara, Lakara::Lat);
        assert_eq!(analysis.pada, Pada::Parasmaipada);
        assert_eq!(analysis.purusha, Purusha::Prathama);
        assert_eq!(analysis.vachana, Vachana::Eka);
        assert_eq!(analysis.stem, "पठ");
        assert_eq!(analysis.root.as_deref(), Some("पठ्"));
        assert!(!analysis.ubhayapada);
    }

    #[test]
    fn test_detect_marks_ubhayapada() {
        let analysis = conjugator().detect("पचते").unwrap();
        assert_eq!(analysis.pada, Pada::Atmanepada);
        assert_eq!(analysis.root.as_deref(), Some("पच्"));
        assert!(analysis.ubhayapada);
    }

    #[test]
    fn test_detect_prefers_longest_ending() {
        let analysis = conjugator().detect("पठिष्यन्ति").unwrap();
        assert_eq!(analysis.lakara, Lakara::Lrt);
        assert_eq!(analysis.vachana, Vachana::Bahu);
        assert_eq!(analysis.ending, "इष्यन्ति");
    }

    #[test]
    fn test_detect_rejects_unknown() {
        assert!(conjugator().detect("").is_none());
        assert!(conjugator().detect("xyz").is_none());
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("लट्".parse::<Lakara>().unwrap(), Lakara::Lat);
        assert_eq!("VIDHILIN".parse::<Lakara>().unwrap(), Lakara::Vidhilin);
        assert_eq!("आत्मनेपद".parse::<Pada>().unwrap(), Pada::Atmanepada);
        assert_eq!("uttama".parse::<Purusha>().unwrap(), Purusha::Uttama);
        assert!(matches!(
            "perfect".parse::<Lakara>(),
            Err(SandhiError::InvalidArgument(_))
        ));
        assert!(matches!(
            "passive".parse::<Pada>(),
            Err(SandhiError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_duplicate_table_is_configuration_error() {
        let mut configs = embedded_grammar_config().conjugations.clone();
        configs.push(configs[0].clone());
        assert!(matches!(
            ConjugationTables::from_config(&configs),
            Err(SandhiError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_missing_table_is_invalid_argument() {
        let configs: Vec<_> = embedded_grammar_config()
            .conjugations
            .iter()
            .filter(|c| c.lakara != "lun")
            .cloned()
            .collect();
        let tables = ConjugationTables::from_config(&configs).unwrap();
        let lexicon = Grammar::embedded().lexicon();
        let conjugator = Conjugator::new(&tables, lexicon);
        assert!(matches!(
            conjugator.conjugate("पठ", Lakara::Lun, Pada::Parasmaipada),
            Err(SandhiError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_empty_stem_is_invalid_input() {
        assert!(matches!(
            conjugator().conjugate(" ", Lakara::Lat, Pada::Parasmaipada),
            Err(SandhiError::InvalidInput(_))
        ));
    }
}
