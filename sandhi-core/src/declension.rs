//! Noun paradigms

use crate::config::DeclensionConfig;
use crate::error::{Result, SandhiError};
use crate::paradigm::{decode_stem, parse_named, Endings, Vachana};
use crate::script;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Masculine, Gender::Feminine, Gender::Neuter];

    pub fn name(self) -> &'static str {
        match self {
            Gender::Masculine => "masculine",
            Gender::Feminine => "feminine",
            Gender::Neuter => "neuter",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Gender::Masculine => &["m", "पुंलिङ्ग", "पुल्लिङ्ग"],
            Gender::Feminine => &["f", "स्त्रीलिङ्ग"],
            Gender::Neuter => &["n", "नपुंसकलिङ्ग"],
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gender {
    type Err = SandhiError;

    fn from_str(s: &str) -> Result<Self> {
        parse_named(s, "gender", &Self::ALL, |g| g.name(), |g| g.aliases())
    }
}

/// The seven cases plus the vocative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Vibhakti {
    Prathama,
    Dvitiya,
    Tritiya,
    Chaturthi,
    Panchami,
    Shashthi,
    Saptami,
    Sambodhana,
}

impl Vibhakti {
    pub const ALL: [Vibhakti; 8] = [
        Vibhakti::Prathama,
        Vibhakti::Dvitiya,
        Vibhakti::Tritiya,
        Vibhakti::Chaturthi,
        Vibhakti::Panchami,
        Vibhakti::Shashthi,
        Vibhakti::Saptami,
        Vibhakti::Sambodhana,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Vibhakti::Prathama => "prathama",
            Vibhakti::Dvitiya => "dvitiya",
            Vibhakti::Tritiya => "tritiya",
            Vibhakti::Chaturthi => "chaturthi",
            Vibhakti::Panchami => "panchami",
            Vibhakti::Shashthi => "shashthi",
            Vibhakti::Saptami => "saptami",
            Vibhakti::Sambodhana => "sambodhana",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Vibhakti::Prathama => &["nominative", "प्रथमा"],
            Vibhakti::Dvitiya => &["accusative", "द्वितीया"],
            Vibhakti::Tritiya => &["instrumental", "तृतीया"],
            Vibhakti::Chaturthi => &["dative", "चतुर्थी"],
            Vibhakti::Panchami => &["ablative", "पञ्चमी"],
            Vibhakti::Shashthi => &["genitive", "षष्ठी"],
            Vibhakti::Saptami => &["locative", "सप्तमी"],
            Vibhakti::Sambodhana => &["vocative", "सम्बोधन"],
        }
    }
}

impl fmt::Display for Vibhakti {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Vibhakti {
    type Err = SandhiError;

    fn from_str(s: &str) -> Result<Self> {
        parse_named(s, "vibhakti", &Self::ALL, |v| v.name(), |v| v.aliases())
    }
}

/// Declined forms, indexed `[vibhakti][vachana]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declension {
    pub stem: String,
    pub gender: Gender,
    pub forms: [[String; 3]; 8],
}

impl Declension {
    pub fn get(&self, vibhakti: Vibhakti, vachana: Vachana) -> &str {
        &self.forms[vibhakti.index()][vachana.index()]
    }
}

/// Compiled noun paradigms, one per gender
#[derive(Debug, Clone)]
pub struct DeclensionTables {
    tables: HashMap<Gender, Endings>,
}

impl DeclensionTables {
    pub fn from_config(configs: &[DeclensionConfig]) -> Result<Self> {
        let mut tables = HashMap::new();

        for config in configs {
            let gender: Gender = config
                .gender
                .parse()
                .map_err(|e| SandhiError::ConfigurationError(format!("declension table: {e}")))?;

            if config.endings.len() != Vibhakti::ALL.len() {
                return Err(SandhiError::ConfigurationError(format!(
                    "{gender}: expected 8 cases, found {}",
                    config.endings.len()
                )));
            }
            let flat: Vec<String> = config.endings.iter().flatten().cloned().collect();
            let endings = Endings::compile(
                gender.name(),
                config.stem_final.as_deref(),
                &flat,
                Vibhakti::ALL.len() * 3,
            )?;

            if tables.insert(gender, endings).is_some() {
                return Err(SandhiError::ConfigurationError(format!(
                    "{gender} declension is declared twice"
                )));
            }
        }

        Ok(Self { tables })
    }

    pub fn genders(&self) -> impl Iterator<Item = Gender> + '_ {
        Gender::ALL.into_iter().filter(|g| self.tables.contains_key(g))
    }

    fn table(&self, gender: Gender) -> Result<&Endings> {
        self.tables.get(&gender).ok_or_else(|| {
            SandhiError::InvalidArgument(format!("no {gender} declension in this grammar"))
        })
    }
}

/// Builds noun forms
#[derive(Debug, Clone, Copy)]
pub struct Decliner<'g> {
    tables: &'g DeclensionTables,
}

impl<'g> Decliner<'g> {
    pub fn new(tables: &'g DeclensionTables) -> Self {
        Self { tables }
    }

    pub fn decline(&self, stem: &str, gender: Gender) -> Result<Declension> {
        let phonemes = decode_stem(stem)?;
        let table = self.tables.table(gender)?;

        let forms = std::array::from_fn(|case| {
            std::array::from_fn(|number| table.attach(&phonemes, case * 3 + number))
        });

        Ok(Declension {
            stem: script::render(&phonemes),
            gender,
            forms,
        })
    }

    pub fn form(
        &self,
        stem: &str,
        gender: Gender,
        vibhakti: Vibhakti,
        vachana: Vachana,
    ) -> Result<String> {
        let phonemes = decode_stem(stem)?;
        let table = self.tables.table(gender)?;
        Ok(table.attach(&phonemes, vibhakti.index() * 3 + vachana.index()))
    }
}
