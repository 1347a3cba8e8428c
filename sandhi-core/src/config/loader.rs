use super::types::GrammarConfig;
use crate::error::SandhiError;
use std::path::Path;
use std::sync::OnceLock;

/// Grammar shipped with the crate
pub const EMBEDDED_GRAMMAR: &str = include_str!("../../configs/sanskrit.toml");

static EMBEDDED_CONFIG: OnceLock<GrammarConfig> = OnceLock::new();

/// Parse and validate grammar TOML
pub fn parse_grammar_config(source: &str, origin: &str) -> Result<GrammarConfig, SandhiError> {
    let config: GrammarConfig = toml::from_str(source).map_err(|e| {
        SandhiError::ConfigurationError(format!("Failed to parse {origin} grammar: {e}"))
    })?;
    config.validate()?;
    Ok(config)
}

/// Read a grammar file from disk
pub fn load_grammar_config(path: &Path) -> Result<GrammarConfig, SandhiError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        SandhiError::ConfigurationError(format!(
            "Failed to read file '{}': {}",
            path.display(),
            e
        ))
    })?;

    parse_grammar_config(&content, &format!("'{}'", path.display()))
}

/// The embedded grammar configuration, parsed on first access
pub fn embedded_grammar_config() -> &'static GrammarConfig {
    EMBEDDED_CONFIG.get_or_init(|| {
        parse_grammar_config(EMBEDDED_GRAMMAR, "embedded")
            .expect("Failed to load embedded grammar config")
    })
}
