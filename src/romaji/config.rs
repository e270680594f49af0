use std::collections::BTreeMap;

use serde::Deserialize;

use crate::unicode;

#[derive(Deserialize)]
struct KanaConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("non-kana key: {0}")]
    NonKanaKey(String),
    #[error("non-ASCII value for key {0}")]
    NonAsciiValue(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("romaji table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<kana, romaji>`.
///
/// Keys must be one or two hiragana characters (the long-vowel mark ー
/// counts); values must be non-empty ASCII.
pub fn parse_kana_toml(toml_str: &str) -> Result<BTreeMap<String, String>, TableError> {
    let config: KanaConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(TableError::Empty);
    }

    for (key, value) in &config.mappings {
        let len = key.chars().count();
        let kana_only = key
            .chars()
            .all(|c| unicode::is_hiragana(c) || unicode::is_prolonged_mark(c));
        if len == 0 || len > 2 || !kana_only {
            return Err(TableError::NonKanaKey(key.clone()));
        }
        if value.is_empty() {
            return Err(TableError::EmptyValue(key.clone()));
        }
        if !value.is_ascii() {
            return Err(TableError::NonAsciiValue(key.clone()));
        }
    }

    Ok(config.mappings)
}
