// In: src/config.rs

//! The single source of truth for all encoder configuration.
//!
//! `EncoderConfig` is created once at the application boundary (typically
//! from a JSON document) and then shared read-only by the `Encoder` through an
//! `Arc<EncoderConfig>`. Every field has a serde default, so an empty JSON
//! object is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::BwtpackError;

/// Widest code point the fixed 7-bit symbol field of the table stream can carry.
pub const MAX_SYMBOL_CODE_POINT: u32 = 0x7F;

//==================================================================================
// I. Alphabet Configuration
//==================================================================================

/// Describes the working alphabet: a contiguous character range plus one
/// sentinel (terminator) character that sorts strictly below it.
///
/// The sentinel always maps to index 0; `min_char..=max_char` map to
/// `1..range_size`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct AlphabetConfig {
    #[serde(default = "default_sentinel")]
    pub sentinel: char,

    #[serde(default = "default_min_char")]
    pub min_char: char,

    #[serde(default = "default_max_char")]
    pub max_char: char,
}

impl Default for AlphabetConfig {
    fn default() -> Self {
        Self {
            sentinel: default_sentinel(),
            min_char: default_min_char(),
            max_char: default_max_char(),
        }
    }
}

impl AlphabetConfig {
    /// Checks the ordering and width constraints of the alphabet.
    pub fn validate(&self) -> Result<(), BwtpackError> {
        if self.min_char > self.max_char {
            return Err(BwtpackError::InvalidConfig(format!(
                "min_char {:?} sorts above max_char {:?}",
                self.min_char, self.max_char
            )));
        }
        if self.sentinel >= self.min_char {
            return Err(BwtpackError::InvalidConfig(format!(
                "sentinel {:?} must sort below min_char {:?}",
                self.sentinel, self.min_char
            )));
        }
        if u32::from(self.max_char) > MAX_SYMBOL_CODE_POINT {
            return Err(BwtpackError::InvalidConfig(format!(
                "max_char {:?} does not fit the 7-bit symbol field",
                self.max_char
            )));
        }
        Ok(())
    }
}

fn default_sentinel() -> char {
    '$'
}

fn default_min_char() -> char {
    '%'
}

fn default_max_char() -> char {
    '~'
}

//==================================================================================
// II. The Unified EncoderConfig
//==================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct EncoderConfig {
    /// The alphabet every input character must belong to.
    #[serde(default)]
    pub alphabet: AlphabetConfig,

    /// If true, the encoder logs an `EncodingStats` summary after each encode.
    #[serde(default)]
    pub enable_stats_collection: bool,
}

impl EncoderConfig {
    /// Parses and validates a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, BwtpackError> {
        let config: EncoderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BwtpackError> {
        self.alphabet.validate()
    }
}
