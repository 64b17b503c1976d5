//! The default `SymbolIndexer`: a contiguous ASCII range plus one sentinel.

use crate::config::AlphabetConfig;
use crate::error::BwtpackError;
use crate::traits::SymbolIndexer;

/// Maps the sentinel to index 0 and `min_char..=max_char` to `1..range_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiAlphabet {
    sentinel: char,
    min: u32,
    max: u32,
}

impl AsciiAlphabet {
    pub fn new(config: &AlphabetConfig) -> Result<Self, BwtpackError> {
        config.validate()?;
        Ok(Self {
            sentinel: config.sentinel,
            min: u32::from(config.min_char),
            max: u32::from(config.max_char),
        })
    }

    pub fn sentinel(&self) -> char {
        self.sentinel
    }
}

impl Default for AsciiAlphabet {
    fn default() -> Self {
        let config = AlphabetConfig::default();
        Self {
            sentinel: config.sentinel,
            min: u32::from(config.min_char),
            max: u32::from(config.max_char),
        }
    }
}

impl SymbolIndexer for AsciiAlphabet {
    fn index_of(&self, ch: char) -> Result<usize, BwtpackError> {
        if ch == self.sentinel {
            return Ok(0);
        }
        let code = u32::from(ch);
        if (self.min..=self.max).contains(&code) {
            Ok((code - self.min) as usize + 1)
        } else {
            Err(BwtpackError::UnsupportedSymbol(ch))
        }
    }

    fn char_at(&self, index: usize) -> Option<char> {
        if index == 0 {
            return Some(self.sentinel);
        }
        if index >= self.range_size() {
            return None;
        }
        char::from_u32(self.min + index as u32 - 1)
    }

    fn range_size(&self) -> usize {
        (self.max - self.min) as usize + 2
    }
}
