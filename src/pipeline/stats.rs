//! Size statistics for one encode, for diagnostics and logging.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BwtpackError;
use crate::pipeline::EncodedOutput;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EncodingStats {
    pub input_symbols: usize,
    pub distinct_symbols: usize,
    pub run_count: usize,
    pub count_bits: usize,
    pub text_bits: usize,
    pub table_bits: usize,
    pub total_bits: usize,
    /// `total_bits / input_symbols`, 0.0 for empty input.
    pub bits_per_symbol: f64,
}

impl EncodingStats {
    pub fn new(
        input_symbols: usize,
        distinct_symbols: usize,
        run_count: usize,
        output: &EncodedOutput,
    ) -> Self {
        let total_bits = output.total_bits();
        let bits_per_symbol = if input_symbols == 0 {
            0.0
        } else {
            total_bits as f64 / input_symbols as f64
        };
        Self {
            input_symbols,
            distinct_symbols,
            run_count,
            count_bits: output.count_stream().len(),
            text_bits: output.text_stream().len(),
            table_bits: output.table_stream().len(),
            total_bits,
            bits_per_symbol,
        }
    }

    pub fn to_json(&self) -> Result<String, BwtpackError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for EncodingStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "encoded {} symbols ({} distinct, {} runs) into {} bits [count {} | text {} | table {}], {:.3} bits/symbol",
            self.input_symbols,
            self.distinct_symbols,
            self.run_count,
            self.total_bits,
            self.count_bits,
            self.text_bits,
            self.table_bits,
            self.bits_per_symbol
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        let stats = EncodingStats::new(0, 0, 0, &EncodedOutput::default());
        assert_eq!(stats.total_bits, 0);
        assert_eq!(stats.bits_per_symbol, 0.0);
    }

    #[test]
    fn test_stats_json_fields() {
        let stats = EncodingStats::new(0, 0, 0, &EncodedOutput::default());
        let json = stats.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["input_symbols"], 0);
        assert_eq!(value["total_bits"], 0);
        assert!(value.get("bits_per_symbol").is_some());
    }
}
