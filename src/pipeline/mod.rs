// In: src/pipeline/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Encoder Pipeline
// ====================================================================================
//
// The pipeline is the public face of the library. It owns the configuration, the
// alphabet and the integer coder, and drives the pure kernels in a fixed order:
//
//   1. [SymbolIndexer]        text  -> dense symbol indices
//   2. [FrequencyTable]       indices -> counts, distinct count
//   3. [CodeTable::build]     counts -> prefix codewords
//   4. [run_length::encode]   indices + codewords -> text stream
//   5. [code_table::serialize] codewords -> table stream
//
// Steps 4 and 5 only read the finished code table, so their order is free.
// The result is three independent bit streams; framing them together is left
// to the caller.
//
// ====================================================================================

use std::sync::Arc;

use crate::config::EncoderConfig;
use crate::error::BwtpackError;
use crate::kernels::bitseq::BitSequence;
use crate::kernels::elias::EliasOmega;
use crate::kernels::frequency::FrequencyTable;
use crate::kernels::prefix_code::CodeTable;
use crate::kernels::{code_table, run_length};
use crate::traits::{IntegerCoder, SymbolIndexer};
use crate::types::AsciiAlphabet;

pub mod stats;

pub use self::stats::EncodingStats;

//==================================================================================
// 1. Encoded Output
//==================================================================================

/// The three output streams of one encode. Each is written exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedOutput {
    count_stream: BitSequence,
    text_stream: BitSequence,
    table_stream: BitSequence,
}

impl EncodedOutput {
    /// Integer-coded number of distinct symbols.
    pub fn count_stream(&self) -> &BitSequence {
        &self.count_stream
    }

    /// `(run length, codeword)` pairs covering the whole input.
    pub fn text_stream(&self) -> &BitSequence {
        &self.text_stream
    }

    /// `(symbol, codeword length, codeword)` entries in ascending index order.
    pub fn table_stream(&self) -> &BitSequence {
        &self.table_stream
    }

    /// Returns `(count_stream, text_stream, table_stream)`.
    pub fn into_parts(self) -> (BitSequence, BitSequence, BitSequence) {
        (self.count_stream, self.text_stream, self.table_stream)
    }

    pub fn total_bits(&self) -> usize {
        self.count_stream.len() + self.text_stream.len() + self.table_stream.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_bits() == 0
    }
}

//==================================================================================
// 2. The Encoder
//==================================================================================

/// Configured encoder. Cheap to share; `encode` takes `&self`.
pub struct Encoder {
    config: Arc<EncoderConfig>,
    alphabet: AsciiAlphabet,
    coder: Box<dyn IntegerCoder + Send + Sync>,
}

impl Default for Encoder {
    fn default() -> Self {
        Self {
            config: Arc::new(EncoderConfig::default()),
            alphabet: AsciiAlphabet::default(),
            coder: Box::new(EliasOmega),
        }
    }
}

impl Encoder {
    /// Validates `config` and builds an encoder using Elias omega integers.
    pub fn new(config: EncoderConfig) -> Result<Self, BwtpackError> {
        let alphabet = AsciiAlphabet::new(&config.alphabet)?;
        Ok(Self {
            config: Arc::new(config),
            alphabet,
            coder: Box::new(EliasOmega),
        })
    }

    /// Replaces the integer coder used for counts, run lengths and codeword lengths.
    pub fn with_coder<C>(mut self, coder: C) -> Self
    where
        C: IntegerCoder + Send + Sync + 'static,
    {
        self.coder = Box::new(coder);
        self
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    pub fn alphabet(&self) -> &AsciiAlphabet {
        &self.alphabet
    }

    /// Encodes `text` into its three streams.
    ///
    /// An empty text yields three empty streams.
    ///
    /// # Errors
    /// `UnsupportedSymbol` for the first character outside the alphabet.
    pub fn encode(&self, text: &str) -> Result<EncodedOutput, BwtpackError> {
        let (output, stats) = self.encode_inner(text, self.config.enable_stats_collection)?;
        if let Some(stats) = stats {
            log::info!("{}", stats);
        }
        Ok(output)
    }

    /// Like `encode`, also returning size statistics.
    pub fn encode_with_stats(
        &self,
        text: &str,
    ) -> Result<(EncodedOutput, EncodingStats), BwtpackError> {
        let (output, stats) = self.encode_inner(text, true)?;
        let stats = stats.ok_or_else(|| {
            BwtpackError::InternalError("stats requested but not collected".to_string())
        })?;
        Ok((output, stats))
    }

    /// Builds only the code table for `text`.
    pub fn code_table(&self, text: &str) -> Result<CodeTable, BwtpackError> {
        let symbols = self.alphabet.index_text(text)?;
        let frequencies = FrequencyTable::build(&symbols, self.alphabet.range_size())?;
        Ok(CodeTable::build(&frequencies))
    }

    fn encode_inner(
        &self,
        text: &str,
        collect_stats: bool,
    ) -> Result<(EncodedOutput, Option<EncodingStats>), BwtpackError> {
        let symbols = self.alphabet.index_text(text)?;
        let (output, distinct) = self.encode_symbols(&symbols)?;

        let stats = collect_stats.then(|| {
            let run_count = run_length::runs(&symbols).count();
            EncodingStats::new(symbols.len(), distinct, run_count, &output)
        });
        Ok((output, stats))
    }

    fn encode_symbols(&self, symbols: &[usize]) -> Result<(EncodedOutput, usize), BwtpackError> {
        if symbols.is_empty() {
            log::debug!("encode: empty input, emitting three empty streams");
            return Ok((EncodedOutput::default(), 0));
        }

        let frequencies = FrequencyTable::build(symbols, self.alphabet.range_size())?;
        let distinct = frequencies.distinct_count();
        let count_stream = self.coder.encode(distinct as u64)?;

        let table = CodeTable::build(&frequencies);
        log::debug!(
            "encode: {} symbols, {} distinct, weighted code length {}",
            symbols.len(),
            distinct,
            table.weighted_length(&frequencies)
        );

        let text_stream = run_length::encode(symbols, &table, &*self.coder)?;
        let table_stream = code_table::serialize(&table, &self.alphabet, &*self.coder)?;

        log_metric!(
            "event" = "encode",
            "count_bits" = count_stream.len(),
            "text_bits" = text_stream.len(),
            "table_bits" = table_stream.len()
        );

        Ok((
            EncodedOutput {
                count_stream,
                text_stream,
                table_stream,
            },
            distinct,
        ))
    }
}

//==================================================================================
// 3. Stateless API
//==================================================================================

/// Encodes `text` with the default configuration.
pub fn encode(text: &str) -> Result<EncodedOutput, BwtpackError> {
    Encoder::default().encode(text)
}
