//! This module contains the run-length kernel that turns an indexed text into
//! the encoded text stream.
//!
//! Every maximal run of one symbol becomes the pair
//! `(integer-coded run length, prefix codeword)`. Pairs are written in text
//! order with no separators; both halves are self-delimiting.

use crate::error::BwtpackError;
use crate::kernels::bitseq::BitSequence;
use crate::kernels::prefix_code::CodeTable;
use crate::traits::IntegerCoder;

//==================================================================================
// 1. Run Scanning
//==================================================================================

/// A maximal run of one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub symbol: usize,
    pub length: u64,
}

/// Splits an indexed text into maximal runs, left to right.
#[derive(Debug, Clone)]
pub struct RunScanner<'a> {
    symbols: &'a [usize],
    position: usize,
}

impl<'a> RunScanner<'a> {
    pub fn new(symbols: &'a [usize]) -> Self {
        Self {
            symbols,
            position: 0,
        }
    }
}

impl Iterator for RunScanner<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let &current = self.symbols.get(self.position)?;
        let mut run_count: u64 = 1;
        self.position += 1;

        while self.symbols.get(self.position) == Some(&current) {
            run_count += 1;
            self.position += 1;
        }

        Some(Run {
            symbol: current,
            length: run_count,
        })
    }
}

pub fn runs(symbols: &[usize]) -> RunScanner<'_> {
    RunScanner::new(symbols)
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Encodes the indexed text into the text stream.
///
/// An empty text produces an empty stream.
///
/// # Errors
/// * `InternalError` if a symbol of the text has no codeword in `table`.
/// * Any error raised by the integer coder.
pub fn encode<C>(
    symbols: &[usize],
    table: &CodeTable,
    coder: &C,
) -> Result<BitSequence, BwtpackError>
where
    C: IntegerCoder + ?Sized,
{
    let mut output = BitSequence::new();
    let mut run_total = 0usize;

    for run in runs(symbols) {
        let codeword = table.get(run.symbol).ok_or_else(|| {
            BwtpackError::InternalError(format!(
                "symbol index {} has no codeword in the code table",
                run.symbol
            ))
        })?;
        output.extend(&coder.encode(run.length)?);
        output.extend(codeword);
        run_total += 1;
    }

    log::debug!(
        "run-length encode: {} symbols in {} runs -> {} bits",
        symbols.len(),
        run_total,
        output.len()
    );
    Ok(output)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
