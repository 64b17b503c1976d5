//! This module defines the shared traits at the seams of the encoder: the
//! self-delimiting integer coder and the symbol indexer. The kernels only
//! depend on these contracts, so either collaborator can be swapped out.

use crate::error::BwtpackError;
use crate::kernels::bitseq::{BitCursor, BitSequence};

/// A self-delimiting, injective code for positive integers.
///
/// Consecutive encodings may be concatenated and separated again by
/// `decode` without any external length information.
pub trait IntegerCoder {
    /// Encodes `value` (which must be `>= 1`).
    fn encode(&self, value: u64) -> Result<BitSequence, BwtpackError>;

    /// Reads exactly one encoded value from the cursor.
    fn decode(&self, cursor: &mut BitCursor<'_>) -> Result<u64, BwtpackError>;
}

/// A bijection between characters and a dense index range `[0, range_size)`.
pub trait SymbolIndexer {
    fn index_of(&self, ch: char) -> Result<usize, BwtpackError>;

    fn char_at(&self, index: usize) -> Option<char>;

    fn range_size(&self) -> usize;

    /// Converts a whole text into its index sequence, failing on the first
    /// unsupported character.
    fn index_text(&self, text: &str) -> Result<Vec<usize>, BwtpackError> {
        text.chars().map(|ch| self.index_of(ch)).collect()
    }
}
