//! This module contains the frequency-analysis kernel: a dense occurrence
//! count for every index of the alphabet.

use crate::error::BwtpackError;

/// Occurrence counts indexed by symbol index. Sized to the whole addressable
/// range; most entries are zero for typical texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Vec<u64>,
}

impl FrequencyTable {
    /// Counts the symbols of an already-indexed text.
    ///
    /// # Errors
    /// Returns `InternalError` if an index falls outside `range_size`, which
    /// means the indexer and the table disagree on the alphabet.
    pub fn build(symbols: &[usize], range_size: usize) -> Result<Self, BwtpackError> {
        let mut counts = vec![0u64; range_size];
        for &symbol in symbols {
            let slot = counts.get_mut(symbol).ok_or_else(|| {
                BwtpackError::InternalError(format!(
                    "symbol index {} outside alphabet range {}",
                    symbol, range_size
                ))
            })?;
            *slot += 1;
        }
        Ok(Self { counts })
    }

    pub fn count(&self, symbol: usize) -> u64 {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    pub fn range_size(&self) -> usize {
        self.counts.len()
    }

    /// Number of symbols with a nonzero count.
    pub fn distinct_count(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(symbol, count)` for every symbol that occurs, in ascending index order.
    pub fn present(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(symbol, &c)| (symbol, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_distinct() {
        let table = FrequencyTable::build(&[3, 3, 3, 5, 0], 8).unwrap();
        assert_eq!(table.range_size(), 8);
        assert_eq!(table.count(3), 3);
        assert_eq!(table.count(5), 1);
        assert_eq!(table.count(0), 1);
        assert_eq!(table.count(7), 0);
        assert_eq!(table.count(100), 0);
        assert_eq!(table.distinct_count(), 3);
        assert_eq!(table.total(), 5);
        assert_eq!(table.present().collect::<Vec<_>>(), vec![(0, 1), (3, 3), (5, 1)]);
    }

    #[test]
    fn test_empty_input() {
        let table = FrequencyTable::build(&[], 4).unwrap();
        assert_eq!(table.distinct_count(), 0);
        assert_eq!(table.present().count(), 0);
    }

    #[test]
    fn test_out_of_range_index_error() {
        let result = FrequencyTable::build(&[1, 9], 4);
        assert!(matches!(result, Err(BwtpackError::InternalError(_))));
    }
}
