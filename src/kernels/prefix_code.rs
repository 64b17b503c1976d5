//! This module contains the minimum-redundancy prefix-code builder.
//!
//! Codes are built bottom-up with a min-priority queue of `MergeNode`s. Each
//! node owns the list of symbols it currently aggregates. Popping the two
//! lightest nodes appends a `0` to every codeword in the lighter node and a
//! `1` to every codeword in the other, then the heavier node's members move
//! into the lighter node, which goes back on the queue. Bits therefore
//! accumulate leaf-to-root and each codeword is reversed once at the end.
//!
//! Queue order is ascending `(weight, size, lowest member index)`. The last
//! key makes the order total, so the produced code table is reproducible.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::kernels::bitseq::BitSequence;
use crate::kernels::frequency::FrequencyTable;

//==================================================================================
// 1. Merge Nodes
//==================================================================================

/// An aggregate of one or more symbols that still share an undetermined
/// codeword prefix.
#[derive(Debug, Clone)]
pub struct MergeNode {
    /// Summed frequency of every aggregated symbol.
    pub weight: u64,
    /// Number of aggregated symbols.
    pub size: usize,
    /// Aggregated symbol indices.
    pub members: Vec<usize>,
    lowest: usize,
}

impl MergeNode {
    pub fn leaf(symbol: usize, frequency: u64) -> Self {
        Self {
            weight: frequency,
            size: 1,
            members: vec![symbol],
            lowest: symbol,
        }
    }

    /// Smallest symbol index among the members; the final tie-breaker.
    pub fn lowest_member(&self) -> usize {
        self.lowest
    }

    /// Takes ownership of `other`'s members. `other` ends its life here.
    fn absorb(&mut self, other: MergeNode) {
        self.weight += other.weight;
        self.size += other.size;
        self.lowest = self.lowest.min(other.lowest);
        self.members.extend(other.members);
    }

    fn key(&self) -> (u64, usize, usize) {
        (self.weight, self.size, self.lowest)
    }
}

impl PartialEq for MergeNode {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for MergeNode {}

impl PartialOrd for MergeNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MergeNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

//==================================================================================
// 2. The Code Table
//==================================================================================

/// Codeword per symbol index, `None` for symbols that never occur.
/// Immutable once `build` returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codewords: Vec<Option<BitSequence>>,
}

impl CodeTable {
    /// Builds a minimum-redundancy prefix code for every symbol with a
    /// nonzero count.
    ///
    /// * No symbols: the table is empty.
    /// * One symbol: it receives the one-bit codeword `0`.
    ///
    /// # Panics
    /// If a node popped from the queue has no members. Seeding guarantees
    /// this cannot happen.
    pub fn build(frequencies: &FrequencyTable) -> Self {
        let mut codewords: Vec<Option<BitSequence>> = vec![None; frequencies.range_size()];

        let mut heap: BinaryHeap<Reverse<MergeNode>> = frequencies
            .present()
            .map(|(symbol, count)| Reverse(MergeNode::leaf(symbol, count)))
            .collect();

        match heap.len() {
            0 => {
                log::debug!("prefix code: empty alphabet, no codewords");
                return Self { codewords };
            }
            1 => {
                if let Some(Reverse(only)) = heap.pop() {
                    log::debug!("prefix code: single symbol {}, one-bit codeword", only.lowest);
                    let mut codeword = BitSequence::with_capacity(1);
                    codeword.push(false);
                    codewords[only.lowest] = Some(codeword);
                }
                return Self { codewords };
            }
            _ => {}
        }

        let mut merges = 0usize;
        while heap.len() >= 2 {
            let (Some(Reverse(mut low)), Some(Reverse(high))) = (heap.pop(), heap.pop()) else {
                unreachable!("queue holds at least two nodes");
            };
            assert!(
                !low.members.is_empty() && !high.members.is_empty(),
                "merge node popped with no members"
            );

            for &symbol in &low.members {
                codewords[symbol]
                    .get_or_insert_with(BitSequence::new)
                    .push(false);
            }
            for &symbol in &high.members {
                codewords[symbol]
                    .get_or_insert_with(BitSequence::new)
                    .push(true);
            }
            merges += 1;

            if heap.is_empty() {
                break;
            }
            low.absorb(high);
            heap.push(Reverse(low));
        }

        for codeword in codewords.iter_mut().flatten() {
            codeword.reverse();
        }

        log_metric!("event" = "build_prefix_code", "merges" = merges);
        Self { codewords }
    }

    pub fn get(&self, symbol: usize) -> Option<&BitSequence> {
        self.codewords.get(symbol).and_then(Option::as_ref)
    }

    /// `(symbol, codeword)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &BitSequence)> + '_ {
        self.codewords
            .iter()
            .enumerate()
            .filter_map(|(symbol, codeword)| codeword.as_ref().map(|c| (symbol, c)))
    }

    /// Number of symbols that were assigned a codeword.
    pub fn len(&self) -> usize {
        self.codewords.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn range_size(&self) -> usize {
        self.codewords.len()
    }

    /// Sum over symbols of `frequency * codeword length`.
    pub fn weighted_length(&self, frequencies: &FrequencyTable) -> u64 {
        self.iter()
            .map(|(symbol, codeword)| frequencies.count(symbol) * codeword.len() as u64)
            .sum()
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn table_for(symbols: &[usize], range_size: usize) -> (FrequencyTable, CodeTable) {
        let freq = FrequencyTable::build(symbols, range_size).unwrap();
        let table = CodeTable::build(&freq);
        (freq, table)
    }

    fn repeat(counts: &[(usize, usize)]) -> Vec<usize> {
        counts
            .iter()
            .flat_map(|&(symbol, n)| std::iter::repeat(symbol).take(n))
            .collect()
    }

    fn assert_prefix_free(table: &CodeTable) {
        let codes: Vec<String> = table.iter().map(|(_, c)| c.to_string()).collect();
        for (i, a) in codes.iter().enumerate() {
            assert!(!a.is_empty());
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a.as_str()), "{} is a prefix of {}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_empty_alphabet_has_no_codewords() {
        let (_, table) = table_for(&[], 10);
        assert!(table.is_empty());
        assert_eq!(table.range_size(), 10);
        assert_eq!(table.iter().count(), 0);
    }

    #[test]
    fn test_single_symbol_gets_one_bit_codeword() {
        let (_, table) = table_for(&[4, 4, 4, 4], 10);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(4).unwrap().to_string(), "0");
        assert!(table.get(3).is_none());
    }

    #[test]
    fn test_equal_weights_break_ties_by_lowest_index() {
        // 'a' and 'b' both occur once: the lower index takes the 0 branch.
        let (_, table) = table_for(&[7, 6], 10);
        assert_eq!(table.get(6).unwrap().to_string(), "0");
        assert_eq!(table.get(7).unwrap().to_string(), "1");
    }

    #[test]
    fn test_size_breaks_ties_before_index() {
        // After merging {0, 1} (weight 2, size 2), the leaf 2 (weight 2,
        // size 1) sorts first even though its index is higher.
        let (_, table) = table_for(&[0, 1, 2, 2], 3);
        assert_eq!(table.get(2).unwrap().to_string(), "0");
        assert_eq!(table.get(0).unwrap().to_string(), "10");
        assert_eq!(table.get(1).unwrap().to_string(), "11");
    }

    #[test]
    fn test_two_symbols_unequal_frequency() {
        let (_, table) = table_for(&[1, 1, 1, 2], 4);
        assert_eq!(table.get(2).unwrap().to_string(), "0");
        assert_eq!(table.get(1).unwrap().to_string(), "1");
    }

    #[test]
    fn test_minimum_redundancy_cost() {
        // The classic six-symbol example has an optimal weighted length of 224.
        let symbols = repeat(&[(0, 45), (1, 13), (2, 12), (3, 16), (4, 9), (5, 5)]);
        let (freq, table) = table_for(&symbols, 6);
        assert_eq!(table.len(), 6);
        assert_eq!(table.weighted_length(&freq), 224);
        assert_eq!(table.get(0).unwrap().len(), 1);
        assert_prefix_free(&table);
    }

    #[test]
    fn test_skewed_alphabet_is_prefix_free() {
        let symbols = repeat(&[(0, 1), (1, 1), (2, 2), (3, 4), (4, 8), (5, 16), (6, 32)]);
        let (_, table) = table_for(&symbols, 8);
        assert_eq!(table.get(6).unwrap().len(), 1);
        assert_eq!(table.get(0).unwrap().len(), 6);
        assert_eq!(table.get(1).unwrap().len(), 6);
        assert_prefix_free(&table);
    }

    #[test]
    fn test_build_is_deterministic() {
        let symbols = repeat(&[(0, 3), (1, 3), (2, 3), (3, 3), (4, 1), (5, 1)]);
        let (_, first) = table_for(&symbols, 6);
        let (_, second) = table_for(&symbols, 6);
        assert_eq!(first, second);
    }

    #[test]
    fn test_merge_node_ordering() {
        let light = MergeNode::leaf(9, 1);
        let heavy = MergeNode::leaf(0, 2);
        assert!(light < heavy);

        let a = MergeNode::leaf(3, 5);
        let b = MergeNode::leaf(4, 5);
        assert!(a < b);

        let mut merged = MergeNode::leaf(8, 1);
        merged.absorb(MergeNode::leaf(2, 1));
        assert_eq!(merged.weight, 2);
        assert_eq!(merged.size, 2);
        assert_eq!(merged.members, vec![8, 2]);
        assert_eq!(merged.lowest_member(), 2);
        assert!(MergeNode::leaf(5, 2) < merged);
    }
}
