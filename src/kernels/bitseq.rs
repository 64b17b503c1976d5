//! This module contains the growable, order-preserving bit buffer that every
//! other kernel writes into, plus a read cursor over it.
//!
//! Bits are stored most-significant first (`Msb0`), so the textual rendering
//! of a `BitSequence` reads in the same order the bits were appended. This
//! module is PURE RUST and panic-free.

use bitvec::prelude::*;
use num_traits::{PrimInt, Unsigned};
use std::fmt;

use crate::error::BwtpackError;

//==================================================================================
// 1. The Bit Buffer
//==================================================================================

/// An append-only (plus in-place reversal) sequence of bits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitSequence {
    bits: BitVec<u8, Msb0>,
}

impl BitSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: BitVec::with_capacity(bits),
        }
    }

    /// Builds the low `width` bits of `value`, most-significant bit first.
    ///
    /// # Errors
    /// Returns `BitWidthOverflow` if `value` needs more than `width` bits or
    /// if `width` exceeds 64.
    pub fn from_value<T>(value: T, width: usize) -> Result<Self, BwtpackError>
    where
        T: PrimInt + Unsigned,
    {
        let value_u64 = value
            .to_u64()
            .ok_or_else(|| BwtpackError::InternalError("Failed to widen value to u64".to_string()))?;
        if width > 64 || bit_length(value_u64) > width {
            return Err(BwtpackError::BitWidthOverflow {
                value: value_u64,
                width,
            });
        }

        let mut seq = Self::with_capacity(width);
        seq.bits
            .extend_from_bitslice(&value_u64.view_bits::<Msb0>()[64 - width..]);
        Ok(seq)
    }

    /// The minimal binary representation of `value` (no leading zeros).
    /// Zero is rendered as a single `0` bit.
    pub fn binary(value: u64) -> Self {
        let width = bit_length(value).max(1);
        let mut seq = Self::with_capacity(width);
        seq.bits
            .extend_from_bitslice(&value.view_bits::<Msb0>()[64 - width..]);
        seq
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Appends every bit of `other` to the end of `self`.
    pub fn extend(&mut self, other: &BitSequence) {
        self.bits.extend_from_bitslice(&other.bits);
    }

    pub fn reverse(&mut self) {
        self.bits.reverse();
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).map(|bit| *bit)
    }

    pub fn set(&mut self, index: usize, bit: bool) {
        self.bits.set(index, bit);
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }

    pub fn as_bitslice(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }

    pub fn cursor(&self) -> BitCursor<'_> {
        BitCursor::new(&self.bits)
    }

    /// Packs the bits MSB-first into bytes, zero-padding the final byte.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| {
                let mut byte = 0u8;
                for (i, bit) in chunk.iter().by_vals().enumerate() {
                    if bit {
                        byte |= 0x80 >> i;
                    }
                }
                byte
            })
            .collect()
    }

    pub fn to_binary_string(&self) -> String {
        self.iter().map(|bit| if bit { '1' } else { '0' }).collect()
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_binary_string())
    }
}

impl FromIterator<bool> for BitSequence {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

//==================================================================================
// 2. The Read Cursor
//==================================================================================

/// A forward-only reader over a bit slice.
#[derive(Debug, Clone)]
pub struct BitCursor<'a> {
    bits: &'a BitSlice<u8, Msb0>,
    position: usize,
}

impl<'a> BitCursor<'a> {
    pub fn new(bits: &'a BitSlice<u8, Msb0>) -> Self {
        Self { bits, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.bits.len() - self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    pub fn read_bit(&mut self) -> Result<bool, BwtpackError> {
        let bit = *self
            .bits
            .get(self.position)
            .ok_or(BwtpackError::UnexpectedEndOfBits {
                position: self.position,
                requested: 1,
            })?;
        self.position += 1;
        Ok(bit)
    }

    pub fn read_bits(&mut self, count: usize) -> Result<&'a BitSlice<u8, Msb0>, BwtpackError> {
        if count > self.remaining() {
            return Err(BwtpackError::UnexpectedEndOfBits {
                position: self.position,
                requested: count,
            });
        }
        let slice = &self.bits[self.position..self.position + count];
        self.position += count;
        Ok(slice)
    }

    /// Reads `count` bits (at most 64) and interprets them as an unsigned
    /// big-endian integer.
    pub fn read_value(&mut self, count: usize) -> Result<u64, BwtpackError> {
        if count > 64 {
            return Err(BwtpackError::BitWidthOverflow {
                value: u64::MAX,
                width: count,
            });
        }
        let bits = self.read_bits(count)?;
        Ok(bits_to_u64(bits))
    }
}

//==================================================================================
// 3. Helpers
//==================================================================================

/// Number of significant bits in `value` (0 for 0).
pub fn bit_length(value: u64) -> usize {
    (64 - value.leading_zeros()) as usize
}

/// Folds up to 64 bits, most-significant first, into an integer.
pub(crate) fn bits_to_u64(bits: &BitSlice<u8, Msb0>) -> u64 {
    bits.iter()
        .by_vals()
        .fold(0u64, |acc, bit| (acc << 1) | u64::from(bit))
}

//==================================================================================
// 4. Unit Tests
//==================================================================================
