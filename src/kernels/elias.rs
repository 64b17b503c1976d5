//! This module contains the pure, stateless kernel for the Elias omega
//! universal integer code used for run lengths, symbol counts, and codeword
//! lengths.
//!
//! Layout of an encoded value: zero or more length components followed by the
//! plain binary value. Each length component is the binary form of
//! "bit length of the next component minus one" with its leading bit cleared,
//! which is what lets the decoder tell length components from the value:
//! the first component that starts with `1` is the value itself.
//!
//! `1 -> "1"`, `2 -> "010"`, `561 -> "0 01 0001 1000110001"`.

use crate::error::BwtpackError;
use crate::kernels::bitseq::{bit_length, bits_to_u64, BitCursor, BitSequence};
use crate::traits::IntegerCoder;

//==================================================================================
// 1. Public API for Single-Value Operations
//==================================================================================

/// Encodes one positive integer.
pub fn encode_one(value: u64) -> Result<BitSequence, BwtpackError> {
    if value == 0 {
        return Err(BwtpackError::EliasDomainError(value));
    }

    // Components are collected value-first and emitted in reverse.
    let mut components = vec![BitSequence::binary(value)];
    let mut length = bit_length(value) - 1;
    while length >= 1 {
        let mut component = BitSequence::binary(length as u64);
        component.set(0, false);
        let next = component.len() - 1;
        components.push(component);
        length = next;
    }

    let total_bits = components.iter().map(BitSequence::len).sum();
    let mut encoded = BitSequence::with_capacity(total_bits);
    for component in components.iter().rev() {
        encoded.extend(component);
    }
    Ok(encoded)
}

/// Decodes one integer from the cursor, leaving it positioned just past the
/// encoded value.
pub fn decode_one(cursor: &mut BitCursor<'_>) -> Result<u64, BwtpackError> {
    let mut read_len = 1usize;
    loop {
        if read_len > 64 {
            return Err(BwtpackError::EliasDecodeError(format!(
                "component of {} bits at bit {} exceeds 64-bit range",
                read_len,
                cursor.position()
            )));
        }
        let component = cursor.read_bits(read_len)?;
        if component[0] {
            return Ok(bits_to_u64(component));
        }
        // Restore the cleared leading bit to recover the next component's length.
        let length_minus_one = bits_to_u64(&component[1..]) | (1u64 << (read_len - 1));
        read_len = usize::try_from(length_minus_one)
            .ok()
            .and_then(|len| len.checked_add(1))
            .ok_or_else(|| {
                BwtpackError::EliasDecodeError("component length overflows usize".to_string())
            })?;
    }
}

//==================================================================================
// 2. IntegerCoder Implementation
//==================================================================================

/// The default `IntegerCoder`: Elias omega.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EliasOmega;

impl IntegerCoder for EliasOmega {
    fn encode(&self, value: u64) -> Result<BitSequence, BwtpackError> {
        encode_one(value)
    }

    fn decode(&self, cursor: &mut BitCursor<'_>) -> Result<u64, BwtpackError> {
        decode_one(cursor)
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(value: u64) -> String {
        encode_one(value).unwrap().to_string()
    }

    #[test]
    fn test_known_encodings() {
        assert_eq!(encoded(1), "1");
        assert_eq!(encoded(2), "010");
        assert_eq!(encoded(3), "011");
        assert_eq!(encoded(4), "000100");
        assert_eq!(encoded(7), "000111");
        assert_eq!(encoded(8), "0011000");
        assert_eq!(encoded(561), "00100011000110001");
    }

    #[test]
    fn test_zero_is_rejected() {
        let result = encode_one(0);
        assert!(matches!(result, Err(BwtpackError::EliasDomainError(0))));
    }

    #[test]
    fn test_concatenated_values_separate_cleanly() {
        let values = [1u64, 2, 3, 17, 561, 1 << 20, u64::MAX];
        let mut stream = BitSequence::new();
        for &v in &values {
            stream.extend(&encode_one(v).unwrap());
        }

        let mut cursor = stream.cursor();
        let decoded: Vec<u64> = values
            .iter()
            .map(|_| decode_one(&mut cursor).unwrap())
            .collect();
        assert_eq!(decoded, values);
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_decode_truncated_stream_error() {
        let full = encode_one(561).unwrap();
        let truncated: BitSequence = full.iter().take(full.len() - 3).collect();
        let mut cursor = truncated.cursor();
        let result = decode_one(&mut cursor);
        assert!(matches!(
            result,
            Err(BwtpackError::UnexpectedEndOfBits { .. })
        ));
    }

    #[test]
    fn test_decode_oversized_component_error() {
        // Length components 2 -> 3 -> 7 -> 65 bits.
        let stream: BitSequence = "0000100000000"
            .chars()
            .map(|c| c == '1')
            .collect();
        let mut cursor = stream.cursor();
        let result = decode_one(&mut cursor);
        assert!(matches!(result, Err(BwtpackError::EliasDecodeError(_))));
    }

    #[test]
    fn test_trait_object_dispatch() {
        let coder: &dyn IntegerCoder = &EliasOmega;
        let bits = coder.encode(42).unwrap();
        let mut cursor = bits.cursor();
        assert_eq!(coder.decode(&mut cursor).unwrap(), 42);
    }
}
