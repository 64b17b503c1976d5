//! This module serializes a finished `CodeTable` into the table stream.
//!
//! One entry per symbol that has a codeword, in ascending index order:
//!
//! ```text
//! [ symbol: 7 bits ][ codeword length: integer-coded ][ codeword bits ]
//! ```
//!
//! The symbol field is the character's code point, not its index, so a
//! decoder does not need to share the encoder's alphabet configuration.

use crate::config::MAX_SYMBOL_CODE_POINT;
use crate::error::BwtpackError;
use crate::kernels::bitseq::BitSequence;
use crate::kernels::prefix_code::CodeTable;
use crate::traits::{IntegerCoder, SymbolIndexer};

/// Width of the fixed symbol field.
pub const SYMBOL_FIELD_WIDTH: usize = 7;

/// Serializes every assigned codeword.
///
/// # Panics
/// If a character's code point does not fit in `SYMBOL_FIELD_WIDTH` bits.
/// Alphabet validation rules this out for configured alphabets.
///
/// # Errors
/// * `InternalError` if the indexer cannot map a table index back to a character.
/// * Any error raised by the integer coder.
pub fn serialize<I, C>(
    table: &CodeTable,
    indexer: &I,
    coder: &C,
) -> Result<BitSequence, BwtpackError>
where
    I: SymbolIndexer + ?Sized,
    C: IntegerCoder + ?Sized,
{
    let mut output = BitSequence::new();

    for (symbol, codeword) in table.iter() {
        let ch = indexer.char_at(symbol).ok_or_else(|| {
            BwtpackError::InternalError(format!(
                "symbol index {} has no character in the alphabet",
                symbol
            ))
        })?;
        let code_point = u32::from(ch);
        assert!(
            code_point <= MAX_SYMBOL_CODE_POINT,
            "symbol {:?} does not fit the {}-bit symbol field",
            ch,
            SYMBOL_FIELD_WIDTH
        );

        output.extend(&BitSequence::from_value(code_point, SYMBOL_FIELD_WIDTH)?);
        output.extend(&coder.encode(codeword.len() as u64)?);
        output.extend(codeword);
    }

    log::debug!(
        "code table serialize: {} entries -> {} bits",
        table.len(),
        output.len()
    );
    Ok(output)
}

/// Reads `entries` table entries back as `(character, codeword)` pairs.
#[cfg(test)]
pub(crate) fn read_entries<C>(
    stream: &BitSequence,
    entries: usize,
    coder: &C,
) -> Result<Vec<(char, BitSequence)>, BwtpackError>
where
    C: IntegerCoder + ?Sized,
{
    let mut cursor = stream.cursor();
    let mut out = Vec::with_capacity(entries);
    for _ in 0..entries {
        let code_point = cursor.read_value(SYMBOL_FIELD_WIDTH)? as u32;
        let ch = char::from_u32(code_point)
            .ok_or_else(|| BwtpackError::InternalError(format!("bad code point {}", code_point)))?;
        let length = coder.decode(&mut cursor)? as usize;
        let codeword: BitSequence = cursor.read_bits(length)?.iter().by_vals().collect();
        out.push((ch, codeword));
    }
    if !cursor.is_exhausted() {
        return Err(BwtpackError::InternalError(format!(
            "{} trailing bits after table entries",
            cursor.remaining()
        )));
    }
    Ok(out)
}
