// In: src/error.rs

//! This module defines the single, unified error type for the entire bwtpack library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Logic defects (a merge node with no members, a symbol too wide for the
//! 7-bit table field) are not represented here. Those panic at the point of
//! detection.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BwtpackError {
    // =========================================================================
    // === High-Level, Semantic Errors
    // =========================================================================
    #[error("Unsupported symbol {0:?}: not representable by the alphabet")]
    UnsupportedSymbol(char),

    #[error("Invalid encoder configuration: {0}")]
    InvalidConfig(String),

    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),

    // =========================================================================
    // === External Error Wrappers
    // =========================================================================
    /// An error from the Serde JSON library, typically while loading a config
    /// or rendering stats.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    // =========================================================================
    // === Low-Level Kernel Errors
    // =========================================================================
    #[error("Elias omega cannot encode {0}: value must be at least 1")]
    EliasDomainError(u64),

    #[error("Elias omega decoding error: {0}")]
    EliasDecodeError(String),

    #[error("Unexpected end of bit sequence at bit {position}: {requested} more bit(s) requested")]
    UnexpectedEndOfBits { position: usize, requested: usize },

    #[error("Bit width overflow: value {value} does not fit in {width} bit(s)")]
    BitWidthOverflow { value: u64, width: usize },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, BwtpackError>;
