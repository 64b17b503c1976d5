//! This file is the root of the `bwtpack` Rust crate.
//!
//! `bwtpack` encodes a Burrows-Wheeler transformed text into three bit
//! streams: the integer-coded number of distinct symbols, the run-length
//! encoded text (Elias omega run lengths followed by minimum-redundancy
//! prefix codewords), and the serialized code table a decoder needs to
//! rebuild those codewords.
//!
//! ```
//! let output = bwtpack::encode("aaab").unwrap();
//! assert_eq!(output.count_stream().to_string(), "010");
//! assert_eq!(output.text_stream().to_string(), "011110");
//! ```

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod config;
pub mod error;
pub mod kernels;
pub mod pipeline;
pub mod traits;
pub mod types;

#[doc(hidden)]
pub use log as __log;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use config::{AlphabetConfig, EncoderConfig};
pub use error::{BwtpackError, Result};
pub use kernels::{BitCursor, BitSequence, CodeTable, EliasOmega, FrequencyTable};
pub use observability::enable_verbose_logging;
pub use pipeline::{encode, EncodedOutput, Encoder, EncodingStats};
pub use traits::{IntegerCoder, SymbolIndexer};
pub use types::AsciiAlphabet;
