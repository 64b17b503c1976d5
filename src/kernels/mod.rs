//! This module serves as the public home of all pure, stateless encoding
//! kernels. The `pipeline` module strings them together; each kernel can also
//! be driven on its own.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Bit buffer and read cursor shared by every kernel.
pub mod bitseq;

/// Self-delimiting integer code.
pub mod elias;

/// Frequency analysis and code construction.
pub mod frequency;
pub mod prefix_code;

/// Stream writers.
pub mod code_table;
pub mod run_length;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use self::bitseq::{BitCursor, BitSequence};
pub use self::elias::EliasOmega;
pub use self::frequency::FrequencyTable;
pub use self::prefix_code::{CodeTable, MergeNode};
pub use self::run_length::Run;
