//! This module defines the strongly-typed data representations shared by the
//! kernels: currently the default alphabet used to index input characters.

pub mod alphabet;

// Re-export the main type(s) for easier access.
pub use alphabet::AsciiAlphabet;
