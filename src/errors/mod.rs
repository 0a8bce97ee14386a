//! Error types for callers of the lexer.
//!
//! The lexer itself never fails; unknown bytes are returned as `Illegal`
//! tokens. Callers that want to stop on them turn those tokens into the
//! errors defined here, which carry:
//!
//! - The byte offset of the offending input
//! - A short name and an optional suggestion for display

pub mod errors;
