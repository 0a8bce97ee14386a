//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - A byte cursor with one byte of lookahead
//! - Recognition of keywords, identifiers, integers and operators
//! - Reifying unrecognised bytes as `Illegal` tokens
//!
//! Input is treated as single-byte ASCII characters.

pub mod lexer;
pub mod tokens;
