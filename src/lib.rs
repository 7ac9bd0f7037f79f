// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A pure, dependency-free (beyond `thiserror`/`serde`) POSIX-flavored
//! shell line parser: tokenizer, recursive-descent grammar, descriptor
//! resolution, and a canonical formatter. No execution, no environment,
//! no I/O — `parse` and `format_statement(s)` are the entire surface.

pub mod ast;
mod error;
mod format;
mod lexer;
mod parse_error;
mod parser;
pub mod span;
pub mod token;

pub use ast::{
    Command, CommandDescriptor, CommandDescriptorClosed, CommandFileDescriptor, DefaultFile,
    DefaultTarget, DescriptorEntry, DescriptorMode, DescriptorTable, File, FileTarget,
    InvalidDescriptorData, RedirectionOperator, SequenceOperator, Word,
};
pub use error::LexerError;
pub use format::{format_statement, format_statements};
pub use parse_error::ParseError;
pub use parser::Parser;
pub use span::Span;

/// Parse one line into the head [`Command`] of its statement chain.
///
/// Subsequent statements chain via [`Command::next_command`]. Fails with
/// one of [`ParseError`]'s variants, including `EmptyInput` for an empty
/// or whitespace-only line.
pub fn parse(input: &str) -> Result<Command, ParseError> {
    Parser::parse(input)
}
