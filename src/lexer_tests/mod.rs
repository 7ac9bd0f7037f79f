// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer tests split into logical modules to stay under line limits.

mod basic;
mod errors;
mod gluing;
mod quoting;
mod redirection;

use super::*;

pub(super) fn tokenize(input: &str) -> Vec<TokenKind> {
    Lexer::tokenize(input).unwrap().into_iter().map(|t| t.kind).collect()
}

pub(super) fn tokenize_err(input: &str) -> LexerError {
    Lexer::tokenize(input).unwrap_err()
}
