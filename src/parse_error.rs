// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser error types.

use crate::ast::InvalidDescriptorData;
use crate::lexer::LexerError;
use crate::span::{context_snippet, diagnostic_context, Span};
use thiserror::Error;

/// Parser errors for shell command syntax.
///
/// Use [`ParseError::context`] / [`ParseError::diagnostic`] to render a
/// human-readable snippet showing where the error occurred.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Folded in from the tokenizer so callers only match one enum.
    #[error("{0}")]
    Lexer(#[from] LexerError),

    /// Input was empty or contained only whitespace.
    #[error("empty input")]
    EmptyInput,

    /// A sequencing operator (`;`, `&&`, `||`, a leading `|`, or a trailing
    /// `&` used as a terminator) with no preceding pipeline in its slot.
    #[error("empty statement at position {}", span.start)]
    EmptyStatement { span: Span },

    /// A redirection operator followed by another operator or the end of
    /// its statement instead of a filename.
    #[error("no redirect filename provided at position {}", span.start)]
    EmptyRedirect { span: Span },

    /// Input ended while a redirection or pipeline still expected a
    /// right-hand side.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedStatementFinish { expected: &'static str, span: Span },

    /// A syntactically malformed redirection that is not merely ambiguous
    /// (`>>&...`, append and duplicate at once).
    #[error("invalid redirection at position {}", span.start)]
    InvalidRedirection { span: Span },

    /// A duplication target (`>&X`) whose payload mixes digits with
    /// non-digits, or takes some other non-numeric, non-`-` form.
    #[error("ambiguous redirect target at position {}", span.start)]
    AmbiguousRedirect { span: Span },

    /// A resolved descriptor's mode/operator pairing violated the AST's
    /// own construction invariant.
    #[error("invalid descriptor data at position {}: {source}", span.start)]
    InvalidDescriptorData {
        #[source]
        source: InvalidDescriptorData,
        span: Span,
    },

    /// A duplication (`N>&M`) named an `M` that is absent or closed.
    #[error("bad file descriptor {fd} at position {}", span.start)]
    BadFileDescriptor { fd: u32, span: Span },
}

impl ParseError {
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::Lexer(e) => Some(e.span()),
            ParseError::EmptyInput => None,
            ParseError::EmptyStatement { span }
            | ParseError::EmptyRedirect { span }
            | ParseError::UnexpectedStatementFinish { span, .. }
            | ParseError::InvalidRedirection { span }
            | ParseError::AmbiguousRedirect { span }
            | ParseError::InvalidDescriptorData { span, .. }
            | ParseError::BadFileDescriptor { span, .. } => Some(*span),
        }
    }

    /// Generate a context snippet showing where the error occurred.
    ///
    /// Returns `None` if the error has no meaningful span (e.g. `EmptyInput`).
    pub fn context(&self, input: &str, context_chars: usize) -> Option<String> {
        Some(context_snippet(input, self.span()?, context_chars))
    }

    /// Generate a rich diagnostic with line/column info, or `None` if no span.
    pub fn diagnostic(&self, input: &str) -> Option<String> {
        Some(diagnostic_context(input, self.span()?, &self.to_string()))
    }
}

#[cfg(test)]
#[path = "parse_error_tests.rs"]
mod tests;
