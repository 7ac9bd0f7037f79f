// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::ast::{DescriptorMode, RedirectionOperator};

#[test]
fn empty_input_has_no_span() {
    assert_eq!(ParseError::EmptyInput.span(), None);
    assert_eq!(ParseError::EmptyInput.context("", 10), None);
}

#[test]
fn span_accessor_matches_variant() {
    let e = ParseError::EmptyStatement { span: Span::new(3, 4) };
    assert_eq!(e.span(), Some(Span::new(3, 4)));

    let e = ParseError::BadFileDescriptor { fd: 4, span: Span::new(6, 10) };
    assert_eq!(e.span(), Some(Span::new(6, 10)));
}

#[test]
fn lexer_error_folds_in_via_from() {
    let lexer_err = LexerError::TrailingBackslash { span: Span::new(2, 3) };
    let err: ParseError = lexer_err.into();
    assert_eq!(err.span(), Some(Span::new(2, 3)));
}

#[test]
fn context_and_diagnostic_render_source_position() {
    let input = "cmd1 >";
    let e = ParseError::UnexpectedStatementFinish { expected: "redirect target", span: Span::new(6, 6) };
    let diag = e.diagnostic(input).expect("span present");
    assert!(diag.contains("line 1"));
}

#[test]
fn invalid_descriptor_data_wraps_ast_error() {
    let source = InvalidDescriptorData { mode: DescriptorMode::Read, operator: RedirectionOperator::Output };
    let e = ParseError::InvalidDescriptorData { source, span: Span::new(0, 1) };
    assert!(e.to_string().contains("invalid descriptor data"));
}
