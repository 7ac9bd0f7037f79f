// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn span_accessor_matches_variant() {
    let e = LexerError::UnclosedQuote { span: Span::new(3, 7) };
    assert_eq!(e.span(), Span::new(3, 7));

    let e = LexerError::TrailingBackslash { span: Span::new(9, 10) };
    assert_eq!(e.span(), Span::new(9, 10));
}

#[test]
fn context_and_diagnostic_render_source_position() {
    let input = "cmd1 'unterminated";
    let e = LexerError::UnclosedQuote { span: Span::new(5, input.len()) };
    let ctx = e.context(input, 20);
    assert!(ctx.contains("'unterminated"));
    let diag = e.diagnostic(input);
    assert!(diag.contains("unclosed quote"));
    assert!(diag.contains("line 1"));
}
