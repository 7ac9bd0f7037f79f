// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    single_quote = ("cmd 'unterminated"),
    double_quote = ("cmd \"unterminated"),
    double_quote_trailing_backslash = ("cmd \"trailing\\"),
)]
fn unclosed_quote_cases(input: &str) {
    assert!(matches!(tokenize_err(input), LexerError::UnclosedQuote { .. }));
}

#[test]
fn unclosed_quote_span_starts_at_opening_quote() {
    let err = tokenize_err("cmd 'unterminated");
    match err {
        LexerError::UnclosedQuote { span } => assert_eq!(span.start, 4),
        other => panic!("expected UnclosedQuote, got {other:?}"),
    }
}
