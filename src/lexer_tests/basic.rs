// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn words_separated_by_whitespace() {
    assert_eq!(
        tokenize("cmd arg1 arg2"),
        vec![
            TokenKind::Word("cmd".into()),
            TokenKind::Word("arg1".into()),
            TokenKind::Word("arg2".into()),
        ]
    );
}

#[test]
fn newline_is_whitespace() {
    assert_eq!(
        tokenize("cmd\narg1"),
        vec![TokenKind::Word("cmd".into()), TokenKind::Word("arg1".into())]
    );
}

#[test]
fn sequencing_and_pipe_operators() {
    assert_eq!(
        tokenize("cmd1 ; cmd2 && cmd3 || cmd4 | cmd5 &"),
        vec![
            TokenKind::Word("cmd1".into()),
            TokenKind::Semi,
            TokenKind::Word("cmd2".into()),
            TokenKind::And,
            TokenKind::Word("cmd3".into()),
            TokenKind::Or,
            TokenKind::Word("cmd4".into()),
            TokenKind::Pipe,
            TokenKind::Word("cmd5".into()),
            TokenKind::Ampersand,
        ]
    );
}

#[test]
fn unquoted_backslash_escapes_any_char_and_drops_itself() {
    assert_eq!(tokenize("a\\ b"), vec![TokenKind::Word("a b".into())]);
    assert_eq!(tokenize("a\\;b"), vec![TokenKind::Word("a;b".into())]);
    assert_eq!(tokenize("\\2"), vec![TokenKind::Word("2".into())]);
}

#[test]
fn trailing_backslash_is_an_error() {
    assert!(matches!(tokenize_err("cmd\\"), LexerError::TrailingBackslash { .. }));
}
