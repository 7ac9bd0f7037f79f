// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn digit_run_at_fresh_boundary_becomes_fd_prefix() {
    assert_eq!(tokenize("2>file"), vec![
        TokenKind::RedirectOut { fd: Some(2) },
        TokenKind::Word("file".into()),
    ]);
    assert_eq!(tokenize("1000>&-"), vec![TokenKind::DuplicateFd {
        source: 1000,
        result: DupTargetResult::Valid(DupTarget::Close),
        output: true,
    }]);
}

#[test]
fn digit_run_glued_to_preceding_quoted_word_is_not_an_fd_prefix() {
    assert_eq!(
        tokenize("'arg1 arg2'2>&-"),
        vec![
            TokenKind::Word("arg1 arg22".into()),
            TokenKind::DuplicateFd {
                source: 1,
                result: DupTargetResult::Valid(DupTarget::Close),
                output: true
            },
        ]
    );
}

#[test]
fn escaped_leading_digit_is_never_an_fd_prefix() {
    assert_eq!(
        tokenize("\\2>&-"),
        vec![
            TokenKind::Word("2".into()),
            TokenKind::DuplicateFd {
                source: 1,
                result: DupTargetResult::Valid(DupTarget::Close),
                output: true
            },
        ]
    );
}

#[test]
fn digit_suffix_after_non_digit_word_content_is_not_an_fd_prefix() {
    assert_eq!(
        tokenize("test3.txt2>&2"),
        vec![
            TokenKind::Word("test3.txt2".into()),
            TokenKind::DuplicateFd {
                source: 1,
                result: DupTargetResult::Valid(DupTarget::Fd(2)),
                output: true
            },
        ]
    );
}

#[test]
fn every_digit_can_start_a_redirect() {
    for fd in 0..=9u32 {
        assert_eq!(
            tokenize(&format!("{fd}> test.txt")),
            vec![TokenKind::RedirectOut { fd: Some(fd) }, TokenKind::Word("test.txt".into())]
        );
    }
}
