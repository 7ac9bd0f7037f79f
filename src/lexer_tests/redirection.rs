// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn bare_and_numbered_redirects() {
    assert_eq!(tokenize(">"), vec![TokenKind::RedirectOut { fd: None }]);
    assert_eq!(tokenize("2>"), vec![TokenKind::RedirectOut { fd: Some(2) }]);
    assert_eq!(tokenize(">>"), vec![TokenKind::RedirectAppend { fd: None }]);
    assert_eq!(tokenize("2>>"), vec![TokenKind::RedirectAppend { fd: Some(2) }]);
    assert_eq!(tokenize("<"), vec![TokenKind::RedirectIn { fd: None }]);
    assert_eq!(tokenize("0<"), vec![TokenKind::RedirectIn { fd: Some(0) }]);
    assert_eq!(tokenize("1000>"), vec![TokenKind::RedirectOut { fd: Some(1000) }]);
}

#[test]
fn duplication_close_and_numeric_target() {
    assert_eq!(
        tokenize(">&-"),
        vec![TokenKind::DuplicateFd {
            source: 1,
            result: DupTargetResult::Valid(DupTarget::Close),
            output: true
        }]
    );
    assert_eq!(
        tokenize("2>&1"),
        vec![TokenKind::DuplicateFd {
            source: 2,
            result: DupTargetResult::Valid(DupTarget::Fd(1)),
            output: true
        }]
    );
    assert_eq!(
        tokenize("<&0"),
        vec![TokenKind::DuplicateFd {
            source: 0,
            result: DupTargetResult::Valid(DupTarget::Fd(0)),
            output: false
        }]
    );
}

#[test]
fn whitespace_allowed_between_amp_and_close_target() {
    assert_eq!(
        tokenize(">& -"),
        vec![TokenKind::DuplicateFd {
            source: 1,
            result: DupTargetResult::Valid(DupTarget::Close),
            output: true
        }]
    );
}

#[test]
fn double_dash_closes_then_leaves_a_dash_word() {
    assert_eq!(
        tokenize(">&--"),
        vec![
            TokenKind::DuplicateFd {
                source: 1,
                result: DupTargetResult::Valid(DupTarget::Close),
                output: true
            },
            TokenKind::Word("-".into()),
        ]
    );
}

#[test]
fn ambiguous_duplication_payloads() {
    for input in [">&a", ">&1a", ">&a1", ">&1a1", ">&a1a"] {
        assert_eq!(
            tokenize(input),
            vec![TokenKind::DuplicateFd { source: 1, result: DupTargetResult::Ambiguous, output: true }],
            "input={input}"
        );
    }
}

#[test]
fn escaped_dash_is_ambiguous_not_close() {
    assert_eq!(
        tokenize(">&\\--"),
        vec![TokenKind::DuplicateFd { source: 1, result: DupTargetResult::Ambiguous, output: true }]
    );
}

#[test]
fn append_combined_with_duplication_is_invalid() {
    assert_eq!(
        tokenize(">>&2"),
        vec![TokenKind::DuplicateFd { source: 1, result: DupTargetResult::Invalid, output: true }]
    );
}

#[test]
fn missing_duplication_payload() {
    assert_eq!(
        tokenize(">&"),
        vec![TokenKind::DuplicateFd { source: 1, result: DupTargetResult::MissingEof, output: true }]
    );
    assert_eq!(
        tokenize(">& ;"),
        vec![
            TokenKind::DuplicateFd { source: 1, result: DupTargetResult::MissingOperator, output: true },
            TokenKind::Semi,
        ]
    );
}
