// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn display_matches_surface_syntax() {
    assert_eq!(TokenKind::Word("cmd".into()).to_string(), "word 'cmd'");
    assert_eq!(TokenKind::And.to_string(), "'&&'");
    assert_eq!(TokenKind::Or.to_string(), "'||'");
    assert_eq!(TokenKind::Pipe.to_string(), "'|'");
    assert_eq!(TokenKind::Semi.to_string(), "';'");
    assert_eq!(TokenKind::Ampersand.to_string(), "'&'");
}

#[test]
fn is_redirection_covers_all_redirect_kinds() {
    assert!(TokenKind::RedirectOut { fd: None }.is_redirection());
    assert!(TokenKind::RedirectAppend { fd: Some(2) }.is_redirection());
    assert!(TokenKind::RedirectIn { fd: None }.is_redirection());
    assert!(TokenKind::DuplicateFd {
        source: 1,
        result: DupTargetResult::Valid(DupTarget::Close),
        output: true
    }
    .is_redirection());
    assert!(!TokenKind::Word("x".into()).is_redirection());
    assert!(!TokenKind::Semi.is_redirection());
}

#[test]
fn is_sequencer_covers_separators_and_trailing_ampersand() {
    assert!(TokenKind::Semi.is_sequencer());
    assert!(TokenKind::And.is_sequencer());
    assert!(TokenKind::Or.is_sequencer());
    assert!(TokenKind::Ampersand.is_sequencer());
    assert!(TokenKind::Pipe.is_sequencer());
    assert!(!TokenKind::Word("x".into()).is_sequencer());
}
