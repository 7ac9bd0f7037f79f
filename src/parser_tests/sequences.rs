// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::ast::SequenceOperator;

#[test]
fn anded_statements_chain_with_and_operator() {
    let cmd = parse_ok("cmd1 && cmd2 && cmd3");
    assert_eq!(statement_count(&cmd), 3);
    assert_eq!(cmd.next_command_operator, Some(SequenceOperator::And));
    assert_eq!(format_statement(&cmd), "cmd1 && cmd2 && cmd3");
}

#[test]
fn ored_statements_chain_with_or_operator() {
    let cmd = parse_ok("cmd1 || cmd2 || cmd3");
    assert_eq!(statement_count(&cmd), 3);
    assert_eq!(cmd.next_command_operator, Some(SequenceOperator::Or));
    assert_eq!(format_statement(&cmd), "cmd1 || cmd2 || cmd3");
}

#[test]
fn mixed_and_or_semicolon_chain_counts_and_canonicalizes() {
    let line = "cmd1 arg1; cmd2 && cmd3 arg2 || cmd4 'arg3 arg4'; cmd5 && cmd6 arg5";
    let cmd = parse_ok(line);
    assert_eq!(statement_count(&cmd), 6);
    assert_eq!(
        format_statements(&cmd),
        vec!["cmd1 arg1", "cmd2 && cmd3 arg2 || cmd4 'arg3 arg4'", "cmd5 && cmd6 arg5"],
    );
}

#[test]
fn trailing_ampersand_marks_the_statement_asynchronous() {
    let cmd = parse_ok("cmd1 &");
    assert!(cmd.asynchronous);
    assert!(cmd.next_command.is_none());
    assert_eq!(format_statement(&cmd), "cmd1 &");
}

#[test]
fn trailing_ampersand_does_not_fuse_with_a_following_sequencer() {
    let cmd = parse_ok("cmd1 & cmd2");
    assert!(cmd.asynchronous);
    assert_eq!(statement_count(&cmd), 2);
    assert_eq!(cmd.next_command_operator, None);
}

#[test]
fn pipelines_combine_with_and_or_and_semicolons() {
    let cmd = parse_ok("cmd1 arg1 | cmd2 arg2 arg3 | cmd3 && cmd4; cmd5 || cmd6 arg4 | cmd7");
    assert_eq!(cmd.command, Word::new("cmd1"));
    assert!(cmd.pipe_command.is_some());
    assert_eq!(statement_count(&cmd), 4);
}
