// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::ast::DescriptorEntry;

#[test]
fn output_redirect_defaults_to_fd_one_and_elides_it() {
    let cmd = parse_ok("cmd1 arg1 > testfile.txt");
    assert_eq!(format_statement(&cmd), "cmd1 arg1 > testfile.txt");
    let open = cmd.descriptors.get(1).unwrap().as_open().unwrap();
    assert_eq!(open.descriptor().target, FileTarget::File(File { name: Word::new("testfile.txt") }));
}

#[test]
fn append_redirect_canonicalizes_with_double_angle() {
    let cmd = parse_ok("cmd1 arg1 >> testfile.txt");
    assert_eq!(format_statement(&cmd), "cmd1 arg1 >> testfile.txt");
}

#[test]
fn input_redirect_defaults_to_fd_zero_and_elides_it() {
    let cmd = parse_ok("cmd1 < infile.txt");
    assert_eq!(format_statement(&cmd), "cmd1 < infile.txt");
}

#[test]
fn explicit_descriptor_number_is_not_elided() {
    let cmd = parse_ok("cmd1 arg1 2> errfile.txt");
    assert_eq!(format_statement(&cmd), "cmd1 arg1 2> errfile.txt");
}

#[test]
fn duplicating_stdout_onto_stderr_formats_as_device_path() {
    let cmd = parse_ok("cmd arg1 >&2");
    assert_eq!(format_statement(&cmd), "cmd arg1 > /dev/stderr");
}

#[test]
fn duplicating_stderr_onto_stdout_is_not_stderrs_own_default() {
    // fd 2 now holds a default *stdout* target, not its own default
    // (stderr), so it must still render explicitly.
    let cmd = parse_ok("cmd arg1 2>&1");
    assert_eq!(format_statement(&cmd), "cmd arg1 2> /dev/stdout");
}

#[test]
fn self_duplication_is_a_true_no_op() {
    let cmd = parse_ok("cmd1 2>&2");
    assert_eq!(format_statement(&cmd), "cmd1");
}

#[test]
fn closing_a_descriptor_then_duplicating_another_keeps_both() {
    let cmd = parse_ok("cmd arg1 >&2 2>&-");
    assert_eq!(format_statement(&cmd), "cmd arg1 > /dev/stderr 2>&-");
    assert!(matches!(cmd.descriptors.get(2), Some(DescriptorEntry::Closed(_))));
}

#[test]
fn high_numbered_descriptors_duplicate_and_format_in_order() {
    let cmd = parse_ok("cmd arg1 22>&2 >33 44>&22");
    assert_eq!(format_statement(&cmd), "cmd arg1 > 33 22> /dev/stderr 44> /dev/stderr");
}

#[test]
fn duplicating_a_closed_descriptor_is_a_bad_file_descriptor() {
    for line in ["cmd >&- 2>&1", "cmd 2>&- 1>&2", "cmd 4>&3"] {
        let err = Parser::parse(line).unwrap_err();
        assert!(matches!(err, ParseError::BadFileDescriptor { .. }), "line: {line:?}, err: {err}");
    }
}

#[test]
fn ambiguous_duplication_payload_is_rejected() {
    for line in ["cmd >&a", "cmd >&1a", "cmd >&a1", "cmd 2>&1a1"] {
        let err = Parser::parse(line).unwrap_err();
        assert!(matches!(err, ParseError::AmbiguousRedirect { .. }), "line: {line:?}");
    }
}

#[test]
fn appending_while_duplicating_is_invalid_redirection() {
    for line in ["cmd >>&a", "cmd >>&1a1", "cmd 2>>&a1a"] {
        let err = Parser::parse(line).unwrap_err();
        assert!(matches!(err, ParseError::InvalidRedirection { .. }), "line: {line:?}");
    }
}

#[test]
fn missing_redirect_target_before_sequencer_is_empty_redirect() {
    for line in ["cmd1 >;", "cmd1 > &", "cmd1 > && cmd2", "cmd1 > | cmd2", "cmd1 > || cmd2", "cmd1 > >"] {
        let err = Parser::parse(line).unwrap_err();
        assert!(matches!(err, ParseError::EmptyRedirect { .. }), "line: {line:?}, err: {err}");
    }
}

#[test]
fn redirect_operator_at_end_of_input_is_unexpected_finish() {
    for line in ["cmd1 >", "cmd1 >>", "cmd1 >&"] {
        let err = Parser::parse(line).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedStatementFinish { .. }), "line: {line:?}");
    }
}
