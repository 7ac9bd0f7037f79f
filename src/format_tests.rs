// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::parser::Parser;

fn roundtrip(input: &str, expected: &str) {
    let cmd = Parser::parse(input).unwrap_or_else(|e| panic!("failed to parse {input:?}: {e}"));
    assert_eq!(format_statement(&cmd), expected, "input: {input:?}");
}

#[test]
fn bare_words_need_no_quoting() {
    roundtrip("cmd1 arg1 arg2", "cmd1 arg1 arg2");
}

#[test]
fn a_word_with_an_embedded_space_is_single_quoted() {
    roundtrip("cmd1 'arg1 arg2'", "cmd1 'arg1 arg2'");
    roundtrip("cmd1 \"arg1 arg2\"", "cmd1 'arg1 arg2'");
}

#[test]
fn an_embedded_single_quote_uses_the_close_escape_reopen_sequence() {
    // Inside double quotes `\a` is not a recognized escape, so it survives
    // as a literal backslash followed by `a`; the embedded `'` then forces
    // quoting, closing and reopening around the canonical `'\''`.
    roundtrip("cmd1 \"\\arg1'\"", "cmd1 '\\arg1'\\'''");
}

#[test]
fn an_empty_word_renders_as_an_empty_quoted_pair() {
    roundtrip("cmd1 ''", "cmd1 ''");
}

#[test]
fn output_redirect_to_fd_one_elides_the_descriptor_number() {
    roundtrip("cmd1 arg1 > testfile.txt", "cmd1 arg1 > testfile.txt");
}

#[test]
fn append_keeps_the_double_angle_operator() {
    roundtrip("cmd1 arg1 >> testfile.txt", "cmd1 arg1 >> testfile.txt");
}

#[test]
fn input_redirect_to_fd_zero_elides_the_descriptor_number() {
    roundtrip("cmd1 < infile.txt", "cmd1 < infile.txt");
}

#[test]
fn a_closed_descriptor_renders_with_the_dash_target() {
    roundtrip("cmd1 'arg1 arg2'2>&-", "cmd1 'arg1 arg22' >&-");
}

#[test]
fn format_statements_splits_only_on_semicolons() {
    let cmd = Parser::parse("cmd1 && cmd2; cmd3 || cmd4").unwrap();
    assert_eq!(format_statements(&cmd), vec!["cmd1 && cmd2", "cmd3 || cmd4"]);
}

#[test]
fn trailing_semicolon_does_not_add_an_empty_statement() {
    // A bare trailing `;` is itself invalid (EmptyStatement at EOF), but a
    // statement that legitimately ends right at end-of-input must not grow
    // a phantom extra entry.
    let cmd = Parser::parse("cmd1").unwrap();
    assert_eq!(format_statements(&cmd), vec!["cmd1"]);
}
