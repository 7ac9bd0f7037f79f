// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn leading_sequencer_fails_at_position_zero() {
    // The last two have an escaped second operator char, but the bare
    // first char alone still lexes as a lone operator token sitting in
    // the pipeline-start slot.
    for line in ["&& cmd2", "|| cmd2", "; cmd2", "| cmd2", "&\\& cmd2", "|\\| cmd2"] {
        let err = Parser::parse(line).unwrap_err();
        assert!(matches!(err, ParseError::EmptyStatement { .. }), "line: {line:?}");
        assert_eq!(err.span().unwrap().start, 0, "line: {line:?}");
    }
}

#[test]
fn doubled_semicolon_fails_at_the_second_semicolons_position() {
    let err = Parser::parse("cmd1 arg1;;").unwrap_err();
    assert!(matches!(err, ParseError::EmptyStatement { .. }));
    assert_eq!(err.span().unwrap().start, 10);
}

#[test]
fn semicolon_then_space_then_semicolon_fails_at_the_second() {
    let err = Parser::parse("cmd1 ; ;").unwrap_err();
    assert!(matches!(err, ParseError::EmptyStatement { .. }));
    assert_eq!(err.span().unwrap().start, 7);
}

#[test]
fn trailing_and_or_at_eof_fails_at_end_of_input() {
    for (line, pos) in [("cmd1 &&", 7), ("cmd1 ||", 7)] {
        let err = Parser::parse(line).unwrap_err();
        assert!(matches!(err, ParseError::EmptyStatement { .. }), "line: {line:?}");
        assert_eq!(err.span().unwrap().start, pos, "line: {line:?}");
    }
}

#[test]
fn doubled_and_after_a_quoted_word_fails_at_the_second_and() {
    let err = Parser::parse("cmd1 'arg1 arg2' && &&").unwrap_err();
    assert!(matches!(err, ParseError::EmptyStatement { .. }));
    assert_eq!(err.span().unwrap().start, 20);
}

#[test]
fn pipe_with_nothing_after_it_is_unexpected_statement_finish() {
    let err = Parser::parse("cmd1 |").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedStatementFinish { .. }));
}

#[test]
fn sequencer_right_after_a_pipe_is_empty_statement() {
    for line in ["cmd1 | ;", "cmd1 | &&", "cmd1 | |"] {
        let err = Parser::parse(line).unwrap_err();
        assert!(matches!(err, ParseError::EmptyStatement { .. }), "line: {line:?}");
    }
}

#[test]
fn a_redirection_only_statement_has_no_command_word() {
    let err = Parser::parse("> file").unwrap_err();
    assert!(matches!(err, ParseError::EmptyStatement { .. }));
}

#[test]
fn parse_error_folds_in_lexer_errors() {
    let err = Parser::parse("cmd1 '").unwrap_err();
    assert!(matches!(err, ParseError::Lexer(_)));
}
