// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn empty_string_is_empty_input() {
    assert!(matches!(Parser::parse(""), Err(ParseError::EmptyInput)));
}

#[test]
fn whitespace_only_is_empty_input() {
    for line in [" ", "  ", "\n", "\t", "\t\t", " \t ", "\t \t", "   \t\t\t"] {
        assert!(matches!(Parser::parse(line), Err(ParseError::EmptyInput)), "line: {line:?}");
    }
}

#[test]
fn single_word_is_the_command_with_no_args() {
    let cmd = parse_ok("plainword");
    assert_eq!(cmd.command, Word::new("plainword"));
    assert!(cmd.args.is_empty());
    assert!(!cmd.asynchronous);
    assert!(cmd.pipe_command.is_none());
    assert!(cmd.next_command.is_none());
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let cmd = parse_ok(" plainword ");
    assert_eq!(cmd.command, Word::new("plainword"));
}

#[test]
fn quoted_word_is_one_word_with_literal_contents() {
    assert_eq!(parse_ok("'one word'").command, Word::new("one word"));
    assert_eq!(parse_ok("\"one word\"").command, Word::new("one word"));
    assert_eq!(parse_ok("' one word '").command, Word::new(" one word "));
}

#[test]
fn multiple_words_are_command_and_args() {
    let cmd = parse_ok("cmd1 arg1 arg2 arg3");
    assert_eq!(cmd.command, Word::new("cmd1"));
    assert_eq!(cmd.args, vec![Word::new("arg1"), Word::new("arg2"), Word::new("arg3")]);
}

#[test]
fn numeric_only_args_are_not_mistaken_for_descriptors() {
    let cmd = parse_ok("cmd1 1 2 3");
    assert_eq!(cmd.args, vec![Word::new("1"), Word::new("2"), Word::new("3")]);
}
