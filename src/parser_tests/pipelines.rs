// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn pipeline_len(cmd: &Command) -> usize {
    let mut count = 1;
    let mut cur = cmd;
    while let Some(next) = &cur.pipe_command {
        count += 1;
        cur = next;
    }
    count
}

#[test]
fn two_commands_pipe_together() {
    let cmd = parse_ok("cmd1 | cmd2");
    assert_eq!(pipeline_len(&cmd), 2);
    assert!(cmd.next_command.is_none());
    assert_eq!(format_statement(&cmd), "cmd1 | cmd2");
}

#[test]
fn pipe_spacing_is_immaterial_and_canonicalizes() {
    for line in ["cmd1|cmd2", "cmd1| cmd2", "cmd1 |cmd2", "cmd1 | cmd2"] {
        let cmd = parse_ok(line);
        assert_eq!(pipeline_len(&cmd), 2, "line: {line:?}");
        assert_eq!(format_statement(&cmd), "cmd1 | cmd2", "line: {line:?}");
    }
}

#[test]
fn four_way_pipeline_chains_in_order() {
    let cmd = parse_ok("cmd1|cmd2|cmd3|cmd4");
    assert_eq!(pipeline_len(&cmd), 4);
    assert_eq!(format_statement(&cmd), "cmd1 | cmd2 | cmd3 | cmd4");
    assert_eq!(cmd.command, Word::new("cmd1"));
    let second = cmd.pipe_command.as_ref().unwrap();
    assert_eq!(second.command, Word::new("cmd2"));
}

#[test]
fn pipeline_with_args_and_quoting_canonicalizes() {
    let cmd = parse_ok("'cmd1' arg1 | cmd2 'arg1' | cmd3");
    assert_eq!(format_statement(&cmd), "cmd1 arg1 | cmd2 arg1 | cmd3");
}

#[test]
fn redirect_may_precede_the_command_word() {
    let cmd = parse_ok("> testfile.txt cmd1 arg1");
    assert_eq!(cmd.command, Word::new("cmd1"));
    assert_eq!(cmd.args, vec![Word::new("arg1")]);
    assert_eq!(format_statement(&cmd), "cmd1 arg1 > testfile.txt");
}

#[test]
fn multiple_plain_statements_split_on_semicolons() {
    let cmd = parse_ok("cmd1; cmd2; cmd3");
    assert_eq!(statement_count(&cmd), 3);
    assert_eq!(format_statements(&cmd), vec!["cmd1", "cmd2", "cmd3"]);
}
