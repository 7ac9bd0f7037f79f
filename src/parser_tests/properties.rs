// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property-based tests for the universal parse/format invariants.

use super::{format_statement, format_statements};
use crate::ast::{CommandDescriptor, DescriptorEntry, DescriptorMode, RedirectionOperator};
use crate::parser::Parser;
use proptest::prelude::*;

fn word_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,10}".prop_map(String::from)
}

fn simple_command_strategy() -> impl Strategy<Value = String> {
    (word_strategy(), prop::collection::vec(word_strategy(), 0..4))
        .prop_map(|(name, args)| std::iter::once(name).chain(args).collect::<Vec<_>>().join(" "))
}

fn statement_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(simple_command_strategy(), 1..4).prop_map(|cmds| cmds.join(" | "))
}

fn command_list_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(statement_strategy(), 1..4).prop_map(|stmts| stmts.join("; "))
}

proptest! {
    /// A well-formed command list always parses.
    #[test]
    fn parse_valid_command_list(input in command_list_strategy()) {
        prop_assert!(Parser::parse(&input).is_ok(), "failed to parse: {input:?}");
    }

    /// Formatting a parsed command and re-parsing the result yields an
    /// identical AST (idempotent normalization).
    #[test]
    fn canonical_form_is_a_fixed_point(input in command_list_strategy()) {
        let cmd = Parser::parse(&input).unwrap();
        let canonical = format_statements(&cmd).join("; ");
        let reparsed = Parser::parse(&canonical).unwrap();
        prop_assert_eq!(cmd, reparsed);
    }

    /// Re-formatting the canonical form reproduces it exactly.
    #[test]
    fn formatting_the_canonical_form_is_a_no_op(input in command_list_strategy()) {
        let cmd = Parser::parse(&input).unwrap();
        let canonical = format_statements(&cmd).join("; ");
        let reparsed = Parser::parse(&canonical).unwrap();
        prop_assert_eq!(format_statement(&reparsed), format_statement(&cmd));
    }

    /// Every descriptor left in the table is either a stream defaults slot
    /// (0/1/2) or was explicitly named by a redirection token.
    #[test]
    fn descriptor_table_only_holds_defaults_or_named_fds(input in command_list_strategy()) {
        let cmd = Parser::parse(&input).unwrap();
        let mut cur = Some(&cmd);
        while let Some(c) = cur {
            for (&fd, _) in c.descriptors.iter() {
                prop_assert!(fd == 0 || fd == 1 || fd == 2 || !c.descriptors.is_default(fd));
            }
            cur = c.next_command.as_deref();
        }
    }
}

#[test]
fn every_descriptor_mode_pairs_with_its_required_operator() {
    let cmd = Parser::parse("cmd arg1 > out.txt arg2 < in.txt 2>> err.txt").unwrap();
    for (_, entry) in cmd.descriptors.iter() {
        if let DescriptorEntry::Open(desc) = entry {
            check_mode_operator_pairing(desc);
        }
    }
}

fn check_mode_operator_pairing(desc: &CommandDescriptor) {
    match desc.mode() {
        DescriptorMode::Read => assert_eq!(desc.descriptor().operator, RedirectionOperator::Input),
        DescriptorMode::Write => assert!(matches!(
            desc.descriptor().operator,
            RedirectionOperator::Output | RedirectionOperator::Append
        )),
    }
}
