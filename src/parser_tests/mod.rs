// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser tests split into logical modules to stay under line limits.

mod basic;
mod errors;
mod pipelines;
mod properties;
mod redirections;
mod sequences;

use super::*;
use crate::format::{format_statement, format_statements};

/// Parse a single-command line and unwrap, panicking with the input on
/// failure.
pub(super) fn parse_ok(input: &str) -> Command {
    Parser::parse(input).unwrap_or_else(|e| panic!("failed to parse {input:?}: {e}"))
}

/// Walk `cmd.next_command` and count how many statements are chained.
pub(super) fn statement_count(cmd: &Command) -> usize {
    let mut count = 1;
    let mut cur = cmd;
    while let Some(next) = &cur.next_command {
        count += 1;
        cur = next;
    }
    count
}
