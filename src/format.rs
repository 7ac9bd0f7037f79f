// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical rendering of a [`Command`] chain back to shell text.

use std::borrow::Cow;

use crate::ast::*;

/// Characters that force a word to be single-quoted.
fn needs_quoting(s: &str) -> bool {
    s.is_empty()
        || s.chars().any(|c| {
            matches!(
                c,
                ' ' | '\t'
                    | '\n'
                    | '\r'
                    | '\''
                    | '"'
                    | '\\'
                    | ';'
                    | '&'
                    | '|'
                    | '<'
                    | '>'
                    | '$'
                    | '`'
                    | '('
                    | ')'
                    | '*'
                    | '?'
                    | '['
                    | ']'
                    | '#'
                    | '~'
                    | '='
                    | '!'
            )
        })
}

/// Borrowed when bare, owned when it needs single-quoting.
fn format_word(word: &Word) -> Cow<'_, str> {
    let s = word.as_str();
    if !needs_quoting(s) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        if ch == '\'' {
            out.push_str("'\\''");
        } else {
            out.push(ch);
        }
    }
    out.push('\'');
    Cow::Owned(out)
}

fn format_target<'a>(target: &'a FileTarget) -> Cow<'a, str> {
    match target {
        FileTarget::File(file) => format_word(&file.name),
        FileTarget::Default(default_file) => Cow::Borrowed(default_file.target.device_path()),
    }
}

fn format_descriptors(descriptors: &DescriptorTable) -> Vec<String> {
    let mut out = Vec::new();
    for (&fd, entry) in descriptors.iter() {
        match entry {
            DescriptorEntry::Closed(_) => match fd {
                1 => out.push(">&-".to_string()),
                0 => out.push("<&-".to_string()),
                n => out.push(format!("{n}>&-")),
            },
            DescriptorEntry::Open(desc) => {
                if descriptors.is_default(fd) {
                    continue;
                }
                let target = format_target(&desc.descriptor().target);
                let operator = desc.descriptor().operator;
                let symbol = match operator {
                    RedirectionOperator::Output => ">",
                    RedirectionOperator::Append => ">>",
                    RedirectionOperator::Input => "<",
                };
                let elide = fd == 1 || (fd == 0 && matches!(operator, RedirectionOperator::Input));
                if elide {
                    out.push(format!("{symbol} {target}"));
                } else {
                    out.push(format!("{fd}{symbol} {target}"));
                }
            }
        }
    }
    out
}

/// Render one command in a pipeline: its word, args, then redirections.
fn format_single(cmd: &Command) -> String {
    let mut pieces: Vec<String> = Vec::with_capacity(1 + cmd.args.len());
    pieces.push(format_word(&cmd.command).into_owned());
    pieces.extend(cmd.args.iter().map(|w| format_word(w).into_owned()));
    pieces.extend(format_descriptors(&cmd.descriptors));
    pieces.join(" ")
}

/// Render the `|`-joined pipeline headed by `cmd`, ignoring any
/// `next_command` chain.
fn format_pipeline(cmd: &Command) -> String {
    let mut pieces = vec![format_single(cmd)];
    let mut current = cmd;
    while let Some(next) = &current.pipe_command {
        pieces.push(format_single(next));
        current = next;
    }
    pieces.join(" | ")
}

/// Render a single statement: a pipeline, optionally followed by ` &&`/`
/// ||` and the next statement, up to (but not including) any `;`-joined
/// `next_command`.
pub fn format_statement(cmd: &Command) -> String {
    let mut out = format_pipeline(cmd);
    if cmd.asynchronous {
        out.push_str(" &");
    }
    if let (Some(next), Some(op)) = (&cmd.next_command, cmd.next_command_operator) {
        let joiner = match op {
            SequenceOperator::And => " && ",
            SequenceOperator::Or => " || ",
        };
        out.push_str(joiner);
        out.push_str(&format_statement(next));
    }
    out
}

/// Render each `;`-separated statement in `cmd`'s chain as its own string.
/// `&&`/`||` stay inline within a single returned element.
pub fn format_statements(cmd: &Command) -> Vec<String> {
    let mut out = vec![format_statement(cmd)];
    let mut current = cmd;
    loop {
        // Walk to the end of the `&&`/`||`-chained statement we just
        // rendered, then continue from whatever `;` (None operator) links
        // after it.
        while let (Some(next), Some(_)) = (&current.next_command, current.next_command_operator) {
            current = next;
        }
        match &current.next_command {
            Some(next) if current.next_command_operator.is_none() => {
                out.push(format_statement(next));
                current = next;
            }
            _ => break,
        }
    }
    out
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
