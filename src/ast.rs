// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Abstract Syntax Tree types for a parsed shell statement.
//!
//! Every type here is a value type, immutable once built. `CommandDescriptor`
//! is the one node with a real construction-time invariant (the pairing of
//! [`DescriptorMode`] and [`RedirectionOperator`]); it is the only node with
//! private fields and a fallible constructor. Everything else follows plain
//! POD conventions: public fields, no setters.

use std::collections::BTreeMap;
use thiserror::Error;

/// A fully-dequoted, fully-unescaped argument or command name.
///
/// May be empty — `""` and `''` both produce `Word(String::new())`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct Word(pub String);

impl Word {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Word {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Word {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// An explicit filesystem path given as a redirection target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub name: Word,
}

/// Which of the process's default standard streams a [`DefaultFile`] names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultTarget {
    Stdin,
    Stdout,
    Stderr,
}

impl DefaultTarget {
    /// The canonical device path used when formatting a default descriptor.
    pub fn device_path(self) -> &'static str {
        match self {
            DefaultTarget::Stdin => "/dev/stdin",
            DefaultTarget::Stdout => "/dev/stdout",
            DefaultTarget::Stderr => "/dev/stderr",
        }
    }
}

/// A symbolic reference to one of the process's default standard streams,
/// as opposed to an explicit [`File`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultFile {
    pub target: DefaultTarget,
}

/// The target of a redirection: either a concrete path or a default stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileTarget {
    File(File),
    Default(DefaultFile),
}

impl FileTarget {
    pub fn is_default(&self) -> bool {
        matches!(self, FileTarget::Default(_))
    }
}

/// `<`, `>`, `>>` as a tag value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectionOperator {
    Input,
    Output,
    Append,
}

/// The I/O direction a [`CommandDescriptor`] was opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorMode {
    Read,
    Write,
}

/// A redirection target paired with the operator that produced it.
///
/// `is_default_file` is a convenience flag mirroring `target`'s variant so
/// callers (notably the formatter) don't need to match on `target` just to
/// tell default streams apart from explicit files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFileDescriptor {
    pub target: FileTarget,
    pub operator: RedirectionOperator,
    pub is_default_file: bool,
}

impl CommandFileDescriptor {
    pub fn new(target: FileTarget, operator: RedirectionOperator) -> Self {
        let is_default_file = target.is_default();
        Self { target, operator, is_default_file }
    }
}

/// A [`DescriptorMode`]/[`RedirectionOperator`] pairing that cannot produce a
/// valid [`CommandDescriptor`].
///
/// `mode=Read` only ever pairs with `operator=Input`; `mode=Write` only ever
/// pairs with `operator` in `{Output, Append}`. Any other combination fails
/// construction rather than being represented.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("descriptor mode {mode:?} is incompatible with redirection operator {operator:?}")]
pub struct InvalidDescriptorData {
    pub mode: DescriptorMode,
    pub operator: RedirectionOperator,
}

/// A resolved, open file descriptor entry in a command's [`DescriptorTable`].
///
/// Fields are private: the only way to build one is [`CommandDescriptor::new`],
/// which enforces the mode/operator pairing invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    mode: DescriptorMode,
    descriptor: CommandFileDescriptor,
}

impl CommandDescriptor {
    pub fn new(
        mode: DescriptorMode,
        descriptor: CommandFileDescriptor,
    ) -> Result<Self, InvalidDescriptorData> {
        let valid = match (mode, descriptor.operator) {
            (DescriptorMode::Read, RedirectionOperator::Input) => true,
            (DescriptorMode::Write, RedirectionOperator::Output | RedirectionOperator::Append) => {
                true
            }
            _ => false,
        };
        if valid {
            Ok(Self { mode, descriptor })
        } else {
            Err(InvalidDescriptorData { mode, operator: descriptor.operator })
        }
    }

    pub fn mode(&self) -> DescriptorMode {
        self.mode
    }

    pub fn descriptor(&self) -> &CommandFileDescriptor {
        &self.descriptor
    }

    fn default_for(fd: u32) -> Self {
        let (mode, target, operator) = match fd {
            0 => (DescriptorMode::Read, DefaultTarget::Stdin, RedirectionOperator::Input),
            2 => (DescriptorMode::Write, DefaultTarget::Stderr, RedirectionOperator::Output),
            _ => (DescriptorMode::Write, DefaultTarget::Stdout, RedirectionOperator::Output),
        };
        Self {
            mode,
            descriptor: CommandFileDescriptor::new(FileTarget::Default(DefaultFile { target }), operator),
        }
    }

    /// Build a duplicate of `self` for the `>&`/`<&` side given by `output`,
    /// coercing mode and operator to match that side. The target is
    /// preserved verbatim.
    pub(crate) fn duplicated_for(&self, output: bool) -> Self {
        let (mode, operator) = if output {
            (DescriptorMode::Write, RedirectionOperator::Output)
        } else {
            (DescriptorMode::Read, RedirectionOperator::Input)
        };
        Self {
            mode,
            descriptor: CommandFileDescriptor::new(self.descriptor.target.clone(), operator),
        }
    }
}

/// A closed file descriptor (from `N>&-` / `N<&-`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDescriptorClosed;

/// One entry of a [`DescriptorTable`]: either an open, resolved descriptor
/// or a closed marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorEntry {
    Open(CommandDescriptor),
    Closed(CommandDescriptorClosed),
}

impl DescriptorEntry {
    pub fn as_open(&self) -> Option<&CommandDescriptor> {
        match self {
            DescriptorEntry::Open(d) => Some(d),
            DescriptorEntry::Closed(_) => None,
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, DescriptorEntry::Closed(_))
    }
}

/// The per-command file-descriptor table, keyed by fd number.
///
/// Fds 0, 1, and 2 are always present unless explicitly closed; absent
/// that, they hold their defaults (read-stdin, write-stdout, write-stderr).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorTable {
    entries: BTreeMap<u32, DescriptorEntry>,
}

impl DescriptorTable {
    /// A table holding only the fd 0/1/2 defaults.
    pub fn with_defaults() -> Self {
        let mut entries = BTreeMap::new();
        for fd in [0, 1, 2] {
            entries.insert(fd, DescriptorEntry::Open(CommandDescriptor::default_for(fd)));
        }
        Self { entries }
    }

    pub fn get(&self, fd: u32) -> Option<&DescriptorEntry> {
        self.entries.get(&fd)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&u32, &DescriptorEntry)> {
        self.entries.iter()
    }

    /// True iff `fd` still holds exactly what it would hold in a fresh
    /// table — not merely *a* default stream, but *this* fd's own default.
    /// `N>&M` can leave an fd pointing at a `FileTarget::Default` that
    /// belongs to a different stream (e.g. `2>&1` parks stdout's default on
    /// fd 2); that result is not fd 2's own default and must still render.
    pub fn is_default(&self, fd: u32) -> bool {
        matches!(
            self.entries.get(&fd),
            Some(DescriptorEntry::Open(d)) if *d == CommandDescriptor::default_for(fd)
        )
    }

    pub(crate) fn set(&mut self, fd: u32, entry: DescriptorEntry) {
        self.entries.insert(fd, entry);
    }
}

/// `&&` / `||` as a tag value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceOperator {
    And,
    Or,
}

/// One parsed command: a word, its arguments, its resolved descriptor
/// table, and links to the next command in its pipeline and/or statement
/// chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub command: Word,
    pub args: Vec<Word>,
    pub descriptors: DescriptorTable,
    /// The right-hand side of a `|`, if this command is part of a pipeline.
    /// Pipeline members never have `next_command`/`next_command_operator`.
    pub pipe_command: Option<Box<Command>>,
    /// The next statement under `;`, `&&`, or `||`.
    pub next_command: Option<Box<Command>>,
    /// `And` for `&&`, `Or` for `||`, `None` for `;`.
    pub next_command_operator: Option<SequenceOperator>,
    /// Set when the statement this command heads ended with a trailing `&`.
    pub asynchronous: bool,
}

impl Command {
    pub fn is_pipeline_head(&self) -> bool {
        self.pipe_command.is_some()
    }
}

#[cfg(test)]
#[path = "ast_tests.rs"]
mod tests;
