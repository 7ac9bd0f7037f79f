// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn file(name: &str) -> FileTarget {
    FileTarget::File(File { name: Word::new(name) })
}

#[test]
fn read_mode_requires_input_operator() {
    let descriptor = CommandFileDescriptor::new(file("test.txt"), RedirectionOperator::Output);
    assert!(CommandDescriptor::new(DescriptorMode::Read, descriptor).is_err());

    let descriptor = CommandFileDescriptor::new(file("test.txt"), RedirectionOperator::Append);
    assert!(CommandDescriptor::new(DescriptorMode::Read, descriptor).is_err());
}

#[test]
fn write_mode_requires_output_or_append_operator() {
    let descriptor = CommandFileDescriptor::new(file("test.txt"), RedirectionOperator::Input);
    assert!(CommandDescriptor::new(DescriptorMode::Write, descriptor).is_err());
}

#[test]
fn valid_pairings_construct() {
    let descriptor = CommandFileDescriptor::new(file("test.txt"), RedirectionOperator::Output);
    assert!(CommandDescriptor::new(DescriptorMode::Write, descriptor).is_ok());

    let descriptor = CommandFileDescriptor::new(file("test.txt"), RedirectionOperator::Input);
    assert!(CommandDescriptor::new(DescriptorMode::Read, descriptor).is_ok());
}

#[test]
fn is_default_file_flag_tracks_target_variant() {
    let explicit = CommandFileDescriptor::new(file("test.txt"), RedirectionOperator::Output);
    assert!(!explicit.is_default_file);

    let default = CommandFileDescriptor::new(
        FileTarget::Default(DefaultFile { target: DefaultTarget::Stderr }),
        RedirectionOperator::Output,
    );
    assert!(default.is_default_file);
}

#[test]
fn descriptor_table_defaults_cover_stdin_stdout_stderr() {
    let table = DescriptorTable::with_defaults();
    assert!(table.is_default(0));
    assert!(table.is_default(1));
    assert!(table.is_default(2));
    assert!(table.get(3).is_none());

    let stdin = table.get(0).unwrap().as_open().unwrap();
    assert_eq!(stdin.mode(), DescriptorMode::Read);
    assert_eq!(stdin.descriptor().operator, RedirectionOperator::Input);

    let stdout = table.get(1).unwrap().as_open().unwrap();
    assert_eq!(stdout.mode(), DescriptorMode::Write);
    assert_eq!(stdout.descriptor().operator, RedirectionOperator::Output);
}

#[test]
fn device_paths_match_canonical_names() {
    assert_eq!(DefaultTarget::Stdin.device_path(), "/dev/stdin");
    assert_eq!(DefaultTarget::Stdout.device_path(), "/dev/stdout");
    assert_eq!(DefaultTarget::Stderr.device_path(), "/dev/stderr");
}

#[test]
fn duplicated_for_coerces_mode_and_operator() {
    let descriptor = CommandFileDescriptor::new(
        FileTarget::Default(DefaultFile { target: DefaultTarget::Stderr }),
        RedirectionOperator::Output,
    );
    let stderr_write = CommandDescriptor::new(DescriptorMode::Write, descriptor).unwrap();

    let as_read = stderr_write.duplicated_for(false);
    assert_eq!(as_read.mode(), DescriptorMode::Read);
    assert_eq!(as_read.descriptor().operator, RedirectionOperator::Input);
    assert_eq!(as_read.descriptor().target, stderr_write.descriptor().target);
}
