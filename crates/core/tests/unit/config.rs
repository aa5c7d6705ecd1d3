//! Configuration parsing.

use std::io::Write;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;
use yuemu_core::common::ConfigError;
use yuemu_core::config::{Config, EndOfProgram, TraceLevel, TrailingBytes};

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(config.general.trace, TraceLevel::Off);
    assert_eq!(config.general.end_of_program, EndOfProgram::PastLastWord);
    assert_eq!(config.general.max_instructions, None);
    assert_eq!(config.general.dump_base, 0x100);
    assert_eq!(config.loader.trailing_bytes, TrailingBytes::Reject);
}

#[test]
fn empty_object_is_default() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn partial_section_keeps_other_defaults() {
    let config = Config::from_json(r#"{ "general": { "dump_base": 512 } }"#).unwrap();
    assert_eq!(config.general.dump_base, 512);
    assert_eq!(config.general.trace, TraceLevel::Off);
    assert_eq!(config.loader.trailing_bytes, TrailingBytes::Reject);
}

#[test]
fn trace_levels_are_ordered() {
    assert!(TraceLevel::Off < TraceLevel::Instructions);
    assert!(TraceLevel::Instructions < TraceLevel::Registers);
}

#[test]
fn unknown_variant_is_a_parse_error() {
    let err = Config::from_json(r#"{ "general": { "trace": "Everything" } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn reads_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{ "loader": { "trailing_bytes": "ZeroPad" } }"#)
        .unwrap();
    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.loader.trailing_bytes, TrailingBytes::ZeroPad);
}

#[test]
fn missing_file_is_io_error() {
    let err = Config::from_file("/nonexistent/yuemu.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
