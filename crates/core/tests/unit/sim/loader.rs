//! Binary loading from disk and from byte slices.

use std::io::Write;

use rstest::rstest;
use tempfile::NamedTempFile;
use yuemu_core::common::LoadError;
use yuemu_core::config::{EndOfProgram, LoaderConfig, TrailingBytes};
use yuemu_core::sim::{load, load_binary, load_program};

use crate::common::builder::instruction::*;
use crate::common::harness::image_bytes;

#[test]
fn words_are_big_endian_at_word_addresses() {
    let image = load(&[0x10, 0x02, 0x00, 0x01, 0x25, 0, 0, 0], TrailingBytes::Reject).unwrap();
    assert_eq!(image.word_count, 2);
    assert_eq!(image.memory.read(0), 0x1002_0001);
    assert_eq!(image.memory.read(4), 0x2500_0000);
    assert_eq!(image.memory.read(1), 0);
    let placed: Vec<_> = image.memory.iter().collect();
    assert_eq!(placed, vec![(0, 0x1002_0001), (4, 0x2500_0000)]);
}

#[test]
fn empty_image_loads_nothing() {
    let image = load(&[], TrailingBytes::Reject).unwrap();
    assert_eq!(image.word_count, 0);
    assert!(image.memory.is_empty());
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
fn partial_word_is_rejected(#[case] extra: usize) {
    let mut bytes = image_bytes(&[end()]);
    bytes.extend(std::iter::repeat_n(0xAB, extra));
    match load(&bytes, TrailingBytes::Reject) {
        Err(LoadError::TrailingBytes { len }) => assert_eq!(len, 4 + extra),
        other => panic!("expected TrailingBytes, got {other:?}"),
    }
}

#[test]
fn partial_word_is_zero_padded() {
    let image = load(&[0x25, 0, 0, 0, 0xAB, 0xCD, 0xEF], TrailingBytes::ZeroPad).unwrap();
    assert_eq!(image.word_count, 2);
    assert_eq!(image.memory.read(4), 0xABCD_EF00);
}

#[test]
fn reads_program_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&image_bytes(&[loadi(0, 5), end()])).unwrap();

    let bytes = load_binary(file.path()).unwrap();
    assert_eq!(bytes.len(), 8);

    let image = load_program(file.path(), &LoaderConfig::default()).unwrap();
    assert_eq!(image.word_count, 2);
    assert_eq!(image.memory.read(0), loadi(0, 5));
}

#[test]
fn missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.bin");
    let err = load_program(&path, &LoaderConfig::default()).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("absent.bin"));
}

#[rstest]
#[case(EndOfProgram::PastLastWord, 0, 0)]
#[case(EndOfProgram::PastLastWord, 3, 12)]
#[case(EndOfProgram::LastWord, 0, 0)]
#[case(EndOfProgram::LastWord, 3, 8)]
fn sentinel_policies(#[case] policy: EndOfProgram, #[case] words: u32, #[case] expected: u32) {
    assert_eq!(policy.sentinel(words), expected);
}
