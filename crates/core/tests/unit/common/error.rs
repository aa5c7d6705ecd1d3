//! Error and fault formatting.

use yuemu_core::common::{DecodeError, Fault, LoadError};

#[test]
fn decode_error_attaches_pc() {
    let err = DecodeError::InvalidCategory { raw: 0xF000_0000 };
    assert_eq!(err.raw(), 0xF000_0000);
    let fault = err.at(0x10);
    assert_eq!(fault, Fault::InvalidCategory { pc: 0x10, raw: 0xF000_0000 });
    assert_eq!(fault.pc(), 0x10);
}

#[test]
fn fault_messages_name_pc_and_word() {
    let fault = Fault::InvalidOpcode { pc: 0x8, raw: 0x0F00_0000 };
    assert_eq!(
        fault.to_string(),
        "invalid opcode at 0x00000008: instruction 0x0F000000"
    );

    let misaligned = Fault::MisalignedTarget { pc: 0x4, target: 0x6 };
    assert!(misaligned.to_string().contains("0x00000006"));
}

#[test]
fn decode_error_reports_nibble() {
    let err = DecodeError::InvalidCategory { raw: 0x7000_0000 };
    assert!(err.to_string().starts_with("invalid category 0x7"));
    let err = DecodeError::InvalidOpcode { raw: 0x1500_0000 };
    assert!(err.to_string().starts_with("invalid opcode 0x5"));
}

#[test]
fn trailing_bytes_message_has_length() {
    let err = LoadError::TrailingBytes { len: 7 };
    assert_eq!(err.to_string(), "program length 7 is not a multiple of 4 bytes");
}
