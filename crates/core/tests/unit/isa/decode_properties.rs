//! Instruction Decode Properties.
//!
//! Verifies that `decode()` recovers every operand field for every opcode,
//! sign-extends the immediates, and rejects unknown category and opcode
//! nibbles.

use proptest::prelude::*;
use rstest::rstest;
use yuemu_core::common::DecodeError;
use yuemu_core::isa::{AluOp, Instruction, decode};

use crate::common::builder::instruction::*;

#[rstest]
#[case(add(1, 2, 3), AluOp::Add)]
#[case(sub(1, 2, 3), AluOp::Sub)]
#[case(mul(1, 2, 3), AluOp::Mul)]
#[case(div(1, 2, 3), AluOp::Div)]
#[case(and(1, 2, 3), AluOp::And)]
#[case(0x3101_0203, AluOp::Or)]
#[case(0x3201_0203, AluOp::Nand)]
#[case(0x3301_0203, AluOp::Nor)]
#[case(xor(1, 2, 3), AluOp::Xor)]
#[case(shl(1, 2, 3), AluOp::Shl)]
#[case(0x4101_0203, AluOp::Shr)]
#[case(lt(1, 2, 3), AluOp::Lt)]
#[case(0x5101_0203, AluOp::Lte)]
#[case(0x5201_0203, AluOp::Gt)]
#[case(0x5301_0203, AluOp::Gte)]
#[case(0x5401_0203, AluOp::Eq)]
fn r_type_table(#[case] word: u32, #[case] op: AluOp) {
    assert_eq!(
        decode(word),
        Ok(Instruction::Alu { op, rd: 1, rs1: 2, rs2: 3 })
    );
}

#[rstest]
#[case(0x6000_0000)]
#[case(0x9ABC_DEF0)]
#[case(0xF000_0000)]
fn unknown_category_is_rejected(#[case] word: u32) {
    assert_eq!(decode(word), Err(DecodeError::InvalidCategory { raw: word }));
}

#[rstest]
#[case(0x0500_0000)]
#[case(0x1400_0000)]
#[case(0x2800_0000)]
#[case(0x3500_0000)]
#[case(0x4200_0000)]
#[case(0x5500_0000)]
fn unknown_opcode_is_rejected(#[case] word: u32) {
    assert_eq!(decode(word), Err(DecodeError::InvalidOpcode { raw: word }));
}

#[test]
fn load_immediate_sign_extends() {
    assert_eq!(
        decode(0x0000_FFFF),
        Ok(Instruction::LoadImmediate { rd: 0, imm: -1 })
    );
    assert_eq!(
        decode(loadi(7, 0x7FFF)),
        Ok(Instruction::LoadImmediate { rd: 7, imm: 0x7FFF })
    );
}

#[test]
fn indirect_and_direct_memory_layouts() {
    // loadr: raddr in 23:16, rd in 15:8
    assert_eq!(
        decode(0x0103_0400),
        Ok(Instruction::LoadIndirect { rd: 4, raddr: 3 })
    );
    // stored: rs in 23:16, addr in 15:0
    assert_eq!(
        decode(0x0301_0100),
        Ok(Instruction::StoreDirect { rs: 1, addr: 0x100 })
    );
}

#[test]
fn jump_offsets_sign_extend_over_24_bits() {
    assert_eq!(decode(jmp(-8)), Ok(Instruction::Jump { offset: -8 }));
    assert_eq!(
        decode(0x2080_0000),
        Ok(Instruction::Jump { offset: -0x80_0000 })
    );
    assert_eq!(decode(br(0x1_0000)), Ok(Instruction::Branch { offset: 0x1_0000 }));
}

#[test]
fn conditional_offsets_use_high_immediate() {
    assert_eq!(
        decode(jif(-4, 9)),
        Ok(Instruction::JumpIf { offset: -4, rcond: 9 })
    );
    assert_eq!(
        decode(brif(12, 200)),
        Ok(Instruction::BranchIf { offset: 12, rcond: 200 })
    );
}

proptest! {
    #[test]
    fn r_type_fields_roundtrip(rd in any::<u8>(), rs1 in any::<u8>(), rs2 in any::<u8>()) {
        prop_assert_eq!(
            decode(add(rd, rs1, rs2)),
            Ok(Instruction::Alu { op: AluOp::Add, rd, rs1, rs2 })
        );
    }

    #[test]
    fn memory_fields_roundtrip(r in any::<u8>(), other in any::<u8>(), addr in any::<u16>()) {
        prop_assert_eq!(decode(loadr(r, other)), Ok(Instruction::LoadIndirect { rd: r, raddr: other }));
        prop_assert_eq!(decode(storer(r, other)), Ok(Instruction::StoreIndirect { raddr: r, rs: other }));
        prop_assert_eq!(decode(stored(addr, r)), Ok(Instruction::StoreDirect { rs: r, addr }));
        prop_assert_eq!(decode(loadd(r, addr)), Ok(Instruction::LoadDirect { rd: r, addr }));
    }

    #[test]
    fn load_immediate_roundtrips(rd in any::<u8>(), imm in any::<i16>()) {
        prop_assert_eq!(
            decode(loadi(rd, i32::from(imm))),
            Ok(Instruction::LoadImmediate { rd, imm: i32::from(imm) })
        );
    }

    #[test]
    fn offset24_roundtrips(offset in -0x80_0000i32..0x80_0000) {
        prop_assert_eq!(decode(jmp(offset)), Ok(Instruction::Jump { offset }));
        prop_assert_eq!(decode(br(offset)), Ok(Instruction::Branch { offset }));
    }

    #[test]
    fn conditional_fields_roundtrip(offset in any::<i16>(), rs in any::<u8>(), rcond in any::<u8>()) {
        let offset = i32::from(offset);
        prop_assert_eq!(decode(jif(offset, rcond)), Ok(Instruction::JumpIf { offset, rcond }));
        prop_assert_eq!(decode(brif(offset, rcond)), Ok(Instruction::BranchIf { offset, rcond }));
        prop_assert_eq!(decode(jifr(rs, rcond)), Ok(Instruction::JumpIfRegister { rs, rcond }));
        prop_assert_eq!(decode(jmpr(rs)), Ok(Instruction::JumpRegister { rs }));
    }

    #[test]
    fn decode_is_total(word in any::<u32>()) {
        // Every word either decodes or reports itself.
        match decode(word) {
            Ok(_) => prop_assert!(word >> 28 <= 5),
            Err(e) => prop_assert_eq!(e.raw(), word),
        }
    }
}
