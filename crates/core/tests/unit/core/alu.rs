//! ALU operation vectors.

use rstest::rstest;
use yuemu_core::core::units::alu::{Alu, AluError};
use yuemu_core::isa::AluOp;

const NEG_ONE: u32 = -1i32 as u32;

#[rstest]
#[case(AluOp::Add, 0x7FFF_FFFF, 1, 0x8000_0000)]
#[case(AluOp::Add, NEG_ONE, 1, 0)]
#[case(AluOp::Sub, 0, 1, NEG_ONE)]
#[case(AluOp::Mul, 0x1_0000, 0x1_0000, 0)]
#[case(AluOp::Mul, NEG_ONE, 3, -3i32 as u32)]
#[case(AluOp::Div, 7, 2, 3)]
#[case(AluOp::Div, -7i32 as u32, 2, -3i32 as u32)]
#[case(AluOp::Div, 0x8000_0000, NEG_ONE, 0x8000_0000)]
fn arithmetic_wraps(#[case] op: AluOp, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(op, a, b), Ok(expected));
}

#[test]
fn division_by_zero_is_reported() {
    assert_eq!(Alu::execute(AluOp::Div, 5, 0), Err(AluError::DivisionByZero));
}

#[rstest]
#[case(AluOp::And, 0b1100, 0b1010, 0b1000)]
#[case(AluOp::Or, 0b1100, 0b1010, 0b1110)]
#[case(AluOp::Xor, 0b1100, 0b1010, 0b0110)]
#[case(AluOp::Nand, 0b1100, 0b1010, !0b1000)]
#[case(AluOp::Nor, 0b1100, 0b1010, !0b1110)]
fn logic_is_bitwise(#[case] op: AluOp, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(op, a, b), Ok(expected));
}

#[rstest]
#[case(AluOp::Shl, 1, 31, 0x8000_0000)]
#[case(AluOp::Shl, 1, 32, 0)]
#[case(AluOp::Shl, 1, 0xFFFF_FFFF, 0)]
#[case(AluOp::Shr, 0x8000_0000, 31, 1)]
#[case(AluOp::Shr, 0x8000_0000, 1, 0x4000_0000)]
#[case(AluOp::Shr, 0x8000_0000, 40, 0)]
fn shifts_are_logical(#[case] op: AluOp, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(op, a, b), Ok(expected));
}

#[rstest]
#[case(AluOp::Lt, NEG_ONE, 0, 1)]
#[case(AluOp::Lt, 0, NEG_ONE, 0)]
#[case(AluOp::Lte, 5, 5, 1)]
#[case(AluOp::Gt, 0, 0x8000_0000, 1)]
#[case(AluOp::Gte, 0x8000_0000, 0, 0)]
#[case(AluOp::Eq, 9, 9, 1)]
#[case(AluOp::Eq, 9, 10, 0)]
fn comparisons_are_signed(#[case] op: AluOp, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(op, a, b), Ok(expected));
}
