//! Disassembler output format.

use pretty_assertions::assert_eq;
use rstest::rstest;
use yuemu_core::isa::disassemble;

use crate::common::builder::instruction::*;

#[rstest]
#[case(loadi(0, -1), "loadi r0, -1")]
#[case(loadr(4, 3), "loadr r4, [r3]")]
#[case(storer(3, 4), "storer [r3], r4")]
#[case(stored(0x100, 1), "stored [0x0100], r1")]
#[case(loadd(1, 0x100), "loadd r1, [0x0100]")]
#[case(div(5, 6, 7), "div r5, r6, r7")]
#[case(jmp(-8), "jmp -8")]
#[case(jmpr(1), "jmpr r1")]
#[case(jif(-8, 7), "jif -8, r7")]
#[case(jifr(1, 2), "jifr r1, r2")]
#[case(ret(), "ret")]
#[case(br(8), "br 8")]
#[case(brif(8, 3), "brif 8, r3")]
fn formats_operands(#[case] word: u32, #[case] expected: &str) {
    assert_eq!(disassemble(word), expected);
}

#[test]
fn unknown_words_are_shown_raw() {
    assert_eq!(disassemble(0xF123_4567), "unknown 0xF1234567");
}
