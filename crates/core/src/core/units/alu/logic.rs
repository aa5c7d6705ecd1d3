//! ALU bitwise logical operations over full 32-bit words.

use crate::isa::AluOp;

/// Executes a bitwise logical operation.
///
/// Returns `0` for non-logic opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Nand => !(a & b),
        AluOp::Nor => !(a | b),
        AluOp::Xor => a ^ b,
        _ => 0,
    }
}
