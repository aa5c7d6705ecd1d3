//! ALU comparison operations.
//!
//! Operands are compared as signed 32-bit values. The result is always 1
//! (true) or 0 (false).

use crate::isa::AluOp;

/// Executes a comparison.
///
/// Returns `0` for non-comparison opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    let (a, b) = (a as i32, b as i32);
    let result = match op {
        AluOp::Lt => a < b,
        AluOp::Lte => a <= b,
        AluOp::Gt => a > b,
        AluOp::Gte => a >= b,
        AluOp::Eq => a == b,
        _ => false,
    };
    result as u32
}
