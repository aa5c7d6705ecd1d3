//! ALU shift operations.
//!
//! Implements logical shift left and logical shift right. The shift amount is
//! the full unsigned value of the second operand; amounts of 32 or more shift
//! every bit out and produce 0.

use crate::isa::AluOp;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount.
///
/// # Returns
///
/// The shifted value. Returns `0` for non-shift opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Shl => match a.checked_shl(b) {
            Some(v) => v,
            None => 0,
        },
        AluOp::Shr => match a.checked_shr(b) {
            Some(v) => v,
            None => 0,
        },
        _ => 0,
    }
}
