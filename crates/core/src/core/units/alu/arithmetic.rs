//! ALU arithmetic operations.
//!
//! Addition, subtraction, and multiplication wrap modulo 2^32 and never trap.
//! Division is signed and truncates toward zero; `i32::MIN / -1` wraps back to
//! `i32::MIN` and a zero divisor is reported as an error.

use super::AluError;
use crate::isa::AluOp;

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be an arithmetic variant).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The 32-bit result. Returns `Ok(0)` for non-arithmetic opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> Result<u32, AluError> {
    match op {
        AluOp::Add => Ok(a.wrapping_add(b)),
        AluOp::Sub => Ok(a.wrapping_sub(b)),
        AluOp::Mul => Ok(a.wrapping_mul(b)),
        AluOp::Div => {
            if b == 0 {
                return Err(AluError::DivisionByZero);
            }
            Ok((a as i32).wrapping_div(b as i32) as u32)
        }
        _ => Ok(0),
    }
}
