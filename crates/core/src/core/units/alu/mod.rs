//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by every R-type instruction.
//! All operands and results are 32-bit words; signed operations reinterpret
//! them as two's complement.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Div
//! - [`logic`]:      And, Or, Nand, Nor, Xor
//! - [`shifts`]:     Shl, Shr
//! - [`compare`]:    Lt, Lte, Gt, Gte, Eq

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Signed comparison operations producing 1 or 0.
pub mod compare;

/// Bitwise logical operations.
pub mod logic;

/// Logical shift operations.
pub mod shifts;

use thiserror::Error;

use crate::isa::AluOp;

/// Condition raised by an ALU operation that has no defined result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AluError {
    /// `div` with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
}

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug, Clone, Copy)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// Dispatches to the appropriate submodule based on the operation type.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform.
    /// * `a`  - First operand (`regs[rs1]`).
    /// * `b`  - Second operand (`regs[rs2]`, also the shift amount).
    ///
    /// # Returns
    ///
    /// The 32-bit result, or [`AluError::DivisionByZero`] for `div` by zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use yuemu_core::core::units::alu::Alu;
    /// use yuemu_core::isa::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 0x7FFF_FFFF, 1), Ok(0x8000_0000));
    /// assert_eq!(Alu::execute(AluOp::Div, -7_i32 as u32, 2), Ok(-3_i32 as u32));
    /// assert_eq!(Alu::execute(AluOp::Shl, 1, 40), Ok(0));
    /// assert_eq!(Alu::execute(AluOp::Lt, -5_i32 as u32, 10), Ok(1));
    /// ```
    pub fn execute(op: AluOp, a: u32, b: u32) -> Result<u32, AluError> {
        match op {
            AluOp::Add | AluOp::Sub | AluOp::Mul | AluOp::Div => arithmetic::execute(op, a, b),

            AluOp::And | AluOp::Or | AluOp::Nand | AluOp::Nor | AluOp::Xor => {
                Ok(logic::execute(op, a, b))
            }

            AluOp::Shl | AluOp::Shr => Ok(shifts::execute(op, a, b)),

            AluOp::Lt | AluOp::Lte | AluOp::Gt | AluOp::Gte | AluOp::Eq => {
                Ok(compare::execute(op, a, b))
            }
        }
    }
}
