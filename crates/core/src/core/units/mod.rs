//! Execution units.
//!
//! The only functional unit is the integer ALU; memory and control
//! instructions are applied directly by the executor.

/// Arithmetic Logic Unit for register-register operations.
pub mod alu;
