//! Processor core.
//!
//! This module contains the architectural state (register file, memory, return
//! stack), the execution units that compute results, and the `Cpu` that applies
//! one decoded instruction at a time.

/// Architectural state components (registers, memory, return stack).
pub mod arch;

/// CPU state container and the per-instruction executor.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::{Cpu, Flow};
