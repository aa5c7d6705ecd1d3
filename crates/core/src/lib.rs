//! yuemu: emulator for a small 32-bit load/store instruction set.
//!
//! This crate implements the complete machine with the following:
//! 1. **ISA:** Category/opcode tables, decoding, and disassembly.
//! 2. **Core:** 256 general-purpose registers, sparse word memory, the return
//!    address stack, the ALU, and instruction execution.
//! 3. **Simulation:** Binary loader, the fetch-decode-execute loop, and the
//!    trace side channel.
//! 4. **Support:** Configuration, errors, and execution statistics.

/// Common constants and error types.
pub mod common;
/// Run configuration (trace level, sentinel policy, loader policy).
pub mod config;
/// CPU core (architectural state, ALU, execution).
pub mod core;
/// Instruction set (opcodes, field extraction, decode, disassembly).
pub mod isa;
/// Binary loader, simulator loop, and tracing.
pub mod sim;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Architectural state of the machine.
pub use crate::core::Cpu;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
