//! Diagnostic side channel.
//!
//! The simulator reports every executed instruction and, at the highest
//! verbosity, a register snapshot to a [`TraceSink`]. The sink is advisory:
//! it never influences architectural state. Snapshots are formatted
//! synchronously before the next instruction runs, so they always describe
//! the state at the point they were taken.

use crate::common::Fault;
use crate::core::arch::Gpr;
use crate::isa::Instruction;

use super::simulator::HaltReason;

/// Receiver for per-step trace events.
///
/// The simulator only calls the methods enabled by the configured
/// [`TraceLevel`](crate::config::TraceLevel).
pub trait TraceSink {
    /// An instruction fetched from `pc` has just executed.
    fn instruction(&mut self, pc: u32, inst: &Instruction);

    /// Register state after the instruction at `pc` executed.
    fn registers(&mut self, pc: u32, regs: &Gpr);

    /// The run stopped normally.
    fn halted(&mut self, reason: &HaltReason, retired: u64);

    /// The run stopped on a fatal fault.
    fn fault(&mut self, fault: &Fault);
}

/// Default sink forwarding to `tracing`.
///
/// Instructions are emitted at `DEBUG`, register snapshots at `TRACE`, and
/// lifecycle events at `INFO` (halts) or `ERROR` (faults).
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn instruction(&mut self, pc: u32, inst: &Instruction) {
        tracing::debug!(target: "yuemu::exec", "{pc:#010x}: {inst}");
    }

    fn registers(&mut self, pc: u32, regs: &Gpr) {
        let snapshot = regs.dump();
        tracing::trace!(target: "yuemu::regs", "after {pc:#010x}\n{snapshot}");
    }

    fn halted(&mut self, reason: &HaltReason, retired: u64) {
        tracing::info!(retired, "program halted: {reason}");
    }

    fn fault(&mut self, fault: &Fault) {
        tracing::error!(pc = fault.pc(), "fatal fault: {fault}");
    }
}
