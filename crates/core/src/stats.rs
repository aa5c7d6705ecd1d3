//! Simulation statistics collection and reporting.
//!
//! This module tracks execution counters for a run. It provides:
//! 1. **Throughput:** Retired instructions, host time, and derived MIPS.
//! 2. **Instruction mix:** Counts by category (memory, arithmetic, control, logical, shift, comparison).
//! 3. **Control flow:** Taken jumps, calls, returns, and returns on an empty stack.

use std::time::Instant;

use crate::core::Flow;
use crate::isa::{AluOp, Instruction};

/// Execution counters for one run.
#[derive(Debug, Clone)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions executed to completion.
    pub instructions_retired: u64,

    /// Count of memory-category instructions retired.
    pub inst_memory: u64,
    /// Count of arithmetic instructions retired.
    pub inst_arithmetic: u64,
    /// Count of control-category instructions retired.
    pub inst_control: u64,
    /// Count of logical instructions retired.
    pub inst_logical: u64,
    /// Count of shift instructions retired.
    pub inst_shift: u64,
    /// Count of comparison instructions retired.
    pub inst_comparison: u64,

    /// Jumps whose target was taken (conditional jumps only when the condition held).
    pub jumps_taken: u64,
    /// Calls that pushed a return address.
    pub calls: u64,
    /// Returns that popped an address.
    pub returns: u64,
    /// Returns executed with an empty return stack.
    pub empty_returns: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_memory: 0,
            inst_arithmetic: 0,
            inst_control: 0,
            inst_logical: 0,
            inst_shift: 0,
            inst_comparison: 0,
            jumps_taken: 0,
            calls: 0,
            returns: 0,
            empty_returns: 0,
        }
    }
}

impl SimStats {
    /// Records one retired instruction and the flow it produced.
    pub fn record(&mut self, inst: &Instruction, flow: Flow) {
        self.instructions_retired += 1;
        let taken = matches!(flow, Flow::Jumped(_));
        match inst {
            Instruction::LoadImmediate { .. }
            | Instruction::LoadIndirect { .. }
            | Instruction::StoreIndirect { .. }
            | Instruction::StoreDirect { .. }
            | Instruction::LoadDirect { .. } => self.inst_memory += 1,
            Instruction::Alu { op, .. } => match op {
                AluOp::Add | AluOp::Sub | AluOp::Mul | AluOp::Div => self.inst_arithmetic += 1,
                AluOp::And | AluOp::Or | AluOp::Nand | AluOp::Nor | AluOp::Xor => {
                    self.inst_logical += 1;
                }
                AluOp::Shl | AluOp::Shr => self.inst_shift += 1,
                AluOp::Lt | AluOp::Lte | AluOp::Gt | AluOp::Gte | AluOp::Eq => {
                    self.inst_comparison += 1;
                }
            },
            Instruction::Jump { .. }
            | Instruction::JumpRegister { .. }
            | Instruction::JumpIf { .. }
            | Instruction::JumpIfRegister { .. } => {
                self.inst_control += 1;
                if taken {
                    self.jumps_taken += 1;
                }
            }
            Instruction::Branch { .. } | Instruction::BranchIf { .. } => {
                self.inst_control += 1;
                if taken {
                    self.calls += 1;
                }
            }
            Instruction::Return => {
                self.inst_control += 1;
                if taken {
                    self.returns += 1;
                } else {
                    self.empty_returns += 1;
                }
            }
            Instruction::End => self.inst_control += 1,
        }
    }

    /// Millions of instructions per host second since the counters were created.
    pub fn mips(&self) -> f64 {
        let seconds = self.start_time.elapsed().as_secs_f64();
        if seconds > 0.0 {
            (self.instructions_retired as f64 / seconds) / 1_000_000.0
        } else {
            0.0
        }
    }

    /// Prints all statistics to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let total = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / total) * 100.0;

        println!("\n==========================================================");
        println!("YUEMU SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_mips                 {:.2}", self.mips());
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        for (name, count) in [
            ("op.memory", self.inst_memory),
            ("op.arithmetic", self.inst_arithmetic),
            ("op.control", self.inst_control),
            ("op.logical", self.inst_logical),
            ("op.shift", self.inst_shift),
            ("op.comparison", self.inst_comparison),
        ] {
            println!("  {name:<22} {count} ({:.2}%)", pct(count));
        }
        println!("----------------------------------------------------------");
        println!("CONTROL FLOW");
        println!("  jumps.taken            {}", self.jumps_taken);
        println!("  calls                  {}", self.calls);
        println!("  returns                {}", self.returns);
        println!("  returns.empty          {}", self.empty_returns);
        println!("==========================================================");
    }
}
