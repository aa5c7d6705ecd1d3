//! Simulator: drives a `Cpu` through the fetch-decode-execute loop.
//!
//! Each [`Simulator::step`] performs, in order:
//! 1. **Sentinel check:** Stop with [`HaltReason::EndOfProgram`] once the pc
//!    reaches the end-of-program address.
//! 2. **Budget check:** Stop with [`HaltReason::InstructionLimit`] once the
//!    configured instruction budget is spent.
//! 3. **Fetch and decode:** Read the word at the pc and decode it.
//! 4. **Execute:** Apply it to the CPU, then advance the pc by 4 or take the
//!    new target.
//!
//! Halting and faulting are terminal: once either happens, further calls to
//! `step` return the same outcome without touching the CPU.

use std::fmt::{self, Write as _};

use crate::common::{Fault, INSTRUCTION_SIZE};
use crate::config::{Config, GeneralConfig, TraceLevel};
use crate::core::{Cpu, Flow};
use crate::isa::decode;
use crate::stats::SimStats;

use super::loader::ProgramImage;
use super::trace::{TraceSink, TracingSink};

/// Why a run stopped without a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// The program executed `end`.
    EndInstruction,
    /// The pc reached the end-of-program sentinel.
    EndOfProgram,
    /// The configured instruction budget was exhausted.
    InstructionLimit,
}

impl fmt::Display for HaltReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::EndInstruction => "end instruction",
            Self::EndOfProgram => "end of program",
            Self::InstructionLimit => "instruction limit reached",
        };
        f.write_str(s)
    }
}

/// Outcome of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// An instruction executed and the run can continue.
    Running,
    /// The run is over.
    Halted(HaltReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Running,
    Halted(HaltReason),
    Faulted(Fault),
}

/// Top-level simulator: CPU architectural state plus run bookkeeping.
pub struct Simulator {
    /// CPU architectural state (registers, memory, pc, return stack).
    pub cpu: Cpu,
    /// Execution counters.
    pub stats: SimStats,
    sentinel: u32,
    config: GeneralConfig,
    sink: Box<dyn TraceSink>,
    state: RunState,
}

impl fmt::Debug for Simulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulator")
            .field("cpu", &self.cpu)
            .field("sentinel", &self.sentinel)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Simulator {
    /// Creates a simulator for `image`, tracing through [`TracingSink`].
    pub fn new(image: ProgramImage, config: &Config) -> Self {
        Self::with_sink(image, config, Box::new(TracingSink))
    }

    /// Creates a simulator that reports trace events to `sink`.
    pub fn with_sink(image: ProgramImage, config: &Config, sink: Box<dyn TraceSink>) -> Self {
        let sentinel = config.general.end_of_program.sentinel(image.word_count);
        Self {
            cpu: Cpu::new(image.memory),
            stats: SimStats::default(),
            sentinel,
            config: config.general.clone(),
            sink,
            state: RunState::Running,
        }
    }

    /// Address at which the run stops with [`HaltReason::EndOfProgram`].
    pub const fn sentinel(&self) -> u32 {
        self.sentinel
    }

    /// Returns `true` once the run has halted or faulted.
    pub const fn is_finished(&self) -> bool {
        !matches!(self.state, RunState::Running)
    }

    /// Executes one instruction.
    ///
    /// # Errors
    ///
    /// Returns the [`Fault`] raised by the instruction at the current pc. The
    /// faulting instruction leaves the CPU untouched and the simulator stays
    /// faulted.
    pub fn step(&mut self) -> Result<Step, Fault> {
        match self.state {
            RunState::Running => {}
            RunState::Halted(reason) => return Ok(Step::Halted(reason)),
            RunState::Faulted(fault) => return Err(fault),
        }

        let pc = self.cpu.pc;
        if pc == self.sentinel {
            return Ok(self.halt(HaltReason::EndOfProgram));
        }
        if self
            .config
            .max_instructions
            .is_some_and(|limit| self.stats.instructions_retired >= limit)
        {
            return Ok(self.halt(HaltReason::InstructionLimit));
        }

        let raw = self.cpu.fetch();
        let inst = match decode(raw) {
            Ok(inst) => inst,
            Err(e) => return Err(self.fail(e.at(pc))),
        };
        let flow = match self.cpu.execute(raw, inst) {
            Ok(flow) => flow,
            Err(fault) => return Err(self.fail(fault)),
        };

        self.stats.record(&inst, flow);
        let trace = self.config.trace;
        if trace >= TraceLevel::Instructions {
            self.sink.instruction(pc, &inst);
        }
        if trace >= TraceLevel::Registers {
            self.sink.registers(pc, &self.cpu.regs);
        }

        match flow {
            Flow::Continue => self.cpu.pc = pc.wrapping_add(INSTRUCTION_SIZE),
            Flow::Jumped(target) => self.cpu.pc = target,
            Flow::Halted => return Ok(self.halt(HaltReason::EndInstruction)),
        }
        Ok(Step::Running)
    }

    /// Steps until the program halts.
    ///
    /// # Errors
    ///
    /// Returns the first [`Fault`] raised.
    pub fn run(&mut self) -> Result<HaltReason, Fault> {
        tracing::info!(sentinel = self.sentinel, "running program");
        loop {
            if let Step::Halted(reason) = self.step()? {
                return Ok(reason);
            }
        }
    }

    /// Formats every written memory location at or above `base`.
    ///
    /// One line per location, ascending by address, with the value shown as a
    /// signed integer.
    pub fn memory_dump(&self, base: u32) -> String {
        let mut out = String::new();
        for (addr, val) in self.cpu.memory.iter_from(base) {
            let _ = writeln!(out, "{addr:#010x}: {}", val as i32);
        }
        out
    }

    /// Formats the memory dump at the configured base address.
    pub fn default_memory_dump(&self) -> String {
        self.memory_dump(self.config.dump_base)
    }

    fn halt(&mut self, reason: HaltReason) -> Step {
        self.state = RunState::Halted(reason);
        self.sink.halted(&reason, self.stats.instructions_retired);
        Step::Halted(reason)
    }

    fn fail(&mut self, fault: Fault) -> Fault {
        self.state = RunState::Faulted(fault);
        self.sink.fault(&fault);
        fault
    }
}
