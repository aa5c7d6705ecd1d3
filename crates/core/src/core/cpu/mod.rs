//! CPU State Definition.
//!
//! This module defines the `Cpu` structure, the container for the complete
//! architectural state of one run:
//! 1. **Registers:** 256 general-purpose 32-bit registers.
//! 2. **Memory:** The sparse word memory, seeded by the loader.
//! 3. **Control:** The program counter and the return address stack.
//!
//! A `Cpu` is an ordinary value: independent instances share nothing and can
//! run side by side in one process.

/// Instruction execution semantics.
pub mod execution;

use crate::core::arch::{Gpr, Memory, ReturnStack};

pub use execution::Flow;

/// Architectural state of the emulated machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: Gpr,
    /// Word memory holding both program and data.
    pub memory: Memory,
    /// Program Counter; always a multiple of 4.
    pub pc: u32,
    /// Return addresses pushed by branch instructions.
    pub ret_stack: ReturnStack,
}

impl Cpu {
    /// Creates a CPU over a loaded memory image.
    ///
    /// The pc starts at 0, every register is 0, and the return stack is empty.
    pub const fn new(memory: Memory) -> Self {
        Self {
            regs: Gpr::new(),
            memory,
            pc: 0,
            ret_stack: ReturnStack::new(),
        }
    }

    /// Fetches the word at the current pc.
    #[inline]
    pub fn fetch(&self) -> u32 {
        self.memory.read(self.pc)
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(Memory::new())
    }
}
