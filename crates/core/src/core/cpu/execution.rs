//! Instruction Execution.
//!
//! This module applies one decoded instruction to the architectural state. It
//! performs the following:
//! 1. **Data Movement:** Immediate, direct, and register-indirect loads and stores.
//! 2. **Computation:** Dispatch of R-type operations to the ALU.
//! 3. **Control Flow:** pc-relative jumps, calls, and returns.
//!
//! The executor never advances the pc itself. It reports a [`Flow`] and the
//! simulator loop decides whether to add 4 or take the new target.

use crate::common::{Fault, INSTRUCTION_SIZE};
use crate::core::units::alu::{Alu, AluError};
use crate::isa::Instruction;

use super::Cpu;

/// What the loop must do with the pc after an instruction executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Fall through: advance the pc by one instruction.
    Continue,
    /// The instruction retargeted the pc; use this address as-is.
    Jumped(u32),
    /// The program executed `end`.
    Halted,
}

impl Cpu {
    /// Executes a decoded instruction against this state.
    ///
    /// # Arguments
    ///
    /// * `raw` - The raw word the instruction was decoded from (for diagnostics).
    /// * `inst` - The decoded instruction.
    ///
    /// # Returns
    ///
    /// The resulting [`Flow`], or a [`Fault`] tagged with the current pc. A
    /// faulting instruction leaves the state unchanged.
    pub fn execute(&mut self, raw: u32, inst: Instruction) -> Result<Flow, Fault> {
        match inst {
            Instruction::LoadImmediate { rd, imm } => {
                self.regs.write(rd, imm as u32);
            }
            Instruction::LoadIndirect { rd, raddr } => {
                let val = self.memory.read(self.regs.read(raddr));
                self.regs.write(rd, val);
            }
            Instruction::StoreIndirect { raddr, rs } => {
                self.memory.write(self.regs.read(raddr), self.regs.read(rs));
            }
            Instruction::StoreDirect { rs, addr } => {
                self.memory.write(u32::from(addr), self.regs.read(rs));
            }
            Instruction::LoadDirect { rd, addr } => {
                let val = self.memory.read(u32::from(addr));
                self.regs.write(rd, val);
            }

            Instruction::Alu { op, rd, rs1, rs2 } => {
                let result = Alu::execute(op, self.regs.read(rs1), self.regs.read(rs2))
                    .map_err(|e| match e {
                        AluError::DivisionByZero => Fault::DivisionByZero { pc: self.pc, raw },
                    })?;
                self.regs.write(rd, result);
            }

            Instruction::Jump { offset } => return self.jump(offset).map(Flow::Jumped),
            Instruction::JumpRegister { rs } => {
                return self.jump(self.regs.read_signed(rs)).map(Flow::Jumped);
            }
            Instruction::JumpIf { offset, rcond } => {
                if self.regs.read(rcond) != 0 {
                    return self.jump(offset).map(Flow::Jumped);
                }
            }
            Instruction::JumpIfRegister { rs, rcond } => {
                if self.regs.read(rcond) != 0 {
                    return self.jump(self.regs.read_signed(rs)).map(Flow::Jumped);
                }
            }
            Instruction::Return => {
                // An empty stack is a no-op; the loop still advances the pc.
                if let Some(addr) = self.ret_stack.pop() {
                    return Ok(Flow::Jumped(addr));
                }
            }
            Instruction::End => return Ok(Flow::Halted),
            Instruction::Branch { offset } => return self.call(offset).map(Flow::Jumped),
            Instruction::BranchIf { offset, rcond } => {
                if self.regs.read(rcond) != 0 {
                    return self.call(offset).map(Flow::Jumped);
                }
            }
        }
        Ok(Flow::Continue)
    }

    /// Computes a pc-relative target, rejecting misaligned addresses.
    fn jump(&self, offset: i32) -> Result<u32, Fault> {
        let target = self.pc.wrapping_add_signed(offset);
        if target % INSTRUCTION_SIZE != 0 {
            return Err(Fault::MisalignedTarget {
                pc: self.pc,
                target,
            });
        }
        Ok(target)
    }

    /// Computes a call target and pushes the return address.
    ///
    /// The push happens only after the target is validated, so a faulting
    /// call leaves the return stack untouched.
    fn call(&mut self, offset: i32) -> Result<u32, Fault> {
        let target = self.jump(offset)?;
        self.ret_stack.push(self.pc.wrapping_add(INSTRUCTION_SIZE));
        Ok(target)
    }
}
