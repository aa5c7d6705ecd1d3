//! Instruction Disassembler.
//!
//! Converts decoded instructions (or raw words) into human-readable text for
//! the trace side channel, fault diagnostics, and test failure messages.
//!
//! # Syntax
//!
//! Registers print as `r0`-`r255`, immediates and offsets as signed decimal,
//! absolute addresses as hex:
//!
//! ```
//! use yuemu_core::isa::disassemble;
//!
//! assert_eq!(disassemble(0x0000_0005), "loadi r0, 5");
//! assert_eq!(disassemble(0x1002_0001), "add r2, r0, r1");
//! assert_eq!(disassemble(0x2500_0000), "end");
//! ```

use std::fmt;

use crate::isa::decode::{Instruction, decode};

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::LoadImmediate { rd, imm } => write!(f, "loadi r{rd}, {imm}"),
            Self::LoadIndirect { rd, raddr } => write!(f, "loadr r{rd}, [r{raddr}]"),
            Self::StoreIndirect { raddr, rs } => write!(f, "storer [r{raddr}], r{rs}"),
            Self::StoreDirect { rs, addr } => write!(f, "stored [{addr:#06x}], r{rs}"),
            Self::LoadDirect { rd, addr } => write!(f, "loadd r{rd}, [{addr:#06x}]"),
            Self::Alu { op, rd, rs1, rs2 } => {
                write!(f, "{} r{rd}, r{rs1}, r{rs2}", op.mnemonic())
            }
            Self::Jump { offset } => write!(f, "jmp {offset}"),
            Self::JumpRegister { rs } => write!(f, "jmpr r{rs}"),
            Self::JumpIf { offset, rcond } => write!(f, "jif {offset}, r{rcond}"),
            Self::JumpIfRegister { rs, rcond } => write!(f, "jifr r{rs}, r{rcond}"),
            Self::Return => f.write_str("ret"),
            Self::End => f.write_str("end"),
            Self::Branch { offset } => write!(f, "br {offset}"),
            Self::BranchIf { offset, rcond } => write!(f, "brif {offset}, r{rcond}"),
        }
    }
}

/// Disassembles a raw 32-bit word.
///
/// Returns the mnemonic and operands, or `unknown 0xXXXXXXXX` for words the
/// decoder rejects.
///
/// # Arguments
///
/// * `inst` - The raw instruction word.
pub fn disassemble(inst: u32) -> String {
    decode(inst).map_or_else(|_| format!("unknown {inst:#010X}"), |i| i.to_string())
}
