//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode tables, field extraction, decoding, and disassembly for
//! the 32-bit load/store instruction set.
//!
//! # Encoding
//!
//! Every instruction is one big-endian 32-bit word:
//!
//! * bits 31-28: category (memory, arithmetic, control, logical, shift, comparison)
//! * bits 27-24: opcode within the category
//! * bits 23-0:  operands, laid out per (category, opcode)

/// Instruction decoding into operation descriptors.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction field extraction and sign extension.
pub mod instruction;

/// Category and opcode numbers.
pub mod opcodes;

pub use decode::{AluOp, Instruction, decode};
pub use disasm::disassemble;
pub use instruction::InstructionBits;
