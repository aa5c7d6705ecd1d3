//! Instruction Decoder.
//!
//! This module turns a raw 32-bit word into an [`Instruction`], the operation
//! descriptor consumed by the executor. Decoding is a pure table lookup on the
//! (category, opcode) pair followed by operand extraction:
//!
//! | Form                   | Layout                                          |
//! |------------------------|-------------------------------------------------|
//! | R-type                 | `rd[23:16] rs1[15:8] rs2[7:0]`                  |
//! | Load-immediate         | `rd[23:16] imm16[15:0]` (sign-extended)         |
//! | Load/Store-indirect    | `raddr[23:16] rd/rs[15:8]`                      |
//! | Load/Store-direct      | `rd/rs[23:16] addr16[15:0]`                     |
//! | Jump/Branch-immediate  | `offset24[23:0]` (sign-extended)                |
//! | Jump/Branch-if         | `imm16[23:8]` or `rs[23:16]`, then `rcond[7:0]` |

use crate::common::DecodeError;
use crate::isa::instruction::{InstructionBits, sign_extend};
use crate::isa::opcodes::{arithmetic, category, comparison, control, logical, memory, shift};

/// Width of the load-immediate and conditional-jump immediates.
const IMM16_BITS: u32 = 16;

/// Width of the unconditional jump and branch offsets.
const OFFSET24_BITS: u32 = 24;

/// Register-register operation performed by the ALU.
///
/// Covers the arithmetic, logical, shift, and comparison categories, which
/// all share the R-type layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Wrapping multiplication.
    Mul,
    /// Signed division truncating toward zero.
    Div,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise NOT-AND.
    Nand,
    /// Bitwise NOT-OR.
    Nor,
    /// Bitwise exclusive OR.
    Xor,
    /// Logical shift left.
    Shl,
    /// Logical shift right.
    Shr,
    /// Signed less-than.
    Lt,
    /// Signed less-than-or-equal.
    Lte,
    /// Signed greater-than.
    Gt,
    /// Signed greater-than-or-equal.
    Gte,
    /// Equality.
    Eq,
}

impl AluOp {
    /// Returns the assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::And => "and",
            Self::Or => "or",
            Self::Nand => "nand",
            Self::Nor => "nor",
            Self::Xor => "xor",
            Self::Shl => "shl",
            Self::Shr => "shr",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Eq => "eq",
        }
    }
}

/// Decoded operation descriptor.
///
/// Register operands are `u8`, so every index is in range for the 256-entry
/// register file. Offsets are already sign-extended and are byte offsets
/// relative to the address of the instruction itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `rd := sign_extend(imm16)`.
    LoadImmediate {
        /// Destination register.
        rd: u8,
        /// Sign-extended immediate.
        imm: i32,
    },
    /// `rd := memory[regs[raddr]]`.
    LoadIndirect {
        /// Destination register.
        rd: u8,
        /// Register holding the address.
        raddr: u8,
    },
    /// `memory[regs[raddr]] := regs[rs]`.
    StoreIndirect {
        /// Register holding the address.
        raddr: u8,
        /// Source register.
        rs: u8,
    },
    /// `memory[addr] := regs[rs]`.
    StoreDirect {
        /// Source register.
        rs: u8,
        /// Absolute address.
        addr: u16,
    },
    /// `rd := memory[addr]`.
    LoadDirect {
        /// Destination register.
        rd: u8,
        /// Absolute address.
        addr: u16,
    },
    /// `rd := regs[rs1] op regs[rs2]`.
    Alu {
        /// Operation.
        op: AluOp,
        /// Destination register.
        rd: u8,
        /// First source register.
        rs1: u8,
        /// Second source register.
        rs2: u8,
    },
    /// `pc += offset`.
    Jump {
        /// Sign-extended 24-bit byte offset.
        offset: i32,
    },
    /// `pc += regs[rs]` (signed).
    JumpRegister {
        /// Register holding the signed byte offset.
        rs: u8,
    },
    /// `if regs[rcond] != 0 { pc += offset }`.
    JumpIf {
        /// Sign-extended 16-bit byte offset.
        offset: i32,
        /// Condition register.
        rcond: u8,
    },
    /// `if regs[rcond] != 0 { pc += regs[rs] }`.
    JumpIfRegister {
        /// Register holding the signed byte offset.
        rs: u8,
        /// Condition register.
        rcond: u8,
    },
    /// Pop the return stack into the pc; no-op when the stack is empty.
    Return,
    /// Terminate the run successfully.
    End,
    /// Push `pc + 4`, then `pc += offset`.
    Branch {
        /// Sign-extended 24-bit byte offset.
        offset: i32,
    },
    /// `if regs[rcond] != 0 { push(pc + 4); pc += offset }`.
    BranchIf {
        /// Sign-extended 16-bit byte offset.
        offset: i32,
        /// Condition register.
        rcond: u8,
    },
}

/// Decodes a 32-bit instruction word.
///
/// # Arguments
///
/// * `inst` - The raw instruction word.
///
/// # Returns
///
/// The operation descriptor, or a [`DecodeError`] naming the raw word when the
/// category or opcode nibble has no table entry.
///
/// # Examples
///
/// ```
/// use yuemu_core::isa::{AluOp, Instruction, decode};
///
/// assert_eq!(
///     decode(0x1002_0001),
///     Ok(Instruction::Alu { op: AluOp::Add, rd: 2, rs1: 0, rs2: 1 })
/// );
/// ```
pub fn decode(inst: u32) -> Result<Instruction, DecodeError> {
    match inst.category() {
        category::MEMORY => decode_memory(inst),
        category::ARITHMETIC => decode_alu(inst, arithmetic_op(inst.opcode())),
        category::CONTROL => decode_control(inst),
        category::LOGICAL => decode_alu(inst, logical_op(inst.opcode())),
        category::SHIFT => decode_alu(inst, shift_op(inst.opcode())),
        category::COMPARISON => decode_alu(inst, comparison_op(inst.opcode())),
        _ => Err(DecodeError::InvalidCategory { raw: inst }),
    }
}

/// Decodes the memory category.
fn decode_memory(inst: u32) -> Result<Instruction, DecodeError> {
    let decoded = match inst.opcode() {
        memory::LOAD_IMMEDIATE => Instruction::LoadImmediate {
            rd: inst.rd(),
            imm: sign_extend(u32::from(inst.imm16_low()), IMM16_BITS),
        },
        memory::LOAD_INDIRECT => Instruction::LoadIndirect {
            raddr: inst.rd(),
            rd: inst.rs1(),
        },
        memory::STORE_INDIRECT => Instruction::StoreIndirect {
            raddr: inst.rd(),
            rs: inst.rs1(),
        },
        memory::STORE_DIRECT => Instruction::StoreDirect {
            rs: inst.rd(),
            addr: inst.imm16_low(),
        },
        memory::LOAD_DIRECT => Instruction::LoadDirect {
            rd: inst.rd(),
            addr: inst.imm16_low(),
        },
        _ => return Err(DecodeError::InvalidOpcode { raw: inst }),
    };
    Ok(decoded)
}

/// Decodes the control category.
fn decode_control(inst: u32) -> Result<Instruction, DecodeError> {
    let offset24 = || sign_extend(inst.offset24(), OFFSET24_BITS);
    let offset16 = || sign_extend(u32::from(inst.imm16_high()), IMM16_BITS);

    let decoded = match inst.opcode() {
        control::JUMP => Instruction::Jump { offset: offset24() },
        control::JUMP_REGISTER => Instruction::JumpRegister { rs: inst.rd() },
        control::JUMP_IF => Instruction::JumpIf {
            offset: offset16(),
            rcond: inst.rs2(),
        },
        control::JUMP_IF_REGISTER => Instruction::JumpIfRegister {
            rs: inst.rd(),
            rcond: inst.rs2(),
        },
        control::RETURN => Instruction::Return,
        control::END => Instruction::End,
        control::BRANCH => Instruction::Branch { offset: offset24() },
        control::BRANCH_IF => Instruction::BranchIf {
            offset: offset16(),
            rcond: inst.rs2(),
        },
        _ => return Err(DecodeError::InvalidOpcode { raw: inst }),
    };
    Ok(decoded)
}

/// Builds an R-type instruction once the opcode has been mapped to an ALU op.
fn decode_alu(inst: u32, op: Option<AluOp>) -> Result<Instruction, DecodeError> {
    let op = op.ok_or(DecodeError::InvalidOpcode { raw: inst })?;
    Ok(Instruction::Alu {
        op,
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
    })
}

const fn arithmetic_op(opcode: u32) -> Option<AluOp> {
    match opcode {
        arithmetic::ADD => Some(AluOp::Add),
        arithmetic::SUB => Some(AluOp::Sub),
        arithmetic::MUL => Some(AluOp::Mul),
        arithmetic::DIV => Some(AluOp::Div),
        _ => None,
    }
}

const fn logical_op(opcode: u32) -> Option<AluOp> {
    match opcode {
        logical::AND => Some(AluOp::And),
        logical::OR => Some(AluOp::Or),
        logical::NAND => Some(AluOp::Nand),
        logical::NOR => Some(AluOp::Nor),
        logical::XOR => Some(AluOp::Xor),
        _ => None,
    }
}

const fn shift_op(opcode: u32) -> Option<AluOp> {
    match opcode {
        shift::LEFT => Some(AluOp::Shl),
        shift::RIGHT => Some(AluOp::Shr),
        _ => None,
    }
}

const fn comparison_op(opcode: u32) -> Option<AluOp> {
    match opcode {
        comparison::LT => Some(AluOp::Lt),
        comparison::LTE => Some(AluOp::Lte),
        comparison::GT => Some(AluOp::Gt),
        comparison::GTE => Some(AluOp::Gte),
        comparison::EQ => Some(AluOp::Eq),
        _ => None,
    }
}
