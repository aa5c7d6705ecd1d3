//! Category and Opcode Numbers.
//!
//! Defines the category nibble (bits 31-28) and, per category, the opcode
//! nibble (bits 27-24) of every instruction.

/// Category nibbles (bits 31-28).
pub mod category {
    /// Loads and stores.
    pub const MEMORY: u32 = 0x0;
    /// Integer arithmetic (add, sub, mul, div).
    pub const ARITHMETIC: u32 = 0x1;
    /// Jumps, calls, returns, and program end.
    pub const CONTROL: u32 = 0x2;
    /// Bitwise logic.
    pub const LOGICAL: u32 = 0x3;
    /// Logical shifts.
    pub const SHIFT: u32 = 0x4;
    /// Signed comparisons.
    pub const COMPARISON: u32 = 0x5;
}

/// Memory category opcodes.
pub mod memory {
    /// `loadi rd, imm16`: load sign-extended immediate.
    pub const LOAD_IMMEDIATE: u32 = 0x0;
    /// `loadr rd, raddr`: load from the address held in a register.
    pub const LOAD_INDIRECT: u32 = 0x1;
    /// `storer raddr, rs`: store to the address held in a register.
    pub const STORE_INDIRECT: u32 = 0x2;
    /// `stored addr16, rs`: store to an absolute address.
    pub const STORE_DIRECT: u32 = 0x3;
    /// `loadd rd, addr16`: load from an absolute address.
    pub const LOAD_DIRECT: u32 = 0x4;
}

/// Arithmetic category opcodes.
pub mod arithmetic {
    /// Wrapping addition.
    pub const ADD: u32 = 0x0;
    /// Wrapping subtraction.
    pub const SUB: u32 = 0x1;
    /// Wrapping multiplication.
    pub const MUL: u32 = 0x2;
    /// Signed truncating division.
    pub const DIV: u32 = 0x3;
}

/// Control category opcodes.
pub mod control {
    /// Unconditional pc-relative jump by a 24-bit offset.
    pub const JUMP: u32 = 0x0;
    /// Unconditional pc-relative jump by a register value.
    pub const JUMP_REGISTER: u32 = 0x1;
    /// Conditional pc-relative jump by a 16-bit offset.
    pub const JUMP_IF: u32 = 0x2;
    /// Conditional pc-relative jump by a register value.
    pub const JUMP_IF_REGISTER: u32 = 0x3;
    /// Pop the return stack into the pc.
    pub const RETURN: u32 = 0x4;
    /// Terminate the program.
    pub const END: u32 = 0x5;
    /// Call: push pc+4, then jump by a 24-bit offset.
    pub const BRANCH: u32 = 0x6;
    /// Conditional call by a 16-bit offset.
    pub const BRANCH_IF: u32 = 0x7;
}

/// Logical category opcodes.
pub mod logical {
    /// Bitwise AND.
    pub const AND: u32 = 0x0;
    /// Bitwise OR.
    pub const OR: u32 = 0x1;
    /// Bitwise NAND.
    pub const NAND: u32 = 0x2;
    /// Bitwise NOR.
    pub const NOR: u32 = 0x3;
    /// Bitwise XOR.
    pub const XOR: u32 = 0x4;
}

/// Shift category opcodes.
pub mod shift {
    /// Logical shift left.
    pub const LEFT: u32 = 0x0;
    /// Logical shift right.
    pub const RIGHT: u32 = 0x1;
}

/// Comparison category opcodes.
pub mod comparison {
    /// Signed less-than.
    pub const LT: u32 = 0x0;
    /// Signed less-than-or-equal.
    pub const LTE: u32 = 0x1;
    /// Signed greater-than.
    pub const GT: u32 = 0x2;
    /// Signed greater-than-or-equal.
    pub const GTE: u32 = 0x3;
    /// Equality.
    pub const EQ: u32 = 0x4;
}
