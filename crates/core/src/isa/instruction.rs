//! Instruction field extraction.
//!
//! Provides bit extraction for the fixed fields of a 32-bit instruction word.
//! Which fields are meaningful depends on the (category, opcode) pair; the
//! decoder picks the ones that apply.

/// Bit shift of the category nibble.
pub const CATEGORY_SHIFT: u32 = 28;
/// Bit shift of the opcode nibble.
pub const OPCODE_SHIFT: u32 = 24;
/// Bit mask for a 4-bit category or opcode nibble.
pub const NIBBLE_MASK: u32 = 0xF;
/// Bit mask for an 8-bit register field.
pub const REG_MASK: u32 = 0xFF;
/// Bit mask for a 16-bit immediate or address field.
pub const IMM16_MASK: u32 = 0xFFFF;
/// Bit mask for the 24-bit jump offset field.
pub const OFFSET24_MASK: u32 = 0x00FF_FFFF;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Field names follow the R-type layout; other layouts reuse the same bit
/// positions under different names (for example `raddr` is the `rd` slot).
pub trait InstructionBits {
    /// Extracts the category nibble (bits 31-28).
    fn category(&self) -> u32;

    /// Extracts the opcode nibble (bits 27-24).
    fn opcode(&self) -> u32;

    /// Extracts the register field at bits 23-16.
    fn rd(&self) -> u8;

    /// Extracts the register field at bits 15-8.
    fn rs1(&self) -> u8;

    /// Extracts the register field at bits 7-0.
    fn rs2(&self) -> u8;

    /// Extracts the unsigned 16-bit field at bits 15-0.
    fn imm16_low(&self) -> u16;

    /// Extracts the unsigned 16-bit field at bits 23-8.
    fn imm16_high(&self) -> u16;

    /// Extracts the unsigned 24-bit field at bits 23-0.
    fn offset24(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn category(&self) -> u32 {
        (self >> CATEGORY_SHIFT) & NIBBLE_MASK
    }

    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & NIBBLE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> u8 {
        ((self >> 16) & REG_MASK) as u8
    }

    #[inline(always)]
    fn rs1(&self) -> u8 {
        ((self >> 8) & REG_MASK) as u8
    }

    #[inline(always)]
    fn rs2(&self) -> u8 {
        (self & REG_MASK) as u8
    }

    #[inline(always)]
    fn imm16_low(&self) -> u16 {
        (self & IMM16_MASK) as u16
    }

    #[inline(always)]
    fn imm16_high(&self) -> u16 {
        ((self >> 8) & IMM16_MASK) as u16
    }

    #[inline(always)]
    fn offset24(&self) -> u32 {
        self & OFFSET24_MASK
    }
}

/// Sign extends the low `bits` bits of `val` to a 32-bit signed integer.
///
/// # Arguments
///
/// * `val` - The value to extend; bits above `bits` are ignored.
/// * `bits` - Width of the field, 1 to 32.
///
/// # Examples
///
/// ```
/// use yuemu_core::isa::instruction::sign_extend;
///
/// assert_eq!(sign_extend(0xFFFF, 16), -1);
/// assert_eq!(sign_extend(0x7FFF, 16), 0x7FFF);
/// assert_eq!(sign_extend(0x80_0000, 24), -0x80_0000);
/// ```
#[inline]
pub const fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = 32 - bits;
    ((val << shift) as i32) >> shift
}
