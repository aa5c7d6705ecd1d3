//! General-Purpose Register File.
//!
//! This module implements the register file. It performs the following:
//! 1. **Storage:** Maintains 256 32-bit registers (`r0`-`r255`).
//! 2. **Indexing:** Registers are addressed by `u8`, so every encodable index
//!    is valid and no register is reserved or hardwired.
//! 3. **Debugging:** Renders snapshots of the complete register state.

use std::fmt::Write;

use crate::common::NUM_REGISTERS;
use crate::common::constants::REGISTER_DUMP_COLUMNS;

/// General-Purpose Register file.
///
/// Values are stored as raw 32-bit words; instructions that need signed
/// semantics reinterpret them as two's complement.
#[derive(Clone, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; NUM_REGISTERS],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-255).
    #[inline(always)]
    pub fn read(&self, idx: u8) -> u32 {
        self.regs[usize::from(idx)]
    }

    /// Reads a register as a signed two's-complement value.
    #[inline(always)]
    pub fn read_signed(&self, idx: u8) -> i32 {
        self.read(idx) as i32
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-255).
    /// * `val` - The 32-bit value to write.
    #[inline(always)]
    pub fn write(&mut self, idx: u8, val: u32) {
        self.regs[usize::from(idx)] = val;
    }

    /// Returns all registers in index order.
    pub const fn as_slice(&self) -> &[u32] {
        &self.regs
    }

    /// Renders every register as signed decimal, eight per line.
    ///
    /// The returned string is a complete snapshot taken at call time.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (row, chunk) in self.regs.chunks(REGISTER_DUMP_COLUMNS).enumerate() {
            let base = row * REGISTER_DUMP_COLUMNS;
            for (col, val) in chunk.iter().enumerate() {
                if col > 0 {
                    out.push(' ');
                }
                let _ = write!(out, "r{:<3}={:>11}", base + col, *val as i32);
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Gpr {
    /// Lists only non-zero registers to keep assertion output readable.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.regs
                    .iter()
                    .enumerate()
                    .filter(|&(_, v)| *v != 0)
                    .map(|(i, v)| (i, *v as i32)),
            )
            .finish()
    }
}
