//! Global Emulator Constants.
//!
//! This module defines constants used across the emulator. It includes:
//! 1. **Instruction Constants:** Instruction width and the pc step.
//! 2. **Register Constants:** Size of the general-purpose register file.
//! 3. **Diagnostics Constants:** Defaults for register and memory dumps.

/// Size of one instruction word in bytes; the pc advances by this amount.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Number of general-purpose registers (`r0`-`r255`).
pub const NUM_REGISTERS: usize = 256;

/// Lowest address included in the end-of-run memory dump.
///
/// Programs conventionally keep their code below this address and write
/// results above it.
pub const DEFAULT_DUMP_BASE: u32 = 0x100;

/// Number of registers printed per line in a register snapshot.
pub const REGISTER_DUMP_COLUMNS: usize = 8;
