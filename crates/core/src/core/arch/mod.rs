//! Architectural state components.
//!
//! This module contains the pieces of state an instruction can observe:
//! 1. **GPRs:** The 256-entry general-purpose register file.
//! 2. **Memory:** The sparse word-addressed memory map.
//! 3. **Return Stack:** The LIFO of call return addresses.

/// General-Purpose Register file implementation.
pub mod gpr;

/// Sparse word memory.
pub mod memory;

/// Return address stack for branch/return.
pub mod ras;

pub use gpr::Gpr;
pub use memory::Memory;
pub use ras::ReturnStack;
