//! Common types and constants shared by the decoder, executor, and loader.
//!
//! This module provides the building blocks used across the emulator:
//! 1. **Constants:** Instruction width, register file size, and dump defaults.
//! 2. **Error Handling:** Decode failures, fatal execution faults, loader and
//!    configuration errors.

/// Common constants used throughout the emulator.
pub mod constants;

/// Error types and fatal fault definitions.
pub mod error;

pub use constants::{INSTRUCTION_SIZE, NUM_REGISTERS};
pub use error::{ConfigError, DecodeError, Fault, LoadError};
