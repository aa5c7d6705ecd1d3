//! Decode, Fault, and Loader error definitions.
//!
//! This module defines the error handling for the emulator. It provides:
//! 1. **Decode Errors:** Words whose category or opcode nibble has no table entry.
//! 2. **Faults:** Fatal conditions that halt a run, tagged with the faulting pc.
//! 3. **Loader and Config Errors:** Failures before execution starts.
//!
//! Nothing here is recoverable at run time: any [`Fault`] ends the run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to decode a 32-bit instruction word.
///
/// The decoder is pure and has no notion of the current pc; the simulator
/// attaches it when converting into a [`Fault`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The category nibble (bits 31-28) matches no known category.
    #[error("invalid category {:#x} in instruction {raw:#010X}", .raw >> 28)]
    InvalidCategory {
        /// Raw instruction word.
        raw: u32,
    },

    /// The category is known but the opcode nibble (bits 27-24) is not.
    #[error("invalid opcode {:#x} in instruction {raw:#010X}", (.raw >> 24) & 0xF)]
    InvalidOpcode {
        /// Raw instruction word.
        raw: u32,
    },
}

impl DecodeError {
    /// Returns the raw word that failed to decode.
    pub const fn raw(&self) -> u32 {
        match self {
            Self::InvalidCategory { raw } | Self::InvalidOpcode { raw } => *raw,
        }
    }

    /// Attaches the pc the word was fetched from, producing a fatal fault.
    pub const fn at(self, pc: u32) -> Fault {
        match self {
            Self::InvalidCategory { raw } => Fault::InvalidCategory { pc, raw },
            Self::InvalidOpcode { raw } => Fault::InvalidOpcode { pc, raw },
        }
    }
}

/// Fatal execution condition.
///
/// Raising a fault stops the run immediately; the instruction that raised it
/// leaves registers, memory, and the return stack untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fault {
    /// Category nibble matches no known category.
    #[error("invalid category at {pc:#010x}: instruction {raw:#010X}")]
    InvalidCategory {
        /// Address of the offending word.
        pc: u32,
        /// Raw instruction word.
        raw: u32,
    },

    /// Opcode nibble is unknown within a known category.
    #[error("invalid opcode at {pc:#010x}: instruction {raw:#010X}")]
    InvalidOpcode {
        /// Address of the offending word.
        pc: u32,
        /// Raw instruction word.
        raw: u32,
    },

    /// `div` with a zero divisor.
    #[error("division by zero at {pc:#010x}: instruction {raw:#010X}")]
    DivisionByZero {
        /// Address of the offending word.
        pc: u32,
        /// Raw instruction word.
        raw: u32,
    },

    /// A jump, branch, or return computed a target that is not word-aligned.
    #[error("misaligned control-transfer target {target:#010x} at {pc:#010x}")]
    MisalignedTarget {
        /// Address of the control instruction.
        pc: u32,
        /// The rejected target address.
        target: u32,
    },
}

impl Fault {
    /// Returns the address of the instruction that raised the fault.
    pub const fn pc(&self) -> u32 {
        match self {
            Self::InvalidCategory { pc, .. }
            | Self::InvalidOpcode { pc, .. }
            | Self::DivisionByZero { pc, .. }
            | Self::MisalignedTarget { pc, .. } => *pc,
        }
    }
}

/// Failure while reading or laying out a program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read program '{}': {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The image length is not a multiple of four and the loader is set to reject it.
    #[error("program length {len} is not a multiple of 4 bytes")]
    TrailingBytes {
        /// Length of the rejected image in bytes.
        len: usize,
    },

    /// The image does not fit in the 32-bit word address space.
    #[error("program of {len} bytes does not fit in the 32-bit address space")]
    TooLarge {
        /// Length of the rejected image in bytes.
        len: usize,
    },
}

/// Failure while reading or parsing a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config '{}': {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The configuration text is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
