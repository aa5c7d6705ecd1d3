//! Configuration system for the emulator.
//!
//! This module defines the configuration structures and enums used to
//! parameterize a run. It provides:
//! 1. **Defaults:** Baseline constants (trace level, dump base, sentinel policy).
//! 2. **Structures:** Hierarchical config for general execution and the loader.
//! 3. **Enums:** Trace verbosity, end-of-program sentinel, and trailing-byte policy.
//!
//! Configuration is deserialized from JSON (`Config::from_json` /
//! `Config::from_file`); every field is optional. The CLI starts from
//! `Config::default()` or a file and applies flag overrides on top.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants.
mod defaults {
    /// Lowest address included in the end-of-run memory dump.
    pub const DUMP_BASE: u32 = crate::common::constants::DEFAULT_DUMP_BASE;
}

/// Trace verbosity.
///
/// Each tier includes everything from the tiers below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum TraceLevel {
    /// No per-step trace.
    #[default]
    Off,
    /// Mnemonic and operands of every executed instruction.
    Instructions,
    /// Instructions plus a full register snapshot after every step.
    Registers,
}

/// Which address stops the run before it executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum EndOfProgram {
    /// Halt at `4 * word_count`, one past the last loaded word.
    ///
    /// Every loaded word can execute.
    #[default]
    PastLastWord,
    /// Halt at `4 * (word_count - 1)`, the address of the last loaded word.
    ///
    /// The last word never executes. Matches images produced for tools that
    /// expected a trailing padding word.
    LastWord,
}

impl EndOfProgram {
    /// Returns the sentinel address for an image of `word_count` words.
    ///
    /// An empty image yields 0 under both policies.
    pub const fn sentinel(self, word_count: u32) -> u32 {
        let words = match self {
            Self::PastLastWord => word_count,
            Self::LastWord => word_count.saturating_sub(1),
        };
        words.wrapping_mul(crate::common::INSTRUCTION_SIZE)
    }
}

/// What the loader does with a final partial word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum TrailingBytes {
    /// Reject images whose length is not a multiple of 4.
    #[default]
    Reject,
    /// Complete the final word with zero low-order bytes.
    ZeroPad,
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use yuemu_core::config::{Config, EndOfProgram, TraceLevel, TrailingBytes};
///
/// let json = r#"{
///     "general": {
///         "trace": "Instructions",
///         "end_of_program": "LastWord",
///         "max_instructions": 1000000
///     },
///     "loader": {
///         "trailing_bytes": "ZeroPad"
///     }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.trace, TraceLevel::Instructions);
/// assert_eq!(config.general.end_of_program, EndOfProgram::LastWord);
/// assert_eq!(config.general.max_instructions, Some(1_000_000));
/// assert_eq!(config.general.dump_base, 0x100);
/// assert_eq!(config.loader.trailing_bytes, TrailingBytes::ZeroPad);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Execution and diagnostics settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Program loader settings
    #[serde(default)]
    pub loader: LoaderConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid JSON for this
    /// structure.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// Execution and diagnostics settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Trace verbosity for the diagnostic side channel
    #[serde(default)]
    pub trace: TraceLevel,

    /// Sentinel policy for the end of the loaded program
    #[serde(default)]
    pub end_of_program: EndOfProgram,

    /// Stop after this many executed instructions (unlimited if unset)
    #[serde(default)]
    pub max_instructions: Option<u64>,

    /// Lowest address shown in the end-of-run memory dump
    #[serde(default = "GeneralConfig::default_dump_base")]
    pub dump_base: u32,
}

impl GeneralConfig {
    /// Returns the default memory dump base address.
    const fn default_dump_base() -> u32 {
        defaults::DUMP_BASE
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace: TraceLevel::default(),
            end_of_program: EndOfProgram::default(),
            max_instructions: None,
            dump_base: defaults::DUMP_BASE,
        }
    }
}

/// Program loader settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct LoaderConfig {
    /// Policy for images whose length is not a multiple of 4
    #[serde(default)]
    pub trailing_bytes: TrailingBytes,
}
