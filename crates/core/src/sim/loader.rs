//! Binary Loader.
//!
//! This module turns a program file into an initial memory image. It performs:
//! 1. **Binary loading:** One blocking read of the program file into a byte buffer.
//! 2. **Word assembly:** Big-endian 32-bit words, first byte most significant.
//! 3. **Placement:** Word `i` lands at address `4 * i`, starting at 0.
//!
//! Images whose length is not a multiple of 4 are rejected or zero-padded
//! according to [`TrailingBytes`].

use std::fs;
use std::path::Path;

use crate::common::{INSTRUCTION_SIZE, LoadError};
use crate::config::{LoaderConfig, TrailingBytes};
use crate::core::arch::Memory;

/// Bytes per instruction word.
const WORD_BYTES: usize = INSTRUCTION_SIZE as usize;

/// A program laid out in memory, ready to seed a CPU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramImage {
    /// Memory holding the program words at consecutive word addresses.
    pub memory: Memory,
    /// Number of words loaded.
    pub word_count: u32,
}

/// Reads a binary file from disk into a byte vector.
///
/// # Errors
///
/// Returns [`LoadError::Io`] naming the path if the file cannot be read.
pub fn load_binary(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Lays out raw program bytes as big-endian words starting at address 0.
///
/// # Arguments
///
/// * `bytes` - The raw image.
/// * `trailing` - Policy for a final partial word.
///
/// # Errors
///
/// Returns [`LoadError::TrailingBytes`] for a partial final word under
/// [`TrailingBytes::Reject`], and [`LoadError::TooLarge`] when the image has
/// more words than the 32-bit address space can place.
///
/// # Examples
///
/// ```
/// use yuemu_core::config::TrailingBytes;
/// use yuemu_core::sim::loader::load;
///
/// let image = load(&[0x00, 0x00, 0x00, 0x05, 0x25, 0x00, 0x00, 0x00], TrailingBytes::Reject)
///     .unwrap();
/// assert_eq!(image.word_count, 2);
/// assert_eq!(image.memory.read(0), 0x0000_0005);
/// assert_eq!(image.memory.read(4), 0x2500_0000);
/// ```
pub fn load(bytes: &[u8], trailing: TrailingBytes) -> Result<ProgramImage, LoadError> {
    let len = bytes.len();
    let remainder = len % WORD_BYTES;
    if remainder != 0 && trailing == TrailingBytes::Reject {
        return Err(LoadError::TrailingBytes { len });
    }

    let word_count = word_count(len)?;

    let mut memory = Memory::new();
    let mut addr: u32 = 0;
    for chunk in bytes.chunks(WORD_BYTES) {
        let mut word = [0u8; WORD_BYTES];
        word[..chunk.len()].copy_from_slice(chunk);
        memory.write(addr, u32::from_be_bytes(word));
        addr = addr.wrapping_add(INSTRUCTION_SIZE);
    }

    tracing::debug!(bytes = len, words = word_count, "program image laid out");
    Ok(ProgramImage { memory, word_count })
}

/// Number of words an image of `len` bytes occupies.
///
/// The sentinel `4 * word_count` must itself be a 32-bit address, so at most
/// 2^30 - 1 words are accepted.
fn word_count(len: usize) -> Result<u32, LoadError> {
    let words = len.div_ceil(WORD_BYTES);
    u32::try_from(words)
        .ok()
        .filter(|&n| u64::from(n) * u64::from(INSTRUCTION_SIZE) <= u64::from(u32::MAX))
        .ok_or(LoadError::TooLarge { len })
}

/// Reads a program file and lays it out in memory.
///
/// # Errors
///
/// Propagates any [`LoadError`] from reading or layout.
pub fn load_program(path: impl AsRef<Path>, config: &LoaderConfig) -> Result<ProgramImage, LoadError> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "reading program");
    let bytes = load_binary(path)?;
    load(&bytes, config.trailing_bytes)
}
