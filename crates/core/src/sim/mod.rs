//! Program loading and the fetch-decode-execute loop.
//!
//! Provides the loader that turns a flat big-endian image into memory, the
//! trace side channel, and the `Simulator` that drives a `Cpu` to a halt.

pub mod loader;

pub mod simulator;

pub mod trace;

pub use loader::{ProgramImage, load, load_binary, load_program};
pub use simulator::{HaltReason, Simulator, Step};
pub use trace::{TraceSink, TracingSink};
