use yuemu_core::Simulator;
use yuemu_core::common::Fault;
use yuemu_core::config::{Config, TrailingBytes};
use yuemu_core::core::Cpu;
use yuemu_core::sim::{HaltReason, load};
use yuemu_core::sim::trace::TraceSink;

/// Serializes instruction words into a big-endian program image.
pub fn image_bytes(program: &[u32]) -> Vec<u8> {
    program.iter().flat_map(|w| w.to_be_bytes()).collect()
}

pub struct TestContext {
    pub sim: Simulator,
}

impl TestContext {
    /// Loads `program` at address 0 with the default configuration.
    pub fn new(program: &[u32]) -> Self {
        Self::with_config(program, &Config::default())
    }

    pub fn with_config(program: &[u32], config: &Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init();

        let image = load(&image_bytes(program), TrailingBytes::Reject).unwrap();
        Self {
            sim: Simulator::new(image, config),
        }
    }

    pub fn with_sink(program: &[u32], config: &Config, sink: Box<dyn TraceSink>) -> Self {
        let image = load(&image_bytes(program), TrailingBytes::Reject).unwrap();
        Self {
            sim: Simulator::with_sink(image, config, sink),
        }
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    /// Set a general-purpose register value.
    pub fn set_reg(&mut self, reg: u8, val: u32) {
        self.sim.cpu.regs.write(reg, val);
    }

    /// Read a general-purpose register value.
    pub fn get_reg(&self, reg: u8) -> u32 {
        self.sim.cpu.regs.read(reg)
    }

    /// Read a general-purpose register as a signed value.
    pub fn get_signed(&self, reg: u8) -> i32 {
        self.sim.cpu.regs.read_signed(reg)
    }

    pub fn run(&mut self) -> Result<HaltReason, Fault> {
        self.sim.run()
    }

    /// Runs to completion and panics on a fault.
    pub fn run_ok(&mut self) -> HaltReason {
        match self.sim.run() {
            Ok(reason) => reason,
            Err(fault) => panic!("unexpected fault: {fault}"),
        }
    }
}
