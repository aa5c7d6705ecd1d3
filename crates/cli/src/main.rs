//! yuemu command-line runner.
//!
//! This binary loads one program image and runs it to completion. It performs:
//! 1. **Configuration:** Defaults, an optional JSON file, then flag overrides.
//! 2. **Execution:** Load, run, and report the halt reason or fault.
//! 3. **Reporting:** Optional memory dump and execution statistics.
//!
//! Exit status: 0 on a normal halt, 1 on a usage, config, or load error,
//! 2 on a fatal fault, and 3 when the instruction budget ran out.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use yuemu_core::common::{ConfigError, LoadError};
use yuemu_core::config::{Config, EndOfProgram, TraceLevel, TrailingBytes};
use yuemu_core::sim::{HaltReason, Simulator, load_program};

const EXIT_OK: u8 = 0;
const EXIT_USAGE: u8 = 1;
const EXIT_FAULT: u8 = 2;
const EXIT_LIMIT: u8 = 3;

#[derive(Parser, Debug)]
#[command(
    name = "yuemu",
    author,
    version,
    about = "Emulator for the yuemu 32-bit load/store instruction set",
    long_about = "Load a flat big-endian program image at address 0 and run it until it \
executes `end`, reaches the end of the loaded program, or faults.\n\nExamples:\n  \
yuemu program.bin\n  yuemu -vv --dump-memory program.bin\n  \
yuemu --config run.json --max-instructions 100000 program.bin"
)]
struct Cli {
    /// Program image to execute.
    program: PathBuf,

    /// Trace executed instructions (-v) and register snapshots (-vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// JSON configuration file; flags override its values.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print execution statistics after the run.
    #[arg(long)]
    stats: bool,

    /// Print written memory at or above the dump base after the run.
    #[arg(long)]
    dump_memory: bool,

    /// Lowest address included in the memory dump (decimal or 0x-prefixed hex).
    #[arg(long, value_name = "ADDR", value_parser = parse_u32)]
    dump_base: Option<u32>,

    /// Stop after this many executed instructions.
    #[arg(long, value_name = "N")]
    max_instructions: Option<u64>,

    /// Stop at the address of the last loaded word instead of one past it.
    #[arg(long)]
    legacy_sentinel: bool,

    /// Zero-pad a final partial word instead of rejecting the image.
    #[arg(long)]
    zero_pad: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    init_tracing(config.general.trace);
    ExitCode::from(exit_status(&cli, &config))
}

/// Default log filter for a trace level; instruction and register events
/// are emitted at `debug` and `trace`.
const fn default_filter(level: TraceLevel) -> &'static str {
    match level {
        TraceLevel::Off => "info",
        TraceLevel::Instructions => "debug",
        TraceLevel::Registers => "trace",
    }
}

/// Installs a stderr `fmt` subscriber. `RUST_LOG` overrides the trace level.
fn init_tracing(level: TraceLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

/// Builds the effective configuration from the optional file and the flags.
fn build_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let level = match cli.verbose {
        0 => TraceLevel::Off,
        1 => TraceLevel::Instructions,
        _ => TraceLevel::Registers,
    };
    config.general.trace = config.general.trace.max(level);

    if let Some(base) = cli.dump_base {
        config.general.dump_base = base;
    }
    if cli.max_instructions.is_some() {
        config.general.max_instructions = cli.max_instructions;
    }
    if cli.legacy_sentinel {
        config.general.end_of_program = EndOfProgram::LastWord;
    }
    if cli.zero_pad {
        config.loader.trailing_bytes = TrailingBytes::ZeroPad;
    }
    Ok(config)
}

/// Runs the program and maps the outcome to a process exit status.
fn exit_status(cli: &Cli, config: &Config) -> u8 {
    match run(cli, config) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("error: {e}");
            EXIT_USAGE
        }
    }
}

fn run(cli: &Cli, config: &Config) -> Result<u8, LoadError> {
    let image = load_program(&cli.program, &config.loader)?;
    let mut sim = Simulator::new(image, config);

    let status = match sim.run() {
        Ok(reason) => {
            println!("Program halted: {reason}");
            match reason {
                HaltReason::EndInstruction | HaltReason::EndOfProgram => EXIT_OK,
                HaltReason::InstructionLimit => EXIT_LIMIT,
            }
        }
        // The fault itself is reported by the trace sink.
        Err(_) => {
            eprintln!("pc = {:#010x}", sim.cpu.pc);
            eprint!("{}", sim.cpu.regs.dump());
            EXIT_FAULT
        }
    };

    if cli.dump_memory {
        println!(
            "\nMemory map from {:#06x}\n----------------",
            config.general.dump_base
        );
        print!("{}", sim.default_memory_dump());
    }
    if cli.stats {
        sim.stats.print();
    }
    Ok(status)
}

/// Parses a `u32` given in decimal or with a `0x` prefix.
fn parse_u32(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid address '{s}': {e}"))
}
