//! LS-8 emulator CLI.
//!
//! This binary provides the command-line entry point to the emulator. It performs:
//! 1. **Run:** Load a program image, execute it to `HLT`, and print `PRN` output to stdout.
//! 2. **Disassemble:** Print a listing of a program image without executing it.
//!
//! Diagnostics go to stderr through `tracing`; set `RUST_LOG` to override the filter.
//! Exit status is 0 on `HLT`, 1 on an execution fault or step limit, and 2 when the
//! image or configuration cannot be loaded.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ls8_core::config::Config;
use ls8_core::isa::disasm;
use ls8_core::sim::loader;
use ls8_core::soc::StdoutConsole;
use ls8_core::{SimError, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 8-bit register machine emulator",
    long_about = "Run or disassemble LS-8 program images.\n\nAn image is a text file with one binary byte per line; `#` starts a comment.\n\nExamples:\n  ls8 run demos/print8.ls8\n  ls8 run demos/mult.ls8 --trace --stats\n  ls8 disasm demos/call.ls8\n  ls8 run demos/countdown.ls8 --config demos/conventional.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Execute a program image until it halts.
    Run {
        /// Program image to execute.
        image: PathBuf,

        /// JSON configuration file (ALU mode, stack discipline, reset values).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Log the machine state before every instruction to stderr.
        #[arg(long)]
        trace: bool,

        /// Print execution statistics to stderr when the run ends.
        #[arg(long)]
        stats: bool,

        /// Stop with an error after this many instructions.
        #[arg(long, value_name = "N")]
        max_steps: Option<u64>,
    },

    /// Print a disassembly listing of a program image.
    Disasm {
        /// Program image to list.
        image: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let trace = matches!(cli.command, Commands::Run { trace: true, .. });
    init_logging(trace);

    let result = match cli.command {
        Commands::Run {
            image,
            config,
            trace,
            stats,
            max_steps,
        } => cmd_run(&image, config.as_deref(), trace, stats, max_steps),
        Commands::Disasm { image } => cmd_disasm(&image),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[!] {e}");
            if e.is_load_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over the built-in filter.
fn init_logging(trace: bool) {
    let default = if trace {
        "ls8_core=debug,ls8::trace=trace"
    } else {
        "ls8_core=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Loads and runs an image; prints the final state on a fault.
fn cmd_run(
    image: &Path,
    config: Option<&Path>,
    trace: bool,
    stats: bool,
    max_steps: Option<u64>,
) -> Result<(), SimError> {
    let mut config = match config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    config.general.trace_instructions |= trace;

    let mut sim = Simulator::new(&config, StdoutConsole);
    let _ = sim.load_file(image)?;

    let result = sim.run(max_steps);
    if result.is_err() {
        eprintln!("{}", sim.cpu.dump_state());
    }
    if stats {
        eprintln!("{}", sim.cpu.stats);
    }
    let _ = result?;
    Ok(())
}

fn cmd_disasm(image: &Path) -> Result<(), SimError> {
    let bytes = loader::load_image_file(image)?;
    for line in disasm::listing(&bytes) {
        println!("{line}");
    }
    Ok(())
}
