//! MIPS-subset assembler and simulator CLI.
//!
//! This binary provides a single entry point for the toolchain. It performs:
//! 1. **Run:** Assemble a source file (or load a hex listing) and execute it.
//! 2. **Assemble:** Emit the hex machine-code listing for a source file.
//! 3. **Check:** Run test programs and evaluate their `#assert(...)` comments.

use std::path::{Path, PathBuf};
use std::{fs, process};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use mipsim_core::asm::{Assembler, Program};
use mipsim_core::config::Config;
use mipsim_core::sim::assertion::{self, Status};
use mipsim_core::sim::{Simulator, StopReason, loader};
use mipsim_core::stats::STATS_SECTIONS;

/// Listing suffix paired with a test source.
const TXT_SUFFIX: &str = ".txt";
/// Source suffix carrying a test's assertions.
const S_SUFFIX: &str = "_info.s";

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "MIPS-subset assembler and single-cycle simulator",
    long_about = "Assemble and run programs for a seven-instruction MIPS subset \
                  (and, slt, addi, lui, lw, sw, beq).\n\nExamples:\n  \
                  mipsim run prog.s --until-idle\n  \
                  mipsim asm prog.s -o prog.txt\n  \
                  mipsim check tests/*_info.s"
)]
struct Cli {
    /// Log every executed instruction (raises the log level to debug).
    #[arg(long, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program and print the final state.
    Run {
        /// Assembly source (`.s`) or hex listing (`.txt`).
        file: PathBuf,

        /// Cycle budget (defaults to `general.max_cycles`).
        #[arg(long)]
        max_cycles: Option<u64>,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Stop as soon as the program idles instead of using the whole budget.
        #[arg(long)]
        until_idle: bool,

        /// Start at this label instead of the configured start PC.
        #[arg(long)]
        entry: Option<String>,

        /// Print the final state as JSON.
        #[arg(long)]
        json: bool,

        /// Statistics sections to print (comma separated; default all).
        #[arg(long, value_delimiter = ',')]
        stats: Vec<String>,
    },

    /// Assemble a source file into a hex listing.
    Asm {
        /// Assembly source.
        file: PathBuf,

        /// Write the listing here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print an annotated disassembly instead of the bare listing.
        #[arg(long)]
        disasm: bool,
    },

    /// Run test programs and check their assertions.
    Check {
        /// Test files ending in `.txt` or `_info.s`.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Cycle budget per test (defaults to `general.max_cycles`).
        #[arg(long)]
        max_cycles: Option<u64>,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.trace);

    match cli.command {
        Commands::Run {
            file,
            max_cycles,
            config,
            until_idle,
            entry,
            json,
            stats,
        } => {
            let mut config = load_config(config.as_deref())?;
            config.general.trace_instructions |= cli.trace;
            let opts = RunOptions {
                max_cycles: max_cycles.unwrap_or(config.general.max_cycles),
                until_idle,
                entry,
                json,
                stats,
            };
            cmd_run(&file, &config, &opts)
        }
        Commands::Asm {
            file,
            output,
            disasm,
        } => cmd_asm(&file, output.as_deref(), disasm),
        Commands::Check {
            files,
            max_cycles,
            config,
        } => {
            let mut config = load_config(config.as_deref())?;
            config.general.trace_instructions |= cli.trace;
            let budget = max_cycles.unwrap_or(config.general.max_cycles);
            if !cmd_check(&files, &config, budget) {
                process::exit(1);
            }
            Ok(())
        }
    }
}

/// Installs the global subscriber; `RUST_LOG` wins unless `--trace` was given.
fn init_logger(trace: bool) {
    let filter = if trace {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Reads a JSON config, or returns the defaults when no path is given.
fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    Config::from_json(&text).with_context(|| format!("invalid config {}", path.display()))
}

/// Loads a program: `.txt` files are hex listings, anything else is assembled.
fn load_program(path: &Path) -> Result<Program> {
    if path.extension().is_some_and(|ext| ext == "txt") {
        return loader::load_listing_program(path)
            .with_context(|| format!("failed to load listing {}", path.display()));
    }
    let source = loader::load_source(path)
        .with_context(|| format!("failed to read source {}", path.display()))?;
    Assembler::assemble(&source).with_context(|| format!("failed to assemble {}", path.display()))
}

#[derive(Debug)]
struct RunOptions {
    max_cycles: u64,
    until_idle: bool,
    entry: Option<String>,
    json: bool,
    stats: Vec<String>,
}

/// Runs one program and prints its final state and statistics.
///
/// On an execution error the state at the faulting instruction is dumped
/// before the error is returned.
fn cmd_run(path: &Path, config: &Config, opts: &RunOptions) -> Result<()> {
    let sections: Vec<&str> = opts.stats.iter().map(String::as_str).collect();
    if let Some(bad) = sections.iter().find(|s| !STATS_SECTIONS.contains(*s)) {
        bail!(
            "unknown stats section `{bad}` (expected one of {})",
            STATS_SECTIONS.join(", ")
        );
    }

    let program = load_program(path)?;
    info!(path = %path.display(), instructions = program.len(), "loaded program");

    let mut sim = Simulator::new(program, config);
    if let Some(label) = &opts.entry {
        sim = sim
            .with_entry(label)
            .with_context(|| format!("entry label `{label}` is not defined"))?;
    }

    let result = if opts.until_idle {
        sim.run_until_idle(opts.max_cycles)
    } else {
        sim.run(opts.max_cycles)
    };

    match result {
        Ok(summary) => {
            let why = match summary.stop {
                StopReason::Idle => "idle loop detected",
                StopReason::CycleBudget => "cycle budget reached",
            };
            info!(cycles = summary.cycles, "stopped: {why}");
        }
        Err(err) => {
            eprintln!("\n[!] FATAL: {err}");
            eprint!("{}", sim.cpu().dump_state());
            eprint!("{}", sim.stats().report_sections(&sections));
            return Err(err).context("execution failed");
        }
    }

    if opts.json {
        let json = serde_json::to_string_pretty(&sim.snapshot())
            .context("failed to serialize final state")?;
        println!("{json}");
    } else {
        print!("{}", sim.cpu().dump_state());
    }
    print!("{}", sim.stats().report_sections(&sections));
    Ok(())
}

/// Assembles a source file and writes its listing.
fn cmd_asm(path: &Path, output: Option<&Path>, disasm: bool) -> Result<()> {
    let program = load_program(path)?;
    let text = if disasm {
        program.disassembly()
    } else {
        program.to_hex_listing()
    };
    match output {
        Some(out) => {
            fs::write(out, text).with_context(|| format!("failed to write {}", out.display()))?;
            info!(path = %out.display(), words = program.len(), "wrote listing");
        }
        None => print!("{text}"),
    }
    Ok(())
}

/// Test base names taken from the command line.
#[derive(Debug, Default, PartialEq, Eq)]
struct TestNames {
    /// Distinct base names, in first-seen order.
    names: Vec<String>,
    /// Files whose suffix is neither `.txt` nor `_info.s`.
    skipped: usize,
}

/// Extracts test base names, dropping duplicates and counting unknown suffixes.
fn test_names(files: &[PathBuf]) -> TestNames {
    let mut tests = TestNames::default();
    for file in files {
        let name = file.to_string_lossy();
        let Some(base) = name
            .strip_suffix(TXT_SUFFIX)
            .or_else(|| name.strip_suffix(S_SUFFIX))
        else {
            error!("filename {name:?} does not end in {TXT_SUFFIX} or {S_SUFFIX}, skipping test");
            tests.skipped += 1;
            continue;
        };
        if !tests.names.iter().any(|n| n == base) {
            tests.names.push(base.to_string());
        }
    }
    tests
}

/// Picks the program to run for a test: the listing if present, else the assembled source.
fn test_program(base: &str, source: &str) -> Result<Program> {
    let txt = PathBuf::from(format!("{base}{TXT_SUFFIX}"));
    let assembled = Assembler::assemble(source);

    if !txt.exists() {
        return assembled.with_context(|| format!("failed to assemble {base}{S_SUFFIX}"));
    }

    let listing = loader::load_listing_program(&txt)
        .with_context(|| format!("failed to load listing {}", txt.display()))?;
    match &assembled {
        Ok(program) => {
            let _ = loader::counts_match(&listing, program);
        }
        Err(err) => warn!("{base}{S_SUFFIX} does not assemble ({err}); running the listing"),
    }
    Ok(listing)
}

/// Runs one test and prints its assertion report. Returns true if it passed.
fn run_test(base: &str, config: &Config, max_cycles: u64) -> Result<bool> {
    let s_path = PathBuf::from(format!("{base}{S_SUFFIX}"));
    let source = loader::load_source(&s_path)
        .with_context(|| format!("failed to read {}", s_path.display()))?;
    let assertions = assertion::collect_assertions(&source);
    let program = test_program(base, &source)?;

    println!("Running {base}");
    let mut sim = Simulator::new(program, config);
    let mut accurate = true;
    match sim.run_until_idle(max_cycles) {
        Ok(summary) if summary.stop == StopReason::Idle => {
            println!("loop detected after {} cycles", summary.cycles);
        }
        Ok(summary) => {
            warn!(cycles = summary.cycles, "cycle budget exhausted before the program idled");
            accurate = false;
        }
        Err(err) => {
            error!("{err}");
            accurate = false;
        }
    }
    if !accurate {
        println!("warning: assertions may not be accurate");
    }

    println!("\nAssertions:");
    let (verdicts, tally) = assertion::evaluate(&assertions, &sim.snapshot());
    for verdict in &verdicts {
        println!("{verdict}");
    }

    let Some(percentage) = tally.percentage() else {
        println!("error: no valid assertions\n");
        return Ok(false);
    };
    println!(
        "\nSummary: passed {}/{} = {percentage:.0}%",
        tally.passed, tally.valid
    );
    let invalid = tally.invalid();
    if invalid > 0 {
        println!(
            "warning: {invalid} invalid assertion{} could not be evaluated",
            if invalid == 1 { "" } else { "s" }
        );
    } else if tally.all_passed() {
        println!("Congratulations!");
    }
    println!();

    Ok(verdicts.iter().all(|v| v.status == Status::Pass))
}

/// Runs every named test. Returns true if all of them passed and no file
/// was skipped.
fn cmd_check(files: &[PathBuf], config: &Config, max_cycles: u64) -> bool {
    let tests = test_names(files);
    let mut all_passed = tests.skipped == 0;
    for base in &tests.names {
        match run_test(base, config, max_cycles) {
            Ok(passed) => all_passed &= passed,
            Err(err) => {
                error!("{err:#}, skipping test");
                all_passed = false;
            }
        }
    }
    all_passed
}
