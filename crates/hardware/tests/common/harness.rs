use mipsim_core::asm::{Assembler, Program};
use mipsim_core::config::Config;
use mipsim_core::core::Cpu;
use mipsim_core::isa::abi::Reg;
use mipsim_core::sim::{RunSummary, Simulator, Snapshot, StepOutcome};
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

pub struct TestContext {
    pub sim: Simulator,
}

impl TestContext {
    /// Assembles `source` and builds a simulator with the default config.
    pub fn new(source: &str) -> Self {
        Self::with_config(source, &Config::default())
    }

    pub fn with_config(source: &str, config: &Config) -> Self {
        init_tracing();
        let program = Assembler::assemble(source).expect("fixture should assemble");
        Self {
            sim: Simulator::new(program, config),
        }
    }

    /// Decodes raw machine words into a program and builds a simulator.
    pub fn from_words(words: &[u32]) -> Self {
        init_tracing();
        let program = Program::from_words(words).expect("words should decode");
        Self {
            sim: Simulator::new(program, &Config::default()),
        }
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        self.sim.cpu()
    }

    pub fn step(&mut self) -> StepOutcome {
        self.sim.step().expect("step should succeed")
    }

    /// Steps exactly `cycles` times.
    pub fn run(&mut self, cycles: u64) {
        let _ = self.sim.run(cycles).expect("run should succeed");
    }

    pub fn run_until_idle(&mut self) -> RunSummary {
        self.sim
            .run_until_idle(10_000)
            .expect("run should succeed")
    }

    /// Reads a register by ABI name, e.g. `"t0"`.
    pub fn reg(&self, name: &str) -> u32 {
        let reg = Reg::lookup(name).expect("known register name");
        self.sim.register(reg)
    }

    /// Reads a data memory word by word index.
    pub fn mem(&self, word: usize) -> u32 {
        self.sim.inspect_memory()[word]
    }

    pub fn snapshot(&self) -> Snapshot {
        self.sim.snapshot()
    }

    pub fn pc(&self) -> u32 {
        self.sim.pc()
    }
}
