//! Simulator: owns the CPU and the program side-by-side.
//!
//! The program is immutable once loaded; only [`Simulator::step`] mutates the CPU.
//! Termination is a caller concern: `step` never recognizes a halt idiom, and
//! [`Simulator::run_until_idle`] layers the idle check on top.

use tracing::debug;

use super::watch::IdleDetector;
use crate::asm::Program;
use crate::common::error::ExecutionError;
use crate::config::Config;
use crate::core::{Cpu, Effect};
use crate::isa::instruction::Instruction;
use crate::stats::SimStats;

/// What a single step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    /// Byte address of the executed instruction.
    pub pc: u32,
    /// The executed instruction.
    pub instruction: Instruction,
    /// Its architectural effect.
    pub effect: Effect,
}

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The program revisited a PC without changing any state.
    Idle,
    /// The cycle budget was exhausted.
    CycleBudget,
}

/// Result of a bounded run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Steps executed by this call.
    pub cycles: u64,
    /// Why the run ended.
    pub stop: StopReason,
}

/// Top-level simulator: CPU architectural state + program.
#[derive(Clone, Debug)]
pub struct Simulator {
    pub(super) cpu: Cpu,
    program: Program,
}

impl Simulator {
    /// Creates a simulator with zeroed state and the PC at `config.general.start_pc`.
    pub fn new(program: Program, config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
            program,
        }
    }

    /// Starts execution at a label instead of the configured start PC.
    ///
    /// Returns `None` if the program does not define `label`.
    pub fn with_entry(mut self, label: &str) -> Option<Self> {
        let pc = self.program.entry_pc(label)?;
        self.cpu.set_start_pc(pc);
        Some(self)
    }

    /// Executes one instruction.
    ///
    /// # Returns
    ///
    /// The executed PC, instruction and effect. On error nothing changed.
    pub fn step(&mut self) -> Result<StepOutcome, ExecutionError> {
        let pc = self.cpu.pc;
        let instruction = self.cpu.fetch(self.program.instructions())?;
        let effect = self.cpu.execute(&instruction)?;
        Ok(StepOutcome {
            pc,
            instruction,
            effect,
        })
    }

    /// Steps exactly `max_cycles` times unless a step fails.
    pub fn run(&mut self, max_cycles: u64) -> Result<RunSummary, ExecutionError> {
        for _ in 0..max_cycles {
            let _ = self.step()?;
        }
        Ok(RunSummary {
            cycles: max_cycles,
            stop: StopReason::CycleBudget,
        })
    }

    /// Steps until the program idles or `max_cycles` steps have run.
    ///
    /// The program is idle once it reaches a PC it already visited since
    /// the last step that changed a register or memory value.
    pub fn run_until_idle(&mut self, max_cycles: u64) -> Result<RunSummary, ExecutionError> {
        let mut detector = IdleDetector::new();
        for cycle in 1..=max_cycles {
            let outcome = self.step()?;
            if detector.observe(self.cpu.pc, outcome.effect.changes_state()) {
                debug!(cycles = cycle, pc = self.cpu.pc, "loop detected");
                return Ok(RunSummary {
                    cycles: cycle,
                    stop: StopReason::Idle,
                });
            }
        }
        Ok(RunSummary {
            cycles: max_cycles,
            stop: StopReason::CycleBudget,
        })
    }

    /// Restores the power-on state, keeping the program and entry point.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// The loaded program.
    pub const fn program(&self) -> &Program {
        &self.program
    }

    /// The CPU state.
    pub const fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Execution statistics so far.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }
}
