//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire architectural state. It coordinates the following:
//! 1. **State Management:** Maintains the register file, data memory, and program counter.
//! 2. **Execution:** Evaluates and commits one instruction per cycle (see [`execution`]).
//! 3. **Memory Access:** Address generation and validated loads/stores (see [`memory`]).
//! 4. **Observability:** Statistics and state dumps.

/// Single-cycle instruction evaluation and commit.
pub mod execution;

/// Effective-address generation and load/store handling.
pub mod memory;

use std::fmt::Write as _;

use crate::config::Config;
use crate::core::arch::{DataMemory, Gpr};
use crate::stats::SimStats;

pub use execution::Effect;

/// Main CPU structure containing all architectural state.
///
/// The state is an explicit value: independent `Cpu` instances share
/// nothing, and only [`Cpu::execute`] mutates registers, memory and the PC.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General Purpose Registers.
    pub regs: Gpr,
    /// Data memory.
    pub dmem: DataMemory,
    /// Program Counter (byte address, word aligned).
    pub pc: u32,
    /// Execution statistics.
    pub stats: SimStats,
    /// Enable per-instruction trace events.
    pub trace: bool,
    start_pc: u32,
}

impl Cpu {
    /// Creates a CPU with zeroed registers and memory.
    ///
    /// # Arguments
    ///
    /// * `config` - Supplies the memory size, start PC and trace flag.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: Gpr::new(),
            dmem: DataMemory::new(config.memory.size_words),
            pc: config.general.start_pc,
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
            start_pc: config.general.start_pc,
        }
    }

    /// Restores the power-on state: zeroed registers and memory, PC at the start address.
    pub fn reset(&mut self) {
        self.regs = Gpr::new();
        self.dmem.clear();
        self.pc = self.start_pc;
        self.stats = SimStats::default();
    }

    /// Sets the PC used by the next [`reset`](Self::reset) and moves the PC there now.
    pub fn set_start_pc(&mut self, pc: u32) {
        self.start_pc = pc;
        self.pc = pc;
    }

    /// Renders the PC, all registers, and every non-zero memory word.
    pub fn dump_state(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "pc = {:#010x}", self.pc);
        out.push_str(&self.regs.dump());
        for (idx, word) in self.dmem.words().iter().enumerate() {
            if *word != 0 {
                let _ = writeln!(out, "mem[{:#06x}] = {word:#010x}", idx * 4);
            }
        }
        out
    }
}
