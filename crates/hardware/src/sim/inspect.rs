//! State inspection between steps.

use serde::Serialize;

use super::simulator::Simulator;
use crate::common::constants::{NUM_REGS, WORD_BYTES};
use crate::isa::abi::Reg;

/// A copy of the observable state at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Program counter (byte address).
    pub pc: u32,
    /// Registers in index order.
    pub registers: [u32; NUM_REGS],
    /// Data memory words; word `i` is at byte address `4 * i`.
    pub memory: Vec<u32>,
}

impl Snapshot {
    /// Reads a register by index; unknown indices read 0.
    pub fn register(&self, index: i64) -> u32 {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.registers.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Reads a memory word by word index; unknown indices read 0.
    pub fn memory_word(&self, index: i64) -> u32 {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.memory.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Non-zero memory words as `(byte address, value)` pairs.
    pub fn nonzero_memory(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.memory
            .iter()
            .enumerate()
            .filter(|(_, word)| **word != 0)
            .map(|(idx, word)| (idx as u32 * WORD_BYTES, *word))
    }
}

impl Simulator {
    /// Copies the PC, registers and memory.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pc: self.cpu.pc,
            registers: self.cpu.regs.snapshot(),
            memory: self.cpu.dmem.words().to_vec(),
        }
    }

    /// Borrows the register file in index order.
    pub const fn inspect_registers(&self) -> &[u32; NUM_REGS] {
        self.cpu.regs.as_array()
    }

    /// Borrows data memory as words.
    pub fn inspect_memory(&self) -> &[u32] {
        self.cpu.dmem.words()
    }

    /// Reads one register.
    pub fn register(&self, reg: Reg) -> u32 {
        self.cpu.regs.read(reg.index())
    }

    /// Current program counter.
    pub const fn pc(&self) -> u32 {
        self.cpu.pc
    }
}
