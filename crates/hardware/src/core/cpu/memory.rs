//! Memory Access Helpers.
//!
//! This module provides the interface between the CPU and data memory.
//! It performs the following:
//! 1. **Address Generation:** `base + sign_extend16(offset)`, wrapping.
//! 2. **Validation:** Alignment and bounds are checked before anything is written.

use super::Cpu;
use crate::common::error::{AccessType, ExecutionError};
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::abi::Reg;
use crate::isa::decode::sign_extend16;

impl Cpu {
    /// Computes the effective byte address of a memory operand.
    ///
    /// # Arguments
    ///
    /// * `base` - The base address register.
    /// * `offset` - The signed 16-bit displacement.
    pub fn effective_address(&self, base: Reg, offset: i16) -> u32 {
        Alu::execute(AluOp::Add, self.regs.read(base.index()), sign_extend16(offset))
    }

    /// Reads the word addressed by `offset(base)`.
    ///
    /// # Returns
    ///
    /// The loaded word, or `ExecutionError::MemoryAccess` for a misaligned or
    /// out-of-range address.
    pub fn load_word(&self, base: Reg, offset: i16) -> Result<u32, ExecutionError> {
        self.dmem.read_word(self.effective_address(base, offset))
    }

    /// Validates a store to `offset(base)` without performing it.
    ///
    /// # Returns
    ///
    /// The effective address and the word currently stored there.
    pub fn check_store(&self, base: Reg, offset: i16) -> Result<(u32, u32), ExecutionError> {
        let addr = self.effective_address(base, offset);
        let idx = self.dmem.check(addr, AccessType::Store)?;
        Ok((addr, self.dmem.words()[idx]))
    }
}
