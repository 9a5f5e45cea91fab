//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Word Constants:** Sizes and masks for the 32-bit word.
//! 2. **Instruction Constants:** Field shifts and masks for MIPS instruction words.
//! 3. **Register Constants:** Size of the general-purpose register file.
//! 4. **Simulation Constants:** Default memory size and cycle budget.

/// Size of a data word and of an instruction in bytes.
pub const WORD_BYTES: u32 = 4;

/// Number of low address bits that must be zero for a word access.
pub const WORD_ALIGN_MASK: u32 = WORD_BYTES - 1;

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 32;

/// Bit shift for the major opcode field (bits 31-26).
pub const OPCODE_SHIFT: u32 = 26;

/// Bit mask for the major opcode field after shifting.
pub const OPCODE_MASK: u32 = 0x3F;

/// Bit shift for the `rs` register field (bits 25-21).
pub const RS_SHIFT: u32 = 21;

/// Bit shift for the `rt` register field (bits 20-16).
pub const RT_SHIFT: u32 = 16;

/// Bit shift for the `rd` register field (bits 15-11).
pub const RD_SHIFT: u32 = 11;

/// Bit shift for the shift-amount field (bits 10-6).
pub const SHAMT_SHIFT: u32 = 6;

/// Bit mask for any 5-bit register or shift-amount field after shifting.
pub const REG_FIELD_MASK: u32 = 0x1F;

/// Bit mask for the R-type function field (bits 5-0).
pub const FUNCT_MASK: u32 = 0x3F;

/// Bit mask for the I-type immediate field (bits 15-0).
pub const IMM_MASK: u32 = 0xFFFF;

/// Shift applied by `lui` to place its immediate in the upper half-word.
pub const UPPER_IMM_SHIFT: u32 = 16;

/// Default data memory size in words (4 KiB).
pub const DEFAULT_MEMORY_WORDS: usize = 1024;

/// Default cycle budget for callers that run to completion.
pub const DEFAULT_MAX_CYCLES: u64 = 100_000;
