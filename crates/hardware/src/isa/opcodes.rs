//! MIPS-I Opcodes and Function Codes.
//!
//! Defines the major opcodes (bits 31-26) and the R-type function codes
//! (bits 5-0) for the supported instruction subset.

/// R-type instructions; the operation is selected by the function field.
pub const OP_SPECIAL: u32 = 0x00;

/// Branch on equal (BEQ).
pub const OP_BEQ: u32 = 0x04;

/// Add immediate (ADDI).
pub const OP_ADDI: u32 = 0x08;

/// Load upper immediate (LUI).
pub const OP_LUI: u32 = 0x0F;

/// Load word (LW).
pub const OP_LW: u32 = 0x23;

/// Store word (SW).
pub const OP_SW: u32 = 0x2B;

/// Bitwise AND (function code under `OP_SPECIAL`).
pub const FUNCT_AND: u32 = 0x24;

/// Set on less than, signed (function code under `OP_SPECIAL`).
pub const FUNCT_SLT: u32 = 0x2A;
