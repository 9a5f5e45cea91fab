//! Instruction Disassembler.
//!
//! Renders instructions as canonical assembly text for debug tracing,
//! listings, and test diagnostics. The output assembles back to the same
//! instruction; branch targets are printed as numeric word offsets.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::disasm::disassemble;
//! let text = disassemble(0x2008_0023);
//! assert_eq!(text, "addi $t0, $zero, 35");
//! ```

use std::fmt;

use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.mnemonic();
        match *self {
            Self::And { rd, rs, rt } | Self::Slt { rd, rs, rt } => {
                write!(f, "{m} {rd}, {rs}, {rt}")
            }
            Self::Addi { rt, rs, imm } => write!(f, "{m} {rt}, {rs}, {imm}"),
            Self::Lui { rt, imm } => write!(f, "{m} {rt}, {imm}"),
            Self::Lw { rt, base, offset } | Self::Sw { rt, base, offset } => {
                write!(f, "{m} {rt}, {offset}({base})")
            }
            Self::Beq { rs, rt, offset } => write!(f, "{m} {rs}, {rt}, {offset}"),
        }
    }
}

/// Disassembles a 32-bit machine word into a human-readable string.
///
/// Returns `"unknown"` for encodings outside the supported subset.
pub fn disassemble(word: u32) -> String {
    decode(word).map_or_else(|_| "unknown".to_string(), |inst| inst.to_string())
}
