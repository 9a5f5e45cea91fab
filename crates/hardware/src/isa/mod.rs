//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the instruction table for the supported MIPS-I subset:
//! `and`, `slt`, `addi`, `lui`, `lw`, `sw` and `beq`.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Machine-word decoding into resolved instructions.
pub mod decode;

/// Instruction disassembler for debug tracing and listings.
pub mod disasm;

/// Instruction table, field extraction, and encoding.
pub mod instruction;

/// Major opcodes and function codes.
pub mod opcodes;

pub use abi::Reg;
pub use decode::decode;
pub use instruction::{InstClass, Instruction, Mnemonic, OperandShape};
