//! MIPS-subset assembler and simulator library.
//!
//! This crate implements a single-cycle simulator for a seven-instruction MIPS subset with the following:
//! 1. **Assembler:** Two-pass translation of assembly source with labels and ABI register names.
//! 2. **ISA:** Instruction representation, machine-word encoding and decoding, and disassembly.
//! 3. **Core:** Register file, word-addressed data memory, ALU, and the fetch-evaluate-commit cycle.
//! 4. **Simulation:** Stepping, idle detection, state inspection, listing loading, and assertions.
//! 5. **Observability:** Configuration and statistics collection.

/// Assembler (grammar, operands, symbol table, two-pass driver).
pub mod asm;
/// Common constants and error types.
pub mod common;
/// Simulator configuration.
pub mod config;
/// CPU core (architectural state, execution, ALU).
pub mod core;
/// Instruction set (ABI names, opcodes, instruction enum, decode, disassembly).
pub mod isa;
/// Simulator driver, inspection, loader, and assertions.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Two-pass assembler; `Assembler::assemble(source)` yields a [`Program`].
pub use crate::asm::{Assembler, Program};
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Architectural state: registers, data memory, PC, and stats.
pub use crate::core::Cpu;
/// Resolved instruction.
pub use crate::isa::Instruction;
/// Top-level simulator owning a CPU and a program.
pub use crate::sim::Simulator;
