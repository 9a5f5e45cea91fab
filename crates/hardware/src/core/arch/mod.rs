//! MIPS architectural state.
//!
//! This module contains the passive architectural stores. Neither performs
//! any arithmetic or control logic; that lives in the execution engine.
//! 1. **GPRs:** General-Purpose Register file with the hard-wired zero register.
//! 2. **Data Memory:** Word-addressed, bounds- and alignment-checked memory.

/// Word-addressed data memory.
pub mod dmem;

/// General-Purpose Register file implementation.
pub mod gpr;

pub use dmem::DataMemory;
pub use gpr::Gpr;
