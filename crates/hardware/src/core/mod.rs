//! Core processor implementation.
//!
//! This module contains the single-cycle CPU: the architectural state,
//! the execution units, and the fetch-evaluate-commit cycle that ties them together.

/// Architectural state (register file, data memory).
pub mod arch;

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::{Cpu, Effect};
