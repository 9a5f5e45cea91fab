//! Execution units and functional components.
//!
//! The single-cycle core only needs an integer ALU; address generation and
//! branch comparison reuse it through the execution engine.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;
