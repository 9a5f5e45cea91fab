//! Common utilities and types used throughout the simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Word sizes, instruction field layout, and simulation defaults.
//! 2. **Error Handling:** Assembly, execution, decode, load, and assertion error types.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for assembly, execution, decoding, loading, and assertions.
pub mod error;

pub use constants::{NUM_REGS, WORD_BYTES};
pub use error::{
    AccessType, AssemblyError, AssertionError, DecodeError, ExecutionError, LoadError, MemFault,
};
