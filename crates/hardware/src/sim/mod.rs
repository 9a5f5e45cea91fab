//! Simulation driver, inspection, and program loading.
//!
//! This module wraps the CPU for callers. It provides:
//! 1. **Simulator:** Stepping and bounded runs over a loaded program.
//! 2. **Inspection:** Snapshots and borrowing accessors for registers and memory.
//! 3. **Idle detection:** Caller-side termination for programs that end by spinning.
//! 4. **Loading:** Hex listings and assembly sources from disk.
//! 5. **Assertions:** Expected-state comments embedded in test programs.

/// `#assert(...)` comment parsing and evaluation.
pub mod assertion;

/// Snapshots and state accessors.
pub mod inspect;

/// Listing and source file loading.
pub mod loader;

/// The simulator.
pub mod simulator;

/// Idle-loop detection.
pub mod watch;

pub use inspect::Snapshot;
pub use simulator::{RunSummary, Simulator, StepOutcome, StopReason};
pub use watch::IdleDetector;
