//! # Simulation Layer Tests

/// `#assert(...)` parsing and evaluation.
pub mod assertions;


/// Hex listing loading from strings and files.
pub mod loader;


/// Idle detection and `run_until_idle`.
pub mod watch;
