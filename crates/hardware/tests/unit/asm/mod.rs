//! # Assembler Tests

/// Assembly error variants and their line numbers.
pub mod errors;

/// Label binding, forward and backward references.
pub mod labels;
