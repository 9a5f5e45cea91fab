//! Assembler for the MIPS subset.
//!
//! This module translates assembly source into an executable [`Program`]:
//! 1. **Parser:** A `pest` grammar that splits lines into labels and statements, dropping
//!    comments and directives. The same grammar reads `#assert(...)` comments.
//! 2. **Operands:** Checks each operand's kind and converts registers, immediates, and
//!    `offset(base)` forms.
//! 3. **Symbols:** Label table built by the first pass.
//! 4. **Assembler:** The two passes that bind labels and encode instructions.

/// Two-pass assembly driver.
pub mod assembler;

/// Operand conversion.
pub mod operand;

/// Grammar-driven source parser.
pub(crate) mod parser;

/// Assembled program container and hex listing output.
pub mod program;

/// Label table.
pub mod symbols;

pub use assembler::Assembler;
pub use program::{Program, SourceLine};
pub use symbols::SymbolTable;
