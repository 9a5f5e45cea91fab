//! Assembly and Execution Error definitions.
//!
//! This module defines the error taxonomy for the simulator. It provides:
//! 1. **Assembly Errors:** Raised while translating source text, tagged with the source line.
//! 2. **Execution Errors:** Raised while stepping, tagged with the faulting address.
//! 3. **Decode Errors:** Raised when a machine word is not part of the supported ISA subset.
//! 4. **Load Errors:** Raised while reading hex machine-code listings.
//! 5. **Assertion Errors:** Raised for unreadable `#assert(...)` expectation comments.
//!
//! None of these are architectural events: the ISA has no traps, so every error is fatal
//! to the call that produced it and leaves the simulator state untouched.

use std::fmt;

use thiserror::Error;

/// Errors raised while assembling source text.
///
/// Every variant carries the 1-based source line that caused it. Assembly is
/// all-or-nothing: when an error is returned no program is produced.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AssemblyError {
    /// A label was defined more than once.
    #[error("line {line}: duplicate label `{label}` (first defined on line {first_line})")]
    DuplicateLabel {
        /// Line of the second definition.
        line: usize,
        /// The label name.
        label: String,
        /// Line of the first definition.
        first_line: usize,
    },

    /// A branch referenced a label that is never defined.
    #[error("line {line}: undefined label `{label}`")]
    UndefinedLabel {
        /// Line of the reference.
        line: usize,
        /// The label name.
        label: String,
    },

    /// An operand named a register that does not exist.
    #[error("line {line}: unknown register `{name}`")]
    UnknownRegister {
        /// Line of the operand.
        line: usize,
        /// The register text as written.
        name: String,
    },

    /// An immediate, memory offset or branch displacement does not fit its field.
    #[error("line {line}: immediate {value} out of range {min}..={max}")]
    ImmediateRange {
        /// Line of the operand.
        line: usize,
        /// The value that was written (or computed, for label displacements).
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// Anything else: unknown mnemonic, wrong operand count or kind, bad syntax.
    #[error("line {line}: malformed instruction: {reason}")]
    Malformed {
        /// Line of the instruction.
        line: usize,
        /// Human-readable description of the problem.
        reason: String,
    },
}

impl AssemblyError {
    /// Returns the 1-based source line the error refers to.
    pub fn line(&self) -> usize {
        match self {
            Self::DuplicateLabel { line, .. }
            | Self::UndefinedLabel { line, .. }
            | Self::UnknownRegister { line, .. }
            | Self::ImmediateRange { line, .. }
            | Self::Malformed { line, .. } => *line,
        }
    }
}

/// Direction of a data memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Load word (`lw`).
    Load,
    /// Store word (`sw`).
    Store,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load => write!(f, "load"),
            Self::Store => write!(f, "store"),
        }
    }
}

/// Reason a data memory access was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemFault {
    /// The address is not a multiple of four.
    Misaligned,
    /// The address lies past the end of data memory.
    OutOfBounds,
}

impl fmt::Display for MemFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Misaligned => write!(f, "misaligned"),
            Self::OutOfBounds => write!(f, "out of bounds"),
        }
    }
}

/// Errors raised while stepping the execution engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// The program counter does not address an instruction.
    #[error("program counter {pc:#010x} is outside the program")]
    ProgramCounterOutOfRange {
        /// The faulting program counter (byte address).
        pc: u32,
    },

    /// A load or store used a misaligned or out-of-range address.
    #[error("{fault} {access} at address {addr:#010x}")]
    MemoryAccess {
        /// The effective byte address.
        addr: u32,
        /// Whether the access was a load or a store.
        access: AccessType,
        /// Why the access was rejected.
        fault: MemFault,
    },
}

/// Errors raised while decoding machine words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The word does not encode an instruction of the supported subset.
    #[error("illegal instruction {word:#010x}")]
    IllegalInstruction {
        /// The raw instruction word.
        word: u32,
    },
}

/// Errors raised while loading a machine-code listing.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read listing")]
    Io(#[from] std::io::Error),

    /// A line is not a 32-bit hexadecimal word.
    #[error("line {line}: bad hex word `{text}`")]
    BadHexWord {
        /// 1-based line in the listing.
        line: usize,
        /// The offending text.
        text: String,
    },

    /// A word does not decode to a supported instruction.
    #[error("instruction {index}: {source}")]
    Decode {
        /// Position of the word in the listing.
        index: usize,
        /// The decode failure.
        source: DecodeError,
    },

    /// The listing holds no instruction words.
    #[error("listing contains no instructions")]
    Empty,
}

/// Errors raised while parsing assertion comments.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AssertionError {
    /// The comment does not follow `#assert(sim.inspect_mem(rf|d_mem)[i] == v)`.
    #[error("malformed assertion `{text}`")]
    Malformed {
        /// The assertion text as written.
        text: String,
    },
}
