//! Operand conversion.
//!
//! The grammar classifies each operand as a register, an immediate, an
//! `offset(base)` memory reference, or a bare identifier. This module checks
//! that kind against the slot it fills and converts it into a register or a
//! range-checked immediate. Conversion is line-agnostic and reports an
//! [`OperandError`]; the assembler attaches the source line.

use std::fmt;

use pest::iterators::Pair;
use thiserror::Error;

use super::parser::{Rule, integer_value};
use crate::common::error::AssemblyError;
use crate::isa::abi::Reg;

/// Range accepted for sign-extended 16-bit fields.
pub const SIGNED_IMM_RANGE: (i64, i64) = (i16::MIN as i64, i16::MAX as i64);

/// Range accepted for the `lui` upper half-word.
pub const UPPER_IMM_RANGE: (i64, i64) = (0, u16::MAX as i64);

/// One operand as written in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand<'a> {
    /// A `$`-prefixed register name such as `$t0` or `$8`.
    Register(&'a str),
    /// A decimal or `0x` hexadecimal integer, optionally signed.
    Immediate(&'a str),
    /// `offset(base)`; the offset may be omitted.
    Memory {
        /// Displacement text, if present.
        offset: Option<&'a str>,
        /// Base register text.
        base: &'a str,
    },
    /// A bare identifier: a label, or a register name without `$`.
    Symbol(&'a str),
}

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Register(text) | Self::Immediate(text) | Self::Symbol(text) => f.write_str(text),
            Self::Memory { offset, base } => write!(f, "{}({base})", offset.unwrap_or("")),
        }
    }
}

/// A problem with a single operand.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OperandError {
    /// The operand names no register.
    #[error("unknown register `{0}`")]
    Register(String),

    /// The integer does not fit in 64 bits.
    #[error("integer literal `{0}` is too large")]
    Literal(String),

    /// The integer does not fit the field.
    #[error("immediate {value} out of range {min}..={max}")]
    Range {
        /// The parsed value.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// The operand is the wrong kind for its slot.
    #[error("expected {expected}, found `{found}`")]
    Kind {
        /// What the slot accepts.
        expected: &'static str,
        /// The operand as written.
        found: String,
    },
}

impl OperandError {
    /// Converts into an assembly error for the given source line.
    pub fn at(self, line: usize) -> AssemblyError {
        match self {
            Self::Register(name) => AssemblyError::UnknownRegister { line, name },
            Self::Range { value, min, max } => AssemblyError::ImmediateRange {
                line,
                value,
                min,
                max,
            },
            other @ (Self::Literal(_) | Self::Kind { .. }) => AssemblyError::Malformed {
                line,
                reason: other.to_string(),
            },
        }
    }
}

/// A resolved memory operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemOperand {
    /// Signed byte displacement.
    pub offset: i16,
    /// Base address register.
    pub base: Reg,
}

fn lookup(text: &str) -> Result<Reg, OperandError> {
    Reg::lookup(text).ok_or_else(|| OperandError::Register(text.to_string()))
}

fn checked(text: &str, (min, max): (i64, i64)) -> Result<i64, OperandError> {
    let value = integer_value(text).ok_or_else(|| OperandError::Literal(text.to_string()))?;
    if value < min || value > max {
        return Err(OperandError::Range { value, min, max });
    }
    Ok(value)
}

impl<'a> Operand<'a> {
    /// Builds an operand from one of the grammar's operand pairs.
    pub(crate) fn from_pair(pair: Pair<'a, Rule>) -> Self {
        match pair.as_rule() {
            Rule::register => Self::Register(pair.as_str()),
            Rule::immediate => Self::Immediate(pair.as_str()),
            Rule::memory => {
                let mut offset = None;
                let mut base = "";
                for part in pair.into_inner() {
                    if part.as_rule() == Rule::immediate {
                        offset = Some(part.as_str());
                    } else {
                        base = part.as_str();
                    }
                }
                Self::Memory { offset, base }
            }
            _ => Self::Symbol(pair.as_str()),
        }
    }

    fn kind_error(&self, expected: &'static str) -> OperandError {
        OperandError::Kind {
            expected,
            found: self.to_string(),
        }
    }

    /// Resolves a register slot; bare names like `t0` are accepted.
    pub fn register(&self) -> Result<Reg, OperandError> {
        match *self {
            Self::Register(text) | Self::Symbol(text) => lookup(text),
            _ => Err(self.kind_error("a register")),
        }
    }

    /// Reads an integer literal without a range check beyond `i64`.
    pub fn literal(&self) -> Result<i64, OperandError> {
        match *self {
            Self::Immediate(text) => checked(text, (i64::MIN, i64::MAX)),
            _ => Err(self.kind_error("an integer")),
        }
    }

    /// Reads an immediate and checks it against an inclusive range.
    pub fn immediate(&self, range: (i64, i64)) -> Result<i64, OperandError> {
        match *self {
            Self::Immediate(text) => checked(text, range),
            _ => Err(self.kind_error("an immediate")),
        }
    }

    /// Reads a sign-extended 16-bit immediate.
    pub fn signed_imm16(&self) -> Result<i16, OperandError> {
        self.immediate(SIGNED_IMM_RANGE).map(|v| v as i16)
    }

    /// Reads a `lui` upper half-word.
    pub fn upper_imm16(&self) -> Result<u16, OperandError> {
        self.immediate(UPPER_IMM_RANGE).map(|v| v as u16)
    }

    /// Resolves an `offset(base)` slot.
    pub fn memory(&self) -> Result<MemOperand, OperandError> {
        let Self::Memory { offset, base } = *self else {
            return Err(self.kind_error("offset(base)"));
        };
        let offset = match offset {
            Some(text) => checked(text, SIGNED_IMM_RANGE)? as i16,
            None => 0,
        };
        Ok(MemOperand {
            offset,
            base: lookup(base)?,
        })
    }
}
