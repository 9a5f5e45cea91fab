//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 32-bit integer ALU used by the execution engine.
//! All arithmetic is two's complement and wraps silently on overflow.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add
//! - [`logic`]:      And, Slt
//! - [`shifts`]:     Sll (used by `lui`)

/// Integer arithmetic operations.
pub mod arithmetic;

/// Bitwise logical and comparison operations.
pub mod logic;

/// Shift operations.
pub mod shifts;

/// ALU operation selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Bitwise AND.
    And,
    /// Signed set-less-than; yields 0 or 1.
    Slt,
    /// Logical shift left by the low five bits of the second operand.
    Sll,
}

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand (also used as shift amount)
    ///
    /// # Returns
    ///
    /// The 32-bit result of the ALU operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::{Alu, AluOp};
    ///
    /// // Wrapping addition
    /// assert_eq!(Alu::execute(AluOp::Add, 0x7FFF_FFFF, 1), 0x8000_0000);
    ///
    /// // Signed comparison
    /// assert_eq!(Alu::execute(AluOp::Slt, -5_i32 as u32, 10), 1);
    ///
    /// // Upper-immediate placement
    /// assert_eq!(Alu::execute(AluOp::Sll, 8, 16), 524_288);
    /// ```
    pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add => arithmetic::execute(op, a, b),
            AluOp::And | AluOp::Slt => logic::execute(op, a, b),
            AluOp::Sll => shifts::execute(op, a, b),
        }
    }
}
