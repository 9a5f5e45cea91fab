//! ALU logical and comparison operations.
//!
//! Implements bitwise AND and signed set-less-than. The comparison
//! reinterprets both operands as `i32`; the result is always 0 or 1.

use super::AluOp;

/// Executes a logical or comparison operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a logic/comparison variant).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The 32-bit result. Returns `0` for non-logic opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::And => a & b,
        AluOp::Slt => ((a as i32) < (b as i32)) as u32,
        _ => 0,
    }
}
