//! ALU arithmetic operations.
//!
//! Implements 32-bit wrapping addition. There is no overflow trap: `addi`
//! on `0x7FFF_FFFF` with `1` yields `0x8000_0000`.

use super::AluOp;

/// Executes an integer arithmetic operation.
///
/// Returns `0` for non-arithmetic opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        _ => 0,
    }
}
