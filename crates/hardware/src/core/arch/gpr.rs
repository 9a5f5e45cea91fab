//! MIPS General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file. It performs the following:
//! 1. **Storage:** Maintains 32 word registers (`$0`-`$31`).
//! 2. **Invariant Enforcement:** Ensures that register `$zero` is hardwired to zero.
//! 3. **Debugging:** Provides utilities for dumping the complete register state.

use std::fmt::Write as _;

use crate::common::constants::NUM_REGS;
use crate::isa::abi::REG_NAMES;

/// General-Purpose Register file.
///
/// Contains 32 word registers. Values are stored as `u32` and reinterpreted
/// as `i32` by the instructions that need signed semantics. Register `$zero`
/// is hardwired to zero and cannot be modified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; NUM_REGS],
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The word stored in the specified register. Register `$zero` always returns 0.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `$zero` are ignored.
    /// * `val` - The word to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Borrows all 32 registers in index order.
    pub const fn as_array(&self) -> &[u32; NUM_REGS] {
        &self.regs
    }

    /// Returns a copy of all 32 registers in index order.
    pub fn snapshot(&self) -> [u32; NUM_REGS] {
        self.regs
    }

    /// Renders all registers as a four-column table with ABI names.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for row in (0..NUM_REGS).step_by(4) {
            for idx in row..row + 4 {
                let _ = write!(
                    out,
                    "${:<4}={:#010x}  ",
                    REG_NAMES[idx],
                    self.read(idx)
                );
            }
            out.truncate(out.trim_end().len());
            out.push('\n');
        }
        out
    }
}
