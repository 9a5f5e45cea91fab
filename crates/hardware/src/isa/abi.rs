//! MIPS Application Binary Interface (ABI) register names.
//!
//! Binds the conventional o32 register names to register-file indices and
//! provides the [`Reg`] operand type used by encoded instructions.
//!
//! Register names are matched case-insensitively, with or without a leading
//! `$`. Numeric names `$0` through `$31` are accepted as well.

use std::fmt;

use crate::common::constants::NUM_REGS;

/// Register 0 (`$zero`, always reads zero).
pub const REG_ZERO: usize = 0;
/// Register 1 (`$at`, assembler temporary).
pub const REG_AT: usize = 1;
/// Register 2 (`$v0`, first result register).
pub const REG_V0: usize = 2;
/// Register 4 (`$a0`, first argument).
pub const REG_A0: usize = 4;
/// Register 8 (`$t0`, first temporary).
pub const REG_T0: usize = 8;
/// Register 16 (`$s0`, first saved register).
pub const REG_S0: usize = 16;
/// Register 24 (`$t8`).
pub const REG_T8: usize = 24;
/// Register 28 (`$gp`, global pointer).
pub const REG_GP: usize = 28;
/// Register 29 (`$sp`, stack pointer).
pub const REG_SP: usize = 29;
/// Register 30 (`$fp`, frame pointer).
pub const REG_FP: usize = 30;
/// Register 31 (`$ra`, return address).
pub const REG_RA: usize = 31;

/// ABI names for registers 0-31.
pub const REG_NAMES: [&str; NUM_REGS] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp", "fp",
    "ra",
];

/// Extra names accepted on input that are not the canonical display name.
const REG_ALIASES: [(&str, usize); 1] = [("s8", REG_FP)];

/// A general-purpose register operand.
///
/// Always holds a valid index in `0..32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Reg(u8);

impl Reg {
    /// The hard-wired zero register.
    pub const ZERO: Self = Self(0);

    /// Creates a register operand from an index, or `None` if the index is not in `0..32`.
    pub const fn new(idx: usize) -> Option<Self> {
        if idx < NUM_REGS {
            Some(Self(idx as u8))
        } else {
            None
        }
    }

    /// Creates a register operand from a 5-bit instruction field.
    ///
    /// Only the low five bits of `field` are used.
    pub const fn from_field(field: u32) -> Self {
        Self((field & 0x1F) as u8)
    }

    /// Returns the register-file index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the canonical ABI name without the `$` prefix.
    pub const fn name(self) -> &'static str {
        REG_NAMES[self.0 as usize]
    }

    /// Returns true for the hard-wired zero register.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Looks up a register by its source-text name.
    ///
    /// # Arguments
    ///
    /// * `text` - A name such as `$t0`, `T0`, `$8` or `zero`.
    ///
    /// # Returns
    ///
    /// The register, or `None` if the text names no register.
    pub fn lookup(text: &str) -> Option<Self> {
        let name = text.strip_prefix('$').unwrap_or(text);
        if name.is_empty() {
            return None;
        }
        if name.bytes().all(|b| b.is_ascii_digit()) {
            return name.parse::<usize>().ok().and_then(Self::new);
        }
        let lower = name.to_ascii_lowercase();
        REG_NAMES
            .iter()
            .position(|candidate| *candidate == lower)
            .or_else(|| {
                REG_ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == lower)
                    .map(|&(_, idx)| idx)
            })
            .and_then(Self::new)
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.name())
    }
}
