//! Instruction representation and encoding table.
//!
//! This module defines the instruction table for the supported MIPS subset. It provides:
//! 1. **Field Extraction:** The [`InstructionBits`] trait for slicing raw 32-bit words.
//! 2. **Mnemonic Table:** [`Mnemonic`], with each entry's operand shape, class and encoding.
//! 3. **Encoded Instructions:** The resolved, immutable [`Instruction`] consumed by the engine.

use std::fmt;
use std::str::FromStr;

use crate::common::constants::{
    FUNCT_MASK, IMM_MASK, OPCODE_MASK, OPCODE_SHIFT, RD_SHIFT, REG_FIELD_MASK, RS_SHIFT,
    RT_SHIFT, SHAMT_SHIFT,
};
use crate::isa::abi::Reg;
use crate::isa::opcodes;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Provides methods to extract all MIPS R-type and I-type fields from a
/// 32-bit instruction word.
pub trait InstructionBits {
    /// Extracts the major opcode field (bits 31-26).
    fn opcode(&self) -> u32;

    /// Extracts the `rs` register field (bits 25-21).
    fn rs(&self) -> Reg;

    /// Extracts the `rt` register field (bits 20-16).
    fn rt(&self) -> Reg;

    /// Extracts the `rd` register field (bits 15-11).
    fn rd(&self) -> Reg;

    /// Extracts the shift-amount field (bits 10-6).
    fn shamt(&self) -> u32;

    /// Extracts the R-type function field (bits 5-0).
    fn funct(&self) -> u32;

    /// Extracts the 16-bit immediate field (bits 15-0), without extension.
    fn imm16(&self) -> u16;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> Reg {
        Reg::from_field((self >> RS_SHIFT) & REG_FIELD_MASK)
    }

    #[inline(always)]
    fn rt(&self) -> Reg {
        Reg::from_field((self >> RT_SHIFT) & REG_FIELD_MASK)
    }

    #[inline(always)]
    fn rd(&self) -> Reg {
        Reg::from_field((self >> RD_SHIFT) & REG_FIELD_MASK)
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & REG_FIELD_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn imm16(&self) -> u16 {
        (self & IMM_MASK) as u16
    }
}

/// Operand layout expected by a mnemonic in assembly source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandShape {
    /// `rd, rs, rt`
    RegRegReg,
    /// `rt, rs, imm`
    RegRegImm,
    /// `rt, imm`
    RegImm,
    /// `rt, offset(base)`
    RegMem,
    /// `rs, rt, label`
    RegRegLabel,
}

impl OperandShape {
    /// Number of comma-separated operands this shape takes.
    pub const fn arity(self) -> usize {
        match self {
            Self::RegImm | Self::RegMem => 2,
            Self::RegRegReg | Self::RegRegImm | Self::RegRegLabel => 3,
        }
    }

    /// Human-readable operand template, used in error messages.
    pub const fn template(self) -> &'static str {
        match self {
            Self::RegRegReg => "rd, rs, rt",
            Self::RegRegImm => "rt, rs, imm",
            Self::RegImm => "rt, imm",
            Self::RegMem => "rt, offset(base)",
            Self::RegRegLabel => "rs, rt, label",
        }
    }
}

/// Instruction category, used for statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstClass {
    /// Register or immediate arithmetic/logic.
    Alu,
    /// Word load.
    Load,
    /// Word store.
    Store,
    /// Conditional branch.
    Branch,
}

/// The supported mnemonics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    /// Bitwise AND.
    And,
    /// Set on less than (signed).
    Slt,
    /// Add immediate (wrapping).
    Addi,
    /// Load upper immediate.
    Lui,
    /// Load word.
    Lw,
    /// Store word.
    Sw,
    /// Branch on equal.
    Beq,
}

impl Mnemonic {
    /// Every supported mnemonic, in table order.
    pub const ALL: [Self; 7] = [
        Self::And,
        Self::Slt,
        Self::Addi,
        Self::Lui,
        Self::Lw,
        Self::Sw,
        Self::Beq,
    ];

    /// Lower-case assembly spelling.
    pub const fn name(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Slt => "slt",
            Self::Addi => "addi",
            Self::Lui => "lui",
            Self::Lw => "lw",
            Self::Sw => "sw",
            Self::Beq => "beq",
        }
    }

    /// Operand layout in assembly source.
    pub const fn shape(self) -> OperandShape {
        match self {
            Self::And | Self::Slt => OperandShape::RegRegReg,
            Self::Addi => OperandShape::RegRegImm,
            Self::Lui => OperandShape::RegImm,
            Self::Lw | Self::Sw => OperandShape::RegMem,
            Self::Beq => OperandShape::RegRegLabel,
        }
    }

    /// Statistics category.
    pub const fn class(self) -> InstClass {
        match self {
            Self::And | Self::Slt | Self::Addi | Self::Lui => InstClass::Alu,
            Self::Lw => InstClass::Load,
            Self::Sw => InstClass::Store,
            Self::Beq => InstClass::Branch,
        }
    }

    /// Major opcode and, for R-type mnemonics, function code.
    pub const fn encoding(self) -> (u32, Option<u32>) {
        match self {
            Self::And => (opcodes::OP_SPECIAL, Some(opcodes::FUNCT_AND)),
            Self::Slt => (opcodes::OP_SPECIAL, Some(opcodes::FUNCT_SLT)),
            Self::Addi => (opcodes::OP_ADDI, None),
            Self::Lui => (opcodes::OP_LUI, None),
            Self::Lw => (opcodes::OP_LW, None),
            Self::Sw => (opcodes::OP_SW, None),
            Self::Beq => (opcodes::OP_BEQ, None),
        }
    }
}

impl FromStr for Mnemonic {
    type Err = ();

    /// Parses a mnemonic, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved, immutable instruction.
///
/// Registers are bound to indices and branch targets to signed word offsets
/// relative to the following instruction. Produced by the assembler or by
/// [`decode`](crate::isa::decode::decode); never mutated during execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `and rd, rs, rt`
    And {
        /// Destination.
        rd: Reg,
        /// First source.
        rs: Reg,
        /// Second source.
        rt: Reg,
    },
    /// `slt rd, rs, rt`
    Slt {
        /// Destination.
        rd: Reg,
        /// First source.
        rs: Reg,
        /// Second source.
        rt: Reg,
    },
    /// `addi rt, rs, imm`
    Addi {
        /// Destination.
        rt: Reg,
        /// Source.
        rs: Reg,
        /// Immediate, sign-extended at execution.
        imm: i16,
    },
    /// `lui rt, imm`
    Lui {
        /// Destination.
        rt: Reg,
        /// Upper half-word.
        imm: u16,
    },
    /// `lw rt, offset(base)`
    Lw {
        /// Destination.
        rt: Reg,
        /// Base address register.
        base: Reg,
        /// Byte offset, sign-extended at execution.
        offset: i16,
    },
    /// `sw rt, offset(base)`
    Sw {
        /// Value source.
        rt: Reg,
        /// Base address register.
        base: Reg,
        /// Byte offset, sign-extended at execution.
        offset: i16,
    },
    /// `beq rs, rt, offset`
    Beq {
        /// First comparand.
        rs: Reg,
        /// Second comparand.
        rt: Reg,
        /// Target in instructions, relative to the following instruction.
        offset: i16,
    },
}

impl Instruction {
    /// Returns the mnemonic of this instruction.
    pub const fn mnemonic(&self) -> Mnemonic {
        match self {
            Self::And { .. } => Mnemonic::And,
            Self::Slt { .. } => Mnemonic::Slt,
            Self::Addi { .. } => Mnemonic::Addi,
            Self::Lui { .. } => Mnemonic::Lui,
            Self::Lw { .. } => Mnemonic::Lw,
            Self::Sw { .. } => Mnemonic::Sw,
            Self::Beq { .. } => Mnemonic::Beq,
        }
    }

    /// Returns the statistics category of this instruction.
    pub const fn class(&self) -> InstClass {
        self.mnemonic().class()
    }

    /// Returns the register this instruction writes, if any.
    ///
    /// Writes to `$zero` are still reported here; the engine discards them.
    pub const fn dest(&self) -> Option<Reg> {
        match *self {
            Self::And { rd, .. } | Self::Slt { rd, .. } => Some(rd),
            Self::Addi { rt, .. } | Self::Lui { rt, .. } | Self::Lw { rt, .. } => Some(rt),
            Self::Sw { .. } | Self::Beq { .. } => None,
        }
    }

    /// Encodes the instruction as a MIPS-I machine word.
    ///
    /// # Returns
    ///
    /// The 32-bit word; R-type instructions carry a zero shift amount.
    pub fn encode(&self) -> u32 {
        let (opcode, funct) = self.mnemonic().encoding();
        match *self {
            Self::And { rd, rs, rt } | Self::Slt { rd, rs, rt } => {
                r_type(opcode, rs, rt, rd, funct.unwrap_or(0))
            }
            Self::Addi { rt, rs, imm } => i_type(opcode, rs, rt, imm as u16),
            Self::Lui { rt, imm } => i_type(opcode, Reg::ZERO, rt, imm),
            Self::Lw { rt, base, offset } | Self::Sw { rt, base, offset } => {
                i_type(opcode, base, rt, offset as u16)
            }
            Self::Beq { rs, rt, offset } => i_type(opcode, rs, rt, offset as u16),
        }
    }
}

/// Packs an R-type word.
const fn r_type(opcode: u32, rs: Reg, rt: Reg, rd: Reg, funct: u32) -> u32 {
    (opcode << OPCODE_SHIFT)
        | ((rs.index() as u32) << RS_SHIFT)
        | ((rt.index() as u32) << RT_SHIFT)
        | ((rd.index() as u32) << RD_SHIFT)
        | (funct & FUNCT_MASK)
}

/// Packs an I-type word.
const fn i_type(opcode: u32, rs: Reg, rt: Reg, imm: u16) -> u32 {
    (opcode << OPCODE_SHIFT)
        | ((rs.index() as u32) << RS_SHIFT)
        | ((rt.index() as u32) << RT_SHIFT)
        | imm as u32
}
