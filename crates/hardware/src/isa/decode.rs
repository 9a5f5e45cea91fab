//! MIPS Instruction Decoder.
//!
//! This module handles the decoding of 32-bit MIPS-I machine words into the
//! resolved [`Instruction`] form. It dispatches on the major opcode, then on
//! the function field for R-type words, and rejects any encoding outside the
//! supported subset (including R-type words with a non-zero shift amount and
//! `lui` words with a non-zero `rs` field).

use crate::common::error::DecodeError;
use crate::isa::instruction::{Instruction, InstructionBits};
use crate::isa::opcodes;

/// Decodes a machine word into an instruction.
///
/// # Arguments
///
/// * `word` - The 32-bit instruction encoding to decode.
///
/// # Returns
///
/// The decoded instruction, or `DecodeError::IllegalInstruction` when the
/// word is not part of the supported subset.
pub fn decode(word: u32) -> Result<Instruction, DecodeError> {
    let illegal = DecodeError::IllegalInstruction { word };
    let (rs, rt) = (word.rs(), word.rt());

    let inst = match word.opcode() {
        opcodes::OP_SPECIAL => {
            if word.shamt() != 0 {
                return Err(illegal);
            }
            let rd = word.rd();
            match word.funct() {
                opcodes::FUNCT_AND => Instruction::And { rd, rs, rt },
                opcodes::FUNCT_SLT => Instruction::Slt { rd, rs, rt },
                _ => return Err(illegal),
            }
        }
        opcodes::OP_ADDI => Instruction::Addi {
            rt,
            rs,
            imm: word.imm16() as i16,
        },
        opcodes::OP_LUI => {
            if !rs.is_zero() {
                return Err(illegal);
            }
            Instruction::Lui {
                rt,
                imm: word.imm16(),
            }
        }
        opcodes::OP_LW => Instruction::Lw {
            rt,
            base: rs,
            offset: word.imm16() as i16,
        },
        opcodes::OP_SW => Instruction::Sw {
            rt,
            base: rs,
            offset: word.imm16() as i16,
        },
        opcodes::OP_BEQ => Instruction::Beq {
            rs,
            rt,
            offset: word.imm16() as i16,
        },
        _ => return Err(illegal),
    };

    Ok(inst)
}

/// Sign-extends the low 16 bits of a value to a 32-bit word.
#[inline]
pub const fn sign_extend16(imm: i16) -> u32 {
    imm as i32 as u32
}
