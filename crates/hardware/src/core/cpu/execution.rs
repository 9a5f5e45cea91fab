//! Single-Cycle Execution.
//!
//! This module implements one architectural cycle of the CPU. It performs the following:
//! 1. **Fetch:** Reads the instruction addressed by the PC from the program.
//! 2. **Evaluate:** Computes the instruction's effect without touching any state.
//! 3. **Commit:** Applies the effect, advances or redirects the PC, and updates statistics.
//!
//! Splitting evaluation from commit means a faulting instruction never
//! leaves a partial update behind: every check happens before the first write.

use tracing::{debug, trace};

use super::Cpu;
use crate::common::constants::WORD_BYTES;
use crate::common::error::ExecutionError;
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::abi::Reg;
use crate::isa::decode::sign_extend16;
use crate::isa::instruction::Instruction;

/// Shift applied by `lui` to place its immediate in the upper half-word.
const LUI_SHIFT: u32 = 16;

/// The architectural effect of one executed instruction.
///
/// Exactly one effect is produced per instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// A register was written.
    RegWrite {
        /// Destination register (never `$zero`).
        reg: Reg,
        /// Value before the write.
        old: u32,
        /// Value after the write.
        new: u32,
    },
    /// A result was produced for `$zero` and discarded; no state changed.
    Discarded {
        /// The value that would have been written.
        value: u32,
    },
    /// A word was stored to data memory.
    MemWrite {
        /// Effective byte address.
        addr: u32,
        /// Value before the write.
        old: u32,
        /// Value after the write.
        new: u32,
    },
    /// A branch was resolved.
    Branch {
        /// Whether the condition held.
        taken: bool,
        /// Byte address of the branch target.
        target: u32,
    },
}

impl Effect {
    /// Returns true if the effect changed a register or memory value.
    ///
    /// Rewriting a location with the value it already holds does not count.
    pub const fn changes_state(&self) -> bool {
        match *self {
            Self::RegWrite { old, new, .. } | Self::MemWrite { old, new, .. } => old != new,
            Self::Discarded { .. } | Self::Branch { .. } => false,
        }
    }
}

impl Cpu {
    /// Fetches the instruction addressed by the PC.
    ///
    /// # Arguments
    ///
    /// * `program` - The instruction sequence; slot `i` lives at byte address `4 * i`.
    ///
    /// # Returns
    ///
    /// The instruction, or `ProgramCounterOutOfRange` when the PC is misaligned
    /// or past the end of the program.
    pub fn fetch(&self, program: &[Instruction]) -> Result<Instruction, ExecutionError> {
        let out_of_range = ExecutionError::ProgramCounterOutOfRange { pc: self.pc };
        if self.pc % WORD_BYTES != 0 {
            return Err(out_of_range);
        }
        program
            .get((self.pc / WORD_BYTES) as usize)
            .copied()
            .ok_or(out_of_range)
    }

    /// Computes the effect of an instruction against the current state.
    ///
    /// Performs every validation the instruction requires. Never mutates.
    pub fn evaluate(&self, inst: &Instruction) -> Result<Effect, ExecutionError> {
        let reg = |r: Reg| self.regs.read(r.index());

        let effect = match *inst {
            Instruction::And { rd, rs, rt } => {
                self.reg_effect(rd, Alu::execute(AluOp::And, reg(rs), reg(rt)))
            }
            Instruction::Slt { rd, rs, rt } => {
                self.reg_effect(rd, Alu::execute(AluOp::Slt, reg(rs), reg(rt)))
            }
            Instruction::Addi { rt, rs, imm } => {
                self.reg_effect(rt, Alu::execute(AluOp::Add, reg(rs), sign_extend16(imm)))
            }
            Instruction::Lui { rt, imm } => {
                self.reg_effect(rt, Alu::execute(AluOp::Sll, u32::from(imm), LUI_SHIFT))
            }
            Instruction::Lw { rt, base, offset } => {
                let value = self.load_word(base, offset)?;
                self.reg_effect(rt, value)
            }
            Instruction::Sw { rt, base, offset } => {
                let (addr, old) = self.check_store(base, offset)?;
                Effect::MemWrite {
                    addr,
                    old,
                    new: reg(rt),
                }
            }
            Instruction::Beq { rs, rt, offset } => {
                let next = self.pc.wrapping_add(WORD_BYTES);
                let displacement = sign_extend16(offset).wrapping_mul(WORD_BYTES);
                Effect::Branch {
                    taken: reg(rs) == reg(rt),
                    target: Alu::execute(AluOp::Add, next, displacement),
                }
            }
        };

        Ok(effect)
    }

    /// Applies a previously evaluated effect and advances the PC.
    ///
    /// # Arguments
    ///
    /// * `inst` - The instruction the effect came from (for statistics).
    /// * `effect` - The result of [`evaluate`](Self::evaluate) on the current state.
    ///
    /// # Errors
    ///
    /// `MemoryAccess` if a store effect names an address this memory
    /// does not have. The PC, registers and statistics are then unchanged.
    pub fn commit(&mut self, inst: &Instruction, effect: Effect) -> Result<(), ExecutionError> {
        let next_pc = self.pc.wrapping_add(WORD_BYTES);
        self.pc = match effect {
            Effect::RegWrite { reg, new, .. } => {
                self.regs.write(reg.index(), new);
                self.stats.reg_writes += 1;
                next_pc
            }
            Effect::Discarded { .. } => {
                self.stats.zero_writes_discarded += 1;
                next_pc
            }
            Effect::MemWrite { addr, new, .. } => {
                self.dmem.write_word(addr, new)?;
                self.stats.mem_writes += 1;
                next_pc
            }
            Effect::Branch { taken, target } => {
                if taken {
                    self.stats.branches_taken += 1;
                    target
                } else {
                    next_pc
                }
            }
        };
        self.stats.retire(inst.class());
        Ok(())
    }

    /// Executes one instruction: evaluate, then commit.
    ///
    /// On error the CPU is left exactly as it was.
    pub fn execute(&mut self, inst: &Instruction) -> Result<Effect, ExecutionError> {
        let pc = self.pc;
        let effect = self.evaluate(inst)?;
        self.commit(inst, effect)?;

        trace!(pc, %inst, ?effect, "retired");
        if self.trace {
            let text = inst.to_string();
            debug!("{pc:#010x}: {text:<28} {}", describe(&effect));
        }
        Ok(effect)
    }

    /// Builds the effect of writing `value` to `rd`, honoring `$zero`.
    fn reg_effect(&self, rd: Reg, value: u32) -> Effect {
        if rd.is_zero() {
            Effect::Discarded { value }
        } else {
            Effect::RegWrite {
                reg: rd,
                old: self.regs.read(rd.index()),
                new: value,
            }
        }
    }
}

/// Short human-readable rendering of an effect for trace output.
fn describe(effect: &Effect) -> String {
    match *effect {
        Effect::RegWrite { reg, old, new } => format!("{reg} = {new:#x} (was {old:#x})"),
        Effect::Discarded { value } => format!("$zero <- {value:#x} discarded"),
        Effect::MemWrite { addr, old, new } => {
            format!("mem[{addr:#x}] = {new:#x} (was {old:#x})")
        }
        Effect::Branch { taken: true, target } => format!("branch -> {target:#x}"),
        Effect::Branch { taken: false, .. } => "branch not taken".to_string(),
    }
}
