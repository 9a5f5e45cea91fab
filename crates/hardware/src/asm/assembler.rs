//! Two-Pass Assembler.
//!
//! This module turns assembly source into a [`Program`]. It performs the following:
//! 1. **Symbolization:** Parses the source with the `asm.pest` grammar and binds each
//!    label to the index of the next instruction, so branches may refer forward as
//!    well as backward.
//! 2. **Encoding:** Validates each statement against its mnemonic's operand shape,
//!    resolves registers, immediates and branch labels, and emits one resolved
//!    [`Instruction`] per statement.
//!
//! Assembly is all-or-nothing: the first error aborts and no program is produced.

use tracing::{debug, instrument};

use super::operand::{MemOperand, Operand, SIGNED_IMM_RANGE};
use super::parser::{self, Item, Statement};
use super::program::{Program, SourceLine};
use super::symbols::SymbolTable;
use crate::common::error::AssemblyError;
use crate::isa::instruction::{Instruction, Mnemonic};

/// The assembler. Stateless; all context lives in the source text.
#[derive(Clone, Copy, Debug, Default)]
pub struct Assembler;

impl Assembler {
    /// Assembles source text into a program.
    ///
    /// # Arguments
    ///
    /// * `source` - Assembly text; `#` starts a comment, `.` lines are directives.
    ///
    /// # Returns
    ///
    /// The program with its symbol table, or the first [`AssemblyError`]
    /// encountered, tagged with its source line.
    #[instrument(level = "debug", skip_all)]
    pub fn assemble(source: &str) -> Result<Program, AssemblyError> {
        let items = parser::parse_source(source)?;
        let symbols = Self::collect_symbols(&items)?;

        let mut instructions = Vec::new();
        let mut lines = Vec::new();
        for stmt in items.iter().filter_map(|item| match item {
            Item::Statement(stmt) => Some(stmt),
            Item::Label { .. } => None,
        }) {
            let index = instructions.len();
            instructions.push(Self::encode_statement(stmt, index, &symbols)?);
            lines.push(SourceLine {
                line: stmt.line,
                text: stmt.text.to_string(),
            });
        }

        debug!(
            instructions = instructions.len(),
            labels = symbols.len(),
            "assembled program"
        );
        Ok(Program::new(instructions, symbols, lines))
    }

    /// First pass: binds each label to the index of the next instruction.
    fn collect_symbols(items: &[Item<'_>]) -> Result<SymbolTable, AssemblyError> {
        let mut symbols = SymbolTable::new();
        let mut index = 0;
        for item in items {
            match item {
                Item::Label { line, name } => symbols.define(name, index, *line)?,
                Item::Statement(_) => index += 1,
            }
        }
        Ok(symbols)
    }

    /// Second pass: encodes one statement at instruction slot `index`.
    fn encode_statement(
        stmt: &Statement<'_>,
        index: usize,
        symbols: &SymbolTable,
    ) -> Result<Instruction, AssemblyError> {
        let line = stmt.line;
        let mnemonic: Mnemonic = stmt.mnemonic.parse().map_err(|()| AssemblyError::Malformed {
            line,
            reason: format!("unknown mnemonic `{}`", stmt.mnemonic),
        })?;

        let shape = mnemonic.shape();
        if stmt.operands.len() != shape.arity() {
            return Err(AssemblyError::Malformed {
                line,
                reason: format!(
                    "`{mnemonic}` takes {} operands ({}), found {}",
                    shape.arity(),
                    shape.template(),
                    stmt.operands.len()
                ),
            });
        }

        let ops = &stmt.operands;
        let reg = |i: usize| ops[i].register().map_err(|e| e.at(line));
        let simm = |i: usize| ops[i].signed_imm16().map_err(|e| e.at(line));
        let mem = |i: usize| ops[i].memory().map_err(|e| e.at(line));

        let inst = match mnemonic {
            Mnemonic::And => Instruction::And {
                rd: reg(0)?,
                rs: reg(1)?,
                rt: reg(2)?,
            },
            Mnemonic::Slt => Instruction::Slt {
                rd: reg(0)?,
                rs: reg(1)?,
                rt: reg(2)?,
            },
            Mnemonic::Addi => Instruction::Addi {
                rt: reg(0)?,
                rs: reg(1)?,
                imm: simm(2)?,
            },
            Mnemonic::Lui => Instruction::Lui {
                rt: reg(0)?,
                imm: ops[1].upper_imm16().map_err(|e| e.at(line))?,
            },
            Mnemonic::Lw => {
                let (rt, MemOperand { offset, base }) = (reg(0)?, mem(1)?);
                Instruction::Lw { rt, base, offset }
            }
            Mnemonic::Sw => {
                let (rt, MemOperand { offset, base }) = (reg(0)?, mem(1)?);
                Instruction::Sw { rt, base, offset }
            }
            Mnemonic::Beq => Instruction::Beq {
                rs: reg(0)?,
                rt: reg(1)?,
                offset: Self::branch_offset(&ops[2], line, index, symbols)?,
            },
        };
        Ok(inst)
    }

    /// Resolves a branch target to a word offset relative to the next instruction.
    ///
    /// A numeric target is taken as an already-resolved offset.
    fn branch_offset(
        target: &Operand<'_>,
        line: usize,
        index: usize,
        symbols: &SymbolTable,
    ) -> Result<i16, AssemblyError> {
        let displacement = match *target {
            Operand::Symbol(label) => {
                let symbol = symbols
                    .get(label)
                    .ok_or_else(|| AssemblyError::UndefinedLabel {
                        line,
                        label: label.to_string(),
                    })?;
                symbol.index as i64 - (index as i64 + 1)
            }
            _ => target.literal().map_err(|e| e.at(line))?,
        };

        let (min, max) = SIGNED_IMM_RANGE;
        i16::try_from(displacement).map_err(|_| AssemblyError::ImmediateRange {
            line,
            value: displacement,
            min,
            max,
        })
    }
}
