//! Assembled programs.
//!
//! A [`Program`] is the output of assembly or of decoding a hex listing:
//! 1. **Instructions:** One resolved [`Instruction`] per source instruction line.
//! 2. **Symbols:** The label table from the first pass (empty for listings).
//! 3. **Source lines:** Line number and text of each instruction, for diagnostics.

use std::fmt::Write as _;

use super::symbols::SymbolTable;
use crate::common::constants::WORD_BYTES;
use crate::common::error::LoadError;
use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;

/// Where an instruction came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number in the source (or listing).
    pub line: usize,
    /// The statement text, without labels or comments.
    pub text: String,
}

/// An executable instruction sequence with its diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
    symbols: SymbolTable,
    lines: Vec<SourceLine>,
}

impl Program {
    /// Bundles assembled parts into a program.
    ///
    /// `lines` must have one entry per instruction.
    pub fn new(instructions: Vec<Instruction>, symbols: SymbolTable, lines: Vec<SourceLine>) -> Self {
        debug_assert_eq!(instructions.len(), lines.len());
        Self {
            instructions,
            symbols,
            lines,
        }
    }

    /// Decodes machine words into a program with an empty symbol table.
    ///
    /// # Arguments
    ///
    /// * `words` - Instruction words in program order.
    ///
    /// # Returns
    ///
    /// The program, `LoadError::Empty` for an empty slice, or
    /// `LoadError::Decode` naming the first word outside the subset.
    pub fn from_words(words: &[u32]) -> Result<Self, LoadError> {
        if words.is_empty() {
            return Err(LoadError::Empty);
        }
        let instructions = words
            .iter()
            .enumerate()
            .map(|(index, &word)| decode(word).map_err(|source| LoadError::Decode { index, source }))
            .collect::<Result<Vec<_>, _>>()?;
        let lines = instructions
            .iter()
            .enumerate()
            .map(|(idx, inst)| SourceLine {
                line: idx + 1,
                text: inst.to_string(),
            })
            .collect();
        Ok(Self::new(instructions, SymbolTable::new(), lines))
    }

    /// The instruction sequence; slot `i` lives at byte address `4 * i`.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// The label table.
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Source location of instruction `index`.
    pub fn source_line(&self, index: usize) -> Option<&SourceLine> {
        self.lines.get(index)
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true if the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Byte address of a label, if defined.
    pub fn entry_pc(&self, label: &str) -> Option<u32> {
        self.symbols.get(label).map(|sym| sym.address())
    }

    /// Encodes every instruction into its 32-bit machine word.
    pub fn encode(&self) -> Vec<u32> {
        self.instructions.iter().map(Instruction::encode).collect()
    }

    /// Renders the hex listing: one 8-digit lowercase word per line.
    pub fn to_hex_listing(&self) -> String {
        let mut out = String::with_capacity(self.instructions.len() * 9);
        for word in self.encode() {
            let _ = writeln!(out, "{word:08x}");
        }
        out
    }

    /// Renders an annotated disassembly: address, word, labels and text.
    pub fn disassembly(&self) -> String {
        let mut out = String::new();
        for (idx, inst) in self.instructions.iter().enumerate() {
            for label in self.symbols.labels_at(idx) {
                let _ = writeln!(out, "{label}:");
            }
            let addr = idx as u32 * WORD_BYTES;
            let _ = writeln!(out, "  {addr:08x}:  {:08x}  {inst}", inst.encode());
        }
        out
    }
}
