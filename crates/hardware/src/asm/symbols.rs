//! Symbol table built by the first assembler pass.

use std::collections::HashMap;

use crate::common::constants::WORD_BYTES;
use crate::common::error::AssemblyError;

/// A defined label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    /// Index of the instruction the label names.
    pub index: usize,
    /// 1-based source line of the definition.
    pub line: usize,
}

impl Symbol {
    /// Byte address of the labelled instruction.
    pub const fn address(&self) -> u32 {
        self.index as u32 * WORD_BYTES
    }
}

/// Label name to instruction index. Label names are case-sensitive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines a label.
    ///
    /// # Errors
    ///
    /// `AssemblyError::DuplicateLabel` if the name is already defined.
    pub fn define(&mut self, name: &str, index: usize, line: usize) -> Result<(), AssemblyError> {
        if let Some(first) = self.symbols.get(name) {
            return Err(AssemblyError::DuplicateLabel {
                line,
                label: name.to_string(),
                first_line: first.line,
            });
        }
        let _ = self
            .symbols
            .insert(name.to_string(), Symbol { index, line });
        Ok(())
    }

    /// Looks up a label.
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    /// Number of labels defined.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if no labels are defined.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Labels naming the instruction at `index`, sorted by name.
    pub fn labels_at(&self, index: usize) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .symbols
            .iter()
            .filter(|(_, sym)| sym.index == index)
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// All labels, ordered by instruction index and then by name.
    pub fn sorted(&self) -> Vec<(&str, &Symbol)> {
        let mut all: Vec<(&str, &Symbol)> = self
            .symbols
            .iter()
            .map(|(name, sym)| (name.as_str(), sym))
            .collect();
        all.sort_unstable_by(|a, b| a.1.index.cmp(&b.1.index).then(a.0.cmp(b.0)));
        all
    }
}
