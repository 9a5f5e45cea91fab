//! Word-Addressed Data Memory.
//!
//! This module implements the data memory used by `lw` and `sw`. It performs the following:
//! 1. **Storage:** A zero-initialized array of 32-bit words.
//! 2. **Validation:** Rejects misaligned and out-of-range byte addresses.
//! 3. **Observability:** Exposes the raw words for snapshots and dumps.
//!
//! Addresses are byte addresses; word `i` lives at byte address `4 * i`.

use crate::common::constants::{WORD_ALIGN_MASK, WORD_BYTES};
use crate::common::error::{AccessType, ExecutionError, MemFault};

/// Data memory: a fixed-size array of words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataMemory {
    words: Vec<u32>,
}

impl DataMemory {
    /// Creates a zero-filled memory.
    ///
    /// # Arguments
    ///
    /// * `size_words` - Number of word cells.
    pub fn new(size_words: usize) -> Self {
        Self {
            words: vec![0; size_words],
        }
    }

    /// Number of word cells.
    pub fn len_words(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the memory has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Validates a byte address for a word access.
    ///
    /// # Arguments
    ///
    /// * `addr` - The byte address.
    /// * `access` - Load or store, reported in the error.
    ///
    /// # Returns
    ///
    /// The word index on success, or `ExecutionError::MemoryAccess`.
    pub fn check(&self, addr: u32, access: AccessType) -> Result<usize, ExecutionError> {
        if addr & WORD_ALIGN_MASK != 0 {
            return Err(ExecutionError::MemoryAccess {
                addr,
                access,
                fault: MemFault::Misaligned,
            });
        }
        let idx = (addr / WORD_BYTES) as usize;
        if idx >= self.words.len() {
            return Err(ExecutionError::MemoryAccess {
                addr,
                access,
                fault: MemFault::OutOfBounds,
            });
        }
        Ok(idx)
    }

    /// Reads the word at a byte address.
    pub fn read_word(&self, addr: u32) -> Result<u32, ExecutionError> {
        let idx = self.check(addr, AccessType::Load)?;
        Ok(self.words[idx])
    }

    /// Writes the word at a byte address.
    pub fn write_word(&mut self, addr: u32, val: u32) -> Result<(), ExecutionError> {
        let idx = self.check(addr, AccessType::Store)?;
        self.words[idx] = val;
        Ok(())
    }

    /// All words in address order.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Resets every cell to zero.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }
}
