//! Listing and Source Loader.
//!
//! This module reads programs from disk. It provides:
//! 1. **Listing parsing:** Hex machine-code listings, one instruction word per line.
//! 2. **File loading:** Reads listings and assembly sources with I/O errors surfaced as [`LoadError`].
//! 3. **Consistency checks:** Compares a listing against the source it was built from.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::asm::Program;
use crate::common::error::LoadError;

/// Parses a hex listing into instruction words.
///
/// Blank lines and lines starting with `#` are skipped; a `0x` prefix is optional.
///
/// # Arguments
///
/// * `text` - The listing contents.
///
/// # Returns
///
/// The words in listing order, `LoadError::BadHexWord` for a line that is not a
/// 32-bit hex number, or `LoadError::Empty` if no words were found.
pub fn parse_hex_listing(text: &str) -> Result<Vec<u32>, LoadError> {
    let mut words = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let digits = line
            .strip_prefix("0x")
            .or_else(|| line.strip_prefix("0X"))
            .unwrap_or(line);
        let bad = || LoadError::BadHexWord {
            line: idx + 1,
            text: line.to_string(),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(bad());
        }
        words.push(u32::from_str_radix(digits, 16).map_err(|_| bad())?);
    }
    if words.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(words)
}

/// Reads and parses a hex listing file.
pub fn load_listing(path: &Path) -> Result<Vec<u32>, LoadError> {
    let text = fs::read_to_string(path)?;
    let words = parse_hex_listing(&text)?;
    debug!(path = %path.display(), words = words.len(), "loaded listing");
    Ok(words)
}

/// Reads a listing file and decodes it into a program.
pub fn load_listing_program(path: &Path) -> Result<Program, LoadError> {
    Program::from_words(&load_listing(path)?)
}

/// Reads an assembly source file.
pub fn load_source(path: &Path) -> Result<String, LoadError> {
    Ok(fs::read_to_string(path)?)
}

/// Checks that a listing and the program assembled from its source agree in length.
///
/// Logs a warning on mismatch.
pub fn counts_match(listing: &Program, source: &Program) -> bool {
    if listing.len() == source.len() {
        return true;
    }
    warn!(
        listing = listing.len(),
        source = source.len(),
        "instruction count mismatch between listing and source"
    );
    false
}
