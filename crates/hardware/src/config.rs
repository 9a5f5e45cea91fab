//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline constants (memory size, start address, cycle budget).
//! 2. **Structures:** Hierarchical config for general and memory settings.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or built with `Config::default()`.
//! Every field is optional in JSON; missing fields take their default.

use serde::Deserialize;

use crate::common::constants::{DEFAULT_MAX_CYCLES, DEFAULT_MEMORY_WORDS};

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use mipsim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.general.trace_instructions, false);
/// assert_eq!(config.memory.size_words, 1024);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use mipsim_core::config::Config;
///
/// let json = r#"{
///     "general": {
///         "trace_instructions": true,
///         "max_cycles": 500
///     },
///     "memory": {
///         "size_words": 64
///     }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.trace_instructions, true);
/// assert_eq!(config.general.start_pc, 0);
/// assert_eq!(config.general.max_cycles, 500);
/// assert_eq!(config.memory.size_words, 64);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// General simulation settings
    pub general: GeneralConfig,
    /// Data memory configuration
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed JSON or unknown fields.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    /// Emit a debug-level trace event for every executed instruction.
    pub trace_instructions: bool,

    /// Initial PC value as a byte address (defaults to the first instruction).
    pub start_pc: u32,

    /// Cycle budget used by callers that run a program to completion.
    pub max_cycles: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: 0,
            max_cycles: DEFAULT_MAX_CYCLES,
        }
    }
}

/// Data memory settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MemoryConfig {
    /// Number of 32-bit words of data memory.
    pub size_words: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size_words: DEFAULT_MEMORY_WORDS,
        }
    }
}
