//! Expectation Comments.
//!
//! Test programs state their expected final state in comments:
//!
//! ```text
//! #assert(sim.inspect_mem(rf)[8] == 35)
//! #assert(sim.inspect_mem(d_mem)[0] == 0x1234 & 0xff)
//! ```
//!
//! `rf` indexes the register file and `d_mem` indexes data memory by word.
//! An optional `&`, `|` or `^` with a second integer is folded into the
//! expected value when the comment is parsed. The text is matched by the
//! `assertion` rule of the assembler grammar, and a folded value outside
//! `i32::MIN..=u32::MAX` is rejected.

use std::fmt;
use std::str::FromStr;

use pest::Parser;

use super::inspect::Snapshot;
use crate::asm::parser::{AsmParser, Rule, integer_value};
use crate::common::error::AssertionError;

/// Which state an assertion reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemBlock {
    /// The register file (`rf`).
    Registers,
    /// Data memory (`d_mem`).
    Memory,
}

impl FromStr for MemBlock {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rf" => Ok(Self::Registers),
            "d_mem" => Ok(Self::Memory),
            _ => Err(()),
        }
    }
}

/// A parsed expectation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assertion {
    /// The state being read.
    pub block: MemBlock,
    /// Register or word index; out-of-range indices read 0.
    pub index: i64,
    /// Expected value with any combinator already applied.
    pub expected: i64,
    /// The assertion text as written, without the leading `#`.
    pub text: String,
}

/// The result of checking one assertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssertionOutcome {
    /// Whether the state matched.
    pub passed: bool,
    /// The value read from the snapshot.
    pub actual: u32,
}

/// Values a 32-bit word can be written as, signed or unsigned.
const WORD_RANGE: (i64, i64) = (i32::MIN as i64, u32::MAX as i64);

/// Folds `value op other` for one of `&`, `|` or `^`.
fn combine(op: &str, value: i64, other: i64) -> i64 {
    match op {
        "&" => value & other,
        "|" => value | other,
        _ => value ^ other,
    }
}

impl Assertion {
    /// Parses one assertion; a leading `#` is optional.
    ///
    /// # Errors
    ///
    /// `AssertionError::Malformed` if the text does not follow
    /// `assert(sim.inspect_mem(rf|d_mem)[index] == value [op value])`, or if
    /// the expected value does not fit in a 32-bit word.
    pub fn parse(line: &str) -> Result<Self, AssertionError> {
        let text = line.trim();
        let text = text.strip_prefix('#').unwrap_or(text);
        Self::parse_body(text).ok_or_else(|| AssertionError::Malformed {
            text: text.to_string(),
        })
    }

    fn parse_body(text: &str) -> Option<Self> {
        let assertion = AsmParser::parse(Rule::assertion, text).ok()?.next()?;
        let mut parts = assertion
            .into_inner()
            .filter(|pair| pair.as_rule() != Rule::EOI);
        let block = parts.next()?.as_str().parse().ok()?;
        let index = integer_value(parts.next()?.as_str())?;
        let mut expected = integer_value(parts.next()?.as_str())?;
        if let Some(op) = parts.next() {
            let other = integer_value(parts.next()?.as_str())?;
            expected = combine(op.as_str(), expected, other);
        }
        let (min, max) = WORD_RANGE;
        if expected < min || expected > max {
            return None;
        }
        Some(Self {
            block,
            index,
            expected,
            text: text.to_string(),
        })
    }

    /// Compares the expectation with a snapshot as 32-bit words.
    pub fn check(&self, snapshot: &Snapshot) -> AssertionOutcome {
        let actual = match self.block {
            MemBlock::Registers => snapshot.register(self.index),
            MemBlock::Memory => snapshot.memory_word(self.index),
        };
        AssertionOutcome {
            passed: actual == self.expected as u32,
            actual,
        }
    }
}

/// Finds every `#assert(` line in a source file, in order.
pub fn collect_assertions(source: &str) -> Vec<Result<Assertion, AssertionError>> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("#assert("))
        .map(Assertion::parse)
        .collect()
}

/// Result status of one assertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// The state matched.
    Pass,
    /// The state differed.
    Fail,
    /// The assertion could not be parsed.
    Invalid,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pass => "OK",
            Self::Fail => "X ",
            Self::Invalid => "!!",
        })
    }
}

/// One evaluated assertion, printable as a report line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    /// Pass, fail, or invalid.
    pub status: Status,
    /// The value read, if the assertion was valid.
    pub actual: Option<u32>,
    /// The assertion text.
    pub text: String,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self
            .actual
            .map_or_else(|| "BAD ASSERT".to_string(), |v| format!("{v:#x}"));
        write!(f, "{}  {value:>10}  {}", self.status, self.text)
    }
}

/// Pass counts over a set of assertions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    /// Valid assertions that held.
    pub passed: usize,
    /// Assertions that could be parsed.
    pub valid: usize,
    /// All assertions found.
    pub total: usize,
}

impl Tally {
    /// Percentage of valid assertions that passed, or `None` if none were valid.
    pub fn percentage(&self) -> Option<f64> {
        (self.valid > 0).then(|| 100.0 * self.passed as f64 / self.valid as f64)
    }

    /// Number of assertions that could not be parsed.
    pub const fn invalid(&self) -> usize {
        self.total - self.valid
    }

    /// True when every assertion was valid and held.
    pub const fn all_passed(&self) -> bool {
        self.total > 0 && self.passed == self.total
    }
}

/// Checks every assertion against a snapshot.
pub fn evaluate(
    assertions: &[Result<Assertion, AssertionError>],
    snapshot: &Snapshot,
) -> (Vec<Verdict>, Tally) {
    let mut tally = Tally {
        total: assertions.len(),
        ..Tally::default()
    };
    let verdicts = assertions
        .iter()
        .map(|entry| match entry {
            Ok(assertion) => {
                tally.valid += 1;
                let outcome = assertion.check(snapshot);
                let status = if outcome.passed {
                    tally.passed += 1;
                    Status::Pass
                } else {
                    Status::Fail
                };
                Verdict {
                    status,
                    actual: Some(outcome.actual),
                    text: assertion.text.clone(),
                }
            }
            Err(AssertionError::Malformed { text }) => Verdict {
                status: Status::Invalid,
                actual: None,
                text: text.clone(),
            },
        })
        .collect();
    (verdicts, tally)
}
