//! Source parser.
//!
//! Runs the `asm.pest` grammar over assembly text and flattens the parse tree
//! into labels and instruction statements, in source order. Directives and
//! comments are dropped. Operands keep their source text; converting them to
//! registers and immediates is left to the second assembler pass so that range
//! and register errors are reported in statement order.

use pest::Parser;
use pest::error::{Error, LineColLocation};
use pest::iterators::Pair;
use pest_derive::Parser;

use super::operand::Operand;
use crate::common::error::AssemblyError;

/// Parser generated from `asm.pest`; also matches `#assert` bodies.
#[derive(Parser)]
#[grammar = "asm/asm.pest"]
pub struct AsmParser;

/// One meaningful item found in the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Item<'a> {
    /// A `name:` label definition.
    Label {
        /// 1-based source line.
        line: usize,
        /// The label name.
        name: &'a str,
    },
    /// An instruction statement, not yet validated against its mnemonic.
    Statement(Statement<'a>),
}

/// An instruction line split into mnemonic and operands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Statement<'a> {
    /// 1-based source line.
    pub line: usize,
    /// The mnemonic as written.
    pub mnemonic: &'a str,
    /// Operands in source order.
    pub operands: Vec<Operand<'a>>,
    /// The statement text without labels or comments.
    pub text: &'a str,
}

/// Converts a grammar failure into an assembly error on the failing line.
fn syntax_error(err: &Error<Rule>) -> AssemblyError {
    let (line, column) = match err.line_col {
        LineColLocation::Pos(pos) | LineColLocation::Span(pos, _) => pos,
    };
    AssemblyError::Malformed {
        line,
        reason: format!("syntax error at column {column}: {}", err.variant.message()),
    }
}

fn statement(line: usize, pair: Pair<'_, Rule>) -> Statement<'_> {
    let mut stmt = Statement {
        line,
        mnemonic: "",
        operands: Vec::new(),
        text: pair.as_str(),
    };
    for part in pair.into_inner() {
        if part.as_rule() == Rule::mnemonic {
            stmt.mnemonic = part.as_str();
        } else {
            stmt.operands.push(Operand::from_pair(part));
        }
    }
    stmt
}

/// Parses the whole source into labels and statements.
///
/// # Arguments
///
/// * `source` - Assembly text.
///
/// # Returns
///
/// The items in source order, or `AssemblyError::Malformed` tagged with the
/// line of the first syntax error.
pub fn parse_source(source: &str) -> Result<Vec<Item<'_>>, AssemblyError> {
    let mut pairs = AsmParser::parse(Rule::program, source).map_err(|err| syntax_error(&err))?;
    let Some(program) = pairs.next() else {
        return Ok(Vec::new());
    };

    let mut items = Vec::new();
    let lines = program
        .into_inner()
        .filter(|pair| pair.as_rule() == Rule::line);
    for (idx, line) in lines.enumerate() {
        let number = idx + 1;
        for pair in line.into_inner() {
            match pair.as_rule() {
                Rule::label => {
                    if let Some(name) = pair.into_inner().next() {
                        items.push(Item::Label {
                            line: number,
                            name: name.as_str(),
                        });
                    }
                }
                Rule::instruction => items.push(Item::Statement(statement(number, pair))),
                _ => {}
            }
        }
    }
    Ok(items)
}

/// Converts grammar-checked integer text (`-12`, `+7`, `0x1F`) to a value.
///
/// Returns `None` only when the magnitude does not fit in an `i64`.
pub fn integer_value(text: &str) -> Option<i64> {
    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let magnitude = match body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        Some(hex) => i64::from_str_radix(hex, 16).ok()?,
        None => body.parse::<i64>().ok()?,
    };
    Some(if negative { -magnitude } else { magnitude })
}
