//! # Assembly Error Tests
//!
//! Every error carries the 1-based line of the offending statement.

use mipsim_core::asm::Assembler;
use mipsim_core::common::AssemblyError;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_duplicate_label_reports_both_lines() {
    let err = Assembler::assemble("x: and $t0, $t0, $t0\n\nx: and $t0, $t0, $t0").unwrap_err();
    assert_eq!(
        err,
        AssemblyError::DuplicateLabel {
            line: 3,
            label: "x".into(),
            first_line: 1,
        }
    );
}

#[test]
fn test_undefined_label() {
    let err = Assembler::assemble("addi $t0, $zero, 1\nbeq $t0, $zero, nowhere").unwrap_err();
    assert_eq!(
        err,
        AssemblyError::UndefinedLabel {
            line: 2,
            label: "nowhere".into(),
        }
    );
}

#[test]
fn test_unknown_register() {
    let err = Assembler::assemble("and $t0, $t1, $t10").unwrap_err();
    assert_eq!(
        err,
        AssemblyError::UnknownRegister {
            line: 1,
            name: "$t10".into(),
        }
    );
}

#[rstest]
#[case("addi $t0, $zero, 32768", 32768, -32768, 32767)]
#[case("addi $t0, $zero, -32769", -32769, -32768, 32767)]
#[case("lw $t0, 40000($sp)", 40000, -32768, 32767)]
#[case("lui $t0, 65536", 65536, 0, 65535)]
#[case("lui $t0, -1", -1, 0, 65535)]
#[case("beq $t0, $t1, 0x8000", 32768, -32768, 32767)]
fn test_immediate_out_of_range(
    #[case] source: &str,
    #[case] value: i64,
    #[case] min: i64,
    #[case] max: i64,
) {
    let err = Assembler::assemble(source).unwrap_err();
    assert_eq!(
        err,
        AssemblyError::ImmediateRange {
            line: 1,
            value,
            min,
            max,
        }
    );
}

#[test]
fn test_label_displacement_out_of_range() {
    let mut source = String::from("beq $zero, $zero, far\n");
    for _ in 0..32_768 {
        source.push_str("and $t0, $t0, $t0\n");
    }
    source.push_str("far: and $t0, $t0, $t0\n");
    let err = Assembler::assemble(&source).unwrap_err();
    assert!(matches!(
        err,
        AssemblyError::ImmediateRange {
            line: 1,
            value: 32_768,
            ..
        }
    ));
}

#[rstest]
#[case::unknown_mnemonic("add $t0, $t1, $t2")]
#[case::too_few_operands("and $t0, $t1")]
#[case::too_many_operands("lui $t0, 1, 2")]
#[case::no_operands("beq")]
#[case::bad_literal("addi $t0, $t0, 12abc")]
#[case::bad_memory_operand("lw $t0, $sp")]
#[case::unclosed_memory_operand("sw $t0, 4($sp")]
#[case::bad_branch_target("beq $t0, $t1, $t2")]
#[case::bad_label("1st: and $t0, $t0, $t0")]
#[case::space_inside_memory_operand("lw $t0, 4 ($sp)")]
#[case::empty_operand_slot("addi $t0,, $zero, 5")]
#[case::trailing_comma("and $t0, $t1, $t2,")]
#[case::leading_comma("and , $t0, $t1, $t2")]
#[case::immediate_in_register_slot("and $t0, 5, $t1")]
#[case::literal_too_large("beq $t0, $t1, 0x10000000000000000")]
fn test_malformed(#[case] source: &str) {
    let err = Assembler::assemble(source).unwrap_err();
    assert!(
        matches!(err, AssemblyError::Malformed { line: 1, .. }),
        "{source}: {err}"
    );
}

#[test]
fn test_first_error_wins_and_reports_its_line() {
    let err = Assembler::assemble(
        "addi $t0, $zero, 1
         addi $t0, $zero, 1
         bogus $t0
         and $t0, $t0, $q",
    )
    .unwrap_err();
    assert_eq!(err.line(), 3);
}

#[test]
fn test_error_messages_name_the_line() {
    let err = Assembler::assemble("\n\nand $t0, $t0, $nope").unwrap_err();
    assert_eq!(err.to_string(), "line 3: unknown register `$nope`");
}

#[test]
fn test_syntax_error_reports_its_line() {
    let err = Assembler::assemble("addi $t0, $zero, 1\nand $t0, $t1, $t2,").unwrap_err();
    assert_eq!(err.line(), 2);
    assert!(
        err.to_string().starts_with("line 2: malformed instruction: syntax error at column"),
        "{err}"
    );
}
