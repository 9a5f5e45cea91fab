//! # Label Resolution Tests
//!
//! Branch offsets are measured in instructions from the instruction after the branch.

use mipsim_core::asm::Assembler;
use mipsim_core::isa::Instruction;
use pretty_assertions::assert_eq;

fn beq_offset(inst: &Instruction) -> i16 {
    match *inst {
        Instruction::Beq { offset, .. } => offset,
        other => panic!("expected beq, got {other}"),
    }
}

#[test]
fn test_forward_and_backward_references_mirror_each_other() {
    let program = Assembler::assemble(
        "back: and $t0, $t0, $t0
               beq $zero, $zero, back
               beq $zero, $zero, fwd
               and $t0, $t0, $t0
         fwd:  and $t0, $t0, $t0",
    )
    .unwrap();

    let back = beq_offset(&program.instructions()[1]);
    let fwd = beq_offset(&program.instructions()[2]);
    assert_eq!(back, -2);
    assert_eq!(fwd, 1);
}

#[test]
fn test_equal_displacement_gives_equal_magnitude() {
    let program = Assembler::assemble(
        "top:  and $t0, $t0, $t0
               beq $zero, $zero, top
               beq $zero, $zero, fwd
               and $t0, $t0, $t0
               and $t0, $t0, $t0
         fwd:  and $t0, $t0, $t0",
    )
    .unwrap();
    let back = beq_offset(&program.instructions()[1]);
    let fwd = beq_offset(&program.instructions()[2]);
    assert_eq!(back, -2);
    assert_eq!(fwd, 2);
    assert_eq!(back.unsigned_abs(), fwd.unsigned_abs());

    let words = program.encode();
    assert_eq!(words[1] & 0xFFFF, 0xFFFE);
    assert_eq!(words[2] & 0xFFFF, 0x0002);
}

#[test]
fn test_self_branch_offset_is_minus_one() {
    let program = Assembler::assemble("halt: beq $zero, $zero, halt").unwrap();
    assert_eq!(beq_offset(&program.instructions()[0]), -1);
}

#[test]
fn test_label_on_its_own_line_binds_to_next_instruction() {
    let program = Assembler::assemble(
        "addi $t0, $zero, 1
         target:

         # a comment between the label and its instruction
         addi $t1, $zero, 2",
    )
    .unwrap();
    assert_eq!(program.symbols().get("target").unwrap().index, 1);
    assert_eq!(program.entry_pc("target"), Some(4));
}

#[test]
fn test_multiple_labels_share_an_instruction() {
    let program = Assembler::assemble("a: b: addi $t0, $zero, 1\nc:\n addi $t0, $t0, 1").unwrap();
    assert_eq!(program.symbols().labels_at(0), vec!["a", "b"]);
    assert_eq!(program.symbols().labels_at(1), vec!["c"]);
    assert_eq!(program.symbols().len(), 3);
}

#[test]
fn test_trailing_label_points_past_the_end() {
    let program = Assembler::assemble("beq $zero, $zero, end\nend:").unwrap();
    assert_eq!(program.len(), 1);
    assert_eq!(beq_offset(&program.instructions()[0]), 0);
    assert_eq!(program.entry_pc("end"), Some(4));
}

#[test]
fn test_labels_are_case_sensitive() {
    let program = Assembler::assemble(
        "Loop: addi $t0, $t0, 1
         loop: beq $zero, $zero, Loop",
    )
    .unwrap();
    assert_eq!(program.symbols().len(), 2);
    assert_eq!(beq_offset(&program.instructions()[1]), -2);
}

#[test]
fn test_numeric_branch_target_is_a_raw_offset() {
    let program = Assembler::assemble("beq $t0, $t1, -3\nbeq $t0, $t1, 0x10").unwrap();
    assert_eq!(beq_offset(&program.instructions()[0]), -3);
    assert_eq!(beq_offset(&program.instructions()[1]), 16);
}

#[test]
fn test_source_lines_are_recorded() {
    let program = Assembler::assemble("\n# header\nmain: addi $t0, $zero, 1 # one\n\n  lui $t1, 2").unwrap();
    let first = program.source_line(0).unwrap();
    assert_eq!(first.line, 3);
    assert_eq!(first.text, "addi $t0, $zero, 1");
    assert_eq!(program.source_line(1).unwrap().line, 5);
    assert!(program.source_line(2).is_none());
}
