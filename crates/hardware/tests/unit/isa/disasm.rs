//! # Disassembler Tests

use mipsim_core::asm::Assembler;
use mipsim_core::isa::disasm::disassemble;
use rstest::rstest;

#[rstest]
#[case(0x2008_0023, "addi $t0, $zero, 35")]
#[case(0x0109_5024, "and $t2, $t0, $t1")]
#[case(0x0109_502A, "slt $t2, $t0, $t1")]
#[case(0x3C0F_0F39, "lui $t7, 3897")]
#[case(0x8FA9_0004, "lw $t1, 4($sp)")]
#[case(0xAFA8_FFFC, "sw $t0, -4($sp)")]
#[case(0x1109_FFFD, "beq $t0, $t1, -3")]
#[case(0x0800_0000, "unknown")]
fn test_disassemble(#[case] word: u32, #[case] text: &str) {
    assert_eq!(disassemble(word), text);
}

#[test]
fn test_disassembly_reassembles_to_the_same_words() {
    let program = Assembler::assemble(crate::common::fixtures::ALU_IMMEDIATES).unwrap();
    let text: String = program
        .instructions()
        .iter()
        .map(|inst| format!("{inst}\n"))
        .collect();
    let again = Assembler::assemble(&text).unwrap();
    assert_eq!(again.encode(), program.encode());
}
