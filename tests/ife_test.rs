//! Tests for the IFE (skip unless equal) instruction.
//!
//! Tests cover:
//! - No skip when a == b
//! - Exactly one extra word skipped when a != b
//! - Operand extra words still consumed before the skip decision

use dcpu16::{Cpu, FlatMemory, Register};

/// Helper function to create a CPU with zeroed flat memory.
fn setup_cpu() -> Cpu<FlatMemory> {
    Cpu::new(FlatMemory::new())
}

#[test]
fn test_ife_equal_performs_next_instruction() {
    let mut cpu = setup_cpu();

    // IFE A, B; SET C, 0x01
    cpu.load_program(0x0000, &[0x040C, 0x8421]);
    cpu.set_register(Register::A, 0x0005);
    cpu.set_register(Register::B, 0x0005);

    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0001); // no skip

    cpu.step().unwrap();
    assert_eq!(cpu.register(Register::C), 0x0001);
}

#[test]
fn test_ife_unequal_skips_one_word() {
    let mut cpu = setup_cpu();

    // IFE A, B; SET C, 0x01
    cpu.load_program(0x0000, &[0x040C, 0x8421]);
    cpu.set_register(Register::A, 0x0005);
    cpu.set_register(Register::B, 0x0006);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x0002); // skipped exactly one word
    assert_eq!(cpu.register(Register::C), 0x0000);
}

#[test]
fn test_ife_consumes_operand_words_before_skipping() {
    let mut cpu = setup_cpu();

    // IFE A, 0x1234 (next word literal), condition false
    cpu.load_program(0x0000, &[0x7C0C, 0x1234]);

    let consumed = cpu.step().unwrap();

    assert_eq!(consumed, vec![0x7C0C, 0x1234]);
    // PC: past the two instruction words, plus the one-word skip.
    assert_eq!(cpu.pc(), 0x0003);
}
