//! Tests for the MUL instruction.
//!
//! Tests cover:
//! - Wrapping 16-bit multiplication
//! - O receives the high word of the 32-bit product

use dcpu16::{Cpu, FlatMemory, Register};

/// Helper function to create a CPU with zeroed flat memory.
fn setup_cpu() -> Cpu<FlatMemory> {
    Cpu::new(FlatMemory::new())
}

#[test]
fn test_mul_basic() {
    let mut cpu = setup_cpu();

    // MUL A, B
    cpu.load_program(0x0000, &[0x0404]);
    cpu.set_register(Register::A, 0x0010);
    cpu.set_register(Register::B, 0x0010);

    cpu.step().unwrap();

    assert_eq!(cpu.register(Register::A), 0x0100);
    assert_eq!(cpu.o(), 0x0000);
}

#[test]
fn test_mul_overflow_high_word_in_o() {
    let mut cpu = setup_cpu();

    // MUL A, 0x04 with A = 0x4000: product is exactly 0x10000
    cpu.load_program(0x0000, &[0x9004]);
    cpu.set_register(Register::A, 0x4000);

    cpu.step().unwrap();

    assert_eq!(cpu.register(Register::A), 0x0000);
    assert_eq!(cpu.o(), 0x0001);
}

#[test]
fn test_mul_maximum_operands() {
    let mut cpu = setup_cpu();

    // MUL A, 0xFFFF with A = 0xFFFF: product 0xFFFE0001
    cpu.load_program(0x0000, &[0x7C04, 0xFFFF]);
    cpu.set_register(Register::A, 0xFFFF);

    cpu.step().unwrap();

    assert_eq!(cpu.register(Register::A), 0x0001);
    assert_eq!(cpu.o(), 0xFFFE);
}

#[test]
fn test_mul_by_zero_clears_o() {
    let mut cpu = setup_cpu();

    // MUL A, 0x00 with a stale O
    cpu.load_program(0x0000, &[0x8004]);
    cpu.set_register(Register::A, 0x1234);
    cpu.set_register(Register::O, 0xFFFF);

    cpu.step().unwrap();

    assert_eq!(cpu.register(Register::A), 0x0000);
    assert_eq!(cpu.o(), 0x0000);
}
