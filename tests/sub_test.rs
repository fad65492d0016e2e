//! Tests for the SUB instruction.
//!
//! Tests cover:
//! - Wrapping 16-bit subtraction
//! - O = 0xFFFF on borrow, 0 otherwise (including clearing a stale O)
//! - Subtracting a memory operand

use dcpu16::{Cpu, FlatMemory, MemoryBus, Register};

/// Helper function to create a CPU with zeroed flat memory.
fn setup_cpu() -> Cpu<FlatMemory> {
    Cpu::new(FlatMemory::new())
}

#[test]
fn test_sub_basic() {
    let mut cpu = setup_cpu();

    // SUB A, B
    cpu.load_program(0x0000, &[0x0403]);
    cpu.set_register(Register::A, 0x0030);
    cpu.set_register(Register::B, 0x0020);

    cpu.step().unwrap();

    assert_eq!(cpu.register(Register::A), 0x0010);
    assert_eq!(cpu.o(), 0x0000);
}

#[test]
fn test_sub_borrow_sets_o_to_ffff() {
    let mut cpu = setup_cpu();

    // SUB A, 0x02 with A = 0x0001
    cpu.load_program(0x0000, &[0x8803]);
    cpu.set_register(Register::A, 0x0001);

    cpu.step().unwrap();

    assert_eq!(cpu.register(Register::A), 0xFFFF); // wrapped
    assert_eq!(cpu.o(), 0xFFFF);
}

#[test]
fn test_sub_to_zero_clears_o() {
    let mut cpu = setup_cpu();

    // SUB A, 0x05 with A = 0x0005 and a stale O
    cpu.load_program(0x0000, &[0x9403]);
    cpu.set_register(Register::A, 0x0005);
    cpu.set_register(Register::O, 0xFFFF);

    cpu.step().unwrap();

    assert_eq!(cpu.register(Register::A), 0x0000);
    assert_eq!(cpu.o(), 0x0000); // equal operands do not borrow
}

#[test]
fn test_sub_memory_operand() {
    let mut cpu = setup_cpu();

    // SUB A, [0x1000]
    cpu.load_program(0x0000, &[0x7803, 0x1000]);
    cpu.set_register(Register::A, 0x0030);
    cpu.memory_mut().write(0x1000, 0x0020);

    let consumed = cpu.step().unwrap();

    assert_eq!(consumed, vec![0x7803, 0x1000]);
    assert_eq!(cpu.register(Register::A), 0x0010);
}
