//! Tests for the IFG (skip unless greater) instruction.
//!
//! The comparison is unsigned, like all DCPU-16 arithmetic.

use dcpu16::{Cpu, FlatMemory, Register};

/// Helper function to create a CPU with zeroed flat memory.
fn setup_cpu() -> Cpu<FlatMemory> {
    Cpu::new(FlatMemory::new())
}

#[test]
fn test_ifg_greater_performs_next_instruction() {
    let mut cpu = setup_cpu();

    // IFG A, B with A > B
    cpu.load_program(0x0000, &[0x040E]);
    cpu.set_register(Register::A, 0x0010);
    cpu.set_register(Register::B, 0x0005);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x0001);
}

#[test]
fn test_ifg_equal_skips() {
    let mut cpu = setup_cpu();

    // IFG A, B with A == B: "greater" is strict
    cpu.load_program(0x0000, &[0x040E]);
    cpu.set_register(Register::A, 0x0010);
    cpu.set_register(Register::B, 0x0010);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x0002);
}

#[test]
fn test_ifg_less_skips() {
    let mut cpu = setup_cpu();

    // IFG A, B with A < B
    cpu.load_program(0x0000, &[0x040E]);
    cpu.set_register(Register::A, 0x0005);
    cpu.set_register(Register::B, 0x0010);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x0002);
}

#[test]
fn test_ifg_comparison_is_unsigned() {
    let mut cpu = setup_cpu();

    // IFG A, B with A = 0x8000, B = 0x0001: unsigned 0x8000 > 1, so the
    // next instruction is performed (a signed compare would skip).
    cpu.load_program(0x0000, &[0x040E]);
    cpu.set_register(Register::A, 0x8000);
    cpu.set_register(Register::B, 0x0001);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x0001);
}
