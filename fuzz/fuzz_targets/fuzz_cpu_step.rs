//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary register files and memory contents, then
//! executes a handful of instructions to find edge cases and crashes.

#![no_main]

use arbitrary::Arbitrary;
use dcpu16::{Cpu, FlatMemory, Register};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    /// General-purpose registers A through J
    general: [u16; 8],
    /// Program counter
    pc: u16,
    /// Stack pointer
    sp: u16,
    /// Overflow register
    o: u16,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    /// Words placed at the PC location (instruction stream)
    instruction_words: [u16; 16],
    /// Words placed around the SP location (stack contents)
    stack_words: [u16; 16],
}

fuzz_target!(|input: FuzzInput| {
    let mut cpu = Cpu::new(FlatMemory::new());

    // Set CPU state from fuzz input
    let general = [
        Register::A,
        Register::B,
        Register::C,
        Register::X,
        Register::Y,
        Register::Z,
        Register::I,
        Register::J,
    ];
    for (register, &value) in general.iter().zip(&input.cpu_state.general) {
        cpu.set_register(*register, value);
    }
    cpu.set_register(Register::PC, input.cpu_state.pc);
    cpu.set_register(Register::SP, input.cpu_state.sp);
    cpu.set_register(Register::O, input.cpu_state.o);

    // Write the instruction stream at PC and some stack contents below SP
    cpu.load_program(input.cpu_state.pc, &input.instruction_words);
    cpu.load_program(
        input.cpu_state.sp.wrapping_sub(8),
        &input.stack_words,
    );

    // Execute a few instructions. Errors (invalid special opcodes) are
    // fine - just no panics.
    for _ in 0..8 {
        let previous_pc = cpu.pc();
        match cpu.step() {
            Ok(consumed) => {
                // Every cycle consumes at least the instruction word and at
                // most the instruction word plus two operand words.
                assert!(!consumed.is_empty() && consumed.len() <= 3);
                assert_eq!(cpu.last_consumed(), consumed.as_slice());
            }
            Err(_) => {
                // A fault still advances PC past the bad word.
                assert_eq!(cpu.pc(), previous_pc.wrapping_add(1));
                break;
            }
        }
    }
});
