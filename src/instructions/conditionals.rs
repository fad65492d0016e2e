//! # Conditional Skip Instructions
//!
//! This module implements IFE, IFN, IFG, and IFB. Each performs the next
//! instruction only when its condition holds; on a false condition PC is
//! advanced by exactly one word.
//!
//! The one-word skip is a documented behavior of this emulator, kept
//! deliberately: an instruction that carries operand words is longer than
//! one word, and skipping lands inside it. Assemblers targeting this core
//! place single-word instructions after conditionals. None of these
//! opcodes touch the overflow register.

use crate::operands::Operand;
use crate::registers::Register;
use crate::{Cpu, MemoryBus};

/// Advances PC by one word, skipping (the first word of) the next
/// instruction.
fn skip_next<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let pc = cpu.registers.get(Register::PC);
    cpu.registers.set(Register::PC, pc.wrapping_add(1));
}

/// Executes the IFE instruction: performs the next instruction only if
/// a == b.
pub(crate) fn execute_ife<M: MemoryBus>(cpu: &mut Cpu<M>, a: Operand, b: Operand) {
    if a.get(cpu) != b.get(cpu) {
        skip_next(cpu);
    }
}

/// Executes the IFN instruction: performs the next instruction only if
/// a != b.
pub(crate) fn execute_ifn<M: MemoryBus>(cpu: &mut Cpu<M>, a: Operand, b: Operand) {
    if a.get(cpu) == b.get(cpu) {
        skip_next(cpu);
    }
}

/// Executes the IFG instruction: performs the next instruction only if
/// a > b (unsigned).
pub(crate) fn execute_ifg<M: MemoryBus>(cpu: &mut Cpu<M>, a: Operand, b: Operand) {
    if a.get(cpu) <= b.get(cpu) {
        skip_next(cpu);
    }
}

/// Executes the IFB instruction: performs the next instruction only if
/// (a & b) != 0.
pub(crate) fn execute_ifb<M: MemoryBus>(cpu: &mut Cpu<M>, a: Operand, b: Operand) {
    if a.get(cpu) & b.get(cpu) == 0 {
        skip_next(cpu);
    }
}
