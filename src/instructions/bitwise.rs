//! # Bitwise Logic Instructions
//!
//! This module implements AND, BOR, and XOR. None of them touch the
//! overflow register.

use crate::operands::Operand;
use crate::{Cpu, MemoryBus};

/// Executes the AND instruction: a <- a & b.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut Cpu<M>, a: Operand, b: Operand) {
    let result = a.get(cpu) & b.get(cpu);
    a.set(cpu, result);
}

/// Executes the BOR instruction: a <- a | b.
pub(crate) fn execute_bor<M: MemoryBus>(cpu: &mut Cpu<M>, a: Operand, b: Operand) {
    let result = a.get(cpu) | b.get(cpu);
    a.set(cpu, result);
}

/// Executes the XOR instruction: a <- a ^ b.
pub(crate) fn execute_xor<M: MemoryBus>(cpu: &mut Cpu<M>, a: Operand, b: Operand) {
    let result = a.get(cpu) ^ b.get(cpu);
    a.set(cpu, result);
}
