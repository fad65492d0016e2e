//! # Assignment and Arithmetic Instructions
//!
//! This module implements SET and the arithmetic operations:
//! - SET: assignment
//! - ADD, SUB: wrapping add/subtract with carry/borrow in O
//! - MUL: wrapping multiply with the high product word in O
//! - DIV: integer divide with the fractional bits in O; zero divisor
//!   yields 0 for both
//! - MOD: integer remainder; zero divisor yields 0, O untouched
//!
//! All results wrap modulo 0x10000. The wide intermediate values are
//! computed in u32 so the overflow word falls out of the same expression
//! that produces the result.

use crate::operands::Operand;
use crate::registers::Register;
use crate::{Cpu, MemoryBus};

/// Executes the SET instruction: a <- b. O is unchanged.
pub(crate) fn execute_set<M: MemoryBus>(cpu: &mut Cpu<M>, a: Operand, b: Operand) {
    let value = b.get(cpu);
    a.set(cpu, value);
}

/// Executes the ADD instruction.
///
/// Sets a to (a + b) mod 0x10000, and O to 1 if the unsigned sum carried
/// out of 16 bits, 0 otherwise.
pub(crate) fn execute_add<M: MemoryBus>(cpu: &mut Cpu<M>, a: Operand, b: Operand) {
    let sum = a.get(cpu) as u32 + b.get(cpu) as u32;

    a.set(cpu, sum as u16);
    cpu.registers.set(Register::O, (sum > 0xFFFF) as u16);
}

/// Executes the SUB instruction.
///
/// Sets a to (a - b) mod 0x10000, and O to 0xFFFF if the subtraction
/// borrowed (a < b), 0 otherwise.
pub(crate) fn execute_sub<M: MemoryBus>(cpu: &mut Cpu<M>, a: Operand, b: Operand) {
    let (av, bv) = (a.get(cpu), b.get(cpu));

    a.set(cpu, av.wrapping_sub(bv));
    cpu.registers
        .set(Register::O, if av < bv { 0xFFFF } else { 0 });
}

/// Executes the MUL instruction.
///
/// Sets a to (a * b) mod 0x10000, and O to the high 16 bits of the 32-bit
/// product.
pub(crate) fn execute_mul<M: MemoryBus>(cpu: &mut Cpu<M>, a: Operand, b: Operand) {
    let product = a.get(cpu) as u32 * b.get(cpu) as u32;

    a.set(cpu, product as u16);
    cpu.registers.set(Register::O, (product >> 16) as u16);
}

/// Executes the DIV instruction.
///
/// Sets a to a / b (integer division) and O to ((a << 16) / b) mod 0x10000,
/// the bits the truncation discarded. A zero divisor sets both a and O to
/// 0 instead; no fault is raised.
pub(crate) fn execute_div<M: MemoryBus>(cpu: &mut Cpu<M>, a: Operand, b: Operand) {
    let (av, bv) = (a.get(cpu), b.get(cpu));

    if bv == 0 {
        a.set(cpu, 0);
        cpu.registers.set(Register::O, 0);
    } else {
        a.set(cpu, av / bv);
        let overflow = ((av as u32) << 16) / bv as u32;
        cpu.registers.set(Register::O, overflow as u16);
    }
}

/// Executes the MOD instruction.
///
/// Sets a to a % b. A zero divisor sets a to 0 and leaves O untouched,
/// mirroring DIV's zero guard; no fault is raised. O is unchanged in every
/// case.
pub(crate) fn execute_mod<M: MemoryBus>(cpu: &mut Cpu<M>, a: Operand, b: Operand) {
    let (av, bv) = (a.get(cpu), b.get(cpu));

    if bv == 0 {
        a.set(cpu, 0);
    } else {
        a.set(cpu, av % bv);
    }
}
