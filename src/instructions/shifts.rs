//! # Shift Instructions
//!
//! This module implements the shift operations:
//! - SHL: shift left, overflow word = (a << b) >> 16
//! - SHR: shift right, overflow word = ((a << 16) >> b) & 0xFFFF
//!
//! Shift counts are full 16-bit values, so the arithmetic is widened to u64
//! behind an explicit `count >= 32` guard: past 31 every bit of both the
//! result and the overflow word has been shifted away, and the guard keeps
//! the u64 shifts in their defined range.

use crate::operands::Operand;
use crate::registers::Register;
use crate::{Cpu, MemoryBus};

/// Executes the SHL instruction.
///
/// Sets a to (a << b) mod 0x10000 and O to ((a << b) >> 16) mod 0x10000.
pub(crate) fn execute_shl<M: MemoryBus>(cpu: &mut Cpu<M>, a: Operand, b: Operand) {
    let (av, bv) = (a.get(cpu), b.get(cpu));

    let (result, overflow) = if bv >= 32 {
        (0, 0)
    } else {
        let total = (av as u64) << bv;
        (total as u16, (total >> 16) as u16)
    };

    a.set(cpu, result);
    cpu.registers.set(Register::O, overflow);
}

/// Executes the SHR instruction.
///
/// Sets a to a >> b and O to ((a << 16) >> b) mod 0x10000, the bits the
/// shift pushed out the low end.
pub(crate) fn execute_shr<M: MemoryBus>(cpu: &mut Cpu<M>, a: Operand, b: Operand) {
    let (av, bv) = (a.get(cpu), b.get(cpu));

    let (result, overflow) = if bv >= 32 {
        (0, 0)
    } else {
        let wide = (av as u64) << 16;
        (((av as u64) >> bv) as u16, ((wide >> bv) & 0xFFFF) as u16)
    };

    a.set(cpu, result);
    cpu.registers.set(Register::O, overflow);
}
