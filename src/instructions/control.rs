//! # Control Flow Instructions
//!
//! This module implements the special-form control flow operation:
//! - JSR: Jump to Subroutine
//!
//! JSR is the only defined special opcode. It:
//! 1. Decrements SP
//! 2. Stores the return address (the address of the next instruction) at
//!    the new SP
//! 3. Sets PC to the operand value
//!
//! A subroutine returns with `SET PC, POP`.

use crate::operands::Operand;
use crate::registers::Register;
use crate::{Cpu, MemoryBus};

/// Executes the JSR instruction.
///
/// By the time this runs, operand resolution has advanced PC past the JSR
/// word and the operand's extra word (if any), so the current PC *is* the
/// return address: the address of the next instruction, not the word
/// stored there.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut Cpu<M>, a: Operand) {
    let target = a.get(cpu);
    let return_addr = cpu.registers.get(Register::PC);

    // Push the return address
    let sp = cpu.registers.get(Register::SP).wrapping_sub(1);
    cpu.registers.set(Register::SP, sp);
    cpu.memory.write(sp, return_addr);

    // And jump
    cpu.registers.set(Register::PC, target);
}
