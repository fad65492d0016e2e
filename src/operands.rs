//! # Operand Resolution
//!
//! This module maps the 6-bit operand codes of the DCPU-16 encoding onto
//! resolved operand locations. Resolution happens once per operand per
//! instruction and performs any side effects the encoding mandates:
//! consuming an extra instruction-stream word, or adjusting SP for the
//! stack operands.
//!
//! ## Operand Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0x00-0x07 | register (A, B, C, X, Y, Z, I, J in that order) |
//! | 0x08-0x0F | \[register\] |
//! | 0x10-0x17 | \[register + next word\] |
//! | 0x18 | POP / \[SP++\] |
//! | 0x19 | PEEK / \[SP\] |
//! | 0x1A | PUSH / \[--SP\] |
//! | 0x1B | SP |
//! | 0x1C | PC |
//! | 0x1D | O |
//! | 0x1E | \[next word\] |
//! | 0x1F | next word (literal) |
//! | 0x20-0x3F | literal value 0x00-0x1F |

use crate::cpu::Cpu;
use crate::memory::MemoryBus;
use crate::registers::{Register, GENERAL};

/// A resolved operand location.
///
/// Each variant carries the register name or the already-computed memory
/// address it is bound to, so `get` and `set` are pure lookups with no
/// further side effects. A location lives for a single instruction: it is
/// constructed by the resolver, used by one opcode routine, and discarded.
///
/// The stack variants keep their own tags even though they are all memory
/// cells by the time they are resolved: the SP adjustment for POP and PUSH
/// has already happened during resolution, and the carried address is the
/// cell the instruction operates on (the old SP for POP, the new SP for
/// PUSH).
///
/// Writes through `Immediate` are silently discarded: "if any instruction
/// tries to assign a literal value, the assignment fails silently. Other
/// than that, the instruction behaves as normal."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// 0x00-0x07, 0x1B-0x1D: the value of a register
    RegisterValue(Register),
    /// 0x08-0x0F: the memory cell a register points at
    RegisterPointer(u16),
    /// 0x10-0x17: the memory cell at register + next word
    RegisterPlusWordPointer(u16),
    /// 0x18: the cell at the pre-increment SP
    StackPop(u16),
    /// 0x19: the cell at SP
    StackPeek(u16),
    /// 0x1A: the cell at the post-decrement SP
    StackPush(u16),
    /// 0x1E: the memory cell the next word points at
    MemoryPointer(u16),
    /// 0x1F, 0x20-0x3F: an immediate value; writes are discarded
    Immediate(u16),
}

impl Operand {
    /// Resolves a 6-bit operand code against live processor state.
    ///
    /// This is the only place operand side effects happen:
    ///
    /// - codes 0x10-0x17, 0x1E, and 0x1F consume one word from the
    ///   instruction stream through the CPU's fetch-and-advance primitive
    ///   (so PC moves, and the word lands in the consumed-word list)
    /// - 0x18 (POP) captures the cell at SP, then increments SP
    /// - 0x1A (PUSH) decrements SP, then captures the cell at the new SP
    ///
    /// The SP adjustments are part of resolution, not opcode execution; an
    /// opcode routine sees only the final bound location.
    ///
    /// Codes are 6 bits by construction (the decoder masks them), so every
    /// value in [0x00, 0x3F] resolves; there is no failure path.
    pub(crate) fn resolve<M: MemoryBus>(code: u16, cpu: &mut Cpu<M>) -> Operand {
        match code {
            0x00..=0x07 => Operand::RegisterValue(GENERAL[code as usize]),
            0x08..=0x0F => {
                let register = GENERAL[(code - 0x08) as usize];
                Operand::RegisterPointer(cpu.registers.get(register))
            }
            0x10..=0x17 => {
                let register = GENERAL[(code - 0x10) as usize];
                let offset = cpu.fetch_next();
                let addr = cpu.registers.get(register).wrapping_add(offset);
                Operand::RegisterPlusWordPointer(addr)
            }
            0x18 => {
                let sp = cpu.registers.get(Register::SP);
                cpu.registers.set(Register::SP, sp.wrapping_add(1));
                Operand::StackPop(sp)
            }
            0x19 => Operand::StackPeek(cpu.registers.get(Register::SP)),
            0x1A => {
                let sp = cpu.registers.get(Register::SP).wrapping_sub(1);
                cpu.registers.set(Register::SP, sp);
                Operand::StackPush(sp)
            }
            0x1B => Operand::RegisterValue(Register::SP),
            0x1C => Operand::RegisterValue(Register::PC),
            0x1D => Operand::RegisterValue(Register::O),
            0x1E => {
                let addr = cpu.fetch_next();
                Operand::MemoryPointer(addr)
            }
            0x1F => {
                let value = cpu.fetch_next();
                Operand::Immediate(value)
            }
            0x20..=0x3F => Operand::Immediate(code - 0x20),
            // The decoder masks operand fields to 6 bits.
            _ => unreachable!("operand code {:#x} out of 6-bit range", code),
        }
    }

    /// Reads the value at this location. Non-destructive and idempotent:
    /// all side effects happened at resolution time.
    pub fn get<M: MemoryBus>(self, cpu: &Cpu<M>) -> u16 {
        match self {
            Operand::RegisterValue(register) => cpu.registers.get(register),
            Operand::RegisterPointer(addr)
            | Operand::RegisterPlusWordPointer(addr)
            | Operand::StackPop(addr)
            | Operand::StackPeek(addr)
            | Operand::StackPush(addr)
            | Operand::MemoryPointer(addr) => cpu.memory.read(addr),
            Operand::Immediate(value) => value,
        }
    }

    /// Writes a value through this location.
    ///
    /// Writes to an `Immediate` location are a no-op by contract, never an
    /// error: assembled programs may legally target a literal operand.
    pub fn set<M: MemoryBus>(self, cpu: &mut Cpu<M>, value: u16) {
        match self {
            Operand::RegisterValue(register) => cpu.registers.set(register, value),
            Operand::RegisterPointer(addr)
            | Operand::RegisterPlusWordPointer(addr)
            | Operand::StackPop(addr)
            | Operand::StackPeek(addr)
            | Operand::StackPush(addr)
            | Operand::MemoryPointer(addr) => cpu.memory.write(addr, value),
            Operand::Immediate(_) => {}
        }
    }
}
