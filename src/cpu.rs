//! # CPU State and Execution
//!
//! This module contains the Cpu struct representing the DCPU-16 processor
//! state and the fetch-decode-resolve-execute cycle.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Register file**: A, B, C, X, Y, Z, I, J, PC, SP, O (all 16-bit)
//! - **Memory bus**: any `MemoryBus` implementation, owned by the CPU
//! - **Consumed-word list**: the instruction-stream words the most recent
//!   cycle pulled through the program counter
//!
//! ## Execution Model
//!
//! `step()` executes exactly one instruction and returns the words it
//! consumed. The core never decides when to stop: a host calls `step()`
//! repeatedly and applies its own halting policy (loop detection, fault
//! handling, pacing against a frame clock).

use crate::instructions::{alu, bitwise, conditionals, control, shifts};
use crate::opcodes::{self, Opcode, SpecialOpcode};
use crate::operands::Operand;
use crate::registers::{Register, Registers};
use crate::{ExecutionError, MemoryBus};

/// DCPU-16 CPU state and execution context.
///
/// The Cpu struct contains the register file and owns the memory bus. It is
/// generic over the memory implementation via the `MemoryBus` trait, so a
/// host can substitute a decorated bus that observes writes to mapped
/// regions.
///
/// Instances are fully isolated: two CPUs share no mutable state and can
/// run on separate threads.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use dcpu16::{Cpu, FlatMemory, Register};
///
/// let mut cpu = Cpu::new(FlatMemory::new());
///
/// // Power-on state
/// assert_eq!(cpu.pc(), 0x0000);
/// assert_eq!(cpu.sp(), 0xFFFF);
/// assert_eq!(cpu.register(Register::A), 0x0000);
/// ```
pub struct Cpu<M: MemoryBus> {
    /// Register file, fresh per instance
    pub(crate) registers: Registers,

    /// Memory bus implementation
    pub(crate) memory: M,

    /// Words consumed from the instruction stream by the current cycle
    consumed: Vec<u16>,
}

impl<M: MemoryBus> Cpu<M> {
    /// Creates a new CPU with the given memory bus.
    ///
    /// The CPU is initialized to the DCPU-16 power-on state:
    /// - PC = 0x0000 (execution starts at the bottom of memory)
    /// - SP = 0xFFFF (the stack grows downward)
    /// - All other registers zeroed
    ///
    /// # Examples
    ///
    /// ```
    /// use dcpu16::{Cpu, FlatMemory};
    ///
    /// let cpu = Cpu::new(FlatMemory::new());
    /// assert_eq!(cpu.pc(), 0x0000);
    /// assert_eq!(cpu.sp(), 0xFFFF);
    /// ```
    pub fn new(memory: M) -> Self {
        Self {
            registers: Registers::new(),
            memory,
            consumed: Vec::new(),
        }
    }

    /// Executes one instruction and advances the CPU state.
    ///
    /// Performs the fetch-decode-resolve-execute cycle:
    /// 1. Fetch the word at PC and advance PC (wrapping mod 0x10000)
    /// 2. Split the word into opcode and operand fields
    /// 3. Resolve the operands in encoding order (a first, then b), which
    ///    may consume further instruction words and adjust SP
    /// 4. Dispatch to the opcode routine, which writes its result through
    ///    operand a's location and updates the overflow register as the
    ///    opcode requires
    ///
    /// Returns the list of words consumed from the instruction stream this
    /// cycle (the instruction word plus zero, one, or two operand words),
    /// which a host can feed to a disassembler or trace log.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::InvalidOpcode` when the word selects the
    /// special form with an unknown special opcode. PC has already advanced
    /// past the word; no operand is resolved and no state beyond PC
    /// changes. A host should normally treat this as a halting condition.
    ///
    /// # Examples
    ///
    /// ```
    /// use dcpu16::{Cpu, FlatMemory, Register};
    ///
    /// let mut cpu = Cpu::new(FlatMemory::new());
    /// cpu.load_program(0x0000, &[0x7C01, 0x0030]); // SET A, 0x30
    ///
    /// let consumed = cpu.step().unwrap();
    /// assert_eq!(consumed, vec![0x7C01, 0x0030]);
    /// assert_eq!(cpu.register(Register::A), 0x0030);
    /// ```
    pub fn step(&mut self) -> Result<Vec<u16>, ExecutionError> {
        self.consumed.clear();

        let word = self.fetch_next();
        let (code, a_field, b_field) = opcodes::split_word(word);

        if code == 0 {
            // Special form: the a-field is the opcode, the b-field the sole
            // operand.
            let special = SpecialOpcode::from_code(a_field)
                .ok_or(ExecutionError::InvalidOpcode(word))?;
            let a = Operand::resolve(b_field, self);

            match special {
                SpecialOpcode::Jsr => control::execute_jsr(self, a),
            }
        } else {
            // Every nonzero 4-bit code maps to a basic opcode.
            let opcode =
                Opcode::from_code(code).ok_or(ExecutionError::InvalidOpcode(word))?;
            let a = Operand::resolve(a_field, self);
            let b = Operand::resolve(b_field, self);

            match opcode {
                Opcode::Set => alu::execute_set(self, a, b),
                Opcode::Add => alu::execute_add(self, a, b),
                Opcode::Sub => alu::execute_sub(self, a, b),
                Opcode::Mul => alu::execute_mul(self, a, b),
                Opcode::Div => alu::execute_div(self, a, b),
                Opcode::Mod => alu::execute_mod(self, a, b),
                Opcode::Shl => shifts::execute_shl(self, a, b),
                Opcode::Shr => shifts::execute_shr(self, a, b),
                Opcode::And => bitwise::execute_and(self, a, b),
                Opcode::Bor => bitwise::execute_bor(self, a, b),
                Opcode::Xor => bitwise::execute_xor(self, a, b),
                Opcode::Ife => conditionals::execute_ife(self, a, b),
                Opcode::Ifn => conditionals::execute_ifn(self, a, b),
                Opcode::Ifg => conditionals::execute_ifg(self, a, b),
                Opcode::Ifb => conditionals::execute_ifb(self, a, b),
            }
        }

        Ok(self.consumed.clone())
    }

    /// Fetches the word at PC, advances PC (wrapping mod 0x10000), and
    /// records the word in the consumed list.
    ///
    /// This is the only way any component consumes instruction words;
    /// operand resolution fetches extra words through it too, which is why
    /// resolving an operand can move the program counter.
    pub(crate) fn fetch_next(&mut self) -> u16 {
        let pc = self.registers.get(Register::PC);
        let word = self.memory.read(pc);
        self.registers.set(Register::PC, pc.wrapping_add(1));
        self.consumed.push(word);
        word
    }

    /// Writes a contiguous program image through the memory bus.
    ///
    /// Addresses wrap mod 0x10000, like all address arithmetic. Hosts
    /// normally load at origin 0, where PC starts.
    ///
    /// # Examples
    ///
    /// ```
    /// use dcpu16::{Cpu, FlatMemory, MemoryBus};
    ///
    /// let mut cpu = Cpu::new(FlatMemory::new());
    /// cpu.load_program(0x0000, &[0x7C01, 0x0030]);
    /// assert_eq!(cpu.memory().read(0x0001), 0x0030);
    /// ```
    pub fn load_program(&mut self, origin: u16, words: &[u16]) {
        for (offset, &word) in words.iter().enumerate() {
            self.memory.write(origin.wrapping_add(offset as u16), word);
        }
    }

    // ========== Introspection ==========

    /// Returns the value of a register.
    pub fn register(&self, register: Register) -> u16 {
        self.registers.get(register)
    }

    /// Sets a register to a value.
    pub fn set_register(&mut self, register: Register, value: u16) {
        self.registers.set(register, value);
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.registers.get(Register::PC)
    }

    /// Returns the stack pointer value.
    ///
    /// Note: the stack grows downward from 0xFFFF; PUSH decrements SP
    /// before the write and POP increments it after the read.
    pub fn sp(&self) -> u16 {
        self.registers.get(Register::SP)
    }

    /// Returns the overflow register value.
    pub fn o(&self) -> u16 {
        self.registers.get(Register::O)
    }

    /// Returns the full register file.
    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    /// Returns a reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Returns the words the most recent `step()` consumed from the
    /// instruction stream.
    ///
    /// After a failed `step()` this holds the words consumed up to the
    /// fault (the undecodable instruction word itself, in particular).
    pub fn last_consumed(&self) -> &[u16] {
        &self.consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    #[test]
    fn test_cpu_initialization() {
        let cpu = Cpu::new(FlatMemory::new());

        assert_eq!(cpu.pc(), 0x0000);
        assert_eq!(cpu.sp(), 0xFFFF);
        assert_eq!(cpu.o(), 0x0000);
        assert_eq!(cpu.register(Register::A), 0x0000);
        assert_eq!(cpu.register(Register::J), 0x0000);
        assert!(cpu.last_consumed().is_empty());
    }

    #[test]
    fn test_fetch_wraps_at_top_of_memory() {
        let mut cpu = Cpu::new(FlatMemory::new());
        cpu.memory_mut().write(0xFFFF, 0x1234);
        cpu.set_register(Register::PC, 0xFFFF);

        assert_eq!(cpu.fetch_next(), 0x1234);
        assert_eq!(cpu.pc(), 0x0000);
    }

    #[test]
    fn test_step_invalid_special_opcode() {
        let mut cpu = Cpu::new(FlatMemory::new());
        // Opcode field 0, special field 0x3F: undefined.
        cpu.load_program(0x0000, &[0x03F0]);

        assert_eq!(cpu.step(), Err(ExecutionError::InvalidOpcode(0x03F0)));
        // PC advanced past the bad word, nothing else moved.
        assert_eq!(cpu.pc(), 0x0001);
        assert_eq!(cpu.sp(), 0xFFFF);
        assert_eq!(cpu.last_consumed(), &[0x03F0]);
    }
}
