//! # Register Names and the Register File
//!
//! This module defines the eleven DCPU-16 registers and the per-CPU register
//! file that holds them. Every CPU owns a fresh, independent register file;
//! nothing is shared between processor instances.

/// DCPU-16 register enumeration.
///
/// The eight general-purpose registers come first, in the fixed order the
/// operand encoding uses (codes 0x00-0x07 name A through J), followed by
/// the three special registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    /// General-purpose register A (operand code 0x00)
    A = 0,
    /// General-purpose register B (operand code 0x01)
    B = 1,
    /// General-purpose register C (operand code 0x02)
    C = 2,
    /// General-purpose register X (operand code 0x03)
    X = 3,
    /// General-purpose register Y (operand code 0x04)
    Y = 4,
    /// General-purpose register Z (operand code 0x05)
    Z = 5,
    /// General-purpose register I (operand code 0x06)
    I = 6,
    /// General-purpose register J (operand code 0x07)
    J = 7,
    /// Program counter: address of the next word to fetch
    PC = 8,
    /// Stack pointer: the stack grows downward from 0xFFFF
    SP = 9,
    /// Overflow register: carry/borrow/high bits of the last arithmetic op
    O = 10,
}

/// The eight general-purpose registers in operand-encoding order.
pub(crate) const GENERAL: [Register; 8] = [
    Register::A,
    Register::B,
    Register::C,
    Register::X,
    Register::Y,
    Register::Z,
    Register::I,
    Register::J,
];

impl Register {
    /// Returns the register's assembly name.
    pub fn name(self) -> &'static str {
        match self {
            Register::A => "A",
            Register::B => "B",
            Register::C => "C",
            Register::X => "X",
            Register::Y => "Y",
            Register::Z => "Z",
            Register::I => "I",
            Register::J => "J",
            Register::PC => "PC",
            Register::SP => "SP",
            Register::O => "O",
        }
    }
}

/// The register file for one CPU instance.
///
/// Constructed fresh per processor: PC starts at 0, SP at 0xFFFF (the stack
/// grows downward), and everything else at 0. All values are always in
/// [0, 0xFFFF] because the slots are `u16`; callers are responsible for
/// using wrapping arithmetic when they adjust PC or SP.
///
/// # Examples
///
/// ```
/// use dcpu16::{Register, Registers};
///
/// let regs = Registers::new();
/// assert_eq!(regs.get(Register::PC), 0x0000);
/// assert_eq!(regs.get(Register::SP), 0xFFFF);
/// assert_eq!(regs.get(Register::A), 0x0000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registers {
    slots: [u16; 11],
}

impl Registers {
    /// Creates a register file in the power-on state.
    pub fn new() -> Self {
        let mut slots = [0; 11];
        slots[Register::SP as usize] = 0xFFFF;
        Self { slots }
    }

    /// Returns the value of a register.
    pub fn get(&self, register: Register) -> u16 {
        self.slots[register as usize]
    }

    /// Sets a register to a value.
    pub fn set(&mut self, register: Register, value: u16) {
        self.slots[register as usize] = value;
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}
