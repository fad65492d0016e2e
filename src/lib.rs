//! # DCPU-16 CPU Emulator Core
//!
//! A DCPU-16 CPU emulator designed for modularity, clarity, and deterministic
//! single-step execution.
//!
//! This crate provides the foundational architecture for emulating the DCPU-16
//! processor, including CPU state structures, a trait-based memory bus
//! abstraction, and an operand-resolution system that models the ISA's
//! addressing modes as a closed set of resolved locations.
//!
//! ## Quick Start
//!
//! ```rust
//! use dcpu16::{Cpu, FlatMemory, Register};
//!
//! // Create 64K-word flat memory
//! let memory = FlatMemory::new();
//!
//! // Initialize CPU - PC starts at 0, SP at 0xFFFF
//! let mut cpu = Cpu::new(memory);
//!
//! // Load `SET A, 0x30` (literal in a trailing word) at address 0
//! cpu.load_program(0x0000, &[0x7C01, 0x0030]);
//!
//! // Execute one instruction; step() returns the words it consumed
//! let consumed = cpu.step().unwrap();
//! assert_eq!(consumed, vec![0x7C01, 0x0030]);
//! assert_eq!(cpu.register(Register::A), 0x0030);
//! assert_eq!(cpu.pc(), 0x0002);
//! ```
//!
//! ## Architecture
//!
//! The emulator follows a modular architecture adhering to these principles:
//!
//! - **Modularity**: CPU state is separated from memory implementation via the
//!   `MemoryBus` trait, so hosts can decorate memory to observe writes to
//!   mapped regions without the core knowing
//! - **Determinism**: `step()` is a pure function of processor state and
//!   memory contents; no clocks, no I/O
//! - **Host-driven pacing**: the core executes exactly one instruction per
//!   `step()` call and never decides when to stop
//! - **Closed operand model**: every addressing mode resolves to a tagged
//!   `Operand` location with uniform get/set semantics
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the fetch-decode-resolve-execute cycle
//! - `memory` - MemoryBus trait and implementations
//! - `registers` - Register names and the per-CPU register file
//! - `operands` - Operand codes and resolved operand locations
//! - `opcodes` - Instruction word decoding and opcode enumerations

pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod operands;
pub mod registers;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use cpu::Cpu;
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Opcode, SpecialOpcode};
pub use operands::Operand;
pub use registers::{Register, Registers};

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The fetched word does not decode to a known instruction.
    ///
    /// Only the special (non-basic) form can be invalid: the basic opcode
    /// field values 0x1-0xF all map to defined instructions, but a zero
    /// opcode field with an unknown special code has no meaning. Contains
    /// the raw instruction word for debugging purposes. PC has already
    /// advanced past the offending word, so a host that chooses to ignore
    /// the fault will not refetch it.
    InvalidOpcode(u16),
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::InvalidOpcode(word) => {
                write!(f, "Word 0x{:04X} does not decode to a known instruction", word)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
