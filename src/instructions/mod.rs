//! # DCPU-16 Instruction Implementations
//!
//! This module contains the implementations of all DCPU-16 instructions,
//! organized by category. Each instruction is implemented as a standalone
//! function that takes a mutable reference to the CPU and the operand
//! locations the resolver bound for it.
//!
//! ## Categories
//!
//! - **alu**: Assignment and arithmetic (SET, ADD, SUB, MUL, DIV, MOD)
//! - **shifts**: Shift operations (SHL, SHR)
//! - **bitwise**: Bitwise logic (AND, BOR, XOR)
//! - **conditionals**: Conditional skips (IFE, IFN, IFG, IFB)
//! - **control**: Control flow (JSR)
//!
//! By the time a routine runs, operand resolution has already consumed any
//! extra instruction words and applied any stack-pointer adjustment. A
//! routine reads its operands, writes at most once through operand a's
//! location, and updates the overflow register where its opcode requires.

pub mod alu;
pub mod bitwise;
pub mod conditionals;
pub mod control;
pub mod shifts;
