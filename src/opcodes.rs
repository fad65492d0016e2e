//! # Instruction Word Decoding
//!
//! This module splits a fetched instruction word into its fields and maps
//! the opcode fields onto explicit enumerations.
//!
//! A DCPU-16 instruction word is `bbbbbbaaaaaaoooo`:
//!
//! - bits 0-3: basic opcode
//! - bits 4-9: operand code a
//! - bits 10-15: operand code b
//!
//! A zero opcode field selects the special (non-basic) form, in which the
//! a-field carries the special opcode and the b-field carries the sole
//! operand.

/// Basic (two-operand) DCPU-16 opcodes.
///
/// The encoding-to-mnemonic mapping is static data: `from_code` decodes the
/// 4-bit opcode field and `mnemonic` renders the instruction name for
/// host-side tracing.
///
/// # Examples
///
/// ```
/// use dcpu16::Opcode;
///
/// assert_eq!(Opcode::from_code(0x1), Some(Opcode::Set));
/// assert_eq!(Opcode::Set.mnemonic(), "SET");
/// assert_eq!(Opcode::from_code(0x0), None); // special form, not basic
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    /// 0x1: SET a, b - sets a to b
    Set,
    /// 0x2: ADD a, b - sets a to a+b, O to 1 on carry
    Add,
    /// 0x3: SUB a, b - sets a to a-b, O to 0xFFFF on borrow
    Sub,
    /// 0x4: MUL a, b - sets a to a*b, O to the high word of the product
    Mul,
    /// 0x5: DIV a, b - sets a to a/b, O to the fractional bits; 0 if b is 0
    Div,
    /// 0x6: MOD a, b - sets a to a%b
    Mod,
    /// 0x7: SHL a, b - sets a to a<<b, O to the bits shifted out high
    Shl,
    /// 0x8: SHR a, b - sets a to a>>b, O to the bits shifted out low
    Shr,
    /// 0x9: AND a, b - sets a to a&b
    And,
    /// 0xA: BOR a, b - sets a to a|b
    Bor,
    /// 0xB: XOR a, b - sets a to a^b
    Xor,
    /// 0xC: IFE a, b - performs next instruction only if a==b
    Ife,
    /// 0xD: IFN a, b - performs next instruction only if a!=b
    Ifn,
    /// 0xE: IFG a, b - performs next instruction only if a>b
    Ifg,
    /// 0xF: IFB a, b - performs next instruction only if (a&b)!=0
    Ifb,
}

impl Opcode {
    /// Decodes the 4-bit basic opcode field.
    ///
    /// Returns `None` for 0 (the special form) and for anything outside the
    /// 4-bit range.
    pub fn from_code(code: u16) -> Option<Opcode> {
        match code {
            0x1 => Some(Opcode::Set),
            0x2 => Some(Opcode::Add),
            0x3 => Some(Opcode::Sub),
            0x4 => Some(Opcode::Mul),
            0x5 => Some(Opcode::Div),
            0x6 => Some(Opcode::Mod),
            0x7 => Some(Opcode::Shl),
            0x8 => Some(Opcode::Shr),
            0x9 => Some(Opcode::And),
            0xA => Some(Opcode::Bor),
            0xB => Some(Opcode::Xor),
            0xC => Some(Opcode::Ife),
            0xD => Some(Opcode::Ifn),
            0xE => Some(Opcode::Ifg),
            0xF => Some(Opcode::Ifb),
            _ => None,
        }
    }

    /// Returns the instruction mnemonic.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Set => "SET",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mul => "MUL",
            Opcode::Div => "DIV",
            Opcode::Mod => "MOD",
            Opcode::Shl => "SHL",
            Opcode::Shr => "SHR",
            Opcode::And => "AND",
            Opcode::Bor => "BOR",
            Opcode::Xor => "XOR",
            Opcode::Ife => "IFE",
            Opcode::Ifn => "IFN",
            Opcode::Ifg => "IFG",
            Opcode::Ifb => "IFB",
        }
    }
}

/// Special (single-operand) DCPU-16 opcodes, selected by a zero basic
/// opcode field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialOpcode {
    /// 0x01: JSR a - pushes the address of the next instruction, then sets
    /// PC to a
    Jsr,
}

impl SpecialOpcode {
    /// Decodes the 6-bit special opcode field.
    pub fn from_code(code: u16) -> Option<SpecialOpcode> {
        match code {
            0x01 => Some(SpecialOpcode::Jsr),
            _ => None,
        }
    }

    /// Returns the instruction mnemonic.
    pub fn mnemonic(self) -> &'static str {
        match self {
            SpecialOpcode::Jsr => "JSR",
        }
    }
}

/// Splits an instruction word into (opcode, operand a, operand b) fields.
///
/// The opcode field is the low 4 bits, operand a the next 6, operand b the
/// top 6. An opcode field of 0 means the word is in the special form and
/// the returned "a" field is the special opcode instead of an operand.
pub(crate) fn split_word(word: u16) -> (u16, u16, u16) {
    (word & 0xF, (word >> 4) & 0x3F, (word >> 10) & 0x3F)
}
