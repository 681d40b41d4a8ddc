//! # Operand Resolution
//!
//! The 5-bit operand field means different things per opcode:
//!
//! - Op 17 (enable/disable): a raw immediate. Only 0 (set) and 1 (clr)
//!   have a known coprocessor effect, but all 32 values decode; the
//!   others are carried through as unexplained immediates.
//! - Every other opcode: an arm64 64-bit register index, where 31 is
//!   the zero register and contributes a constant zero rather than a
//!   live register read.

use crate::Opcode;
use serde::{Deserialize, Serialize};

/// Number of encodable operand register indices (x0-x30 plus xzr)
pub const NUM_OPERAND_REGISTERS: usize = 32;

/// Index of the zero register
pub const ZERO_REGISTER: u8 = 31;

/// arm64 general-purpose register index carried in the operand field
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Xreg(u8);

impl Xreg {
    /// The zero register (index 31); reads as constant zero
    pub const ZR: Xreg = Xreg(ZERO_REGISTER);

    /// Build from a register index, rejecting anything above 31
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < NUM_OPERAND_REGISTERS as u8 {
            Some(Xreg(index))
        } else {
            None
        }
    }

    /// The register index (0..=31)
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Check whether this is the zero register
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == ZERO_REGISTER
    }
}

impl std::fmt::Display for Xreg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            write!(f, "xzr")
        } else {
            write!(f, "x{}", self.0)
        }
    }
}

/// Resolved operand of a decoded AMX instruction
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operand {
    /// 64-bit register holding the operation's packed argument bitfield
    Register(Xreg),
    /// Raw 5-bit immediate (enable/disable opcode only)
    Immediate(u8),
}

impl Operand {
    /// Resolve the raw 5-bit operand field for the given opcode
    ///
    /// Total over all 32 field values for every opcode; resolution can
    /// classify any input, it just cannot explain op-17 immediates
    /// other than 0 and 1.
    pub fn resolve(opcode: Opcode, raw: u8) -> Operand {
        let raw = raw & 0x1F;
        if opcode.uses_immediate() {
            Operand::Immediate(raw)
        } else {
            // raw is 5 bits, always a valid index
            Operand::Register(Xreg(raw))
        }
    }

    /// Check whether this operand is the zero register
    #[inline]
    pub fn is_zero_register(&self) -> bool {
        matches!(self, Operand::Register(reg) if reg.is_zero())
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Register(reg) => write!(f, "{}", reg),
            Operand::Immediate(value) => write!(f, "#{}", value),
        }
    }
}
