//! # Instruction Encoding Constants and Helpers
//!
//! Every AMX instruction is a single 32-bit word of the form:
//!
//! ```text
//! 0x00201000 | ((opcode & 0x1F) << 5) | (operand & 0x1F)
//! ```
//!
//! Bits 10..=31 are the fixed pattern; a word belongs to the AMX family
//! iff `word & 0xFFFFFC00 == 0x00201000`. The opcode field is valid for
//! values 0..=22; 23..=31 are reserved and must not decode.

/// Mask selecting the fixed pattern bits (bits 10..=31)
pub const PATTERN_MASK: u32 = 0xFFFF_FC00;

/// Fixed pattern identifying the AMX instruction family
pub const PATTERN_BITS: u32 = 0x0020_1000;

/// Opcode field: bits 5-9 (5 bits)
pub const OPCODE_SHIFT: u32 = 5;

/// Opcode field mask (5 bits)
pub const OPCODE_MASK: u32 = 0x1F;

/// Operand field: bits 0-4 (5 bits)
pub const OPERAND_MASK: u32 = 0x1F;

/// Largest defined opcode field value; 23..=31 are reserved
pub const MAX_OPCODE: u8 = 22;

/// Every AMX instruction is one 32-bit word
pub const INSTRUCTION_BYTES: usize = 4;

/// Check whether a word matches the fixed AMX pattern
///
/// A match only means the word is a candidate: the opcode field may
/// still fall in the reserved range.
#[inline]
pub const fn matches_pattern(word: u32) -> bool {
    word & PATTERN_MASK == PATTERN_BITS
}

/// Extract the raw opcode field from an instruction word (bits 5-9)
#[inline]
pub const fn extract_opcode(word: u32) -> u8 {
    ((word >> OPCODE_SHIFT) & OPCODE_MASK) as u8
}

/// Extract the raw operand field from an instruction word (bits 0-4)
#[inline]
pub const fn extract_operand(word: u32) -> u8 {
    (word & OPERAND_MASK) as u8
}
