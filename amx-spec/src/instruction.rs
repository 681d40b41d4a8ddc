//! Decoded AMX instruction

use crate::{Opcode, Operand};
use serde::{Deserialize, Serialize};

/// One fully decoded AMX instruction
///
/// Produced once per matched word by the classifier and never mutated.
/// The instruction length is fixed: every AMX instruction is a single
/// 32-bit word.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecodedInstruction {
    pub opcode: Opcode,
    pub operand: Operand,
}

impl DecodedInstruction {
    /// Instruction length in bytes, reported for every successful decode
    pub const LENGTH: usize = 4;

    pub const fn new(opcode: Opcode, operand: Operand) -> Self {
        DecodedInstruction { opcode, operand }
    }

    /// Length in bytes (always 4)
    #[inline]
    pub const fn length(&self) -> usize {
        Self::LENGTH
    }
}
