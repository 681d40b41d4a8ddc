//! Instruction classifier for the AMX fixed pattern
//!
//! The classifier is pure and position-independent: it consumes a
//! 32-bit word supplied by the caller and never fetches anything
//! itself. The instruction address plays no part in decoding, so any
//! number of workers may decode different addresses concurrently.

use amx_spec::{encoding, DecodedInstruction, Opcode, Operand};

use crate::error::{Decline, Result};

/// Classify one 32-bit word
///
/// Returns a [`DecodedInstruction`] iff the word matches the fixed AMX
/// pattern and its opcode field is in the defined range 0..=22. A
/// [`Decline`] means the word belongs to some other instruction family
/// (or to the reserved AMX region) and the caller should fall through
/// to generic decoding.
pub fn decode(word: u32) -> Result<DecodedInstruction> {
    if !encoding::matches_pattern(word) {
        return Err(Decline::NotAnInstruction(word));
    }

    let raw_opcode = encoding::extract_opcode(word);
    let opcode = Opcode::from_u5(raw_opcode)
        .ok_or(Decline::ReservedOpcode { word, opcode: raw_opcode })?;

    let operand = Operand::resolve(opcode, encoding::extract_operand(word));
    Ok(DecodedInstruction::new(opcode, operand))
}
