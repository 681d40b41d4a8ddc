//! # Lifter / Call Emitter
//!
//! Turns a decoded instruction into a [`SemanticCall`]. The lifter is
//! total and deterministic over valid decodes: invalid opcodes never
//! reach it (the classifier declines them), so it cannot fail, and
//! lifting the same decode twice yields structurally identical output.

use amx_spec::{DecodedInstruction, Operand};

use crate::call::{CallArg, CallConvention, SemanticCall, VISIBLE_MEMORY};

/// Lift a decoded instruction into a semantic call description
///
/// Register operands become one unsigned 64-bit argument; the zero
/// register becomes a literal-zero argument instead of a register
/// read. Immediate operands (op 17) produce no arguments at all, the
/// immediate being folded into the chosen name.
pub fn lift(instr: &DecodedInstruction) -> SemanticCall {
    let args = match instr.operand {
        Operand::Register(reg) if reg.is_zero() => vec![CallArg::literal_zero_u64()],
        Operand::Register(reg) => vec![CallArg::register_u64(reg)],
        Operand::Immediate(_) => Vec::new(),
    };

    SemanticCall {
        name: call_name(instr),
        convention: CallConvention::FixedArgs,
        args,
        returns: None,
        visible_memory: VISIBLE_MEMORY,
        spoiled_memory: VISIBLE_MEMORY,
    }
}

/// Intrinsic name for a decoded instruction
///
/// Register-operand instructions use the base intrinsic name. For the
/// enable/disable opcode the immediate selects the name: 0 begins an
/// AMX region, 1 ends one, and any other value `n` names a
/// parameterized `__amx_op17_n` variant whose coprocessor semantics
/// remain unresolved. Pure string formatting, no symbol creation.
pub fn call_name(instr: &DecodedInstruction) -> String {
    match instr.operand {
        Operand::Immediate(0) => "__amx_begin".to_string(),
        Operand::Immediate(1) => "__amx_end".to_string(),
        Operand::Immediate(n) => format!("{}_{}", instr.opcode.intrinsic(), n),
        Operand::Register(_) => instr.opcode.intrinsic().to_string(),
    }
}
