//! Instruction rendering for a disassembly front end
//!
//! Produces the mnemonic/operand text a host's printing pipeline would
//! consume: the register index for register operands (31 shown as the
//! zero register) or an immediate byte for the enable/disable opcode.

use amx_spec::DecodedInstruction;

/// Format a decoded instruction as assembly text
pub fn format(instr: &DecodedInstruction) -> String {
    format!("{} {}", instr.opcode.mnemonic(), instr.operand)
}
