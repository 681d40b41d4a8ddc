//! Decline signals for the AMX classifier

use thiserror::Error;

/// Why a word was not claimed by the AMX decoder
///
/// Neither variant is a fault. A decline tells the caller to fall
/// through to its generic instruction decoding; partial decodes never
/// occur and no 32-bit input is fatal.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Decline {
    /// Word fails the fixed-pattern match
    #[error("word {0:#010x} does not match the AMX fixed pattern")]
    NotAnInstruction(u32),

    /// Pattern matched but the opcode field is in the reserved range
    /// 23..=31; semantics there are unverified, so no decode is claimed
    #[error("word {word:#010x} carries reserved opcode field {opcode}")]
    ReservedOpcode { word: u32, opcode: u8 },
}

pub type Result<T> = std::result::Result<T, Decline>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decline_display() {
        let err = Decline::NotAnInstruction(0xD503201F);
        assert_eq!(
            err.to_string(),
            "word 0xd503201f does not match the AMX fixed pattern"
        );

        let err = Decline::ReservedOpcode { word: 0x002013FF, opcode: 31 };
        assert_eq!(
            err.to_string(),
            "word 0x002013ff carries reserved opcode field 31"
        );
    }
}
