//! # AMX Opcode Definitions
//!
//! This module defines the 23 reverse-engineered AMX operations and the
//! opcode → mnemonic / intrinsic-name tables. Opcodes are 5 bits;
//! values 0..=22 are defined and 23..=31 are reserved.
//!
//! ## Opcode Map
//!
//! - 0-5: row loads/stores for x, y, z
//! - 6-7: interleaved z load/store (half-row pairs)
//! - 8-9: row/column extract and move
//! - 10-16: multiply-accumulate family
//! - 17: enable/disable (immediate operand)
//! - 18-21: vector/matrix operations (layouts unresolved)
//! - 22: lookup-table generation
//!
//! Op 17's mnemonic is kept as the neutral `AMX17`: whether it begins or
//! ends an AMX region depends on the operand and is resolved at lift
//! time, not here.

use serde::{Deserialize, Serialize};

/// Total number of defined opcodes
pub const NUM_OPCODES: usize = 23;

/// AMX operation (opcode field 0..=22)
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    /// Load rows into x
    Ldx = 0,
    /// Load rows into y
    Ldy = 1,
    /// Store rows from x
    Stx = 2,
    /// Store rows from y
    Sty = 3,
    /// Load rows into z
    Ldz = 4,
    /// Store rows from z
    Stz = 5,
    /// Load z, interleaved half-row order
    Ldzi = 6,
    /// Store z, interleaved half-row order
    Stzi = 7,
    /// Extract a row from z (or move from y) into x
    Extrx = 8,
    /// Extract a column from z (or move from x) into y
    Extry = 9,
    /// Multiply-accumulate, 64-bit floats
    Fma64 = 10,
    /// Multiply-subtract, 64-bit floats
    Fms64 = 11,
    /// Multiply-accumulate, 32-bit floats
    Fma32 = 12,
    /// Multiply-subtract, 32-bit floats
    Fms32 = 13,
    /// Multiply-accumulate, 16-bit signed integers
    Mac16 = 14,
    /// Multiply-accumulate, 16-bit floats
    Fma16 = 15,
    /// Multiply-subtract, 16-bit floats
    Fms16 = 16,
    /// Enable/disable the coprocessor (set when operand 0, clr when 1)
    Op17 = 17,
    /// Vector integer operation; bitfields unresolved
    Vecint = 18,
    /// Vector float operation; bitfields unresolved
    Vecfp = 19,
    /// Matrix integer operation; bitfields unresolved
    Matint = 20,
    /// Matrix float operation; bitfields unresolved
    Matfp = 21,
    /// Generate a lookup table from x row 0
    Genlut = 22,
}

impl Opcode {
    /// Try to convert from a raw 5-bit opcode field
    ///
    /// Returns `None` for the reserved range 23..=31 (and anything
    /// wider); reserved encodings must never be assigned semantics.
    pub fn from_u5(value: u8) -> Option<Self> {
        match value {
            0 => Some(Opcode::Ldx),
            1 => Some(Opcode::Ldy),
            2 => Some(Opcode::Stx),
            3 => Some(Opcode::Sty),
            4 => Some(Opcode::Ldz),
            5 => Some(Opcode::Stz),
            6 => Some(Opcode::Ldzi),
            7 => Some(Opcode::Stzi),
            8 => Some(Opcode::Extrx),
            9 => Some(Opcode::Extry),
            10 => Some(Opcode::Fma64),
            11 => Some(Opcode::Fms64),
            12 => Some(Opcode::Fma32),
            13 => Some(Opcode::Fms32),
            14 => Some(Opcode::Mac16),
            15 => Some(Opcode::Fma16),
            16 => Some(Opcode::Fms16),
            17 => Some(Opcode::Op17),
            18 => Some(Opcode::Vecint),
            19 => Some(Opcode::Vecfp),
            20 => Some(Opcode::Matint),
            21 => Some(Opcode::Matfp),
            22 => Some(Opcode::Genlut),
            _ => None,
        }
    }

    /// Convert to the raw 5-bit opcode field value
    #[inline]
    pub const fn to_u5(self) -> u8 {
        self as u8
    }

    /// Display mnemonic for a disassembly front end
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Ldx => "AMXLDX",
            Opcode::Ldy => "AMXLDY",
            Opcode::Stx => "AMXSTX",
            Opcode::Sty => "AMXSTY",
            Opcode::Ldz => "AMXLDZ",
            Opcode::Stz => "AMXSTZ",
            Opcode::Ldzi => "AMXLDZI",
            Opcode::Stzi => "AMXSTZI",
            Opcode::Extrx => "AMXEXTRX",
            Opcode::Extry => "AMXEXTRY",
            Opcode::Fma64 => "AMXFMA64",
            Opcode::Fms64 => "AMXFMS64",
            Opcode::Fma32 => "AMXFMA32",
            Opcode::Fms32 => "AMXFMS32",
            Opcode::Mac16 => "AMXMAC16",
            Opcode::Fma16 => "AMXFMA16",
            Opcode::Fms16 => "AMXFMS16",
            Opcode::Op17 => "AMX17",
            Opcode::Vecint => "AMXVECINT",
            Opcode::Vecfp => "AMXVECFP",
            Opcode::Matint => "AMXMATINT",
            Opcode::Matfp => "AMXMATFP",
            Opcode::Genlut => "AMXGENLUT",
        }
    }

    /// Base intrinsic name for the lifted call
    pub const fn intrinsic(self) -> &'static str {
        match self {
            Opcode::Ldx => "__amx_ldx",
            Opcode::Ldy => "__amx_ldy",
            Opcode::Stx => "__amx_stx",
            Opcode::Sty => "__amx_sty",
            Opcode::Ldz => "__amx_ldz",
            Opcode::Stz => "__amx_stz",
            Opcode::Ldzi => "__amx_ldzi",
            Opcode::Stzi => "__amx_stzi",
            Opcode::Extrx => "__amx_extrx",
            Opcode::Extry => "__amx_extry",
            Opcode::Fma64 => "__amx_fma64",
            Opcode::Fms64 => "__amx_fms64",
            Opcode::Fma32 => "__amx_fma32",
            Opcode::Fms32 => "__amx_fms32",
            Opcode::Mac16 => "__amx_mac16",
            Opcode::Fma16 => "__amx_fma16",
            Opcode::Fms16 => "__amx_fms16",
            Opcode::Op17 => "__amx_op17",
            Opcode::Vecint => "__amx_vecint",
            Opcode::Vecfp => "__amx_vecfp",
            Opcode::Matint => "__amx_matint",
            Opcode::Matfp => "__amx_matfp",
            Opcode::Genlut => "__amx_genlut",
        }
    }

    /// Check if this opcode touches ordinary memory (ops 0-7)
    #[inline]
    pub const fn is_memory(self) -> bool {
        (self as u8) <= 7
    }

    /// Check if this is an interleaved z load/store (ops 6-7)
    #[inline]
    pub const fn is_interleaved(self) -> bool {
        matches!(self, Opcode::Ldzi | Opcode::Stzi)
    }

    /// Check if this is a row/column extract (ops 8-9)
    #[inline]
    pub const fn is_extract(self) -> bool {
        matches!(self, Opcode::Extrx | Opcode::Extry)
    }

    /// Check if this belongs to the multiply-accumulate family (ops 10-16)
    #[inline]
    pub const fn is_mac(self) -> bool {
        let v = self as u8;
        v >= 10 && v <= 16
    }

    /// Check if the operand field is an immediate rather than a
    /// register index (op 17 only)
    #[inline]
    pub const fn uses_immediate(self) -> bool {
        matches!(self, Opcode::Op17)
    }

    /// All defined opcodes in encoding order
    pub const ALL: [Opcode; NUM_OPCODES] = [
        Opcode::Ldx,
        Opcode::Ldy,
        Opcode::Stx,
        Opcode::Sty,
        Opcode::Ldz,
        Opcode::Stz,
        Opcode::Ldzi,
        Opcode::Stzi,
        Opcode::Extrx,
        Opcode::Extry,
        Opcode::Fma64,
        Opcode::Fms64,
        Opcode::Fma32,
        Opcode::Fms32,
        Opcode::Mac16,
        Opcode::Fma16,
        Opcode::Fms16,
        Opcode::Op17,
        Opcode::Vecint,
        Opcode::Vecfp,
        Opcode::Matint,
        Opcode::Matfp,
        Opcode::Genlut,
    ];

    /// Iterate over all defined opcodes in encoding order
    pub fn all() -> impl Iterator<Item = Opcode> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_opcode_values() {
        assert_eq!(Opcode::Ldx.to_u5(), 0);
        assert_eq!(Opcode::Stz.to_u5(), 5);
        assert_eq!(Opcode::Extrx.to_u5(), 8);
        assert_eq!(Opcode::Fma64.to_u5(), 10);
        assert_eq!(Opcode::Mac16.to_u5(), 14);
        assert_eq!(Opcode::Op17.to_u5(), 17);
        assert_eq!(Opcode::Genlut.to_u5(), 22);
    }

    #[test]
    fn test_from_u5_total_over_defined_range() {
        for v in 0..=22u8 {
            let op = Opcode::from_u5(v).unwrap();
            assert_eq!(op.to_u5(), v);
        }
    }

    #[test]
    fn test_from_u5_rejects_reserved() {
        for v in 23..=31u8 {
            assert_eq!(Opcode::from_u5(v), None);
        }
        assert_eq!(Opcode::from_u5(32), None);
        assert_eq!(Opcode::from_u5(0xFF), None);
    }

    #[test]
    fn test_name_tables_injective() {
        let mnemonics: HashSet<_> = Opcode::all().map(|op| op.mnemonic()).collect();
        let intrinsics: HashSet<_> = Opcode::all().map(|op| op.intrinsic()).collect();
        assert_eq!(mnemonics.len(), NUM_OPCODES);
        assert_eq!(intrinsics.len(), NUM_OPCODES);
    }

    #[test]
    fn test_groups() {
        assert!(Opcode::Ldx.is_memory());
        assert!(Opcode::Stzi.is_memory());
        assert!(!Opcode::Extrx.is_memory());

        assert!(Opcode::Ldzi.is_interleaved());
        assert!(!Opcode::Ldz.is_interleaved());

        assert!(Opcode::Extry.is_extract());

        assert!(Opcode::Fma64.is_mac());
        assert!(Opcode::Fms16.is_mac());
        assert!(!Opcode::Op17.is_mac());
        assert!(!Opcode::Genlut.is_mac());
    }

    #[test]
    fn test_only_op17_uses_immediate() {
        for op in Opcode::all() {
            assert_eq!(op.uses_immediate(), op == Opcode::Op17);
        }
    }

    #[test]
    fn test_display_is_mnemonic() {
        assert_eq!(Opcode::Ldx.to_string(), "AMXLDX");
        assert_eq!(Opcode::Op17.to_string(), "AMX17");
        assert_eq!(Opcode::Genlut.to_string(), "AMXGENLUT");
    }
}
