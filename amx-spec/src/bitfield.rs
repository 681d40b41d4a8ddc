//! # Bitfield Semantic Table
//!
//! For register-operand opcodes, the 64-bit value the operand register
//! would hold at runtime is a packed bitfield of further parameters
//! (addresses, row/column offsets, mode flags). This module records the
//! *layout* of those bitfields per opcode, as recovered by reverse
//! engineering. Layouts are documentation metadata for downstream
//! consumers; nothing here ever evaluates a runtime value.
//!
//! Several regions of the encoding remain unresolved. Those stay
//! explicit: an opcode whose layout is unconfirmed gets an empty or
//! partial field list with `complete == false`, never a plausible
//! guess. Looking up an opcode with no known fields is a documented
//! limitation, not a failure.

use crate::Opcode;
use serde::{Deserialize, Serialize};

/// One named sub-field of a 64-bit operand register value
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct BitField {
    /// Field name, stable across releases
    pub name: &'static str,
    /// Lowest bit of the field
    pub lo: u8,
    /// Width in bits
    pub width: u8,
    /// Reverse-engineered interpretation, for documentation only
    pub meaning: &'static str,
}

impl BitField {
    /// One past the highest bit of the field
    #[inline]
    pub const fn hi(&self) -> u8 {
        self.lo + self.width
    }
}

const fn bf(name: &'static str, lo: u8, width: u8, meaning: &'static str) -> BitField {
    BitField { name, lo, width, meaning }
}

/// Per-opcode bitfield layout
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldLayout {
    /// Known sub-fields, ordered by `lo`; may be empty
    pub fields: &'static [BitField],
    /// False where the reverse-engineering notes leave bits unresolved
    pub complete: bool,
}

impl FieldLayout {
    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&'static BitField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// True when no sub-field of the operand value is known
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Row loads/stores (ops 0-5)
const LOAD_STORE_FIELDS: &[BitField] = &[
    bf("address", 0, 56, "data address of the transfer"),
    bf("row_offset", 56, 5, "register row index, in units of 0x40 bytes"),
    bf("size_flag", 62, 1, "0 = 0x40-byte transfer, 1 = 0x80-byte aligned transfer"),
];

/// Interleaved z loads/stores (ops 6-7): bit 62 is ignored and the
/// transfer is fixed at 0x40 bytes. Row 2k moves the low halves of z
/// rows 2k and 2k+1; row 2k+1 moves the high halves.
const INTERLEAVED_FIELDS: &[BitField] = &[
    bf("address", 0, 56, "data address of the transfer"),
    bf("row_offset", 56, 5, "register row index, in units of 0x40 bytes"),
];

/// Row extract / move to x (op 8)
const EXTRACT_ROW_FIELDS: &[BitField] = &[
    bf("x_offset_bytes", 10, 9, "destination byte offset in x; rounded down to a row when moving from y"),
    bf("z_row", 20, 6, "source row in z"),
    bf("move_from_y", 27, 1, "1 = source is y rather than z"),
];

/// Column extract / move to y (op 9). The bits selecting the
/// destination register and the column ordering are only partially
/// reverse engineered and are deliberately absent here.
const EXTRACT_COL_FIELDS: &[BitField] = &[
    bf("y_offset_bytes", 0, 9, "destination byte offset in y"),
    bf("z_col", 20, 6, "source column in z"),
    bf("move_from_x", 27, 1, "1 = source is a row of x rather than a z column"),
];

/// Multiply-accumulate family (ops 10-13, 15-16)
const MAC_FIELDS: &[BitField] = &[
    bf("x_offset", 0, 9, "input byte offset in x"),
    bf("y_offset", 10, 9, "input byte offset in y"),
    bf("z_row_offset", 20, 6, "accumulator row offset in z"),
    bf("skip_add", 27, 1, "1 = store products without accumulating"),
    bf("skip_y", 28, 1, "1 = omit the y input"),
    bf("skip_x", 29, 1, "1 = omit the x input"),
    bf("row_disable", 32, 7, "lane-select code for rows"),
    bf("col_disable", 41, 7, "lane-select code for columns"),
    bf("wide_mode", 62, 1, "1 = widened output element type"),
];

/// Op 14 (mac16) additionally defines bit 63
const MAC16_FIELDS: &[BitField] = &[
    bf("x_offset", 0, 9, "input byte offset in x"),
    bf("y_offset", 10, 9, "input byte offset in y"),
    bf("z_row_offset", 20, 6, "accumulator row offset in z"),
    bf("skip_add", 27, 1, "1 = store products without accumulating"),
    bf("skip_y", 28, 1, "1 = omit the y input"),
    bf("skip_x", 29, 1, "1 = omit the x input"),
    bf("row_disable", 32, 7, "lane-select code for rows"),
    bf("col_disable", 41, 7, "lane-select code for columns"),
    bf("wide_mode", 62, 1, "1 = 32-bit rather than 16-bit output"),
    bf("vector_mode", 63, 1, "1 = single-row vector multiply-add rather than outer product"),
];

/// Look up the bitfield layout for an opcode
///
/// An empty field list means the operand value's structure is unknown
/// (vector/matrix ops 18-21), out of decode scope (genlut consumes x
/// row 0 and expects the zero register as operand), or absent entirely
/// (op 17 takes no register).
pub fn layout(opcode: Opcode) -> FieldLayout {
    match opcode {
        Opcode::Ldx | Opcode::Ldy | Opcode::Stx | Opcode::Sty | Opcode::Ldz | Opcode::Stz => {
            FieldLayout { fields: LOAD_STORE_FIELDS, complete: true }
        }
        Opcode::Ldzi | Opcode::Stzi => FieldLayout { fields: INTERLEAVED_FIELDS, complete: true },
        Opcode::Extrx => FieldLayout { fields: EXTRACT_ROW_FIELDS, complete: false },
        Opcode::Extry => FieldLayout { fields: EXTRACT_COL_FIELDS, complete: false },
        Opcode::Mac16 => FieldLayout { fields: MAC16_FIELDS, complete: false },
        Opcode::Fma64 | Opcode::Fms64 | Opcode::Fma32 | Opcode::Fms32 | Opcode::Fma16
        | Opcode::Fms16 => FieldLayout { fields: MAC_FIELDS, complete: false },
        Opcode::Op17 => FieldLayout { fields: &[], complete: true },
        Opcode::Vecint | Opcode::Vecfp | Opcode::Matint | Opcode::Matfp => {
            FieldLayout { fields: &[], complete: false }
        }
        Opcode::Genlut => FieldLayout { fields: &[], complete: false },
    }
}

/// Decoded lane-select (disable) code shared by the multiply-accumulate
/// family's `row_disable` and `col_disable` fields
///
/// Codes outside the six documented shapes carry no verified meaning
/// and decode to [`LaneSelect::Unknown`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaneSelect {
    /// Code 0: all 32 lanes participate
    All,
    /// Code 1: every second lane starting at index 1
    Odd,
    /// Code 2: every second lane starting at index 0
    Even,
    /// `(code & 0x60) == 0x20`: only lane `code & 0x1F`
    Single(u8),
    /// `(code & 0x60) == 0x40`: only the first `code & 0x1F` lanes
    First(u8),
    /// `(code & 0x60) == 0x60`: only the last `code & 0x1F` lanes
    Last(u8),
    /// Code with no verified meaning; preserved, not guessed
    Unknown(u8),
}

impl LaneSelect {
    /// Decode a 7-bit lane-select code
    pub fn from_code(code: u8) -> Self {
        let code = code & 0x7F;
        match code {
            0 => LaneSelect::All,
            1 => LaneSelect::Odd,
            2 => LaneSelect::Even,
            _ => match code & 0x60 {
                0x20 => LaneSelect::Single(code & 0x1F),
                0x40 => LaneSelect::First(code & 0x1F),
                0x60 => LaneSelect::Last(code & 0x1F),
                _ => LaneSelect::Unknown(code),
            },
        }
    }

    /// Participating lanes as a 32-bit mask, bit i = lane i
    ///
    /// `None` for codes whose meaning is unresolved. Counts and lane
    /// indices are 5-bit in the encoding; anything wider is reduced
    /// modulo 32 rather than allowed to overflow the shift.
    pub fn mask(self) -> Option<u32> {
        Some(match self {
            LaneSelect::All => u32::MAX,
            LaneSelect::Odd => 0xAAAA_AAAA,
            LaneSelect::Even => 0x5555_5555,
            LaneSelect::Single(lane) => 1u32 << (lane & 0x1F),
            LaneSelect::First(n) => match (n & 0x1F) as u32 {
                0 => 0,
                n => u32::MAX >> (32 - n),
            },
            LaneSelect::Last(n) => match (n & 0x1F) as u32 {
                0 => 0,
                n => u32::MAX << (32 - n),
            },
            LaneSelect::Unknown(_) => return None,
        })
    }

    /// Participating lane indices in ascending order
    pub fn lanes(self) -> Option<Vec<u8>> {
        let mask = self.mask()?;
        Some((0..32).filter(|lane| mask & (1 << lane) != 0).collect())
    }
}
