//! End-to-end tests across amx-spec and amx-lifter
//!
//! Drives the full pipeline a disassembly/decompilation host would:
//! walk a word stream, decode each word, render it, lift it, and
//! consult the bitfield table for argument documentation.

use amx_lifter::{decode, format, lift, Decline};
use amx_spec::{bitfield, DecodedInstruction, LaneSelect, Opcode};

fn word(opcode: u32, operand: u32) -> u32 {
    0x00201000 | (opcode << 5) | operand
}

#[test]
fn test_walk_mixed_instruction_stream() {
    // a realistic fragment: three nops, enable, load x, load y, fma32,
    // store z, disable, then an unrelated arm64 word
    let stream = [
        0xD503201F,       // nop
        0xD503201F,       // nop
        0xD503201F,       // nop
        word(17, 0),      // amx begin
        word(0, 1),       // amxldx x1
        word(1, 2),       // amxldy x2
        word(12, 3),      // amxfma32 x3
        word(5, 4),       // amxstz x4
        word(17, 1),      // amx end
        0x91000420,       // add x0, x1, #1
    ];

    let mut calls = Vec::new();
    let mut declined = 0;
    for &w in &stream {
        match decode(w) {
            Ok(instr) => calls.push(lift(&instr).name),
            Err(Decline::NotAnInstruction(_)) => declined += 1,
            Err(other) => panic!("unexpected decline: {other}"),
        }
    }

    assert_eq!(declined, 4);
    assert_eq!(
        calls,
        vec![
            "__amx_begin",
            "__amx_ldx",
            "__amx_ldy",
            "__amx_fma32",
            "__amx_stz",
            "__amx_end",
        ]
    );
}

#[test]
fn test_rendered_listing() {
    let words = [word(17, 0), word(0, 5), word(14, 31), word(17, 1)];
    let listing: Vec<String> = words
        .iter()
        .map(|&w| format(&decode(w).unwrap()))
        .collect();

    assert_eq!(listing, vec!["AMX17 #0", "AMXLDX x5", "AMXMAC16 xzr", "AMX17 #1"]);
}

#[test]
fn test_every_decode_has_layout_documentation() {
    // the table is total: unresolved opcodes answer with an empty
    // layout rather than an error
    for raw_op in 0u32..=22 {
        let instr = decode(word(raw_op, 0)).unwrap();
        let layout = bitfield::layout(instr.opcode);
        if layout.is_empty() {
            assert!(matches!(
                instr.opcode,
                Opcode::Op17
                    | Opcode::Vecint
                    | Opcode::Vecfp
                    | Opcode::Matint
                    | Opcode::Matfp
                    | Opcode::Genlut
            ));
        }
    }
}

#[test]
fn test_mac_documentation_reaches_lane_selects() {
    // a consumer documenting an fma32 call can decode both disable
    // fields with the shared lane-select rule
    let instr = decode(word(12, 7)).unwrap();
    let layout = bitfield::layout(instr.opcode);

    let rows = layout.field("row_disable").unwrap();
    let cols = layout.field("col_disable").unwrap();
    assert_eq!((rows.lo, rows.width), (32, 7));
    assert_eq!((cols.lo, cols.width), (41, 7));

    assert_eq!(LaneSelect::from_code(0).lanes().unwrap().len(), 32);
    assert_eq!(LaneSelect::from_code(0x43).lanes().unwrap(), vec![0, 1, 2]);
}

#[test]
fn test_decode_is_position_independent() {
    // identical words decode identically regardless of where a host
    // found them; repeated decodes are structurally equal
    let w = word(8, 12);
    let a: DecodedInstruction = decode(w).unwrap();
    let b: DecodedInstruction = decode(w).unwrap();
    assert_eq!(a, b);
    assert_eq!(lift(&a), lift(&b));
}
