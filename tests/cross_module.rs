//! Cross-module interaction tests
//!
//! Exhaustive and property-based checks that the spec tables and the
//! classifier/lifter agree with each other.

use amx_lifter::{decode, lift, ArgSource, Decline};
use amx_spec::{bitfield, encoding, Opcode, Operand};
use proptest::prelude::*;

fn word(opcode: u32, operand: u32) -> u32 {
    encoding::PATTERN_BITS | (opcode << encoding::OPCODE_SHIFT) | operand
}

#[test]
fn test_exhaustive_defined_space() {
    // all 23 * 32 defined encodings: decode, lift, and cross-check
    // against the spec tables
    for op in Opcode::all() {
        for operand in 0u32..32 {
            let w = word(op.to_u5() as u32, operand);
            let instr = decode(w).unwrap();

            assert_eq!(instr.opcode, op);
            assert_eq!(instr.operand, Operand::resolve(op, operand as u8));
            assert_eq!(instr.length(), encoding::INSTRUCTION_BYTES);

            let call = lift(&instr);
            match instr.operand {
                Operand::Immediate(_) => assert!(call.args.is_empty()),
                Operand::Register(reg) if reg.is_zero() => {
                    assert_eq!(call.args[0].source, ArgSource::LiteralZero)
                }
                Operand::Register(reg) => {
                    assert_eq!(call.args[0].source, ArgSource::Register(reg))
                }
            }
        }
    }
}

#[test]
fn test_exhaustive_reserved_space() {
    for raw_op in 23u32..32 {
        for operand in 0u32..32 {
            let w = word(raw_op, operand);
            assert_eq!(
                decode(w),
                Err(Decline::ReservedOpcode { word: w, opcode: raw_op as u8 })
            );
        }
    }
}

#[test]
fn test_intrinsic_names_match_lifted_calls() {
    // register-operand instructions lift to exactly the table name
    for op in Opcode::all().filter(|op| !op.uses_immediate()) {
        let call = lift(&decode(word(op.to_u5() as u32, 0)).unwrap());
        assert_eq!(call.name, op.intrinsic());
    }
}

#[test]
fn test_layout_completeness_flags() {
    // loads/stores are fully reverse engineered; everything else keeps
    // an explicit gap
    for op in Opcode::all() {
        let layout = bitfield::layout(op);
        let expected_complete = op.is_memory() || op == Opcode::Op17;
        assert_eq!(layout.complete, expected_complete, "{op}");
    }
}

proptest! {
    #[test]
    fn no_word_is_fatal(w in any::<u32>()) {
        // every 32-bit input yields a decline or a full decode
        match decode(w) {
            Ok(instr) => {
                let call = lift(&instr);
                prop_assert!(!call.name.is_empty());
            }
            Err(Decline::NotAnInstruction(declined)) => prop_assert_eq!(declined, w),
            Err(Decline::ReservedOpcode { word, opcode }) => {
                prop_assert_eq!(word, w);
                prop_assert!((23..32).contains(&opcode));
            }
        }
    }

    #[test]
    fn decline_is_mutually_exclusive_with_match(w in any::<u32>()) {
        if decode(w).is_ok() {
            prop_assert!(encoding::matches_pattern(w));
            prop_assert!(encoding::extract_opcode(w) <= encoding::MAX_OPCODE);
        }
    }
}
