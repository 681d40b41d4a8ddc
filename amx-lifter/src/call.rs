//! # Semantic Call Model
//!
//! The lifted artifact handed to an IR-building front end: an intrinsic
//! call with a fixed argument list, no return value, and a static
//! annotation of the memory the call may touch. The core never inserts
//! the call into the consumer's representation; it only describes it.
//!
//! Coprocessor state lives in its own address space, disjoint from the
//! ordinary register file, so a consumer's register allocation must
//! treat every AMX call as opaque: the three architectural registers
//! (`x`, `y`, `z`) are mutated behind the call boundary and are never
//! modeled as typed returns.

use amx_spec::{Xreg, STATE_BYTES};
use serde::{Deserialize, Serialize};

/// Calling convention of lifted intrinsic calls
///
/// AMX intrinsics take at most one solid argument and never spill to
/// the stack.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallConvention {
    /// Fixed argument list, no stack arguments
    FixedArgs,
}

/// Where an argument's value comes from
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArgSource {
    /// A live 64-bit register read
    Register(Xreg),
    /// A literal zero; used for operand index 31 so the call never
    /// claims a register read that does not occur
    LiteralZero,
}

/// Argument value type
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArgType {
    /// Unsigned integer of the argument's declared size
    UnsignedInt,
}

/// One ordered call argument
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallArg {
    pub source: ArgSource,
    pub ty: ArgType,
    /// Size in bytes
    pub size: u8,
}

impl CallArg {
    /// Unsigned 64-bit argument read from a register
    pub const fn register_u64(reg: Xreg) -> Self {
        CallArg { source: ArgSource::Register(reg), ty: ArgType::UnsignedInt, size: 8 }
    }

    /// Unsigned 64-bit argument with a constant zero value
    pub const fn literal_zero_u64() -> Self {
        CallArg { source: ArgSource::LiteralZero, ty: ArgType::UnsignedInt, size: 8 }
    }
}

/// Address space of a declared memory interval
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressSpace {
    /// Ordinary data memory
    Data,
    /// Coprocessor register file; invisible to normal register
    /// allocation
    Coprocessor,
}

/// Half-open interval of addresses a call may read or write
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemoryInterval {
    pub space: AddressSpace,
    pub offset: u64,
    pub len: u64,
}

/// Static visibility annotation shared by every lifted call
///
/// Load/store addresses are data-dependent, so the data interval spans
/// the whole 56-bit addressable range; the coprocessor interval covers
/// the 0x1400 bytes of `x`, `y`, and `z` state. The annotation is a
/// constant, not a computed effect.
pub const VISIBLE_MEMORY: &[MemoryInterval] = &[
    MemoryInterval { space: AddressSpace::Data, offset: 0, len: 1 << 56 },
    MemoryInterval { space: AddressSpace::Coprocessor, offset: 0, len: STATE_BYTES },
];

/// Lifted call description consumed by an external IR builder
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SemanticCall {
    /// Intrinsic name; op-17 immediates are folded into the name
    pub name: String,
    pub convention: CallConvention,
    /// Ordered arguments; empty for immediate-operand instructions
    pub args: Vec<CallArg>,
    /// Typed return value; always absent, coprocessor-state mutation
    /// stays opaque to the caller
    pub returns: Option<ArgType>,
    /// Memory the call may read
    pub visible_memory: &'static [MemoryInterval],
    /// Memory the call may write
    pub spoiled_memory: &'static [MemoryInterval],
}
