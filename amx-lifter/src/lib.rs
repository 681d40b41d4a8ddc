//! # AMX Classifier and Lifter
//!
//! Decode the undocumented Apple AMX matrix-coprocessor instructions
//! and lift each decode into a semantic call description for an
//! external IR builder.
//!
//! ## Pipeline
//!
//! ```text
//! raw word -> decode -> DecodedInstruction -> lift -> SemanticCall
//!                                          -> format -> "AMXLDX x0"
//! ```
//!
//! The crate is decode-only: no fetching, no execution, no encoder.
//! Everything is pure and constant-time; the only shared state is the
//! read-only tables in `amx-spec`, so words at different addresses may
//! be processed concurrently in any order. Host integration (reading
//! the instruction stream, printing, inserting calls into an IR) is
//! the caller's adapter layer, deliberately outside this crate.
//!
//! ## Example
//!
//! ```rust
//! use amx_lifter::{decode, lift, Decline};
//!
//! // AMX words are 0x00201000 | (opcode << 5) | operand
//! let instr = decode(0x00201000).unwrap();
//! let call = lift(&instr);
//! assert_eq!(call.name, "__amx_ldx");
//!
//! // foreign words decline instead of failing
//! assert_eq!(decode(0xD503201F), Err(Decline::NotAnInstruction(0xD503201F)));
//! ```

pub mod call;
pub mod decoder;
pub mod error;
pub mod formatter;
pub mod lifter;

pub use call::{
    AddressSpace, ArgSource, ArgType, CallArg, CallConvention, MemoryInterval, SemanticCall,
    VISIBLE_MEMORY,
};
pub use decoder::decode;
pub use error::{Decline, Result};
pub use formatter::format;
pub use lifter::{call_name, lift};
