//! # Apple AMX Instruction Metadata
//!
//! Encoding constants, opcode tables, operand resolution, and bitfield
//! layout metadata for the undocumented AMX matrix-coprocessor extension
//! found on Apple arm64 parts.
//!
//! ## Key Features
//! - Fixed 32-bit instruction pattern (`word & 0xFFFFFC00 == 0x00201000`)
//! - 23 reverse-engineered operations (opcode field 0..=22)
//! - 5-bit operand field: a 64-bit register index for every operation
//!   except enable/disable (op 17), which takes a raw immediate
//! - Per-opcode bitfield layouts describing how the operand register's
//!   runtime value is subdivided; layouts are documentation metadata and
//!   are never evaluated here
//! - Unverified encoding regions stay explicit: reserved opcodes do not
//!   decode and unresolved bitfields are flagged, never guessed
//!
//! This crate holds only immutable tables and pure functions; the
//! classifier and lifter built on top of it live in `amx-lifter`.

pub mod bitfield;
pub mod encoding;
pub mod instruction;
pub mod opcode;
pub mod operand;

pub use bitfield::{BitField, FieldLayout, LaneSelect};
pub use instruction::DecodedInstruction;
pub use opcode::Opcode;
pub use operand::{Operand, Xreg};

/// Bytes per coprocessor register row
pub const ROW_BYTES: u64 = 0x40;

/// Size of the `x` register group (8 rows)
pub const X_BYTES: u64 = 0x200;

/// Size of the `y` register group (8 rows)
pub const Y_BYTES: u64 = 0x200;

/// Size of the `z` register group (64 rows)
pub const Z_BYTES: u64 = 0x1000;

/// Total coprocessor register state, `x` then `y` then `z`
pub const STATE_BYTES: u64 = X_BYTES + Y_BYTES + Z_BYTES;
