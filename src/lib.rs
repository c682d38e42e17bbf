//! # core6502
//!
//! A cycle-counted NMOS 6502 CPU emulator core.
//!
//! The crate emulates the 151 documented opcodes of the MOS 6502 against
//! a user-supplied 16-bit-addressed memory, with hardware reset,
//! maskable (IRQ) and non-maskable (NMI) interrupts, packed-BCD
//! arithmetic, and per-instruction cycle counts including page-boundary
//! and branch penalties.
//!
//! ## Quick Start
//!
//! ```rust
//! use core6502::{memory, nmos, FlatMemory, MemoryBus};
//!
//! // 64KB of flat RAM with the reset vector pointing at our program.
//! let mut mem = FlatMemory::new();
//! memory::write_reset_vector(&mut mem, 0x8000);
//! memory::load(&mut mem, 0x8000, &[
//!     0xA9, 0x21, // LDA #$21
//!     0x69, 0x21, // ADC #$21
//! ]);
//!
//! let mut cpu = nmos::cpu_6502(mem)?;
//! cpu.reset();
//!
//! cpu.step()?;
//! cpu.step()?;
//! assert_eq!(cpu.state().a, 0x42);
//! assert_eq!(cpu.cycles(), 4);
//! # Ok::<(), core6502::ExecutionError>(())
//! ```
//!
//! ## Architecture
//!
//! The core decomposes bottom-up:
//!
//! - [`status`] - the 8-bit status register and its boolean flag view
//! - [`memory`] - the [`MemoryBus`] trait, concrete memories, vectors
//! - [`addressing`] - addressing modes, operands, the page-one stack
//! - [`instructions`] - the 56 documented operations
//! - [`opcodes`] - instruction records, the lookup table, and the
//!   static NMOS 6502 opcode list
//! - [`cpu`] - the fetch-decode-execute driver
//! - [`nmos`] - stock 6502/65C02 builders
//!
//! Register state is a value: every instruction maps a snapshot to a new
//! snapshot and the driver commits the result only on success. The
//! instruction set is built once and immutable afterwards; a different
//! list of [`OpcodeSpec`] records makes a different processor.

pub mod addressing;
pub mod bcd;
pub mod cpu;
pub mod instructions;
pub mod memory;
pub mod nmos;
pub mod opcodes;
pub mod status;

use thiserror::Error;

pub use addressing::{AddressingMode, Operand};
pub use cpu::{Cpu, State, STACK_POINTER_START};
pub use instructions::Operation;
pub use memory::{FlatMemory, MemoryBus, MirrorSize, MirroredRam};
pub use opcodes::{Instruction, InstructionSet, OpcodeSpec, NMOS_6502};
pub use status::{Flags, Status};

/// Errors that can occur while building or driving a CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// An instruction set was built from zero instructions.
    #[error("the instruction set is empty")]
    EmptyInstructionSet,

    /// The fetched opcode is not present in the CPU's instruction set.
    ///
    /// Carries the opcode byte for diagnostics.
    #[error("opcode 0x{0:02X} is not present in the instruction set")]
    OpcodeNotInSet(u8),
}
