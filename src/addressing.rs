//! # Addressing Modes
//!
//! This module defines the addressing modes of the 6502, the [`Operand`]
//! value each of them resolves to, and the page-one stack helpers that
//! operations and the interrupt paths share.
//!
//! Every mode is resolved with the program counter pointing at the byte
//! *after* the opcode. The resolved [`Operand`] reports how many operand
//! bytes were consumed so the driver can advance the PC before the
//! operation runs.
//!
//! Two hardware quirks are deliberate and load-bearing:
//!
//! - **Indirect JMP page bug**: the high byte of the indirect target is
//!   fetched from the same page as the low byte, so a pointer at `$xxFF`
//!   reads its high byte from `$xx00`.
//! - **Zero-page wraparound**: all zero-page index arithmetic (including
//!   both pointer bytes of the indexed-indirect modes) wraps modulo 256.

use std::fmt;

use crate::cpu::State;
use crate::memory::MemoryBus;
use crate::status::Status;

/// Base address of the stack page. The stack lives at `0x0100 + sp`.
pub const STACK_BASE: u16 = 0x0100;

/// Combines a low and a high byte into a 16-bit address.
///
/// The first byte in memory is the low byte, the second the high byte.
/// This is the reverse of [`split_address`].
pub fn make_address(low: u8, high: u8) -> u16 {
    u16::from(low) | (u16::from(high) << 8)
}

/// Splits a 16-bit address into its low and high bytes, in that order.
///
/// This is the reverse of [`make_address`].
pub fn split_address(address: u16) -> (u8, u8) {
    ((address & 0xFF) as u8, (address >> 8) as u8)
}

/// The value an addressing mode resolves to.
///
/// Produced by [`AddressingMode::resolve`] and consumed by the operation
/// together with the memory it was resolved against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Operand {
    /// How many bytes after the opcode the mode consumed (0-2). The
    /// driver advances the program counter by this before the operation
    /// runs.
    pub pc_advance: u16,

    /// The byte fetched from the effective operand location, or the
    /// accumulator for accumulator addressing.
    pub value: u8,

    /// True when the operation's read-modify-write target is the
    /// accumulator rather than memory.
    pub accumulator: bool,

    /// The computed 16-bit address. For branches this is the branch
    /// target; for immediate addressing it is the operand's own address.
    pub effective_address: u16,

    /// True iff index arithmetic crossed a 256-byte page boundary. For
    /// relative addressing this compares the branch target against the
    /// page of the next instruction.
    pub page_crossed: bool,
}

impl Operand {
    /// Writes `value` back to wherever this operand came from: the
    /// accumulator in `state`, or memory at the effective address.
    ///
    /// Shifts, rotates and increments use this as their single store
    /// path.
    pub fn store<M: MemoryBus>(&self, mut state: State, memory: &mut M, value: u8) -> State {
        if self.accumulator {
            state.a = value;
        } else {
            memory.write(self.effective_address, value);
        }
        state
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Acc: {}, EA: {:04X}, V: {:02X}, PC-delta: {:04X}, PBC: {}",
            self.accumulator, self.effective_address, self.value, self.pc_advance, self.page_crossed
        )
    }
}

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand
/// bytes that follow an opcode and how it calculates the effective
/// memory address for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    /// May incur +1 cycle penalty if a page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    /// May incur +1 cycle penalty if a page boundary is crossed.
    AbsoluteY,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X, wrapping within the zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within the zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Indirect jump through a 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    /// The pointer's high byte is fetched from the same page as its low
    /// byte (the NMOS page-wrap bug).
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    /// May incur +1 cycle penalty if a page boundary is crossed.
    IndirectY,

    /// Signed 8-bit offset for branch instructions, relative to the next
    /// instruction.
    ///
    /// Example: BEQ label
    Relative,
}

impl AddressingMode {
    /// Resolves this mode against the given register snapshot and
    /// memory, with `state.pc` pointing at the byte after the opcode.
    pub fn resolve<M: MemoryBus>(self, state: &State, memory: &M) -> Operand {
        match self {
            AddressingMode::Accumulator => Operand {
                accumulator: true,
                value: state.a,
                ..Operand::default()
            },
            AddressingMode::Implied => Operand::default(),
            AddressingMode::Immediate => Operand {
                effective_address: state.pc,
                value: memory.read(state.pc),
                pc_advance: 1,
                ..Operand::default()
            },
            AddressingMode::Absolute => absolute_indexed(state, memory, 0),
            AddressingMode::AbsoluteX => absolute_indexed(state, memory, u16::from(state.x)),
            AddressingMode::AbsoluteY => absolute_indexed(state, memory, u16::from(state.y)),
            AddressingMode::ZeroPage => zero_page_indexed(state, memory, 0),
            AddressingMode::ZeroPageX => zero_page_indexed(state, memory, state.x),
            AddressingMode::ZeroPageY => zero_page_indexed(state, memory, state.y),
            AddressingMode::Indirect => {
                let pointer =
                    make_address(memory.read(state.pc), memory.read(state.pc.wrapping_add(1)));
                // The +1 wraps within the pointer's page, never past it.
                let pointer_high = (pointer & 0xFF00) | (pointer.wrapping_add(1) & 0x00FF);
                let effective_address =
                    make_address(memory.read(pointer), memory.read(pointer_high));
                Operand {
                    effective_address,
                    value: memory.read(effective_address),
                    pc_advance: 2,
                    ..Operand::default()
                }
            }
            AddressingMode::IndirectX => {
                let pointer = memory.read(state.pc).wrapping_add(state.x);
                let effective_address = make_address(
                    memory.read(u16::from(pointer)),
                    memory.read(u16::from(pointer.wrapping_add(1))),
                );
                Operand {
                    effective_address,
                    value: memory.read(effective_address),
                    pc_advance: 1,
                    ..Operand::default()
                }
            }
            AddressingMode::IndirectY => {
                let pointer = memory.read(state.pc);
                let base = make_address(
                    memory.read(u16::from(pointer)),
                    memory.read(u16::from(pointer.wrapping_add(1))),
                );
                let effective_address = base.wrapping_add(u16::from(state.y));
                Operand {
                    effective_address,
                    value: memory.read(effective_address),
                    pc_advance: 1,
                    page_crossed: (base & 0xFF00) != (effective_address & 0xFF00),
                    ..Operand::default()
                }
            }
            AddressingMode::Relative => {
                let value = memory.read(state.pc);
                // Sign-extend the offset, then add it to the address of
                // the next instruction.
                let offset = value as i8 as i16 as u16;
                let next = state.pc.wrapping_add(1);
                let effective_address = next.wrapping_add(offset);
                Operand {
                    effective_address,
                    value,
                    pc_advance: 1,
                    page_crossed: (next & 0xFF00) != (effective_address & 0xFF00),
                    ..Operand::default()
                }
            }
        }
    }

    /// The addressing share of an instruction's base cycle count.
    pub fn base_cycles(self) -> u32 {
        match self {
            AddressingMode::Accumulator | AddressingMode::Implied => 0,
            AddressingMode::Immediate | AddressingMode::Relative => 1,
            AddressingMode::ZeroPage => 2,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY => 3,
            AddressingMode::Indirect | AddressingMode::IndirectY => 4,
            AddressingMode::IndirectX => 5,
        }
    }

    /// Whether indexing through this mode can incur the page-boundary
    /// penalty cycle. Relative addressing is excluded: branch timing is
    /// charged by the executor on taken branches instead.
    pub fn page_sensitive(self) -> bool {
        matches!(
            self,
            AddressingMode::AbsoluteX | AddressingMode::AbsoluteY | AddressingMode::IndirectY
        )
    }
}

fn absolute_indexed<M: MemoryBus>(state: &State, memory: &M, offset: u16) -> Operand {
    let base = make_address(memory.read(state.pc), memory.read(state.pc.wrapping_add(1)));
    let effective_address = base.wrapping_add(offset);
    Operand {
        effective_address,
        value: memory.read(effective_address),
        pc_advance: 2,
        page_crossed: offset != 0 && (base & 0xFF00) != (effective_address & 0xFF00),
        ..Operand::default()
    }
}

fn zero_page_indexed<M: MemoryBus>(state: &State, memory: &M, offset: u8) -> Operand {
    let effective_address = u16::from(memory.read(state.pc).wrapping_add(offset));
    Operand {
        effective_address,
        value: memory.read(effective_address),
        pc_advance: 1,
        ..Operand::default()
    }
}

// ************************************************************
// ********** Stack helpers
// ************************************************************

/// Pushes a byte onto the page-one stack, post-decrementing `sp` with
/// wraparound.
pub fn push_byte<M: MemoryBus>(mut state: State, memory: &mut M, value: u8) -> State {
    memory.write(STACK_BASE + u16::from(state.sp), value);
    state.sp = state.sp.wrapping_sub(1);
    state
}

/// Pushes a 16-bit address onto the stack, high byte first, so a
/// subsequent pull reads the low byte first.
pub fn push_address<M: MemoryBus>(state: State, memory: &mut M, address: u16) -> State {
    let (low, high) = split_address(address);
    let state = push_byte(state, memory, high);
    push_byte(state, memory, low)
}

/// Pushes the status register onto the stack with the Constant flag
/// forced to 1, as every status push does.
pub fn push_status<M: MemoryBus>(state: State, memory: &mut M, status: Status) -> State {
    push_byte(state, memory, status.with_constant_set().bits())
}

/// Pulls a byte off the stack, pre-incrementing `sp` with wraparound.
pub fn pull_byte<M: MemoryBus>(mut state: State, memory: &M) -> (State, u8) {
    state.sp = state.sp.wrapping_add(1);
    let value = memory.read(STACK_BASE + u16::from(state.sp));
    (state, value)
}

/// Pulls a 16-bit address off the stack, low byte first.
pub fn pull_address<M: MemoryBus>(state: State, memory: &M) -> (State, u16) {
    let (state, low) = pull_byte(state, memory);
    let (state, high) = pull_byte(state, memory);
    (state, make_address(low, high))
}

/// Pulls the status register off the stack, forcing the Constant flag on
/// and the Break flag off, and installs it in the snapshot.
pub fn pull_status<M: MemoryBus>(state: State, memory: &M) -> State {
    let (mut state, value) = pull_byte(state, memory);
    state.p = Status::from_pull(value);
    state
}
