//! Control flow: jumps, subroutines, BRK and the interrupt entry and
//! exit sequences.
//!
//! BRK, IRQ and NMI share one frame shape: return address pushed high
//! byte first, then the status byte, then the interrupt-disable flag is
//! set and the program counter is loaded from the vector. They differ in
//! which address is pushed, whether Break is set in the pushed status,
//! and which vector is used.

use crate::addressing::{self, Operand};
use crate::cpu::State;
use crate::memory::{self, MemoryBus};

/// JMP. Transfer control to the effective address.
pub(crate) fn jump(mut state: State, operand: &Operand) -> State {
    state.pc = operand.effective_address;
    state
}

/// JSR. Push the program counter minus one (high byte first), then
/// transfer control to the effective address.
pub(crate) fn jump_subroutine<M: MemoryBus>(
    mut state: State,
    operand: &Operand,
    memory: &mut M,
) -> State {
    let return_address = state.pc.wrapping_sub(1);
    state.pc = operand.effective_address;
    addressing::push_address(state, memory, return_address)
}

/// RTS. Pull an address off the stack (low byte first) and transfer
/// control to that address plus one, undoing JSR's minus-one push.
pub(crate) fn return_from_subroutine<M: MemoryBus>(state: State, memory: &mut M) -> State {
    let (mut state, address) = addressing::pull_address(state, memory);
    state.pc = address.wrapping_add(1);
    state
}

/// BRK. Software interrupt through the IRQ/BRK vector.
///
/// The program counter is advanced by one before pushing, so an RTI
/// returns to the BRK address plus two and BRK can replace a two-byte
/// instruction while debugging. The status is pushed with the Break flag
/// set; when it is later pulled by RTI or PLP, Break is ignored.
pub(crate) fn brk<M: MemoryBus>(mut state: State, memory: &mut M) -> State {
    // Read the vector before pushing: in a tiny mirrored memory the
    // stack may alias the vector bytes.
    let vector = memory::read_irq_vector(memory);

    let return_address = state.pc.wrapping_add(1);
    state = addressing::push_address(state, memory, return_address);

    let status = state.p.with_break_set();
    state = addressing::push_status(state, memory, status);

    state.p.set_interrupt(true);
    state.pc = vector;

    state
}

/// Hardware interrupt entry (IRQ). Like [`brk`] but the program counter
/// is pushed as-is and the status goes up with Break clear. The
/// interrupt-disable mask is the driver's concern.
pub(crate) fn interrupt<M: MemoryBus>(mut state: State, memory: &mut M) -> State {
    let vector = memory::read_irq_vector(memory);

    state = addressing::push_address(state, memory, state.pc);

    let status = state.p.with_break_cleared();
    state = addressing::push_status(state, memory, status);

    state.p.set_interrupt(true);
    state.pc = vector;

    state
}

/// Non-maskable interrupt entry. Identical to [`interrupt`] except for
/// the vector.
pub(crate) fn non_maskable_interrupt<M: MemoryBus>(mut state: State, memory: &mut M) -> State {
    let vector = memory::read_nmi_vector(memory);

    state = addressing::push_address(state, memory, state.pc);

    let status = state.p.with_break_cleared();
    state = addressing::push_status(state, memory, status);

    state.p.set_interrupt(true);
    state.pc = vector;

    state
}

/// RTI. Pull the status register (Break ignored, Constant forced), then
/// pull the program counter. Unlike RTS, the pulled address is used
/// as-is, with no plus-one.
pub(crate) fn return_from_interrupt<M: MemoryBus>(state: State, memory: &mut M) -> State {
    let state = addressing::pull_status(state, memory);
    let (mut state, address) = addressing::pull_address(state, memory);
    state.pc = address;
    state
}
