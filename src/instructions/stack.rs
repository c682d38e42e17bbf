//! Stack operations: PHA, PHP, PLA, PLP.

use super::{update_negative, update_zero};
use crate::addressing;
use crate::cpu::State;
use crate::memory::MemoryBus;

/// PHA. Push the accumulator onto the stack.
pub(crate) fn push_a<M: MemoryBus>(state: State, memory: &mut M) -> State {
    let value = state.a;
    addressing::push_byte(state, memory, value)
}

/// PHP. Push the status register with the Break and Constant bits
/// forced to 1.
pub(crate) fn push_p<M: MemoryBus>(state: State, memory: &mut M) -> State {
    let status = state.p.with_break_set();
    addressing::push_status(state, memory, status)
}

/// PLA. Pull the accumulator from the stack, updating Z and N.
pub(crate) fn pull_a<M: MemoryBus>(state: State, memory: &mut M) -> State {
    let (mut state, value) = addressing::pull_byte(state, memory);
    state.a = value;

    update_negative(&mut state.p, u16::from(value));
    update_zero(&mut state.p, u16::from(value));

    state
}

/// PLP. Pull the status register from the stack.
///
/// Break has no storage in the register and is cleared; Constant is
/// forced on. All other flags are copied from the pulled byte.
pub(crate) fn pull_p<M: MemoryBus>(state: State, memory: &mut M) -> State {
    addressing::pull_status(state, memory)
}
