//! Increments and decrements, on memory through the operand's store
//! path or directly on the index registers. All update Z and N.

use super::{update_negative, update_zero};
use crate::addressing::Operand;
use crate::cpu::State;
use crate::memory::MemoryBus;

/// INC. Increment memory by one.
pub(crate) fn increment<M: MemoryBus>(
    mut state: State,
    operand: &Operand,
    memory: &mut M,
) -> State {
    let value = operand.value.wrapping_add(1);

    update_negative(&mut state.p, u16::from(value));
    update_zero(&mut state.p, u16::from(value));

    operand.store(state, memory, value)
}

/// DEC. Decrement memory by one.
pub(crate) fn decrement<M: MemoryBus>(
    mut state: State,
    operand: &Operand,
    memory: &mut M,
) -> State {
    let value = operand.value.wrapping_sub(1);

    update_negative(&mut state.p, u16::from(value));
    update_zero(&mut state.p, u16::from(value));

    operand.store(state, memory, value)
}

/// INX. Increment X by one.
pub(crate) fn increment_x(mut state: State) -> State {
    state.x = state.x.wrapping_add(1);

    update_negative(&mut state.p, u16::from(state.x));
    update_zero(&mut state.p, u16::from(state.x));

    state
}

/// DEX. Decrement X by one.
pub(crate) fn decrement_x(mut state: State) -> State {
    state.x = state.x.wrapping_sub(1);

    update_negative(&mut state.p, u16::from(state.x));
    update_zero(&mut state.p, u16::from(state.x));

    state
}

/// INY. Increment Y by one.
pub(crate) fn increment_y(mut state: State) -> State {
    state.y = state.y.wrapping_add(1);

    update_negative(&mut state.p, u16::from(state.y));
    update_zero(&mut state.p, u16::from(state.y));

    state
}

/// DEY. Decrement Y by one.
pub(crate) fn decrement_y(mut state: State) -> State {
    state.y = state.y.wrapping_sub(1);

    update_negative(&mut state.p, u16::from(state.y));
    update_zero(&mut state.p, u16::from(state.y));

    state
}
