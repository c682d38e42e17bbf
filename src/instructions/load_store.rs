//! Loads and stores. Loads update Z and N from the loaded value; stores
//! never touch the flags.

use super::{update_negative, update_zero};
use crate::addressing::Operand;
use crate::cpu::State;
use crate::memory::MemoryBus;

/// LDA. Load the accumulator from the operand.
pub(crate) fn load_a(mut state: State, operand: &Operand) -> State {
    state.a = operand.value;

    update_negative(&mut state.p, u16::from(state.a));
    update_zero(&mut state.p, u16::from(state.a));

    state
}

/// LDX. Load X from the operand.
pub(crate) fn load_x(mut state: State, operand: &Operand) -> State {
    state.x = operand.value;

    update_negative(&mut state.p, u16::from(state.x));
    update_zero(&mut state.p, u16::from(state.x));

    state
}

/// LDY. Load Y from the operand.
pub(crate) fn load_y(mut state: State, operand: &Operand) -> State {
    state.y = operand.value;

    update_negative(&mut state.p, u16::from(state.y));
    update_zero(&mut state.p, u16::from(state.y));

    state
}

/// STA. Store the accumulator to memory.
pub(crate) fn store_a<M: MemoryBus>(state: State, operand: &Operand, memory: &mut M) -> State {
    let value = state.a;
    operand.store(state, memory, value)
}

/// STX. Store X to memory.
pub(crate) fn store_x<M: MemoryBus>(state: State, operand: &Operand, memory: &mut M) -> State {
    let value = state.x;
    operand.store(state, memory, value)
}

/// STY. Store Y to memory.
pub(crate) fn store_y<M: MemoryBus>(state: State, operand: &Operand, memory: &mut M) -> State {
    let value = state.y;
    operand.store(state, memory, value)
}
