//! Single-flag writes: CLC, SEC, CLD, SED, CLI, SEI, CLV. No other
//! state changes.

use crate::cpu::State;

/// CLC. Clear the carry flag.
pub(crate) fn clear_carry(mut state: State) -> State {
    state.p.set_carry(false);
    state
}

/// SEC. Set the carry flag.
pub(crate) fn set_carry(mut state: State) -> State {
    state.p.set_carry(true);
    state
}

/// CLD. Clear the decimal flag.
pub(crate) fn clear_decimal(mut state: State) -> State {
    state.p.set_decimal(false);
    state
}

/// SED. Set the decimal flag.
pub(crate) fn set_decimal(mut state: State) -> State {
    state.p.set_decimal(true);
    state
}

/// CLI. Clear the interrupt-disable flag.
pub(crate) fn clear_interrupt(mut state: State) -> State {
    state.p.set_interrupt(false);
    state
}

/// SEI. Set the interrupt-disable flag, masking IRQs.
pub(crate) fn set_interrupt(mut state: State) -> State {
    state.p.set_interrupt(true);
    state
}

/// CLV. Clear the overflow flag.
pub(crate) fn clear_overflow(mut state: State) -> State {
    state.p.set_overflow(false);
    state
}
