//! Register-to-register transfers. All update Z and N from the value
//! moved, except TXS which never touches the flags.

use super::{update_negative, update_zero};
use crate::cpu::State;

/// TAX. Transfer the accumulator to X.
pub(crate) fn transfer_a_to_x(mut state: State) -> State {
    state.x = state.a;

    update_zero(&mut state.p, u16::from(state.x));
    update_negative(&mut state.p, u16::from(state.x));

    state
}

/// TAY. Transfer the accumulator to Y.
pub(crate) fn transfer_a_to_y(mut state: State) -> State {
    state.y = state.a;

    update_zero(&mut state.p, u16::from(state.y));
    update_negative(&mut state.p, u16::from(state.y));

    state
}

/// TSX. Transfer the stack pointer to X.
pub(crate) fn transfer_sp_to_x(mut state: State) -> State {
    state.x = state.sp;

    update_zero(&mut state.p, u16::from(state.x));
    update_negative(&mut state.p, u16::from(state.x));

    state
}

/// TXA. Transfer X to the accumulator.
pub(crate) fn transfer_x_to_a(mut state: State) -> State {
    state.a = state.x;

    update_zero(&mut state.p, u16::from(state.a));
    update_negative(&mut state.p, u16::from(state.a));

    state
}

/// TXS. Transfer X to the stack pointer. Flags are untouched.
pub(crate) fn transfer_x_to_sp(mut state: State) -> State {
    state.sp = state.x;
    state
}

/// TYA. Transfer Y to the accumulator.
pub(crate) fn transfer_y_to_a(mut state: State) -> State {
    state.a = state.y;

    update_zero(&mut state.p, u16::from(state.a));
    update_negative(&mut state.p, u16::from(state.a));

    state
}
