//! Conditional branches. Each one moves the program counter to the
//! operand's branch target when its flag condition holds.
//!
//! Branch cycle penalties (+1 taken, +1 more when the taken branch
//! crosses a page) are charged by the instruction executor, not here.

use crate::addressing::Operand;
use crate::cpu::State;

fn branch_if(mut state: State, operand: &Operand, taken: bool) -> State {
    if taken {
        state.pc = operand.effective_address;
    }
    state
}

/// BCC. Branch when the carry flag is clear.
pub(crate) fn branch_on_carry_clear(state: State, operand: &Operand) -> State {
    let taken = !state.p.carry();
    branch_if(state, operand, taken)
}

/// BCS. Branch when the carry flag is set.
pub(crate) fn branch_on_carry_set(state: State, operand: &Operand) -> State {
    let taken = state.p.carry();
    branch_if(state, operand, taken)
}

/// BEQ. Branch when the zero flag is set.
pub(crate) fn branch_on_equal(state: State, operand: &Operand) -> State {
    let taken = state.p.zero();
    branch_if(state, operand, taken)
}

/// BNE. Branch when the zero flag is clear.
pub(crate) fn branch_on_not_equal(state: State, operand: &Operand) -> State {
    let taken = !state.p.zero();
    branch_if(state, operand, taken)
}

/// BMI. Branch when the negative flag is set.
pub(crate) fn branch_on_minus(state: State, operand: &Operand) -> State {
    let taken = state.p.negative();
    branch_if(state, operand, taken)
}

/// BPL. Branch when the negative flag is clear.
pub(crate) fn branch_on_plus(state: State, operand: &Operand) -> State {
    let taken = !state.p.negative();
    branch_if(state, operand, taken)
}

/// BVC. Branch when the overflow flag is clear.
pub(crate) fn branch_on_overflow_clear(state: State, operand: &Operand) -> State {
    let taken = !state.p.overflow();
    branch_if(state, operand, taken)
}

/// BVS. Branch when the overflow flag is set.
pub(crate) fn branch_on_overflow_set(state: State, operand: &Operand) -> State {
    let taken = state.p.overflow();
    branch_if(state, operand, taken)
}
