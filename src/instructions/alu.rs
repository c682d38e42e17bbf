//! Arithmetic and logic operations: ADC, SBC, AND, ORA, EOR, BIT and
//! the three compares.

use super::{update_carry, update_negative, update_overflow, update_zero};
use crate::addressing::Operand;
use crate::cpu::State;
use crate::status::Status;

/// ADC. Add memory to the accumulator with carry.
///
/// Results depend on the decimal flag: in decimal mode the addition
/// assumes both bytes are packed BCD. There is no way to add without
/// carry.
pub(crate) fn add_with_carry(mut state: State, operand: &Operand) -> State {
    let accumulator = u16::from(state.a);
    let value = u16::from(operand.value);
    let carry = u16::from(state.p.carry());

    let result = if state.p.decimal() {
        // Lower nibble first, adjusting past 9 into the next digit.
        let mut result = (accumulator & 0x0F) + (value & 0x0F) + carry;
        if result >= 10 {
            result = 0x10 | ((result + 0x06) & 0x0F);
        }

        result += (accumulator & 0xF0) + (value & 0xF0);

        if result >= 0xA0 {
            result += 0x60;
        }
        result
    } else {
        accumulator + value + carry
    };

    update_overflow(&mut state.p, accumulator, value, result);
    update_carry(&mut state.p, result);
    update_negative(&mut state.p, result);
    update_zero(&mut state.p, result);

    state.a = result as u8;
    state
}

/// SBC. Subtract memory from the accumulator with borrow.
///
/// There is no explicit borrow flag; the complement of the carry is
/// used: carry set means no borrow. If the unsigned operation results in
/// a borrow the carry flag is cleared. In decimal mode the subtraction
/// assumes both bytes are packed BCD.
pub(crate) fn subtract_with_carry(mut state: State, operand: &Operand) -> State {
    let accumulator = u16::from(state.a);
    let value = u16::from(operand.value);
    let complement = value ^ 0x00FF;
    let carry = u16::from(state.p.carry());

    let result = if state.p.decimal() {
        // Lower nibble, offset so a digit borrow is visible at 0x10.
        let mut result = 0x0F + (accumulator & 0x0F) - (value & 0x0F) + carry;
        let mut upper = 0u16;
        if result < 0x10 {
            result = result.wrapping_sub(0x06);
        } else {
            result -= 0x10;
            upper = 0x10;
        }

        upper += 0xF0 + (accumulator & 0xF0) - (value & 0xF0);

        if upper < 0x100 {
            upper = upper.wrapping_sub(0x60);
        }
        result.wrapping_add(upper)
    } else {
        accumulator + complement + carry
    };

    update_overflow(&mut state.p, accumulator, complement, result);
    update_carry(&mut state.p, result);
    update_negative(&mut state.p, result);
    update_zero(&mut state.p, result);

    state.a = result as u8;
    state
}

/// AND. Bitwise AND memory with the accumulator.
pub(crate) fn and_with_a(mut state: State, operand: &Operand) -> State {
    state.a &= operand.value;

    update_negative(&mut state.p, u16::from(state.a));
    update_zero(&mut state.p, u16::from(state.a));

    state
}

/// ORA. Bitwise OR memory with the accumulator.
pub(crate) fn or_with_a(mut state: State, operand: &Operand) -> State {
    state.a |= operand.value;

    update_negative(&mut state.p, u16::from(state.a));
    update_zero(&mut state.p, u16::from(state.a));

    state
}

/// EOR. Bitwise exclusive-OR memory with the accumulator.
pub(crate) fn exclusive_or_with_a(mut state: State, operand: &Operand) -> State {
    state.a ^= operand.value;

    update_negative(&mut state.p, u16::from(state.a));
    update_zero(&mut state.p, u16::from(state.a));

    state
}

/// BIT. Sets Z as though the tested value were ANDed with the
/// accumulator, then copies bits 7 and 6 of the value into N and V. The
/// accumulator is not modified.
pub(crate) fn bit_test(mut state: State, operand: &Operand) -> State {
    update_zero(&mut state.p, u16::from(operand.value & state.a));
    update_negative(&mut state.p, u16::from(operand.value));
    state.p.set_overflow(operand.value & Status::OVERFLOW != 0);

    state
}

/// Shared compare for CMP/CPX/CPY. Carry is set when the register is
/// equal to or greater than the value; Z and N come from the 16-bit
/// subtraction result.
fn compare(p: &mut Status, register: u8, value: u8) {
    p.set_carry(register >= value);

    let result = u16::from(register).wrapping_sub(u16::from(value));

    update_negative(p, result);
    update_zero(p, result);
}

/// CMP. Compare memory with the accumulator.
pub(crate) fn compare_with_a(mut state: State, operand: &Operand) -> State {
    compare(&mut state.p, state.a, operand.value);
    state
}

/// CPX. Compare memory with X.
pub(crate) fn compare_with_x(mut state: State, operand: &Operand) -> State {
    compare(&mut state.p, state.x, operand.value);
    state
}

/// CPY. Compare memory with Y.
pub(crate) fn compare_with_y(mut state: State, operand: &Operand) -> State {
    compare(&mut state.p, state.y, operand.value);
    state
}
