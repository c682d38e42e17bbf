//! Shifts and rotates. Each operates on the operand value (memory or
//! accumulator) and writes the result back through the operand's store
//! path. The carry flag is carried in bit 8 of the 16-bit intermediate.

use super::{update_carry, update_negative, update_zero};
use crate::addressing::Operand;
use crate::cpu::State;
use crate::memory::MemoryBus;

/// ASL. Shift left one bit; 0 enters bit 0 and the original bit 7
/// lands in the carry.
pub(crate) fn arithmetic_shift_left<M: MemoryBus>(
    mut state: State,
    operand: &Operand,
    memory: &mut M,
) -> State {
    let value = u16::from(operand.value) << 1;

    update_carry(&mut state.p, value);
    update_negative(&mut state.p, value);
    update_zero(&mut state.p, value);

    operand.store(state, memory, (value & 0x00FF) as u8)
}

/// LSR. Shift right one bit; 0 enters bit 7 and the original bit 0
/// lands in the carry. N is therefore always clear.
pub(crate) fn logical_shift_right<M: MemoryBus>(
    mut state: State,
    operand: &Operand,
    memory: &mut M,
) -> State {
    let mut value = u16::from(operand.value) >> 1;

    // The outgoing bit is parked in the high byte for the carry update.
    if operand.value & 0x01 != 0 {
        value |= 0x0100;
    }

    update_carry(&mut state.p, value);
    update_negative(&mut state.p, value);
    update_zero(&mut state.p, value);

    operand.store(state, memory, (value & 0x00FF) as u8)
}

/// ROL. Rotate left one bit through the carry: the old carry enters bit
/// 0 and the original bit 7 becomes the new carry.
pub(crate) fn rotate_left<M: MemoryBus>(
    mut state: State,
    operand: &Operand,
    memory: &mut M,
) -> State {
    let mut value = u16::from(operand.value) << 1;
    if state.p.carry() {
        value += 1;
    }

    update_carry(&mut state.p, value);
    update_negative(&mut state.p, value);
    update_zero(&mut state.p, value);

    operand.store(state, memory, (value & 0x00FF) as u8)
}

/// ROR. Rotate right one bit through the carry: the old carry enters
/// bit 7 and the original bit 0 becomes the new carry.
pub(crate) fn rotate_right<M: MemoryBus>(
    mut state: State,
    operand: &Operand,
    memory: &mut M,
) -> State {
    let mut value = u16::from(operand.value);

    // Stage the incoming carry above bit 7 and the outgoing bit above
    // bit 8, then shift the whole window down.
    if state.p.carry() {
        value |= 0x0100;
    }
    if value & 0x01 != 0 {
        value |= 0x0200;
    }
    value >>= 1;

    update_carry(&mut state.p, value);
    update_negative(&mut state.p, value);
    update_zero(&mut state.p, value);

    operand.store(state, memory, (value & 0x00FF) as u8)
}
