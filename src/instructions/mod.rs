//! # Instruction Operations
//!
//! The logic half of every instruction: each [`Operation`] maps a
//! register snapshot plus a resolved [`Operand`] to a new snapshot,
//! writing through the operand's store path or the stack where the
//! instruction calls for it.
//!
//! Operations never advance the program counter for operand bytes (the
//! executor does that before invoking them); they only write `pc` where
//! the instruction itself transfers control (jumps, branches, subroutine
//! and interrupt plumbing).
//!
//! The modules group operations the way the instruction reference does:
//! ALU, branches, control flow, flag writes, increments, loads/stores,
//! shifts, stack, and register transfers.

pub(crate) mod alu;
pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod shifts;
pub(crate) mod stack;
pub(crate) mod transfer;

use crate::addressing::Operand;
use crate::cpu::State;
use crate::memory::MemoryBus;
use crate::status::Status;

/// The 56 documented NMOS 6502 operations.
///
/// One variant per mnemonic; the addressing mode it is paired with comes
/// from the instruction record, so e.g. `Lda` covers all eight LDA
/// opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Operation {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl Operation {
    /// Executes the operation against a register snapshot.
    ///
    /// The snapshot goes in by value and the new one comes out; the
    /// caller decides whether to commit it. `operand` must have been
    /// resolved by the instruction's addressing mode against the same
    /// memory.
    pub fn execute<M: MemoryBus>(self, state: State, operand: &Operand, memory: &mut M) -> State {
        match self {
            Operation::Adc => alu::add_with_carry(state, operand),
            Operation::And => alu::and_with_a(state, operand),
            Operation::Asl => shifts::arithmetic_shift_left(state, operand, memory),
            Operation::Bcc => branches::branch_on_carry_clear(state, operand),
            Operation::Bcs => branches::branch_on_carry_set(state, operand),
            Operation::Beq => branches::branch_on_equal(state, operand),
            Operation::Bit => alu::bit_test(state, operand),
            Operation::Bmi => branches::branch_on_minus(state, operand),
            Operation::Bne => branches::branch_on_not_equal(state, operand),
            Operation::Bpl => branches::branch_on_plus(state, operand),
            Operation::Brk => control::brk(state, memory),
            Operation::Bvc => branches::branch_on_overflow_clear(state, operand),
            Operation::Bvs => branches::branch_on_overflow_set(state, operand),
            Operation::Clc => flags::clear_carry(state),
            Operation::Cld => flags::clear_decimal(state),
            Operation::Cli => flags::clear_interrupt(state),
            Operation::Clv => flags::clear_overflow(state),
            Operation::Cmp => alu::compare_with_a(state, operand),
            Operation::Cpx => alu::compare_with_x(state, operand),
            Operation::Cpy => alu::compare_with_y(state, operand),
            Operation::Dec => inc_dec::decrement(state, operand, memory),
            Operation::Dex => inc_dec::decrement_x(state),
            Operation::Dey => inc_dec::decrement_y(state),
            Operation::Eor => alu::exclusive_or_with_a(state, operand),
            Operation::Inc => inc_dec::increment(state, operand, memory),
            Operation::Inx => inc_dec::increment_x(state),
            Operation::Iny => inc_dec::increment_y(state),
            Operation::Jmp => control::jump(state, operand),
            Operation::Jsr => control::jump_subroutine(state, operand, memory),
            Operation::Lda => load_store::load_a(state, operand),
            Operation::Ldx => load_store::load_x(state, operand),
            Operation::Ldy => load_store::load_y(state, operand),
            Operation::Lsr => shifts::logical_shift_right(state, operand, memory),
            Operation::Nop => state,
            Operation::Ora => alu::or_with_a(state, operand),
            Operation::Pha => stack::push_a(state, memory),
            Operation::Php => stack::push_p(state, memory),
            Operation::Pla => stack::pull_a(state, memory),
            Operation::Plp => stack::pull_p(state, memory),
            Operation::Rol => shifts::rotate_left(state, operand, memory),
            Operation::Ror => shifts::rotate_right(state, operand, memory),
            Operation::Rti => control::return_from_interrupt(state, memory),
            Operation::Rts => control::return_from_subroutine(state, memory),
            Operation::Sbc => alu::subtract_with_carry(state, operand),
            Operation::Sec => flags::set_carry(state),
            Operation::Sed => flags::set_decimal(state),
            Operation::Sei => flags::set_interrupt(state),
            Operation::Sta => load_store::store_a(state, operand, memory),
            Operation::Stx => load_store::store_x(state, operand, memory),
            Operation::Sty => load_store::store_y(state, operand, memory),
            Operation::Tax => transfer::transfer_a_to_x(state),
            Operation::Tay => transfer::transfer_a_to_y(state),
            Operation::Tsx => transfer::transfer_sp_to_x(state),
            Operation::Txa => transfer::transfer_x_to_a(state),
            Operation::Txs => transfer::transfer_x_to_sp(state),
            Operation::Tya => transfer::transfer_y_to_a(state),
        }
    }

    /// The operation's share of an instruction's base cycle count.
    pub fn base_cycles(self) -> u32 {
        match self {
            Operation::Adc
            | Operation::And
            | Operation::Bcc
            | Operation::Bcs
            | Operation::Beq
            | Operation::Bit
            | Operation::Bmi
            | Operation::Bne
            | Operation::Bpl
            | Operation::Bvc
            | Operation::Bvs
            | Operation::Cmp
            | Operation::Cpx
            | Operation::Cpy
            | Operation::Eor
            | Operation::Jmp
            | Operation::Lda
            | Operation::Ldx
            | Operation::Ldy
            | Operation::Ora
            | Operation::Sbc
            | Operation::Sta
            | Operation::Stx
            | Operation::Sty => 1,
            Operation::Asl
            | Operation::Clc
            | Operation::Cld
            | Operation::Cli
            | Operation::Clv
            | Operation::Dex
            | Operation::Dey
            | Operation::Inx
            | Operation::Iny
            | Operation::Lsr
            | Operation::Nop
            | Operation::Rol
            | Operation::Ror
            | Operation::Sec
            | Operation::Sed
            | Operation::Sei
            | Operation::Tax
            | Operation::Tay
            | Operation::Tsx
            | Operation::Txa
            | Operation::Txs
            | Operation::Tya => 2,
            Operation::Dec | Operation::Inc | Operation::Jsr | Operation::Pha | Operation::Php => 3,
            Operation::Pla | Operation::Plp => 4,
            Operation::Rti | Operation::Rts => 6,
            Operation::Brk => 7,
        }
    }

    /// Whether the operation is subject to the page-boundary penalty
    /// when combined with a page-sensitive addressing mode.
    ///
    /// Branches are excluded: their taken/taken-across-page penalties
    /// are charged through [`Operation::branch_condition`] instead.
    pub fn page_sensitive(self) -> bool {
        matches!(
            self,
            Operation::Adc
                | Operation::And
                | Operation::Cmp
                | Operation::Cpy
                | Operation::Eor
                | Operation::Lda
                | Operation::Ldx
                | Operation::Ldy
                | Operation::Ora
                | Operation::Sbc
        )
    }

    /// For branch operations, whether the branch would be taken under
    /// the given status register. `None` for everything else.
    pub fn branch_condition(self, p: Status) -> Option<bool> {
        match self {
            Operation::Bcc => Some(!p.carry()),
            Operation::Bcs => Some(p.carry()),
            Operation::Beq => Some(p.zero()),
            Operation::Bne => Some(!p.zero()),
            Operation::Bmi => Some(p.negative()),
            Operation::Bpl => Some(!p.negative()),
            Operation::Bvc => Some(!p.overflow()),
            Operation::Bvs => Some(p.overflow()),
            _ => None,
        }
    }

    /// The three-letter assembly mnemonic.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Operation::Adc => "ADC",
            Operation::And => "AND",
            Operation::Asl => "ASL",
            Operation::Bcc => "BCC",
            Operation::Bcs => "BCS",
            Operation::Beq => "BEQ",
            Operation::Bit => "BIT",
            Operation::Bmi => "BMI",
            Operation::Bne => "BNE",
            Operation::Bpl => "BPL",
            Operation::Brk => "BRK",
            Operation::Bvc => "BVC",
            Operation::Bvs => "BVS",
            Operation::Clc => "CLC",
            Operation::Cld => "CLD",
            Operation::Cli => "CLI",
            Operation::Clv => "CLV",
            Operation::Cmp => "CMP",
            Operation::Cpx => "CPX",
            Operation::Cpy => "CPY",
            Operation::Dec => "DEC",
            Operation::Dex => "DEX",
            Operation::Dey => "DEY",
            Operation::Eor => "EOR",
            Operation::Inc => "INC",
            Operation::Inx => "INX",
            Operation::Iny => "INY",
            Operation::Jmp => "JMP",
            Operation::Jsr => "JSR",
            Operation::Lda => "LDA",
            Operation::Ldx => "LDX",
            Operation::Ldy => "LDY",
            Operation::Lsr => "LSR",
            Operation::Nop => "NOP",
            Operation::Ora => "ORA",
            Operation::Pha => "PHA",
            Operation::Php => "PHP",
            Operation::Pla => "PLA",
            Operation::Plp => "PLP",
            Operation::Rol => "ROL",
            Operation::Ror => "ROR",
            Operation::Rti => "RTI",
            Operation::Rts => "RTS",
            Operation::Sbc => "SBC",
            Operation::Sec => "SEC",
            Operation::Sed => "SED",
            Operation::Sei => "SEI",
            Operation::Sta => "STA",
            Operation::Stx => "STX",
            Operation::Sty => "STY",
            Operation::Tax => "TAX",
            Operation::Tay => "TAY",
            Operation::Tsx => "TSX",
            Operation::Txa => "TXA",
            Operation::Txs => "TXS",
            Operation::Tya => "TYA",
        }
    }
}

// ************************************************************
// ********** Flag update helpers
// ************************************************************

// These work on unsigned 16-bit intermediates, with bit 8 standing in
// for the carry.

pub(crate) fn update_carry(p: &mut Status, value: u16) {
    p.set_carry(value & 0xFF00 != 0);
}

pub(crate) fn update_negative(p: &mut Status, value: u16) {
    p.set_negative(value & 0x0080 != 0);
}

pub(crate) fn update_zero(p: &mut Status, value: u16) {
    p.set_zero(value & 0x00FF == 0);
}

/// Sets or clears the overflow flag for an addition of `value` into
/// `accumulator` (with carry) that produced `result`.
///
/// The decimal-mode comparator follows the NMOS behaviour: the carry
/// threshold moves from 0x100 to 0xA0.
pub(crate) fn update_overflow(p: &mut Status, accumulator: u16, value: u16, result: u16) {
    let mut overflow = (accumulator ^ value) & 0x80 == 0;

    let comparator = if p.decimal() { 0xA0 } else { 0x100 };

    if result >= comparator {
        if overflow && result >= 0x180 {
            overflow = false;
        }
    } else if overflow && result < 0x80 {
        overflow = false;
    }

    p.set_overflow(overflow);
}
