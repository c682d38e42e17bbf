//! Tests for SBC, binary and decimal, including the exhaustive flag
//! laws. Remember the no-borrow convention: C=1 means no borrow
//! occurred.

use core6502::{bcd, memory, nmos, Cpu, FlatMemory, MemoryBus, Status};

fn setup_cpu() -> Cpu<FlatMemory> {
    let mut mem = FlatMemory::new();
    memory::write_reset_vector(&mut mem, 0x8000);
    let mut cpu = nmos::cpu_6502(mem).unwrap();
    cpu.reset();
    cpu
}

// ========== Literal scenarios ==========

#[test]
fn test_sbc_decimal_no_borrow() {
    // 46 - 12 with no incoming borrow: A=$34, no borrow out.
    let mut cpu = setup_cpu();
    memory::load(cpu.memory_mut(), 0x8000, &[0xE9, 0x12]);
    {
        let state = cpu.state_mut();
        state.a = 0x46;
        state.p.set_carry(true);
        state.p.set_decimal(true);
    }

    cpu.step().unwrap();

    assert_eq!(cpu.state().a, 0x34);
    assert!(cpu.state().p.carry());
}

#[test]
fn test_sbc_decimal_with_borrow_out() {
    // 12 - 46 borrows: A wraps to $66 and the carry clears.
    let mut cpu = setup_cpu();
    memory::load(cpu.memory_mut(), 0x8000, &[0xE9, 0x46]);
    {
        let state = cpu.state_mut();
        state.a = 0x12;
        state.p.set_carry(true);
        state.p.set_decimal(true);
    }

    cpu.step().unwrap();

    assert_eq!(cpu.state().a, 0x66);
    assert!(!cpu.state().p.carry());
}

// ========== Flag behaviour ==========

#[test]
fn test_sbc_binary_no_borrow() {
    let mut cpu = setup_cpu();
    memory::load(cpu.memory_mut(), 0x8000, &[0xE9, 0x10]);
    cpu.state_mut().a = 0x50;
    cpu.state_mut().p.set_carry(true);

    cpu.step().unwrap();

    assert_eq!(cpu.state().a, 0x40);
    assert!(cpu.state().p.carry());
    assert!(!cpu.state().p.zero());
    assert!(!cpu.state().p.negative());
}

#[test]
fn test_sbc_binary_borrow_out() {
    // 0x10 - 0x20 borrows and goes negative.
    let mut cpu = setup_cpu();
    memory::load(cpu.memory_mut(), 0x8000, &[0xE9, 0x20]);
    cpu.state_mut().a = 0x10;
    cpu.state_mut().p.set_carry(true);

    cpu.step().unwrap();

    assert_eq!(cpu.state().a, 0xF0);
    assert!(!cpu.state().p.carry());
    assert!(cpu.state().p.negative());
}

#[test]
fn test_sbc_incoming_borrow_subtracts_one_more() {
    let mut cpu = setup_cpu();
    memory::load(cpu.memory_mut(), 0x8000, &[0xE9, 0x10]);
    cpu.state_mut().a = 0x50;
    // Carry clear = borrow pending.

    cpu.step().unwrap();

    assert_eq!(cpu.state().a, 0x3F);
    assert!(cpu.state().p.carry());
}

#[test]
fn test_sbc_signed_overflow() {
    // 0x80 - 0x01 = 0x7F: negative minus positive gave positive.
    let mut cpu = setup_cpu();
    memory::load(cpu.memory_mut(), 0x8000, &[0xE9, 0x01]);
    cpu.state_mut().a = 0x80;
    cpu.state_mut().p.set_carry(true);

    cpu.step().unwrap();

    assert_eq!(cpu.state().a, 0x7F);
    assert!(cpu.state().p.overflow());
    assert!(!cpu.state().p.negative());
}

// ========== Exhaustive laws ==========

#[test]
fn test_sbc_binary_flag_laws_exhaustive() {
    let mut cpu = setup_cpu();

    for a in 0..=255u8 {
        for value in 0..=255u8 {
            for carry_in in 0..=1u8 {
                cpu.memory_mut().write(0x8000, 0xE9);
                cpu.memory_mut().write(0x8001, value);
                {
                    let state = cpu.state_mut();
                    state.pc = 0x8000;
                    state.a = a;
                    state.p = Status::default();
                    state.p.set_carry(carry_in == 1);
                }

                cpu.step().unwrap();

                let complement = value ^ 0xFF;
                let raw = u16::from(a) + u16::from(complement) + u16::from(carry_in);
                let result = (raw & 0xFF) as u8;
                let p = cpu.state().p;

                assert_eq!(cpu.state().a, result, "A for {a:02X}-{value:02X} cin={carry_in}");
                assert_eq!(p.carry(), raw >= 0x100, "C for {a:02X}-{value:02X} cin={carry_in}");
                assert_eq!(p.zero(), result == 0, "Z for {a:02X}-{value:02X} cin={carry_in}");
                assert_eq!(
                    p.negative(),
                    result & 0x80 != 0,
                    "N for {a:02X}-{value:02X} cin={carry_in}"
                );

                let signed_overflow = (a ^ result) & (complement ^ result) & 0x80 != 0;
                assert_eq!(
                    p.overflow(),
                    signed_overflow,
                    "V for {a:02X}-{value:02X} cin={carry_in}"
                );
            }
        }
    }
}

#[test]
fn test_sbc_decimal_law_exhaustive() {
    // Every valid packed-BCD pair, both carry-ins: the result is the
    // decimal difference modulo 100 with C as the no-borrow indicator.
    // N and Z follow their binary definitions on the final byte; V is
    // left unconstrained in decimal mode.
    let mut cpu = setup_cpu();

    for a in 0..=99u8 {
        for value in 0..=99u8 {
            for carry_in in 0..=1u8 {
                cpu.memory_mut().write(0x8000, 0xE9);
                cpu.memory_mut().write(0x8001, bcd::encode(value));
                {
                    let state = cpu.state_mut();
                    state.pc = 0x8000;
                    state.a = bcd::encode(a);
                    state.p = Status::default();
                    state.p.set_decimal(true);
                    state.p.set_carry(carry_in == 1);
                }

                cpu.step().unwrap();

                let borrow_in = 1 - i16::from(carry_in);
                let difference = i16::from(a) - i16::from(value) - borrow_in;
                let expected = bcd::encode(difference.rem_euclid(100) as u8);
                let p = cpu.state().p;

                assert_eq!(cpu.state().a, expected, "A for {a}-{value} cin={carry_in} (BCD)");
                assert_eq!(
                    p.carry(),
                    difference >= 0,
                    "C for {a}-{value} cin={carry_in} (BCD)"
                );
                assert_eq!(
                    p.zero(),
                    expected == 0,
                    "Z for {a}-{value} cin={carry_in} (BCD)"
                );
                assert_eq!(
                    p.negative(),
                    expected & 0x80 != 0,
                    "N for {a}-{value} cin={carry_in} (BCD)"
                );
            }
        }
    }
}
