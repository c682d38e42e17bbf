//! Tests for ASL, LSR, ROL and ROR, on the accumulator and on memory.

use core6502::{memory, nmos, Cpu, FlatMemory, MemoryBus};

fn setup_cpu() -> Cpu<FlatMemory> {
    let mut mem = FlatMemory::new();
    memory::write_reset_vector(&mut mem, 0x8000);
    let mut cpu = nmos::cpu_6502(mem).unwrap();
    cpu.reset();
    cpu
}

#[test]
fn test_asl_accumulator() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x0A); // ASL A
    cpu.state_mut().a = 0x81;

    let cycles = cpu.step().unwrap();

    assert_eq!(cycles, 2);
    assert_eq!(cpu.state().a, 0x02);
    assert!(cpu.state().p.carry(), "old bit 7 lands in carry");
    assert!(!cpu.state().p.negative());
    assert!(!cpu.state().p.zero());
}

#[test]
fn test_asl_memory_writes_back() {
    let mut cpu = setup_cpu();
    memory::load(cpu.memory_mut(), 0x8000, &[0x06, 0x10]); // ASL $10
    cpu.memory_mut().write(0x0010, 0x40);

    let cycles = cpu.step().unwrap();

    assert_eq!(cycles, 5);
    assert_eq!(cpu.memory().read(0x0010), 0x80);
    assert!(cpu.state().p.negative());
    assert!(!cpu.state().p.carry());
}

#[test]
fn test_asl_to_zero() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x0A);
    cpu.state_mut().a = 0x80;

    cpu.step().unwrap();

    assert_eq!(cpu.state().a, 0x00);
    assert!(cpu.state().p.carry());
    assert!(cpu.state().p.zero());
}

#[test]
fn test_lsr_shifts_into_carry() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x4A); // LSR A
    cpu.state_mut().a = 0x01;
    cpu.state_mut().p.set_negative(true);

    cpu.step().unwrap();

    assert_eq!(cpu.state().a, 0x00);
    assert!(cpu.state().p.carry());
    assert!(cpu.state().p.zero());
    assert!(!cpu.state().p.negative(), "LSR never sets N");
}

#[test]
fn test_lsr_memory() {
    let mut cpu = setup_cpu();
    memory::load(cpu.memory_mut(), 0x8000, &[0x46, 0x10]); // LSR $10
    cpu.memory_mut().write(0x0010, 0xFE);

    let cycles = cpu.step().unwrap();

    assert_eq!(cycles, 5);
    assert_eq!(cpu.memory().read(0x0010), 0x7F);
    assert!(!cpu.state().p.carry());
}

#[test]
fn test_rol_through_carry() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x2A); // ROL A
    cpu.state_mut().a = 0x80;
    cpu.state_mut().p.set_carry(true);

    cpu.step().unwrap();

    // Old carry entered bit 0; old bit 7 became the carry.
    assert_eq!(cpu.state().a, 0x01);
    assert!(cpu.state().p.carry());
}

#[test]
fn test_rol_without_carry_in() {
    let mut cpu = setup_cpu();
    memory::load(cpu.memory_mut(), 0x8000, &[0x26, 0x10]); // ROL $10
    cpu.memory_mut().write(0x0010, 0x40);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0010), 0x80);
    assert!(!cpu.state().p.carry());
    assert!(cpu.state().p.negative());
}

#[test]
fn test_ror_through_carry() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x6A); // ROR A
    cpu.state_mut().a = 0x01;
    cpu.state_mut().p.set_carry(true);

    cpu.step().unwrap();

    // Old carry entered bit 7; old bit 0 became the carry.
    assert_eq!(cpu.state().a, 0x80);
    assert!(cpu.state().p.carry());
    assert!(cpu.state().p.negative());
}

#[test]
fn test_ror_memory_no_carry() {
    let mut cpu = setup_cpu();
    memory::load(cpu.memory_mut(), 0x8000, &[0x66, 0x10]); // ROR $10
    cpu.memory_mut().write(0x0010, 0x02);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0010), 0x01);
    assert!(!cpu.state().p.carry());
}

#[test]
fn test_rmw_absolute_x_cycles() {
    // Shift read-modify-writes on abs,X are a flat 7 cycles.
    let mut cpu = setup_cpu();
    memory::load(cpu.memory_mut(), 0x8000, &[0x1E, 0xFF, 0x10]); // ASL $10FF,X
    cpu.state_mut().x = 0x01;
    cpu.memory_mut().write(0x1100, 0x01);

    let cycles = cpu.step().unwrap();

    assert_eq!(cycles, 7);
    assert_eq!(cpu.memory().read(0x1100), 0x02);
}

#[test]
fn test_rol_ror_round_trip() {
    // Rotating left then right through the carry restores A and C.
    let mut cpu = setup_cpu();
    memory::load(cpu.memory_mut(), 0x8000, &[0x2A, 0x6A]); // ROL A; ROR A
    cpu.state_mut().a = 0xA5;
    cpu.state_mut().p.set_carry(true);

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.state().a, 0xA5);
    assert!(cpu.state().p.carry());
}
