//! Tests for INC/DEC on memory and INX/DEX/INY/DEY on registers.

use core6502::{memory, nmos, Cpu, FlatMemory, MemoryBus};

fn setup_cpu() -> Cpu<FlatMemory> {
    let mut mem = FlatMemory::new();
    memory::write_reset_vector(&mut mem, 0x8000);
    let mut cpu = nmos::cpu_6502(mem).unwrap();
    cpu.reset();
    cpu
}

#[test]
fn test_inc_zero_page() {
    let mut cpu = setup_cpu();
    memory::load(cpu.memory_mut(), 0x8000, &[0xE6, 0x10]); // INC $10
    cpu.memory_mut().write(0x0010, 0x41);

    let cycles = cpu.step().unwrap();

    assert_eq!(cycles, 5);
    assert_eq!(cpu.memory().read(0x0010), 0x42);
    assert!(!cpu.state().p.zero());
    assert!(!cpu.state().p.negative());
}

#[test]
fn test_inc_wraps_to_zero() {
    let mut cpu = setup_cpu();
    memory::load(cpu.memory_mut(), 0x8000, &[0xE6, 0x10]);
    cpu.memory_mut().write(0x0010, 0xFF);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0010), 0x00);
    assert!(cpu.state().p.zero());
    assert!(!cpu.state().p.negative());
}

#[test]
fn test_dec_wraps_to_ff() {
    let mut cpu = setup_cpu();
    memory::load(cpu.memory_mut(), 0x8000, &[0xC6, 0x10]); // DEC $10
    cpu.memory_mut().write(0x0010, 0x00);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0010), 0xFF);
    assert!(!cpu.state().p.zero());
    assert!(cpu.state().p.negative());
}

#[test]
fn test_inc_dec_absolute_x_cycles() {
    // Read-modify-write never pays the page penalty: INC abs,X is a
    // flat 7 cycles whether or not the index crosses.
    let mut cpu = setup_cpu();
    memory::load(cpu.memory_mut(), 0x8000, &[0xFE, 0xFF, 0x10, 0xDE, 0x00, 0x20]);
    cpu.state_mut().x = 0x01;

    assert_eq!(cpu.step().unwrap(), 7); // INC $10FF,X crosses
    assert_eq!(cpu.memory().read(0x1100), 0x01);

    assert_eq!(cpu.step().unwrap(), 7); // DEC $2000,X does not
    assert_eq!(cpu.memory().read(0x2001), 0xFF);
}

#[test]
fn test_register_increments_and_wraps() {
    let mut cpu = setup_cpu();
    memory::load(cpu.memory_mut(), 0x8000, &[0xE8, 0xC8, 0xCA, 0x88]); // INX INY DEX DEY
    cpu.state_mut().x = 0xFF;
    cpu.state_mut().y = 0x7F;

    let cycles = cpu.step().unwrap(); // INX: FF -> 00
    assert_eq!(cycles, 2);
    assert_eq!(cpu.state().x, 0x00);
    assert!(cpu.state().p.zero());

    cpu.step().unwrap(); // INY: 7F -> 80
    assert_eq!(cpu.state().y, 0x80);
    assert!(cpu.state().p.negative());

    cpu.step().unwrap(); // DEX: 00 -> FF
    assert_eq!(cpu.state().x, 0xFF);
    assert!(cpu.state().p.negative());

    cpu.step().unwrap(); // DEY: 80 -> 7F
    assert_eq!(cpu.state().y, 0x7F);
    assert!(!cpu.state().p.negative());
    assert!(!cpu.state().p.zero());
}
