//! Tests for JMP, absolute and indirect, including the page-wrap bug.

use core6502::{memory, nmos, Cpu, FlatMemory, MemoryBus};

fn setup_cpu() -> Cpu<FlatMemory> {
    let mut mem = FlatMemory::new();
    memory::write_reset_vector(&mut mem, 0x8000);
    let mut cpu = nmos::cpu_6502(mem).unwrap();
    cpu.reset();
    cpu
}

#[test]
fn test_jmp_absolute() {
    let mut cpu = setup_cpu();
    memory::load(cpu.memory_mut(), 0x8000, &[0x4C, 0x34, 0x12]); // JMP $1234

    let cycles = cpu.step().unwrap();

    assert_eq!(cycles, 3);
    assert_eq!(cpu.state().pc, 0x1234);
}

#[test]
fn test_jmp_indirect() {
    let mut cpu = setup_cpu();
    memory::load(cpu.memory_mut(), 0x8000, &[0x6C, 0x20, 0x30]); // JMP ($3020)
    cpu.memory_mut().write(0x3020, 0xCD);
    cpu.memory_mut().write(0x3021, 0xAB);

    let cycles = cpu.step().unwrap();

    assert_eq!(cycles, 5);
    assert_eq!(cpu.state().pc, 0xABCD);
}

#[test]
fn test_jmp_indirect_page_wrap_bug() {
    // A pointer at $00FF takes its high byte from $0000, not $0100.
    let mut cpu = setup_cpu();
    memory::load(cpu.memory_mut(), 0x8000, &[0x6C, 0xFF, 0x00]); // JMP ($00FF)
    cpu.memory_mut().write(0x00FF, 0x80);
    cpu.memory_mut().write(0x0000, 0xFF);
    cpu.memory_mut().write(0x0100, 0x55); // what a fixed CPU would read

    cpu.step().unwrap();

    assert_eq!(cpu.state().pc, 0xFF80);
}

#[test]
fn test_jmp_indirect_page_wrap_bug_high_page() {
    // Same bug away from the zero page: ($01FF) reads its high byte
    // from $0100.
    let mut cpu = setup_cpu();
    memory::load(cpu.memory_mut(), 0x8000, &[0x6C, 0xFF, 0x01]);
    cpu.memory_mut().write(0x01FF, 0x11);
    cpu.memory_mut().write(0x0100, 0x47);
    cpu.memory_mut().write(0x0200, 0x99);

    cpu.step().unwrap();

    assert_eq!(cpu.state().pc, 0x4711);
}

#[test]
fn test_jmp_tight_loop() {
    // JMP * is the classic halt idiom; each pass costs 3 cycles.
    let mut cpu = setup_cpu();
    memory::load(cpu.memory_mut(), 0x8000, &[0x4C, 0x00, 0x80]);

    for _ in 0..4 {
        assert_eq!(cpu.step().unwrap(), 3);
        assert_eq!(cpu.state().pc, 0x8000);
    }
}
