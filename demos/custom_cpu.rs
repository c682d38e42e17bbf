//! A custom processor variant built on the core: a 6502 with an extra
//! 16-bit register.
//!
//! A variant is just a different instruction list. This one starts from
//! the documented table, maps every undocumented opcode to NOP with
//! `fill` (so stray bytes execute as no-ops instead of faulting), and
//! wraps the core CPU in a struct carrying the wide register.
//!
//! Run with `cargo run --example custom_cpu`.

use core6502::{addressing, memory, Cpu, ExecutionError, FlatMemory, InstructionSet, MemoryBus, NMOS_6502};

/// A 6502 with a 16-bit B register latched from A (high byte) and X
/// (low byte).
struct BRegisterCpu<M: MemoryBus> {
    core: Cpu<M>,
    b: u16,
}

impl<M: MemoryBus> BRegisterCpu<M> {
    fn new(memory: M) -> Result<Self, ExecutionError> {
        let mut set = InstructionSet::from_specs(NMOS_6502)?;

        // This part treats undocumented opcodes as no-ops.
        let nop = *set.get(0xEA)?;
        set.fill(nop);

        Ok(Self {
            core: Cpu::new(set, memory),
            b: 0,
        })
    }

    /// Latches A into the high byte and X into the low byte of B.
    fn latch_b(&mut self) {
        let state = self.core.state();
        self.b = addressing::make_address(state.x, state.a);
    }
}

fn main() -> Result<(), ExecutionError> {
    let mut mem = FlatMemory::new();
    memory::write_reset_vector(&mut mem, 0x8000);
    memory::load(
        &mut mem,
        0x8000,
        &[
            0xA9, 0x12, // LDA #$12
            0xA2, 0x34, // LDX #$34
            0x02, // undocumented; filled as NOP on this part
        ],
    );

    let mut cpu = BRegisterCpu::new(mem)?;
    cpu.core.reset();
    cpu.core.run_for(6)?;
    cpu.latch_b();

    println!("State: {}", cpu.core.state());
    println!("B: 0x{:04X}", cpu.b);
    println!("Opcodes mapped: {}", cpu.core.opcodes().len());

    assert_eq!(cpu.b, 0x1234);
    Ok(())
}
