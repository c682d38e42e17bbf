//! # Stock CPU Builders
//!
//! Convenience constructors for the shipped processor variants. A
//! variant is nothing more than an instruction set: these builders pair
//! the documented opcode table with a [`Cpu`], and custom processors do
//! the same with their own list (see the `custom_cpu` example).

use crate::cpu::Cpu;
use crate::memory::MemoryBus;
use crate::opcodes::{InstructionSet, NMOS_6502};
use crate::ExecutionError;

/// Builds the instruction set of the NMOS 6502: the 151 documented
/// opcodes.
pub fn instruction_set_6502() -> Result<InstructionSet, ExecutionError> {
    InstructionSet::from_specs(NMOS_6502)
}

/// Builds the 65C02 instruction set.
///
/// Cascades from the 6502 set. The 65C02's extended opcodes (PHX, STZ,
/// BRA and friends) are undocumented-NMOS territory for this crate and
/// are not included.
pub fn instruction_set_65c02() -> Result<InstructionSet, ExecutionError> {
    instruction_set_6502()
}

/// Returns a CPU with the standard 6502 instruction set.
///
/// Call [`Cpu::reset`] on the result before executing.
///
/// # Examples
///
/// ```
/// use core6502::{memory, nmos, FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// memory::write_reset_vector(&mut mem, 0x0400);
///
/// let mut cpu = nmos::cpu_6502(mem)?;
/// cpu.reset();
/// assert_eq!(cpu.state().pc, 0x0400);
/// assert_eq!(cpu.opcodes().len(), 151);
/// # Ok::<(), core6502::ExecutionError>(())
/// ```
pub fn cpu_6502<M: MemoryBus>(memory: M) -> Result<Cpu<M>, ExecutionError> {
    Ok(Cpu::new(instruction_set_6502()?, memory))
}

/// Returns a CPU with the standard 65C02 instruction set.
pub fn cpu_65c02<M: MemoryBus>(memory: M) -> Result<Cpu<M>, ExecutionError> {
    Ok(Cpu::new(instruction_set_65c02()?, memory))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::FlatMemory;

    #[test]
    fn test_6502_set_covers_documented_opcodes() {
        let set = instruction_set_6502().unwrap();
        assert_eq!(set.len(), 151);

        // A few landmarks.
        assert!(set.get(0x00).is_ok()); // BRK
        assert!(set.get(0xEA).is_ok()); // NOP
        assert!(set.get(0xA9).is_ok()); // LDA #
        assert!(set.get(0xFF).is_err());
    }

    #[test]
    fn test_65c02_cascades_from_6502() {
        let base = instruction_set_6502().unwrap();
        let extended = instruction_set_65c02().unwrap();
        assert_eq!(base.opcodes(), extended.opcodes());
    }

    #[test]
    fn test_cpu_builders() {
        let cpu = cpu_6502(FlatMemory::new()).unwrap();
        assert_eq!(cpu.opcodes().len(), 151);

        let cpu = cpu_65c02(FlatMemory::new()).unwrap();
        assert_eq!(cpu.opcodes().len(), 151);
    }
}
