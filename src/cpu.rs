//! # CPU State and Execution
//!
//! This module contains the register snapshot ([`State`]) and the CPU
//! driver ([`Cpu`]) that owns a snapshot, a memory bus and an immutable
//! instruction set, and sequences fetch-decode-execute.
//!
//! ## Execution Model
//!
//! - `step()`: execute one instruction
//! - `run_for()`: execute until a cycle budget is exhausted
//! - `trigger_irq()` / `trigger_nmi()`: inject hardware interrupts
//!   between instructions
//!
//! The snapshot moves by value: each instruction receives a copy and the
//! driver commits the returned copy only when the whole instruction has
//! executed, so a failed step never leaves half-applied register state.

use std::fmt;

use crate::instructions::control;
use crate::memory::{self, MemoryBus};
use crate::opcodes::InstructionSet;
use crate::status::Status;
use crate::ExecutionError;

/// The value the stack pointer holds after reset.
pub const STACK_POINTER_START: u8 = 0xFD;

/// The complete register state of the CPU at one point in time.
///
/// A plain value: operations take a copy and return a new one, and the
/// driver swaps its own snapshot only on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct State {
    /// Program counter.
    pub pc: u16,
    /// Stack pointer; the stack lives at `0x0100 + sp` and grows down.
    pub sp: u8,
    /// Accumulator.
    pub a: u8,
    /// X index register.
    pub x: u8,
    /// Y index register.
    pub y: u8,
    /// Status register.
    pub p: Status,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PC: 0x{:04X}, SP: 0x{:02X}, A: 0x{:02X}, X: 0x{:02X}, Y: 0x{:02X}, P: {}",
            self.pc, self.sp, self.a, self.x, self.y, self.p
        )
    }
}

/// A 6502-family CPU: a register snapshot, a memory bus and an
/// instruction set.
///
/// The instruction set decides which processor this is — see
/// [`crate::nmos`] for the stock 6502 and 65C02 builders, or build a
/// custom set for a variant.
///
/// # Examples
///
/// ```
/// use core6502::{memory, nmos, FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// memory::write_reset_vector(&mut mem, 0x8000);
/// memory::load(&mut mem, 0x8000, &[0xA9, 0x42]); // LDA #$42
///
/// let mut cpu = nmos::cpu_6502(mem)?;
/// cpu.reset();
///
/// let cycles = cpu.step()?;
/// assert_eq!(cycles, 2);
/// assert_eq!(cpu.state().a, 0x42);
/// assert_eq!(cpu.state().pc, 0x8002);
/// # Ok::<(), core6502::ExecutionError>(())
/// ```
pub struct Cpu<M: MemoryBus> {
    state: State,
    memory: M,
    instructions: InstructionSet,

    /// Total cycles executed since construction.
    cycles: u64,
}

impl<M: MemoryBus> Cpu<M> {
    /// Creates a CPU with the given instruction set and memory.
    ///
    /// All registers start at zero; call [`Cpu::reset`] to load the
    /// reset vector and set up the stack pointer before executing.
    pub fn new(instructions: InstructionSet, memory: M) -> Self {
        Self {
            state: State::default(),
            memory,
            instructions,
            cycles: 0,
        }
    }

    /// Resets the CPU: the program counter is loaded from the reset
    /// vector at `$FFFC`/`$FFFD`, the stack pointer is set to `$FD`,
    /// A, X and Y are cleared, and the status is cleared except for the
    /// interrupt-disable flag, which the 6502 sets at reset.
    pub fn reset(&mut self) {
        let start = memory::read_reset_vector(&self.memory);

        let mut p = Status::default();
        p.set_interrupt(true);

        self.state = State {
            pc: start,
            sp: STACK_POINTER_START,
            p,
            ..State::default()
        };
    }

    /// Executes a single instruction and returns the cycles it took,
    /// including the opcode fetch cycle.
    ///
    /// The opcode is fetched at `pc` and the program counter advanced
    /// past it before lookup, so execution always makes progress. On
    /// success the new register snapshot is committed; on error no
    /// instruction state changes are applied.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::OpcodeNotInSet`] when the fetched
    /// opcode has no instruction. The cycle counter still advances by
    /// one (the fetch), so [`Cpu::run_for`] callers that ignore the
    /// error cannot spin for free.
    pub fn step(&mut self) -> Result<u32, ExecutionError> {
        let opcode = self.memory.read(self.state.pc);
        self.state.pc = self.state.pc.wrapping_add(1);

        let instruction = match self.instructions.get(opcode) {
            Ok(instruction) => *instruction,
            Err(error) => {
                self.cycles += 1;
                return Err(error);
            }
        };

        let (new_state, cycles) = instruction.execute(self.state, &mut self.memory);
        let cycles = cycles + 1;

        self.state = new_state;
        self.cycles += u64::from(cycles);

        Ok(cycles)
    }

    /// Runs instructions until at least `cycles` cycles have elapsed,
    /// returning the cycles actually executed (the last instruction may
    /// overshoot the budget). A budget of zero means "run unbounded",
    /// i.e. until an error stops execution.
    ///
    /// # Errors
    ///
    /// Stops at the first [`Cpu::step`] error. Execution up to the
    /// failing instruction is preserved and remains observable through
    /// [`Cpu::state`] and [`Cpu::cycles`].
    pub fn run_for(&mut self, cycles: u64) -> Result<u64, ExecutionError> {
        let budget = if cycles == 0 { u64::MAX } else { cycles };
        let mut elapsed = 0u64;

        while elapsed < budget {
            elapsed += u64::from(self.step()?);
        }

        Ok(elapsed)
    }

    /// Triggers a maskable hardware interrupt.
    ///
    /// Does nothing when the interrupt-disable flag is set. Otherwise
    /// the current program counter and the status (with Break clear) are
    /// pushed, the interrupt-disable flag is set and the program counter
    /// is loaded from the IRQ vector at `$FFFE`/`$FFFF`. No instructions
    /// are executed.
    pub fn trigger_irq(&mut self) {
        if self.state.p.interrupt() {
            return;
        }
        self.state = control::interrupt(self.state, &mut self.memory);
    }

    /// Triggers a non-maskable interrupt, unconditionally.
    ///
    /// The current program counter and the status (with Break clear) are
    /// pushed, the interrupt-disable flag is set and the program counter
    /// is loaded from the NMI vector at `$FFFA`/`$FFFB`.
    pub fn trigger_nmi(&mut self) {
        self.state = control::non_maskable_interrupt(self.state, &mut self.memory);
    }

    /// All opcodes in the CPU's instruction set, ascending.
    pub fn opcodes(&self) -> Vec<u8> {
        self.instructions.opcodes()
    }

    /// The current register snapshot.
    pub fn state(&self) -> State {
        self.state
    }

    /// Mutable access to the register snapshot, for tests and embedders
    /// that poke registers directly.
    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// Shared access to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutable access to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Total cycles executed since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::FlatMemory;
    use crate::nmos;

    fn cpu_with_program(program: &[u8]) -> Cpu<FlatMemory> {
        let mut mem = FlatMemory::new();
        memory::write_reset_vector(&mut mem, 0x8000);
        memory::load(&mut mem, 0x8000, program);

        let mut cpu = nmos::cpu_6502(mem).unwrap();
        cpu.reset();
        cpu
    }

    #[test]
    fn test_reset_state() {
        let cpu = cpu_with_program(&[]);
        let state = cpu.state();

        assert_eq!(state.pc, 0x8000);
        assert_eq!(state.sp, STACK_POINTER_START);
        assert_eq!(state.a, 0x00);
        assert_eq!(state.x, 0x00);
        assert_eq!(state.y, 0x00);
        assert!(state.p.interrupt());
        assert_eq!(state.p.bits(), Status::INTERRUPT);
    }

    #[test]
    fn test_step_commits_state_and_counts_cycles() {
        let mut cpu = cpu_with_program(&[0xEA, 0xEA]); // NOP, NOP

        assert_eq!(cpu.step().unwrap(), 2);
        assert_eq!(cpu.state().pc, 0x8001);
        assert_eq!(cpu.cycles(), 2);

        assert_eq!(cpu.step().unwrap(), 2);
        assert_eq!(cpu.cycles(), 4);
    }

    #[test]
    fn test_step_unknown_opcode_costs_one_cycle() {
        let mut cpu = cpu_with_program(&[0x02]); // undocumented

        assert_eq!(cpu.step().unwrap_err(), ExecutionError::OpcodeNotInSet(0x02));
        // PC moved past the opcode so execution can continue.
        assert_eq!(cpu.state().pc, 0x8001);
        assert_eq!(cpu.cycles(), 1);
    }

    #[test]
    fn test_run_for_executes_to_budget() {
        let mut cpu = cpu_with_program(&[0xEA; 16]);

        // 5 NOPs at 2 cycles each to cover a 10-cycle budget.
        assert_eq!(cpu.run_for(10).unwrap(), 10);
        assert_eq!(cpu.state().pc, 0x8005);
    }

    #[test]
    fn test_run_for_zero_runs_until_error() {
        let mut cpu = cpu_with_program(&[0xEA, 0xEA, 0x02]);

        let error = cpu.run_for(0).unwrap_err();
        assert_eq!(error, ExecutionError::OpcodeNotInSet(0x02));
        assert_eq!(cpu.cycles(), 5); // two NOPs plus the failed fetch
    }

    #[test]
    fn test_state_display() {
        let mut cpu = cpu_with_program(&[]);
        cpu.state_mut().a = 0xAB;

        assert_eq!(
            cpu.state().to_string(),
            "PC: 0x8000, SP: 0xFD, A: 0xAB, X: 0x00, Y: 0x00, P: n v - b d I z c"
        );
    }
}
