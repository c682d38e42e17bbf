//! # Instruction Records and the NMOS 6502 Opcode Table
//!
//! This module is the single source of truth for instruction metadata:
//! the [`OpcodeSpec`] records that pair an opcode with its operation,
//! addressing mode and cycle adjustment, the composed [`Instruction`]
//! form the CPU executes, the [`InstructionSet`] lookup table, and the
//! static [`NMOS_6502`] table of all 151 documented opcodes.
//!
//! ## Cycle composition
//!
//! An instruction's stored cycle count is composed from its parts:
//!
//! ```text
//! cycles = operation.base_cycles - 1 + mode.base_cycles + cycle_adjust
//! ```
//!
//! The `- 1` accounts for the cycle the CPU spends fetching the opcode,
//! which the driver adds back per executed instruction. An instruction is
//! subject to the page-boundary penalty only when both its operation and
//! its addressing mode are page-sensitive.
//!
//! Cycle reference data from:
//! - <http://www.6502.org/tutorials/6502opcodes.html>
//! - <https://www.masswerk.at/6502/6502_instruction_set.html>

use std::collections::BTreeMap;
use std::fmt;

use crate::addressing::AddressingMode;
use crate::cpu::State;
use crate::instructions::Operation;
use crate::memory::MemoryBus;
use crate::ExecutionError;

/// Static description of one opcode: which operation it performs, how it
/// addresses its operand, and a small cycle adjustment applied on top of
/// the composed base cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeSpec {
    pub opcode: u8,
    pub operation: Operation,
    pub mode: AddressingMode,
    pub cycle_adjust: i8,
}

/// A single executable CPU instruction, composed from an [`OpcodeSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: u8,
    pub operation: Operation,
    pub mode: AddressingMode,

    /// Baseline cycles this instruction requires over and above the one
    /// cycle the CPU spends fetching the opcode.
    pub cycles: u32,

    /// True when the instruction takes an extra cycle if addressing
    /// crosses a page boundary.
    pub page_penalty: bool,
}

impl Instruction {
    /// Composes an instruction from a spec record, combining the cycle
    /// shares of its operation and addressing mode.
    pub fn from_spec(spec: OpcodeSpec) -> Self {
        let cycles = spec.operation.base_cycles() as i32 - 1
            + spec.mode.base_cycles() as i32
            + i32::from(spec.cycle_adjust);

        Instruction {
            opcode: spec.opcode,
            operation: spec.operation,
            mode: spec.mode,
            cycles: cycles.max(0) as u32,
            page_penalty: spec.operation.page_sensitive() && spec.mode.page_sensitive(),
        }
    }

    /// Executes this instruction against a register snapshot whose `pc`
    /// points at the byte after the opcode.
    ///
    /// Resolves the addressing mode, charges the page-boundary or branch
    /// penalties, advances the snapshot's `pc` past the operand bytes and
    /// runs the operation. Returns the new snapshot and the cycles taken,
    /// excluding the opcode fetch cycle the driver accounts for.
    pub fn execute<M: MemoryBus>(&self, mut state: State, memory: &mut M) -> (State, u32) {
        let operand = self.mode.resolve(&state, memory);

        let mut cycles = self.cycles;
        if self.page_penalty && operand.page_crossed {
            cycles += 1;
        }

        state.pc = state.pc.wrapping_add(operand.pc_advance);

        // Taken branches cost one extra cycle, two when the target is on
        // a different page from the next instruction.
        if self.operation.branch_condition(state.p) == Some(true) {
            cycles += 1;
            if operand.page_crossed {
                cycles += 1;
            }
        }

        (self.operation.execute(state, &operand, memory), cycles)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Opcode: ${:02X} {}, Cycles: {}, PBP: {}",
            self.opcode,
            self.operation.mnemonic(),
            self.cycles,
            self.page_penalty
        )
    }
}

/// An opcode-indexed table of instructions.
///
/// Built once from a list of instructions and immutable during
/// execution. Lookup of an unmapped opcode is an error, not undefined
/// behaviour — the NMOS 6502's undocumented opcodes are out of scope.
///
/// # Examples
///
/// ```
/// use core6502::{Instruction, InstructionSet, NMOS_6502};
///
/// let set = InstructionSet::new(NMOS_6502.iter().copied().map(Instruction::from_spec))
///     .expect("the 6502 table is not empty");
/// assert_eq!(set.opcodes().len(), 151);
/// assert!(set.get(0xEA).is_ok()); // NOP
/// assert!(set.get(0x02).is_err()); // undocumented
/// ```
#[derive(Debug)]
pub struct InstructionSet {
    instructions: BTreeMap<u8, Instruction>,
}

impl InstructionSet {
    /// Builds an instruction set from a list of instructions. Later
    /// entries replace earlier ones with the same opcode.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::EmptyInstructionSet`] if the list holds
    /// no instructions.
    pub fn new<I>(instructions: I) -> Result<Self, ExecutionError>
    where
        I: IntoIterator<Item = Instruction>,
    {
        let instructions: BTreeMap<u8, Instruction> = instructions
            .into_iter()
            .map(|instruction| (instruction.opcode, instruction))
            .collect();

        if instructions.is_empty() {
            return Err(ExecutionError::EmptyInstructionSet);
        }

        Ok(Self { instructions })
    }

    /// Builds an instruction set straight from spec records.
    pub fn from_specs(specs: &[OpcodeSpec]) -> Result<Self, ExecutionError> {
        Self::new(specs.iter().copied().map(Instruction::from_spec))
    }

    /// Looks up the instruction for an opcode.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::OpcodeNotInSet`] for unmapped opcodes.
    pub fn get(&self, opcode: u8) -> Result<&Instruction, ExecutionError> {
        self.instructions
            .get(&opcode)
            .ok_or(ExecutionError::OpcodeNotInSet(opcode))
    }

    /// Adds an instruction, replacing any existing mapping for its
    /// opcode. This is how variant CPUs extend or override the base set.
    pub fn insert(&mut self, instruction: Instruction) {
        self.instructions.insert(instruction.opcode, instruction);
    }

    /// Maps every opcode that has no instruction yet to `template`, with
    /// the template's opcode replaced by the one it fills.
    ///
    /// Useful for variants that want undocumented opcodes to act as NOPs
    /// or traps instead of lookup errors.
    pub fn fill(&mut self, template: Instruction) {
        for opcode in 0..=0xFF {
            self.instructions.entry(opcode).or_insert(Instruction {
                opcode,
                ..template
            });
        }
    }

    /// All mapped opcodes in ascending order.
    pub fn opcodes(&self) -> Vec<u8> {
        self.instructions.keys().copied().collect()
    }

    /// The number of mapped opcodes.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// True if no opcodes are mapped. Unreachable through the public
    /// constructors, which reject empty sets.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

const fn spec(opcode: u8, operation: Operation, mode: AddressingMode, cycle_adjust: i8) -> OpcodeSpec {
    OpcodeSpec {
        opcode,
        operation,
        mode,
        cycle_adjust,
    }
}

use crate::addressing::AddressingMode::{
    Absolute, AbsoluteX, AbsoluteY, Accumulator, Immediate, Implied, Indirect, IndirectX,
    IndirectY, Relative, ZeroPage, ZeroPageX, ZeroPageY,
};
use crate::instructions::Operation::*;

/// The 151 documented opcodes of the NMOS 6502.
///
/// Undocumented opcodes are deliberately absent; executing one through a
/// set built from this table yields [`ExecutionError::OpcodeNotInSet`].
pub const NMOS_6502: &[OpcodeSpec] = &[
    /*
       ADC
       addressing    assembler      opc  bytes  cycles
       (indirect,X)  ADC ($FF,X)    61    2      6
       zeropage      ADC $FF        65    2      3
       immediate     ADC #$FF       69    2      2
       absolute      ADC $FFFF      6D    3      4
       (indirect),Y  ADC ($FF),Y    71    2      5*
       zeropage,X    ADC $FF,X      75    2      4
       absolute,Y    ADC $FFFF,Y    79    3      4*
       absolute,X    ADC $FFFF,X    7D    3      4*
    */
    spec(0x61, Adc, IndirectX, 0),
    spec(0x65, Adc, ZeroPage, 0),
    spec(0x69, Adc, Immediate, 0),
    spec(0x6D, Adc, Absolute, 0),
    spec(0x71, Adc, IndirectY, 0),
    spec(0x75, Adc, ZeroPageX, 0),
    spec(0x79, Adc, AbsoluteY, 0),
    spec(0x7D, Adc, AbsoluteX, 0),
    /*
       AND
       addressing    assembler     opc  bytes  cycles
       (indirect,X)  AND ($FF,X)   21    2      6
       zeropage      AND $FF       25    2      3
       immediate     AND #$FF      29    2      2
       absolute      AND $FFFF     2D    3      4
       (indirect),Y  AND ($FF),Y   31    2      5*
       zeropage,X    AND $FF,X     35    2      4
       absolute,Y    AND $FFFF,Y   39    3      4*
       absolute,X    AND $FFFF,X   3D    3      4*
    */
    spec(0x21, And, IndirectX, 0),
    spec(0x25, And, ZeroPage, 0),
    spec(0x29, And, Immediate, 0),
    spec(0x2D, And, Absolute, 0),
    spec(0x31, And, IndirectY, 0),
    spec(0x35, And, ZeroPageX, 0),
    spec(0x39, And, AbsoluteY, 0),
    spec(0x3D, And, AbsoluteX, 0),
    /*
       ASL
       addressing   assembler    opc  bytes  cycles
       zeropage     ASL $FF      06    2      5
       accumulator  ASL A        0A    1      2
       absolute     ASL $FFFF    0E    3      6
       zeropage,X   ASL $FF,X    16    2      6
       absolute,X   ASL $FFFF,X  1E    3      7
    */
    spec(0x06, Asl, ZeroPage, 1),
    spec(0x0A, Asl, Accumulator, 0),
    spec(0x0E, Asl, Absolute, 1),
    spec(0x16, Asl, ZeroPageX, 1),
    spec(0x1E, Asl, AbsoluteX, 2),
    /*
       Branches: 2 cycles not taken, +1 taken, +1 more when the taken
       branch crosses a page (charged by the executor).

       BCC rel 90, BCS rel B0, BEQ rel F0, BMI rel 30,
       BNE rel D0, BPL rel 10, BVC rel 50, BVS rel 70
    */
    spec(0x90, Bcc, Relative, 0),
    spec(0xB0, Bcs, Relative, 0),
    spec(0xF0, Beq, Relative, 0),
    spec(0x30, Bmi, Relative, 0),
    spec(0xD0, Bne, Relative, 0),
    spec(0x10, Bpl, Relative, 0),
    spec(0x50, Bvc, Relative, 0),
    spec(0x70, Bvs, Relative, 0),
    /*
       BIT
       addressing  assembler  opc  bytes  cycles
       zeropage    BIT $FF    24   2      3
       absolute    BIT $FFFF  2C   3      4
    */
    spec(0x24, Bit, ZeroPage, 0),
    spec(0x2C, Bit, Absolute, 0),
    /*
       BRK
       addressing  assembler  opc  bytes  cycles
       implied     BRK        00   1      7
    */
    spec(0x00, Brk, Implied, 0),
    /*
       CLC 18, CLD D8, CLI 58, CLV B8: implied, 2 cycles
    */
    spec(0x18, Clc, Implied, 0),
    spec(0xD8, Cld, Implied, 0),
    spec(0x58, Cli, Implied, 0),
    spec(0xB8, Clv, Implied, 0),
    /*
       CMP
       addressing    assembler     opc  bytes  cycles
       (indirect,X)  CMP ($FF,X)   C1   2      6
       zeropage      CMP $FF       C5   2      3
       immediate     CMP #$FF      C9   2      2
       absolute      CMP $FFFF     CD   3      4
       (indirect),Y  CMP ($FF),Y   D1   2      5*
       zeropage,X    CMP $FF,X     D5   2      4
       absolute,Y    CMP $FFFF,Y   D9   3      4*
       absolute,X    CMP $FFFF,X   DD   3      4*
    */
    spec(0xC1, Cmp, IndirectX, 0),
    spec(0xC5, Cmp, ZeroPage, 0),
    spec(0xC9, Cmp, Immediate, 0),
    spec(0xCD, Cmp, Absolute, 0),
    spec(0xD1, Cmp, IndirectY, 0),
    spec(0xD5, Cmp, ZeroPageX, 0),
    spec(0xD9, Cmp, AbsoluteY, 0),
    spec(0xDD, Cmp, AbsoluteX, 0),
    /*
       CPX
       addressing  assembler  opc  bytes  cycles
       immediate   CPX #$FF   E0   2      2
       zeropage    CPX $FF    E4   2      3
       absolute    CPX $FFFF  EC   3      4
    */
    spec(0xE0, Cpx, Immediate, 0),
    spec(0xE4, Cpx, ZeroPage, 0),
    spec(0xEC, Cpx, Absolute, 0),
    /*
       CPY
       addressing  assembler  opc  bytes  cycles
       immediate   CPY #$FF   C0   2      2
       zeropage    CPY $FF    C4   2      3
       absolute    CPY $FFFF  CC   3      4
    */
    spec(0xC0, Cpy, Immediate, 0),
    spec(0xC4, Cpy, ZeroPage, 0),
    spec(0xCC, Cpy, Absolute, 0),
    /*
       DEC
       addressing  assembler    opc  bytes  cycles
       zeropage    DEC $FF      C6   2      5
       absolute    DEC $FFFF    CE   3      6
       zeropage,X  DEC $FF,X    D6   2      6
       absolute,X  DEC $FFFF,X  DE   3      7
    */
    spec(0xC6, Dec, ZeroPage, 0),
    spec(0xCE, Dec, Absolute, 0),
    spec(0xD6, Dec, ZeroPageX, 0),
    spec(0xDE, Dec, AbsoluteX, 1),
    /*
       DEX CA, DEY 88: implied, 2 cycles
    */
    spec(0xCA, Dex, Implied, 0),
    spec(0x88, Dey, Implied, 0),
    /*
       EOR
       addressing    assembler     opc  bytes  cycles
       (indirect,X)  EOR ($FF,X)   41   2      6
       zeropage      EOR $FF       45   2      3
       immediate     EOR #$FF      49   2      2
       absolute      EOR $FFFF     4D   3      4
       (indirect),Y  EOR ($FF),Y   51   2      5*
       zeropage,X    EOR $FF,X     55   2      4
       absolute,Y    EOR $FFFF,Y   59   3      4*
       absolute,X    EOR $FFFF,X   5D   3      4*
    */
    spec(0x41, Eor, IndirectX, 0),
    spec(0x45, Eor, ZeroPage, 0),
    spec(0x49, Eor, Immediate, 0),
    spec(0x4D, Eor, Absolute, 0),
    spec(0x51, Eor, IndirectY, 0),
    spec(0x55, Eor, ZeroPageX, 0),
    spec(0x59, Eor, AbsoluteY, 0),
    spec(0x5D, Eor, AbsoluteX, 0),
    /*
       INC
       addressing  assembler    opc  bytes  cycles
       zeropage    INC $FF      E6   2      5
       absolute    INC $FFFF    EE   3      6
       zeropage,X  INC $FF,X    F6   2      6
       absolute,X  INC $FFFF,X  FE   3      7
    */
    spec(0xE6, Inc, ZeroPage, 0),
    spec(0xEE, Inc, Absolute, 0),
    spec(0xF6, Inc, ZeroPageX, 0),
    spec(0xFE, Inc, AbsoluteX, 1),
    /*
       INX E8, INY C8: implied, 2 cycles
    */
    spec(0xE8, Inx, Implied, 0),
    spec(0xC8, Iny, Implied, 0),
    /*
       JMP
       addressing  assembler    opc  bytes  cycles
       absolute    JMP $FFFF    4C   3      3
       indirect    JMP ($FFFF)  6C   3      5
    */
    spec(0x4C, Jmp, Absolute, -1),
    spec(0x6C, Jmp, Indirect, 0),
    /*
       JSR
       addressing  assembler  opc  bytes  cycles
       absolute    JSR $FFFF  20   3      6
    */
    spec(0x20, Jsr, Absolute, 0),
    /*
       LDA
       addressing    assembler    opc  bytes  cycles
       (indirect,X)  LDA ($FF,X)  A1   2      6
       zeropage      LDA $FF      A5   2      3
       immediate     LDA #$FF     A9   2      2
       absolute      LDA $FFFF    AD   3      4
       (indirect),Y  LDA ($FF),Y  B1   2      5*
       zeropage,X    LDA $FF,X    B5   2      4
       absolute,Y    LDA $FFFF,Y  B9   3      4*
       absolute,X    LDA $FFFF,X  BD   3      4*
    */
    spec(0xA1, Lda, IndirectX, 0),
    spec(0xA5, Lda, ZeroPage, 0),
    spec(0xA9, Lda, Immediate, 0),
    spec(0xAD, Lda, Absolute, 0),
    spec(0xB1, Lda, IndirectY, 0),
    spec(0xB5, Lda, ZeroPageX, 0),
    spec(0xB9, Lda, AbsoluteY, 0),
    spec(0xBD, Lda, AbsoluteX, 0),
    /*
       LDX
       addressing  assembler    opc  bytes  cycles
       immediate   LDX #$FF     A2   2      2
       zeropage    LDX $FF      A6   2      3
       absolute    LDX $FFFF    AE   3      4
       zeropage,Y  LDX $FF,Y    B6   2      4
       absolute,Y  LDX $FFFF,Y  BE   3      4*
    */
    spec(0xA2, Ldx, Immediate, 0),
    spec(0xA6, Ldx, ZeroPage, 0),
    spec(0xAE, Ldx, Absolute, 0),
    spec(0xB6, Ldx, ZeroPageY, 0),
    spec(0xBE, Ldx, AbsoluteY, 0),
    /*
       LDY
       addressing  assembler    opc  bytes  cycles
       immediate   LDY #$FF     A0   2      2
       zeropage    LDY $FF      A4   2      3
       absolute    LDY $FFFF    AC   3      4
       zeropage,X  LDY $FF,X    B4   2      4
       absolute,X  LDY $FFFF,X  BC   3      4*
    */
    spec(0xA0, Ldy, Immediate, 0),
    spec(0xA4, Ldy, ZeroPage, 0),
    spec(0xAC, Ldy, Absolute, 0),
    spec(0xB4, Ldy, ZeroPageX, 0),
    spec(0xBC, Ldy, AbsoluteX, 0),
    /*
       LSR
       addressing   assembler    opc  bytes  cycles
       zeropage     LSR $FF      46   2      5
       accumulator  LSR A        4A   1      2
       absolute     LSR $FFFF    4E   3      6
       zeropage,X   LSR $FF,X    56   2      6
       absolute,X   LSR $FFFF,X  5E   3      7
    */
    spec(0x46, Lsr, ZeroPage, 1),
    spec(0x4A, Lsr, Accumulator, 0),
    spec(0x4E, Lsr, Absolute, 1),
    spec(0x56, Lsr, ZeroPageX, 1),
    spec(0x5E, Lsr, AbsoluteX, 2),
    /*
       NOP
       addressing  assembler  opc  bytes  cycles
       implied     NOP        EA   1      2
    */
    spec(0xEA, Nop, Implied, 0),
    /*
       ORA
       addressing    assembler     opc  bytes  cycles
       (indirect,X)  ORA ($FF,X)   01   2      6
       zeropage      ORA $FF       05   2      3
       immediate     ORA #$FF      09   2      2
       absolute      ORA $FFFF     0D   3      4
       (indirect),Y  ORA ($FF),Y   11   2      5*
       zeropage,X    ORA $FF,X     15   2      4
       absolute,Y    ORA $FFFF,Y   19   3      4*
       absolute,X    ORA $FFFF,X   1D   3      4*
    */
    spec(0x01, Ora, IndirectX, 0),
    spec(0x05, Ora, ZeroPage, 0),
    spec(0x09, Ora, Immediate, 0),
    spec(0x0D, Ora, Absolute, 0),
    spec(0x11, Ora, IndirectY, 0),
    spec(0x15, Ora, ZeroPageX, 0),
    spec(0x19, Ora, AbsoluteY, 0),
    spec(0x1D, Ora, AbsoluteX, 0),
    /*
       PHA 48 (3 cycles), PHP 08 (3), PLA 68 (4), PLP 28 (4): implied
    */
    spec(0x48, Pha, Implied, 0),
    spec(0x08, Php, Implied, 0),
    spec(0x68, Pla, Implied, 0),
    spec(0x28, Plp, Implied, 0),
    /*
       ROL
       addressing   assembler    opc  bytes  cycles
       zeropage     ROL $FF      26   2      5
       accumulator  ROL A        2A   1      2
       absolute     ROL $FFFF    2E   3      6
       zeropage,X   ROL $FF,X    36   2      6
       absolute,X   ROL $FFFF,X  3E   3      7
    */
    spec(0x26, Rol, ZeroPage, 1),
    spec(0x2A, Rol, Accumulator, 0),
    spec(0x2E, Rol, Absolute, 1),
    spec(0x36, Rol, ZeroPageX, 1),
    spec(0x3E, Rol, AbsoluteX, 2),
    /*
       ROR
       addressing   assembler    opc  bytes  cycles
       zeropage     ROR $FF      66   2      5
       accumulator  ROR A        6A   1      2
       absolute     ROR $FFFF    6E   3      6
       zeropage,X   ROR $FF,X    76   2      6
       absolute,X   ROR $FFFF,X  7E   3      7
    */
    spec(0x66, Ror, ZeroPage, 1),
    spec(0x6A, Ror, Accumulator, 0),
    spec(0x6E, Ror, Absolute, 1),
    spec(0x76, Ror, ZeroPageX, 1),
    spec(0x7E, Ror, AbsoluteX, 2),
    /*
       RTI 40 (6 cycles), RTS 60 (6 cycles): implied
    */
    spec(0x40, Rti, Implied, 0),
    spec(0x60, Rts, Implied, 0),
    /*
       SBC
       addressing    assembler    opc  bytes  cycles
       (indirect,X)  SBC ($FF,X)  E1   2      6
       zeropage      SBC $FF      E5   2      3
       immediate     SBC #$FF     E9   2      2
       absolute      SBC $FFFF    ED   3      4
       (indirect),Y  SBC ($FF),Y  F1   2      5*
       zeropage,X    SBC $FF,X    F5   2      4
       absolute,Y    SBC $FFFF,Y  F9   3      4*
       absolute,X    SBC $FFFF,X  FD   3      4*
    */
    spec(0xE1, Sbc, IndirectX, 0),
    spec(0xE5, Sbc, ZeroPage, 0),
    spec(0xE9, Sbc, Immediate, 0),
    spec(0xED, Sbc, Absolute, 0),
    spec(0xF1, Sbc, IndirectY, 0),
    spec(0xF5, Sbc, ZeroPageX, 0),
    spec(0xF9, Sbc, AbsoluteY, 0),
    spec(0xFD, Sbc, AbsoluteX, 0),
    /*
       SEC 38, SED F8, SEI 78: implied, 2 cycles
    */
    spec(0x38, Sec, Implied, 0),
    spec(0xF8, Sed, Implied, 0),
    spec(0x78, Sei, Implied, 0),
    /*
       STA
       addressing    assembler    opc  bytes  cycles
       (indirect,X)  STA ($FF,X)  81   2      6
       zeropage      STA $FF      85   2      3
       absolute      STA $FFFF    8D   3      4
       (indirect),Y  STA ($FF),Y  91   2      6
       zeropage,X    STA $FF,X    95   2      4
       absolute,Y    STA $FFFF,Y  99   3      5
       absolute,X    STA $FFFF,X  9D   3      5
    */
    spec(0x81, Sta, IndirectX, 0),
    spec(0x85, Sta, ZeroPage, 0),
    spec(0x8D, Sta, Absolute, 0),
    spec(0x91, Sta, IndirectY, 1),
    spec(0x95, Sta, ZeroPageX, 0),
    spec(0x99, Sta, AbsoluteY, 1),
    spec(0x9D, Sta, AbsoluteX, 1),
    /*
       STX
       addressing  assembler  opc  bytes  cycles
       zeropage    STX $FF    86   2      3
       absolute    STX $FFFF  8E   3      4
       zeropage,Y  STX $FF,Y  96   2      4
    */
    spec(0x86, Stx, ZeroPage, 0),
    spec(0x8E, Stx, Absolute, 0),
    spec(0x96, Stx, ZeroPageY, 0),
    /*
       STY
       addressing  assembler  opc  bytes  cycles
       zeropage    STY $FF    84   2      3
       absolute    STY $FFFF  8C   3      4
       zeropage,X  STY $FF,X  94   2      4
    */
    spec(0x84, Sty, ZeroPage, 0),
    spec(0x8C, Sty, Absolute, 0),
    spec(0x94, Sty, ZeroPageX, 0),
    /*
       TAX AA, TAY A8, TSX BA, TXA 8A, TXS 9A, TYA 98: implied, 2 cycles
    */
    spec(0xAA, Tax, Implied, 0),
    spec(0xA8, Tay, Implied, 0),
    spec(0xBA, Tsx, Implied, 0),
    spec(0x8A, Txa, Implied, 0),
    spec(0x9A, Txs, Implied, 0),
    spec(0x98, Tya, Implied, 0),
];
