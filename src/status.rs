//! # Processor Status Register
//!
//! The 6502 status register P packs seven flags into one byte
//! (bit 5, the "constant" bit, has no storage on real silicon and reads
//! as 1 whenever the register is pushed to the stack):
//!
//! ```text
//! bit:   7 6 5 4 3 2 1 0
//! flag:  N V - B D I Z C
//! ```
//!
//! Two of the bits are special:
//!
//! - **Constant (bit 5)** is forced to 1 when the status byte is pushed
//!   and forced to 1 again when a byte is pulled back into the register.
//! - **Break (bit 4)** only ever appears on the stack. BRK and PHP push
//!   the byte with it set; IRQ and NMI push it clear; PLP and RTI ignore
//!   whatever value was pulled and clear it in the register.
//!
//! [`Status`] is the packed byte; [`Flags`] is the boolean projection
//! used where individual flags are more convenient to talk about.

use std::fmt;

/// Packed 8-bit status register.
///
/// # Examples
///
/// ```
/// use core6502::Status;
///
/// let mut p = Status::default();
/// p.set_carry(true);
/// p.set_negative(true);
/// assert_eq!(p.bits(), 0x81);
/// assert_eq!(p.to_string(), "N v - b d i z C");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Status(u8);

impl Status {
    /// Carry flag mask (C). After SBC, C set means "no borrow occurred".
    pub const CARRY: u8 = 0x01;
    /// Zero flag mask (Z).
    pub const ZERO: u8 = 0x02;
    /// Interrupt-disable flag mask (I).
    pub const INTERRUPT: u8 = 0x04;
    /// Decimal-mode flag mask (D). Selects packed-BCD ADC/SBC.
    pub const DECIMAL: u8 = 0x08;
    /// Break flag mask (B). Only meaningful in a pushed status byte.
    pub const BREAK: u8 = 0x10;
    /// Constant flag mask. Forced to 1 in every pushed status byte.
    pub const CONSTANT: u8 = 0x20;
    /// Overflow flag mask (V).
    pub const OVERFLOW: u8 = 0x40;
    /// Negative flag mask (N).
    pub const NEGATIVE: u8 = 0x80;

    /// Builds a status register from a raw byte, as-is.
    pub fn from_bits(bits: u8) -> Self {
        Status(bits)
    }

    /// Builds a status register from a byte pulled off the stack.
    ///
    /// Applies the pull rule: Constant is forced to 1 and Break is
    /// cleared, since neither has storage in the register.
    pub fn from_pull(bits: u8) -> Self {
        Status((bits | Self::CONSTANT) & !Self::BREAK)
    }

    /// The raw byte.
    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn carry(self) -> bool {
        self.0 & Self::CARRY != 0
    }

    pub fn zero(self) -> bool {
        self.0 & Self::ZERO != 0
    }

    pub fn interrupt(self) -> bool {
        self.0 & Self::INTERRUPT != 0
    }

    pub fn decimal(self) -> bool {
        self.0 & Self::DECIMAL != 0
    }

    pub fn brk(self) -> bool {
        self.0 & Self::BREAK != 0
    }

    pub fn constant(self) -> bool {
        self.0 & Self::CONSTANT != 0
    }

    pub fn overflow(self) -> bool {
        self.0 & Self::OVERFLOW != 0
    }

    pub fn negative(self) -> bool {
        self.0 & Self::NEGATIVE != 0
    }

    pub fn set_carry(&mut self, value: bool) {
        self.set(Self::CARRY, value);
    }

    pub fn set_zero(&mut self, value: bool) {
        self.set(Self::ZERO, value);
    }

    pub fn set_interrupt(&mut self, value: bool) {
        self.set(Self::INTERRUPT, value);
    }

    pub fn set_decimal(&mut self, value: bool) {
        self.set(Self::DECIMAL, value);
    }

    pub fn set_brk(&mut self, value: bool) {
        self.set(Self::BREAK, value);
    }

    pub fn set_overflow(&mut self, value: bool) {
        self.set(Self::OVERFLOW, value);
    }

    pub fn set_negative(&mut self, value: bool) {
        self.set(Self::NEGATIVE, value);
    }

    /// Returns the register with the Break bit set, for BRK/PHP pushes.
    pub fn with_break_set(self) -> Self {
        Status(self.0 | Self::BREAK)
    }

    /// Returns the register with the Break bit clear, for IRQ/NMI pushes.
    pub fn with_break_cleared(self) -> Self {
        Status(self.0 & !Self::BREAK)
    }

    /// Returns the register with the Constant bit forced to 1, the form
    /// every stack push uses.
    pub fn with_constant_set(self) -> Self {
        Status(self.0 | Self::CONSTANT)
    }

    /// Projects the register onto its boolean flag view.
    pub fn to_flags(self) -> Flags {
        Flags {
            carry: self.carry(),
            zero: self.zero(),
            interrupt: self.interrupt(),
            decimal: self.decimal(),
            brk: self.brk(),
            overflow: self.overflow(),
            negative: self.negative(),
        }
    }

    fn set(&mut self, mask: u8, value: bool) {
        if value {
            self.0 |= mask;
        } else {
            self.0 &= !mask;
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_flags().fmt(f)
    }
}

/// Boolean view of the seven stored status flags.
///
/// Converting back with [`Flags::to_status`] forces the Constant bit to
/// 1, mirroring what a status push produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    pub carry: bool,
    pub zero: bool,
    pub interrupt: bool,
    pub decimal: bool,
    pub brk: bool,
    pub overflow: bool,
    pub negative: bool,
}

impl Flags {
    /// Packs the flags back into a status byte with Constant forced to 1.
    pub fn to_status(self) -> Status {
        let mut result = Status(Status::CONSTANT);
        result.set_carry(self.carry);
        result.set_zero(self.zero);
        result.set_interrupt(self.interrupt);
        result.set_decimal(self.decimal);
        result.set_brk(self.brk);
        result.set_overflow(self.overflow);
        result.set_negative(self.negative);
        result
    }
}

impl fmt::Display for Flags {
    /// Renders as `N V - B D I Z C`: uppercase when set, lowercase when
    /// clear, with the unused column always shown as `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn case(set: bool, letter: char) -> char {
            if set {
                letter.to_ascii_uppercase()
            } else {
                letter
            }
        }
        write!(
            f,
            "{} {} - {} {} {} {} {}",
            case(self.negative, 'n'),
            case(self.overflow, 'v'),
            case(self.brk, 'b'),
            case(self.decimal, 'd'),
            case(self.interrupt, 'i'),
            case(self.zero, 'z'),
            case(self.carry, 'c'),
        )
    }
}
