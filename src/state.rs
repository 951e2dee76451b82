use std::cmp::Ordering;

use crate::constants::{FLAG_EQUAL, FLAG_GREATER, FLAG_LESS, REGISTER_COUNT, SP, STACK_START};
use crate::memory::Memory;

/// A snapshot of the LS-8 internal state
///
/// ## CPU
/// Registers
/// - (reg) 8 8-bit registers (R0..R7)
///     - R0..R6 are general purpose
///     - R7 is the stack pointer, starting at 0xF4
/// - (fl) the flags register, written only by CMP
///
/// Counter
/// - (pc) an 8-bit program counter
///
/// ## Memory
/// - 256 bytes of addressable memory
///     - the program is loaded at 0x00
///     - the stack grows down from 0xF4
///
/// ## Output
/// - (output) a value printed by PRN that the machine has not yet written out
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub reg: [u8; REGISTER_COUNT],
    pub fl: Flags,
    pub pc: u8,
    pub memory: Memory,
    pub halted: bool,
    pub output: Option<u8>,
}

impl State {
    pub fn new() -> Self {
        let mut reg = [0; REGISTER_COUNT];
        reg[SP] = STACK_START;

        State {
            reg,
            fl: Flags::default(),
            pc: 0,
            memory: Memory::new(),
            halted: false,
            output: None,
        }
    }

    pub fn sp(&self) -> u8 {
        self.reg[SP]
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// # Flags
/// The status byte `00000LGE`. At most one of E, G and L is set; CMP always sets exactly one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Flags(u8);

impl Flags {
    /// The flags CMP produces when comparing `a` to `b`
    pub fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Flags(FLAG_LESS),
            Ordering::Greater => Flags(FLAG_GREATER),
            Ordering::Equal => Flags(FLAG_EQUAL),
        }
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn equal(self) -> bool {
        self.0 & FLAG_EQUAL != 0
    }

    pub fn greater(self) -> bool {
        self.0 & FLAG_GREATER != 0
    }

    pub fn less(self) -> bool {
        self.0 & FLAG_LESS != 0
    }
}
