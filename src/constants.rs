/// Number of addressable bytes; addresses are 8 bits wide
pub const MEMORY_SIZE: usize = 256;

/// Number of general purpose registers (R0..R7)
pub const REGISTER_COUNT: usize = 8;

/// R7 is reserved as the stack pointer
pub const SP: usize = 7;

/// The stack grows down from just below the reserved top of memory
pub const STACK_START: u8 = 0xF4;

/// Flag bits written by CMP; `00000LGE`
pub const FLAG_EQUAL: u8 = 0b0000_0001;
pub const FLAG_GREATER: u8 = 0b0000_0010;
pub const FLAG_LESS: u8 = 0b0000_0100;

pub const LDI: u8 = 0b1000_0010;
pub const PRN: u8 = 0b0100_0111;
pub const HLT: u8 = 0b0000_0001;
pub const ADD: u8 = 0b1010_0000;
pub const MUL: u8 = 0b1010_0010;
pub const PUSH: u8 = 0b0100_0101;
pub const POP: u8 = 0b0100_0110;
pub const CALL: u8 = 0b0101_0000;
pub const RET: u8 = 0b0001_0001;
pub const CMP: u8 = 0b1010_0111;
pub const JMP: u8 = 0b0101_0100;
pub const JEQ: u8 = 0b0101_0101;
pub const JNE: u8 = 0b0101_0110;

/// Printed when the machine executes HLT
pub const HALT_NOTICE: &str = "Program Halted";
