use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop the machine. Any of them leaves the CPU aborted rather than halted.
#[derive(Debug, Error)]
pub enum CpuError {
    /// The fetched byte is not in the instruction table.
    #[error("not a valid instruction: {op:#04x} at {pc:#04x}")]
    InvalidInstruction { op: u8, pc: u8 },
    /// The ALU was handed an opcode it has no operation for.
    #[error("unsupported ALU operation: {0:#04x}")]
    UnsupportedAluOperation(u8),
    /// A register operand names a register past R7.
    #[error("register index {0} out of bounds")]
    InvalidRegister(u8),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Errors raised while reading a program image.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("program is {0} bytes but memory holds 256")]
    ProgramTooLarge(usize),
}
