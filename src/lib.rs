pub use cpu::{Cpu, Status};
pub use error::{CpuError, LoadError};
pub use instruction::{Instruction, Operation};
pub use loader::{load_file, parse_program};
pub use operations::Operands;

pub mod constants;
mod cpu;
mod error;
mod instruction;
mod loader;
pub mod memory;
pub mod opcode;
mod operations;
pub mod state;
