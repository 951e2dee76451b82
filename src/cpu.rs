use std::io::{self, BufRead, Stdout, Write};

use log::{debug, info, trace};

use crate::constants::{HALT_NOTICE, SP};
use crate::error::{CpuError, LoadError};
use crate::instruction::Instruction;
use crate::loader::parse_program;
use crate::operations::Operands;
use crate::state::{Flags, State};

/// Where the machine is in its lifecycle
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    /// Stopped by HLT
    Halted,
    /// Stopped by an error; HLT was never reached
    Aborted,
}

/// # LS-8
/// An 8-bit machine with 8 registers and 256 bytes of memory.
///
/// Tracks:
///  - current `state`
///  - its `status`
///  - the `output` that PRN and HLT write lines to
///
/// Supplies interfaces for:
/// - loading programs
/// - stepping or running the CPU
/// - inspecting registers, flags and memory
pub struct Cpu<W: Write> {
    state: State,
    status: Status,
    output: W,
}

impl Cpu<Stdout> {
    pub fn new() -> Self {
        Cpu::with_output(io::stdout())
    }
}

impl Default for Cpu<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Cpu<W> {
    pub fn with_output(output: W) -> Self {
        Cpu {
            state: State::new(),
            status: Status::Running,
            output,
        }
    }

    /// Load a program image from a source of binary-literal lines
    ///
    /// # Arguments
    /// * `reader` a reader over the text of a program image
    ///
    /// Returns the number of bytes placed in memory.
    pub fn load_program(&mut self, reader: &mut dyn BufRead) -> Result<usize, LoadError> {
        let program = parse_program(reader)?;
        self.load_bytes(&program)
    }

    /// Load an already decoded program into memory starting at address 0
    pub fn load_bytes(&mut self, program: &[u8]) -> Result<usize, LoadError> {
        self.state.memory.load(program)?;
        debug!("loaded {} bytes", program.len());
        Ok(program.len())
    }

    /// Runs until the CPU halts or fails
    pub fn run(&mut self) -> Result<Status, CpuError> {
        while self.status == Status::Running {
            self.step()?;
        }
        Ok(self.status)
    }

    /// Advances the CPU by a single cycle
    /// - does nothing once halted or aborted
    /// - fetches the opcode at PC and the two bytes after it
    /// - executes the opcode, committing the new state only if it succeeds
    /// - writes out anything the instruction printed
    pub fn step(&mut self) -> Result<Status, CpuError> {
        if self.status != Status::Running {
            return Ok(self.status);
        }

        let operands = self.fetch();
        let instruction = match Instruction::decode(operands.op) {
            Some(instruction) => instruction,
            None => {
                self.status = Status::Aborted;
                return Err(CpuError::InvalidInstruction {
                    op: operands.op,
                    pc: self.state.pc,
                });
            }
        };
        trace!("{} {}", self.trace(), instruction);

        let state = match instruction.operation()(operands, &self.state) {
            Ok(state) => state,
            Err(e) => {
                self.status = Status::Aborted;
                return Err(e);
            }
        };
        self.state = State {
            output: None,
            ..state
        };

        if let Some(value) = state.output {
            self.emit(&value.to_string())?;
        }
        if state.halted {
            info!("halted at {:#04x}", self.state.pc);
            self.status = Status::Halted;
            self.emit(HALT_NOTICE)?;
        }
        Ok(self.status)
    }

    /// Gets the opcode pointed at by the pc along with both of the bytes after it
    fn fetch(&self) -> Operands {
        let pc = self.state.pc;
        Operands {
            op: self.state.memory.read(pc),
            a: self.state.memory.read(pc.wrapping_add(1)),
            b: self.state.memory.read(pc.wrapping_add(2)),
        }
    }

    fn emit(&mut self, line: &str) -> Result<(), CpuError> {
        if let Err(e) = writeln!(self.output, "{}", line) {
            self.status = Status::Aborted;
            return Err(e.into());
        }
        Ok(())
    }

    /// Renders `TRACE: PC | op a b | R0..R7` in hex
    pub fn trace(&self) -> String {
        let operands = self.fetch();
        let registers: String = self
            .state
            .reg
            .iter()
            .map(|r| format!(" {:02X}", r))
            .collect();
        format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |{}",
            self.state.pc, operands.op, operands.a, operands.b, registers
        )
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_halted(&self) -> bool {
        self.status == Status::Halted
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Returns R`index`, or `None` past R7
    pub fn register(&self, index: u8) -> Option<u8> {
        self.state.reg.get(index as usize).copied()
    }

    pub fn pc(&self) -> u8 {
        self.state.pc
    }

    pub fn sp(&self) -> u8 {
        self.state.reg[SP]
    }

    pub fn flags(&self) -> Flags {
        self.state.fl
    }

    /// Gives back the output sink, e.g. to inspect what a test program printed
    pub fn into_output(self) -> W {
        self.output
    }
}
