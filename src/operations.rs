use crate::constants::{ADD, CMP, MUL, REGISTER_COUNT, SP};
use crate::error::CpuError;
use crate::opcode::Opcode;
use crate::state::{Flags, State};

/// The opcode being executed along with the two bytes that follow it.
/// Both operand bytes are always fetched; instructions ignore the ones they don't take.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Operands {
    pub op: u8,
    pub a: u8,
    pub b: u8,
}

/// Resolves a register operand to an index into `State::reg`
fn register(r: u8) -> Result<usize, CpuError> {
    if (r as usize) < REGISTER_COUNT {
        Ok(r as usize)
    } else {
        Err(CpuError::InvalidRegister(r))
    }
}

/// The address of the instruction after this one
fn next_pc(operands: Operands, state: &State) -> u8 {
    state.pc.wrapping_add(operands.op.instruction_len())
}

/// R[a] = b
pub fn ldi(operands: Operands, state: &State) -> Result<State, CpuError> {
    let mut reg = state.reg;
    reg[register(operands.a)?] = operands.b;
    Ok(State {
        pc: next_pc(operands, state),
        reg,
        ..*state
    })
}

/// print(R[a])
pub fn prn(operands: Operands, state: &State) -> Result<State, CpuError> {
    Ok(State {
        pc: next_pc(operands, state),
        output: Some(state.reg[register(operands.a)?]),
        ..*state
    })
}

/// halt
pub fn hlt(operands: Operands, state: &State) -> Result<State, CpuError> {
    Ok(State {
        pc: next_pc(operands, state),
        halted: true,
        ..*state
    })
}

/// R[a] = R[a] op R[b]
///
/// Handles every instruction with the ALU bit set:
/// - ADD and MUL wrap at 8 bits
/// - CMP leaves the registers alone and sets exactly one of L, G or E
pub fn alu(operands: Operands, state: &State) -> Result<State, CpuError> {
    let a = register(operands.a)?;
    let b = register(operands.b)?;
    let mut reg = state.reg;
    let mut fl = state.fl;
    match operands.op {
        ADD => reg[a] = reg[a].wrapping_add(reg[b]),
        MUL => reg[a] = reg[a].wrapping_mul(reg[b]),
        CMP => fl = Flags::from_ordering(reg[a].cmp(&reg[b])),
        other => return Err(CpuError::UnsupportedAluOperation(other)),
    }
    Ok(State {
        pc: next_pc(operands, state),
        reg,
        fl,
        ..*state
    })
}

/// SP -= 1; MEM[SP] = R[a]
pub fn push(operands: Operands, state: &State) -> Result<State, CpuError> {
    let a = register(operands.a)?;
    let mut reg = state.reg;
    reg[SP] = reg[SP].wrapping_sub(1);
    let mut memory = state.memory;
    memory.write(reg[SP], reg[a]);
    Ok(State {
        pc: next_pc(operands, state),
        reg,
        memory,
        ..*state
    })
}

/// R[a] = MEM[SP]; SP += 1
pub fn pop(operands: Operands, state: &State) -> Result<State, CpuError> {
    let a = register(operands.a)?;
    let mut reg = state.reg;
    reg[a] = state.memory.read(reg[SP]);
    reg[SP] = reg[SP].wrapping_add(1);
    Ok(State {
        pc: next_pc(operands, state),
        reg,
        ..*state
    })
}

/// SP -= 1; MEM[SP] = return address; PC = R[a]
pub fn call(operands: Operands, state: &State) -> Result<State, CpuError> {
    let a = register(operands.a)?;
    let mut reg = state.reg;
    reg[SP] = reg[SP].wrapping_sub(1);
    let mut memory = state.memory;
    memory.write(reg[SP], next_pc(operands, state));
    Ok(State {
        pc: reg[a],
        reg,
        memory,
        ..*state
    })
}

/// PC = MEM[SP]; SP += 1
pub fn ret(_operands: Operands, state: &State) -> Result<State, CpuError> {
    let mut reg = state.reg;
    let pc = state.memory.read(reg[SP]);
    reg[SP] = reg[SP].wrapping_add(1);
    Ok(State { pc, reg, ..*state })
}

/// PC = R[a]
pub fn jmp(operands: Operands, state: &State) -> Result<State, CpuError> {
    Ok(State {
        pc: state.reg[register(operands.a)?],
        ..*state
    })
}

/// if E then PC = R[a]
pub fn jeq(operands: Operands, state: &State) -> Result<State, CpuError> {
    let target = state.reg[register(operands.a)?];
    let pc = if state.fl.equal() {
        target
    } else {
        next_pc(operands, state)
    };
    Ok(State { pc, ..*state })
}

/// if !E then PC = R[a]
pub fn jne(operands: Operands, state: &State) -> Result<State, CpuError> {
    let target = state.reg[register(operands.a)?];
    let pc = if state.fl.equal() {
        next_pc(operands, state)
    } else {
        target
    };
    Ok(State { pc, ..*state })
}
