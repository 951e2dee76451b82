use std::fmt;

use crate::constants::*;
use crate::error::CpuError;
use crate::operations::*;
use crate::state::State;

/// A handler applies one instruction to a state and returns the next state.
pub type Operation = fn(operands: Operands, state: &State) -> Result<State, CpuError>;

/// Every instruction the LS-8 understands
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    Ldi,
    Prn,
    Hlt,
    Add,
    Mul,
    Push,
    Pop,
    Call,
    Ret,
    Cmp,
    Jmp,
    Jeq,
    Jne,
}

impl Instruction {
    /// Looks an opcode up in the instruction table.
    /// Returns `None` for bytes that aren't instructions.
    pub fn decode(op: u8) -> Option<Self> {
        let instruction = match op {
            LDI => Instruction::Ldi,
            PRN => Instruction::Prn,
            HLT => Instruction::Hlt,
            ADD => Instruction::Add,
            MUL => Instruction::Mul,
            PUSH => Instruction::Push,
            POP => Instruction::Pop,
            CALL => Instruction::Call,
            RET => Instruction::Ret,
            CMP => Instruction::Cmp,
            JMP => Instruction::Jmp,
            JEQ => Instruction::Jeq,
            JNE => Instruction::Jne,
            _ => return None,
        };
        Some(instruction)
    }

    /// Selects the Operation that executes this instruction
    pub fn operation(self) -> Operation {
        match self {
            Instruction::Ldi => ldi,
            Instruction::Prn => prn,
            Instruction::Hlt => hlt,
            Instruction::Add | Instruction::Mul | Instruction::Cmp => alu,
            Instruction::Push => push,
            Instruction::Pop => pop,
            Instruction::Call => call,
            Instruction::Ret => ret,
            Instruction::Jmp => jmp,
            Instruction::Jeq => jeq,
            Instruction::Jne => jne,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Instruction::Ldi => "LDI",
            Instruction::Prn => "PRN",
            Instruction::Hlt => "HLT",
            Instruction::Add => "ADD",
            Instruction::Mul => "MUL",
            Instruction::Push => "PUSH",
            Instruction::Pop => "POP",
            Instruction::Call => "CALL",
            Instruction::Ret => "RET",
            Instruction::Cmp => "CMP",
            Instruction::Jmp => "JMP",
            Instruction::Jeq => "JEQ",
            Instruction::Jne => "JNE",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod test_instruction {
    use super::*;

    fn execute(op: u8, a: u8, b: u8, state: &State) -> State {
        let operation = Instruction::decode(op).unwrap().operation();
        operation(Operands { op, a, b }, state).unwrap()
    }

    #[test]
    fn test_decode_covers_table() {
        let known = (0..=0xFFu8)
            .filter(|&op| Instruction::decode(op).is_some())
            .count();
        assert_eq!(known, 13);
        assert_eq!(Instruction::decode(CALL), Some(Instruction::Call));
        assert_eq!(Instruction::decode(CMP), Some(Instruction::Cmp));
    }

    #[test]
    fn test_decode_rejects_unknown() {
        assert_eq!(Instruction::decode(0x00), None);
        assert_eq!(Instruction::decode(0xA1), None);
        assert_eq!(Instruction::decode(0xFF), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Instruction::Jeq.to_string(), "JEQ");
    }

    #[test]
    fn test_82_ldi() {
        let state = execute(LDI, 0x2, 0x2A, &State::new());
        assert_eq!(state.reg[0x2], 0x2A);
        assert_eq!(state.pc, 0x3);
    }

    #[test]
    fn test_47_prn() {
        let mut state = State::new();
        state.reg[0x3] = 0x63;
        let state = execute(PRN, 0x3, 0x0, &state);
        assert_eq!(state.output, Some(0x63));
        assert_eq!(state.pc, 0x2);
    }

    #[test]
    fn test_01_hlt() {
        let state = execute(HLT, 0x0, 0x0, &State::new());
        assert!(state.halted);
        assert_eq!(state.pc, 0x1);
    }

    #[test]
    fn test_a0_add() {
        let mut state = State::new();
        state.reg[0x0] = 0x2;
        state.reg[0x1] = 0x3;
        let state = execute(ADD, 0x0, 0x1, &state);
        assert_eq!(state.reg[0x0], 0x5);
        assert_eq!(state.pc, 0x3);
    }

    #[test]
    fn test_a2_mul() {
        let mut state = State::new();
        state.reg[0x0] = 0x8;
        state.reg[0x1] = 0x9;
        let state = execute(MUL, 0x0, 0x1, &state);
        assert_eq!(state.reg[0x0], 0x48);
    }

    #[test]
    fn test_a7_cmp_greater() {
        let mut state = State::new();
        state.reg[0x0] = 5;
        state.reg[0x1] = 3;
        let state = execute(CMP, 0x0, 0x1, &state);
        assert_eq!(state.fl.bits(), 0b010);
    }

    #[test]
    fn test_a7_cmp_less() {
        let mut state = State::new();
        state.reg[0x0] = 3;
        state.reg[0x1] = 5;
        let state = execute(CMP, 0x0, 0x1, &state);
        assert_eq!(state.fl.bits(), 0b100);
    }

    #[test]
    fn test_a7_cmp_equal() {
        let mut state = State::new();
        state.reg[0x0] = 4;
        state.reg[0x1] = 4;
        let state = execute(CMP, 0x0, 0x1, &state);
        assert_eq!(state.fl.bits(), 0b001);
    }

    #[test]
    fn test_45_push() {
        let mut state = State::new();
        state.reg[0x1] = 0xAB;
        let state = execute(PUSH, 0x1, 0x0, &state);
        assert_eq!(state.sp(), 0xF3);
        assert_eq!(state.memory.read(0xF3), 0xAB);
        assert_eq!(state.pc, 0x2);
    }

    #[test]
    fn test_46_pop() {
        let mut state = State::new();
        state.reg[SP] = 0xF3;
        state.memory.write(0xF3, 0xCD);
        let state = execute(POP, 0x1, 0x0, &state);
        assert_eq!(state.reg[0x1], 0xCD);
        assert_eq!(state.sp(), 0xF4);
    }

    #[test]
    fn test_push_pop_round_trip() {
        for _ in 0..64 {
            let mut state = State::new();
            let register = rand::random::<u8>() % 7;
            let value = rand::random::<u8>();
            state.reg[register as usize] = value;
            let sp = state.sp();

            let pushed = execute(PUSH, register, 0x0, &state);
            let mut clobbered = pushed;
            clobbered.reg[register as usize] = !value;
            let popped = execute(POP, register, 0x0, &clobbered);

            assert_eq!(popped.reg[register as usize], value);
            assert_eq!(popped.sp(), sp);
        }
    }

    #[test]
    fn test_50_call() {
        let mut state = State::new();
        state.pc = 0x10;
        state.reg[0x1] = 0x40;
        let state = execute(CALL, 0x1, 0x0, &state);
        assert_eq!(state.pc, 0x40);
        assert_eq!(state.sp(), 0xF3);
        // Return to the byte after CALL's operand
        assert_eq!(state.memory.read(0xF3), 0x12);
    }

    #[test]
    fn test_11_ret() {
        let mut state = State::new();
        state.reg[SP] = 0xF3;
        state.memory.write(0xF3, 0x12);
        let state = execute(RET, 0x0, 0x0, &state);
        assert_eq!(state.pc, 0x12);
        assert_eq!(state.sp(), 0xF4);
    }

    #[test]
    fn test_54_jmp() {
        let mut state = State::new();
        state.reg[0x2] = 0x20;
        let state = execute(JMP, 0x2, 0x0, &state);
        assert_eq!(state.pc, 0x20);
    }

    #[test]
    fn test_55_jeq_jumps() {
        let mut state = State::new();
        state.fl = crate::state::Flags::from_ordering(std::cmp::Ordering::Equal);
        state.reg[0x2] = 0x20;
        let state = execute(JEQ, 0x2, 0x0, &state);
        assert_eq!(state.pc, 0x20);
    }

    #[test]
    fn test_55_jeq_falls_through() {
        let mut state = State::new();
        state.fl = crate::state::Flags::from_ordering(std::cmp::Ordering::Less);
        state.reg[0x2] = 0x20;
        let state = execute(JEQ, 0x2, 0x0, &state);
        assert_eq!(state.pc, 0x2);
    }

    #[test]
    fn test_56_jne_jumps() {
        let mut state = State::new();
        state.fl = crate::state::Flags::from_ordering(std::cmp::Ordering::Greater);
        state.reg[0x2] = 0x20;
        let state = execute(JNE, 0x2, 0x0, &state);
        assert_eq!(state.pc, 0x20);
    }

    #[test]
    fn test_56_jne_falls_through() {
        let mut state = State::new();
        state.fl = crate::state::Flags::from_ordering(std::cmp::Ordering::Equal);
        state.reg[0x2] = 0x20;
        let state = execute(JNE, 0x2, 0x0, &state);
        assert_eq!(state.pc, 0x2);
    }
}
