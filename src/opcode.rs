/// # Opcodes
///
/// LS-8 opcodes are a single byte laid out as `AABCDDDD`:
/// - `AA` the number of operand bytes that follow the opcode (0, 1 or 2)
/// - `B` whether the instruction is handled by the ALU
/// - `C` whether the instruction may set the program counter itself
/// - `DDDD` an identifier that distinguishes instructions sharing the bits above
///
/// Operands always occupy the bytes immediately after the opcode.
pub trait Opcode
where
    Self: Sized,
{
    /// Returns how many operand bytes trail the opcode.
    fn operand_count(&self) -> u8;

    /// Returns the distance from this opcode to the next instruction.
    fn instruction_len(&self) -> u8 {
        1 + self.operand_count()
    }
}

impl Opcode for u8 {
    fn operand_count(&self) -> u8 {
        self >> 6
    }
}
