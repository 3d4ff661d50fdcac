// rustasm/instruction.rs

/// Encoding family of an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    R,
    I,
    IBranch,
}

/// Every instruction the core knows how to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionKind {
    // R-type, [d, s, t]
    Add, Sub, And, Or, Xor,

    // I-type, [t, s|base, imm16]
    Addi, Ld, St,

    // I-branch, [s, t, target]
    Beq,

    // I-type, [t, imm16]
    Grub,

    // R-type with two operands, [d, s]
    Tripled, Deep, Prim,

    // I-type, [t, base, off16]
    Loaded,
}

impl InstructionKind {
    /// Number of decoded operands the instruction expects.
    pub fn arity(self) -> usize {
        use InstructionKind::*;
        match self {
            Grub | Tripled | Deep | Prim => 2,
            Add | Sub | And | Or | Xor | Addi | Ld | St | Beq | Loaded => 3,
        }
    }
}

/// Control-flow request produced by an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Continue with the next instruction.
    Next,
    /// Redirect the program counter to the given target. Resolving the target
    /// is up to whoever owns the program counter.
    Branch(i32),
}
