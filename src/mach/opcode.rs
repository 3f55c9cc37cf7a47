use super::Cell;

/// ## Virtual machine instruction set
///
/// The Nga machine has no registers besides the instruction pointer.
/// Every operation works on the data stack, the address stack, or memory.
///
/// Four opcodes pack into one cell, low byte first. A word such as
/// `: double dup + ;` assembles to the single cell
/// `[Dup, Add, Return, Nop]`.
///
/// The numbering is part of the image format and must never change.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    Nop = 0,
    /// Push the following cell and skip over it.
    Lit = 1,

    // *** Stack manipulation
    Dup = 2,
    Drop = 3,
    Swap = 4,
    /// Move top of data stack to address stack.
    Push = 5,
    /// Move top of address stack to data stack.
    Pop = 6,

    // *** Branch control
    Jump = 7,
    Call = 8,
    /// Pop destination, then flag. Call if the flag is non-zero.
    CCall = 9,
    Return = 10,

    // *** Comparison, true is -1
    Eq = 11,
    NotEq = 12,
    Lt = 13,
    Gt = 14,

    // *** Memory
    /// Negative addresses -1 to -5 read machine state instead of memory.
    Fetch = 15,
    Store = 16,

    // *** Arithmetic and logic
    Add = 17,
    Sub = 18,
    Mul = 19,
    DivMod = 20,
    And = 21,
    Or = 22,
    Xor = 23,
    Shift = 24,

    /// Return if top of stack is zero, dropping it.
    ZeroReturn = 25,
    Halt = 26,

    // *** Host interface
    IoEnumerate = 27,
    IoQuery = 28,
    IoInteract = 29,
}

const OPCODES: [Opcode; 30] = {
    use Opcode::*;
    [
        Nop, Lit, Dup, Drop, Swap, Push, Pop, Jump, Call, CCall, Return, Eq, NotEq, Lt, Gt,
        Fetch, Store, Add, Sub, Mul, DivMod, And, Or, Xor, Shift, ZeroReturn, Halt, IoEnumerate,
        IoQuery, IoInteract,
    ]
};

impl Opcode {
    pub const COUNT: usize = 30;

    pub fn from_byte(byte: u8) -> Option<Opcode> {
        OPCODES.get(byte as usize).copied()
    }

    /// An unpacked cell holding a single opcode.
    pub fn from_cell(cell: Cell) -> Option<Opcode> {
        if cell >= 0 && (cell as usize) < Opcode::COUNT {
            Some(OPCODES[cell as usize])
        } else {
            None
        }
    }

    pub fn mnemonic(self) -> &'static str {
        use Opcode::*;
        match self {
            Nop => "no",
            Lit => "li",
            Dup => "du",
            Drop => "dr",
            Swap => "sw",
            Push => "pu",
            Pop => "po",
            Jump => "ju",
            Call => "ca",
            CCall => "cc",
            Return => "re",
            Eq => "eq",
            NotEq => "ne",
            Lt => "lt",
            Gt => "gt",
            Fetch => "fe",
            Store => "st",
            Add => "ad",
            Sub => "su",
            Mul => "mu",
            DivMod => "di",
            And => "an",
            Or => "or",
            Xor => "xo",
            Shift => "sh",
            ZeroReturn => "zr",
            Halt => "ha",
            IoEnumerate => "ie",
            IoQuery => "iq",
            IoInteract => "ii",
        }
    }

    pub fn from_mnemonic(s: &str) -> Option<Opcode> {
        OPCODES.iter().copied().find(|op| op.mnemonic() == s)
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
