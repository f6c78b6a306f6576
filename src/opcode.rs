use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::ToPrimitive;

/// The closed set of opcodes the codec and CPU agree on.
///
/// Numeric values are load-bearing: the assembler and the CPU must assign the
/// same tag to the same name, and ROM files on disk encode these values
/// directly in their first byte.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive)]
pub enum Opcode {
    /// Stops emulation. Does not advance `IP`.
    Halt = 0,
    /// `dst <- imm` (sign-extended).
    LoadImmediate = 1,
    /// `dst <- dst + src`.
    Add = 2,
    /// `dst <- src + imm`.
    AddImmediate = 3,
    /// `dst <- dst & src`.
    And = 4,
    /// `dst <- dst | src`.
    Or = 5,
    /// `dst <- dst ^ src`.
    Xor = 6,
    /// `IP <- imm - 1` (the post-execute increment lands on `imm`).
    Jump = 7,
    /// If `src == dst`, `IP <- imm - 1`.
    BranchOnEqual = 8,
    /// `dst <- src`.
    Move = 9,
    /// `dst <- memory[imm]`.
    LoadDirect = 10,
    /// `memory[imm] <- src`.
    StoreDirect = 11,
    /// `dst <- memory[reg[src]]`.
    LoadIndirect = 12,
    /// `memory[reg[src]] <- reg[dst]`.
    StoreIndirect = 13,
    /// Assembler-only sentinel. Never valid in an executable image.
    Invalid = 14,
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// The result of interpreting a raw opcode byte: either one of the fourteen
/// named opcodes (or the `Invalid` sentinel), or a byte outside `0..=14` that
/// the codec round-trips but the CPU refuses to execute.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DecodedOpcode {
    Known(Opcode),
    Unknown(u8),
}

impl DecodedOpcode {
    pub fn from_byte(byte: u8) -> DecodedOpcode {
        match num_traits::FromPrimitive::from_u8(byte) {
            Some(op) => DecodedOpcode::Known(op),
            None => DecodedOpcode::Unknown(byte),
        }
    }

    pub fn to_byte(self) -> u8 {
        match self {
            DecodedOpcode::Known(op) => op.to_u8().unwrap(),
            DecodedOpcode::Unknown(byte) => byte,
        }
    }
}

impl std::fmt::Display for DecodedOpcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DecodedOpcode::Known(op) => write!(f, "{}", op),
            DecodedOpcode::Unknown(byte) => write!(f, "unknown(0x{:02x})", byte),
        }
    }
}
