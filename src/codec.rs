use crate::opcode::DecodedOpcode;
use crate::Word;
use byteorder::{ByteOrder, LittleEndian};

/// The logical form of an instruction: an opcode plus the three operand
/// fields every opcode interprets differently (register index, register
/// index, signed immediate).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Instruction {
    pub op: DecodedOpcode,
    pub src: u8,
    pub dst: u8,
    pub imm: i8,
}

impl Instruction {
    pub fn new(op: DecodedOpcode, src: u8, dst: u8, imm: i8) -> Instruction {
        Instruction { op, src, dst, imm }
    }
}

/// Packs an instruction into its wire form: four bytes, `[op, src, dst, imm]`,
/// little-endian.
pub fn encode(instruction: Instruction) -> Word {
    let bytes = [
        instruction.op.to_byte(),
        instruction.src,
        instruction.dst,
        instruction.imm as u8,
    ];
    LittleEndian::read_u32(&bytes)
}

/// Unpacks a wire-form word back into an instruction. Every `Word` decodes to
/// some `Instruction`; opcode bytes outside `0..=14` decode to
/// `DecodedOpcode::Unknown` rather than failing.
pub fn decode(word: Word) -> Instruction {
    let mut bytes = [0u8; 4];
    LittleEndian::write_u32(&mut bytes, word);
    Instruction::new(
        DecodedOpcode::from_byte(bytes[0]),
        bytes[1],
        bytes[2],
        bytes[3] as i8,
    )
}
