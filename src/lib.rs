#[macro_use]
extern crate num_derive;

pub mod codec;
pub mod constants;
pub mod cpu;
pub mod driver;
pub mod memory;
pub mod opcode;
pub mod register;

pub type Word = u32;

pub use codec::{decode, encode, Instruction};
pub use cpu::tick;
pub use driver::{run, run_with_hook};
pub use memory::Memory;
pub use opcode::{DecodedOpcode, Opcode};
pub use register::{RegisterFile, RegisterId};

#[cfg(test)]
mod tests {
    use super::*;

    fn test_program(program: &[Word]) -> (Memory, RegisterFile) {
        let image: Vec<i32> = program.iter().map(|w| *w as i32).collect();
        let mut memory = Memory::from(image.as_slice());
        let mut registers = RegisterFile::new();
        run(&mut memory, &mut registers);
        (memory, registers)
    }

    #[test]
    fn halt_only() {
        let program = [encode(Instruction::new(
            DecodedOpcode::Known(Opcode::Halt),
            0,
            0,
            0,
        ))];
        let (_, registers) = test_program(&program);
        assert_eq!(registers.get(RegisterId::Ip), 0);
        assert_eq!(registers.get(RegisterId::R0), 0);
        assert_eq!(registers.get(RegisterId::R1), 0);
        assert_eq!(registers.get(RegisterId::R2), 0);
        assert_eq!(registers.get(RegisterId::R3), 0);
        assert_eq!(registers.get(RegisterId::R4), 0);
    }

    #[test]
    fn program_add() {
        let program = [
            encode(Instruction::new(
                DecodedOpcode::Known(Opcode::LoadImmediate),
                0,
                0,
                42,
            )),
            encode(Instruction::new(
                DecodedOpcode::Known(Opcode::LoadImmediate),
                0,
                1,
                64,
            )),
            encode(Instruction::new(DecodedOpcode::Known(Opcode::Add), 1, 0, 0)),
            encode(Instruction::new(DecodedOpcode::Known(Opcode::Halt), 0, 0, 0)),
        ];
        let (_, registers) = test_program(&program);
        assert_eq!(registers.get(RegisterId::R0), 106);
    }
}
